//! The puzzle-day contract: parse once, then solve parts against the parsed data

use crate::error::{ParseError, SolveError};

/// Parses a day's raw input into the data its parts work on.
///
/// Parsing is the "setup" phase of a day and is timed separately from the
/// parts.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("3\n1\n2").unwrap(), vec![3, 1, 2]);
/// ```
pub trait AocParser {
    /// The data shared by every part of the day.
    ///
    /// Owned structures are the common case; borrowing from the input
    /// (`&'a str`, `Vec<&'a [u8]>`) works when no transformation is needed.
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a day.
///
/// Parts take the shared data mutably so a later part can reuse work a
/// previous part stored there. A part must still produce the right answer
/// when it runs first.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Depths {
///     fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(depths.windows(2).filter(|w| w[1] > w[0]).count().to_string())
///     }
/// }
///
/// let mut depths = Depths::parse("1\n3\n2\n5").unwrap();
/// assert_eq!(<Depths as PartSolver<1>>::solve(&mut depths).unwrap(), "2");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete day: the number of parts and dispatch from a runtime part
/// number to the matching [`PartSolver`].
///
/// Usually derived with `#[derive(AocSolver)]` and
/// `#[aoc_solver(max_parts = 2)]`, which generates the `match` below.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl PartSolver<1> for Echo {
///     fn solve(text: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(text.to_string())
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => <Self as PartSolver<1>>::solve(shared),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut text = Echo::parse(" hi \n").unwrap();
/// assert_eq!(Echo::solve_part(&mut text, 1).unwrap(), "hi");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this day has
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - No solver for this part
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked dispatch, used by solver instances.
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`] but rejects `0` and parts above `PARTS`
    /// without calling into the day.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
