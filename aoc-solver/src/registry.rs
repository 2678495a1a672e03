//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::expect::Expectations;
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// First Advent of Code year
pub const BASE_YEAR: u16 = 2015;
/// Number of years the storage covers (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

// ============================================================================
// Factory Types
// ============================================================================

/// Parses an input into a ready-to-solve instance. Shared across worker
/// threads, hence `Send + Sync`.
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
    /// Answers recorded for the day
    pub expected: Expectations,
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
    expected: Expectations,
}

impl SolverFactoryEntry {
    fn info(&self, year: u16, day: u8) -> FactoryInfo {
        FactoryInfo {
            year,
            day,
            parts: self.parts,
            expected: self.expected,
        }
    }
}

// ============================================================================
// Storage
// ============================================================================

/// Immutable storage for solver factories with O(1) access.
///
/// A flat `Vec` indexed by `(year - 2015) * 25 + (day - 1)`, so iteration is
/// always in `(year, day)` order.
pub struct SolverFactoryStorage {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverFactoryStorage {
    /// Metadata for every registered day, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                e.info(year, day)
            })
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        calc_index(year, day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| e.info(year, day))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for a [`SolverRegistry`].
///
/// Rejects duplicate `(year, day)` pairs and days outside the supported
/// range. The registry is immutable once built.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, DynSolver, Expectations, ParseError, PartSolver, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Lines;
///
/// impl AocParser for Lines {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl PartSolver<1> for Lines {
///     fn solve(lines: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(lines.len().to_string())
///     }
/// }
///
/// impl Solver for Lines {
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
/// let registry = SolverRegistryBuilder::new()
///     .register_solver::<Lines>(2024, 1, Expectations::NONE)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2024, 1, "a\nb\nc").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "3");
/// ```
pub struct SolverRegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a factory with its part count and recorded answers.
    ///
    /// Fails if the year/day is out of range or already registered.
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        expected: Expectations,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            parts,
            expected,
        });
        Ok(self)
    }

    /// Register a [`Solver`] type directly
    pub fn register_solver<S>(
        self,
        year: u16,
        day: u8,
        expected: Expectations,
    ) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_factory(year, day, S::PARTS, expected, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance.with_expectations(expected)))
        })
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`.
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2024 && plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin
                    .solver
                    .register_with(self, plugin.year, plugin.day, plugin.expected)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverFactoryStorage {
                entries: self.entries,
            },
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Immutable registry mapping `(year, day)` to solver factories
pub struct SolverRegistry {
    storage: SolverFactoryStorage,
}

impl SolverRegistry {
    /// Read-only access to the factory storage for iteration and lookup
    pub fn storage(&self) -> &SolverFactoryStorage {
        &self.storage
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.storage.get_info(year, day)
    }

    /// Parse `input` with the factory registered for `year`/`day`
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;

        let entry = self
            .storage
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

// ============================================================================
// Plugins
// ============================================================================

/// Object-safe registration hook, so plugins of different solver types can
/// live in one `inventory` collection.
///
/// Implemented for every [`Solver`].
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
        expected: Expectations,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    /// Number of parts the solver has
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
        expected: Expectations,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day, expected)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted for automatic registration.
///
/// Normally produced by `#[derive(AutoRegisterSolver)]`; can also be
/// submitted by hand:
///
/// ```no_run
/// use aoc_solver::{AocParser, Expectations, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// aoc_solver::inventory::submit! {
///     SolverPlugin {
///         year: 2024,
///         day: 1,
///         solver: &Day1,
///         tags: &["easy"],
///         expected: Expectations { full: &["42"], example: &["7"] },
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    /// The solver (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form tags used for filtering (e.g. "grid", "graph")
    pub tags: &'static [&'static str],
    /// Recorded answers for the full input and the example
    pub expected: Expectations,
}

inventory::collect!(SolverPlugin);
