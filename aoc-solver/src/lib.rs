//! Advent of Code Solver Library
//!
//! The contract every puzzle day implements, plus the machinery to find, run,
//! time and verify days by `(year, day)`.
//!
//! # Overview
//!
//! - [`AocParser`] turns the raw input into the day's shared data (the
//!   "setup" phase).
//! - [`PartSolver<N>`] solves part `N` against that data. Parts take the
//!   data mutably, so part 2 may reuse what part 1 left behind.
//! - [`Solver`] dispatches a runtime part number to the right `PartSolver`,
//!   usually via `#[derive(AocSolver)]`.
//! - [`SolverRegistry`] maps `(year, day)` to factories producing
//!   [`DynSolver`] instances; days register themselves with
//!   `#[derive(AutoRegisterSolver)]`.
//! - [`Expectations`] and [`verify`] compare answers with recorded ones.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, DynSolver, InputVariant, ParseError, PartSolver, SolveError, SolverRegistryBuilder, Expectations, Verdict};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Calories;
//!
//! impl AocParser for Calories {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .split("\n\n")
//!             .map(|elf| {
//!                 elf.lines()
//!                     .map(|l| l.parse::<u32>().map_err(|e| ParseError::InvalidFormat(e.to_string())))
//!                     .sum()
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Calories {
//!     fn solve(elves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         elves.sort_unstable_by(|a, b| b.cmp(a));
//!         Ok(elves[0].to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Calories {
//!     fn solve(elves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         elves.sort_unstable_by(|a, b| b.cmp(a));
//!         Ok(elves.iter().take(3).sum::<u32>().to_string())
//!     }
//! }
//!
//! const EXPECTED: Expectations = Expectations { full: &[], example: &["24", "45"] };
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Calories>(2022, 1, EXPECTED)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2022, 1, "1\n2\n\n24\n\n10\n11").unwrap();
//! let (result, verdict) = solver.check(1, InputVariant::Example).unwrap();
//! assert_eq!(result.answer, "24");
//! assert_eq!(verdict, Verdict::Verified);
//! assert!(solver.check(2, InputVariant::Example).unwrap().1.is_mismatch());
//! ```

mod error;
mod expect;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use expect::{Expectations, InputVariant, Verdict, verify};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver,
    SolverFactory, SolverFactoryStorage, SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the derive macros
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
