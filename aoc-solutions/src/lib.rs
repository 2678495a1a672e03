//! Advent of Code puzzle solutions with automatic registration
//!
//! Each day lives in its own module under `my_solutions::year_2024` and
//! registers itself through `#[derive(AutoRegisterSolver)]`, so linking this
//! crate is enough for `SolverRegistryBuilder::register_all_plugins` to find
//! every day.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;

pub mod utils;
