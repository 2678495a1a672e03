//! Memoization for recursive computations whose values depend on other
//! values of the same function.
//!
//! A [`DpProblem`] names the dependencies of an index and combines their
//! values; [`DpCache`] resolves dependencies recursively and computes each
//! index exactly once.
//!
//! # Backends
//!
//! - [`VecBackend`]: dense `usize` indices, grows on demand
//! - [`HashMapBackend`]: any `Hash + Eq` index
//!
//! # Warning: Cycle Behavior
//!
//! There is no cycle detection. Dependencies MUST form a DAG, otherwise
//! [`DpCache::get`] recurses until the stack overflows.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! /// Ways to climb `n` stairs taking 1 or 2 steps at a time
//! struct Stairs;
//!
//! impl DpProblem<usize, u64> for Stairs {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { 1 } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::builder()
//!     .backend(VecBackend::new())
//!     .problem(Stairs)
//!     .build();
//! assert_eq!(cache.get(&10), 89);
//! ```
//!
//! # Example: closures
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, HashMapBackend};
//!
//! // Stones after `blinks` blinks where every stone splits in two
//! let cache = DpCache::new(
//!     HashMapBackend::new(),
//!     |&(stone, blinks): &(u64, u8)| if blinks == 0 { vec![] } else { vec![(stone, blinks - 1); 2] },
//!     |&(_, blinks): &(u64, u8), deps: Vec<u64>| if blinks == 0 { 1 } else { deps.iter().sum() },
//! );
//! assert_eq!(cache.get(&(7, 40)), 1 << 40);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{DpCache, DpCacheBuilder};
pub use problem::{ClosureProblem, DpProblem};
