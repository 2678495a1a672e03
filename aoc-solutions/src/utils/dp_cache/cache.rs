//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::{ClosureProblem, DpProblem};

/// A memoizing cache that resolves dependencies lazily.
///
/// Each index is computed at most once; later lookups clone the cached
/// value. Interior mutability lets `get` take `&self`, so a problem can be
/// queried from inside iterator chains.
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
///
/// struct Factorial;
///
/// impl DpProblem<usize, u64> for Factorial {
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n == 0 { vec![] } else { vec![n - 1] }
///     }
///     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
///         if *n == 0 { 1 } else { (*n as u64) * deps[0] }
///     }
/// }
///
/// let cache = DpCache::with_problem(VecBackend::new(), Factorial);
/// assert_eq!(cache.get(&5), 120);
/// ```
pub struct DpCache<I, K, B, P> {
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<fn(&I) -> K>,
}

impl DpCache<(), (), (), ()> {
    /// Start building a cache; both a backend and a problem are required.
    pub fn builder() -> DpCacheBuilder<(), ()> {
        DpCacheBuilder {
            backend: (),
            problem: (),
        }
    }
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Value for `index`, computing it and its dependencies if needed.
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index) {
            return value.clone();
        }

        // No borrow may be held while dependencies recurse into `get`
        let dep_values: Vec<K> = self
            .problem
            .deps(index)
            .into_iter()
            .map(|dep| self.get(&dep))
            .collect();

        let value = self.problem.compute(index, dep_values);
        self.backend
            .borrow_mut()
            .insert(index.clone(), value.clone());
        value
    }

    /// Number of values computed so far
    pub fn len(&self) -> usize {
        self.backend.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.backend.borrow().is_empty()
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }
}

impl<I, K, B, D, C> DpCache<I, K, B, ClosureProblem<I, K, D, C>>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    /// Closure-based constructor
    pub fn new(backend: B, dep_fn: D, compute_fn: C) -> Self {
        Self::with_problem(backend, ClosureProblem::new(dep_fn, compute_fn))
    }
}

/// Builder returned by [`DpCache::builder`]
pub struct DpCacheBuilder<B, P> {
    backend: B,
    problem: P,
}

impl<B, P> DpCacheBuilder<B, P> {
    pub fn backend<B2>(self, backend: B2) -> DpCacheBuilder<B2, P> {
        DpCacheBuilder {
            backend,
            problem: self.problem,
        }
    }

    pub fn problem<P2>(self, problem: P2) -> DpCacheBuilder<B, P2> {
        DpCacheBuilder {
            backend: self.backend,
            problem,
        }
    }

    pub fn build<I, K>(self) -> DpCache<I, K, B, P>
    where
        I: Clone,
        K: Clone,
        B: Backend<I, K>,
        P: DpProblem<I, K>,
    {
        DpCache::with_problem(self.backend, self.problem)
    }
}
