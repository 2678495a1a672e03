//! Result aggregator for ordering parallel solver results
//!
//! Phases finish in any order when days or parts run in parallel. Rows are
//! buffered in a min-heap and released once every earlier expected key has
//! been printed, so output is always ordered by `(year, day, phase)`.

use crate::executor::{Phase, PhaseResult, WorkItem};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Key for ordering results, ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub phase: Phase,
}

impl ResultKey {
    /// Every key the executor will send for `work`
    pub fn for_work(work: &WorkItem) -> impl Iterator<Item = ResultKey> + use<> {
        let (year, day) = (work.year, work.day);
        work.phases().map(move |phase| ResultKey { year, day, phase })
    }
}

impl From<&PhaseResult> for ResultKey {
    fn from(r: &PhaseResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            phase: r.phase,
        }
    }
}

/// Min-heap entry ordered by [`ResultKey`]
struct OrderedResult(PhaseResult);

impl Ord for OrderedResult {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        ResultKey::from(&other.0).cmp(&ResultKey::from(&self.0))
    }
}

impl PartialOrd for OrderedResult {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for OrderedResult {}

impl PartialEq for OrderedResult {
    fn eq(&self, other: &Self) -> bool {
        ResultKey::from(&self.0) == ResultKey::from(&other.0)
    }
}

/// Aggregator that buffers results and emits them in sorted order
pub struct ResultAggregator {
    /// Keys still to be printed, smallest on top
    expected: BinaryHeap<Reverse<ResultKey>>,
    /// Received rows waiting for their turn
    pending: BinaryHeap<OrderedResult>,
}

impl ResultAggregator {
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Add a result and return any results ready for output (in order)
    pub fn add(&mut self, result: PhaseResult) -> Vec<PhaseResult> {
        self.pending.push(OrderedResult(result));

        let mut ready = Vec::new();
        while let (Some(Reverse(next_expected)), Some(top_pending)) =
            (self.expected.peek(), self.pending.peek())
        {
            if ResultKey::from(&top_pending.0) != *next_expected {
                break;
            }
            self.expected.pop();
            if let Some(OrderedResult(result)) = self.pending.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Remaining buffered results in order; used when a run stops early
    pub fn drain(&mut self) -> Vec<PhaseResult> {
        let mut results: Vec<_> = self.pending.drain().map(|o| o.0).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}
