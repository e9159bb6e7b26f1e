use crate::event::EventKind;
use crate::order::{compare, Causality};
use crate::simulator::Simulator;

/// Aggregate event counts over the global log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    pub total: usize,
    pub local: usize,
    pub send: usize,
    pub receive: usize,
}

/// Event counts for a single process, from its own log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatistics {
    pub process: crate::ProcessId,
    pub total: usize,
    pub local: usize,
    pub send: usize,
    pub receive: usize,
}

/// Tally of all four causal verdicts over every pair of logged events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CausalHistogram {
    pub before: usize,
    pub after: usize,
    pub concurrent: usize,
    pub equal: usize,
}

impl Simulator {
    /// Event counts by kind across the global log.
    pub fn statistics(&self) -> Statistics {
        let mut stats = Statistics::default();
        for event in self.global_events() {
            stats.total += 1;
            match event.kind {
                EventKind::Local => stats.local += 1,
                EventKind::Send => stats.send += 1,
                EventKind::Receive => stats.receive += 1,
            }
        }
        stats
    }

    /// Per-process event counts, from each process's own log.
    pub fn process_statistics(&self) -> Vec<ProcessStatistics> {
        self.processes()
            .iter()
            .map(|process| {
                let mut stats = ProcessStatistics {
                    process: process.id(),
                    total: 0,
                    local: 0,
                    send: 0,
                    receive: 0,
                };
                for event in process.events() {
                    stats.total += 1;
                    match event.kind {
                        EventKind::Local => stats.local += 1,
                        EventKind::Send => stats.send += 1,
                        EventKind::Receive => stats.receive += 1,
                    }
                }
                stats
            })
            .collect()
    }

    /// Number of event pairs whose vector timestamps are concurrent.
    ///
    /// Exhaustive O(E²) scan over the global log. The quadratic cost is
    /// intentional: this is the correctness baseline that sampled
    /// analyses are compared against, not a hot path.
    pub fn count_concurrent_pairs(&self) -> usize {
        let events = self.global_events();
        let mut concurrent = 0;
        for i in 0..events.len() {
            for j in i + 1..events.len() {
                // All in-simulation vectors share one length.
                if compare(&events[i].vector_time, &events[j].vector_time)
                    .is_ok_and(|c| c == Causality::Concurrent)
                {
                    concurrent += 1;
                }
            }
        }
        concurrent
    }

    /// Same pairwise scan as [`Simulator::count_concurrent_pairs`], but
    /// tallying all four causal verdicts.
    pub fn causal_histogram(&self) -> CausalHistogram {
        let events = self.global_events();
        let mut histogram = CausalHistogram::default();
        for i in 0..events.len() {
            for j in i + 1..events.len() {
                let Ok(verdict) = compare(&events[i].vector_time, &events[j].vector_time) else {
                    continue;
                };
                match verdict {
                    Causality::Before => histogram.before += 1,
                    Causality::After => histogram.after += 1,
                    Causality::Concurrent => histogram.concurrent += 1,
                    Causality::Equal => histogram.equal += 1,
                }
            }
        }
        histogram
    }

    /// N×N matrix of send counts: `matrix[i][j]` is how many messages
    /// process i sent to process j.
    pub fn communication_matrix(&self) -> Vec<Vec<u64>> {
        let n = self.num_processes();
        let mut matrix = vec![vec![0u64; n]; n];
        for event in self.global_events() {
            if event.kind == EventKind::Send {
                if let Some(to) = event.peer {
                    matrix[event.process][to] += 1;
                }
            }
        }
        matrix
    }
}
