use parking_lot::Mutex;

use crate::error::{Error, Result};

/// Vector clock: one counter per process, giving the owning process
/// partial knowledge of every other process's progress.
///
/// All mutating operations return an independent snapshot copy of the
/// full vector; callers can never reach the internal storage through a
/// returned value. Mutations are serialized by an internal mutex.
#[derive(Debug)]
pub struct VectorClock {
    own_index: usize,
    entries: Mutex<Vec<i64>>,
}

impl VectorClock {
    /// Creates an all-zero clock of length `size`, owned by the process
    /// at `own_index`.
    pub fn new(own_index: usize, size: usize) -> Self {
        Self {
            own_index,
            entries: Mutex::new(vec![0; size]),
        }
    }

    /// Advances the owner's component for a local event and returns a
    /// snapshot of the full vector.
    pub fn tick(&self) -> Vec<i64> {
        let mut entries = self.entries.lock();
        entries[self.own_index] += 1;
        entries.clone()
    }

    /// Advances the owner's component for an outgoing message and returns
    /// the snapshot to attach to it. Same effect as [`VectorClock::tick`].
    pub fn send(&self) -> Vec<i64> {
        self.tick()
    }

    /// Merges an incoming vector (component-wise max), then advances the
    /// owner's component. Returns a snapshot of the merged vector.
    ///
    /// Fails with [`Error::DimensionMismatch`] before any mutation if the
    /// incoming vector's length differs from this clock's size.
    pub fn receive(&self, incoming: &[i64]) -> Result<Vec<i64>> {
        let mut entries = self.entries.lock();
        if incoming.len() != entries.len() {
            return Err(Error::DimensionMismatch {
                expected: entries.len(),
                actual: incoming.len(),
            });
        }
        for (own, other) in entries.iter_mut().zip(incoming) {
            if *other > *own {
                *own = *other;
            }
        }
        entries[self.own_index] += 1;
        Ok(entries.clone())
    }

    /// Reads a snapshot of the current vector without advancing it.
    pub fn value(&self) -> Vec<i64> {
        self.entries.lock().clone()
    }

    /// Resets every component to 0. Test utility, not part of the
    /// protocol.
    pub fn reset(&self) {
        self.entries.lock().fill(0);
    }

    /// Number of components (= number of processes in the system).
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the owning process.
    pub fn own_index(&self) -> usize {
        self.own_index
    }
}
