use crate::error::{Error, Result};

/// Causal relationship between two vector timestamps.
///
/// This is the happens-before partial order: `Before` and `After` assert
/// a causal path between the events; `Concurrent` asserts there is none.
/// Scalar (Lamport) timestamps can never produce a `Concurrent` verdict,
/// which is exactly why the simulation carries both clock kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Causality {
    /// The first event happened before the second.
    Before,
    /// The first event happened after the second.
    After,
    /// Neither event could have influenced the other.
    Concurrent,
    /// Identical timestamps.
    Equal,
}

impl Causality {
    /// The verdict obtained by swapping the comparison's arguments.
    /// `Concurrent` and `Equal` are their own inverses.
    pub fn inverse(self) -> Self {
        match self {
            Causality::Before => Causality::After,
            Causality::After => Causality::Before,
            other => other,
        }
    }
}

/// Compares two vector timestamps of equal length.
///
/// Single scan tracking whether any component of `a` is less than the
/// corresponding component of `b` and whether any is greater:
/// neither flag → `Equal`, only less → `Before`, only greater → `After`,
/// both → `Concurrent`.
///
/// Fails with [`Error::DimensionMismatch`] when the lengths differ.
pub fn compare(a: &[i64], b: &[i64]) -> Result<Causality> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let mut any_less = false;
    let mut any_greater = false;
    for (x, y) in a.iter().zip(b) {
        if x < y {
            any_less = true;
        } else if x > y {
            any_greater = true;
        }
    }

    Ok(match (any_less, any_greater) {
        (false, false) => Causality::Equal,
        (true, false) => Causality::Before,
        (false, true) => Causality::After,
        (true, true) => Causality::Concurrent,
    })
}
