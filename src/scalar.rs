use parking_lot::Mutex;

/// Lamport logical clock: a single monotonically non-decreasing counter.
///
/// Every operation runs under an internal mutex, so a clock shared between
/// a process's generator and receiver roles never exposes a torn value.
/// A scalar timestamp alone can only order events heuristically; exact
/// concurrency detection needs [`crate::VectorClock`].
#[derive(Debug, Default)]
pub struct ScalarClock {
    time: Mutex<i64>,
}

impl ScalarClock {
    /// Creates a clock initialized to 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock for a local event and returns the new value.
    pub fn tick(&self) -> i64 {
        let mut time = self.time.lock();
        *time += 1;
        *time
    }

    /// Advances the clock for an outgoing message and returns the
    /// timestamp to attach to it. Same effect as [`ScalarClock::tick`].
    pub fn send(&self) -> i64 {
        self.tick()
    }

    /// Resynchronizes on an incoming timestamp:
    /// `time = max(time, incoming) + 1`.
    ///
    /// The result always exceeds both the local history and the message's
    /// origin time, so a receive is never ordered before its send.
    pub fn receive(&self, incoming: i64) -> i64 {
        let mut time = self.time.lock();
        if incoming > *time {
            *time = incoming;
        }
        *time += 1;
        *time
    }

    /// Reads the current value without advancing the clock.
    pub fn value(&self) -> i64 {
        *self.time.lock()
    }

    /// Resets the clock to 0. Test utility, not part of the protocol.
    pub fn reset(&self) {
        *self.time.lock() = 0;
    }
}
