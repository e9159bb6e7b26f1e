use parking_lot::Mutex;

use crate::event::{Event, ProcessId};
use crate::mailbox::Mailbox;
use crate::scalar::ScalarClock;
use crate::vector::VectorClock;

/// One simulated process: both logical clocks, an append-only event log,
/// and the inbound mailbox.
///
/// Clocks mutate only from this process's own generator and receiver
/// roles; both roles serialize through the clocks' internal locks. The
/// log is a pure append, never rewritten.
#[derive(Debug)]
pub struct Process {
    id: ProcessId,
    scalar: ScalarClock,
    vector: VectorClock,
    events: Mutex<Vec<Event>>,
    mailbox: Mailbox,
    /// Serializes clock-update-plus-log-append so consecutive events of
    /// this process carry strictly increasing timestamps in log order.
    op_lock: Mutex<()>,
}

impl Process {
    pub(crate) fn new(id: ProcessId, num_processes: usize, mailbox_capacity: usize) -> Self {
        Self {
            id,
            scalar: ScalarClock::new(),
            vector: VectorClock::new(id, num_processes),
            events: Mutex::new(Vec::new()),
            mailbox: Mailbox::new(mailbox_capacity),
            op_lock: Mutex::new(()),
        }
    }

    pub(crate) fn begin_op(&self) -> parking_lot::MutexGuard<'_, ()> {
        self.op_lock.lock()
    }

    pub fn id(&self) -> ProcessId {
        self.id
    }

    pub fn scalar_clock(&self) -> &ScalarClock {
        &self.scalar
    }

    pub fn vector_clock(&self) -> &VectorClock {
        &self.vector
    }

    pub fn mailbox(&self) -> &Mailbox {
        &self.mailbox
    }

    /// Snapshot copy of this process's event log, in append order.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().len()
    }

    pub(crate) fn record(&self, event: Event) {
        self.events.lock().push(event);
    }
}
