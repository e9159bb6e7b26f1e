pub type ProcessId = usize;

pub type MessageId = u64;

/// What a recorded event was: a purely local step, the send side of a
/// message, or the receive side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Local,
    Send,
    Receive,
}

/// One recorded step of one process, immutable once recorded.
///
/// `vector_time` is a snapshot taken at recording time; the process-local
/// log and the simulator's global log hold independent copies, never
/// aliases into clock storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub process: ProcessId,
    pub kind: EventKind,
    pub scalar_time: i64,
    pub vector_time: Vec<i64>,
    /// Send target or receive source; `None` for local events.
    pub peer: Option<ProcessId>,
    /// `None` for local events.
    pub message_id: Option<MessageId>,
}

impl Event {
    pub(crate) fn local(process: ProcessId, scalar_time: i64, vector_time: Vec<i64>) -> Self {
        Self {
            process,
            kind: EventKind::Local,
            scalar_time,
            vector_time,
            peer: None,
            message_id: None,
        }
    }

    pub(crate) fn send(
        process: ProcessId,
        to: ProcessId,
        message_id: MessageId,
        scalar_time: i64,
        vector_time: Vec<i64>,
    ) -> Self {
        Self {
            process,
            kind: EventKind::Send,
            scalar_time,
            vector_time,
            peer: Some(to),
            message_id: Some(message_id),
        }
    }

    pub(crate) fn receive(
        process: ProcessId,
        from: ProcessId,
        message_id: MessageId,
        scalar_time: i64,
        vector_time: Vec<i64>,
    ) -> Self {
        Self {
            process,
            kind: EventKind::Receive,
            scalar_time,
            vector_time,
            peer: Some(from),
            message_id: Some(message_id),
        }
    }
}

/// In-flight message between two processes. Created once by the sender,
/// consumed at most once by the receiver's mailbox (a full mailbox drops
/// it instead).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub from: ProcessId,
    pub to: ProcessId,
    pub scalar_time: i64,
    /// Independent copy of the sender's vector at send time.
    pub vector_time: Vec<i64>,
    pub id: MessageId,
}
