use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_queue::ArrayQueue;
use tracing::trace;

use crate::event::Message;

/// Default mailbox capacity. Senders outpacing a receiver beyond this
/// start losing messages rather than stalling.
pub const DEFAULT_MAILBOX_CAPACITY: usize = 100;

/// Bounded, lossy inbound queue for one process.
///
/// Any process may push (multiple producers); only the owning process's
/// receiver role pops. A push onto a full mailbox drops the message and
/// bumps a counter; senders never block and delivery is not guaranteed.
#[derive(Debug)]
pub struct Mailbox {
    queue: ArrayQueue<Message>,
    dropped: AtomicU64,
}

impl Mailbox {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: ArrayQueue::new(capacity),
            dropped: AtomicU64::new(0),
        }
    }

    /// Non-blocking enqueue. Returns `true` if the message was accepted,
    /// `false` if the mailbox was full and the message dropped.
    pub fn push(&self, msg: Message) -> bool {
        match self.queue.push(msg) {
            Ok(()) => true,
            Err(msg) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                trace!(from = msg.from, to = msg.to, id = msg.id, "mailbox full, message dropped");
                false
            }
        }
    }

    pub fn pop(&self) -> Option<Message> {
        self.queue.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    /// Number of messages dropped because the mailbox was full.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}
