//! Simulated distributed system for studying causality tracking.
//!
//! A [`Simulator`] owns N processes, each carrying a Lamport
//! [`ScalarClock`] and a [`VectorClock`]. Processes generate local
//! events and exchange messages through bounded, lossy mailboxes; every
//! event is recorded with snapshots of both timestamps. [`compare`]
//! classifies pairs of vector timestamps as before / after / concurrent /
//! equal, and the analysis queries on [`Simulator`] summarize the
//! recorded log.

mod analysis;
mod error;
mod event;
mod mailbox;
mod order;
mod process;
mod scalar;
mod simulator;
mod vector;

pub use analysis::{CausalHistogram, ProcessStatistics, Statistics};
pub use error::{Error, Result};
pub use event::{Event, EventKind, Message, MessageId, ProcessId};
pub use mailbox::{Mailbox, DEFAULT_MAILBOX_CAPACITY};
pub use order::{compare, Causality};
pub use process::Process;
pub use scalar::ScalarClock;
pub use simulator::Simulator;
pub use vector::VectorClock;
