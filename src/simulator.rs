use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use rand::{thread_rng, Rng};
use tracing::debug;

use crate::error::{Error, Result};
use crate::event::{Event, Message, MessageId, ProcessId};
use crate::mailbox::DEFAULT_MAILBOX_CAPACITY;
use crate::process::Process;

/// How long a receiver sleeps when its mailbox is empty and the
/// simulation is still running.
const RECEIVER_IDLE_WAIT: Duration = Duration::from_micros(500);

/// Simulated distributed system: a fixed set of processes, in-process
/// message routing between their mailboxes, and a shared global event
/// log.
///
/// [`Simulator::run`] drives the system concurrently (one generator and
/// one receiver thread per process); [`Simulator::local_event`],
/// [`Simulator::send_message`] and [`Simulator::deliver_all`] drive it
/// deterministically from a single thread, which is what the scenario
/// tests use.
#[derive(Debug)]
pub struct Simulator {
    processes: Vec<Process>,
    global_events: Mutex<Vec<Event>>,
    next_message_id: AtomicU64,
}

impl Simulator {
    /// Creates a simulator with `num_processes` processes, each owning a
    /// scalar clock, a vector clock of length `num_processes`, and a
    /// mailbox of capacity [`DEFAULT_MAILBOX_CAPACITY`].
    pub fn new(num_processes: usize) -> Result<Self> {
        Self::with_mailbox_capacity(num_processes, DEFAULT_MAILBOX_CAPACITY)
    }

    /// As [`Simulator::new`], with an explicit mailbox capacity. Small
    /// capacities make the lossy-send policy observable deterministically
    /// via [`Simulator::dropped_messages`].
    pub fn with_mailbox_capacity(num_processes: usize, mailbox_capacity: usize) -> Result<Self> {
        if num_processes < 1 {
            return Err(Error::config("number of processes must be at least 1"));
        }
        if mailbox_capacity < 1 {
            return Err(Error::config("mailbox capacity must be at least 1"));
        }
        let processes = (0..num_processes)
            .map(|id| Process::new(id, num_processes, mailbox_capacity))
            .collect();
        Ok(Self {
            processes,
            global_events: Mutex::new(Vec::new()),
            next_message_id: AtomicU64::new(0),
        })
    }

    pub fn num_processes(&self) -> usize {
        self.processes.len()
    }

    pub fn process(&self, id: ProcessId) -> Result<&Process> {
        self.processes.get(id).ok_or(Error::ProcessOutOfRange {
            id,
            count: self.processes.len(),
        })
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Snapshot copy of the global event log, in append order.
    ///
    /// Append order is the order the log's lock was taken, not any global
    /// logical order; consumers must not assume it is sorted by
    /// timestamp.
    pub fn global_events(&self) -> Vec<Event> {
        self.global_events.lock().clone()
    }

    /// Total messages dropped on full mailboxes across all processes.
    pub fn dropped_messages(&self) -> u64 {
        self.processes.iter().map(|p| p.mailbox().dropped()).sum()
    }

    /// Runs the concurrent event-generation protocol for `duration`.
    ///
    /// Per scheduling tick each generator draws `r` uniformly in [0,1):
    /// `r < local_prob` produces a local event, `r < local_prob +
    /// send_prob` a send to a uniformly chosen other process, anything
    /// else idles until the next tick. Receivers consume their mailboxes
    /// as messages arrive.
    ///
    /// Termination: the deadline stops every generator at its next
    /// scheduling iteration (operations already started run to
    /// completion); once all generators have joined, receivers drain
    /// whatever is still queued and exit. `run` returns only after every
    /// thread has joined.
    pub fn run(&self, duration: Duration, local_prob: f64, send_prob: f64) -> Result<()> {
        if duration.is_zero() {
            return Err(Error::config("duration must be positive"));
        }
        if !(0.0..=1.0).contains(&local_prob) {
            return Err(Error::config("local event probability must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&send_prob) {
            return Err(Error::config("send event probability must be in [0, 1]"));
        }

        debug!(
            num_processes = self.processes.len(),
            ?duration,
            local_prob,
            send_prob,
            "starting simulation"
        );

        let draining = AtomicBool::new(false);
        let deadline = Instant::now() + duration;

        thread::scope(|scope| {
            for process in &self.processes {
                let draining = &draining;
                scope.spawn(move || self.receiver_loop(process.id(), draining));
            }

            let generators: Vec<_> = self
                .processes
                .iter()
                .map(|process| {
                    let id = process.id();
                    scope.spawn(move || self.generator_loop(id, deadline, local_prob, send_prob))
                })
                .collect();

            for generator in generators {
                generator.join().expect("generator thread panicked");
            }
            draining.store(true, Ordering::Release);
            // Receiver threads join at scope exit, after draining.
        });

        debug!(
            total_events = self.global_events.lock().len(),
            dropped = self.dropped_messages(),
            "simulation finished"
        );
        Ok(())
    }

    fn generator_loop(&self, id: ProcessId, deadline: Instant, local_prob: f64, send_prob: f64) {
        let mut rng = thread_rng();
        while Instant::now() < deadline {
            let r: f64 = rng.gen();
            if r < local_prob {
                self.emit_local(id);
            } else if r < local_prob + send_prob {
                if let Some(target) = pick_target(&mut rng, id, self.processes.len()) {
                    self.emit_send(id, target);
                }
            }
            thread::sleep(Duration::from_millis(rng.gen_range(1..=10)));
        }
    }

    fn receiver_loop(&self, id: ProcessId, draining: &AtomicBool) {
        let process = &self.processes[id];
        loop {
            match process.mailbox().pop() {
                Some(msg) => self.apply_receive(id, msg),
                None => {
                    if draining.load(Ordering::Acquire) {
                        break;
                    }
                    thread::sleep(RECEIVER_IDLE_WAIT);
                }
            }
        }
    }

    fn emit_local(&self, id: ProcessId) -> Event {
        let process = &self.processes[id];
        let _op = process.begin_op();
        let scalar_time = process.scalar_clock().tick();
        let vector_time = process.vector_clock().tick();
        let event = Event::local(id, scalar_time, vector_time);
        self.record(process, event.clone());
        event
    }

    fn emit_send(&self, from: ProcessId, to: ProcessId) -> MessageId {
        let process = &self.processes[from];
        let _op = process.begin_op();
        let scalar_time = process.scalar_clock().send();
        let vector_time = process.vector_clock().send();
        let id = self.next_message_id.fetch_add(1, Ordering::Relaxed);

        let msg = Message {
            from,
            to,
            scalar_time,
            vector_time: vector_time.clone(),
            id,
        };
        self.record(process, Event::send(from, to, id, scalar_time, vector_time));
        // A full target mailbox drops the message; senders never block.
        self.processes[to].mailbox().push(msg);
        id
    }

    fn apply_receive(&self, id: ProcessId, msg: Message) {
        let process = &self.processes[id];
        let _op = process.begin_op();
        let scalar_time = process.scalar_clock().receive(msg.scalar_time);
        let vector_time = process
            .vector_clock()
            .receive(&msg.vector_time)
            .expect("in-simulation messages carry vectors of system size");
        self.record(
            process,
            Event::receive(id, msg.from, msg.id, scalar_time, vector_time),
        );
    }

    fn record(&self, process: &Process, event: Event) {
        // The global log and the process log hold independent copies.
        self.global_events.lock().push(event.clone());
        process.record(event);
    }

    /// Manually emits one local event on `id`. Returns the recorded
    /// event.
    pub fn local_event(&self, id: ProcessId) -> Result<Event> {
        self.process(id)?;
        Ok(self.emit_local(id))
    }

    /// Manually sends one message from `from` to `to`, recording the send
    /// event and enqueueing the message. The receive happens when the
    /// target's receiver runs (under [`Simulator::run`]) or when
    /// [`Simulator::deliver_all`] is called.
    pub fn send_message(&self, from: ProcessId, to: ProcessId) -> Result<MessageId> {
        self.process(from)?;
        self.process(to)?;
        Ok(self.emit_send(from, to))
    }

    /// Synchronously drains every mailbox, recording a receive event for
    /// each queued message. Returns the number of messages delivered.
    pub fn deliver_all(&self) -> usize {
        let mut delivered = 0;
        for process in &self.processes {
            while let Some(msg) = process.mailbox().pop() {
                self.apply_receive(process.id(), msg);
                delivered += 1;
            }
        }
        delivered
    }
}

/// Uniform pick over `0..n` excluding `own`; `None` when there is no
/// other process to send to.
fn pick_target<R: Rng>(rng: &mut R, own: ProcessId, n: usize) -> Option<ProcessId> {
    if n <= 1 {
        return None;
    }
    let mut target = rng.gen_range(0..n - 1);
    if target >= own {
        target += 1;
    }
    Some(target)
}
