//! Completion context: Runs deferred completions on a chosen thread.
//!
//! A context is bound to the thread that creates it. Workers post finished
//! completions to it from any thread; they only run when the owning thread
//! calls [`CompletionContext::dispatch`] or
//! [`CompletionContext::dispatch_timeout`], typically once per UI frame.

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, ThreadId};
use std::time::Duration;
use tracing::warn;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Queue of completions owned by one thread.
///
/// Cloning a context yields another handle to the same queue.
#[derive(Clone)]
pub struct CompletionContext {
    /// Thread allowed to run completions.
    owner: ThreadId,
    /// Producer side, used by workers.
    tx: Sender<Job>,
    /// Consumer side, drained by the owner.
    rx: Receiver<Job>,
}

impl CompletionContext {
    /// Create a context bound to the current thread.
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            owner: thread::current().id(),
            tx,
            rx,
        }
    }

    /// Whether the calling thread owns this context.
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.owner
    }

    /// Number of completions waiting to run.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    /// Queue a job for the owning thread.
    pub(crate) fn post(&self, job: Job) {
        // Both ends live in `self`, so the channel cannot be disconnected.
        let _ = self.tx.send(job);
    }

    /// Run every completion queued so far.
    ///
    /// Returns the number of completions run. Calling this from a thread
    /// other than the owner runs nothing.
    pub fn dispatch(&self) -> usize {
        if !self.check_owner() {
            return 0;
        }

        let mut ran = 0;
        while let Ok(job) = self.rx.try_recv() {
            job();
            ran += 1;
        }
        ran
    }

    /// Wait up to `timeout` for a completion, then run everything queued.
    ///
    /// Returns the number of completions run.
    pub fn dispatch_timeout(&self, timeout: Duration) -> usize {
        if !self.check_owner() {
            return 0;
        }

        match self.rx.recv_timeout(timeout) {
            Ok(job) => {
                job();
                1 + self.dispatch()
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => 0,
        }
    }

    fn check_owner(&self) -> bool {
        let current = self.is_current();
        if !current {
            warn!(owner = ?self.owner, "completion dispatch attempted off the owning thread");
        }
        current
    }
}

impl Default for CompletionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CompletionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionContext")
            .field("owner", &self.owner)
            .field("pending", &self.rx.len())
            .finish()
    }
}
