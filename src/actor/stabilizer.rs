//! Stabilizer: Public handle that ties the worker and completions together.
//!
//! The Stabilizer is the entry point for embedding applications. It owns a
//! worker thread running a [`StrokeSession`] and offers every operation in
//! two flavours:
//!
//! - **Blocking**: [`submit`](Stabilizer::submit) / [`close`](Stabilizer::close)
//!   park the caller until the worker has processed the command.
//! - **Deferred**: [`submit_deferred`](Stabilizer::submit_deferred) /
//!   [`close_deferred`](Stabilizer::close_deferred) return immediately; the
//!   callback later runs on the [`CompletionContext`] when its owning thread
//!   calls [`dispatch`](Stabilizer::dispatch).
//!
//! Both flavours share one FIFO queue, so a blocking call waits for every
//! deferred call queued before it.

use super::context::CompletionContext;
use super::messages::{Command, Reply};
use super::worker::WorkerActor;
use crate::error::{Error, Result};
use crate::sample::Sample;
use crate::session::{StrokeSession, MAX_STRENGTH};
use crossbeam_channel::{bounded, Sender};
use std::time::Duration;
use tracing::debug;

/// Configuration for the Stabilizer.
#[derive(Debug, Clone)]
pub struct StabilizerConfig {
    /// Smoothing strength, `0..=MAX_STRENGTH`. Zero disables smoothing.
    pub strength: u32,
    /// Name of the worker thread.
    pub thread_name: String,
    /// Commands that may be queued before submission blocks.
    pub queue_capacity: usize,
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            strength: 10,
            thread_name: "stabilizer-worker".to_string(),
            queue_capacity: 256,
        }
    }
}

impl StabilizerConfig {
    /// Default configuration with the given strength.
    pub fn with_strength(strength: u32) -> Self {
        Self {
            strength,
            ..Self::default()
        }
    }

    /// Set the worker thread name.
    #[must_use]
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Set the command queue capacity (at least 1).
    #[must_use]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    /// Check the configuration without building anything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStrength`] if the strength is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.strength > MAX_STRENGTH {
            return Err(Error::InvalidStrength {
                strength: self.strength,
                max: MAX_STRENGTH,
            });
        }
        Ok(())
    }
}

/// Stroke stabilizer running on its own worker thread.
///
/// One instance handles one stroke at a time; closing a stroke resets it for
/// the next one.
///
/// # Example
///
/// ```
/// use stabilizer::{Sample, Stabilizer};
///
/// let stabilizer = Stabilizer::new(5)?;
/// let mut drawn = Vec::new();
/// for i in 0..20 {
///     let t = f64::from(i);
///     drawn.extend(stabilizer.submit(Sample::new(t, t.sin(), 1.0))?);
/// }
/// drawn.extend(stabilizer.close()?);
/// assert!(drawn.len() >= 20);
/// # Ok::<(), stabilizer::Error>(())
/// ```
pub struct Stabilizer {
    /// Configuration.
    config: StabilizerConfig,
    /// Where deferred completions run.
    context: CompletionContext,
    /// Command sender.
    command_tx: Sender<Command>,
    /// Worker actor handle.
    worker: WorkerActor,
}

impl Stabilizer {
    /// Create a stabilizer with the given strength and default settings.
    ///
    /// Deferred completions run on the calling thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the strength is out of range or the worker thread
    /// cannot be spawned.
    pub fn new(strength: u32) -> Result<Self> {
        Self::with_config(StabilizerConfig::with_strength(strength))
    }

    /// Create a stabilizer with custom configuration.
    ///
    /// Deferred completions run on the calling thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the worker thread
    /// cannot be spawned.
    pub fn with_config(config: StabilizerConfig) -> Result<Self> {
        Self::with_context(config, &CompletionContext::new())
    }

    /// Create a stabilizer that delivers deferred completions to `context`.
    ///
    /// Must be called on the thread that owns `context`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ForeignContext`] when called from another thread, and
    /// the errors of [`with_config`](Self::with_config) otherwise.
    pub fn with_context(config: StabilizerConfig, context: &CompletionContext) -> Result<Self> {
        if !context.is_current() {
            return Err(Error::ForeignContext);
        }
        config.validate()?;

        let session = StrokeSession::new(config.strength)?;
        let (command_tx, command_rx) = bounded(config.queue_capacity.max(1));
        let worker = WorkerActor::spawn(command_rx, session, &config.thread_name)?;

        debug!(
            strength = config.strength,
            thread = %config.thread_name,
            "stabilizer created"
        );

        Ok(Self {
            config,
            context: context.clone(),
            command_tx,
            worker,
        })
    }

    /// Smoothing strength.
    pub const fn strength(&self) -> u32 {
        self.config.strength
    }

    /// Get the configuration.
    pub const fn config(&self) -> &StabilizerConfig {
        &self.config
    }

    /// Get the completion context deferred callbacks run on.
    pub const fn context(&self) -> &CompletionContext {
        &self.context
    }

    /// Add a sample and wait for the newly finalized output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkerGone`] if the worker thread has stopped.
    pub fn submit(&self, sample: Sample) -> Result<Vec<Sample>> {
        let (tx, rx) = bounded(1);
        self.send(Command::Submit {
            sample,
            reply: Reply::Blocking(tx),
        })?;
        rx.recv().map_err(|_| Error::WorkerGone)
    }

    /// Queue a sample; `on_complete` later receives the newly finalized output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkerGone`] if the worker thread has stopped.
    pub fn submit_deferred<F>(&self, sample: Sample, on_complete: F) -> Result<()>
    where
        F: FnOnce(Vec<Sample>) + Send + 'static,
    {
        self.send(Command::Submit {
            sample,
            reply: self.deferred(on_complete),
        })
    }

    /// Close the stroke and wait for the remaining output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkerGone`] if the worker thread has stopped.
    pub fn close(&self) -> Result<Vec<Sample>> {
        let (tx, rx) = bounded(1);
        self.send(Command::Close {
            reply: Reply::Blocking(tx),
        })?;
        rx.recv().map_err(|_| Error::WorkerGone)
    }

    /// Queue a close; `on_complete` later receives the remaining output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkerGone`] if the worker thread has stopped.
    pub fn close_deferred<F>(&self, on_complete: F) -> Result<()>
    where
        F: FnOnce(Vec<Sample>) + Send + 'static,
    {
        self.send(Command::Close {
            reply: self.deferred(on_complete),
        })
    }

    /// Run deferred completions that have arrived so far.
    ///
    /// Returns the number of completions run.
    pub fn dispatch(&self) -> usize {
        self.context.dispatch()
    }

    /// Wait up to `timeout` for a deferred completion, then run all arrived.
    ///
    /// Returns the number of completions run.
    pub fn dispatch_timeout(&self, timeout: Duration) -> usize {
        self.context.dispatch_timeout(timeout)
    }

    fn deferred<F>(&self, on_complete: F) -> Reply
    where
        F: FnOnce(Vec<Sample>) + Send + 'static,
    {
        Reply::Deferred {
            context: self.context.clone(),
            callback: Box::new(on_complete),
        }
    }

    fn send(&self, command: Command) -> Result<()> {
        self.command_tx.send(command).map_err(|_| Error::WorkerGone)
    }
}

impl Drop for Stabilizer {
    fn drop(&mut self) {
        // Commands queued ahead of the shutdown still run.
        let _ = self.command_tx.send(Command::Shutdown);
        self.worker.join();
    }
}

impl std::fmt::Debug for Stabilizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stabilizer")
            .field("config", &self.config)
            .field("queued", &self.command_tx.len())
            .finish_non_exhaustive()
    }
}
