//! Worker Actor: Dedicated thread that owns a stroke session.
//!
//! Commands are processed strictly one at a time in arrival order, so
//! results come back in submission order and the session never sees
//! concurrent mutation.

use super::messages::Command;
use crate::error::{Error, Result};
use crate::session::StrokeSession;
use crossbeam_channel::Receiver;
use std::thread::{self, JoinHandle};
use tracing::debug;

/// Worker actor that runs stabilization off the caller's thread.
pub(crate) struct WorkerActor {
    /// Handle to the worker thread.
    handle: Option<JoinHandle<()>>,
}

impl WorkerActor {
    /// Spawn the worker thread.
    ///
    /// # Arguments
    ///
    /// * `receiver` - Channel to receive commands from.
    /// * `session` - The session the worker takes ownership of.
    /// * `name` - Thread name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkerSpawn`] if the OS refuses to create the thread.
    pub(crate) fn spawn(
        receiver: Receiver<Command>,
        session: StrokeSession,
        name: &str,
    ) -> Result<Self> {
        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || Self::run_loop(&receiver, session))
            .map_err(Error::WorkerSpawn)?;

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Wait for the worker thread to finish.
    pub(crate) fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                debug!("stabilizer worker panicked");
            }
        }
    }

    /// Main command loop.
    fn run_loop(receiver: &Receiver<Command>, mut session: StrokeSession) {
        debug!(strength = session.strength(), "stabilizer worker started");

        // Exits on Shutdown or when every sender is gone.
        for command in receiver {
            match command {
                Command::Submit { sample, reply } => {
                    reply.deliver(session.submit(sample));
                }
                Command::Close { reply } => {
                    reply.deliver(session.close());
                }
                Command::Shutdown => break,
            }
        }

        debug!(
            abandoned_samples = session.raw_len(),
            "stabilizer worker stopped"
        );
    }
}
