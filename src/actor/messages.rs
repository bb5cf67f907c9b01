//! Message types for worker communication.
//!
//! These enums define the protocol between a [`Stabilizer`](super::Stabilizer)
//! handle and its worker thread.

use super::context::CompletionContext;
use crate::sample::Sample;
use crossbeam_channel::Sender;
use tracing::warn;

/// Callback run on the completion context with newly finalized samples.
pub type CompletionCallback = Box<dyn FnOnce(Vec<Sample>) + Send + 'static>;

/// Commands sent to the worker thread.
pub(crate) enum Command {
    /// Append a raw sample to the stroke.
    Submit {
        /// The raw sample.
        sample: Sample,
        /// Where to send the newly finalized samples.
        reply: Reply,
    },

    /// Close the stroke and reset the session.
    Close {
        /// Where to send the remaining samples.
        reply: Reply,
    },

    /// Stop the worker thread.
    Shutdown,
}

/// How a command's result gets back to the caller.
pub(crate) enum Reply {
    /// The caller is parked on the other end of this channel.
    Blocking(Sender<Vec<Sample>>),

    /// Run the callback on the given context.
    Deferred {
        /// Context that runs the callback.
        context: CompletionContext,
        /// The caller's completion handler.
        callback: CompletionCallback,
    },
}

impl Reply {
    /// Hand the result to whoever is waiting for it.
    pub(crate) fn deliver(self, samples: Vec<Sample>) {
        match self {
            Self::Blocking(tx) => {
                if tx.send(samples).is_err() {
                    warn!("blocking caller went away before its result arrived");
                }
            }
            Self::Deferred { context, callback } => {
                context.post(Box::new(move || callback(samples)));
            }
        }
    }
}
