//! Error type for stabilizer construction and worker communication.

use thiserror::Error;

/// Errors returned by the stabilizer.
#[derive(Error, Debug)]
pub enum Error {
    /// Smoothing strength outside `0..=max`.
    #[error("smoothing strength {strength} out of range (max {max})")]
    InvalidStrength {
        /// Requested strength.
        strength: u32,
        /// Largest accepted strength.
        max: u32,
    },

    /// The completion context belongs to another thread.
    #[error("stabilizer must be created on the thread that owns its completion context")]
    ForeignContext,

    /// The worker thread could not be started.
    #[error("failed to spawn stabilizer worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    /// The worker thread is no longer running.
    #[error("stabilizer worker has stopped")]
    WorkerGone,
}

/// Result alias for stabilizer operations.
pub type Result<T> = std::result::Result<T, Error>;
