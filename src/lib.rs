//! # Stabilizer
//!
//! Incremental stabilization of freehand strokes.
//!
//! Raw pointer input is sparse and jittery. The stabilizer turns it into a
//! denser, smoother sequence of samples and hands out only the part that has
//! settled, so partial strokes can be drawn while the pointer is still
//! moving.
//!
//! ## Core Concepts
//!
//! - **Densification**: Catmull-Rom samples are injected near the stroke ends
//!   where raw input is too sparse
//! - **Window smoothing**: Three passes of an edge-replicating box filter
//!   with curved end extensions
//! - **Stable prefix**: Each regeneration is compared with the previous one;
//!   only the agreeing prefix is handed out
//! - **Actor model**: A dedicated worker thread per stabilizer, with blocking
//!   and deferred submission
//!
//! ## Example
//!
//! ```rust
//! use stabilizer::{Sample, StrokeSession};
//!
//! let mut session = StrokeSession::new(8)?;
//! let mut drawn = Vec::new();
//!
//! for i in 0..32 {
//!     let t = f64::from(i) * 0.25;
//!     drawn.extend(session.submit(Sample::new(t * 10.0, t.sin() * 10.0, 0.8)));
//! }
//! drawn.extend(session.close());
//!
//! assert!(drawn.len() > 32);
//! # Ok::<(), stabilizer::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod error;
pub mod ffi;
pub mod filter;
pub mod sample;
pub mod session;

// Re-exports for convenience
pub use actor::{CompletionCallback, CompletionContext, Stabilizer, StabilizerConfig};
pub use error::{Error, Result};
pub use filter::{interpolate, smooth, EXTENSION_SAMPLES};
pub use sample::{average_position_distance, average_pressure_distance, Point, Sample};
pub use session::{StrokeSession, MAX_STRENGTH};
