//! Filter module: Stateless numeric primitives used by the session.
//!
//! This module contains:
//! - [`interpolate`]: Catmull-Rom densification between two control samples
//! - [`smooth`]: Windowed box filter with curved end extensions
//!
//! Both are pure functions and can be called from any thread.

mod catmull_rom;
mod window;

pub use catmull_rom::interpolate;
pub use window::{smooth, EXTENSION_SAMPLES};
