//! Actor Model: Off-thread stabilization with ordered completions.
//!
//! This module implements the two submission modes using crossbeam channels:
//! - **Worker Actor**: Owns the [`StrokeSession`](crate::StrokeSession) and
//!   processes commands one at a time, in order
//! - **Completion Context**: Runs deferred callbacks on the thread that
//!   owns it
//! - **Stabilizer**: Public handle that feeds the worker
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐      Command       ┌──────────────┐
//! │  Stabilizer  │ ─────────────────▶ │ Worker Thread│
//! │   (caller)   │ ◀───────────────── │  (session)   │
//! └──────────────┘  blocking reply    └──────────────┘
//!        │                                   │
//!        │ dispatch()                        │ deferred completion
//!        ▼                                   ▼
//! ┌──────────────────────────────────────────────────┐
//! │        Completion Context (owning thread)        │
//! └──────────────────────────────────────────────────┘
//! ```

mod context;
mod messages;
mod stabilizer;
mod worker;

pub use context::CompletionContext;
pub use messages::CompletionCallback;
pub use stabilizer::{Stabilizer, StabilizerConfig};
