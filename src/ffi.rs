//! C Foreign Function Interface (FFI) for the stabilizer.
//!
//! This module provides a C-compatible API so drawing applications written
//! in other languages can feed pointer samples in and draw the stabilized
//! output. All functions are `extern "C"` with stable ABI. Only the blocking
//! mode is exposed; callers that want it off their UI thread run it on a
//! thread of their own.
//!
//! # Safety
//!
//! All functions that accept pointers require valid pointers previously
//! returned by this API (or null). Every [`SampleBuffer`] returned must be
//! released with [`stabilizer_buffer_free`] exactly once.
//!
//! # Example (C)
//!
//! ```c
//! #include "stabilizer.h"
//!
//! int main() {
//!     StabilizerHandle* stab = stabilizer_new(10);
//!     if (!stab) return 1;
//!
//!     SampleBuffer out = stabilizer_submit(stab, 12.0, 40.0, 0.6);
//!     for (size_t i = 0; i < out.len; i++) draw(out.ptr[i]);
//!     stabilizer_buffer_free(out);
//!
//!     out = stabilizer_close(stab);
//!     // ...
//!     stabilizer_buffer_free(out);
//!     stabilizer_destroy(stab);
//!     return 0;
//! }
//! ```

// FFI modules intentionally use unsafe and no_mangle
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use crate::actor::Stabilizer;
use crate::sample::Sample;
use std::os::raw::c_uint;
use std::ptr;
use tracing::warn;

// =============================================================================
// Opaque Handle Types
// =============================================================================

/// Opaque handle to a stabilizer.
pub struct StabilizerHandle(Stabilizer);

// =============================================================================
// Value Types
// =============================================================================

/// A sample as seen from C.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CSample {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Pressure.
    pub pressure: f64,
}

impl From<Sample> for CSample {
    fn from(sample: Sample) -> Self {
        Self {
            x: sample.position.x,
            y: sample.position.y,
            pressure: sample.pressure,
        }
    }
}

/// Owned array of samples returned to C.
///
/// `ptr` is null when `len` is zero.
#[repr(C)]
#[derive(Debug)]
pub struct SampleBuffer {
    /// First sample.
    pub ptr: *mut CSample,
    /// Number of samples.
    pub len: usize,
}

impl SampleBuffer {
    const fn empty() -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
        }
    }

    fn from_samples(samples: Vec<Sample>) -> Self {
        if samples.is_empty() {
            return Self::empty();
        }
        let boxed: Box<[CSample]> = samples.into_iter().map(CSample::from).collect();
        let len = boxed.len();
        Self {
            ptr: Box::into_raw(boxed).cast::<CSample>(),
            len,
        }
    }
}

// =============================================================================
// Stabilizer Functions
// =============================================================================

/// Create a stabilizer with the given smoothing strength (0-50).
///
/// Returns NULL on invalid strength or if the worker thread cannot start.
#[unsafe(no_mangle)]
pub extern "C" fn stabilizer_new(strength: c_uint) -> *mut StabilizerHandle {
    match Stabilizer::new(strength) {
        Ok(stabilizer) => Box::into_raw(Box::new(StabilizerHandle(stabilizer))),
        Err(e) => {
            warn!("stabilizer_new failed: {e}");
            ptr::null_mut()
        }
    }
}

/// Destroy a stabilizer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stabilizer_destroy(handle: *mut StabilizerHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Get the smoothing strength, or 0 for a null handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stabilizer_strength(handle: *const StabilizerHandle) -> c_uint {
    if handle.is_null() {
        return 0;
    }
    (*handle).0.strength()
}

/// Add a sample and return the newly finalized samples.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stabilizer_submit(
    handle: *const StabilizerHandle,
    x: f64,
    y: f64,
    pressure: f64,
) -> SampleBuffer {
    if handle.is_null() {
        return SampleBuffer::empty();
    }

    match (*handle).0.submit(Sample::new(x, y, pressure)) {
        Ok(samples) => SampleBuffer::from_samples(samples),
        Err(e) => {
            warn!("stabilizer_submit failed: {e}");
            SampleBuffer::empty()
        }
    }
}

/// Close the stroke and return the remaining samples.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stabilizer_close(handle: *const StabilizerHandle) -> SampleBuffer {
    if handle.is_null() {
        return SampleBuffer::empty();
    }

    match (*handle).0.close() {
        Ok(samples) => SampleBuffer::from_samples(samples),
        Err(e) => {
            warn!("stabilizer_close failed: {e}");
            SampleBuffer::empty()
        }
    }
}

/// Release a buffer returned by this API.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stabilizer_buffer_free(buffer: SampleBuffer) {
    if !buffer.ptr.is_null() {
        drop(Box::from_raw(ptr::slice_from_raw_parts_mut(
            buffer.ptr, buffer.len,
        )));
    }
}
