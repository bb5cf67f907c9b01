//! Stroke session: Incremental stabilization of a single stroke.
//!
//! The session owns all mutable state of one stroke: the raw samples
//! received so far, the smoothed sequence regenerated from them, and two
//! cursors into that sequence.
//!
//! # Regeneration
//!
//! ```text
//!  raw ──▶ densify ──▶ smooth ×3 ──▶ compare with previous ──▶ stable cursor
//!          (ends only)                (longest common prefix)
//! ```
//!
//! Every new raw sample triggers a full regeneration. The new sequence is
//! compared with the previous one from the stable cursor forward, and the
//! cursor moves past every index where both agree exactly. The caller is
//! handed `(read, stable]` and the read cursor jumps to `stable`.
//!
//! Closing a stroke treats everything as final, hands out the rest, and
//! resets the session so it can be reused for the next stroke.

use crate::error::{Error, Result};
use crate::filter::{interpolate, smooth};
use crate::sample::Sample;
use tracing::{debug, trace};

/// Largest accepted smoothing strength.
pub const MAX_STRENGTH: u32 = 50;

/// Interpolated samples injected per segment at the very ends of a stroke.
const END_SAMPLES: usize = 5;

/// Raw segments over which the end densification fades out.
const END_FALLOFF: usize = 3;

/// Box filter passes per regeneration.
const SMOOTHING_PASSES: usize = 3;

/// Stabilization state for one stroke.
///
/// Not thread-safe by itself: every call mutates the session. Wrap it in a
/// [`Stabilizer`](crate::Stabilizer) to process samples on a dedicated
/// worker thread.
///
/// # Example
///
/// ```
/// use stabilizer::{Sample, StrokeSession};
///
/// let mut session = StrokeSession::new(0)?;
/// let mut drawn = Vec::new();
/// for i in 0..4 {
///     drawn.extend(session.submit(Sample::new(f64::from(i), 0.0, 1.0)));
/// }
/// drawn.extend(session.close());
/// assert_eq!(drawn.len(), 4);
/// # Ok::<(), stabilizer::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct StrokeSession {
    /// Smoothing radius. Zero means pass-through.
    strength: u32,
    /// Raw samples in arrival order.
    raw: Vec<Sample>,
    /// Latest regenerated output.
    smoothed: Vec<Sample>,
    /// First index of `smoothed` still considered provisional.
    stable: usize,
    /// Number of leading indices of `smoothed` already handed out.
    consumed: usize,
}

impl StrokeSession {
    /// Create an empty session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStrength`] if `strength > MAX_STRENGTH`.
    pub fn new(strength: u32) -> Result<Self> {
        if strength > MAX_STRENGTH {
            return Err(Error::InvalidStrength {
                strength,
                max: MAX_STRENGTH,
            });
        }

        Ok(Self {
            strength,
            raw: Vec::new(),
            smoothed: Vec::new(),
            stable: 0,
            consumed: 0,
        })
    }

    /// Smoothing strength fixed at construction.
    pub const fn strength(&self) -> u32 {
        self.strength
    }

    /// Whether no raw sample has been received since the last close.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Number of raw samples in the current stroke.
    pub fn raw_len(&self) -> usize {
        self.raw.len()
    }

    /// Length of the current smoothed sequence.
    pub fn smoothed_len(&self) -> usize {
        self.smoothed.len()
    }

    /// Position of the stable cursor.
    pub const fn stable_len(&self) -> usize {
        self.stable
    }

    /// Add a raw sample and return the newly finalized output.
    pub fn submit(&mut self, sample: Sample) -> Vec<Sample> {
        if self.raw.is_empty() {
            debug!(strength = self.strength, "stroke started");
        }
        self.raw.push(sample);
        self.regenerate();
        self.take_finalized()
    }

    /// Finish the stroke, returning everything not yet handed out.
    ///
    /// The session is reset afterwards. Closing an empty session returns an
    /// empty sequence.
    pub fn close(&mut self) -> Vec<Sample> {
        self.regenerate();

        let remaining = if self.smoothed.is_empty() {
            Vec::new()
        } else {
            self.stable = self.smoothed.len() - 1;
            self.take_finalized()
        };

        if !self.raw.is_empty() {
            debug!(
                raw = self.raw.len(),
                smoothed = self.smoothed.len(),
                flushed = remaining.len(),
                "stroke closed"
            );
        }
        self.reset();
        remaining
    }

    fn reset(&mut self) {
        self.raw.clear();
        self.smoothed.clear();
        self.stable = 0;
        self.consumed = 0;
    }

    /// Hand out `(read, stable]` and move the read cursor to `stable`.
    fn take_finalized(&mut self) -> Vec<Sample> {
        let low = self.consumed;
        let high = (self.stable + 1).min(self.smoothed.len());
        self.consumed = self.stable + 1;

        if high > low {
            self.smoothed[low..high].to_vec()
        } else {
            Vec::new()
        }
    }

    /// Recompute the smoothed sequence from the raw samples.
    fn regenerate(&mut self) {
        if self.raw.is_empty() {
            return;
        }

        let next = if self.strength == 0 {
            self.raw.clone()
        } else {
            let radius = self.strength as usize;
            let mut points = densify(&self.raw);
            for _ in 0..SMOOTHING_PASSES {
                points = smooth(&points, radius);
            }
            points
        };

        self.advance_stable(&next);
        self.smoothed = next;

        trace!(
            raw = self.raw.len(),
            smoothed = self.smoothed.len(),
            stable = self.stable,
            "regenerated"
        );
    }

    /// Move the stable cursor past every index where old and new agree.
    fn advance_stable(&mut self, next: &[Sample]) {
        let old = self.smoothed.get(self.stable..).unwrap_or_default();
        let new = next.get(self.stable..).unwrap_or_default();
        self.stable += old.iter().zip(new).take_while(|(a, b)| a == b).count();
    }
}

/// Insert interpolated samples between raw samples near the stroke ends.
///
/// The first raw sample only acts as a control point; each segment
/// contributes its interpolated run followed by its closing raw sample.
fn densify(raw: &[Sample]) -> Vec<Sample> {
    let n = raw.len();
    let mut points = Vec::with_capacity(n * 2);

    for i in 1..n {
        let p1 = raw[i - 1];
        let p2 = raw[i];
        let p0 = if i >= 2 { raw[i - 2] } else { p1 };
        let p3 = raw.get(i + 1).copied().unwrap_or(p2);

        points.extend(interpolate(p0, p1, p2, p3, extra_samples(i, n)));
        points.push(p2);
    }

    points
}

/// Interpolated samples for segment `i` (raw pair `i - 1, i`) of `n`.
const fn extra_samples(i: usize, n: usize) -> usize {
    let to_start = (i - 1) / END_FALLOFF;
    let to_end = (n - 1 - i).saturating_sub(1) / END_FALLOFF;
    let nearest = if to_start < to_end { to_start } else { to_end };
    END_SAMPLES.saturating_sub(nearest)
}
