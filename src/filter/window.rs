//! Window smoother: symmetric box filter with curved end extensions.
//!
//! Each output sample is the mean of a `2 * radius + 1` window around the
//! corresponding input sample. Out-of-range window positions replicate the
//! nearest edge sample, which over-weights the stroke ends and keeps the
//! result hugging the true endpoints.
//!
//! A box filter flattens stroke tips, so after averaging both ends are
//! extended with [`EXTENSION_SAMPLES`] Catmull-Rom samples whose boundary
//! control point is duplicated.

use super::catmull_rom::interpolate;
use crate::sample::{Point, Sample};

/// Number of curve samples added past each end of a smoothed stroke.
pub const EXTENSION_SAMPLES: usize = 10;

/// Smooth `points` with a window of the given `radius`.
///
/// Returns the input unchanged when `radius == 0` or there are fewer than
/// three samples. Otherwise the first input sample is dropped from direct
/// averaging, the last averaged sample is replaced by the exact last input
/// sample, and both ends are extended (see the module docs). The output
/// length is `n - 1 + 2 * EXTENSION_SAMPLES` for `n >= 4` input samples.
///
/// # Example
///
/// ```
/// use stabilizer::{smooth, Sample};
///
/// let stroke: Vec<Sample> = (0..8)
///     .map(|i| Sample::new(f64::from(i), f64::from(i % 2), 1.0))
///     .collect();
///
/// assert_eq!(smooth(&stroke, 0), stroke);
///
/// let smoothed = smooth(&stroke, 2);
/// assert_eq!(smoothed.len(), stroke.len() - 1 + 20);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn smooth(points: &[Sample], radius: usize) -> Vec<Sample> {
    let n = points.len();
    if radius == 0 || n < 3 {
        return points.to_vec();
    }

    let last = n - 1;
    let weight = 1.0 / (radius * 2 + 1) as f64;

    let mut averaged = Vec::with_capacity(n - 1 + 2 * EXTENSION_SAMPLES);
    for i in 1..n {
        let mut position = Point::ZERO;
        let mut pressure = 0.0;

        // Window bounds stay signed so the edge clamp sees negative offsets.
        #[allow(clippy::cast_possible_wrap)]
        let (lower, upper) = (i as isize - radius as isize, (i + radius) as isize);
        for j in lower..=upper {
            #[allow(clippy::cast_sign_loss)]
            let idx = j.clamp(0, last as isize) as usize;
            position += points[idx].position;
            pressure += points[idx].pressure;
        }

        position *= weight;
        pressure *= weight;
        averaged.push(Sample::at(position, pressure));
    }

    // Anchor the smoothed stroke on the exact last input sample.
    if let Some(tail) = averaged.last_mut() {
        *tail = points[last];
    }

    extend_ends(averaged)
}

/// Prepend and append curved extensions to an averaged stroke.
fn extend_ends(averaged: Vec<Sample>) -> Vec<Sample> {
    let len = averaged.len();
    if len < 3 {
        return averaged;
    }

    let head = interpolate(
        averaged[0],
        averaged[0],
        averaged[1],
        averaged[2],
        EXTENSION_SAMPLES,
    );
    let tail = interpolate(
        averaged[len - 3],
        averaged[len - 2],
        averaged[len - 1],
        averaged[len - 1],
        EXTENSION_SAMPLES,
    );
    debug_assert_eq!(head.len(), EXTENSION_SAMPLES);
    debug_assert_eq!(tail.len(), EXTENSION_SAMPLES);

    let mut out = Vec::with_capacity(len + head.len() + tail.len());
    out.extend(head);
    out.extend(averaged);
    out.extend(tail);
    out
}
