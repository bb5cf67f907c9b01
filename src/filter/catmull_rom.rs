//! Catmull-Rom interpolation between two control samples.
//!
//! Used to densify sparse raw input and to extend smoothed strokes past
//! their ends. Every channel (x, y, pressure) is treated as an independent
//! scalar series.

use crate::sample::{Point, Sample};

/// Cubic coefficients `(a0, a1, a2, a3)` for one channel.
#[derive(Debug, Clone, Copy)]
struct Cubic {
    a0: f64,
    a1: f64,
    a2: f64,
    a3: f64,
}

impl Cubic {
    #[inline]
    fn new(v0: f64, v1: f64, v2: f64, v3: f64) -> Self {
        Self {
            a0: v1,
            a1: (-v0 + v2) * 0.5,
            a2: v0 - 2.5 * v1 + 2.0 * v2 - 0.5 * v3,
            a3: -0.5 * v0 + 1.5 * v1 - 1.5 * v2 + 0.5 * v3,
        }
    }

    #[inline]
    fn eval(&self, t: f64, t2: f64, t3: f64) -> f64 {
        self.a0 + self.a1 * t + self.a2 * t2 + self.a3 * t3
    }
}

/// Generate `sample_count` samples strictly between `p1` and `p2`.
///
/// Samples are taken at `t = i / (sample_count + 1)` for
/// `i in 1..=sample_count`, so neither endpoint is reproduced. The position
/// channels use `p2` as their trailing control value; pressure uses `p3`.
///
/// The evaluation order is fixed, so identical inputs always give
/// bit-identical outputs.
///
/// # Example
///
/// ```
/// use stabilizer::{interpolate, Sample};
///
/// let a = Sample::new(0.0, 0.0, 1.0);
/// let b = Sample::new(1.0, 1.0, 1.0);
/// let between = interpolate(a, a, b, b, 3);
/// assert_eq!(between.len(), 3);
/// assert!(interpolate(a, a, b, b, 0).is_empty());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn interpolate(p0: Sample, p1: Sample, p2: Sample, p3: Sample, sample_count: usize) -> Vec<Sample> {
    if sample_count == 0 {
        return Vec::new();
    }

    let x = Cubic::new(p0.position.x, p1.position.x, p2.position.x, p2.position.x);
    let y = Cubic::new(p0.position.y, p1.position.y, p2.position.y, p2.position.y);
    let pressure = Cubic::new(p0.pressure, p1.pressure, p2.pressure, p3.pressure);

    let denom = (sample_count + 1) as f64;
    (1..=sample_count)
        .map(|i| {
            let t = i as f64 / denom;
            let t2 = t * t;
            let t3 = t2 * t;
            Sample::at(
                Point::new(x.eval(t, t2, t3), y.eval(t, t2, t3)),
                pressure.eval(t, t2, t3),
            )
        })
        .collect()
}
