//! Sample: The value type flowing through the stabilizer.
//!
//! A [`Sample`] is one (position, pressure) observation. Raw device input and
//! smoothed output share this type, so a smoothed stroke can be fed anywhere a
//! raw one can.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};

/// A 2D position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Euclidean length of the vector from the origin to this point.
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(self, other: Self) -> f64 {
        (self - other).length()
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl MulAssign<f64> for Point {
    #[inline]
    fn mul_assign(&mut self, scalar: f64) {
        *self = *self * scalar;
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// One pointer observation: a position and the pressure applied there.
///
/// Equality is exact field-wise `f64` comparison. The stabilizer relies on
/// this to detect which part of its output has stopped changing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Position of the pointer.
    pub position: Point,
    /// Pressure reported by the device.
    pub pressure: f64,
}

impl Sample {
    /// Create a sample from raw coordinates and pressure.
    #[inline]
    pub const fn new(x: f64, y: f64, pressure: f64) -> Self {
        Self {
            position: Point::new(x, y),
            pressure,
        }
    }

    /// Create a sample from an existing position.
    #[inline]
    pub const fn at(position: Point, pressure: f64) -> Self {
        Self { position, pressure }
    }
}

impl From<(f64, f64, f64)> for Sample {
    #[inline]
    fn from((x, y, pressure): (f64, f64, f64)) -> Self {
        Self::new(x, y, pressure)
    }
}

/// Mean distance between consecutive sample positions.
///
/// Returns `0.0` for strokes shorter than two samples. Lower values mean a
/// smoother, denser stroke.
#[allow(clippy::cast_precision_loss)]
pub fn average_position_distance(samples: &[Sample]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let steps = (samples.len() - 1) as f64;
    samples
        .windows(2)
        .map(|pair| pair[0].position.distance_to(pair[1].position) / steps)
        .sum()
}

/// Mean absolute pressure change between consecutive samples.
///
/// Returns `0.0` for strokes shorter than two samples.
#[allow(clippy::cast_precision_loss)]
pub fn average_pressure_distance(samples: &[Sample]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let steps = (samples.len() - 1) as f64;
    samples
        .windows(2)
        .map(|pair| (pair[0].pressure - pair[1].pressure).abs() / steps)
        .sum()
}
