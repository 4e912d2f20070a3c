//! Angle conversion and wrapping helpers.
//!
//! None of the geometry types normalize their orientation automatically;
//! these functions are the explicit way to do so.

use nalgebra::RealField;

/// Converts degrees to radians.
#[must_use]
pub fn radians<T: RealField + Copy>(degrees: T) -> T {
    degrees * T::pi() / nalgebra::convert::<f64, T>(180.0)
}

/// Converts radians to degrees.
#[must_use]
pub fn degrees<T: RealField + Copy>(radians: T) -> T {
    radians * nalgebra::convert::<f64, T>(180.0) / T::pi()
}

/// Wraps `angle` into `[0, 2π)`.
#[must_use]
pub fn normalize_positive<T: RealField + Copy>(angle: T) -> T {
    let two_pi = T::two_pi();
    let result = angle % two_pi;
    if result < T::zero() {
        result + two_pi
    } else {
        result
    }
}

/// Wraps `angle` into `(-π, π]`.
#[must_use]
pub fn normalize<T: RealField + Copy>(angle: T) -> T {
    let pi = T::pi();
    let result = (angle + pi) % T::two_pi();
    if result <= T::zero() {
        result + pi
    } else {
        result - pi
    }
}

/// Signed smallest rotation taking `from` to `to`, in `(-π, π]`.
#[must_use]
pub fn shortest_angle<T: RealField + Copy>(from: T, to: T) -> T {
    normalize(to - from)
}

/// Returns the same heading reached by rotating the other way round.
///
/// A positive angle maps to a negative one and vice versa; zero maps to `2π`.
#[must_use]
pub fn complement<T: RealField + Copy>(angle: T) -> T {
    let two_pi = T::two_pi();
    let angle = if angle > two_pi || angle < -two_pi {
        angle % two_pi
    } else {
        angle
    };
    if angle < T::zero() {
        two_pi + angle
    } else if angle > T::zero() {
        angle - two_pi
    } else {
        two_pi
    }
}
