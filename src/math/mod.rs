pub mod angles;

use nalgebra::RealField;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns [`TOLERANCE`] converted to the scalar type `T`.
#[must_use]
pub fn eps<T: RealField + Copy>() -> T {
    nalgebra::convert(TOLERANCE)
}

/// Clamps `value` into `[min, max]`.
///
/// Returns `min` if `value < min`, `max` if `value > max`, and `value` otherwise.
/// Unlike [`f64::clamp`] this never panics when `min > max` and only needs
/// `PartialOrd`; a NaN `value` is returned unchanged.
#[must_use]
pub fn guard<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
