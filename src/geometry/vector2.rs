use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use nalgebra::RealField;

use crate::error::{GeometryError, ParseError, Result};
use crate::math::{eps, guard};

use super::parse_tuple;

/// A two-component vector in Cartesian coordinates.
///
/// No invariant is maintained: the vector is not kept normalized, and
/// equality is exact component-wise comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T: RealField + Copy> Default for Vector2<T> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: RealField + Copy> Vector2<T> {
    /// Creates a vector from its Cartesian components.
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    #[must_use]
    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Creates a vector of length `r` pointing at `angle` radians.
    #[must_use]
    pub fn from_polar(r: T, angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(r * cos, r * sin)
    }

    /// Returns `true` if `other` has exactly the same components.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    pub fn set(&mut self, x: T, y: T) {
        self.x = x;
        self.y = y;
    }

    pub fn set_by_polar(&mut self, r: T, angle: T) {
        *self = Self::from_polar(r, angle);
    }

    /// Returns this vector rotated about the origin by `angle` radians.
    #[must_use]
    pub fn rotated(self, angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Returns this vector rotated by `angle` radians about `center`.
    #[must_use]
    pub fn rotated_about(self, center: Self, angle: T) -> Self {
        (self - center).rotated(angle) + center
    }

    /// Returns this vector rotated by `angle` radians about `(rot_x, rot_y)`.
    #[must_use]
    pub fn rotated_about_xy(self, rot_x: T, rot_y: T, angle: T) -> Self {
        self.rotated_about(Self::new(rot_x, rot_y), angle)
    }

    /// Rotates in place about the origin. See [`Vector2::rotated`].
    pub fn rotate(&mut self, angle: T) {
        *self = self.rotated(angle);
    }

    /// Rotates in place about `center`.
    pub fn rotate_about(&mut self, center: Self, angle: T) {
        *self = self.rotated_about(center, angle);
    }

    /// Rotates in place about `(rot_x, rot_y)`.
    pub fn rotate_about_xy(&mut self, rot_x: T, rot_y: T, angle: T) {
        *self = self.rotated_about_xy(rot_x, rot_y, angle);
    }

    /// Euclidean norm.
    #[must_use]
    pub fn length(&self) -> T {
        self.magnitude()
    }

    /// Euclidean norm.
    #[must_use]
    pub fn magnitude(&self) -> T {
        self.sqr_magnitude().sqrt()
    }

    /// Squared Euclidean norm.
    #[must_use]
    pub fn sqr_length(&self) -> T {
        self.sqr_magnitude()
    }

    /// Squared Euclidean norm.
    #[must_use]
    pub fn sqr_magnitude(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Scales this vector to unit length in place.
    ///
    /// A zero vector becomes non-finite (NaN components). Use
    /// [`Vector2::try_normalized`] when the input may be zero.
    pub fn normalize(&mut self) {
        *self /= self.length();
    }

    /// Returns the unit vector in this direction; non-finite for a zero vector.
    #[must_use]
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    /// Returns the unit vector in this direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the length is below tolerance.
    pub fn try_normalized(self) -> Result<Self> {
        let len = self.length();
        if len < eps() {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self / len)
    }

    /// Dot product `a.x * b.x + a.y * b.y`.
    #[must_use]
    pub fn dot(a: Self, b: Self) -> T {
        a.x * b.x + a.y * b.y
    }

    /// Scalar 2D cross product `a.x * b.y - a.y * b.x`.
    ///
    /// This is the signed area of the parallelogram spanned by `a` and `b`,
    /// positive when `b` lies counter-clockwise of `a`.
    #[must_use]
    pub fn cross(a: Self, b: Self) -> T {
        a.x * b.y - a.y * b.x
    }

    /// Bearing from `a` to `b`, in `(-π, π]`.
    #[must_use]
    pub fn angle(a: Self, b: Self) -> T {
        (b.y - a.y).atan2(b.x - a.x)
    }

    /// Euclidean distance between `a` and `b`.
    #[must_use]
    pub fn distance(a: Self, b: Self) -> T {
        (b - a).magnitude()
    }

    /// Linear interpolation from `a` to `b`.
    ///
    /// `t` is clamped to `[0, 1]`, so the result never leaves the segment.
    #[must_use]
    pub fn lerp(a: Self, b: Self, t: T) -> Self {
        let t = guard(t, T::zero(), T::one());
        Self::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: FromStr> FromStr for Vector2<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let [x, y] = parse_tuple(s, ["x", "y"])?;
        Ok(Self { x, y })
    }
}

impl<T: RealField + Copy> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: RealField + Copy> Add for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: RealField + Copy> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: RealField + Copy> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl<T: RealField + Copy> Div<T> for Vector2<T> {
    type Output = Self;

    fn div(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s)
    }
}

impl<T: RealField + Copy> AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: RealField + Copy> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: RealField + Copy> MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, s: T) {
        self.x *= s;
        self.y *= s;
    }
}

impl<T: RealField + Copy> DivAssign<T> for Vector2<T> {
    fn div_assign(&mut self, s: T) {
        self.x /= s;
        self.y /= s;
    }
}

impl<T: RealField + Copy> From<nalgebra::Vector2<T>> for Vector2<T> {
    fn from(v: nalgebra::Vector2<T>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl<T: RealField + Copy> From<Vector2<T>> for nalgebra::Vector2<T> {
    fn from(v: Vector2<T>) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl<T: RealField + Copy> From<nalgebra::Point2<T>> for Vector2<T> {
    fn from(p: nalgebra::Point2<T>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl<T: RealField + Copy> From<Vector2<T>> for nalgebra::Point2<T> {
    fn from(v: Vector2<T>) -> Self {
        nalgebra::Point2::new(v.x, v.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;

    const TOL: f64 = 1e-10;

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    fn assert_close(a: Vector2, b: Vector2) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = TOL);
        assert_abs_diff_eq!(a.y, b.y, epsilon = TOL);
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(Vector2::<f64>::default(), v(0.0, 0.0));
    }

    #[test]
    fn polar_construction() {
        let mut p = v(9.0, 9.0);
        p.set_by_polar(2.0, FRAC_PI_2);
        assert_close(p, v(0.0, 2.0));
        assert_close(Vector2::from_polar(1.0, PI), v(-1.0, 0.0));
    }

    #[test]
    fn rotate_uses_original_components() {
        // (1, 1) by 90° must land on (-1, 1). Reading the overwritten x when
        // computing y would give (-1, 0) instead.
        let mut p = v(1.0, 1.0);
        p.rotate(FRAC_PI_2);
        assert_close(p, v(-1.0, 1.0));
    }

    #[test]
    fn rotate_about_center() {
        let mut p = v(2.0, 1.0);
        p.rotate_about_xy(1.0, 1.0, PI);
        assert_close(p, v(0.0, 1.0));

        let q = v(3.0, 0.0).rotated_about(v(3.0, -1.0), -FRAC_PI_2);
        assert_close(q, v(4.0, -1.0));
    }

    #[test]
    fn length_and_squared_length() {
        let p = v(3.0, 4.0);
        assert_eq!(p.length(), 5.0);
        assert_eq!(p.magnitude(), 5.0);
        assert_eq!(p.sqr_length(), 25.0);
        assert_eq!(p.sqr_magnitude(), 25.0);
    }

    #[test]
    fn normalize_makes_unit_length() {
        let mut p = v(3.0, -4.0);
        p.normalize();
        assert_close(p, v(0.6, -0.8));
        assert_abs_diff_eq!(v(0.0, 7.0).normalized().length(), 1.0, epsilon = TOL);
    }

    #[test]
    fn normalize_zero_vector_is_non_finite() {
        let z = Vector2::<f64>::zeros().normalized();
        assert!(z.x.is_nan() && z.y.is_nan());
    }

    #[test]
    fn try_normalized_rejects_zero_vector() {
        let err = Vector2::<f64>::zeros().try_normalized().unwrap_err();
        assert!(matches!(
            err,
            crate::error::PlanarError::Geometry(GeometryError::ZeroVector)
        ));
        assert_close(v(0.0, -2.0).try_normalized().unwrap(), v(0.0, -1.0));
    }

    #[test]
    fn pairwise_operators() {
        let a = v(1.0, 2.0);
        let b = v(3.0, -1.0);
        assert_eq!(Vector2::dot(a, b), 1.0);
        assert_eq!(Vector2::cross(a, b), -7.0);
        assert_eq!(Vector2::cross(v(1.0, 0.0), v(0.0, 1.0)), 1.0);
        assert_abs_diff_eq!(Vector2::angle(v(0.0, 0.0), v(0.0, 5.0)), FRAC_PI_2, epsilon = TOL);
        assert_eq!(Vector2::distance(v(1.0, 1.0), v(4.0, 5.0)), 5.0);
    }

    #[test]
    fn lerp_clamps_parameter() {
        let a = v(0.0, 0.0);
        let b = v(10.0, 0.0);
        assert_eq!(Vector2::lerp(a, b, 0.0), a);
        assert_eq!(Vector2::lerp(a, b, 1.0), b);
        assert_eq!(Vector2::lerp(a, b, 0.25), v(2.5, 0.0));
        assert_eq!(Vector2::lerp(a, b, 2.0), b);
        assert_eq!(Vector2::lerp(a, b, -3.0), a);
    }

    #[test]
    fn arithmetic_operators() {
        let mut p = v(1.0, 2.0);
        assert_eq!(-p, v(-1.0, -2.0));
        assert_eq!(p + v(1.0, 1.0), v(2.0, 3.0));
        assert_eq!(p - v(1.0, 1.0), v(0.0, 1.0));
        assert_eq!(p * 2.0, v(2.0, 4.0));
        assert_eq!(p / 2.0, v(0.5, 1.0));

        p += v(1.0, 1.0);
        p -= v(0.5, 0.5);
        p *= 4.0;
        p /= 2.0;
        assert_eq!(p, v(3.0, 5.0));
    }

    #[test]
    fn equality_is_exact() {
        let p = v(1.0, 2.0);
        assert!(p.equals(&v(1.0, 2.0)));
        assert!(!p.equals(&v(1.0, 2.0 + 1e-15)));
        assert_ne!(p, v(2.0, 1.0));
    }

    #[test]
    fn text_form() {
        let p = v(1.5, -2.0);
        assert_eq!(p.to_string(), "(1.5, -2)");
        assert_eq!(p.to_string().parse::<Vector2>().unwrap(), p);
        assert!("1.5, -2".parse::<Vector2>().is_err());
    }

    #[test]
    fn nalgebra_interop() {
        let p = v(1.0, -3.0);
        let na: nalgebra::Vector2<f64> = p.into();
        assert_eq!(na, nalgebra::Vector2::new(1.0, -3.0));
        let pt: nalgebra::Point2<f64> = p.into();
        assert_eq!(Vector2::from(pt), p);
    }

    #[test]
    fn works_in_single_precision() {
        let p = Vector2::<f32>::new(3.0, 4.0);
        assert!((p.length() - 5.0).abs() < 1e-6);
        let r = p.rotated(std::f32::consts::PI);
        assert!((r.x + 3.0).abs() < 1e-5 && (r.y + 4.0).abs() < 1e-5);
    }

    fn coord() -> impl Strategy<Value = f64> {
        -1.0e3..1.0e3
    }

    proptest! {
        #[test]
        fn rotation_by_zero_is_identity(x in coord(), y in coord()) {
            let p = v(x, y);
            prop_assert_eq!(p.rotated(0.0), p);
        }

        #[test]
        fn rotation_round_trip(x in coord(), y in coord(), a in -10.0..10.0_f64) {
            let p = v(x, y);
            let back = p.rotated(a).rotated(-a);
            prop_assert!((back.x - x).abs() < 1e-9 && (back.y - y).abs() < 1e-9);
        }

        #[test]
        fn rotation_preserves_length(x in coord(), y in coord(), a in -10.0..10.0_f64) {
            let p = v(x, y);
            prop_assert!((p.rotated(a).length() - p.length()).abs() < 1e-9);
        }

        #[test]
        fn pairwise_symmetries(ax in coord(), ay in coord(), bx in coord(), by in coord()) {
            let a = v(ax, ay);
            let b = v(bx, by);
            prop_assert_eq!(Vector2::cross(a, b), -Vector2::cross(b, a));
            prop_assert_eq!(Vector2::dot(a, b), Vector2::dot(b, a));
            prop_assert_eq!(Vector2::distance(a, b), Vector2::distance(b, a));
        }

        #[test]
        fn lerp_stays_on_segment(ax in coord(), bx in coord(), t in -5.0..5.0_f64) {
            let p = Vector2::lerp(v(ax, 0.0), v(bx, 0.0), t);
            prop_assert!(p.x >= ax.min(bx) - 1e-9 && p.x <= ax.max(bx) + 1e-9);
        }
    }
}
