use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use nalgebra::RealField;

use crate::error::ParseError;
use crate::math::angles::shortest_angle;
use crate::math::guard;

use super::{parse_tuple, Vector2};

/// A planar position `(x, y)` with an orientation `theta` in radians.
///
/// `theta` is stored exactly as given and is never wrapped; use
/// [`crate::math::angles`] to normalize it explicitly.
///
/// The pairwise helpers ([`Pose2D::dot`], [`Pose2D::cross`],
/// [`Pose2D::angle`], [`Pose2D::distance`]) act on position only. The
/// arithmetic operators and [`Pose2D::lerp`] act on all three fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose2D<T = f64> {
    pub x: T,
    pub y: T,
    pub theta: T,
}

impl<T: RealField + Copy> Default for Pose2D<T> {
    fn default() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }
}

impl<T: RealField + Copy> Pose2D<T> {
    #[must_use]
    pub const fn new(x: T, y: T, theta: T) -> Self {
        Self { x, y, theta }
    }

    /// Creates a pose at `(x, y)` with zero orientation.
    #[must_use]
    pub fn from_xy(x: T, y: T) -> Self {
        Self::new(x, y, T::zero())
    }

    /// Creates a pose at position `v` with orientation `theta`.
    #[must_use]
    pub fn from_vector(v: Vector2<T>, theta: T) -> Self {
        Self::new(v.x, v.y, theta)
    }

    /// Creates a pose at distance `r` and bearing `angle` from the origin,
    /// facing `orientation`.
    #[must_use]
    pub fn from_polar(r: T, angle: T, orientation: T) -> Self {
        Self::from_vector(Vector2::from_polar(r, angle), orientation)
    }

    /// The position part of this pose.
    #[must_use]
    pub fn position(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Returns `true` if `x`, `y` and `theta` are all exactly equal.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    pub fn set(&mut self, x: T, y: T, theta: T) {
        *self = Self::new(x, y, theta);
    }

    pub fn set_by_polar(&mut self, r: T, angle: T, orientation: T) {
        *self = Self::from_polar(r, angle, orientation);
    }

    /// Returns this pose with its position rotated about the origin.
    ///
    /// The orientation is left unchanged.
    #[must_use]
    pub fn rotated(self, angle: T) -> Self {
        Self::from_vector(self.position().rotated(angle), self.theta)
    }

    /// Returns this pose with its position rotated about `center`.
    #[must_use]
    pub fn rotated_about(self, center: Vector2<T>, angle: T) -> Self {
        Self::from_vector(self.position().rotated_about(center, angle), self.theta)
    }

    /// Returns this pose with its position rotated about `(rot_x, rot_y)`.
    #[must_use]
    pub fn rotated_about_xy(self, rot_x: T, rot_y: T, angle: T) -> Self {
        self.rotated_about(Vector2::new(rot_x, rot_y), angle)
    }

    pub fn rotate(&mut self, angle: T) {
        *self = self.rotated(angle);
    }

    pub fn rotate_about(&mut self, center: Vector2<T>, angle: T) {
        *self = self.rotated_about(center, angle);
    }

    pub fn rotate_about_xy(&mut self, rot_x: T, rot_y: T, angle: T) {
        *self = self.rotated_about_xy(rot_x, rot_y, angle);
    }

    /// Distance of the position from the origin.
    #[must_use]
    pub fn length(&self) -> T {
        self.magnitude()
    }

    /// Distance of the position from the origin.
    #[must_use]
    pub fn magnitude(&self) -> T {
        self.sqr_magnitude().sqrt()
    }

    #[must_use]
    pub fn sqr_length(&self) -> T {
        self.sqr_magnitude()
    }

    #[must_use]
    pub fn sqr_magnitude(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Dot product of the positions.
    #[must_use]
    pub fn dot(a: Self, b: Self) -> T {
        Vector2::dot(a.position(), b.position())
    }

    /// Scalar cross product of the positions.
    #[must_use]
    pub fn cross(a: Self, b: Self) -> T {
        Vector2::cross(a.position(), b.position())
    }

    /// Bearing from the position of `a` to the position of `b`.
    #[must_use]
    pub fn angle(a: Self, b: Self) -> T {
        Vector2::angle(a.position(), b.position())
    }

    /// Euclidean distance between the positions.
    #[must_use]
    pub fn distance(a: Self, b: Self) -> T {
        Vector2::distance(a.position(), b.position())
    }

    /// Linear interpolation of `x`, `y` and `theta` with `t` clamped to `[0, 1]`.
    ///
    /// `theta` is interpolated as a plain scalar, so going from `-3.0` to
    /// `3.0` sweeps through zero rather than across `±π`. See
    /// [`Pose2D::lerp_shortest`] for the wrap-aware variant.
    #[must_use]
    pub fn lerp(a: Self, b: Self, t: T) -> Self {
        let t = guard(t, T::zero(), T::one());
        Self::new(
            a.x + (b.x - a.x) * t,
            a.y + (b.y - a.y) * t,
            a.theta + (b.theta - a.theta) * t,
        )
    }

    /// Like [`Pose2D::lerp`], but turns `theta` along the shorter arc.
    ///
    /// The resulting orientation is `a.theta` plus a fraction of the wrapped
    /// difference and is itself not normalized.
    #[must_use]
    pub fn lerp_shortest(a: Self, b: Self, t: T) -> Self {
        let t = guard(t, T::zero(), T::one());
        let position = Vector2::lerp(a.position(), b.position(), t);
        Self::from_vector(position, a.theta + shortest_angle(a.theta, b.theta) * t)
    }

    /// `lerp(a, b, 0.5)`.
    #[must_use]
    pub fn midpoint(a: Self, b: Self) -> Self {
        Self::lerp(a, b, nalgebra::convert(0.5))
    }
}

impl<T: fmt::Display> fmt::Display for Pose2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.theta)
    }
}

impl<T: FromStr> FromStr for Pose2D<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, theta] = parse_tuple(s, ["x", "y", "theta"])?;
        Ok(Self { x, y, theta })
    }
}

impl<T: RealField + Copy> From<Vector2<T>> for Pose2D<T> {
    fn from(v: Vector2<T>) -> Self {
        Self::from_vector(v, T::zero())
    }
}

impl<T: RealField + Copy> From<Pose2D<T>> for Vector2<T> {
    fn from(p: Pose2D<T>) -> Self {
        p.position()
    }
}

impl<T: RealField + Copy> From<nalgebra::Point2<T>> for Pose2D<T> {
    fn from(p: nalgebra::Point2<T>) -> Self {
        Self::from_xy(p.x, p.y)
    }
}

/// The rotation angle comes back wrapped into `(-π, π]`.
impl<T: RealField + Copy> From<nalgebra::Isometry2<T>> for Pose2D<T> {
    fn from(iso: nalgebra::Isometry2<T>) -> Self {
        let t = iso.translation.vector;
        Self::new(t.x, t.y, iso.rotation.angle())
    }
}

impl<T: RealField + Copy> From<Pose2D<T>> for nalgebra::Isometry2<T> {
    fn from(p: Pose2D<T>) -> Self {
        nalgebra::Isometry2::new(nalgebra::Vector2::new(p.x, p.y), p.theta)
    }
}

impl<T: RealField + Copy> Neg for Pose2D<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.theta)
    }
}

impl<T: RealField + Copy> Add for Pose2D<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.theta + rhs.theta)
    }
}

impl<T: RealField + Copy> Sub for Pose2D<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.theta - rhs.theta)
    }
}

impl<T: RealField + Copy> Mul<T> for Pose2D<T> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.theta * s)
    }
}

impl<T: RealField + Copy> Div<T> for Pose2D<T> {
    type Output = Self;

    fn div(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s, self.theta / s)
    }
}

impl<T: RealField + Copy> AddAssign for Pose2D<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: RealField + Copy> SubAssign for Pose2D<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: RealField + Copy> MulAssign<T> for Pose2D<T> {
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

impl<T: RealField + Copy> DivAssign<T> for Pose2D<T> {
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}
