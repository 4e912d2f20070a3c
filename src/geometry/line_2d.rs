use std::fmt;

use nalgebra::RealField;
use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::math::eps;

use super::{Pose2D, Vector2};

/// A directed line through two poses.
///
/// The same value serves two readings: the "line" queries treat `start` and
/// `end` as two points fixing an infinite line, while the `*_within_range`
/// queries treat them as the closed endpoints of a segment.
///
/// Geometry is position-only; the endpoint orientations are carried along but
/// only affect the `theta` of a computed intersection pose, which is
/// interpolated along `line1`.
///
/// # Zero-length lines
///
/// `start == end` is allowed. Such a line has [`Line2D::angle`] `0`, contains
/// every point under [`Line2D::is_point_on_line`], contains only its own
/// point under [`Line2D::is_point_on_line_within_range`], never intersects
/// anything, and measures distances to its single point. Use
/// [`Line2D::try_new`] to reject it up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2D<T = f64> {
    pub start: Pose2D<T>,
    pub end: Pose2D<T>,
}

impl<T: RealField + Copy> Default for Line2D<T> {
    fn default() -> Self {
        Self::new(Pose2D::default(), Pose2D::default())
    }
}

impl<T: RealField + Copy> Line2D<T> {
    #[must_use]
    pub const fn new(start: Pose2D<T>, end: Pose2D<T>) -> Self {
        Self { start, end }
    }

    /// Creates a line, rejecting coincident endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if `start` and `end` are closer
    /// than the tolerance.
    pub fn try_new(start: Pose2D<T>, end: Pose2D<T>) -> Result<Self> {
        let line = Self::new(start, end);
        if line.is_degenerate() {
            return Err(GeometryError::Degenerate(format!(
                "line endpoints coincide at ({}, {})",
                start.x, start.y
            ))
            .into());
        }
        Ok(line)
    }

    /// Creates a line between `(x1, y1)` and `(x2, y2)` with zero orientations.
    #[must_use]
    pub fn from_xy(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self::new(Pose2D::from_xy(x1, y1), Pose2D::from_xy(x2, y2))
    }

    /// Creates a line between `(x1, y1, theta1)` and `(x2, y2, theta2)`.
    #[must_use]
    pub fn from_xyt(x1: T, y1: T, theta1: T, x2: T, y2: T, theta2: T) -> Self {
        Self::new(Pose2D::new(x1, y1, theta1), Pose2D::new(x2, y2, theta2))
    }

    /// Creates a line between two positions with zero orientations.
    #[must_use]
    pub fn from_vectors(start: Vector2<T>, end: Vector2<T>) -> Self {
        Self::new(start.into(), end.into())
    }

    pub fn set(&mut self, start: Pose2D<T>, end: Pose2D<T>) {
        self.start = start;
        self.end = end;
    }

    pub fn set_xyt(&mut self, x1: T, y1: T, theta1: T, x2: T, y2: T, theta2: T) {
        self.start.set(x1, y1, theta1);
        self.end.set(x2, y2, theta2);
    }

    /// Moves the endpoints to `(x1, y1)` and `(x2, y2)`, keeping their orientations.
    pub fn set_xy(&mut self, x1: T, y1: T, x2: T, y2: T) {
        self.set_vectors(Vector2::new(x1, y1), Vector2::new(x2, y2));
    }

    /// Moves the endpoints to `start` and `end`, keeping their orientations.
    pub fn set_vectors(&mut self, start: Vector2<T>, end: Vector2<T>) {
        self.start = Pose2D::from_vector(start, self.start.theta);
        self.end = Pose2D::from_vector(end, self.end.theta);
    }

    /// The tolerance used by every query without an explicit one.
    #[must_use]
    pub fn eps() -> T {
        eps()
    }

    /// Returns `true` if the endpoints coincide within tolerance.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length() < Self::eps()
    }

    /// Distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> T {
        Pose2D::distance(self.start, self.end)
    }

    /// Bearing from `start` to `end`; `0` for a zero-length line.
    #[must_use]
    pub fn angle(&self) -> T {
        if self.is_degenerate() {
            return T::zero();
        }
        Pose2D::angle(self.start, self.end)
    }

    /// Unit vector from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a zero-length line.
    pub fn direction(&self) -> Result<Vector2<T>> {
        (self.end.position() - self.start.position()).try_normalized()
    }

    /// Returns `true` if `p` lies on the infinite line through the endpoints.
    #[must_use]
    pub fn is_point_on_line(&self, p: Pose2D<T>) -> bool {
        self.is_point_on_line_with_tolerance(p, Self::eps())
    }

    /// Collinearity test: `|cross(end - start, p - start)| < tol`.
    #[must_use]
    pub fn is_point_on_line_with_tolerance(&self, p: Pose2D<T>, tol: T) -> bool {
        Pose2D::cross(self.end - self.start, p - self.start).abs() < tol
    }

    /// Returns `true` if `p` lies on the closed segment between the endpoints.
    #[must_use]
    pub fn is_point_on_line_within_range(&self, p: Pose2D<T>) -> bool {
        self.is_point_on_line_within_range_with_tolerance(p, Self::eps())
    }

    /// Collinearity test followed by a bounding-box test.
    ///
    /// The box is closed and widened by `tol` on every axis, so endpoints are
    /// accepted, and an axis on which both endpoints coincide accepts only
    /// coordinates within `tol` of the shared value.
    #[must_use]
    pub fn is_point_on_line_within_range_with_tolerance(&self, p: Pose2D<T>, tol: T) -> bool {
        self.is_point_on_line_with_tolerance(p, tol) && self.within_bounds(p, tol)
    }

    fn within_bounds(&self, p: Pose2D<T>, tol: T) -> bool {
        let in_span = |v: T, a: T, b: T| v >= a.min(b) - tol && v <= a.max(b) + tol;
        in_span(p.x, self.start.x, self.end.x) && in_span(p.y, self.start.y, self.end.y)
    }

    /// Intersection of the two infinite lines.
    ///
    /// Returns `None` if the lines are parallel, coincident, or either is
    /// zero-length.
    #[must_use]
    pub fn intersection(line1: &Self, line2: &Self) -> Option<Pose2D<T>> {
        Self::intersection_with_tolerance(line1, line2, Self::eps())
    }

    /// [`Line2D::intersection`] treating `|cross| <= tol` as parallel.
    #[must_use]
    pub fn intersection_with_tolerance(line1: &Self, line2: &Self, tol: T) -> Option<Pose2D<T>> {
        let a = line1.end - line1.start;
        let b = line2.end - line2.start;
        let denom = Pose2D::cross(b, a);
        if denom.abs() <= tol {
            return None;
        }
        let t = Pose2D::cross(b, line2.start - line1.start) / denom;
        Some(line1.start + a * t)
    }

    /// Intersection of the two closed segments.
    #[must_use]
    pub fn intersection_within_range(line1: &Self, line2: &Self) -> Option<Pose2D<T>> {
        Self::intersection_within_range_with_tolerance(line1, line2, Self::eps())
    }

    /// Computes the infinite-line intersection and keeps it only if it falls
    /// inside both segments' bounds.
    ///
    /// The point lies on both lines by construction, so only the bound test
    /// of [`Line2D::is_point_on_line_within_range`] is applied.
    #[must_use]
    pub fn intersection_within_range_with_tolerance(
        line1: &Self,
        line2: &Self,
        tol: T,
    ) -> Option<Pose2D<T>> {
        Self::intersection_with_tolerance(line1, line2, tol)
            .filter(|&p| line1.within_bounds(p, tol) && line2.within_bounds(p, tol))
    }

    /// Coefficients `(a, b, c)` of `a·x + b·y + c = 0` through the endpoints.
    ///
    /// Non-vertical lines use the slope form `(m, -1, start.y - m·start.x)`;
    /// a vertical line (`|dx| <= eps`) uses `(1, 0, -start.x)`.
    fn implicit_coefficients(&self) -> (T, T, T) {
        let dx = self.end.x - self.start.x;
        if dx.abs() > Self::eps() {
            let slope = (self.end.y - self.start.y) / dx;
            (slope, -T::one(), -slope * self.start.x + self.start.y)
        } else {
            (T::one(), T::zero(), -self.start.x)
        }
    }

    /// Perpendicular distance from `p` to the infinite line.
    ///
    /// For a zero-length line this is the distance to its single point.
    #[must_use]
    pub fn distance_from_point_to_line(p: Pose2D<T>, line: &Self) -> T {
        Self::distance_from_point_to_line_with_tolerance(p, line, Self::eps())
    }

    /// [`Line2D::distance_from_point_to_line`] with `tol` as the zero-length
    /// cutoff. The vertical-line switch always uses [`Line2D::eps`].
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn distance_from_point_to_line_with_tolerance(p: Pose2D<T>, line: &Self, tol: T) -> T {
        if line.length() < tol {
            debug!(line = %line, "distance to zero-length line, using its start point");
            return Pose2D::distance(p, line.start);
        }
        let (a, b, c) = line.implicit_coefficients();
        trace!(a = %a, b = %b, c = %c, "implicit line coefficients");
        (a * p.x + b * p.y + c).abs() / (a * a + b * b).sqrt()
    }

    /// Distance from `p` to the closed segment.
    ///
    /// If the foot of the perpendicular from `p` falls inside the segment
    /// this is the perpendicular distance; otherwise it is the distance to
    /// the nearer endpoint.
    #[must_use]
    pub fn distance_from_point_to_line_within_range(p: Pose2D<T>, line: &Self) -> T {
        Self::distance_from_point_to_line_within_range_with_tolerance(p, line, Self::eps())
    }

    /// [`Line2D::distance_from_point_to_line_within_range`] with `tol` as the
    /// zero-length cutoff and the slack on the segment bounds. The
    /// vertical-line switch always uses [`Line2D::eps`].
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn distance_from_point_to_line_within_range_with_tolerance(
        p: Pose2D<T>,
        line: &Self,
        tol: T,
    ) -> T {
        if line.length() < tol {
            debug!(line = %line, "distance to zero-length segment, using its start point");
            return Pose2D::distance(p, line.start);
        }
        let (a, b, c) = line.implicit_coefficients();
        let norm_sq = a * a + b * b;
        let residual = a * p.x + b * p.y + c;
        let foot = Pose2D::from_xy(
            (p.x * norm_sq - a * residual) / norm_sq,
            (p.y * norm_sq - b * residual) / norm_sq,
        );

        if line.within_bounds(foot, tol) {
            trace!(a = %a, b = %b, c = %c, foot = %foot, "perpendicular foot inside segment");
            residual.abs() / norm_sq.sqrt()
        } else {
            trace!(foot = %foot, "perpendicular foot outside segment, using nearer endpoint");
            Pose2D::distance(p, line.start).min(Pose2D::distance(p, line.end))
        }
    }
}

impl<T: RealField + Copy> fmt::Display for Line2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
