//! Planar geometry primitives for mobile robots.
//!
//! [`Vector2`], [`Pose2D`] and [`Line2D`] are plain value types. Line and
//! segment queries compare against [`math::TOLERANCE`] unless a
//! `*_with_tolerance` variant is used.

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, ParseError, PlanarError, Result};
pub use geometry::{Line2D, Pose2D, Vector2};
