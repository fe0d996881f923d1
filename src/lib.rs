//! Intersection tests for line segments on an integer grid.
//!
//! 1. [Predicates](#predicates)
//! 1. [Orthogonal Crossings](#orthogonal-crossings)
//!
//! # Predicates
//!
//! The [`predicates`] module has the exact orientation and
//! intersection tests for arbitrary (not necessarily axis-aligned)
//! segments: [`signed_area`], [`collinear`], [`is_left`], [`between`],
//! [`intersects_properly`], [`intersects_improperly`] and
//! [`intersects`].
//!
//! # Orthogonal Crossings
//!
//! This is an implementation of the plane-sweep algorithm that
//! reports all intersections between horizontal and vertical
//! segments in O(n log(n) + k) time. The simplest usage is the
//! [`Intersections`] iterator which yields every intersection point.
//!
//! For interactive use (e.g. animating the sweep), drive a [`Sweep`]
//! directly: [`Sweep::step`] moves the sweep line one unit at a time,
//! while the current position, the active horizontal segments and
//! the intersections found so far can be read back between steps.
//!
//! ## Usage
//!
//! Construct an [`Intersections`] from an iterator of any type
//! implementing the [`Crossable`] trait. The geo-type [`Line`]
//! implements this trait.
//!
//! ```rust
//! use geo::Line;
//! use ortho_crossings::Intersections;
//! use std::iter::FromIterator;
//! let input: Vec<Line<i64>> = vec![
//!     Line::from([(1, 5), (9, 5)]),
//!     Line::from([(4, 2), (4, 8)]),
//!     Line::from([(10, 2), (10, 8)]),
//! ];
//! let iter = Intersections::<_>::from_iter(input.iter());
//! let points: Vec<_> = iter.map(|c| c.x_y()).collect();
//! assert_eq!(points, vec![(4, 5)]);
//! ```
//!
//! [`Line`]: geo::Line
mod events;
pub use events::{build_events, Event, EventType};

mod crossable;
pub use crossable::{Crossable, SegmentKind};

mod segments;

mod active;

mod sweep;
pub use sweep::Sweep;

pub mod crossings;
pub use crossings::{brute_force_intersections, Intersections};

pub mod predicates;
pub use predicates::{
    between, collinear, intersects, intersects_improperly, intersects_properly, is_left,
    orientation, signed_area,
};

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;
