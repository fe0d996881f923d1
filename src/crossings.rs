use std::iter::FromIterator;

use geo::Coordinate;
use itertools::Itertools;

use crate::{crossable::SegmentKind, predicates::intersects, sweep::Sweep, Crossable};

/// Iterator that yields all intersection points.
///
/// Yields `(vertical.x, horizontal.y)` for every crossing or touching
/// pair of a horizontal and a vertical segment, in the order the sweep
/// discovers them: by x, and by y among the points on the same
/// vertical segment. Construct it by `collect`-ing an iterator of
/// [`Crossable`]s.
///
/// The sweep only advances as far as needed to produce the next
/// point.
pub struct Intersections<C: Crossable> {
    sweep: Sweep<C>,
    yielded: usize,
}

impl<C: Crossable> Intersections<C> {
    /// Get a reference to the underlying sweep.
    pub fn sweep(&self) -> &Sweep<C> {
        &self.sweep
    }
}

impl<C: Crossable> FromIterator<C> for Intersections<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Intersections {
            sweep: Sweep::new(iter),
            yielded: 0,
        }
    }
}

impl<C: Crossable> Iterator for Intersections<C> {
    type Item = Coordinate<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.yielded >= self.sweep.intersections().len() {
            self.sweep.advance_to_next_event()?;
        }
        let pt = self.sweep.intersections()[self.yielded];
        self.yielded += 1;
        Some(pt)
    }
}

/// Find intersections by testing every pair of a horizontal and a
/// vertical segment with [`intersects`].
///
/// Reports the same points as the sweep (as a multiset; the order
/// differs) in O(h*v) time. Useful as a reference when validating the
/// sweep.
pub fn brute_force_intersections<C: Crossable>(segments: &[C]) -> Vec<Coordinate<i64>> {
    let (horizontal, vertical): (Vec<_>, Vec<_>) = segments
        .iter()
        .map(|s| s.line())
        .partition(|l| SegmentKind::from(*l).is_horizontal());

    horizontal
        .iter()
        .cartesian_product(vertical.iter())
        .filter(|(h, v)| intersects(**h, **v))
        .map(|(h, v)| Coordinate {
            x: v.start.x,
            y: h.start.y,
        })
        .collect()
}
