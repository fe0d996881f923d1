use geo::Line;

/// Interface for types that can be processed to detect crossings.
///
/// The sweep only needs the geometry of each input; any extra data
/// carried by the implementing type is handed back untouched through
/// [`Sweep::active_segments`](crate::Sweep::active_segments) and
/// [`Sweep::segment`](crate::Sweep::segment).
pub trait Crossable {
    fn line(&self) -> Line<i64>;
}

impl Crossable for Line<i64> {
    #[inline]
    fn line(&self) -> Line<i64> {
        *self
    }
}

impl<'a, C: Crossable> Crossable for &'a C {
    #[inline]
    fn line(&self) -> Line<i64> {
        C::line(*self)
    }
}

/// Classification of a segment for the orthogonal sweep.
///
/// A segment whose end-points differ in x is horizontal; it is keyed by
/// the y-coordinate of its start. Everything else, including
/// zero-length segments, is vertical. The bounds are always ordered
/// (`left <= right`, `low <= high`) irrespective of the input order of
/// the end-points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Horizontal { y: i64, left: i64, right: i64 },
    Vertical { x: i64, low: i64, high: i64 },
}

impl From<Line<i64>> for SegmentKind {
    fn from(line: Line<i64>) -> Self {
        let (start, end) = (line.start, line.end);
        if start.x != end.x {
            SegmentKind::Horizontal {
                y: start.y,
                left: start.x.min(end.x),
                right: start.x.max(end.x),
            }
        } else {
            SegmentKind::Vertical {
                x: start.x,
                low: start.y.min(end.y),
                high: start.y.max(end.y),
            }
        }
    }
}

impl SegmentKind {
    /// Checks if the variant is horizontal.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        matches!(self, SegmentKind::Horizontal { .. })
    }
}
