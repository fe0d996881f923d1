//! Orientation and intersection predicates over integer points.
//!
//! All functions here are total: any pair of segments (including
//! non axis-aligned ones) over the full `i64` range is accepted, and
//! every orientation decision is exact. Zero-length segments are
//! accepted but the answers are only the literal result of the
//! formulas.
use geo::{kernels::Orientation, Coordinate, Line};

/// Returns twice the signed area of the triangle `abc`.
///
/// The area is positive if `c` is strictly to the left of the
/// directed line `a -> b`, negative if it is strictly to the right and
/// zero if the three points are collinear.
///
/// The sign is always exact. The magnitude is exact up to
/// `i128::MAX`; larger areas (only possible with coordinates near the
/// ends of the `i64` range) saturate to `i128::MAX` or `-i128::MAX`.
pub fn signed_area(a: Coordinate<i64>, b: Coordinate<i64>, c: Coordinate<i64>) -> i128 {
    let (ax, ay) = (a.x as i128, a.y as i128);
    let (bx, by) = (b.x as i128, b.y as i128);
    let (cx, cy) = (c.x as i128, c.y as i128);

    // Differences fit in `i128`, but their products need up to 128
    // bits of magnitude, so multiply magnitudes as `u128`.
    let (lneg, lmag) = product(bx - ax, cy - ay);
    let (rneg, rmag) = product(cx - ax, by - ay);

    // left - right
    let (neg, mag) = if lneg != rneg {
        (lneg, lmag.saturating_add(rmag))
    } else if lmag >= rmag {
        (lneg, lmag - rmag)
    } else {
        (!lneg, rmag - lmag)
    };
    let mag = mag.min(i128::MAX as u128) as i128;
    if neg {
        -mag
    } else {
        mag
    }
}

/// Product of two values of magnitude below `2^64`, as a sign flag
/// (`true` if negative) and magnitude.
#[inline]
fn product(a: i128, b: i128) -> (bool, u128) {
    ((a < 0) != (b < 0), a.unsigned_abs() * b.unsigned_abs())
}

/// Orientation of `c` relative to the directed line `a -> b`.
pub fn orientation(a: Coordinate<i64>, b: Coordinate<i64>, c: Coordinate<i64>) -> Orientation {
    match signed_area(a, b, c) {
        area if area > 0 => Orientation::CounterClockwise,
        area if area < 0 => Orientation::Clockwise,
        _ => Orientation::Collinear,
    }
}

/// Checks if `p`, `q` and `r` lie on a common line.
#[inline]
pub fn collinear(p: Coordinate<i64>, q: Coordinate<i64>, r: Coordinate<i64>) -> bool {
    signed_area(p, q, r) == 0
}

/// Checks if `c` is strictly to the left of the directed line `a -> b`.
#[inline]
pub fn is_left(a: Coordinate<i64>, b: Coordinate<i64>, c: Coordinate<i64>) -> bool {
    signed_area(a, b, c) > 0
}

/// Checks if `c` lies on the closed segment `a-b`.
///
/// The point must be collinear with `a` and `b`. Containment is then
/// checked on the x-axis, or on the y-axis if the segment is
/// vertical.
pub fn between(a: Coordinate<i64>, b: Coordinate<i64>, c: Coordinate<i64>) -> bool {
    if !collinear(a, b, c) {
        return false;
    }
    let (lo, hi, v) = if a.x != b.x {
        (a.x.min(b.x), a.x.max(b.x), c.x)
    } else {
        (a.y.min(b.y), a.y.max(b.y), c.y)
    };
    lo <= v && v <= hi
}

/// Checks if the two segments cross at a point interior to both.
///
/// Returns `false` whenever an end-point of one segment is collinear
/// with the other segment.
pub fn intersects_properly(s1: Line<i64>, s2: Line<i64>) -> bool {
    if collinear(s1.start, s1.end, s2.start)
        || collinear(s1.start, s1.end, s2.end)
        || collinear(s2.start, s2.end, s1.start)
        || collinear(s2.start, s2.end, s1.end)
    {
        return false;
    }

    (is_left(s1.start, s1.end, s2.start) ^ is_left(s1.start, s1.end, s2.end))
        && (is_left(s2.start, s2.end, s1.start) ^ is_left(s2.start, s2.end, s1.end))
}

/// Checks if the two segments intersect, but not properly.
///
/// This covers shared end-points, an end-point touching the interior
/// of the other segment, and collinear overlaps.
pub fn intersects_improperly(s1: Line<i64>, s2: Line<i64>) -> bool {
    intersects(s1, s2) && !intersects_properly(s1, s2)
}

/// Checks if the two closed segments share at least one point.
pub fn intersects(s1: Line<i64>, s2: Line<i64>) -> bool {
    intersects_properly(s1, s2)
        || between(s1.start, s1.end, s2.start)
        || between(s1.start, s1.end, s2.end)
        || between(s2.start, s2.end, s1.start)
        || between(s2.start, s2.end, s1.end)
}
