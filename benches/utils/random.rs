#![allow(dead_code)]

use geo::{Coordinate, Line, Rect};

use rand::Rng;

#[inline]
pub fn uniform_point<R: Rng>(rng: &mut R, bounds: Rect<i64>) -> Coordinate<i64> {
    Coordinate {
        x: rng.gen_range(bounds.min().x..=bounds.max().x),
        y: rng.gen_range(bounds.min().y..=bounds.max().y),
    }
}

#[inline]
pub fn uniform_line<R: Rng>(rng: &mut R, bounds: Rect<i64>) -> Line<i64> {
    Line::new(uniform_point(rng, bounds), uniform_point(rng, bounds))
}

/// A horizontal or vertical segment (with equal probability) with
/// both end-points uniform in `bounds`.
///
/// The segment always has a positive length; the bounds must have
/// a positive width and height.
pub fn uniform_orthogonal_line<R: Rng>(rng: &mut R, bounds: Rect<i64>) -> Line<i64> {
    let start = uniform_point(rng, bounds);
    let mut end = uniform_point(rng, bounds);
    if rng.gen::<bool>() {
        end.y = start.y;
        while end.x == start.x {
            end.x = rng.gen_range(bounds.min().x..=bounds.max().x);
        }
    } else {
        end.x = start.x;
        while end.y == start.y {
            end.y = rng.gen_range(bounds.min().y..=bounds.max().y);
        }
    }
    Line::new(start, end)
}

/// One long horizontal segment across the middle of a `size x size`
/// window, crossed by `n` evenly spaced vertical segments of random
/// extent.
pub fn horizontal_with_verticals<R: Rng>(rng: &mut R, size: i64, n: usize) -> Vec<Line<i64>> {
    let mid = size / 2;
    let reach = (size * 2 / 5).max(1);

    let mut lines = Vec::with_capacity(n + 1);
    lines.push(Line::new((1, mid), (size - 10, mid)));
    for i in 0..n {
        let x = i as i64 * size / n as i64;
        let low = mid - rng.gen_range(1..=reach);
        let high = mid + rng.gen_range(1..=reach);
        lines.push(Line::new((x, low), (x, high)));
    }
    lines
}
