#![allow(dead_code)]

use std::iter::FromIterator;

use geo::Line;
use ortho_crossings::{brute_force_intersections, Intersections, Sweep};

pub fn count_sweep(lines: &[Line<i64>]) -> usize {
    Intersections::from_iter(lines.iter()).count()
}

pub fn count_stepped(lines: &[Line<i64>]) -> usize {
    let mut sweep = Sweep::new(lines.iter());
    while !sweep.is_finished() {
        sweep.step();
    }
    sweep.intersections().len()
}

pub fn count_brute(lines: &[Line<i64>]) -> usize {
    brute_force_intersections(lines).len()
}
