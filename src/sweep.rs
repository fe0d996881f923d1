use std::iter::FromIterator;

use geo::Coordinate;
use log::{debug, trace};
use slab::Slab;

use crate::{
    active::ActiveSegments,
    crossable::{Crossable, SegmentKind},
    events::{build_events, Event, EventType},
    segments::Segment,
};

/// Plane sweep over horizontal and vertical segments.
///
/// Holds the sorted event list, a cursor into it, the current sweep
/// coordinate, the horizontal segments crossed by the sweep line and
/// the intersection points found so far.
///
/// The sweep can be driven one coordinate unit at a time with
/// [`Sweep::step`] (e.g. to animate it), or from event to event with
/// [`Sweep::advance_to_next_event`] and [`Sweep::run`]. Both report
/// the same points in the same order.
///
/// Intersections are reported as `(vertical.x, horizontal.y)` for
/// every pair of a vertical and a horizontal segment that share a
/// point, including touching end-points. A pair is reported once per
/// horizontal segment, so coincident horizontal segments yield
/// repeated points.
///
/// The whole sweep runs in O(n log(n) + k) time for n segments and k
/// reported intersections.
#[derive(Debug, Clone)]
pub struct Sweep<C: Crossable> {
    segments: Slab<Segment<C>>,
    events: Vec<Event>,
    next_event: usize,
    sweep_x: i64,
    active: ActiveSegments,
    intersections: Vec<Coordinate<i64>>,
}

impl<C: Crossable> FromIterator<C> for Sweep<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Sweep::new(iter)
    }
}

impl<C: Crossable> Sweep<C> {
    /// Create a sweep over the given segments.
    ///
    /// The sweep line starts at the smallest event x-coordinate (or
    /// `0` if there are no segments).
    pub fn new<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let size = {
            let (min_size, max_size) = iter.size_hint();
            max_size.unwrap_or(min_size)
        };

        let mut segments = Slab::with_capacity(size);
        for (idx, cr) in iter.enumerate() {
            let key = Segment::new(&mut segments, cr).key();
            debug_assert_eq!(key, idx, "segment keys follow input order");
        }
        // Keys are the input positions, as `build_events` assumes.
        let events = build_events(segments.iter().map(|(_, s)| s.crossable()));

        let sweep_x = events.first().map(|e| e.x).unwrap_or(0);
        debug!(
            "sweep: {} segments, {} events, starting at x={sweep_x}",
            segments.len(),
            events.len()
        );
        Sweep {
            segments,
            events,
            next_event: 0,
            sweep_x,
            active: Default::default(),
            intersections: Vec::new(),
        }
    }

    /// Move the sweep line to `x` before the first step.
    ///
    /// Events left of `x` are not skipped: they are all handled by the
    /// next step.
    pub fn starting_at(mut self, x: i64) -> Self {
        self.sweep_x = x;
        self
    }

    /// Handle all pending events at or left of the sweep line, then
    /// move the sweep line one unit to the right.
    ///
    /// Returns the intersections found in this step.
    pub fn step(&mut self) -> &[Coordinate<i64>] {
        let found_from = self.intersections.len();
        while let Some(&event) = self.events.get(self.next_event) {
            if event.x > self.sweep_x {
                break;
            }
            self.handle_event(event);
            self.next_event += 1;
        }
        self.sweep_x = self.sweep_x.saturating_add(1);
        &self.intersections[found_from..]
    }

    /// Jump the sweep line to the next event coordinate (if it is
    /// ahead of the sweep line) and step.
    ///
    /// Returns `None` if there are no more events.
    pub fn advance_to_next_event(&mut self) -> Option<&[Coordinate<i64>]> {
        let x = self.peek_x()?;
        if x > self.sweep_x {
            debug!("jump: x={} -> x={x}", self.sweep_x);
            self.sweep_x = x;
        }
        Some(self.step())
    }

    /// Run the sweep to completion and return all intersections.
    pub fn run(&mut self) -> &[Coordinate<i64>] {
        while self.advance_to_next_event().is_some() {}
        debug_assert!(self.active.is_empty(), "active segments left after the sweep");
        &self.intersections
    }

    fn handle_event(&mut self, event: Event) {
        trace!("handling event: {event:?}");
        let kind = self
            .segments
            .get(event.segment_key)
            .expect("segment for event not found in storage")
            .kind();

        match (event.ty, kind) {
            (EventType::Start, SegmentKind::Horizontal { y, .. }) => {
                self.active.insert(event.segment_key, y);
            }
            (EventType::End, SegmentKind::Horizontal { y, .. }) => {
                self.active.remove(event.segment_key, y);
            }
            (EventType::Vertical, SegmentKind::Vertical { low, high, .. }) => {
                let x = event.x;
                let found_from = self.intersections.len();
                self.intersections.extend(
                    self.active
                        .ys_in_range(low, high)
                        .map(|y| Coordinate { x, y }),
                );
                for pt in &self.intersections[found_from..] {
                    debug!("intersection: ({}, {})", pt.x, pt.y);
                }
            }
            (ty, kind) => unreachable!("event type {ty:?} does not match segment {kind:?}"),
        }
    }

    /// The current x-coordinate of the sweep line.
    #[inline]
    pub fn sweep_x(&self) -> i64 {
        self.sweep_x
    }

    /// The x-coordinate of the next pending event.
    #[inline]
    pub fn peek_x(&self) -> Option<i64> {
        self.events.get(self.next_event).map(|e| e.x)
    }

    /// Checks if every event was handled.
    ///
    /// Once finished, stepping is a no-op apart from moving the sweep
    /// line, and no segment is active for well-formed input.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.next_event >= self.events.len()
    }

    /// All intersections found so far, in discovery order.
    #[inline]
    pub fn intersections(&self) -> &[Coordinate<i64>] {
        &self.intersections
    }

    /// The sorted event list.
    #[inline]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The horizontal segments currently crossed by the sweep line,
    /// ordered by y.
    pub fn active_segments(&self) -> impl Iterator<Item = &C> + '_ {
        self.active
            .keys()
            .map(move |key| self.segments[key].crossable())
    }

    #[inline]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Get the input stored under `key` (the position in the input
    /// sequence).
    #[inline]
    pub fn segment(&self, key: usize) -> Option<&C> {
        self.segments.get(key).map(|s| s.crossable())
    }
}
