use smallvec::{smallvec, SmallVec};

use crate::{crossable::SegmentKind, Crossable};

/// A sweep event for the orthogonal sweep.
///
/// Events are ordered by `x`, then by `ty`, then by `segment_key`. The
/// derived ordering relies on the field declaration order below; the
/// key makes it a total order so an unstable sort is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Event {
    /// The x-coordinate at which the event fires.
    pub x: i64,
    pub ty: EventType,
    /// Key of the segment that produced the event.
    pub segment_key: usize,
}

/// Event type to associate with event.
///
/// The ordering of the variants is important for the algorithm. At a
/// common x-coordinate, horizontal segments starting there must be
/// active before a vertical segment queries the active structure,
/// and those ending there must be removed only after. This reports
/// intersections where the segments merely touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventType {
    Start,
    Vertical,
    End,
}

/// Get the events for a single segment: two for a horizontal segment,
/// one for a vertical.
pub(crate) fn segment_events(segment_key: usize, kind: SegmentKind) -> SmallVec<[Event; 2]> {
    match kind {
        SegmentKind::Horizontal { left, right, .. } => smallvec![
            Event {
                x: left,
                ty: EventType::Start,
                segment_key,
            },
            Event {
                x: right,
                ty: EventType::End,
                segment_key,
            },
        ],
        SegmentKind::Vertical { x, .. } => smallvec![Event {
            x,
            ty: EventType::Vertical,
            segment_key,
        }],
    }
}

/// Build the sorted event list for a sequence of segments.
///
/// The `segment_key` of each event is the position of its segment in
/// the input sequence.
pub fn build_events<I>(segments: I) -> Vec<Event>
where
    I: IntoIterator,
    I::Item: Crossable,
{
    let iter = segments.into_iter();
    let mut events = Vec::with_capacity(2 * iter.size_hint().0);
    for (key, segment) in iter.enumerate() {
        events.extend(segment_events(key, segment.line().into()));
    }
    events.sort_unstable();
    events
}

#[cfg(test)]
mod tests {
    use geo::Line;

    use super::*;

    #[test]
    fn test_event_ordering() {
        let e1 = Event {
            x: 0,
            ty: EventType::End,
            segment_key: 3,
        };
        let e2 = Event {
            x: 1,
            ty: EventType::Start,
            segment_key: 2,
        };
        let e3 = Event {
            x: 1,
            ty: EventType::Vertical,
            segment_key: 0,
        };
        let e4 = Event {
            x: 1,
            ty: EventType::End,
            segment_key: 1,
        };
        let e5 = Event {
            x: 1,
            ty: EventType::End,
            segment_key: 4,
        };

        let mut events = vec![e5, e3, e1, e4, e2];
        events.sort_unstable();
        assert_eq!(events, vec![e1, e2, e3, e4, e5]);
    }

    #[test]
    fn test_build_events() {
        let input: Vec<Line<i64>> = vec![
            Line::from([(1, 5), (9, 5)]),
            Line::from([(4, 8), (4, 2)]),
            Line::from([(7, 1), (2, 1)]),
        ];
        let events = build_events(&input);
        let summary: Vec<_> = events.iter().map(|e| (e.x, e.ty, e.segment_key)).collect();
        assert_eq!(
            summary,
            vec![
                (1, EventType::Start, 0),
                (2, EventType::Start, 2),
                (4, EventType::Vertical, 1),
                (7, EventType::End, 2),
                (9, EventType::End, 0),
            ]
        );
    }

    #[test]
    fn test_build_events_empty() {
        let input: Vec<Line<i64>> = vec![];
        assert!(build_events(&input).is_empty());
    }
}
