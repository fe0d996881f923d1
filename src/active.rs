use std::collections::{BTreeMap, BTreeSet};

use log::trace;

/// Internal representation used in the ordered set.
///
/// Ordered by `y` and then by segment key, so that several horizontal
/// segments may share a y-coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Active {
    y: i64,
    key: usize,
}

/// The horizontal segments currently crossed by the sweep line.
///
/// Alongside the set of segments, keeps a y-index (a multiset of
/// y-coordinates stored as counts) used for range queries. Both are
/// updated together by [`ActiveSegments::insert`] and
/// [`ActiveSegments::remove`].
#[derive(Debug, Default, Clone)]
pub(crate) struct ActiveSegments {
    segments: BTreeSet<Active>,
    y_index: BTreeMap<i64, usize>,
}

impl ActiveSegments {
    pub(crate) fn insert(&mut self, key: usize, y: i64) {
        trace!("activate: key={key} y={y}");
        let inserted = self.segments.insert(Active { y, key });
        debug_assert!(inserted, "segment {key} is already active");
        if inserted {
            *self.y_index.entry(y).or_insert(0) += 1;
        }
    }

    /// Remove a segment inserted earlier with the same `key` and `y`.
    ///
    /// Removing an entry that is not present is an error in event
    /// construction; it panics in debug builds and is ignored
    /// otherwise.
    pub(crate) fn remove(&mut self, key: usize, y: i64) {
        trace!("deactivate: key={key} y={y}");
        let removed = self.segments.remove(&Active { y, key });
        debug_assert!(removed, "segment {key} is not active");
        if !removed {
            return;
        }
        match self.y_index.get_mut(&y) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                self.y_index.remove(&y);
            }
            None => unreachable!("y-index out of sync with active segments"),
        }
    }

    /// Iterate over the y-coordinates in `low..=high` in ascending
    /// order, each repeated as many times as there are active
    /// segments at that y.
    pub(crate) fn ys_in_range(&self, low: i64, high: i64) -> impl Iterator<Item = i64> + '_ {
        debug_assert!(low <= high);
        self.y_index
            .range(low..=high)
            .flat_map(|(&y, &count)| std::iter::repeat(y).take(count))
    }

    /// Keys of the active segments, ordered by y.
    pub(crate) fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.segments.iter().map(|a| a.key)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_lockstep(active: &ActiveSegments) {
        assert_eq!(active.y_index.values().sum::<usize>(), active.len());
        for a in &active.segments {
            assert!(active.y_index.get(&a.y).copied().unwrap_or(0) > 0);
        }
    }

    #[test]
    fn duplicate_ys() {
        let mut active = ActiveSegments::default();
        active.insert(0, 5);
        active.insert(1, 5);
        active.insert(2, 7);
        check_lockstep(&active);

        assert_eq!(active.ys_in_range(0, 10).collect::<Vec<_>>(), vec![5, 5, 7]);
        assert_eq!(active.ys_in_range(6, 7).collect::<Vec<_>>(), vec![7]);
        assert_eq!(active.ys_in_range(8, 8).count(), 0);
        assert_eq!(active.keys().collect::<Vec<_>>(), vec![0, 1, 2]);

        active.remove(0, 5);
        check_lockstep(&active);
        assert_eq!(active.ys_in_range(5, 5).collect::<Vec<_>>(), vec![5]);
        assert_eq!(active.keys().collect::<Vec<_>>(), vec![1, 2]);

        active.remove(1, 5);
        active.remove(2, 7);
        check_lockstep(&active);
        assert!(active.is_empty());
        assert!(active.y_index.is_empty());
    }

    #[test]
    fn closed_range() {
        let mut active = ActiveSegments::default();
        for (key, y) in [(0, -3), (1, 0), (2, 4)] {
            active.insert(key, y);
        }
        assert_eq!(active.ys_in_range(-3, 4).collect::<Vec<_>>(), vec![-3, 0, 4]);
        assert_eq!(active.ys_in_range(-2, 3).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is not active")]
    fn remove_missing() {
        let mut active = ActiveSegments::default();
        active.insert(0, 1);
        active.remove(1, 1);
    }
}
