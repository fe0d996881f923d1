use slab::Slab;

use crate::crossable::{Crossable, SegmentKind};

/// An input [`Crossable`] stored in the sweep's slab.
#[derive(Debug, Clone)]
pub(crate) struct Segment<C: Crossable> {
    key: usize,
    kind: SegmentKind,
    crossable: C,
}

impl<C: Crossable> Segment<C> {
    /// Create and store a `Segment` with the given `crossable`.
    pub(crate) fn new(storage: &mut Slab<Self>, crossable: C) -> &mut Self {
        let entry = storage.vacant_entry();
        let segment = Segment {
            key: entry.key(),
            kind: crossable.line().into(),
            crossable,
        };
        entry.insert(segment)
    }

    /// Get the segment's key.
    #[inline]
    pub(crate) fn key(&self) -> usize {
        self.key
    }

    #[inline]
    pub(crate) fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Get a reference to the segment's crossable.
    #[inline]
    pub(crate) fn crossable(&self) -> &C {
        &self.crossable
    }
}
