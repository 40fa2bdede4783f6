/**
 * @file lib.rs
 * @author Krisna Pranav
 * @brief lib[indexed-view]
 * @version 1.0
 * @date 2024-12-02
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

mod cursor;
mod entry;
mod iter;
mod view;

pub use cursor::{Exhausted, IterCursor, Limit, Position};
pub use entry::Entry;
pub use iter::IndexedIter;
pub use view::{IndexedView, MutView, OwnedIndexedView, RefView};

/// View that takes ownership of its source. Use this form when the source
/// has no named owner that outlives the view.
pub fn indexed<R>(source: R) -> OwnedIndexedView<R>
where
    R: IntoIterator,
{
    tracing::trace!("indexed view taking ownership of its source");
    OwnedIndexedView::new(source)
}

/// View borrowing a named read-only source; entries alias its elements.
pub fn indexed_ref<'a, R>(source: &'a R) -> RefView<'a, R>
where
    R: ?Sized,
    &'a R: IntoIterator,
{
    tracing::trace!("indexed view borrowing a read-only source");
    IndexedView::new(IterCursor::new(source.into_iter()), Exhausted)
}

/// View borrowing a named mutable source; writes to an entry land in the
/// source's storage.
pub fn indexed_mut<'a, R>(source: &'a mut R) -> MutView<'a, R>
where
    R: ?Sized,
    &'a mut R: IntoIterator,
{
    tracing::trace!("indexed view borrowing a mutable source");
    IndexedView::new(IterCursor::new(source.into_iter()), Exhausted)
}

/// View over an explicit position/limit pair. The limit marker may be a
/// different type than the position marker.
pub fn indexed_range<P, L>(position: P, limit: L) -> IndexedView<P, L>
where
    P: Position,
    L: Limit<P>,
{
    tracing::trace!("indexed view over an explicit position/limit pair");
    IndexedView::new(position, limit)
}

pub trait IntoIndexed: Sized {
    fn indexed(self) -> OwnedIndexedView<Self>;
}

impl<R> IntoIndexed for R
where
    R: IntoIterator,
{
    fn indexed(self) -> OwnedIndexedView<Self> {
        OwnedIndexedView::new(self)
    }
}
