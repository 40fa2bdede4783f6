/**
 * @file view.rs
 * @author Krisna Pranav
 * @brief view
 * @version 1.0
 * @date 2024-12-02
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

use crate::cursor::{Exhausted, IterCursor, Limit, Position};
use crate::entry::Entry;
use crate::iter::IndexedIter;

/// Non-owning view over a captured position/limit pair. Traversals copy the
/// stored pair, so the view can be iterated repeatedly whenever the position
/// type is restartable (`Clone`).
pub struct IndexedView<P, L> {
    position: P,
    limit: L,
}

/// Borrowing view over a named read-only source.
pub type RefView<'a, R> =
    IndexedView<IterCursor<<&'a R as IntoIterator>::IntoIter>, Exhausted>;

/// Borrowing view over a named mutable source.
pub type MutView<'a, R> =
    IndexedView<IterCursor<<&'a mut R as IntoIterator>::IntoIter>, Exhausted>;

impl<P, L> IndexedView<P, L> {
    pub fn new(position: P, limit: L) -> Self {
        Self { position, limit }
    }

    /// Fresh traversal from the stored start position. Never mutates the
    /// stored pair.
    pub fn iter(&self) -> IndexedIter<P, L>
    where
        P: Clone,
        L: Clone,
    {
        IndexedIter::new(self.position.clone(), self.limit.clone())
    }

    /// Terminal iterator, for comparison against a traversal in progress.
    pub fn end(&self) -> IndexedIter<P, L>
    where
        L: Clone,
    {
        IndexedIter::at_end(self.limit.clone())
    }
}

impl<P, L> IntoIterator for IndexedView<P, L>
where
    P: Position,
    L: Limit<P>,
{
    type Item = Entry<P::Value>;
    type IntoIter = IndexedIter<P, L>;

    fn into_iter(self) -> Self::IntoIter {
        IndexedIter::new(self.position, self.limit)
    }
}

impl<'a, P, L> IntoIterator for &'a IndexedView<P, L>
where
    P: Position + Clone,
    L: Limit<P> + Clone,
{
    type Item = Entry<P::Value>;
    type IntoIter = IndexedIter<P, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning view: relocates the source into its own storage and derives fresh
/// cursors from that storage on every traversal. Sole owner of the relocated
/// source; dropping the view drops the source.
pub struct OwnedIndexedView<R> {
    source: R,
}

impl<R> OwnedIndexedView<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn iter<'a>(
        &'a self,
    ) -> IndexedIter<IterCursor<<&'a R as IntoIterator>::IntoIter>, Exhausted>
    where
        &'a R: IntoIterator,
    {
        IndexedIter::new(IterCursor::new((&self.source).into_iter()), Exhausted)
    }

    pub fn iter_mut<'a>(
        &'a mut self,
    ) -> IndexedIter<IterCursor<<&'a mut R as IntoIterator>::IntoIter>, Exhausted>
    where
        &'a mut R: IntoIterator,
    {
        IndexedIter::new(IterCursor::new((&mut self.source).into_iter()), Exhausted)
    }

    /// Releases the relocated source.
    pub fn into_inner(self) -> R {
        self.source
    }
}

impl<R> IntoIterator for OwnedIndexedView<R>
where
    R: IntoIterator,
{
    type Item = Entry<R::Item>;
    type IntoIter = IndexedIter<IterCursor<R::IntoIter>, Exhausted>;

    fn into_iter(self) -> Self::IntoIter {
        IndexedIter::new(IterCursor::new(self.source.into_iter()), Exhausted)
    }
}

// No `IntoIterator` impls for `&OwnedIndexedView` / `&mut OwnedIndexedView`:
// a candidate keyed on `&'a R: IntoIterator` matches an open `&_` goal with
// `R = OwnedIndexedView<_>` and recurses without bound. Reference traversals
// go through `iter()` / `iter_mut()` instead.
