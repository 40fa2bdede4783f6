/**
 * @file iter.rs
 * @author Krisna Pranav
 * @brief iter
 * @version 1.0
 * @date 2024-12-02
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

use std::fmt;
use std::iter::FusedIterator;

use crate::cursor::{Limit, Position};
use crate::entry::Entry;

enum IterState<P> {
    Positioned { index: usize, position: P },
    AtEnd,
}

/// Single-pass iterator pairing each element with its ordinal. Exactly one
/// alternative of the internal state is live at any time; the limit marker
/// sits next to it because the iteration protocol fuses begin and end into
/// one value.
pub struct IndexedIter<P, L> {
    state: IterState<P>,
    limit: L,
}

impl<P, L> IndexedIter<P, L> {
    pub(crate) fn new(position: P, limit: L) -> Self {
        Self {
            state: IterState::Positioned { index: 0, position },
            limit,
        }
    }

    pub(crate) fn at_end(limit: L) -> Self {
        Self {
            state: IterState::AtEnd,
            limit,
        }
    }

    /// Ordinal of the next entry, or `None` once the position has been
    /// retired. Always equals the number of entries produced so far.
    pub fn index(&self) -> Option<usize> {
        match &self.state {
            IterState::Positioned { index, .. } => Some(*index),
            IterState::AtEnd => None,
        }
    }
}

impl<P, L> IndexedIter<P, L>
where
    L: Limit<P>,
{
    /// True once the underlying position has reached the limit marker.
    pub fn at_limit(&self) -> bool {
        match &self.state {
            IterState::Positioned { position, .. } => self.limit.is_end(position),
            IterState::AtEnd => true,
        }
    }
}

impl<P, L> Iterator for IndexedIter<P, L>
where
    P: Position,
    L: Limit<P>,
{
    type Item = Entry<P::Value>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            IterState::AtEnd => None,
            IterState::Positioned { index, position } => {
                if self.limit.is_end(position) {
                    // retire the spent position; only the limit remains
                    self.state = IterState::AtEnd;
                    return None;
                }
                let entry = Entry {
                    index: *index,
                    value: position.step(),
                };
                *index += 1;
                Some(entry)
            }
        }
    }
}

impl<P, L> FusedIterator for IndexedIter<P, L>
where
    P: Position,
    L: Limit<P>,
{
}

impl<P, L> PartialEq for IndexedIter<P, L>
where
    L: Limit<P>,
{
    // Two mid-sequence iterators compare by ordinal alone, assuming both
    // were taken from the same view. A mid-sequence iterator equals a
    // terminal one exactly when its position has reached the limit.
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (
                IterState::Positioned { index: lhs, .. },
                IterState::Positioned { index: rhs, .. },
            ) => lhs == rhs,
            (IterState::Positioned { position, .. }, IterState::AtEnd) => {
                other.limit.is_end(position)
            }
            (IterState::AtEnd, IterState::Positioned { position, .. }) => {
                self.limit.is_end(position)
            }
            (IterState::AtEnd, IterState::AtEnd) => true,
        }
    }
}

impl<P, L> fmt::Debug for IndexedIter<P, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            IterState::Positioned { index, .. } => f
                .debug_struct("IndexedIter")
                .field("index", index)
                .finish(),
            IterState::AtEnd => f.write_str("IndexedIter(at end)"),
        }
    }
}
