/**
 * @file cursor.rs
 * @author Krisna Pranav
 * @brief cursor
 * @version 1.0
 * @date 2024-12-02
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

use std::fmt;

/// Cursor into a source sequence.
pub trait Position {
    type Value;

    /// Yields the element under the cursor and moves one step forward.
    /// Stepping a cursor that has already reached its limit is a contract
    /// violation and panics.
    fn step(&mut self) -> Self::Value;
}

/// End marker compared against a cursor. May be a different type than the
/// cursor it bounds.
pub trait Limit<P> {
    fn is_end(&self, position: &P) -> bool;
}

/// Adapts any iterator into a [`Position`] by keeping the upcoming element
/// in a pre-fetched slot, so the end condition can be tested without
/// consuming the source.
pub struct IterCursor<I>
where
    I: Iterator,
{
    iter: I,
    peeked: Option<I::Item>,
}

impl<I> IterCursor<I>
where
    I: Iterator,
{
    pub fn new(iter: I) -> Self {
        let mut iter = iter;
        let peeked = iter.next();
        Self { iter, peeked }
    }

    pub fn peek(&self) -> Option<&I::Item> {
        self.peeked.as_ref()
    }
}

impl<I> Position for IterCursor<I>
where
    I: Iterator,
{
    type Value = I::Item;

    fn step(&mut self) -> Self::Value {
        let value = self
            .peeked
            .take()
            .expect("cursor stepped past the end of its source");
        self.peeked = self.iter.next();
        value
    }
}

/// Limit marker for [`IterCursor`]: the source is done once the pre-fetched
/// slot is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exhausted;

impl<I> Limit<IterCursor<I>> for Exhausted
where
    I: Iterator,
{
    fn is_end(&self, position: &IterCursor<I>) -> bool {
        position.peek().is_none()
    }
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            peeked: self.peeked.clone(),
        }
    }
}

impl<I, T> fmt::Debug for IterCursor<I>
where
    I: Iterator<Item = T>,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterCursor")
            .field("peeked", &self.peeked)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_through_elements_in_order() {
        let mut cursor = IterCursor::new([1, 2, 3].into_iter());
        assert!(!Exhausted.is_end(&cursor));
        assert_eq!(cursor.step(), 1);
        assert_eq!(cursor.step(), 2);
        assert_eq!(cursor.step(), 3);
        assert!(Exhausted.is_end(&cursor));
    }

    #[test]
    fn peek_does_not_consume() {
        let cursor = IterCursor::new([7].into_iter());
        assert_eq!(cursor.peek(), Some(&7));
        assert_eq!(cursor.peek(), Some(&7));
    }

    #[test]
    #[should_panic(expected = "stepped past the end")]
    fn stepping_past_the_end_panics() {
        let mut cursor = IterCursor::new(std::iter::empty::<i32>());
        cursor.step();
    }

    #[test]
    fn cloned_cursor_is_independent() {
        let mut a = IterCursor::new([1, 2].into_iter());
        let mut b = a.clone();
        assert_eq!(a.step(), 1);
        assert_eq!(b.step(), 1);
        assert_eq!(b.step(), 2);
    }
}
