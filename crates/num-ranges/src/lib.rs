/**
 * @file lib.rs
 * @author Krisna Pranav
 * @brief lib[num-ranges]
 * @version 1.0
 * @date 2024-12-02
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

use indexed_view::{Limit, Position};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("range from {from} to {to} would run backwards")]
    Descending { from: i64, to: i64 },

    #[error("range step must be positive, got {0}")]
    NonPositiveStep(i64),
}

/// One-pass arithmetic generator. Yields values, not references, so an
/// indexed view over it hands out owned copies.
#[derive(Debug, Clone)]
pub struct NumericRange {
    next: i64,
    to: i64,
    step: i64,
}

impl NumericRange {
    pub fn new(from: i64, to: i64, step: i64) -> Result<Self, RangeError> {
        if step <= 0 {
            return Err(RangeError::NonPositiveStep(step));
        }
        if to < from {
            return Err(RangeError::Descending { from, to });
        }
        Ok(Self {
            next: from,
            to,
            step,
        })
    }
}

impl Iterator for NumericRange {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.to {
            return None;
        }
        let value = self.next;
        self.next += self.step;
        Some(value)
    }
}

/// Cursor counting upward by a fixed stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCursor {
    value: i64,
    stride: i64,
}

impl StepCursor {
    pub fn new(start: i64, stride: i64) -> Self {
        Self {
            value: start,
            stride,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Position for StepCursor {
    type Value = i64;

    fn step(&mut self) -> i64 {
        let value = self.value;
        self.value += self.stride;
        value
    }
}

/// End marker for [`StepCursor`] with a type of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cutoff(pub i64);

impl Limit<StepCursor> for Cutoff {
    fn is_end(&self, position: &StepCursor) -> bool {
        position.value() >= self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexed_view::{indexed, indexed_range, Entry};

    #[test]
    fn generator_entries_are_owned_values() {
        let range = NumericRange::new(5, 13, 2).unwrap();
        let entries: Vec<Entry<i64>> = indexed(range).into_iter().collect();
        assert_eq!(
            entries,
            vec![
                Entry { index: 0, value: 5 },
                Entry { index: 1, value: 7 },
                Entry { index: 2, value: 9 },
                Entry { index: 3, value: 11 },
            ]
        );
    }

    #[test]
    fn heterogeneous_limit_terminates_after_n_steps() {
        let view = indexed_range(StepCursor::new(0, 3), Cutoff(9));
        let entries: Vec<_> = view.iter().collect();
        assert_eq!(
            entries,
            vec![
                Entry { index: 0, value: 0 },
                Entry { index: 1, value: 3 },
                Entry { index: 2, value: 6 },
            ]
        );
    }

    #[test]
    fn raw_pair_view_is_reusable() {
        let view = indexed_range(StepCursor::new(5, 2), Cutoff(11));
        let a: Vec<_> = view.iter().collect();
        let b: Vec<_> = view.iter().collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn empty_raw_pair_view_starts_at_the_limit() {
        let view = indexed_range(StepCursor::new(4, 1), Cutoff(4));
        assert!(view.iter() == view.end());
        assert!(view.iter().next().is_none());
    }

    #[test]
    fn descending_ranges_are_rejected() {
        assert_eq!(
            NumericRange::new(10, 4, 1).unwrap_err(),
            RangeError::Descending { from: 10, to: 4 }
        );
        assert_eq!(
            NumericRange::new(0, 4, 0).unwrap_err(),
            RangeError::NonPositiveStep(0)
        );
    }

    #[test]
    fn exhausted_generator_stays_done() {
        let mut range = NumericRange::new(0, 2, 1).unwrap();
        assert_eq!(range.next(), Some(0));
        assert_eq!(range.next(), Some(1));
        assert_eq!(range.next(), None);
        assert_eq!(range.next(), None);
    }
}
