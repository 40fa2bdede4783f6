/**
 * @file entry.rs
 * @author Krisna Pranav
 * @brief entry
 * @version 1.0
 * @date 2024-12-02
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

/// One traversal step: the zero-based ordinal of the element and the element
/// itself. `value` aliases the source's storage when the source lends
/// references, and is an owned copy when the source yields by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<V> {
    pub index: usize,
    pub value: V,
}
