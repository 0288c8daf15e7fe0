#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for textwalker patterns.
//!
//! A compiled pattern is an ordered sequence of [`Term`]s. Each term pairs a
//! [`PatternNode`] (literal, character set or group) with the [`Quantifier`]
//! that governs how many times it repeats. Groups own a nested [`Pattern`],
//! so arbitrarily deep nesting is plain ownership-by-containment.
//!
//! This crate holds only data: parsing lives in `textwalker-compiler`,
//! matching in `textwalker-vm`.

mod ast;
mod colors;
mod display;
mod dump;


pub use ast::{CharRange, CharSet, Pattern, PatternNode, Quantifier, Term};
pub use colors::Colors;

/// Characters that act as operators and must be escaped to be matched literally.
pub const SPECIAL_CHARS: [char; 10] = ['(', ')', '[', ']', '{', '}', '-', '+', '*', '?'];

/// The escape character.
pub const ESCAPE: char = '\\';

/// Whether `c` is one of the grammar's operator characters.
#[inline]
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(&c)
}

/// Whether `c` must be written with a leading backslash in pattern syntax.
#[inline]
pub fn needs_escape(c: char) -> bool {
    c == ESCAPE || is_special(c)
}

/// Byte range inside a pattern or a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    pub fn cover(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
