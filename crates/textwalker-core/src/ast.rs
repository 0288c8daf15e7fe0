//! Pattern AST.
//!
//! Immutable once built. A [`Pattern`] is cheap to share read-only between
//! walkers; nothing in here holds interior mutability.

use indexmap::IndexSet;
use serde::Serialize;

use crate::Span;

/// Repetition constraint attached to every term.
///
/// The implicit quantifier (no operator written) is [`Quantifier::ExactlyOne`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Quantifier {
    #[default]
    ExactlyOne,
    /// `*`
    ZeroOrMore,
    /// `?`
    ZeroOrOne,
    /// `+`
    OneOrMore,
    /// `{min,max}`, with `min <= max`.
    Range { min: u32, max: u32 },
}

impl Quantifier {
    /// Minimum number of repetitions required.
    pub const fn min(&self) -> u32 {
        match self {
            Self::ExactlyOne | Self::OneOrMore => 1,
            Self::ZeroOrMore | Self::ZeroOrOne => 0,
            Self::Range { min, .. } => *min,
        }
    }

    /// Maximum number of repetitions allowed, `None` when unbounded.
    pub const fn max(&self) -> Option<u32> {
        match self {
            Self::ExactlyOne | Self::ZeroOrOne => Some(1),
            Self::ZeroOrMore | Self::OneOrMore => None,
            Self::Range { max, .. } => Some(*max),
        }
    }

    /// Whether zero repetitions satisfy this quantifier.
    pub const fn accepts_empty(&self) -> bool {
        self.min() == 0
    }

    /// Whether another repetition may be attempted after `count` successful ones.
    pub const fn allows_another(&self, count: u32) -> bool {
        match self.max() {
            Some(max) => count < max,
            None => true,
        }
    }

    /// Whether `count` repetitions satisfy the minimum.
    pub const fn is_satisfied_by(&self, count: u32) -> bool {
        count >= self.min()
    }

    /// `false` only for the implicit exactly-one quantifier.
    pub const fn is_explicit(&self) -> bool {
        !matches!(self, Self::ExactlyOne)
    }
}

/// Inclusive character range, compared by code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CharRange {
    pub low: char,
    pub high: char,
}

impl CharRange {
    pub const fn new(low: char, high: char) -> Self {
        Self { low, high }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.low <= c && c <= self.high
    }
}

/// `[...]`: matches exactly one character.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CharSet {
    /// Single characters, in the order they were written.
    pub members: IndexSet<char>,
    /// Inclusive ranges, in the order they were written.
    pub ranges: Vec<CharRange>,
}

impl CharSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single member. Returns `false` if it was already present.
    pub fn insert(&mut self, c: char) -> bool {
        self.members.insert(c)
    }

    pub fn push_range(&mut self, range: CharRange) {
        self.ranges.push(range);
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.ranges.is_empty()
    }

    /// Whether `c` equals a member or falls inside a range.
    pub fn matches(&self, c: char) -> bool {
        self.members.contains(&c) || self.ranges.iter().any(|r| r.contains(c))
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
            ranges: Vec::new(),
        }
    }
}

/// The atom of a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternNode {
    /// Exact character sequence. Never empty.
    Literal { text: String },
    CharSet(CharSet),
    /// Parenthesized sub-pattern matched as one unit. Never empty.
    Group { body: Pattern },
}

impl PatternNode {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal { text: text.into() }
    }

    pub fn group(body: Pattern) -> Self {
        Self::Group { body }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }
}

/// A node with its quantifier and its location in the pattern text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Term {
    pub node: PatternNode,
    pub quantifier: Quantifier,
    /// Bytes of the pattern string this term was compiled from, quantifier included.
    pub span: Span,
}

impl Term {
    pub fn new(node: PatternNode, quantifier: Quantifier, span: Span) -> Self {
        Self {
            node,
            quantifier,
            span,
        }
    }

    /// Term with the implicit exactly-one quantifier.
    pub fn single(node: PatternNode, span: Span) -> Self {
        Self::new(node, Quantifier::ExactlyOne, span)
    }
}

/// Compiled pattern: terms matched strictly left to right.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Pattern {
    terms: Vec<Term>,
}

impl Pattern {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// An empty pattern matches the empty string everywhere.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Deepest group nesting (0 for a pattern without groups).
    pub fn depth(&self) -> usize {
        self.terms
            .iter()
            .map(|t| match &t.node {
                PatternNode::Group { body } => 1 + body.depth(),
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
