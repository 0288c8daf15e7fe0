use serde::Serialize;

/// A span of source text consumed by a successful evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Match<'s> {
    /// Byte offset where the match starts.
    pub start: usize,
    /// The consumed text, possibly empty.
    pub text: &'s str,
}

impl<'s> Match<'s> {
    pub fn new(start: usize, text: &'s str) -> Self {
        Self { start, text }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// A zero-length match is still a match.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset just past the match.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn as_str(&self) -> &'s str {
        self.text
    }
}

/// Outcome of evaluating a pattern at one offset.
///
/// `NoMatch` is the ordinary negative outcome, distinct from a `Matched`
/// result of length zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult<'s> {
    Matched(Match<'s>),
    NoMatch,
}

impl<'s> MatchResult<'s> {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    pub fn as_match(&self) -> Option<&Match<'s>> {
        match self {
            Self::Matched(m) => Some(m),
            Self::NoMatch => None,
        }
    }

    /// Matched text, `None` on no match.
    pub fn text(&self) -> Option<&'s str> {
        self.as_match().map(|m| m.text)
    }

    /// Matched length in bytes, `None` on no match.
    pub fn len(&self) -> Option<usize> {
        self.as_match().map(Match::len)
    }
}

impl<'s> From<MatchResult<'s>> for Option<Match<'s>> {
    fn from(result: MatchResult<'s>) -> Self {
        match result {
            MatchResult::Matched(m) => Some(m),
            MatchResult::NoMatch => None,
        }
    }
}
