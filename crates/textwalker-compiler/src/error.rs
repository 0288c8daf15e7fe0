//! Grammar errors.

use std::fmt;

use textwalker_core::Span;

/// What went wrong while compiling a pattern.
///
/// Ordered roughly by how early in a pattern the mistake shows up:
/// delimiters first, then operators, then value validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarErrorKind {
    // Delimiters
    UnclosedGroup,
    UnclosedCharSet,
    UnclosedQuantifier,
    UnbalancedClose,

    // Operators in the wrong place
    QuantifierWithoutTarget,
    StackedQuantifier,
    UnescapedSpecial,
    InvalidEscape,
    TrailingEscape,

    // Well-formed syntax, invalid value
    EmptyGroup,
    EmptyCharSet,
    InvalidRange,
    InvalidQuantifierBounds,
    QuantifierMinExceedsMax,

    // Limits
    RecursionLimitExceeded,
}

impl GrammarErrorKind {
    /// Default message for this kind.
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnclosedGroup => "unclosed group: missing `)`",
            Self::UnclosedCharSet => "unclosed character set: missing `]`",
            Self::UnclosedQuantifier => "unclosed quantifier: missing `}`",
            Self::UnbalancedClose => "closing delimiter has no matching opener",
            Self::QuantifierWithoutTarget => "quantifier has nothing to repeat",
            Self::StackedQuantifier => "quantifier follows another quantifier",
            Self::UnescapedSpecial => "special character must be escaped",
            Self::InvalidEscape => "only special characters and `\\` can be escaped",
            Self::TrailingEscape => "pattern ends inside an escape",
            Self::EmptyGroup => "group is empty",
            Self::EmptyCharSet => "character set is empty",
            Self::InvalidRange => "character range is out of order",
            Self::InvalidQuantifierBounds => "quantifier bounds must be written `{min,max}`",
            Self::QuantifierMinExceedsMax => "quantifier minimum exceeds its maximum",
            Self::RecursionLimitExceeded => "groups are nested too deeply",
        }
    }

    /// Unclosed delimiters, reported at the opening delimiter.
    pub fn is_unclosed(&self) -> bool {
        matches!(
            self,
            Self::UnclosedGroup | Self::UnclosedCharSet | Self::UnclosedQuantifier
        )
    }
}

impl fmt::Display for GrammarErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A suggested replacement for the offending span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub replacement: String,
    pub description: String,
}

/// A pattern string that is not well-formed.
///
/// Carries the offending span and text so the error can be shown against the
/// pattern it came from (see [`GrammarError::render`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {}..{}: `{fragment}`", .span.start, .span.end)]
pub struct GrammarError {
    kind: GrammarErrorKind,
    span: Span,
    fragment: String,
    pattern: String,
}

impl GrammarError {
    pub fn new(kind: GrammarErrorKind, span: Span, pattern: &str) -> Self {
        let fragment = pattern.get(span.range()).unwrap_or_default().to_owned();
        Self {
            kind,
            span,
            fragment,
            pattern: pattern.to_owned(),
        }
    }

    pub fn kind(&self) -> GrammarErrorKind {
        self.kind
    }

    /// Byte span of the offending construct in the pattern.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The offending substring.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// The full pattern that failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Machine-applicable suggestion, when there is an obvious one.
    pub fn fix(&self) -> Option<Fix> {
        match self.kind {
            GrammarErrorKind::UnescapedSpecial => Some(Fix {
                replacement: format!("\\{}", self.fragment),
                description: format!("escape `{}` to match it literally", self.fragment),
            }),
            GrammarErrorKind::InvalidRange => {
                let (low, high) = split_range(&self.fragment)?;
                Some(Fix {
                    replacement: format!("{high}-{low}"),
                    description: "swap the range bounds".to_owned(),
                })
            }
            _ => None,
        }
    }
}

/// Splits `low-high` at the unescaped dash.
fn split_range(fragment: &str) -> Option<(&str, &str)> {
    let mut escaped = false;
    for (i, c) in fragment.char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            '-' if !escaped => return Some((&fragment[..i], &fragment[i + 1..])),
            _ => escaped = false,
        }
    }
    None
}
