//! Canonical pattern syntax.
//!
//! Printing a [`Pattern`] yields a pattern string that compiles back to an
//! equivalent pattern: every special character is escaped, and a quantified
//! multi-character literal is wrapped in a group so the quantifier keeps
//! applying to the whole literal.

use std::fmt::{self, Display, Formatter, Write};

use crate::{CharRange, CharSet, Pattern, PatternNode, Quantifier, Term, needs_escape};

fn write_char(f: &mut Formatter<'_>, c: char) -> fmt::Result {
    if needs_escape(c) {
        f.write_char(crate::ESCAPE)?;
    }
    f.write_char(c)
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactlyOne => Ok(()),
            Self::ZeroOrMore => f.write_char('*'),
            Self::ZeroOrOne => f.write_char('?'),
            Self::OneOrMore => f.write_char('+'),
            Self::Range { min, max } => write!(f, "{{{min},{max}}}"),
        }
    }
}

impl Display for CharRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_char(f, self.low)?;
        f.write_char('-')?;
        write_char(f, self.high)
    }
}

impl Display for CharSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for &c in &self.members {
            write_char(f, c)?;
        }
        for range in &self.ranges {
            write!(f, "{range}")?;
        }
        f.write_char(']')
    }
}

impl Display for PatternNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { text } => text.chars().try_for_each(|c| write_char(f, c)),
            Self::CharSet(set) => write!(f, "{set}"),
            Self::Group { body } => write!(f, "({body})"),
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let needs_group = match &self.node {
            PatternNode::Literal { text } => {
                self.quantifier.is_explicit() && text.chars().nth(1).is_some()
            }
            _ => false,
        };
        if needs_group {
            write!(f, "({}){}", self.node, self.quantifier)
        } else {
            write!(f, "{}{}", self.node, self.quantifier)
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|term| write!(f, "{term}"))
    }
}
