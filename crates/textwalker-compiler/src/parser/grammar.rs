use textwalker_core::{CharRange, CharSet, Pattern, PatternNode, Quantifier, Span, Term};

use super::{Parser, coalesce_literals};
use crate::Result;
use crate::error::GrammarErrorKind;
use crate::lexer::TokenKind;

impl Parser<'_> {
    /// Terms up to the end of input, or up to the `)` closing the group opened
    /// at `open`. The closing paren is left for the caller.
    pub(super) fn parse_terms(&mut self, open: Option<Span>) -> Result<Vec<Term>> {
        let mut terms = Vec::new();

        loop {
            let Some(token) = self.current_token() else {
                if let Some(open) = open {
                    return Err(self.error(GrammarErrorKind::UnclosedGroup, open));
                }
                break;
            };

            let node = match token.kind {
                TokenKind::ParenClose if open.is_some() => break,
                TokenKind::ParenClose | TokenKind::BracketClose | TokenKind::BraceClose => {
                    return Err(self.error(GrammarErrorKind::UnbalancedClose, token.span));
                }
                // A quantifier directly after an atom is consumed below, so
                // reaching one here means it has no atom of its own.
                kind if kind.is_quantifier_start() => {
                    let kind = if terms.is_empty() {
                        GrammarErrorKind::QuantifierWithoutTarget
                    } else {
                        GrammarErrorKind::StackedQuantifier
                    };
                    return Err(self.error(kind, token.span));
                }
                TokenKind::Dash => {
                    return Err(self.error(GrammarErrorKind::UnescapedSpecial, token.span));
                }
                TokenKind::ParenOpen => self.parse_group()?,
                TokenKind::BracketOpen => self.parse_char_set()?,
                TokenKind::Backslash => PatternNode::literal(self.parse_escape()?),
                _ => {
                    self.bump();
                    PatternNode::literal(self.char_of(&token))
                }
            };

            let quantifier = self.parse_quantifier()?;
            terms.push(Term::new(node, quantifier, self.span_from(token.span.start)));
        }

        Ok(coalesce_literals(terms))
    }

    /// `(` Pattern `)`
    fn parse_group(&mut self) -> Result<PatternNode> {
        let open = self.bump().span;
        if !self.enter_recursion() {
            return Err(self.error(GrammarErrorKind::RecursionLimitExceeded, open));
        }

        let body = self.parse_terms(Some(open))?;
        self.bump(); // closing paren
        self.exit_recursion();

        if body.is_empty() {
            return Err(self.error(GrammarErrorKind::EmptyGroup, self.span_from(open.start)));
        }
        Ok(PatternNode::group(Pattern::new(body)))
    }

    /// `[` (SetChar | SetChar `-` SetChar)+ `]`
    fn parse_char_set(&mut self) -> Result<PatternNode> {
        let open = self.bump().span;
        let mut set = CharSet::new();

        loop {
            let Some(token) = self.current_token() else {
                return Err(self.error(GrammarErrorKind::UnclosedCharSet, open));
            };

            if token.kind == TokenKind::BracketClose {
                self.bump();
                if set.is_empty() {
                    let span = self.span_from(open.start);
                    return Err(self.error(GrammarErrorKind::EmptyCharSet, span));
                }
                return Ok(PatternNode::CharSet(set));
            }

            let low = self.parse_set_char()?;
            if !self.currently_is(TokenKind::Dash) {
                set.insert(low);
                continue;
            }

            let dash = self.bump().span;
            match self.current() {
                None => return Err(self.error(GrammarErrorKind::UnclosedCharSet, open)),
                // `[a-]`: a dash must sit between two characters
                Some(TokenKind::BracketClose) => {
                    return Err(self.error(GrammarErrorKind::UnescapedSpecial, dash));
                }
                Some(_) => {}
            }

            let high = self.parse_set_char()?;
            if low > high {
                let span = self.span_from(token.span.start);
                return Err(self.error(GrammarErrorKind::InvalidRange, span));
            }
            set.push_range(CharRange::new(low, high));
        }
    }

    /// A plain or escaped character inside a character set.
    fn parse_set_char(&mut self) -> Result<char> {
        let Some(token) = self.current_token() else {
            // Callers check for end of input first.
            let at = Span::new(self.last_end, self.last_end);
            return Err(self.error(GrammarErrorKind::UnclosedCharSet, at));
        };

        match token.kind {
            TokenKind::Char => {
                self.bump();
                Ok(self.char_of(&token))
            }
            TokenKind::Backslash => self.parse_escape(),
            _ => Err(self.error(GrammarErrorKind::UnescapedSpecial, token.span)),
        }
    }

    /// `\` followed by a special character or another backslash.
    fn parse_escape(&mut self) -> Result<char> {
        let backslash = self.bump().span;
        let Some(token) = self.current_token() else {
            return Err(self.error(GrammarErrorKind::TrailingEscape, backslash));
        };

        if !token.kind.is_escapable() {
            let span = backslash.cover(token.span);
            return Err(self.error(GrammarErrorKind::InvalidEscape, span));
        }
        self.bump();
        Ok(self.char_of(&token))
    }

    /// Optional quantifier suffix; absent means exactly one.
    fn parse_quantifier(&mut self) -> Result<Quantifier> {
        let quantifier = match self.current() {
            Some(TokenKind::Star) => Quantifier::ZeroOrMore,
            Some(TokenKind::Plus) => Quantifier::OneOrMore,
            Some(TokenKind::Question) => Quantifier::ZeroOrOne,
            Some(TokenKind::BraceOpen) => return self.parse_range_quantifier(),
            _ => return Ok(Quantifier::ExactlyOne),
        };
        self.bump();
        Ok(quantifier)
    }

    /// `{` Int `,` Int `}`
    fn parse_range_quantifier(&mut self) -> Result<Quantifier> {
        let open = self.bump().span;
        let min = self.parse_bound(open)?;
        self.expect_comma(open)?;
        let max = self.parse_bound(open)?;

        match self.current_token() {
            Some(token) if token.kind == TokenKind::BraceClose => {
                self.bump();
            }
            Some(token) => {
                return Err(self.error(
                    GrammarErrorKind::InvalidQuantifierBounds,
                    open.cover(token.span),
                ));
            }
            None => return Err(self.error(GrammarErrorKind::UnclosedQuantifier, open)),
        }

        if min > max {
            return Err(self.error(
                GrammarErrorKind::QuantifierMinExceedsMax,
                self.span_from(open.start),
            ));
        }
        Ok(Quantifier::Range { min, max })
    }

    /// Decimal `u32` made of one or more ASCII digits.
    fn parse_bound(&mut self, open: Span) -> Result<u32> {
        let start = self.current_token().map(|t| t.span.start);
        let mut digits = 0usize;
        while let Some(token) = self.current_token()
            && self.is_char(&token, |c| c.is_ascii_digit())
        {
            self.bump();
            digits += 1;
        }

        let Some(start) = start.filter(|_| digits > 0) else {
            return Err(match self.current_token() {
                Some(token) => self.error(
                    GrammarErrorKind::InvalidQuantifierBounds,
                    open.cover(token.span),
                ),
                None => self.error(GrammarErrorKind::UnclosedQuantifier, open),
            });
        };

        let span = self.span_from(start);
        self.source[span.range()].parse::<u32>().map_err(|_| {
            self.error(GrammarErrorKind::InvalidQuantifierBounds, open.cover(span))
        })
    }

    fn expect_comma(&mut self, open: Span) -> Result<()> {
        match self.current_token() {
            Some(token) if self.is_char(&token, |c| c == ',') => {
                self.bump();
                Ok(())
            }
            Some(token) => Err(self.error(
                GrammarErrorKind::InvalidQuantifierBounds,
                open.cover(token.span),
            )),
            None => Err(self.error(GrammarErrorKind::UnclosedQuantifier, open)),
        }
    }
}
