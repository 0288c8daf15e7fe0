//! Recursive-descent parser for the pattern grammar.
//!
//! ```text
//! Pattern      := Term*
//! Term         := Atom Quantifier?
//! Atom         := Char | Escape | CharSet | Group
//! CharSet      := '[' (SetChar ('-' SetChar)?)+ ']'
//! Group        := '(' Pattern ')'
//! Quantifier   := '*' | '?' | '+' | '{' Int ',' Int '}'
//! Escape       := '\' (special | '\')
//! ```
//!
//! Every character is parsed into its own term; [`coalesce_literals`] then merges
//! runs of unquantified literal characters.

mod coalesce;
mod grammar;

#[cfg(test)]
mod tests;

pub use coalesce::coalesce_literals;

use textwalker_core::{Pattern, Span};

use crate::error::{GrammarError, GrammarErrorKind};
use crate::invariants::ensure_token_char;
use crate::lexer::{Token, TokenKind};
use crate::{CompileOptions, Result};

/// Parser state over a token stream.
pub struct Parser<'p> {
    source: &'p str,
    tokens: Vec<Token>,
    pos: usize,
    /// End of the last consumed token.
    last_end: usize,
    depth: u32,
    recursion_limit: u32,
}

impl<'p> Parser<'p> {
    pub fn new(source: &'p str, tokens: Vec<Token>, options: &CompileOptions) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            last_end: 0,
            depth: 0,
            recursion_limit: options.recursion_limit,
        }
    }

    /// Parse the whole token stream as a top-level pattern.
    pub fn parse(mut self) -> Result<Pattern> {
        let terms = self.parse_terms(None)?;
        Ok(Pattern::new(terms))
    }

    fn current_token(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn current(&self) -> Option<TokenKind> {
        self.current_token().map(|t| t.kind)
    }

    fn currently_is(&self, kind: TokenKind) -> bool {
        self.current() == Some(kind)
    }

    /// Consume the current token. Callers check that one exists.
    fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos];
        self.pos += 1;
        self.last_end = token.span.end;
        token
    }

    fn char_of(&self, token: &Token) -> char {
        ensure_token_char(self.source, token)
    }

    fn is_char(&self, token: &Token, pred: impl Fn(char) -> bool) -> bool {
        token.kind == TokenKind::Char && pred(self.char_of(token))
    }

    /// Span from `start` to the end of the last consumed token.
    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.last_end)
    }

    fn error(&self, kind: GrammarErrorKind, span: Span) -> GrammarError {
        GrammarError::new(kind, span, self.source)
    }

    fn enter_recursion(&mut self) -> bool {
        if self.depth >= self.recursion_limit {
            return false;
        }
        self.depth += 1;
        true
    }

    fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
