//! Lexer for the pattern grammar.
//!
//! Every token covers exactly one character of the pattern. Whether a token is
//! an operator or literal text depends on where it appears (a `,` or a digit is
//! text outside `{...}`), so the lexer only classifies characters and the
//! parser decides their role.
//!
//! `Char` covers every character without a token of its own, so lexing cannot
//! fail.

use logos::Logos;

use textwalker_core::Span;

use crate::invariants::ensure_lexed;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("-")]
    Dash,

    #[token("+")]
    Plus,

    #[token("*")]
    Star,

    #[token("?")]
    Question,

    #[token("\\")]
    Backslash,

    /// Any character without a structural role, newlines included.
    #[regex(r"[^()\[\]{}\-+*?\\]")]
    Char,
}

impl TokenKind {
    /// `*`, `+`, `?` or the `{` opening a bounded quantifier.
    pub fn is_quantifier_start(self) -> bool {
        matches!(self, Self::Star | Self::Plus | Self::Question | Self::BraceOpen)
    }

    /// Operators that a backslash may escape.
    pub fn is_escapable(self) -> bool {
        self != Self::Char
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes a pattern into span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(source.len());
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span: Span = lexer.span().into();
        tokens.push(Token::new(ensure_lexed(result, span), span));
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'p>(source: &'p str, token: &Token) -> &'p str {
    &source[token.span.range()]
}
