//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use textwalker_core::Span;

use crate::lexer::{Token, TokenKind, token_text};

/// Unwraps a lexer result; `Char` accepts every character without a token.
pub(crate) fn ensure_lexed(result: Result<TokenKind, ()>, span: Span) -> TokenKind {
    result.unwrap_or_else(|()| {
        panic!(
            "lexer: unclassified input at {}..{} (`Char` covers every other character)",
            span.start, span.end
        )
    })
}

/// The single character a token stands for.
pub(crate) fn ensure_token_char(source: &str, token: &Token) -> char {
    token_text(source, token).chars().next().unwrap_or_else(|| {
        panic!(
            "lexer: empty token {:?} at {}..{} (every token covers one character)",
            token.kind, token.span.start, token.span.end
        )
    })
}
