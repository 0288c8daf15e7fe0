//! Test helpers for compiling patterns.

use crate::{GrammarError, GrammarErrorKind, compile};

/// Compile `pattern` and dump its AST, panicking on grammar errors.
pub fn dump(pattern: &str) -> String {
    match compile(pattern) {
        Ok(compiled) => compiled.dump(),
        Err(e) => panic!("pattern {pattern:?} should compile: {e}"),
    }
}

/// Compile `pattern` and dump its AST with spans.
pub fn dump_spans(pattern: &str) -> String {
    match compile(pattern) {
        Ok(compiled) => compiled.dump_with_spans(),
        Err(e) => panic!("pattern {pattern:?} should compile: {e}"),
    }
}

/// Compile `pattern`, expecting a grammar error.
pub fn error(pattern: &str) -> GrammarError {
    match compile(pattern) {
        Ok(compiled) => panic!("pattern {pattern:?} should not compile:\n{}", compiled.dump()),
        Err(e) => e,
    }
}

pub fn error_kind(pattern: &str) -> GrammarErrorKind {
    error(pattern).kind()
}
