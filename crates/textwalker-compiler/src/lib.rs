//! textwalker compiler: turns pattern strings into [`Pattern`] values.
//!
//! Pipeline:
//! - `lexer` - one token per pattern character (logos)
//! - `parser` - recursive descent over tokens, literal coalescing
//! - `error` - [`GrammarError`] and its kinds
//! - `diagnostics` - annotated rendering of grammar errors
//!
//! Compilation is fail-fast: the first grammar violation is returned.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;

mod invariants;

#[cfg(test)]
pub mod test_utils;

pub use error::{GrammarError, GrammarErrorKind};
pub use textwalker_core::Pattern;

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, GrammarError>;

/// Limits applied while compiling a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    /// Maximum group nesting (default: 256).
    pub(crate) recursion_limit: u32,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            recursion_limit: 256,
        }
    }
}

impl CompileOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum group nesting depth.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }
}

/// Compile `pattern` with default options.
pub fn compile(pattern: &str) -> Result<Pattern> {
    compile_with(pattern, &CompileOptions::default())
}

/// Compile `pattern` with explicit options.
pub fn compile_with(pattern: &str, options: &CompileOptions) -> Result<Pattern> {
    let tokens = lexer::lex(pattern);
    parser::Parser::new(pattern, tokens, options).parse()
}
