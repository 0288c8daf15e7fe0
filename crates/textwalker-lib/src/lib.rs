//! textwalker: walk through text one pattern at a time.
//!
//! A [`Walker`] holds a source text and a cursor. Each operation matches a
//! pattern at the cursor and advances it past the matched text only on
//! success, so a caller can parse incrementally and inspect every step.
//!
//! # Example
//!
//! ```
//! use textwalker_lib::Walker;
//!
//! let mut walker = Walker::new("CREATE TABLE dbo.car_inventory (id int) WITH (x)");
//! walker.walk_many(["CREATE", " ", "TABLE", " "]).unwrap();
//! let table = walker.walk("dbo.[a-z0-9_]+").unwrap();
//! assert_eq!(table, Some("dbo.car_inventory"));
//!
//! let until = walker.walk_until("WITH").unwrap().unwrap();
//! assert_eq!(until.skipped, " (id int) ");
//! ```
//!
//! Patterns are compiled on demand; anything implementing [`AsPattern`] is
//! accepted, so a compiled [`Pattern`] can be reused across calls and walkers.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod delimiters;
pub mod pattern;
pub mod walker;

mod invariants;


pub use pattern::AsPattern;
pub use walker::{WalkMany, WalkUntil, Walker, WalkerBuilder};

pub use textwalker_compiler::{
    CompileOptions, GrammarError, GrammarErrorKind, Result, compile, compile_with,
};
pub use textwalker_core::{
    CharRange, CharSet, Colors, Pattern, PatternNode, Quantifier, Span, Term,
};
pub use textwalker_vm::{
    Evaluator, Match, MatchResult, NoopTracer, PrintTracer, Tracer, Verbosity, match_at,
};
