//! Evaluator for compiled textwalker patterns.
//!
//! Matching is greedy and never backtracks: each term consumes as many
//! repetitions as its quantifier allows before the next term is tried.

pub mod engine;

pub use engine::{
    Evaluator, Match, MatchResult, NoopTracer, PrintTracer, Tracer, Verbosity, match_at,
};
