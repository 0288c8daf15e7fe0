//! Match evaluation over an immutable source text.

mod result;
mod trace;
mod vm;

#[cfg(test)]
mod engine_tests;
#[cfg(test)]
mod trace_tests;

pub use result::{Match, MatchResult};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use vm::{Evaluator, match_at};
