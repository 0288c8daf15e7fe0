pub mod ast;
pub mod check;
pub mod match_at;
pub mod run_common;
pub mod trace;
pub mod walk;

#[cfg(test)]
mod walk_tests;
