//! Match a pattern once, at a fixed offset.

use std::path::PathBuf;

use serde::Serialize;
use textwalker_lib::{Evaluator, Pattern};

use super::run_common::{self, exit_with};

pub struct MatchArgs {
    pub pattern: String,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub offset: usize,
    pub pretty: bool,
    pub color: bool,
}

/// JSON shape of a successful match.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct MatchOutput<'s> {
    pub start: usize,
    pub end: usize,
    pub text: &'s str,
}

/// Evaluate `pattern` at `offset`; `None` on no match.
pub fn evaluate<'s>(pattern: &Pattern, source: &'s str, offset: usize) -> Option<MatchOutput<'s>> {
    let m = Evaluator::new(source).execute(pattern, offset).as_match().copied()?;
    Some(MatchOutput {
        start: m.start,
        end: m.end(),
        text: m.text,
    })
}

pub fn run(args: MatchArgs) {
    let pattern = run_common::compile_or_exit(&args.pattern, args.color);
    let source = run_common::load_source(args.source_text.as_deref(), args.source_path.as_deref())
        .unwrap_or_else(|e| exit_with(e));
    run_common::check_offset(&source, args.offset).unwrap_or_else(|e| exit_with(e));

    let output = evaluate(&pattern, &source, args.offset);
    let json = run_common::to_json(&output, args.pretty).unwrap_or_else(|e| exit_with(e));
    println!("{json}");

    if output.is_none() {
        std::process::exit(1);
    }
}
