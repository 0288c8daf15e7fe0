//! Trace pattern evaluation for debugging.

use std::path::PathBuf;

use textwalker_lib::{Colors, Evaluator, PrintTracer, Verbosity};

use super::run_common::{self, exit_with};

pub struct TraceArgs {
    pub pattern: String,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub offset: usize,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let pattern = run_common::compile_or_exit(&args.pattern, args.color);
    let source = run_common::load_source(args.source_text.as_deref(), args.source_path.as_deref())
        .unwrap_or_else(|e| exit_with(e));
    run_common::check_offset(&source, args.offset).unwrap_or_else(|e| exit_with(e));

    let mut tracer = PrintTracer::new(&source)
        .verbosity(args.verbosity)
        .colors(Colors::new(args.color));
    let result = Evaluator::new(&source).execute_with(&pattern, args.offset, &mut tracer);
    tracer.print();

    if !result.is_match() {
        std::process::exit(1);
    }
}
