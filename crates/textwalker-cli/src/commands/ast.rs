//! Show the compiled AST of a pattern.

use super::run_common::{self, exit_with};

pub struct AstArgs {
    pub pattern: String,
    pub json: bool,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let pattern = run_common::compile_or_exit(&args.pattern, args.color);

    if args.json {
        let json = run_common::to_json(&pattern, true).unwrap_or_else(|e| exit_with(e));
        println!("{json}");
        return;
    }

    let dump = if args.spans {
        pattern.dump_with_spans()
    } else {
        pattern.dump()
    };
    print!("{dump}");
}
