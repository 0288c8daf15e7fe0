mod cli;
mod commands;

use cli::{AstParams, CheckParams, MatchParams, TraceParams, WalkParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("match", m)) => {
            let params = MatchParams::from_matches(m);
            commands::match_at::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        Some(("walk", m)) => {
            let params = WalkParams::from_matches(m);
            commands::walk::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
