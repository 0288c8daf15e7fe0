//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.
//! `match` and `trace` take the same inputs and accept each other's flags,
//! with the irrelevant ones hidden from `--help`.

use clap::Command;

use super::args::*;

/// Add hidden trace args (for commands that don't trace).
fn with_hidden_trace_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true))
}

/// Add hidden JSON output args (for commands that don't print JSON).
fn with_hidden_output_args(cmd: Command) -> Command {
    cmd.arg(compact_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("textwalker")
        .about("Walk through text one pattern at a time")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(match_command())
        .subcommand(trace_command())
        .subcommand(walk_command())
}

/// Show the compiled AST of a pattern.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the compiled AST of a pattern")
        .after_help(
            r#"EXAMPLES:
  textwalker ast 'dbo.[a-z0-9_]+'          # indented tree
  textwalker ast '(ab)*c' --spans          # with pattern positions
  textwalker ast '[0-9]{3,3}' --json       # serialized AST"#,
        )
        .arg(pattern_arg())
        .arg(json_arg())
        .arg(spans_arg().conflicts_with("json"))
        .arg(color_arg())
}

/// Validate a pattern.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a pattern")
        .after_help(
            r#"EXAMPLES:
  textwalker check '(\(\+[0-9]+\))?'       # silent on success
  textwalker check '[*]'                   # prints a diagnostic, exits 1"#,
        )
        .arg(pattern_arg())
        .arg(color_arg())
}

/// Match a pattern once against a source.
pub fn match_command() -> Command {
    let cmd = Command::new("match")
        .about("Match a pattern at one offset of a source")
        .override_usage(
            "\
  textwalker match <PATTERN> <SOURCE>
  textwalker match <PATTERN> -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  textwalker match '[a-z_]+' -s 'car_inventory WITH'
  textwalker match 'WITH' table.sql --offset 420
  cat table.sql | textwalker match 'CREATE' -"#,
        )
        .arg(pattern_arg())
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(offset_arg())
        .arg(compact_arg())
        .arg(color_arg());

    with_hidden_trace_args(cmd)
}

/// Trace the evaluation of a pattern.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace how a pattern is evaluated against a source")
        .override_usage(
            "\
  textwalker trace <PATTERN> <SOURCE>
  textwalker trace <PATTERN> -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  textwalker trace '(ab)*ab' -s abab       # resolved terms
  textwalker trace '(ab)*ab' -s abab -v    # with entries and text
  textwalker trace '(ab)*ab' -s abab -vv   # every repetition"#,
        )
        .arg(pattern_arg())
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(offset_arg())
        .arg(verbose_arg())
        .arg(color_arg());

    with_hidden_output_args(cmd)
}

/// Run a sequence of walk steps over a source.
pub fn walk_command() -> Command {
    Command::new("walk")
        .about("Run a sequence of walk steps over a source")
        .override_usage(
            "\
  textwalker walk <SOURCE> -e <STEP>...
  textwalker walk -s <TEXT> -e <STEP>...",
        )
        .after_help(
            r#"EXAMPLES:
  textwalker walk -s '(+1)123-456' -e '(\(\+[0-9]+\))?' -e '[0-9]{3,3}'
  textwalker walk table.sql --delim newline-whitespace \
      -e CREATE -e TABLE -e 'dbo.[a-z_]+' -e '\(' -e until:WITH

Each step prints one JSON line. The walk stops at the first step that
does not match and exits with status 1."#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(step_arg())
        .arg(delim_arg())
        .arg(color_arg())
}
