//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Shared flags: match/trace accept each other's flags without error
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use textwalker_lib::Verbosity;

use super::*;
use crate::cli::commands::{
    ast_command, check_command, match_command, trace_command, walk_command,
};
use crate::commands::trace::TraceArgs;

#[test]
fn cli_lists_all_commands() {
    let cli = build_cli();
    let names: Vec<&str> = cli.get_subcommands().map(|c| c.get_name()).collect();
    assert_eq!(names, ["ast", "check", "match", "trace", "walk"]);
}

#[test]
fn ast_params() {
    let m = ast_command()
        .try_get_matches_from(["ast", "(ab)*c", "--spans", "--color", "never"])
        .unwrap();
    let params = AstParams::from_matches(&m);
    assert_eq!(params.pattern, "(ab)*c");
    assert!(params.spans);
    assert!(!params.json);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn ast_json_conflicts_with_spans() {
    let result = ast_command().try_get_matches_from(["ast", "a", "--json", "--spans"]);
    assert!(result.is_err());
}

#[test]
fn pattern_is_required() {
    assert!(check_command().try_get_matches_from(["check"]).is_err());
    assert!(ast_command().try_get_matches_from(["ast"]).is_err());
}

#[test]
fn check_params() {
    let m = check_command()
        .try_get_matches_from(["check", "[*]", "--color", "always"])
        .unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.pattern, "[*]");
    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn match_params_extracts_all_fields() {
    let m = match_command()
        .try_get_matches_from(["match", "[a-z]+", "table.sql", "--offset", "7", "--compact"])
        .unwrap();
    let params = MatchParams::from_matches(&m);
    assert_eq!(params.pattern, "[a-z]+");
    assert_eq!(params.source_path, Some(PathBuf::from("table.sql")));
    assert_eq!(params.source_text, None);
    assert_eq!(params.offset, 7);
    assert!(params.compact);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn match_offset_defaults_to_zero() {
    let m = match_command()
        .try_get_matches_from(["match", "a", "-s", "abc"])
        .unwrap();
    let params = MatchParams::from_matches(&m);
    assert_eq!(params.offset, 0);
    assert_eq!(params.source_text.as_deref(), Some("abc"));
}

#[test]
fn match_rejects_bad_offset() {
    let result = match_command().try_get_matches_from(["match", "a", "-s", "abc", "--offset", "x"]);
    assert!(result.is_err());
}

#[test]
fn source_path_conflicts_with_inline_source() {
    let result = match_command().try_get_matches_from(["match", "a", "file.txt", "-s", "abc"]);
    assert!(result.is_err());
}

#[test]
fn match_accepts_trace_flags() {
    let result = match_command().try_get_matches_from(["match", "a", "-s", "abc", "-vv"]);
    assert!(
        result.is_ok(),
        "match should accept trace flags: {:?}",
        result.err()
    );
}

#[test]
fn trace_accepts_match_flags() {
    let result = trace_command().try_get_matches_from(["trace", "a", "-s", "abc", "--compact"]);
    assert!(
        result.is_ok(),
        "trace should accept match flags: {:?}",
        result.err()
    );
}

#[test]
fn match_help_hides_trace_flags() {
    let mut cmd = match_command();
    let help = cmd.render_help().to_string();
    assert!(!help.contains("Verbosity level"), "match help should not show -v");
    assert!(help.contains("--offset"), "match help should show --offset");
}

#[test]
fn trace_help_hides_output_flags() {
    let mut cmd = trace_command();
    let help = cmd.render_help().to_string();
    assert!(
        !help.contains("--compact"),
        "trace help should not show --compact"
    );
    assert!(help.contains("Verbosity level"), "trace help should show -v");
}

#[test]
fn trace_params_extracts_all_fields() {
    let m = trace_command()
        .try_get_matches_from([
            "trace", "(ab)*ab", "input.txt", "--offset", "2", "-vv", "--color", "always",
        ])
        .unwrap();
    let params = TraceParams::from_matches(&m);
    assert_eq!(params.pattern, "(ab)*ab");
    assert_eq!(params.source_path, Some(PathBuf::from("input.txt")));
    assert_eq!(params.offset, 2);
    assert_eq!(params.verbose, 2);
    assert_eq!(params.color, ColorChoice::Always);

    let args: TraceArgs = params.into();
    assert_eq!(args.verbosity, Verbosity::VeryVerbose);
    assert!(args.color);
}

#[test]
fn trace_verbosity_levels() {
    for (flags, expected) in [
        (&[][..], Verbosity::Default),
        (&["-v"][..], Verbosity::Verbose),
        (&["-vvv"][..], Verbosity::VeryVerbose),
    ] {
        let argv = ["trace", "a", "-s", "a"].iter().chain(flags).copied();
        let m = trace_command().try_get_matches_from(argv).unwrap();
        let args: TraceArgs = TraceParams::from_matches(&m).into();
        assert_eq!(args.verbosity, expected, "{flags:?}");
    }
}

#[test]
fn walk_params_collects_steps_in_order() {
    let m = walk_command()
        .try_get_matches_from([
            "walk",
            "-s",
            "CREATE TABLE t",
            "-e",
            "CREATE",
            "--step",
            "until:t",
            "-e",
            "walk:x",
            "--delim",
            "whitespace",
        ])
        .unwrap();
    let params = WalkParams::from_matches(&m);
    assert_eq!(params.source_text.as_deref(), Some("CREATE TABLE t"));
    assert_eq!(params.steps, ["CREATE", "until:t", "walk:x"]);
    assert_eq!(params.delim.as_deref(), Some("whitespace"));
}

#[test]
fn walk_requires_a_step() {
    let result = walk_command().try_get_matches_from(["walk", "-s", "abc"]);
    assert!(result.is_err());
}

#[test]
fn invalid_color_is_rejected() {
    let result = check_command().try_get_matches_from(["check", "a", "--color", "sometimes"]);
    assert!(result.is_err());
}
