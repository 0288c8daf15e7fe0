use textwalker_lib::GrammarErrorKind;

use super::run_common::to_json;
use super::walk::{Step, StepKind, resolve_delimiter, walk_steps};

fn steps(raw: &[&str]) -> Vec<Step> {
    raw.iter().map(|s| Step::parse(s)).collect()
}

fn json_lines(source: &str, raw: &[&str], delim: Option<&str>) -> String {
    let steps = steps(raw);
    let records = walk_steps(source, &steps, delim).unwrap();
    records
        .iter()
        .map(|r| to_json(r, false).unwrap())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn step_prefixes() {
    assert_eq!(
        Step::parse("until:WITH"),
        Step {
            kind: StepKind::Until,
            pattern: "WITH".to_owned(),
        }
    );
    assert_eq!(Step::parse("walk:x").kind, StepKind::Walk);
    assert_eq!(Step::parse("walk:x").pattern, "x");
    assert_eq!(Step::parse("[a-z]+").pattern, "[a-z]+");
    assert_eq!(Step::parse("walk:until:x").pattern, "until:x");
    assert_eq!(Step::parse("").pattern, "");
}

#[test]
fn delimiter_presets_resolve() {
    assert_eq!(resolve_delimiter("newline"), "[\r\n]");
    assert_eq!(resolve_delimiter("whitespace"), "[ \t]");
    assert_eq!(resolve_delimiter("newline-whitespace"), "[ \r\n\t]");
    assert_eq!(resolve_delimiter("[,;]"), "[,;]");
}

#[test]
fn walk_stops_at_first_failure() {
    let output = json_lines(
        "(+1)123-456",
        &[r"(\(\+[0-9]+\))?", "[0-9]{3,3}", r"until:\-", "x", "[0-9]+"],
        None,
    );
    insta::assert_snapshot!(output, @r#"
    {"op":"walk","step":0,"pattern":"(\\(\\+[0-9]+\\))?","result":{"start":0,"text":"(+1)"},"cursor":4}
    {"op":"walk","step":1,"pattern":"[0-9]{3,3}","result":{"start":4,"text":"123"},"cursor":7}
    {"op":"until","step":2,"pattern":"\\-","result":{"skipped":"","anchor":"-","anchor_start":7},"cursor":8}
    {"op":"walk","step":3,"pattern":"x","result":null,"cursor":8}
    "#);
}

#[test]
fn walk_with_delimiter() {
    let source = "CREATE TABLE dbo.t\n(a int, b int)\nWITH (x)";
    let steps = steps(&["CREATE", "TABLE", "dbo.[a-z]+", r"\(", "until:WITH"]);
    let records = walk_steps(source, &steps, Some("newline-whitespace")).unwrap();

    assert_eq!(records.len(), 5);
    assert!(records.iter().all(|r| r.is_match()));
    insta::assert_snapshot!(to_json(&records[4], false).unwrap(), @r#"{"op":"until","step":4,"pattern":"WITH","result":{"skipped":"a int, b int)\n","anchor":"WITH","anchor_start":34},"cursor":38}"#);
}

#[test]
fn grammar_error_in_any_step_runs_nothing() {
    let steps = steps(&["a", "[*]"]);
    let err = walk_steps("abc", &steps, None).unwrap_err();
    assert_eq!(err.kind(), GrammarErrorKind::UnescapedSpecial);
    assert_eq!(err.pattern(), "[*]");
}

#[test]
fn invalid_delimiter_pattern() {
    let steps = steps(&["a"]);
    let err = walk_steps("abc", &steps, Some("(")).unwrap_err();
    assert_eq!(err.kind(), GrammarErrorKind::UnclosedGroup);
}
