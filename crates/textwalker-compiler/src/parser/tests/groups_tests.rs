//! Group parsing tests.

use indoc::indoc;

use crate::test_utils::{dump, dump_spans, error_kind};
use crate::{CompileOptions, GrammarErrorKind, compile, compile_with};

#[test]
fn simple_group() {
    insta::assert_snapshot!(dump_spans("(foo)?"), @r#"
    Pattern
      Group ? @0..6
        Literal "foo" @1..4
    "#);
}

#[test]
fn nested_groups() {
    insta::assert_snapshot!(dump("((a*b)+)(car)"), @r#"
    Pattern
      Group
        Group +
          Literal "a" *
          Literal "b"
      Group
        Literal "car"
    "#);
}

#[test]
fn group_with_mixed_atoms() {
    insta::assert_snapshot!(dump("(hel[a-z]p)+"), @r#"
    Pattern
      Group +
        Literal "hel"
        CharSet [a-z]
        Literal "p"
    "#);
}

#[test]
fn group_with_escaped_parens() {
    insta::assert_snapshot!(dump(r"(\(\+[0-9]+\))?"), @r#"
    Pattern
      Group ?
        Literal "(+"
        CharSet [0-9] +
        Literal ")"
    "#);
}

#[test]
fn group_bounded_then_literal() {
    insta::assert_snapshot!(dump("(ab){1,1}ab"), @r#"
    Pattern
      Group {1,1}
        Literal "ab"
      Literal "ab"
    "#);
}

#[test]
fn literals_do_not_coalesce_across_groups() {
    insta::assert_snapshot!(dump("a(b)c"), @r#"
    Pattern
      Literal "a"
      Group
        Literal "b"
      Literal "c"
    "#);
}

#[test]
fn multi_line_pattern() {
    let pattern = indoc! {"
        (x
        y)
    "};
    insta::assert_snapshot!(dump(pattern.trim_end()), @r#"
    Pattern
      Group
        Literal "x\ny"
    "#);
}

#[test]
fn depth_within_limit() {
    let options = CompileOptions::new().recursion_limit(3);
    let pattern = compile_with("(((a)))", &options).unwrap();
    assert_eq!(pattern.depth(), 3);
}

#[test]
fn depth_over_limit() {
    let options = CompileOptions::new().recursion_limit(3);
    let err = compile_with("((((a))))", &options).unwrap_err();
    assert_eq!(err.kind(), GrammarErrorKind::RecursionLimitExceeded);
    assert_eq!(err.span().start, 3);
}

#[test]
fn default_limit_allows_deep_nesting() {
    let pattern = format!("{}a{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(compile(&pattern).unwrap().depth(), 100);
    assert_eq!(CompileOptions::default().get_recursion_limit(), 256);
}

#[test]
fn empty_group_is_rejected() {
    assert_eq!(error_kind("()"), GrammarErrorKind::EmptyGroup);
    assert_eq!(error_kind("a()*"), GrammarErrorKind::EmptyGroup);
}
