use textwalker_compiler::compile;
use textwalker_core::Colors;

use super::{Evaluator, NoopTracer, PrintTracer, Verbosity};

fn trace(pattern: &str, text: &str, verbosity: Verbosity) -> String {
    let pattern = compile(pattern).unwrap();
    let mut tracer = PrintTracer::new(text).verbosity(verbosity);
    Evaluator::new(text).execute_with(&pattern, 0, &mut tracer);
    tracer.output()
}

#[test]
fn default_shows_resolved_terms() {
    insta::assert_snapshot!(trace("(ab)*ab", "abab", Verbosity::Default), @r"
    match @0
        ok ab x1 0..2
        ok ab x1 2..4
        fail ab x0 @4
      ok (ab)* x2 0..4
      fail ab x0 @4
    no match
    ");
}

#[test]
fn verbose_shows_entry_and_text() {
    insta::assert_snapshot!(trace("(foo)?", "bar", Verbosity::Verbose), @r#"
    match @0
      > (foo)? @0
        > foo @0
        fail foo x0 @0
      ok (foo)? x0 0..0 ""
    matched 0..0 ""
    "#);
}

#[test]
fn very_verbose_shows_repetitions() {
    insta::assert_snapshot!(trace("[a-z]+!", "hi!", Verbosity::VeryVerbose), @r#"
    match @0
      > [a-z]+ @0
        . 0..1 "h"
        . 1..2 "i"
      ok [a-z]+ x2 0..2 "hi"
      > ! @2
        . 2..3 "!"
      ok ! x1 2..3 "!"
    matched 0..3 "hi!"
    "#);
}

#[test]
fn long_text_is_truncated() {
    let text = "a".repeat(40);
    let output = trace("a+", &text, Verbosity::Verbose);
    let last = output.lines().last().unwrap();
    assert!(last.starts_with("matched 0..40 "), "{last}");
    assert!(last.ends_with('…'), "{last}");
}

#[test]
fn colored_output() {
    let pattern = compile("x").unwrap();
    let mut tracer = PrintTracer::new("y").colors(Colors::ON);
    Evaluator::new("y").execute_with(&pattern, 0, &mut tracer);
    let lines = tracer.into_lines();
    assert_eq!(lines[0], "match \x1b[34m@0\x1b[0m");
    assert!(lines[1].starts_with("  \x1b[31mfail\x1b[0m x"), "{}", lines[1]);
    assert_eq!(lines[2], "\x1b[31mno match\x1b[0m");
}

#[test]
fn noop_tracer_does_not_change_result() {
    let pattern = compile("(x[0-9]+)+").unwrap();
    let evaluator = Evaluator::new("x1x22y");
    let traced = evaluator.execute_with(&pattern, 0, &mut NoopTracer);
    assert_eq!(traced, evaluator.execute(&pattern, 0));
    assert_eq!(traced.text(), Some("x1x22"));
}
