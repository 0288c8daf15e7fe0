//! Evaluator semantics: greediness, quantifier minimums, zero-length matches.

use textwalker_compiler::compile;

use super::{Evaluator, Match, MatchResult, match_at};

/// Evaluate `pattern` at the start of `text`, returning the matched text.
fn eval<'s>(pattern: &str, text: &'s str) -> Option<&'s str> {
    eval_at(pattern, text, 0)
}

fn eval_at<'s>(pattern: &str, text: &'s str, offset: usize) -> Option<&'s str> {
    let pattern = compile(pattern).unwrap();
    match_at(&pattern, text, offset).text()
}

#[test]
fn literal_requires_every_character() {
    assert_eq!(eval("abcd", "abc"), None);
    assert_eq!(eval("abc", "abcd"), Some("abc"));
    assert_eq!(eval("abc", "ABC"), None);
}

#[test]
fn zero_length_match_is_not_no_match() {
    let pattern = compile("(foo)?").unwrap();
    let result = match_at(&pattern, "bar", 0);
    assert_eq!(result, MatchResult::Matched(Match::new(0, "")));
    assert!(result.is_match());
    assert_eq!(result.len(), Some(0));
}

#[test]
fn greedy_repetition_never_gives_back() {
    assert_eq!(eval("(ab)*ab", "abab"), None);
    assert_eq!(eval("(ab){1,1}ab", "abab"), Some("abab"));
}

#[test]
fn greedy_char_set_swallows_following_literal() {
    // `[a-z]+` takes the `y`, so the group never matches.
    assert_eq!(eval("(x[a-z]+y)*a", "xaby a"), None);
    assert_eq!(eval("(x[a-z]+y)*x", "xaby a"), Some("x"));
}

#[test]
fn char_set_stops_at_first_non_member() {
    let pattern = compile("[a-z0-9_]+").unwrap();
    let result = match_at(&pattern, "car_inventory WITH", 0);
    let m = result.as_match().unwrap();
    assert_eq!(m.text, "car_inventory");
    assert_eq!(m.len(), 13);
    assert_eq!(m.end(), 13);
}

#[test]
fn char_set_is_case_sensitive() {
    assert_eq!(eval("[a-z]", "A"), None);
    assert_eq!(eval("[A-Z][a-z]+", "Walker1"), Some("Walker"));
}

#[test]
fn char_set_consumes_one_char() {
    assert_eq!(eval("[α-ω]+", "αβγ!"), Some("αβγ"));
    assert_eq!(eval("[é]x", "éx"), Some("éx"));
}

#[test]
fn nested_groups() {
    assert_eq!(eval("((a*b)+)(car)", "bcar xyz"), Some("bcar"));
    assert_eq!(eval("((a*b)+)(car)", "abbcar"), Some("abbcar"));
    assert_eq!(eval("((a*b)+)(car)", "car"), None);
}

#[test]
fn group_repeats_mixed_atoms() {
    assert_eq!(eval("(hel[a-z]p)+", "helpphelap!"), Some("helpphelap"));
    assert_eq!(eval("((ab)?c)+", "abccabc!"), Some("abccabc"));
}

#[test]
fn quantifier_minimums() {
    assert_eq!(eval("a+", "b"), None);
    assert_eq!(eval("a*", "b"), Some(""));
    assert_eq!(eval("a?", "aa"), Some("a"));
    assert_eq!(eval("a{2,3}", "a"), None);
}

#[test]
fn bounded_repetition_stops_at_max() {
    assert_eq!(eval("a{2,3}", "aaaa"), Some("aaa"));
    assert_eq!(eval("a{0,0}", "aaa"), Some(""));
    assert_eq!(eval(r"[0-9]{3,3}\-[0-9]{4,4}", "555-0134 ext"), Some("555-0134"));
}

#[test]
fn quantifier_binds_to_last_character() {
    assert_eq!(eval("ab*", "abbbc"), Some("abbb"));
    assert_eq!(eval("ab*", "ac"), Some("a"));
    assert_eq!(eval("(ab)*", "abbb"), Some("ab"));
}

#[test]
fn zero_width_repetition_terminates() {
    assert_eq!(eval("(a*)*", "aaab"), Some("aaa"));
    assert_eq!(eval("(a*)*", "b"), Some(""));
    assert_eq!(eval("(a?)+b", "b"), Some("b"));
    assert_eq!(eval("(a*){3,5}b", "b"), Some("b"));
}

#[test]
fn escaped_specials_match_literally() {
    assert_eq!(eval(r"\(", "(x"), Some("("));
    assert_eq!(eval(r"[\-\+]+", "+-+1"), Some("+-+"));
    assert_eq!(eval(r"a\\b", r"a\b"), Some(r"a\b"));
}

#[test]
fn empty_pattern_matches_nothing() {
    assert_eq!(eval("", "abc"), Some(""));
    assert_eq!(eval("", ""), Some(""));
}

#[test]
fn empty_text() {
    assert_eq!(eval("a", ""), None);
    assert_eq!(eval("a?", ""), Some(""));
}

#[test]
fn offsets() {
    assert_eq!(eval_at("b+", "aabbbc", 2), Some("bbb"));
    assert_eq!(eval_at("b+", "aabbbc", 0), None);
    assert_eq!(eval_at("", "abc", 3), Some(""));
    assert_eq!(eval_at("", "abc", 4), None);
    assert_eq!(eval_at("x", "éx", 1), None);
    assert_eq!(eval_at("x", "éx", 2), Some("x"));
}

#[test]
fn match_reports_position() {
    let pattern = compile("[0-9]+").unwrap();
    let evaluator = Evaluator::new("id=4711;");
    let m: Option<Match<'_>> = evaluator.execute(&pattern, 3).into();
    let m = m.unwrap();
    assert_eq!(m.start, 3);
    assert_eq!(m.end(), 7);
    assert_eq!(m.as_str(), "4711");
    assert_eq!(evaluator.source(), "id=4711;");
}

#[test]
fn compiled_pattern_is_reusable() {
    let pattern = compile("[a-z]+").unwrap();
    let evaluator = Evaluator::new("one two");
    assert_eq!(evaluator.execute(&pattern, 0).text(), Some("one"));
    assert_eq!(evaluator.execute(&pattern, 4).text(), Some("two"));
    assert_eq!(evaluator.execute(&pattern, 3), MatchResult::NoMatch);
}
