//! Tracing infrastructure for debugging evaluation.
//!
//! The tracer is a zero-cost abstraction: with [`NoopTracer`] every method is
//! an `#[inline(always)]` empty function and the calls vanish from the
//! compiled evaluator. [`PrintTracer`] collects formatted lines instead.
//!
//! Tracing-only state (the source text, collected lines) lives in the tracer,
//! never in the evaluator.

use textwalker_core::{Colors, Term};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Resolved terms and the final result. Spans only, no text.
    #[default]
    Default,
    /// Verbose (-v): also term entry, and text on resolved terms.
    Verbose,
    /// Very verbose (-vv): also every single repetition.
    VeryVerbose,
}

/// Instrumentation hooks invoked by the evaluator.
///
/// `depth` is the group nesting level of the term (0 at top level). Offsets
/// are byte offsets into the source text.
pub trait Tracer {
    /// Called when evaluation starts at `offset`.
    fn trace_attempt(&mut self, offset: usize);

    /// Called before a term's quantifier is resolved.
    fn trace_enter(&mut self, depth: usize, term: &Term, pos: usize);

    /// Called after each successful repetition of a term's atom.
    fn trace_repetition(&mut self, depth: usize, term: &Term, start: usize, end: usize);

    /// Called when a term met its quantifier after `count` repetitions.
    fn trace_satisfied(
        &mut self,
        depth: usize,
        term: &Term,
        count: u32,
        start: usize,
        end: usize,
    );

    /// Called when a term fell short of its minimum.
    fn trace_failed(&mut self, depth: usize, term: &Term, count: u32, pos: usize);

    /// Called when evaluation finishes; `end` is `None` on no match.
    fn trace_result(&mut self, offset: usize, end: Option<usize>);
}

/// No-op tracer that gets optimized away completely.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_attempt(&mut self, _offset: usize) {}

    #[inline(always)]
    fn trace_enter(&mut self, _depth: usize, _term: &Term, _pos: usize) {}

    #[inline(always)]
    fn trace_repetition(&mut self, _depth: usize, _term: &Term, _start: usize, _end: usize) {}

    #[inline(always)]
    fn trace_satisfied(
        &mut self,
        _depth: usize,
        _term: &Term,
        _count: u32,
        _start: usize,
        _end: usize,
    ) {
    }

    #[inline(always)]
    fn trace_failed(&mut self, _depth: usize, _term: &Term, _count: u32, _pos: usize) {}

    #[inline(always)]
    fn trace_result(&mut self, _offset: usize, _end: Option<usize>) {}
}

/// Longest source excerpt shown on one line, in chars.
const TEXT_BUDGET: usize = 32;

/// Tracer that collects a readable evaluation log.
///
/// For `(ab)*ab` against `abab`, at default verbosity:
///
/// ```text
/// match @0
///     ok ab x1 0..2
///     ok ab x1 2..4
///     fail ab x0 @4
///   ok (ab)* x2 0..4
///   fail ab x0 @4
/// no match
/// ```
#[derive(Clone, Debug)]
pub struct PrintTracer<'s> {
    /// Source text, for excerpts.
    source: &'s str,
    verbosity: Verbosity,
    lines: Vec<String>,
    colors: Colors,
}

impl<'s> PrintTracer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            verbosity: Verbosity::Default,
            lines: Vec::new(),
            colors: Colors::OFF,
        }
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    /// Collected trace lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Collected trace as one newline-joined string.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    fn push(&mut self, depth: usize, content: String) {
        let indent = "  ".repeat(depth + 1);
        self.lines.push(format!("{indent}{content}"));
    }

    fn span(&self, start: usize, end: usize) -> String {
        let c = &self.colors;
        format!("{}{start}..{end}{}", c.blue, c.reset)
    }

    fn at(&self, pos: usize) -> String {
        let c = &self.colors;
        format!("{}@{pos}{}", c.blue, c.reset)
    }

    /// Quoted excerpt of `start..end`, truncated to [`TEXT_BUDGET`] chars.
    fn excerpt(&self, start: usize, end: usize) -> String {
        let c = &self.colors;
        let text = self.source.get(start..end).unwrap_or_default();
        let shown = if text.chars().count() > TEXT_BUDGET {
            let cut: String = text.chars().take(TEXT_BUDGET - 1).collect();
            format!("{cut:?}…")
        } else {
            format!("{text:?}")
        };
        format!("{}{shown}{}", c.green, c.reset)
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_attempt(&mut self, offset: usize) {
        let line = format!("match {}", self.at(offset));
        self.lines.push(line);
    }

    fn trace_enter(&mut self, depth: usize, term: &Term, pos: usize) {
        if self.verbosity < Verbosity::Verbose {
            return;
        }
        let line = format!("> {term} {}", self.at(pos));
        self.push(depth, line);
    }

    fn trace_repetition(&mut self, depth: usize, _term: &Term, start: usize, end: usize) {
        if self.verbosity < Verbosity::VeryVerbose {
            return;
        }
        let c = self.colors;
        let line = format!(
            "{}.{} {} {}",
            c.dim,
            c.reset,
            self.span(start, end),
            self.excerpt(start, end)
        );
        self.push(depth + 1, line);
    }

    fn trace_satisfied(
        &mut self,
        depth: usize,
        term: &Term,
        count: u32,
        start: usize,
        end: usize,
    ) {
        let c = self.colors;
        let mut line = format!(
            "{}ok{} {term} {}x{count}{} {}",
            c.green,
            c.reset,
            c.dim,
            c.reset,
            self.span(start, end)
        );
        if self.verbosity >= Verbosity::Verbose {
            line.push(' ');
            line.push_str(&self.excerpt(start, end));
        }
        self.push(depth, line);
    }

    fn trace_failed(&mut self, depth: usize, term: &Term, count: u32, pos: usize) {
        let c = self.colors;
        let line = format!(
            "{}fail{} {term} {}x{count}{} {}",
            c.red,
            c.reset,
            c.dim,
            c.reset,
            self.at(pos)
        );
        self.push(depth, line);
    }

    fn trace_result(&mut self, offset: usize, end: Option<usize>) {
        let c = self.colors;
        let line = match end {
            Some(end) => format!(
                "{}matched{} {} {}",
                c.green,
                c.reset,
                self.span(offset, end),
                self.excerpt(offset, end)
            ),
            None => format!("{}no match{}", c.red, c.reset),
        };
        self.lines.push(line);
    }
}
