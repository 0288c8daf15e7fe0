//! Walker sessions: a source text plus a forward-only cursor.

mod outcome;


pub use outcome::{WalkMany, WalkUntil};

use std::iter;

use textwalker_compiler::{CompileOptions, Result, compile_with};
use textwalker_core::Pattern;
use textwalker_vm::{Evaluator, Match, MatchResult, NoopTracer, Tracer};

use crate::invariants::ensure_cursor_advance;
use crate::pattern::AsPattern;

/// Builder for [`Walker`] instances.
pub struct WalkerBuilder<'s, T: Tracer = NoopTracer> {
    source: &'s str,
    word_delimiter: Option<String>,
    options: CompileOptions,
    tracer: T,
}

impl<'s> WalkerBuilder<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            word_delimiter: None,
            options: CompileOptions::default(),
            tracer: NoopTracer,
        }
    }
}

impl<'s, T: Tracer> WalkerBuilder<'s, T> {
    /// Pattern skipped before every `walk` and every `walk_many` step.
    ///
    /// See [`crate::delimiters`] for common choices.
    pub fn word_delimiter(mut self, pattern: impl Into<String>) -> Self {
        self.word_delimiter = Some(pattern.into());
        self
    }

    /// Options for patterns compiled by the walker.
    pub fn compile_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Tracer receiving every evaluation the walker runs.
    pub fn tracer<U: Tracer>(self, tracer: U) -> WalkerBuilder<'s, U> {
        WalkerBuilder {
            source: self.source,
            word_delimiter: self.word_delimiter,
            options: self.options,
            tracer,
        }
    }

    /// Build the walker, compiling the word delimiter if one was set.
    pub fn build(self) -> Result<Walker<'s, T>> {
        let delimiter = self
            .word_delimiter
            .as_deref()
            .map(|p| compile_with(p, &self.options))
            .transpose()?;

        Ok(Walker {
            source: self.source,
            cursor: 0,
            delimiter,
            options: self.options,
            tracer: self.tracer,
        })
    }
}

/// A walking session over one source text.
///
/// The cursor starts at 0 and only moves forward, past text that was just
/// matched. A failed operation, including one whose pattern does not
/// compile, leaves the cursor where it was.
pub struct Walker<'s, T: Tracer = NoopTracer> {
    source: &'s str,
    /// Byte offset, always on a char boundary.
    cursor: usize,
    delimiter: Option<Pattern>,
    options: CompileOptions,
    tracer: T,
}

impl<'s> Walker<'s> {
    /// Walker with no word delimiter and default compile options.
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            cursor: 0,
            delimiter: None,
            options: CompileOptions::default(),
            tracer: NoopTracer,
        }
    }

    pub fn builder(source: &'s str) -> WalkerBuilder<'s> {
        WalkerBuilder::new(source)
    }
}

impl<'s, T: Tracer> Walker<'s, T> {
    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Current byte offset into the source.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text from the cursor to the end.
    pub fn remaining(&self) -> &'s str {
        &self.source[self.cursor..]
    }

    /// The cursor reached the end of the source.
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.source.len()
    }

    pub fn word_delimiter(&self) -> Option<&Pattern> {
        self.delimiter.as_ref()
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn tracer_mut(&mut self) -> &mut T {
        &mut self.tracer
    }

    pub fn into_tracer(self) -> T {
        self.tracer
    }

    /// Match `pattern` at the cursor and advance past the match.
    ///
    /// Returns `Ok(None)` on no match, `Ok(Some(""))` on a zero-length match.
    pub fn walk(&mut self, pattern: impl AsPattern) -> Result<Option<&'s str>> {
        Ok(self.walk_match(pattern)?.map(|m| m.text))
    }

    /// Like [`walk`](Self::walk), also reporting where the match starts.
    pub fn walk_match(&mut self, pattern: impl AsPattern) -> Result<Option<Match<'s>>> {
        let pattern = pattern.as_pattern(&self.options)?;
        Ok(self.step(&pattern))
    }

    /// Walk each pattern in order, stopping at the first that does not match.
    ///
    /// Every pattern is compiled before the first step runs, so a grammar
    /// error anywhere in the list leaves the cursor untouched.
    pub fn walk_many<I>(&mut self, patterns: I) -> Result<WalkMany<'s>>
    where
        I: IntoIterator,
        I::Item: AsPattern,
    {
        let sources: Vec<I::Item> = patterns.into_iter().collect();
        let compiled = sources
            .iter()
            .map(|p| p.as_pattern(&self.options))
            .collect::<Result<Vec<_>>>()?;

        let mut outcome = WalkMany::default();
        for (index, pattern) in compiled.iter().enumerate() {
            match self.step(pattern) {
                Some(m) => outcome.matches.push(m.text),
                None => {
                    outcome.failed_at = Some(index);
                    break;
                }
            }
        }
        Ok(outcome)
    }

    /// Search forward for `anchor`, trying each char boundary from the cursor
    /// up to and including the end of the source.
    ///
    /// On success the cursor moves past the anchor match. Word delimiters are
    /// not skipped; they end up in [`WalkUntil::skipped`].
    pub fn walk_until(&mut self, anchor: impl AsPattern) -> Result<Option<WalkUntil<'s>>> {
        let anchor = anchor.as_pattern(&self.options)?;
        let source = self.source;
        let start = self.cursor;
        let evaluator = Evaluator::new(source);

        let boundaries = source[start..]
            .char_indices()
            .map(|(i, _)| start + i)
            .chain(iter::once(source.len()));

        for pos in boundaries {
            let result = evaluator.execute_with(&anchor, pos, &mut self.tracer);
            if let MatchResult::Matched(m) = result {
                self.advance_to(m.end());
                return Ok(Some(WalkUntil {
                    skipped: &source[start..pos],
                    anchor: m.text,
                    anchor_start: pos,
                }));
            }
        }
        Ok(None)
    }

    /// Match a compiled pattern after any word delimiters.
    fn step(&mut self, pattern: &Pattern) -> Option<Match<'s>> {
        let start = self.skip_delimiters();
        let evaluator = Evaluator::new(self.source);
        match evaluator.execute_with(pattern, start, &mut self.tracer) {
            MatchResult::Matched(m) => {
                self.advance_to(m.end());
                Some(m)
            }
            MatchResult::NoMatch => None,
        }
    }

    /// Offset after the run of non-empty delimiter matches at the cursor.
    ///
    /// Does not move the cursor. Delimiter attempts are reported to the
    /// tracer like any other evaluation.
    fn skip_delimiters(&mut self) -> usize {
        let Some(delimiter) = &self.delimiter else {
            return self.cursor;
        };

        let evaluator = Evaluator::new(self.source);
        let tracer = &mut self.tracer;
        let mut pos = self.cursor;
        while let MatchResult::Matched(m) = evaluator.execute_with(delimiter, pos, tracer)
            && !m.is_empty()
        {
            pos = m.end();
        }
        pos
    }

    fn advance_to(&mut self, to: usize) {
        ensure_cursor_advance(self.cursor, to, self.source.len());
        self.cursor = to;
    }
}
