//! Greedy, non-backtracking pattern evaluation.

use textwalker_core::{Pattern, PatternNode, Term};

use super::result::{Match, MatchResult};
use super::trace::{NoopTracer, Tracer};

/// Evaluate `pattern` against `source` at byte `offset`.
pub fn match_at<'s>(pattern: &Pattern, source: &'s str, offset: usize) -> MatchResult<'s> {
    Evaluator::new(source).execute(pattern, offset)
}

/// Evaluates compiled patterns against one source text.
///
/// Holds no state besides the borrowed source, so one evaluator can serve any
/// number of patterns and offsets.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator<'s> {
    source: &'s str,
}

impl<'s> Evaluator<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Evaluate `pattern` at `offset`.
    ///
    /// Uses `NoopTracer`, which compiles away entirely.
    pub fn execute(&self, pattern: &Pattern, offset: usize) -> MatchResult<'s> {
        self.execute_with(pattern, offset, &mut NoopTracer)
    }

    /// Evaluate `pattern` at `offset`, reporting each step to `tracer`.
    ///
    /// An offset past the end of the source or inside a multi-byte character
    /// never matches.
    pub fn execute_with<T: Tracer>(
        &self,
        pattern: &Pattern,
        offset: usize,
        tracer: &mut T,
    ) -> MatchResult<'s> {
        tracer.trace_attempt(offset);

        let end = if self.source.is_char_boundary(offset) {
            self.match_pattern(pattern, offset, 0, tracer)
        } else {
            None
        };
        tracer.trace_result(offset, end);

        match end {
            Some(end) => MatchResult::Matched(Match::new(offset, &self.source[offset..end])),
            None => MatchResult::NoMatch,
        }
    }

    /// Match every term in order; returns the end offset.
    fn match_pattern<T: Tracer>(
        &self,
        pattern: &Pattern,
        start: usize,
        depth: usize,
        tracer: &mut T,
    ) -> Option<usize> {
        pattern
            .iter()
            .try_fold(start, |pos, term| self.match_term(term, pos, depth, tracer))
    }

    /// Resolve one term's quantifier greedily.
    fn match_term<T: Tracer>(
        &self,
        term: &Term,
        start: usize,
        depth: usize,
        tracer: &mut T,
    ) -> Option<usize> {
        tracer.trace_enter(depth, term, start);

        let quantifier = term.quantifier;
        let mut pos = start;
        let mut count = 0u32;
        while quantifier.allows_another(count) {
            let Some(end) = self.match_atom(&term.node, pos, depth, tracer) else {
                break;
            };
            tracer.trace_repetition(depth, term, pos, end);

            if end == pos {
                // Every further repetition would match the same empty span.
                count = count.saturating_add(1).max(quantifier.min());
                break;
            }
            count += 1;
            pos = end;
        }

        if quantifier.is_satisfied_by(count) {
            tracer.trace_satisfied(depth, term, count, start, pos);
            Some(pos)
        } else {
            tracer.trace_failed(depth, term, count, pos);
            None
        }
    }

    /// One repetition of an atom at `pos`; returns the end offset.
    fn match_atom<T: Tracer>(
        &self,
        node: &PatternNode,
        pos: usize,
        depth: usize,
        tracer: &mut T,
    ) -> Option<usize> {
        let rest = self.source.get(pos..)?;
        match node {
            PatternNode::Literal { text } => {
                rest.starts_with(text.as_str()).then(|| pos + text.len())
            }
            PatternNode::CharSet(set) => {
                let c = rest.chars().next()?;
                set.matches(c).then(|| pos + c.len_utf8())
            }
            PatternNode::Group { body } => self.match_pattern(body, pos, depth + 1, tracer),
        }
    }
}
