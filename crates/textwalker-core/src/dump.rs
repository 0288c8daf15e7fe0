//! Indented tree rendering of a pattern, one term per line.

use std::fmt::Write;

use crate::{Pattern, PatternNode, Term};

impl Pattern {
    /// Render the AST as an indented tree.
    pub fn dump(&self) -> String {
        Dumper { spans: false }.render(self)
    }

    /// Like [`Pattern::dump`], with each term's byte span in the pattern text.
    pub fn dump_with_spans(&self) -> String {
        Dumper { spans: true }.render(self)
    }
}

struct Dumper {
    spans: bool,
}

impl Dumper {
    fn render(&self, pattern: &Pattern) -> String {
        let mut out = String::from("Pattern\n");
        self.write_terms(&mut out, pattern, 1);
        out
    }

    fn write_terms(&self, out: &mut String, pattern: &Pattern, depth: usize) {
        for term in pattern {
            self.write_term(out, term, depth);
        }
    }

    fn write_term(&self, out: &mut String, term: &Term, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        match &term.node {
            PatternNode::Literal { text } => {
                let _ = write!(out, "Literal {text:?}");
            }
            PatternNode::CharSet(set) => {
                let _ = write!(out, "CharSet {set}");
            }
            PatternNode::Group { .. } => out.push_str("Group"),
        }
        if term.quantifier.is_explicit() {
            let _ = write!(out, " {}", term.quantifier);
        }
        if self.spans {
            let _ = write!(out, " @{}..{}", term.span.start, term.span.end);
        }
        out.push('\n');

        if let PatternNode::Group { body } = &term.node {
            self.write_terms(out, body, depth + 1);
        }
    }
}
