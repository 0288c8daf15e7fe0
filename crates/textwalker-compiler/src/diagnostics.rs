//! Annotated rendering of grammar errors.

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};

use crate::GrammarError;

impl GrammarError {
    /// Render the error against its pattern, rustc style.
    pub fn render(&self, colored: bool) -> String {
        self.printer().colored(colored).render()
    }

    pub fn printer(&self) -> DiagnosticPrinter<'_> {
        DiagnosticPrinter::new(self)
    }
}

/// Builder for rendering a [`GrammarError`].
pub struct DiagnosticPrinter<'e> {
    error: &'e GrammarError,
    path: Option<&'e str>,
    colored: bool,
}

impl<'e> DiagnosticPrinter<'e> {
    pub fn new(error: &'e GrammarError) -> Self {
        Self {
            error,
            path: None,
            colored: false,
        }
    }

    /// Label shown in place of a file name.
    pub fn path(mut self, path: &'e str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let source = self.error.pattern();
        let message = self.error.message();
        let range = adjust_range(self.error.span().range(), source.len());

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(range.clone())
                .label(message),
        );
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let mut report: Vec<Group> = vec![Level::ERROR.primary_title(message).element(snippet)];

        let fix = self.error.fix();
        if let Some(fix) = &fix {
            report.push(
                Level::HELP.secondary_title(&fix.description).element(
                    Snippet::source(source)
                        .line_start(1)
                        .patch(Patch::new(range, &fix.replacement)),
                ),
            );
        }

        renderer.render(&report).to_string()
    }
}

/// Zero-width spans still get one column of underline.
fn adjust_range(range: std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit);
    }
    range
}
