//! Run a script of walk steps over one source.

use std::path::PathBuf;

use serde::Serialize;
use textwalker_lib::{GrammarError, Match, WalkUntil, Walker, compile, delimiters};

use super::run_common::{self, exit_with};

pub struct WalkArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub steps: Vec<String>,
    pub delim: Option<String>,
    pub color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Walk,
    Until,
}

/// One step of a walk script: `PATTERN`, `walk:PATTERN` or `until:PATTERN`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub pattern: String,
}

impl Step {
    pub fn parse(step: &str) -> Self {
        let (kind, pattern) = if let Some(pattern) = step.strip_prefix("until:") {
            (StepKind::Until, pattern)
        } else if let Some(pattern) = step.strip_prefix("walk:") {
            (StepKind::Walk, pattern)
        } else {
            (StepKind::Walk, step)
        };
        Self {
            kind,
            pattern: pattern.to_owned(),
        }
    }
}

/// Outcome of one step, printed as a JSON line.
#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StepRecord<'a> {
    Walk {
        step: usize,
        pattern: &'a str,
        result: Option<Match<'a>>,
        cursor: usize,
    },
    Until {
        step: usize,
        pattern: &'a str,
        result: Option<WalkUntil<'a>>,
        cursor: usize,
    },
}

impl StepRecord<'_> {
    pub fn is_match(&self) -> bool {
        match self {
            Self::Walk { result, .. } => result.is_some(),
            Self::Until { result, .. } => result.is_some(),
        }
    }
}

/// Resolve a `--delim` value: a preset name, else a pattern.
pub fn resolve_delimiter(delim: &str) -> &str {
    delimiters::preset(delim).unwrap_or(delim)
}

/// Run `steps` in order, stopping after the first step that does not match.
///
/// Every step is compiled before the first one runs.
pub fn walk_steps<'a>(
    source: &'a str,
    steps: &'a [Step],
    delim: Option<&str>,
) -> Result<Vec<StepRecord<'a>>, GrammarError> {
    let mut builder = Walker::builder(source);
    if let Some(delim) = delim {
        builder = builder.word_delimiter(resolve_delimiter(delim));
    }
    let mut walker = builder.build()?;

    let compiled = steps
        .iter()
        .map(|step| compile(&step.pattern))
        .collect::<Result<Vec<_>, _>>()?;

    let mut records = Vec::with_capacity(steps.len());
    for (index, (step, pattern)) in steps.iter().zip(&compiled).enumerate() {
        let record = match step.kind {
            StepKind::Walk => StepRecord::Walk {
                step: index,
                pattern: &step.pattern,
                result: walker.walk_match(pattern)?,
                cursor: walker.cursor(),
            },
            StepKind::Until => StepRecord::Until {
                step: index,
                pattern: &step.pattern,
                result: walker.walk_until(pattern)?,
                cursor: walker.cursor(),
            },
        };

        let matched = record.is_match();
        records.push(record);
        if !matched {
            break;
        }
    }
    Ok(records)
}

pub fn run(args: WalkArgs) {
    let source = run_common::load_source(args.source_text.as_deref(), args.source_path.as_deref())
        .unwrap_or_else(|e| exit_with(e));
    let steps: Vec<Step> = args.steps.iter().map(|s| Step::parse(s)).collect();

    let records = walk_steps(&source, &steps, args.delim.as_deref()).unwrap_or_else(|e| {
        eprintln!("{}", e.render(args.color));
        std::process::exit(1);
    });

    for record in &records {
        let json = run_common::to_json(record, false).unwrap_or_else(|e| exit_with(e));
        println!("{json}");
    }

    if records.last().is_some_and(|r| !r.is_match()) {
        std::process::exit(1);
    }
}
