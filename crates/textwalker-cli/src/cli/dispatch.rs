//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields, ignoring hidden ones
//! - `Into<*Args>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use textwalker_lib::Verbosity;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::match_at::MatchArgs;
use crate::commands::trace::TraceArgs;
use crate::commands::walk::WalkArgs;

pub struct AstParams {
    pub pattern: String,
    pub json: bool,
    pub spans: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: pattern(m),
            json: m.get_flag("json"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            pattern: p.pattern,
            json: p.json,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub pattern: String,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: pattern(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern: p.pattern,
            color: p.color.should_colorize(),
        }
    }
}

pub struct MatchParams {
    pub pattern: String,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub offset: usize,
    pub compact: bool,
    pub color: ColorChoice,
    // Note: verbose is parsed but not extracted (shared with trace)
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: pattern(m),
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            offset: offset(m),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());

        Self {
            pattern: p.pattern,
            source_path: p.source_path,
            source_text: p.source_text,
            offset: p.offset,
            pretty,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub pattern: String,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub offset: usize,
    pub verbose: u8,
    pub color: ColorChoice,
    // Note: compact is parsed but not extracted (shared with match)
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: pattern(m),
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            offset: offset(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            pattern: p.pattern,
            source_path: p.source_path,
            source_text: p.source_text,
            offset: p.offset,
            verbosity: parse_verbosity(p.verbose),
            color: p.color.should_colorize(),
        }
    }
}

pub struct WalkParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub steps: Vec<String>,
    pub delim: Option<String>,
    pub color: ColorChoice,
}

impl WalkParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            steps: m
                .get_many::<String>("steps")
                .map(|steps| steps.cloned().collect())
                .unwrap_or_default(),
            delim: m.get_one::<String>("delim").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<WalkParams> for WalkArgs {
    fn from(p: WalkParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            steps: p.steps,
            delim: p.delim,
            color: p.color.should_colorize(),
        }
    }
}

/// The required positional pattern.
fn pattern(m: &ArgMatches) -> String {
    m.get_one::<String>("pattern").cloned().unwrap_or_default()
}

fn offset(m: &ArgMatches) -> usize {
    m.get_one::<usize>("offset").copied().unwrap_or(0)
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Map the -v count onto a trace verbosity.
fn parse_verbosity(count: u8) -> Verbosity {
    match count {
        0 => Verbosity::Default,
        1 => Verbosity::Verbose,
        _ => Verbosity::VeryVerbose,
    }
}
