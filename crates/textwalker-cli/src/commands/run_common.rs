//! Shared logic for commands that load a source and compile patterns.

use std::fmt::Display;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Serialize;
use textwalker_lib::{Pattern, compile};

/// Problems with command input, reported as `error: ...` before exiting.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("source is required: use a positional argument or -s/--source")]
    MissingSource,

    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("offset {offset} is not a character boundary of the source ({len} bytes)")]
    InvalidOffset { offset: usize, len: usize },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load source text from inline text, a file, or stdin (`-`).
pub fn load_source(
    source_text: Option<&str>,
    source_path: Option<&Path>,
) -> Result<String, InputError> {
    if let Some(text) = source_text {
        return Ok(text.to_owned());
    }
    let Some(path) = source_path else {
        return Err(InputError::MissingSource);
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(InputError::Stdin)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Offsets must land on a character boundary, the end of the source included.
pub fn check_offset(source: &str, offset: usize) -> Result<(), InputError> {
    if source.is_char_boundary(offset) {
        Ok(())
    } else {
        Err(InputError::InvalidOffset {
            offset,
            len: source.len(),
        })
    }
}

/// Compile `pattern`, or print its diagnostic and exit.
pub fn compile_or_exit(pattern: &str, color: bool) -> Pattern {
    compile(pattern).unwrap_or_else(|e| {
        eprintln!("{}", e.render(color));
        std::process::exit(1);
    })
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, InputError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Print `error: {err}` and exit with status 1.
pub fn exit_with(err: impl Display) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1)
}
