//! Runs the package manager's search command and cleans up its output.

use std::fmt::{Display, Formatter};
use std::process::{Command, Stdio};

use log::{debug, warn};

use crate::error::{Error, Result};

/// Number of header lines the search command prints before any result
pub const HEADER_LINES: usize = 2;

const SEARCH_PROGRAM: &str = "apt";
const SEARCH_VERB: &str = "search";

/// Text encoding used to decode the search command's output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputEncoding {
    #[default]
    Utf8,
    Latin1,
}

impl OutputEncoding {
    /// Decodes raw command output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the bytes are not valid for this encoding.
    pub fn decode(&self, raw: Vec<u8>, command: &str) -> Result<String> {
        match self {
            OutputEncoding::Utf8 => String::from_utf8(raw).map_err(|_| Error::Decode {
                command: command.to_string(),
                encoding: self.to_string(),
            }),
            OutputEncoding::Latin1 => Ok(raw.into_iter().map(char::from).collect()),
        }
    }
}

impl Display for OutputEncoding {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputEncoding::Utf8 => formatter.write_str("utf-8"),
            OutputEncoding::Latin1 => formatter.write_str("latin1"),
        }
    }
}

/// Result of a search, with the header already stripped.
#[derive(Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    NoResults,
    Lines(Vec<String>),
}

/// The external search invocation for one term.
#[derive(Debug, Clone)]
pub struct SearchCommand {
    pub program: String,
    pub arguments: Vec<String>,
}

impl SearchCommand {
    pub fn new(term: &str) -> Self {
        Self {
            program: SEARCH_PROGRAM.to_string(),
            arguments: vec![SEARCH_VERB.to_string(), term.to_string()],
        }
    }

    /// Runs the search and returns its result rows.
    ///
    /// Blocks until the command exits. Anything the command writes to stderr
    /// is logged rather than treated as output.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned, exits with a
    /// non-success status, or prints output that cannot be decoded.
    pub fn run(&self, encoding: OutputEncoding) -> Result<SearchOutcome> {
        let command_line = self.to_string();
        debug!("Running search: `{}`", command_line);

        let output = Command::new(&self.program)
            .args(&self.arguments)
            .stdin(Stdio::null())
            .output()?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(Error::SearchFailed {
                command: command_line,
                status: output.status.to_string(),
                stderr,
            });
        }

        if !stderr.is_empty() {
            warn!("`{}` wrote to stderr: {}", command_line, stderr);
        }

        let text = encoding.decode(output.stdout, &command_line)?;
        Ok(strip_header(&text))
    }
}

impl Display for SearchCommand {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} {}", self.program, self.arguments.join(" "))
    }
}

/// Splits decoded output into lines and drops the fixed header.
///
/// Output with no more than [`HEADER_LINES`] lines holds no results.
pub fn strip_header(text: &str) -> SearchOutcome {
    let lines: Vec<&str> = text.lines().collect();

    if lines.len() <= HEADER_LINES {
        return SearchOutcome::NoResults;
    }

    SearchOutcome::Lines(
        lines
            .into_iter()
            .skip(HEADER_LINES)
            .map(ToString::to_string)
            .collect(),
    )
}
