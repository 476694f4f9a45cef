//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::{Parser, ValueEnum};
use yapt_core::search::OutputEncoding;

/// Encodings accepted by `--encoding`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    #[value(alias = "iso-8859-1")]
    Latin1,
}

impl From<Encoding> for OutputEncoding {
    fn from(value: Encoding) -> Self {
        match value {
            Encoding::Utf8 => OutputEncoding::Utf8,
            Encoding::Latin1 => OutputEncoding::Latin1,
        }
    }
}

/// Command-line arguments for the `yapt` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use yapt_cli::cli_args::Args;
///
/// let args = Args::parse_from(["yapt", "--debug", "vim"]);
/// assert!(args.debug);
/// assert_eq!(args.pkg, "vim");
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Don't ask for confirmation.
    ///
    /// Passes the package manager's `-y` flag to the install command.
    #[arg(long, short = 'y', action)]
    pub noconfirm: bool,

    /// Debug mode (don't execute command).
    ///
    /// Prints the install command instead of running it.
    #[arg(long, short = 'd', action)]
    pub debug: bool,

    /// No colored output.
    #[arg(long, short = 'n', action)]
    pub nocolor: bool,

    /// Path to the color config file.
    ///
    /// If not provided, `~/.yaptrc` and then `~/.config/yapt/yaptrc` are tried.
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Encoding of the search command's output.
    #[arg(long, value_enum, default_value_t = Encoding::Utf8)]
    pub encoding: Encoding,

    /// The package to search.
    pub pkg: String,
}
