//! Yapt Core Library
//!
//! This crate provides the core functionality for yapt, a numbered install
//! menu around `apt search`. It runs the search, classifies each result line,
//! parses the user's package selection and builds the install command.
//!
//! # Key Features
//!
//! - **Color Configuration**: Read the optional `[Colors]` section of `~/.yaptrc`
//! - **Search Invocation**: Run `apt search` and strip its fixed header
//! - **Line Classification**: Find package names and installed markers
//! - **Selection Parsing**: Turn `1 2 3` or `1-3` into package numbers
//! - **Installation**: Resolve numbers to packages and run `sudo apt install`
//!
//! # Examples
//!
//! Parsing search output and resolving a selection:
//!
//! ```
//! use yapt_core::install::{resolve_packages, InstallCommand};
//! use yapt_core::listing::SearchListing;
//! use yapt_core::selection::parse_selection;
//!
//! let listing = SearchListing::from_lines([
//!     "vim/jammy 2:8.2 amd64 [installed]",
//!     "  Vi IMproved - enhanced vi editor",
//!     "neovim/jammy 0.6.1 amd64",
//!     "  heavily refactored vim fork",
//! ]);
//!
//! let selection = parse_selection("2")?;
//! let packages = resolve_packages(&selection, listing.packages())?;
//! assert_eq!(InstallCommand::new(packages, true).to_string(), "sudo apt install neovim -y");
//! # Ok::<(), yapt_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod install;
pub mod listing;
pub mod search;
pub mod selection;
