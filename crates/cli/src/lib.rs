//! Yapt CLI Library
//!
//! This crate provides the command-line interface for yapt. It prints the
//! `apt search` results as a numbered, colored menu, reads the packages to
//! install and hands them to `sudo apt install`.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`colors`]: Mapping of configured colors to terminal styles
//! - [`render`]: Numbered listing and instruction rendering
//! - [`input`]: Reading the selection from the terminal
//! - [`interrupt`]: Exit status 1 on Ctrl-C
//!
//! # Examples
//!
//! ```bash
//! # Search, pick packages, install them
//! yapt vim
//!
//! # Install without apt asking for confirmation
//! yapt -y vim
//!
//! # Print the install command instead of running it, without colors
//! yapt --debug --nocolor vim
//! ```

pub mod cli_args;
pub mod colors;
pub mod input;
pub mod interrupt;
pub mod render;
