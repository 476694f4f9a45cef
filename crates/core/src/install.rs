//! Maps a selection back to package names and builds the install command.

use std::fmt::{Display, Formatter};
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};
use crate::execution;
use crate::selection::Selection;

const PRIVILEGE_PROGRAM: &str = "sudo";
const INSTALL_PROGRAM: &str = "apt";
const INSTALL_VERB: &str = "install";
const NO_CONFIRM_FLAG: &str = "-y";

/// Looks up the package for every selected 1-based number.
///
/// # Errors
///
/// Returns [`Error::InvalidPackageNumber`] if any number is zero or larger
/// than the number of packages found.
pub fn resolve_packages(selection: &Selection, packages: &[String]) -> Result<Vec<String>> {
    let out_of_range = selection
        .max()
        .filter(|&max| max > packages.len())
        .or_else(|| selection.min().filter(|&min| min == 0));

    if let Some(number) = out_of_range {
        return Err(Error::InvalidPackageNumber {
            number,
            available: packages.len(),
        });
    }

    // Bounds are checked above, so expanding the ranges is safe.
    Ok(selection
        .numbers()
        .map(|number| packages[number - 1].clone())
        .collect())
}

/// A privileged install invocation for a list of packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub packages: Vec<String>,
    /// Pass the package manager's non-interactive flag
    pub no_confirm: bool,
}

impl InstallCommand {
    pub fn new(packages: Vec<String>, no_confirm: bool) -> Self {
        Self {
            packages,
            no_confirm,
        }
    }

    /// Builds the command for a selection against the package index list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPackageNumber`] if the selection refers to a
    /// package that does not exist.
    pub fn for_selection(
        selection: &Selection,
        packages: &[String],
        no_confirm: bool,
    ) -> Result<Self> {
        Ok(Self::new(resolve_packages(selection, packages)?, no_confirm))
    }

    /// Full argument vector, starting with the privilege wrapper.
    #[must_use]
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec![
            PRIVILEGE_PROGRAM.to_string(),
            INSTALL_PROGRAM.to_string(),
            INSTALL_VERB.to_string(),
        ];
        argv.extend(self.packages.iter().cloned());

        if self.no_confirm {
            argv.push(NO_CONFIRM_FLAG.to_string());
        }

        argv
    }

    /// Runs the install, inheriting the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned or exits with a
    /// non-success status.
    pub fn execute(&self) -> Result<()> {
        let argv = self.argv();
        debug!("Running install: `{}`", self);

        let mut command = Command::new(&argv[0]);
        command.args(&argv[1..]);

        execution::execute_command(command)
    }
}

impl Display for InstallCommand {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.argv().join(" ").as_str())
    }
}
