use std::io::{stdout, BufRead, Write};

use log::debug;
use yapt_core::error::{Error, Result};
use yapt_core::selection::{parse_selection, Selection};

/// Reads one line of package numbers from `reader` and parses it.
///
/// End of input counts as an empty selection.
pub fn read_selection<R: BufRead>(reader: &mut R) -> Result<Selection> {
    stdout().flush().map_err(Error::Stdio)?;

    let mut input = String::new();
    reader.read_line(&mut input).map_err(Error::Stdio)?;
    debug!("Selection input: `{}`", input.trim_end());

    parse_selection(&input)
}
