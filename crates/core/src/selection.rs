//! Parsing of the package numbers typed by the user.
//!
//! Input is a whitespace separated list of numbers (`1 2 3`) and inclusive
//! ascending ranges (`1-3`). The parsed selection is sorted and free of
//! duplicates. Ranges are kept as bounds until the selection is checked
//! against the package list, so `1-99999999999` costs nothing to parse.

use std::ops::RangeInclusive;
use std::str::FromStr;

use itertools::Itertools;

use crate::error::{Error, Result};

/// Separator between the bounds of a range token
const RANGE_SEPARATOR: char = '-';

/// Sorted, deduplicated package numbers, stored as disjoint ascending ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection(Vec<RangeInclusive<usize>>);

impl Selection {
    /// Selected numbers in ascending order, each once.
    ///
    /// Check [`Selection::max`] before iterating a selection that has not been
    /// validated; a range may be arbitrarily long.
    pub fn numbers(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().flat_map(Clone::clone)
    }

    /// The selection as merged inclusive ranges
    #[must_use]
    pub fn ranges(&self) -> &[RangeInclusive<usize>] {
        &self.0
    }

    /// Largest selected number
    #[must_use]
    pub fn max(&self) -> Option<usize> {
        self.0.last().map(|range| *range.end())
    }

    #[must_use]
    pub fn min(&self) -> Option<usize> {
        self.0.first().map(|range| *range.start())
    }
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        parse_selection(input)
    }
}

/// Parses a selection line such as `3 1-2 1` into `[1, 2, 3]`.
///
/// # Errors
///
/// - [`Error::EmptySelection`] if the input is empty or only whitespace
/// - [`Error::InvalidSelection`] for a token that is neither a number nor a range
/// - [`Error::DescendingRange`] for a range whose start is above its end
pub fn parse_selection(input: &str) -> Result<Selection> {
    let ranges: Vec<RangeInclusive<usize>> = input
        .split_whitespace()
        .map(parse_token)
        .collect::<Result<_>>()?;

    if ranges.is_empty() {
        return Err(Error::EmptySelection);
    }

    let merged = ranges
        .into_iter()
        .sorted_by_key(|range| (*range.start(), *range.end()))
        .coalesce(|previous, next| {
            if *next.start() <= previous.end().saturating_add(1) {
                Ok(*previous.start()..=(*previous.end()).max(*next.end()))
            } else {
                Err((previous, next))
            }
        })
        .collect();

    Ok(Selection(merged))
}

fn parse_token(token: &str) -> Result<RangeInclusive<usize>> {
    // A single character is always a bare number, never a range.
    if token.chars().count() == 1 || token.chars().all(|c| c.is_ascii_digit()) {
        let number = parse_number(token, token)?;
        return Ok(number..=number);
    }

    let Some((start, end)) = token.split_once(RANGE_SEPARATOR) else {
        return Err(Error::InvalidSelection(token.to_string()));
    };

    let start = parse_number(start, token)?;
    let end = parse_number(end, token)?;

    if start > end {
        return Err(Error::DescendingRange { start, end });
    }

    Ok(start..=end)
}

fn parse_number(value: &str, token: &str) -> Result<usize> {
    // `usize::from_str` accepts a leading `+`, which is not part of the grammar.
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidSelection(token.to_string()));
    }

    value
        .parse()
        .map_err(|_| Error::InvalidSelection(token.to_string()))
}
