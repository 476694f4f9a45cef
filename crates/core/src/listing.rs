//! Classification of search result lines.
//!
//! Each raw line is inspected by two pure functions: one finds the leading
//! package name, the other finds a trailing installed marker such as
//! `[installed,automatic]`. Both run on the undecorated line, so color codes
//! injected later can never be mistaken for a marker.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

static PACKAGE_NAME: OnceLock<Regex> = OnceLock::new();
static INSTALLED_MARKER: OnceLock<Regex> = OnceLock::new();

fn package_name_regex() -> &'static Regex {
    PACKAGE_NAME.get_or_init(|| {
        Regex::new(r"^([0-9a-z][0-9a-z.+\-]*)(?:/|\s|$)").expect("package name pattern is valid")
    })
}

fn installed_marker_regex() -> &'static Regex {
    // First character must be a letter so `[30m`-style escape fragments never match.
    INSTALLED_MARKER.get_or_init(|| {
        Regex::new(r"(\[\p{L}[^\[\]]*\])\s*$").expect("installed marker pattern is valid")
    })
}

/// Finds the byte range of the package name at the start of `line`.
pub fn find_package_name(line: &str) -> Option<Range<usize>> {
    package_name_regex()
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|name| name.range())
}

/// Finds the byte range of a trailing installed marker in `line`.
pub fn find_installed_marker(line: &str) -> Option<Range<usize>> {
    installed_marker_regex()
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|marker| marker.range())
}

/// One line of search output and what was recognized in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    text: String,
    /// 1-based position in the package list, if this line names a package
    number: Option<usize>,
    name: Option<Range<usize>>,
    installed: Option<Range<usize>>,
}

impl ParsedLine {
    fn parse(text: String, next_number: usize) -> Self {
        let Some(name) = find_package_name(&text) else {
            return Self {
                text,
                number: None,
                name: None,
                installed: None,
            };
        };

        let installed = find_installed_marker(&text).filter(|marker| marker.start >= name.end);

        Self {
            text,
            number: Some(next_number),
            name: Some(name),
            installed,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn number(&self) -> Option<usize> {
        self.number
    }

    #[must_use]
    pub fn package_name(&self) -> Option<&str> {
        self.name.as_ref().map(|name| &self.text[name.clone()])
    }

    #[must_use]
    pub fn installed_marker(&self) -> Option<&str> {
        self.installed
            .as_ref()
            .map(|marker| &self.text[marker.clone()])
    }

    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.installed.is_some()
    }

    /// Splits the line into the parts a renderer decorates.
    ///
    /// Returns `None` for lines without a package name; those are shown as-is.
    #[must_use]
    pub fn segments(&self) -> Option<LineSegments<'_>> {
        let name = self.name.clone()?;
        let number = self.number?;

        let (between, marker, tail) = match &self.installed {
            Some(marker) => (
                &self.text[name.end..marker.start],
                Some(&self.text[marker.clone()]),
                &self.text[marker.end..],
            ),
            None => (&self.text[name.end..], None, ""),
        };

        Some(LineSegments {
            number,
            name: &self.text[name],
            between,
            installed: marker,
            tail,
        })
    }
}

/// The decorated parts of a package line, in display order.
#[derive(Debug, PartialEq, Eq)]
pub struct LineSegments<'a> {
    pub number: usize,
    pub name: &'a str,
    pub between: &'a str,
    pub installed: Option<&'a str>,
    pub tail: &'a str,
}

/// All result lines of one search plus the package index list.
///
/// Package `n` (1-based) in [`SearchListing::packages`] is the one displayed
/// with number `n`.
#[derive(Debug, Clone, Default)]
pub struct SearchListing {
    lines: Vec<ParsedLine>,
    packages: Vec<String>,
}

impl SearchListing {
    /// Classifies every line in order, numbering package lines from 1.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut listing = Self::default();

        for line in lines {
            let parsed = ParsedLine::parse(line.into(), listing.packages.len() + 1);
            if let Some(name) = parsed.package_name() {
                listing.packages.push(name.to_string());
            }
            listing.lines.push(parsed);
        }

        listing
    }

    #[must_use]
    pub fn lines(&self) -> &[ParsedLine] {
        &self.lines
    }

    #[must_use]
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// Number of packages found
    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_up_to_slash() {
        let line = "vim-gtk3/jammy-updates 2:8.2.3995 amd64";
        let range = find_package_name(line).unwrap();
        assert_eq!(&line[range], "vim-gtk3");
    }

    #[test]
    fn test_package_name_with_dots_and_plus() {
        let line = "g++-12/jammy 12.3.0 amd64";
        assert_eq!(&line[find_package_name(line).unwrap()], "g++-12");

        let line = "libqt5core5a.1 5.15";
        assert_eq!(&line[find_package_name(line).unwrap()], "libqt5core5a.1");
    }

    #[test]
    fn test_description_line_has_no_name() {
        assert!(find_package_name("  Vi IMproved - enhanced vi editor").is_none());
        assert!(find_package_name("").is_none());
        assert!(find_package_name("WARNING: apt does not have a stable CLI").is_none());
    }

    #[test]
    fn test_installed_marker() {
        let line = "vim/jammy,now 2:8.2.3995 amd64 [installed]";
        let range = find_installed_marker(line).unwrap();
        assert_eq!(&line[range], "[installed]");

        let line = "vim/jammy,now 2:8.2 amd64 [installed,upgradable to: 2:8.3]  ";
        let range = find_installed_marker(line).unwrap();
        assert_eq!(&line[range], "[installed,upgradable to: 2:8.3]");

        let line = "vim/jammy,now 2:8.2 amd64 [instalado, automático]";
        let range = find_installed_marker(line).unwrap();
        assert_eq!(&line[range], "[instalado, automático]");
    }

    #[test]
    fn test_installed_marker_ignores_escape_codes() {
        assert!(find_installed_marker("\x1b[30m vim \x1b[0m").is_none());
        assert!(find_installed_marker("vim [30m]").is_none());
        assert!(find_installed_marker("vim/jammy 2:8.2 amd64").is_none());
    }

    #[test]
    fn test_listing_numbers_packages() {
        let listing = SearchListing::from_lines([
            "vim/jammy 2:8.2 amd64 [installed]",
            "  Vi IMproved - enhanced vi editor",
            "",
            "vim-gtk3/jammy 2:8.2 amd64",
            "  Vi IMproved - gtk3",
        ]);

        assert_eq!(listing.packages(), ["vim", "vim-gtk3"]);
        assert_eq!(listing.len(), 2);

        let numbers: Vec<Option<usize>> = listing.lines().iter().map(ParsedLine::number).collect();
        assert_eq!(numbers, [Some(1), None, None, Some(2), None]);

        assert!(listing.lines()[0].is_installed());
        assert!(!listing.lines()[3].is_installed());
    }

    #[test]
    fn test_unnamed_line_is_untouched() {
        let listing = SearchListing::from_lines(["  description [installed]"]);
        let line = &listing.lines()[0];

        assert!(listing.is_empty());
        assert_eq!(line.text(), "  description [installed]");
        assert!(line.installed_marker().is_none());
        assert!(line.segments().is_none());
    }

    #[test]
    fn test_segments() {
        let listing = SearchListing::from_lines(["vim/jammy 2:8.2 amd64 [installed] "]);
        let segments = listing.lines()[0].segments().unwrap();

        assert_eq!(
            segments,
            LineSegments {
                number: 1,
                name: "vim",
                between: "/jammy 2:8.2 amd64 ",
                installed: Some("[installed]"),
                tail: " ",
            }
        );
    }

    #[test]
    fn test_segments_without_marker() {
        let listing = SearchListing::from_lines(["nano/jammy 6.2 amd64"]);
        let segments = listing.lines()[0].segments().unwrap();

        assert_eq!(segments.name, "nano");
        assert_eq!(segments.between, "/jammy 6.2 amd64");
        assert_eq!(segments.installed, None);
        assert_eq!(segments.tail, "");
    }
}
