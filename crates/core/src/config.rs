//! Color configuration for yapt.
//!
//! This module resolves the per-user config file path and reads the optional
//! `[Colors]` section into an explicit [`ColorScheme`] value. Without a config
//! file the built-in defaults are used.

use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use ini::Ini;
use log::{debug, info};

use crate::error::{Error, Result};

/// Config file checked first
const HOME_CONFIG_PATH: &str = "~/.yaptrc";
/// Config file checked when the home config does not exist
const XDG_CONFIG_PATH: &str = "~/.config/yapt/yaptrc";

/// Section holding the color options
pub const COLORS_SECTION: &str = "Colors";

/// Symbolic color names accepted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Terminal default
    None,
}

impl ColorName {
    pub const ALL: [ColorName; 9] = [
        ColorName::Black,
        ColorName::Red,
        ColorName::Green,
        ColorName::Yellow,
        ColorName::Blue,
        ColorName::Magenta,
        ColorName::Cyan,
        ColorName::White,
        ColorName::None,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Black => "black",
            ColorName::Red => "red",
            ColorName::Green => "green",
            ColorName::Yellow => "yellow",
            ColorName::Blue => "blue",
            ColorName::Magenta => "magenta",
            ColorName::Cyan => "cyan",
            ColorName::White => "white",
            ColorName::None => "none",
        }
    }
}

impl FromStr for ColorName {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let lowercase = value.trim().to_lowercase();
        ColorName::ALL
            .into_iter()
            .find(|name| name.as_str() == lowercase)
            .ok_or_else(|| Error::UnknownColorName(lowercase))
    }
}

impl Display for ColorName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Foreground and background color for one element of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub foreground: ColorName,
    pub background: ColorName,
}

impl ColorPair {
    #[must_use]
    pub const fn new(foreground: ColorName, background: ColorName) -> Self {
        Self {
            foreground,
            background,
        }
    }
}

/// Colors for every decorated element of the search listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    pub package: ColorPair,
    pub number: ColorPair,
    pub installed: ColorPair,
    pub arrow: ColorPair,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            package: ColorPair::new(ColorName::Green, ColorName::None),
            number: ColorPair::new(ColorName::Red, ColorName::None),
            installed: ColorPair::new(ColorName::Black, ColorName::Yellow),
            arrow: ColorPair::new(ColorName::Yellow, ColorName::None),
        }
    }
}

impl ColorScheme {
    /// Builds a scheme from the `[Colors]` section of a parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the section or any of the eight options is missing,
    /// or if a value is not a known color name.
    pub fn from_ini(config: &Ini) -> Result<Self> {
        let pair = |prefix: &str| -> Result<ColorPair> {
            Ok(ColorPair::new(
                read_color(config, &format!("{prefix}fore"))?,
                read_color(config, &format!("{prefix}back"))?,
            ))
        };

        Ok(Self {
            package: pair("pkg")?,
            number: pair("num")?,
            installed: pair("ins")?,
            arrow: pair("arr")?,
        })
    }
}

// Option names match regardless of case, so `PkgFore` reads as `pkgfore`.
fn read_color(config: &Ini, option: &str) -> Result<ColorName> {
    config
        .section(Some(COLORS_SECTION))
        .and_then(|section| {
            section
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(option))
                .map(|(_, value)| value)
        })
        .ok_or_else(|| Error::missing_config_option(COLORS_SECTION, option))?
        .parse()
}

/// Resolves the config file path.
///
/// An explicit path is returned as-is after `~` expansion. Otherwise the first
/// existing file of `~/.yaptrc` and `~/.config/yapt/yaptrc` is returned, or
/// `None` if neither exists.
pub fn get_config_path(config_path_arg: &Option<String>) -> Option<String> {
    if let Some(config_path) = config_path_arg {
        return Some(shellexpand::tilde(config_path).to_string());
    }

    [HOME_CONFIG_PATH, XDG_CONFIG_PATH]
        .iter()
        .map(|path| shellexpand::tilde(path).to_string())
        .find(|path| Path::new(path).exists())
}

/// Reads a color scheme from the config file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the
/// `[Colors]` section is incomplete or invalid.
pub fn read_color_scheme(path: &str) -> Result<ColorScheme> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::io_error("config".to_string(), path.to_string(), e))?;

    let config =
        Ini::load_from_str(&contents).map_err(|e| Error::config_parse(path.to_string(), e))?;

    ColorScheme::from_ini(&config)
}

/// Loads the color scheme to render with.
///
/// Returns `None` when colors are disabled; the config file is not read at
/// all in that case.
///
/// # Errors
///
/// Returns an error if a config file exists but is invalid.
pub fn load_color_scheme(
    no_color: bool,
    config_path_arg: &Option<String>,
) -> Result<Option<ColorScheme>> {
    if no_color {
        debug!("Colored output disabled");
        return Ok(None);
    }

    match get_config_path(config_path_arg) {
        Some(path) => {
            info!("Loading colors from `{}`", path);
            read_color_scheme(&path).map(Some)
        }
        None => {
            info!("No config file found, using default colors");
            Ok(Some(ColorScheme::default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = "\
[Colors]
pkgfore = blue
pkgback = none
numfore = Cyan
numback = none
insfore = white
insback = RED
arrfore = magenta
arrback = black
";

    #[test]
    fn test_color_name_parses_case_insensitively() {
        assert_eq!("GREEN".parse::<ColorName>().unwrap(), ColorName::Green);
        assert_eq!(" none ".parse::<ColorName>().unwrap(), ColorName::None);
    }

    #[test]
    fn test_color_name_rejects_unknown() {
        let result = "purple".parse::<ColorName>();
        assert!(matches!(result, Err(Error::UnknownColorName(name)) if name == "purple"));
    }

    #[test]
    fn test_palette_has_nine_entries() {
        for name in ColorName::ALL {
            assert_eq!(name.as_str().parse::<ColorName>().unwrap(), name);
        }
        assert_eq!(ColorName::ALL.len(), 9);
    }

    #[test]
    fn test_default_scheme() {
        let scheme = ColorScheme::default();
        assert_eq!(scheme.package, ColorPair::new(ColorName::Green, ColorName::None));
        assert_eq!(scheme.number, ColorPair::new(ColorName::Red, ColorName::None));
        assert_eq!(
            scheme.installed,
            ColorPair::new(ColorName::Black, ColorName::Yellow)
        );
        assert_eq!(scheme.arrow, ColorPair::new(ColorName::Yellow, ColorName::None));
    }

    #[test]
    fn test_scheme_from_complete_section() {
        let config = Ini::load_from_str(FULL_CONFIG).unwrap();
        let scheme = ColorScheme::from_ini(&config).unwrap();

        assert_eq!(scheme.package, ColorPair::new(ColorName::Blue, ColorName::None));
        assert_eq!(scheme.number, ColorPair::new(ColorName::Cyan, ColorName::None));
        assert_eq!(scheme.installed, ColorPair::new(ColorName::White, ColorName::Red));
        assert_eq!(scheme.arrow, ColorPair::new(ColorName::Magenta, ColorName::Black));
    }

    #[test]
    fn test_scheme_names_missing_option() {
        let config = Ini::load_from_str(&FULL_CONFIG.replace("insback = RED\n", "")).unwrap();
        let result = ColorScheme::from_ini(&config);

        match result {
            Err(Error::MissingConfigOption { section, option }) => {
                assert_eq!(section, "Colors");
                assert_eq!(option, "insback");
            }
            other => panic!("Expected missing option error, got {other:?}"),
        }
    }

    #[test]
    fn test_option_names_ignore_case() {
        let config = Ini::load_from_str(
            &FULL_CONFIG
                .replace("pkgfore", "PkgFore")
                .replace("arrback", "ARRBACK"),
        )
        .unwrap();
        let scheme = ColorScheme::from_ini(&config).unwrap();

        assert_eq!(scheme.package.foreground, ColorName::Blue);
        assert_eq!(scheme.arrow.background, ColorName::Black);
    }

    #[test]
    fn test_scheme_without_section() {
        let config = Ini::load_from_str("[Other]\nkey = value\n").unwrap();
        let result = ColorScheme::from_ini(&config);
        assert!(matches!(result, Err(Error::MissingConfigOption { .. })));
    }

    #[test]
    fn test_get_config_path_with_custom_path() {
        let custom_path = Some("/custom/path/yaptrc".to_string());
        assert_eq!(
            get_config_path(&custom_path),
            Some("/custom/path/yaptrc".to_string())
        );
    }

    #[test]
    fn test_get_config_path_with_tilde() {
        let tilde_path = Some("~/my-yaptrc".to_string());
        let result = get_config_path(&tilde_path).unwrap();
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-yaptrc"));
    }

    #[test]
    fn test_no_color_skips_config() {
        let missing = Some("/definitely/not/here/yaptrc".to_string());
        assert!(load_color_scheme(true, &missing).unwrap().is_none());
    }

    #[test]
    fn test_explicit_missing_config_is_io_error() {
        let missing = Some("/definitely/not/here/yaptrc".to_string());
        let result = load_color_scheme(false, &missing);
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
