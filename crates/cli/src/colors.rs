use crossterm::style::{Color, ContentStyle, StyledContent};
use yapt_core::config::{ColorName, ColorPair};

/// Trait for converting configured colors to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Color;
}

impl AsTermColor for ColorName {
    fn as_crossterm_color(&self) -> Color {
        // The dark variants are the classic 8-color ANSI palette.
        match self {
            ColorName::Black => Color::Black,
            ColorName::Red => Color::DarkRed,
            ColorName::Green => Color::DarkGreen,
            ColorName::Yellow => Color::DarkYellow,
            ColorName::Blue => Color::DarkBlue,
            ColorName::Magenta => Color::DarkMagenta,
            ColorName::Cyan => Color::DarkCyan,
            ColorName::White => Color::Grey,
            ColorName::None => Color::Reset,
        }
    }
}

/// Trait for building a terminal style from a configured color pair
pub trait AsContentStyle {
    fn as_content_style(&self) -> ContentStyle;
}

impl AsContentStyle for ColorPair {
    fn as_content_style(&self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = Some(self.foreground.as_crossterm_color());
        style.background_color = Some(self.background.as_crossterm_color());
        style
    }
}

/// Styles `text` with `pair`, or leaves it plain when colors are off.
///
/// A styled value resets the terminal colors after itself.
pub fn paint<'a>(text: &'a str, pair: Option<&ColorPair>) -> StyledContent<&'a str> {
    match pair {
        Some(pair) => pair.as_content_style().apply(text),
        None => ContentStyle::new().apply(text),
    }
}
