//! ANSI escape styling.

use super::config::ColorPolicy;
use std::{fmt, sync::OnceLock};

const FOREGROUND_CLOSE: u8 = 39;
const BACKGROUND_CLOSE: u8 = 49;

/// A foreground colour, background colour, or text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(missing_docs, reason = "variant names are the colour names")]
pub enum Style {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
    BgGray,
    BgBrightRed,
    BgBrightGreen,
    BgBrightYellow,
    BgBrightBlue,
    BgBrightMagenta,
    BgBrightCyan,
    BgBrightWhite,
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reverse,
    Strikethrough,
}

impl Style {
    /// SGR parameter that turns the style on.
    #[must_use]
    pub const fn open_code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::Gray => 90,
            Self::BrightRed => 91,
            Self::BrightGreen => 92,
            Self::BrightYellow => 93,
            Self::BrightBlue => 94,
            Self::BrightMagenta => 95,
            Self::BrightCyan => 96,
            Self::BrightWhite => 97,
            Self::BgBlack => 40,
            Self::BgRed => 41,
            Self::BgGreen => 42,
            Self::BgYellow => 43,
            Self::BgBlue => 44,
            Self::BgMagenta => 45,
            Self::BgCyan => 46,
            Self::BgWhite => 47,
            Self::BgGray => 100,
            Self::BgBrightRed => 101,
            Self::BgBrightGreen => 102,
            Self::BgBrightYellow => 103,
            Self::BgBrightBlue => 104,
            Self::BgBrightMagenta => 105,
            Self::BgBrightCyan => 106,
            Self::BgBrightWhite => 107,
            Self::Bold => 1,
            Self::Dim => 2,
            Self::Italic => 3,
            Self::Underline => 4,
            Self::Blink => 5,
            Self::Reverse => 7,
            Self::Strikethrough => 9,
        }
    }

    /// SGR parameter that turns the style off.
    ///
    /// Colours share the foreground or background reset; text styles have
    /// their own.
    #[must_use]
    pub const fn close_code(self) -> u8 {
        match self {
            Self::Bold | Self::Dim => 22,
            Self::Italic => 23,
            Self::Underline => 24,
            Self::Blink => 25,
            Self::Reverse => 27,
            Self::Strikethrough => 29,
            Self::BgBlack
            | Self::BgRed
            | Self::BgGreen
            | Self::BgYellow
            | Self::BgBlue
            | Self::BgMagenta
            | Self::BgCyan
            | Self::BgWhite
            | Self::BgGray
            | Self::BgBrightRed
            | Self::BgBrightGreen
            | Self::BgBrightYellow
            | Self::BgBrightBlue
            | Self::BgBrightMagenta
            | Self::BgBrightCyan
            | Self::BgBrightWhite => BACKGROUND_CLOSE,
            _ => FOREGROUND_CLOSE,
        }
    }

    /// Escape sequence that turns the style on.
    #[must_use]
    pub fn open(self) -> String {
        sgr(self.open_code())
    }

    /// Escape sequence that turns the style off.
    #[must_use]
    pub fn close(self) -> String {
        sgr(self.close_code())
    }
}

fn sgr(code: u8) -> String {
    format!("\x1b[{code}m")
}

/// Applies [`Style`]s to text when colours are enabled.
///
/// # Examples
///
/// ```
/// use zyro_utils::terminal::{Ansi, Style};
///
/// let ansi = Ansi::new(true);
/// assert_eq!(ansi.paint(Style::Red, "hi"), "\x1b[31mhi\x1b[39m");
/// assert_eq!(Ansi::new(false).paint(Style::Red, "hi"), "hi");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ansi {
    enabled: bool,
}

impl Ansi {
    /// Creates a painter with colours on or off.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Painter following the process environment, decided once.
    #[must_use]
    pub fn detect() -> Self {
        static DETECTED: OnceLock<bool> = OnceLock::new();
        Self::new(*DETECTED.get_or_init(|| ColorPolicy::from_env().enabled()))
    }

    /// Returns `true` when escape codes are emitted.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Wraps `text` in the style's open and close codes.
    ///
    /// Close codes already inside `text` are followed by a re-open so that
    /// nested styling does not end this one early.
    #[must_use]
    pub fn paint(&self, style: Style, text: impl fmt::Display) -> String {
        let content = text.to_string();
        if !self.enabled {
            return content;
        }
        let open = style.open();
        let close = style.close();
        let body = if content.contains(&close) {
            content.replace(&close, &format!("{close}{open}"))
        } else {
            content
        };
        format!("{open}{body}{close}")
    }
}
