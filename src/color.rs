//! The 16-color code model.
//!
//! A [`Color`] is a single SGR parameter: a foreground color (30–39, 90–97),
//! a background color (40–49, 100–107) or a text option (0–9). Codes are
//! plain numbers; nothing here checks that a value belongs to one of the
//! named constants; out-of-range codes are handed to the terminal as-is.

use std::fmt;
use std::fmt::Arguments;

use minijinja::Value;
use serde::{Deserialize, Serialize};

use crate::render::{render_code, render_string};

/// Semantic group a [`Color`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKind {
    /// 30–39 and 90–97.
    Foreground,
    /// 40–49 and 100–107.
    Background,
    /// Text options, 0–9.
    Option,
    /// Any code outside the known ranges.
    Unknown,
}

/// One SGR parameter.
///
/// # Example
///
/// ```rust
/// use ansitheme::Color;
///
/// assert_eq!(Color::FG_GREEN.to_string(), "32");
/// assert_eq!(Color::FG_RED.render(&ansitheme::args!["hi"]), "\x1b[31mhi\x1b[0m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Color(pub u8);

impl Color {
    /// Resets all attributes.
    pub const OP_RESET: Color = Color(0);
    /// Bold or increased intensity.
    pub const OP_BOLD: Color = Color(1);
    /// Faint, decreased intensity.
    pub const OP_FUZZY: Color = Color(2);
    /// Italic.
    pub const OP_ITALIC: Color = Color(3);
    /// Underline.
    pub const OP_UNDERSCORE: Color = Color(4);
    /// Slow blink.
    pub const OP_BLINK: Color = Color(5);
    /// Rapid blink.
    pub const OP_FAST_BLINK: Color = Color(6);
    /// Swaps foreground and background.
    pub const OP_REVERSE: Color = Color(7);
    /// Hidden text.
    pub const OP_CONCEALED: Color = Color(8);
    /// Crossed-out text.
    pub const OP_STRIKETHROUGH: Color = Color(9);

    /// Black foreground.
    pub const FG_BLACK: Color = Color(30);
    /// Red foreground.
    pub const FG_RED: Color = Color(31);
    /// Green foreground.
    pub const FG_GREEN: Color = Color(32);
    /// Yellow foreground.
    pub const FG_YELLOW: Color = Color(33);
    /// Blue foreground.
    pub const FG_BLUE: Color = Color(34);
    /// Magenta foreground.
    pub const FG_MAGENTA: Color = Color(35);
    /// Cyan foreground.
    pub const FG_CYAN: Color = Color(36);
    /// White foreground.
    pub const FG_WHITE: Color = Color(37);
    /// Terminal default foreground.
    pub const FG_DEFAULT: Color = Color(39);

    /// Dark gray foreground.
    pub const FG_DARK_GRAY: Color = Color(90);
    /// Light red foreground.
    pub const FG_LIGHT_RED: Color = Color(91);
    /// Light green foreground.
    pub const FG_LIGHT_GREEN: Color = Color(92);
    /// Light yellow foreground.
    pub const FG_LIGHT_YELLOW: Color = Color(93);
    /// Light blue foreground.
    pub const FG_LIGHT_BLUE: Color = Color(94);
    /// Light magenta foreground.
    pub const FG_LIGHT_MAGENTA: Color = Color(95);
    /// Light cyan foreground.
    pub const FG_LIGHT_CYAN: Color = Color(96);
    /// Light white foreground.
    pub const FG_LIGHT_WHITE: Color = Color(97);
    /// Same code as [`Color::FG_DARK_GRAY`].
    pub const FG_GRAY: Color = Color(90);

    /// Black background.
    pub const BG_BLACK: Color = Color(40);
    /// Red background.
    pub const BG_RED: Color = Color(41);
    /// Green background.
    pub const BG_GREEN: Color = Color(42);
    /// Yellow background.
    pub const BG_YELLOW: Color = Color(43);
    /// Blue background.
    pub const BG_BLUE: Color = Color(44);
    /// Magenta background.
    pub const BG_MAGENTA: Color = Color(45);
    /// Cyan background.
    pub const BG_CYAN: Color = Color(46);
    /// White background.
    pub const BG_WHITE: Color = Color(47);
    /// Terminal default background.
    pub const BG_DEFAULT: Color = Color(49);

    /// Dark gray background.
    pub const BG_DARK_GRAY: Color = Color(100);
    /// Light red background.
    pub const BG_LIGHT_RED: Color = Color(101);
    /// Light green background.
    pub const BG_LIGHT_GREEN: Color = Color(102);
    /// Light yellow background.
    pub const BG_LIGHT_YELLOW: Color = Color(103);
    /// Light blue background.
    pub const BG_LIGHT_BLUE: Color = Color(104);
    /// Light magenta background.
    pub const BG_LIGHT_MAGENTA: Color = Color(105);
    /// Light cyan background.
    pub const BG_LIGHT_CYAN: Color = Color(106);
    /// Light white background.
    pub const BG_LIGHT_WHITE: Color = Color(107);

    /// Returns the raw SGR parameter.
    pub fn code(self) -> u8 {
        self.0
    }

    /// Returns the semantic group this code falls in.
    pub fn kind(self) -> ColorKind {
        match self.0 {
            0..=9 => ColorKind::Option,
            30..=39 | 90..=97 => ColorKind::Foreground,
            40..=49 | 100..=107 => ColorKind::Background,
            _ => ColorKind::Unknown,
        }
    }

    /// Converts a normal color to its light variant.
    ///
    /// `FG_RED` becomes `FG_LIGHT_RED`, `BG_BLUE` becomes `BG_LIGHT_BLUE`.
    /// Options, defaults and already-light colors are returned unchanged.
    pub fn light(self) -> Color {
        match self.0 {
            30..=37 | 40..=47 => Color(self.0 + 60),
            _ => self,
        }
    }

    /// Inverse of [`Color::light`].
    pub fn darken(self) -> Color {
        match self.0 {
            90..=97 | 100..=107 => Color(self.0 - 60),
            _ => self,
        }
    }

    /// Returns the canonical name of a known code, e.g. `"red"`, `"bg_light_blue"`
    /// or `"bold"`.
    ///
    /// These are the names accepted by [`Color::from_name`] and in stylesheets.
    pub fn name(self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|(_, color)| *color == self)
            .map(|(name, _)| *name)
    }

    /// Looks up a color by name or decimal code.
    ///
    /// Names are matched case-insensitively and `-` is treated as `_`, so
    /// `"Light-Cyan"` and `"light_cyan"` are equivalent. A decimal string
    /// such as `"31"` yields that code regardless of whether it is named.
    pub fn from_name(name: &str) -> Option<Color> {
        let name = name.trim();
        if let Ok(code) = name.parse::<u8>() {
            return Some(Color(code));
        }
        let normalized = name.to_ascii_lowercase().replace('-', "_");
        NAMES
            .iter()
            .find(|(candidate, _)| *candidate == normalized)
            .map(|(_, color)| *color)
            .or(match normalized.as_str() {
                "gray" | "grey" => Some(Color::FG_GRAY),
                "underline" => Some(Color::OP_UNDERSCORE),
                _ => None,
            })
    }

    /// Renders the arguments with this single code, print-style.
    pub fn render(self, args: &[Value]) -> String {
        render_code(&self.to_string(), args)
    }

    /// Formats then renders with this single code.
    pub fn sprintf(self, args: Arguments<'_>) -> String {
        render_string(&self.to_string(), &fmt::format(args))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Color {
    fn from(code: u8) -> Self {
        Color(code)
    }
}

const NAMES: &[(&str, Color)] = &[
    ("reset", Color::OP_RESET),
    ("bold", Color::OP_BOLD),
    ("fuzzy", Color::OP_FUZZY),
    ("italic", Color::OP_ITALIC),
    ("underscore", Color::OP_UNDERSCORE),
    ("blink", Color::OP_BLINK),
    ("fast_blink", Color::OP_FAST_BLINK),
    ("reverse", Color::OP_REVERSE),
    ("concealed", Color::OP_CONCEALED),
    ("strikethrough", Color::OP_STRIKETHROUGH),
    ("black", Color::FG_BLACK),
    ("red", Color::FG_RED),
    ("green", Color::FG_GREEN),
    ("yellow", Color::FG_YELLOW),
    ("blue", Color::FG_BLUE),
    ("magenta", Color::FG_MAGENTA),
    ("cyan", Color::FG_CYAN),
    ("white", Color::FG_WHITE),
    ("default", Color::FG_DEFAULT),
    ("dark_gray", Color::FG_DARK_GRAY),
    ("light_red", Color::FG_LIGHT_RED),
    ("light_green", Color::FG_LIGHT_GREEN),
    ("light_yellow", Color::FG_LIGHT_YELLOW),
    ("light_blue", Color::FG_LIGHT_BLUE),
    ("light_magenta", Color::FG_LIGHT_MAGENTA),
    ("light_cyan", Color::FG_LIGHT_CYAN),
    ("light_white", Color::FG_LIGHT_WHITE),
    ("bg_black", Color::BG_BLACK),
    ("bg_red", Color::BG_RED),
    ("bg_green", Color::BG_GREEN),
    ("bg_yellow", Color::BG_YELLOW),
    ("bg_blue", Color::BG_BLUE),
    ("bg_magenta", Color::BG_MAGENTA),
    ("bg_cyan", Color::BG_CYAN),
    ("bg_white", Color::BG_WHITE),
    ("bg_default", Color::BG_DEFAULT),
    ("bg_dark_gray", Color::BG_DARK_GRAY),
    ("bg_light_red", Color::BG_LIGHT_RED),
    ("bg_light_green", Color::BG_LIGHT_GREEN),
    ("bg_light_yellow", Color::BG_LIGHT_YELLOW),
    ("bg_light_blue", Color::BG_LIGHT_BLUE),
    ("bg_light_magenta", Color::BG_LIGHT_MAGENTA),
    ("bg_light_cyan", Color::BG_LIGHT_CYAN),
    ("bg_light_white", Color::BG_LIGHT_WHITE),
];
