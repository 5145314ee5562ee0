//! Color descriptors and the palette they resolve against.
//!
//! A color descriptor is what the tokenizer builds while reading the
//! characters after `\x03` (palette) or `\x04` (hex). The palette maps the
//! sixteen mIRC color codes to CSS class names.

use std::collections::HashMap;

/// Number of hex digits in a complete RGB value.
pub const HEX_DIGITS: usize = 6;

/// CSS class names for mIRC colors `0` through `15`.
pub const MIRC_COLORS: [&str; 16] = [
    "white", "black", "navy", "green", "red", "maroon", "purple", "orange", "yellow", "lime",
    "teal", "cyan", "blue", "magenta", "grey", "silver",
];

/// State of the background section of a color descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Background {
    /// No comma seen.
    #[default]
    None,
    /// A comma was seen but no value followed yet.
    Pending,
    /// Digits (or hex digits) collected after the comma.
    Value(String),
}

impl Background {
    /// Returns true if no background section has been opened.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns true if a comma opened the section but no value followed.
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The collected value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// A foreground/background color change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorSpec {
    /// Foreground palette code or hex value.
    pub fg: Option<String>,
    /// Background section.
    pub bg: Background,
    /// True if introduced by `\x04`, making both values hex.
    pub rgb: bool,
}

impl ColorSpec {
    /// Empty palette descriptor, as created by `\x03`.
    pub fn palette() -> Self {
        Self::default()
    }

    /// Empty RGB descriptor, as created by `\x04`.
    pub fn hex() -> Self {
        Self {
            rgb: true,
            ..Self::default()
        }
    }

    /// A descriptor with neither a foreground nor a background section.
    ///
    /// An opened but still empty background section counts as content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none()
    }
}

/// Mapping from numeric color codes to CSS class names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    classes: HashMap<String, String>,
}

impl Palette {
    /// Palette with no entries at all.
    pub fn empty() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Map `code` to `class`, replacing any previous mapping.
    pub fn insert(&mut self, code: impl Into<String>, class: impl Into<String>) {
        self.classes.insert(code.into(), class.into());
    }

    /// CSS class for `code`, or `None` if the code is not mapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ircfmt_proto::colors::Palette;
    ///
    /// let palette = Palette::default();
    /// assert_eq!(palette.class("4"), Some("red"));
    /// assert_eq!(palette.class("04"), Some("red"));
    /// assert_eq!(palette.class("16"), None);
    /// ```
    pub fn class(&self, code: &str) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    /// Number of mapped codes, aliases included.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if nothing is mapped.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for Palette {
    /// The sixteen mIRC colors. Codes below ten are reachable both padded
    /// (`"04"`) and unpadded (`"4"`).
    fn default() -> Self {
        let mut palette = Self::empty();
        for (code, class) in MIRC_COLORS.iter().enumerate() {
            if code < 10 {
                palette.insert(format!("0{code}"), *class);
            }
            palette.insert(code.to_string(), *class);
        }
        palette
    }
}
