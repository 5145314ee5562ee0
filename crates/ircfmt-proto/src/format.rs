//! mIRC formatting control characters.
//!
//! This module classifies the control characters that may appear inside
//! message content and toggle formatting on and off.
//!
//! # Control characters
//! - 0x02 (^B): Bold
//! - 0x03 (^C): Color (followed by optional `fg[,bg]` palette codes)
//! - 0x04 (^D): Hex color (followed by optional `RRGGBB[,RRGGBB]`)
//! - 0x0F (^O): Reset all formatting
//! - 0x11 (^Q): Monospace
//! - 0x12 (^R): Inverse
//! - 0x16 (^V): Italic (older clients)
//! - 0x1D (^]): Italic
//! - 0x1F (^_): Underline

use std::fmt;

/// Bold toggle.
pub const BOLD: char = '\x02';
/// Palette color introducer.
pub const COLOR: char = '\x03';
/// Hex (RGB) color introducer.
pub const HEX_COLOR: char = '\x04';
/// Clears every active format.
pub const RESET: char = '\x0F';
/// Monospace toggle.
pub const MONOSPACE: char = '\x11';
/// Inverse toggle.
pub const INVERSE: char = '\x12';
/// Italic toggle as sent by older clients.
pub const ITALIC_LEGACY: char = '\x16';
/// Italic toggle.
pub const ITALIC: char = '\x1D';
/// Underline toggle.
pub const UNDERLINE: char = '\x1F';

/// A formatting tag that is switched on and off by a single character.
///
/// The declaration order is significant: it fixes the numeric ids handed out
/// by [`TokenTable`](crate::TokenTable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `\x02`
    Bold,
    /// `\x11`
    Monospace,
    /// `\x12`
    Inverse,
    /// `\x16` or `\x1D`
    Italic,
    /// `\x1F`
    Underline,
}

impl TagKind {
    /// Every toggle tag, in id order.
    pub const ALL: [TagKind; 5] = [
        TagKind::Bold,
        TagKind::Monospace,
        TagKind::Inverse,
        TagKind::Italic,
        TagKind::Underline,
    ];

    /// Position of this tag in [`TagKind::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical uppercase name, as used in configuration and diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "BOLD",
            Self::Monospace => "MONOSPACE",
            Self::Inverse => "INVERSE",
            Self::Italic => "ITALIC",
            Self::Underline => "UNDERLINE",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a control character does to the token stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlChar {
    /// Opens the tag, or closes it when already open.
    Toggle(TagKind),
    /// Starts a palette color descriptor.
    Color,
    /// Starts an RGB color descriptor.
    HexColor,
    /// Closes everything that is open.
    Reset,
}

impl ControlChar {
    /// Classify a character, returning `None` for ordinary text.
    ///
    /// # Examples
    ///
    /// ```
    /// use ircfmt_proto::format::{ControlChar, TagKind};
    ///
    /// assert_eq!(ControlChar::classify('\x02'), Some(ControlChar::Toggle(TagKind::Bold)));
    /// assert_eq!(ControlChar::classify('\x16'), Some(ControlChar::Toggle(TagKind::Italic)));
    /// assert_eq!(ControlChar::classify('a'), None);
    /// ```
    #[inline]
    pub const fn classify(ch: char) -> Option<Self> {
        match ch {
            BOLD => Some(Self::Toggle(TagKind::Bold)),
            MONOSPACE => Some(Self::Toggle(TagKind::Monospace)),
            INVERSE => Some(Self::Toggle(TagKind::Inverse)),
            ITALIC | ITALIC_LEGACY => Some(Self::Toggle(TagKind::Italic)),
            UNDERLINE => Some(Self::Toggle(TagKind::Underline)),
            COLOR => Some(Self::Color),
            HEX_COLOR => Some(Self::HexColor),
            RESET => Some(Self::Reset),
            _ => None,
        }
    }
}

/// Returns true if the character has a formatting meaning.
#[inline]
pub const fn is_format_code(ch: char) -> bool {
    ControlChar::classify(ch).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_codes() {
        for ch in ['\x02', '\x03', '\x04', '\x0F', '\x11', '\x12', '\x16', '\x1D', '\x1F'] {
            assert!(is_format_code(ch), "{ch:?} should be a format code");
        }

        assert!(!is_format_code('a'));
        assert!(!is_format_code('\x01')); // CTCP delimiter
        assert!(!is_format_code('\x1E')); // strikethrough is not rendered
        assert!(!is_format_code('\n'));
    }

    #[test]
    fn test_both_italic_variants() {
        assert_eq!(
            ControlChar::classify(ITALIC),
            ControlChar::classify(ITALIC_LEGACY)
        );
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(TagKind::Bold.as_str(), "BOLD");
        assert_eq!(TagKind::Inverse.to_string(), "INVERSE");
    }

    #[test]
    fn test_index_follows_declaration_order() {
        for (i, kind) in TagKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
