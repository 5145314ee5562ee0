//! Color sub-parser.
//!
//! Runs while the last token is a [`ColorSpec`]. Accepted forms:
//!
//! - `<code><fg>` sets the foreground
//! - `<code><fg>,<bg>` sets foreground and background
//! - `<code><fg>,` sets the foreground; the comma is swallowed
//! - `<code>,<bg>` sets only the background
//! - `<code>` followed by text closes every open color
//!
//! Palette values are decimal and have no length limit here; codes outside
//! the palette simply render unstyled. Hex values stop at six digits.

use super::{Open, Tokenizer};
use crate::colors::{Background, HEX_DIGITS};
use crate::token::Token;

impl Tokenizer<'_> {
    pub(super) fn feed_color(&mut self, ch: char) {
        let Some(Token::Color(spec)) = self.tokens.last_mut() else {
            return;
        };

        if ch == ',' && spec.bg.is_none() {
            spec.bg = Background::Pending;
            return;
        }

        if ch.is_ascii_digit() || (spec.rgb && matches!(ch, 'a'..='f')) {
            if spec.bg.is_pending() {
                spec.bg = Background::Value(ch.into());
                return;
            }

            let section = if let Background::Value(bg) = &mut spec.bg {
                bg
            } else if let Some(fg) = &mut spec.fg {
                fg
            } else {
                spec.fg = Some(ch.into());
                return;
            };

            if !(spec.rgb && section.len() == HEX_DIGITS) {
                section.push(ch);
                return;
            }
            // Full hex value: this character is already text
            self.end_color(ch);
            return;
        }

        if spec.bg.is_pending() {
            spec.bg = Background::None;
        }

        if spec.is_empty() {
            self.drop_empty_color();
            self.tokens.push(Token::Literal(ch.into()));
        } else {
            self.end_color(ch);
        }
    }

    /// The descriptor is complete and `ch` starts the colored text.
    fn end_color(&mut self, ch: char) {
        self.stack.push(Open::Color);
        self.tokens.push(Token::Literal(ch.into()));
    }
}
