//! Tokenizer for formatted message text.
//!
//! Text is scanned one character at a time. Toggle characters become open
//! or close codes, color introducers start a [`ColorSpec`] that the color
//! sub-parser fills in, and everything else accumulates into literals.
//!
//! Every code that is opened is closed again before the token list is
//! returned: a reset (`\x0F`) or the end of the input closes whatever is
//! still open, most recent first.
//!
//! # Example
//!
//! ```
//! use ircfmt_proto::{tokenize, Token, TokenId, TokenTable};
//!
//! let table = TokenTable::new();
//! let tokens = tokenize(&table, "\x02hi\x02");
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Code(TokenId::new(1)),
//!         Token::Literal("hi".into()),
//!         Token::Code(TokenId::new(2)),
//!     ]
//! );
//! ```

mod color;
mod stack;

pub use self::stack::Open;

use self::stack::OpenStack;
use crate::colors::ColorSpec;
use crate::format::{ControlChar, TagKind};
use crate::token::{Token, TokenId, TokenTable};

/// Tokenize `text` against `table`.
pub fn tokenize(table: &TokenTable, text: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(table);
    for ch in text.chars() {
        tokenizer.feed(ch);
    }
    tokenizer.finish()
}

/// Incremental tokenizer state.
///
/// Holds the token list built so far and the formats currently open. The
/// table is only read.
#[derive(Debug)]
pub struct Tokenizer<'t> {
    table: &'t TokenTable,
    tokens: Vec<Token>,
    stack: OpenStack,
}

impl<'t> Tokenizer<'t> {
    /// Start an empty token list.
    pub fn new(table: &'t TokenTable) -> Self {
        Self {
            table,
            tokens: Vec::new(),
            stack: OpenStack::default(),
        }
    }

    /// Consume one character.
    pub fn feed(&mut self, ch: char) {
        match ControlChar::classify(ch) {
            Some(ControlChar::Reset) => self.close_all(),
            Some(ControlChar::Color) => {
                self.drop_empty_color();
                self.tokens.push(Token::Color(ColorSpec::palette()));
            }
            Some(ControlChar::HexColor) => {
                self.drop_empty_color();
                self.tokens.push(Token::Color(ColorSpec::hex()));
            }
            Some(ControlChar::Toggle(kind)) => {
                self.drop_empty_color();
                self.toggle(kind);
            }
            None => match self.tokens.last_mut() {
                Some(Token::Literal(text)) => text.push(ch),
                Some(Token::Color(_)) => self.feed_color(ch),
                Some(Token::Code(_)) | None => self.tokens.push(Token::Literal(ch.into())),
            },
        }
    }

    /// Close everything still open and return the tokens.
    pub fn finish(mut self) -> Vec<Token> {
        self.close_all();
        self.tokens
    }

    fn toggle(&mut self, kind: TagKind) {
        if self.stack.remove_last(Open::Tag(kind)) {
            self.push_code(self.table.close(kind));
        } else {
            self.stack.push(Open::Tag(kind));
            self.push_code(self.table.open(kind));
        }
    }

    /// Close every open entry, most recent first.
    ///
    /// A dangling empty descriptor is discarded without closing colors
    /// early, so the closing order matches the opening order exactly.
    fn close_all(&mut self) {
        self.take_empty_color();
        while let Some(open) = self.stack.pop() {
            let id = self.close_code(open);
            self.push_code(id);
        }
    }

    /// Remove a trailing descriptor that never received a value. A bare
    /// introducer ends any open color, so those are closed as well.
    fn drop_empty_color(&mut self) {
        if self.take_empty_color() {
            self.close_colors();
        }
    }

    fn take_empty_color(&mut self) -> bool {
        let empty = matches!(self.tokens.last(), Some(Token::Color(spec)) if spec.is_empty());
        if empty {
            self.tokens.pop();
        }
        empty
    }

    fn close_colors(&mut self) {
        for _ in 0..self.stack.remove_colors() {
            self.push_code(self.table.close_color());
        }
    }

    fn close_code(&self, open: Open) -> TokenId {
        match open {
            Open::Tag(kind) => self.table.close(kind),
            Open::Color => self.table.close_color(),
        }
    }

    #[inline]
    fn push_code(&mut self, id: TokenId) {
        self.tokens.push(Token::Code(id));
    }
}
