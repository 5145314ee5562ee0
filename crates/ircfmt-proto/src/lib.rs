//! # ircfmt-proto
//!
//! Tokenizer and HTML renderer for mIRC formatting control codes.
//!
//! ## Features
//!
//! - Bold, monospace, inverse, italic and underline toggles
//! - Palette colors (`\x03fg,bg`) and hex colors (`\x04RRGGBB,RRGGBB`)
//! - Reset (`\x0F`) closing everything that is open
//! - Balanced output: every open code is closed again
//!
//! The pipeline is [`tokenize`] → [`cleanup`] → [`render`]:
//!
//! ```rust
//! use ircfmt_proto::{cleanup, render, tokenize, TokenTable};
//!
//! let table = TokenTable::new();
//! let tokens = cleanup(tokenize(&table, "\x02hello\x02 \x034world"));
//! assert_eq!(
//!     render(&table, &tokens),
//!     "<wbr><b>hello</b> <wbr><span class=\"red\">world</span>"
//! );
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod cleanup;
pub mod colors;
pub mod error;
pub mod format;
pub mod html;
pub mod token;
pub mod tokenizer;

pub use self::cleanup::cleanup;
pub use self::colors::{Background, ColorSpec, Palette};
pub use self::error::TableError;
pub use self::format::{ControlChar, TagKind};
pub use self::html::{escape_html, render, render_color, render_token};
pub use self::token::{TagStyle, TagStyles, Token, TokenId, TokenTable};
pub use self::tokenizer::{Open, Tokenizer, tokenize};
