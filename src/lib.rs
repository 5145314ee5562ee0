//! # ircfmt
//!
//! Renders IRC message text carrying mIRC formatting codes as HTML, and turns
//! URLs and `#channel` mentions into links.
//!
//! The control-code grammar lives in [`ircfmt_proto`]; this crate adds the
//! link passes, configuration and the [`Formatter`] that ties them together.
//!
//! ```rust
//! use ircfmt::Formatter;
//!
//! let mut formatter = Formatter::new();
//! formatter.initialise();
//!
//! let html = formatter.exec(Some("\x034red\x03 see http://a.com"), "libera");
//! assert_eq!(
//!     html,
//!     "<wbr><span class=\"red\">red</span> see \
//!      <a href=\"http://a.com\" target=\"_blank\">http://a.com</a>"
//! );
//! ```

pub mod config;
pub mod formatter;
pub mod links;
pub mod network;
pub mod telemetry;

pub use config::{Config, ConfigError};
pub use formatter::Formatter;
pub use links::{LinkOptions, parse_links};
pub use network::{ChannelEncoder, Network, UriComponent};

pub use ircfmt_proto::{Palette, TableError, TagKind, TagStyle, TagStyles, TokenTable};
