//! The formatter entry point.
//!
//! A [`Formatter`] owns a token table and link settings and turns raw IRC
//! message text into escaped, nested HTML.

use std::borrow::Cow;
use std::sync::Arc;

use ircfmt_proto::{TokenTable, cleanup, render, tokenize};
use tracing::{debug, trace, warn};

use crate::config::{Config, ConfigError, validate};
use crate::links::{LinkOptions, parse_links};
use crate::network::{ChannelEncoder, Network, UriComponent};
use crate::telemetry::spans;

/// Converts mIRC-formatted message text into HTML.
///
/// A formatter must be initialised before it renders anything; until then
/// [`exec`](Self::exec) hands its input back unchanged.
///
/// # Examples
///
/// ```
/// use ircfmt::Formatter;
///
/// let mut formatter = Formatter::new();
/// formatter.initialise();
///
/// assert_eq!(
///     formatter.exec(Some("\x02hi\x02 #rust"), "libera"),
///     "<wbr><b>hi</b> <a href=\"/#!/libera/%23rust\" rel=\"channel-link\">#rust</a>"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Formatter<E = UriComponent> {
    table: Option<Arc<TokenTable>>,
    links: LinkOptions,
    encoder: E,
}

impl Formatter {
    /// Create an uninitialised formatter with default link settings.
    pub fn new() -> Self {
        Self::with_encoder(UriComponent)
    }

    /// Build an initialised formatter from a validated config.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let _span = spans::configure(config.palette.len()).entered();

        if let Err(errors) = validate(config) {
            warn!(count = errors.len(), "Rejected formatter config");
            return Err(ConfigError::Invalid(errors));
        }
        let table = TokenTable::with_styles(&config.tag_styles(), config.palette())?;
        debug!("Formatter configured");

        Ok(Self::new()
            .with_table(Arc::new(table))
            .with_links(config.link_options()))
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ChannelEncoder> Formatter<E> {
    /// Create an uninitialised formatter using `encoder` for channel links.
    pub fn with_encoder(encoder: E) -> Self {
        Self {
            table: None,
            links: LinkOptions::default(),
            encoder,
        }
    }

    /// Build the token table. Calling this again is a no-op.
    pub fn initialise(&mut self) {
        if self.table.is_none() {
            self.table = Some(TokenTable::shared());
        }
    }

    /// Whether a token table is in place.
    pub fn is_initialised(&self) -> bool {
        self.table.is_some()
    }

    /// Use an already built token table. The formatter counts as initialised.
    pub fn with_table(mut self, table: Arc<TokenTable>) -> Self {
        self.table = Some(table);
        self
    }

    /// Replace the link settings.
    pub fn with_links(mut self, links: LinkOptions) -> Self {
        self.links = links;
        self
    }

    /// Current link settings.
    pub fn links(&self) -> &LinkOptions {
        &self.links
    }

    /// Render `text` from `network` as HTML.
    ///
    /// `None` renders as the empty string. An uninitialised formatter
    /// returns the text as given.
    pub fn exec<'a, N>(&self, text: Option<&'a str>, network: &N) -> Cow<'a, str>
    where
        N: Network + ?Sized,
    {
        let Some(text) = text else {
            return Cow::Borrowed("");
        };
        let Some(table) = self.table.as_deref() else {
            debug!("Formatter used before initialisation, returning input");
            return Cow::Borrowed(text);
        };
        if text.is_empty() {
            return Cow::Borrowed("");
        }

        let _span = spans::render(text.len()).entered();

        let tokens = tokenize(table, text);
        let raw = tokens.len();
        let tokens = cleanup(tokens);
        trace!(raw, cleaned = tokens.len(), "Tokenized message");

        let html = render(table, &tokens);
        Cow::Owned(parse_links(&html, network, &self.encoder, &self.links))
    }
}
