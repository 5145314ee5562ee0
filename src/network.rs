//! Collaborators supplied by the host application.
//!
//! Channel links point into the host's own routing, so the formatter needs
//! to know the network's base URL segment and how channel names are encoded
//! inside a URL.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// The network a message belongs to.
pub trait Network {
    /// Base URL segment used in channel links, e.g. `irc.libera.chat`.
    fn url(&self) -> &str;
}

impl Network for str {
    fn url(&self) -> &str {
        self
    }
}

impl Network for String {
    fn url(&self) -> &str {
        self
    }
}

impl<T: Network + ?Sized> Network for &T {
    fn url(&self) -> &str {
        (**self).url()
    }
}

/// Turns a channel name into a URL path segment.
pub trait ChannelEncoder {
    /// Encode `channel`, including its leading `#`.
    fn encode_channel<'a>(&self, channel: &'a str) -> Cow<'a, str>;
}

// Everything except the characters encodeURIComponent leaves alone:
// A-Z a-z 0-9 - _ . ! ~ * ' ( )
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes like a browser's `encodeURIComponent`.
///
/// # Examples
///
/// ```
/// use ircfmt::network::{ChannelEncoder, UriComponent};
///
/// assert_eq!(UriComponent.encode_channel("#rust"), "%23rust");
/// assert_eq!(UriComponent.encode_channel("#café"), "%23caf%C3%A9");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UriComponent;

impl ChannelEncoder for UriComponent {
    fn encode_channel<'a>(&self, channel: &'a str) -> Cow<'a, str> {
        utf8_percent_encode(channel, URI_COMPONENT).into()
    }
}
