//! Channel mention detection.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::network::{ChannelEncoder, Network};

/// `#name` at the start of the text or after one or more spaces.
static CHANNEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^| +)(#\S+)").expect("channel pattern is valid"));

/// Wrap channel mentions in links to the channel view.
///
/// Any run of spaces in front of a mention collapses to a single space.
pub(crate) fn link_channels<N, E>(html: &str, network: &N, encoder: &E, route: &str) -> String
where
    N: Network + ?Sized,
    E: ChannelEncoder + ?Sized,
{
    CHANNEL
        .replace_all(html, |caps: &Captures<'_>| {
            let channel = &caps[2];
            let mut out = String::with_capacity(channel.len() * 2 + route.len() + 48);
            if !caps[1].is_empty() {
                out.push(' ');
            }
            // Writing into a String cannot fail
            let _ = write!(
                out,
                "<a href=\"{route}{}/{}\" rel=\"channel-link\">{channel}</a>",
                network.url(),
                encoder.encode_channel(channel),
            );
            out
        })
        .into_owned()
}
