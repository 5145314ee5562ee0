//! Linkification of rendered HTML.
//!
//! Runs after the formatting codes have been rendered, in two passes:
//! - [`url`]: bare and bracketed URLs become `target="_blank"` anchors
//! - [`channel`]: `#channel` mentions become links into the channel view

mod channel;
mod url;

use crate::network::{ChannelEncoder, Network};

/// Which links are created and where they point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkOptions {
    /// Wrap URLs in anchors.
    pub urls: bool,
    /// Wrap `#channel` mentions in anchors.
    pub channels: bool,
    /// `target` attribute of URL anchors.
    pub target: String,
    /// Path prefix of channel links, followed by `{network}/{channel}`.
    pub channel_route: String,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            urls: true,
            channels: true,
            target: "_blank".to_owned(),
            channel_route: "/#!/".to_owned(),
        }
    }
}

/// Wrap URLs and channel mentions in `html` with anchors.
///
/// `html` is expected to be the output of the renderer: text is already
/// escaped, so an `&` inside a URL appears as `&amp;`.
///
/// # Examples
///
/// ```
/// use ircfmt::links::{parse_links, LinkOptions};
/// use ircfmt::network::UriComponent;
///
/// let html = parse_links("see (http://a.com/x) now", "net", &UriComponent, &LinkOptions::default());
/// assert_eq!(
///     html,
///     "see (<a href=\"http://a.com/x\" target=\"_blank\">http://a.com/x</a>) now"
/// );
/// ```
pub fn parse_links<N, E>(html: &str, network: &N, encoder: &E, options: &LinkOptions) -> String
where
    N: Network + ?Sized,
    E: ChannelEncoder + ?Sized,
{
    let html = if options.urls {
        link_urls(html, &options.target)
    } else {
        html.to_owned()
    };

    if options.channels {
        channel::link_channels(&html, network, encoder, &options.channel_route)
    } else {
        html
    }
}

fn link_urls(html: &str, target: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut copied = 0;

    while let Some(m) = url::find_url(html, copied) {
        let link = &html[m.url.clone()];
        out.push_str(&html[copied..m.url.start]);
        out.push_str("<a href=\"");
        out.push_str(link);
        out.push_str("\" target=\"");
        out.push_str(target);
        out.push_str("\">");
        out.push_str(link);
        out.push_str("</a>");
        out.push_str(&html[m.url.end..m.end]);
        copied = m.end;
    }

    out.push_str(&html[copied..]);
    out
}
