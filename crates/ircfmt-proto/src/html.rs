//! Rendering tokens as HTML.
//!
//! Only `&`, `<` and `>` are escaped. The output is meant for element
//! content, not for attribute values.

use std::borrow::Cow;

use crate::colors::{ColorSpec, Palette};
use crate::token::{Token, TokenTable};

/// Escape `&`, `<` and `>`.
///
/// Returns `Cow::Borrowed` if nothing needed escaping.
///
/// # Examples
///
/// ```
/// use ircfmt_proto::html::escape_html;
///
/// assert_eq!(escape_html("a < b && c"), "a &lt; b &amp;&amp; c");
/// assert_eq!(escape_html("\"quoted\""), "\"quoted\"");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Opening span for a color descriptor.
///
/// Palette colors become classes (`red`, `bg-navy`), hex colors become
/// inline styles. Codes missing from the palette and a background that was
/// opened but never filled in contribute nothing.
pub fn render_color(spec: &ColorSpec, palette: &Palette) -> String {
    let mut classes: Vec<Cow<'_, str>> = Vec::new();
    let mut styles: Vec<String> = Vec::new();

    if let Some(fg) = &spec.fg {
        if spec.rgb {
            styles.push(format!("color:#{fg}"));
        } else if let Some(class) = palette.class(fg) {
            classes.push(Cow::Borrowed(class));
        }
    }

    if let Some(bg) = spec.bg.value() {
        if spec.rgb {
            styles.push(format!("background-color:#{bg}"));
        } else if let Some(class) = palette.class(bg) {
            classes.push(Cow::Owned(format!("bg-{class}")));
        }
    }

    let mut out = String::from("<wbr><span");
    if !classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&classes.join(" "));
        out.push('"');
    }
    if !styles.is_empty() {
        out.push_str(" style=\"");
        out.push_str(&styles.join(";"));
        out.push('"');
    }
    out.push('>');
    out
}

/// HTML for a single token.
pub fn render_token<'a>(table: &'a TokenTable, token: &'a Token) -> Cow<'a, str> {
    match token {
        Token::Literal(text) => escape_html(text),
        Token::Code(id) => Cow::Borrowed(table.fragment(*id).unwrap_or_default()),
        Token::Color(spec) => Cow::Owned(render_color(spec, table.palette())),
    }
}

/// Concatenate the HTML of every token.
pub fn render(table: &TokenTable, tokens: &[Token]) -> String {
    tokens.iter().fold(String::new(), |mut out, token| {
        out.push_str(&render_token(table, token));
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Background;
    use crate::token::TokenId;

    fn spec(fg: Option<&str>, bg: Background, rgb: bool) -> ColorSpec {
        ColorSpec {
            fg: fg.map(Into::into),
            bg,
            rgb,
        }
    }

    #[test]
    fn test_escape_order() {
        // `&` first, so existing entities are escaped once, not twice
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("<b>"), "&lt;b&gt;");
        assert!(matches!(escape_html("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_escape_text_only() {
        assert_eq!(escape_html("it's \"x\""), "it's \"x\"");
        assert_eq!(escape_html("é<ß>"), "é&lt;ß&gt;");
        assert!(matches!(escape_html("naïve"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_palette_classes() {
        let palette = Palette::default();
        assert_eq!(
            render_color(&spec(Some("4"), Background::None, false), &palette),
            "<wbr><span class=\"red\">"
        );
        assert_eq!(
            render_color(&spec(Some("4"), Background::Value("2".into()), false), &palette),
            "<wbr><span class=\"red bg-navy\">"
        );
        assert_eq!(
            render_color(&spec(None, Background::Value("02".into()), false), &palette),
            "<wbr><span class=\"bg-navy\">"
        );
    }

    #[test]
    fn test_rgb_styles() {
        let palette = Palette::default();
        assert_eq!(
            render_color(&spec(Some("ff0000"), Background::None, true), &palette),
            "<wbr><span style=\"color:#ff0000\">"
        );
        assert_eq!(
            render_color(
                &spec(Some("ff0000"), Background::Value("00ff00".into()), true),
                &palette
            ),
            "<wbr><span style=\"color:#ff0000;background-color:#00ff00\">"
        );
    }

    #[test]
    fn test_unknown_codes_unstyled() {
        let palette = Palette::default();
        assert_eq!(
            render_color(&spec(Some("99"), Background::Value("123".into()), false), &palette),
            "<wbr><span>"
        );
        assert_eq!(
            render_color(&spec(Some("4"), Background::Pending, true), &palette),
            "<wbr><span style=\"color:#4\">"
        );
    }

    #[test]
    fn test_render_tokens() {
        let table = TokenTable::new();
        let tokens = vec![
            Token::Code(TokenId::new(1)),
            Token::from("a<b"),
            Token::Code(TokenId::new(2)),
            Token::Code(TokenId::new(99)),
        ];
        assert_eq!(render(&table, &tokens), "<wbr><b>a&lt;b</b>");
    }
}
