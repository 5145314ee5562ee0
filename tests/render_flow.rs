//! End-to-end rendering through `Formatter::exec`.

mod common;

use common::{NETWORK, formatter, render};
use ircfmt::Formatter;

#[test]
fn test_plain_text_is_escaped() {
    assert_eq!(render("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    assert_eq!(render("<script>"), "&lt;script&gt;");
}

#[test]
fn test_absent_and_empty_input() {
    let formatter = formatter();
    assert_eq!(formatter.exec(None, NETWORK), "");
    assert_eq!(formatter.exec(Some(""), NETWORK), "");
}

#[test]
fn test_uninitialised_passthrough() {
    common::init_tracing();
    let formatter = Formatter::new();
    assert_eq!(formatter.exec(Some("\x02<b>"), NETWORK), "\x02<b>");
}

#[test]
fn test_toggles_nest() {
    assert_eq!(
        render("\x02bold \x1ditalic\x1d\x02"),
        "<wbr><b>bold <wbr><i>italic</i></b>"
    );
    assert_eq!(render("\x11mono"), "<wbr><tt>mono</tt>");
    assert_eq!(
        render("\x12rev"),
        "<wbr><span class=\"inverse\">rev</span>"
    );
    assert_eq!(render("\x16old\x16"), "<wbr><i>old</i>");
    assert_eq!(render("\x1fu"), "<wbr><u>u</u>");
}

#[test]
fn test_retoggle_closes_by_name() {
    assert_eq!(
        render("\x02a\x1db\x02c\x1d"),
        "<wbr><b>a<wbr><i>b</b>c</i>"
    );
}

#[test]
fn test_reset_matches_split_parse() {
    let whole = render("\x02A\x02\x0f\x02B\x02");
    let split = format!("{}{}", render("\x02A\x02"), render("\x02B\x02"));
    assert_eq!(whole, split);

    assert_eq!(
        render("\x02\x1fboth\x0f plain"),
        "<wbr><b><wbr><u>both</u></b> plain"
    );
}

#[test]
fn test_palette_colors() {
    assert_eq!(render("\x034red"), "<wbr><span class=\"red\">red</span>");
    assert_eq!(
        render("\x034,2x"),
        "<wbr><span class=\"red bg-navy\">x</span>"
    );
    assert_eq!(render("\x034,x"), "<wbr><span class=\"red\">x</span>");
    assert_eq!(render("\x0399x"), "<wbr><span>x</span>");
}

#[test]
fn test_hex_colors() {
    assert_eq!(
        render("\x04ff0000x"),
        "<wbr><span style=\"color:#ff0000\">x</span>"
    );
    assert_eq!(
        render("\x04ff0000,00ff00x"),
        "<wbr><span style=\"color:#ff0000;background-color:#00ff00\">x</span>"
    );
}

#[test]
fn test_trailing_introducer_is_invisible() {
    for text in ["hello", "\x02bold", "\x034red", "a\x1fb"] {
        assert_eq!(render(&format!("{text}\x03")), render(text));
        assert_eq!(render(&format!("{text}\x04")), render(text));
    }
}

#[test]
fn test_url_in_parentheses() {
    assert_eq!(
        render("see (http://a.com/x) now"),
        "see (<a href=\"http://a.com/x\" target=\"_blank\">http://a.com/x</a>) now"
    );
}

#[test]
fn test_url_with_query() {
    assert_eq!(
        render("http://a.com/?x=1&y=2"),
        "<a href=\"http://a.com/?x=1&amp;y=2\" target=\"_blank\">http://a.com/?x=1&amp;y=2</a>"
    );
}

#[test]
fn test_channel_mentions() {
    assert_eq!(
        render("#general talk"),
        "<a href=\"/#!/libera/%23general\" rel=\"channel-link\">#general</a> talk"
    );
    assert_eq!(
        render("hi #general"),
        "hi <a href=\"/#!/libera/%23general\" rel=\"channel-link\">#general</a>"
    );
}

#[test]
fn test_formatted_url() {
    assert_eq!(
        render("\x02http://a.com\x02"),
        "<wbr><b><a href=\"http://a.com\" target=\"_blank\">http://a.com</a></b>"
    );
}

#[test]
fn test_deterministic() {
    let formatter = formatter();
    let text = "\x02\x034,1mixed\x0f http://a.com #x";
    let first = formatter.exec(Some(text), NETWORK).into_owned();
    for _ in 0..5 {
        assert_eq!(formatter.exec(Some(text), NETWORK), first);
    }
}
