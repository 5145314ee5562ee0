//! URL detection in rendered HTML.
//!
//! Recognises `http`, `https`, `ftp` and `ftps` URLs in five forms, tried in
//! this order at every position:
//!
//! 1. `(URL)`
//! 2. `[URL]`
//! 3. `{URL}`
//! 4. `<URL>`, with the angle brackets either literal or written as
//!    `&lt;`/`&#60;`/`&#x3c;` and `&gt;`/`&#62;`/`&#x3e;`
//! 5. a bare URL in running text
//!
//! In the bracketed forms the URL is the longest run of URL characters that
//! is still followed by the closing bracket. Bare URLs must end on a
//! character that is unlikely to be sentence punctuation, and an `&` is only
//! part of the URL when it does not start a `&gt;` or a quote/ampersand
//! entity that ends the URL.
//!
//! Matching is ASCII case-insensitive throughout.

use std::ops::Range;

/// A recognised URL together with the brackets or prefix around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct UrlMatch {
    /// Start of the whole match, including any opener or prefix.
    pub start: usize,
    /// The URL itself.
    pub url: Range<usize>,
    /// End of the whole match, including any closer.
    pub end: usize,
}

type Delimiter = fn(&[u8]) -> Option<usize>;

const BRACKETS: [(Delimiter, Delimiter); 4] = [
    (open_paren, close_paren),
    (open_square, close_square),
    (open_curly, close_curly),
    (open_angle, close_angle),
];

/// Find the first URL at or after `from`.
pub(crate) fn find_url(text: &str, from: usize) -> Option<UrlMatch> {
    let mut pos = from;
    while pos < text.len() {
        if let Some(m) = match_at(text, pos) {
            return Some(m);
        }
        pos += text[pos..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

fn match_at(text: &str, pos: usize) -> Option<UrlMatch> {
    let bytes = text.as_bytes();
    for (open, close) in BRACKETS {
        if let Some(len) = open(&bytes[pos..])
            && let Some(m) = bracketed(bytes, pos, pos + len, close)
        {
            return Some(m);
        }
    }
    bare(text, pos)
}

fn bracketed(bytes: &[u8], start: usize, url_start: usize, close: Delimiter) -> Option<UrlMatch> {
    let body = url_start + scheme_len(&bytes[url_start..])?;
    let run = bytes[body..].iter().take_while(|b| is_url_char(**b)).count();

    // Give characters back until the closer fits
    (body + 1..=body + run).rev().find_map(|url_end| {
        close(&bytes[url_end..]).map(|len| UrlMatch {
            start,
            url: url_start..url_end,
            end: url_end + len,
        })
    })
}

fn bare(text: &str, pos: usize) -> Option<UrlMatch> {
    let bytes = text.as_bytes();
    let first = text[pos..].chars().next()?;
    let after_first = pos + first.len_utf8();

    // Start of a line, then optional whitespace and an optional quote
    if is_line_start(text, pos) {
        let s = skip_quote(bytes, skip_space(text, pos));
        if let Some(url) = bare_url(text, s) {
            return Some(UrlMatch { start: pos, end: url.end, url });
        }
    }

    // One ordinary character, then optional whitespace and an optional quote
    if !matches!(first, '=' | '\'' | '"' | ']') && !is_space(first) {
        let s = skip_quote(bytes, skip_space(text, after_first));
        if let Some(url) = bare_url(text, s) {
            return Some(UrlMatch { start: pos, end: url.end, url });
        }
    }

    // Any character but `=` followed by at least one whitespace character
    if first != '=' && !is_space(first) {
        let s = skip_space(text, after_first);
        if s > after_first
            && let Some(url) = bare_url(text, s)
        {
            return Some(UrlMatch { start: pos, end: url.end, url });
        }
    }

    None
}

/// A bare URL starting exactly at `start`.
fn bare_url(text: &str, start: usize) -> Option<Range<usize>> {
    let bytes = text.as_bytes();
    if start > 0 && is_word_byte(bytes[start - 1]) {
        return None;
    }

    let body = start + scheme_len(&bytes[start..])?;
    if !bytes.get(body).is_some_and(|b| is_url_char_no_amp(*b)) {
        return None;
    }

    let mut end = body + 1;
    while let Some(&b) = bytes.get(end) {
        if is_url_char_no_amp(b) || (b == b'&' && !ends_url(&bytes[end..])) {
            end += 1;
        } else {
            break;
        }
    }

    // The last character must not look like punctuation; at least one URL
    // character has to stay between the scheme and it
    (body + 1..end)
        .rev()
        .find(|&i| is_last_char(bytes[i]))
        .map(|last| start..last + 1)
}

/// Whether the `&` at the start of `bytes` terminates a bare URL.
fn ends_url(bytes: &[u8]) -> bool {
    let rest = &bytes[1..];
    if gt_entity(rest).is_some() {
        return true;
    }

    let Some(len) = quote_entity(rest) else {
        return false;
    };

    let after = 1 + len;
    let boundary = |i: usize| bytes.get(i).is_none_or(|b| !is_url_char(*b));
    let punct = bytes
        .get(after)
        .is_some_and(|b| b".!&',:?;".contains(b));

    (punct && boundary(after + 1)) || boundary(after)
}

// =============================================================================
// Character classes
// =============================================================================

/// `[a-z0-9\-._~!$&'()*+,;=:/?#[\]@%]`, case-insensitive.
#[inline]
fn is_url_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-._~!$&'()*+,;=:/?#[]@%".contains(&b)
}

#[inline]
fn is_url_char_no_amp(b: u8) -> bool {
    b != b'&' && is_url_char(b)
}

/// Characters a bare URL may end on.
#[inline]
fn is_last_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-_~$()*+=/#[]@%".contains(&b)
}

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Whitespace as understood by browser regular expressions.
#[inline]
fn is_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn is_line_start(text: &str, pos: usize) -> bool {
    text[..pos]
        .chars()
        .next_back()
        .is_none_or(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
}

fn skip_space(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .find(|(_, c)| !is_space(*c))
        .map_or(text.len(), |(i, _)| pos + i)
}

fn skip_quote(bytes: &[u8], pos: usize) -> usize {
    match bytes.get(pos) {
        Some(b'\'' | b'"') => pos + 1,
        _ => pos,
    }
}

// =============================================================================
// Literal pieces
// =============================================================================

fn starts_with_ci(bytes: &[u8], prefix: &[u8]) -> bool {
    bytes.len() >= prefix.len() && bytes[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Length of `(?:ht|f)tps?://`.
fn scheme_len(bytes: &[u8]) -> Option<usize> {
    let mut len = if starts_with_ci(bytes, b"ht") {
        2
    } else if starts_with_ci(bytes, b"f") {
        1
    } else {
        return None;
    };

    if !starts_with_ci(&bytes[len..], b"tp") {
        return None;
    }
    len += 2;
    if starts_with_ci(&bytes[len..], b"s") {
        len += 1;
    }
    bytes[len..].starts_with(b"://").then_some(len + 3)
}

/// Length of `#0*NN;` or `#x0*NN;` where the two significant digits are
/// accepted by `digits`. `bytes` starts after the `&`.
fn numeric_ref(bytes: &[u8], hex: bool, digits: fn(&[u8]) -> bool) -> Option<usize> {
    let mut i = 1;
    if bytes.first() != Some(&b'#') {
        return None;
    }
    if hex {
        if !starts_with_ci(&bytes[i..], b"x") {
            return None;
        }
        i += 1;
    }
    i += bytes[i..].iter().take_while(|b| **b == b'0').count();
    let significant = bytes.get(i..i + 2)?;
    (digits(significant) && bytes.get(i + 2) == Some(&b';')).then_some(i + 3)
}

/// `gt;`, `#0*62;` or `#x0*3e;`
fn gt_entity(bytes: &[u8]) -> Option<usize> {
    if starts_with_ci(bytes, b"gt;") {
        return Some(3);
    }
    numeric_ref(bytes, false, |d| d == b"62")
        .or_else(|| numeric_ref(bytes, true, |d| d.eq_ignore_ascii_case(b"3e")))
}

/// `amp;`, `apos;`, `quot;`, `#0*3[49];` or `#x0*2[27];`
fn quote_entity(bytes: &[u8]) -> Option<usize> {
    for name in [b"amp;".as_slice(), b"apos;", b"quot;"] {
        if starts_with_ci(bytes, name) {
            return Some(name.len());
        }
    }
    numeric_ref(bytes, false, |d| matches!(d, b"34" | b"39"))
        .or_else(|| numeric_ref(bytes, true, |d| matches!(d, b"22" | b"27")))
}

fn open_paren(bytes: &[u8]) -> Option<usize> {
    bytes.starts_with(b"(").then_some(1)
}

fn close_paren(bytes: &[u8]) -> Option<usize> {
    bytes.starts_with(b")").then_some(1)
}

fn open_square(bytes: &[u8]) -> Option<usize> {
    bytes.starts_with(b"[").then_some(1)
}

fn close_square(bytes: &[u8]) -> Option<usize> {
    bytes.starts_with(b"]").then_some(1)
}

fn open_curly(bytes: &[u8]) -> Option<usize> {
    bytes.starts_with(b"{").then_some(1)
}

fn close_curly(bytes: &[u8]) -> Option<usize> {
    bytes.starts_with(b"}").then_some(1)
}

fn open_angle(bytes: &[u8]) -> Option<usize> {
    if bytes.starts_with(b"<") {
        return Some(1);
    }
    [b"&lt;".as_slice(), b"&#60;", b"&#x3c;"]
        .into_iter()
        .find(|entity| starts_with_ci(bytes, entity))
        .map(<[u8]>::len)
}

fn close_angle(bytes: &[u8]) -> Option<usize> {
    if bytes.starts_with(b">") {
        return Some(1);
    }
    [b"&gt;".as_slice(), b"&#62;", b"&#x3e;"]
        .into_iter()
        .find(|entity| starts_with_ci(bytes, entity))
        .map(<[u8]>::len)
}
