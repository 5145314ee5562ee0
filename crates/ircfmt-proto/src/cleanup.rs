//! Post-tokenize cleanup.

use crate::token::Token;

/// Drop color descriptors that trail the last piece of text.
///
/// A message ending in `\x03` or `\x034` would otherwise open a span with
/// nothing in it. Codes in the trailing run are kept, and nothing before
/// the last literal is touched.
pub fn cleanup(mut tokens: Vec<Token>) -> Vec<Token> {
    let start = tokens
        .iter()
        .rposition(Token::is_literal)
        .map_or(0, |last| last + 1);

    let mut tail = tokens.split_off(start);
    tail.retain(|token| !token.is_color());
    tokens.append(&mut tail);
    tokens
}
