//! Fuzz target for the formatting tokenizer
//!
//! Feeds arbitrary text through tokenize, cleanup and render, checking that
//! nothing panics and that every open code is closed again.

#![no_main]

use ircfmt_proto::{cleanup, render, tokenize, TagKind, Token, TokenTable};
use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        // Skip very long inputs to focus on state machine transitions
        if input.len() > 2048 {
            return;
        }

        let table = TokenTable::new();
        let tokens = tokenize(&table, input);

        for kind in TagKind::ALL {
            let opens = tokens.iter().filter(|t| t.code() == Some(table.open(kind))).count();
            let closes = tokens.iter().filter(|t| t.code() == Some(table.close(kind))).count();
            assert_eq!(opens, closes, "{kind} unbalanced");
        }

        let _ = render(&table, &cleanup(tokens));
    }
});
