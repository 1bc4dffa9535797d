//! Fuzz target for IRC line parsing
//!
//! Feeds arbitrary lines to both parsers and checks that they never panic
//! and always agree.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        if input.len() > 8191 {
            return;
        }

        let owned = ircwire::Message::parse(input);
        let borrowed = ircwire::MessageRef::parse(input);

        match (owned, borrowed) {
            (Ok(owned), Ok(borrowed)) => {
                assert_eq!(owned, borrowed.to_owned_message());
                let reparsed = ircwire::Message::parse(&owned.to_string())
                    .expect("canonical form must parse");
                assert_eq!(owned.params(), reparsed.params());
            }
            (Err(a), Err(b)) => assert_eq!(a, b),
            _ => panic!("parsers disagree on {:?}", input),
        }
    }
});
