#![no_main]

use fst_helpers::{Capitalize, number_to_words_german};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let words = number_to_words_german(s, true, Capitalize::All);
        assert!(!words.is_empty());
    }
});
