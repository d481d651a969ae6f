#![no_main]

use fst_helpers::{LetterCase, sanitize_string};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let clean = sanitize_string(s, LetterCase::Lower);
        assert!(clean.is_ascii());
        assert!(!clean.contains(char::is_whitespace));
        assert!(!clean.contains('<'));
    }
});
