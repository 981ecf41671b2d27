#![no_main]

use libfuzzer_sys::fuzz_target;
use npv_header::{scanner, HeaderParser};

// Fuzz target: header text through the scanner and the parser.
//
// Catches bugs in:
// - Quote state tracking across escapes and unterminated literals
// - Trailing-comma removal next to multi-byte characters
// - Metadata that passes deserialization but violates its invariants
fuzz_target!(|data: &[u8]| {
    let text: String = data.iter().map(|&b| char::from(b)).collect();

    let _ = scanner::to_json(&text);
    if let Some(meta) = HeaderParser::parse(&text) {
        assert!(meta.is_valid());
        assert!(!meta.descr.is_empty());
    }
});
