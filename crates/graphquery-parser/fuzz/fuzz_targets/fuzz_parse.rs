#![no_main]

use graphquery_parser::parse_document;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Err(error) = parse_document(s) {
        let _ = error.format_detailed(Some(s));
    }
});
