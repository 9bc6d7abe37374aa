#![no_main]

use graphquery_parser::token_source::StrGraphQLTokenSource;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let mut prev_end = 0;
    for token in StrGraphQLTokenSource::new(s) {
        let Ok(token) = token else {
            break;
        };
        let start = token.span.start_inclusive.byte_offset();
        let end = token.span.end_exclusive.byte_offset();
        assert_eq!(start, prev_end, "tokens must tile the source");
        assert!(end <= s.len());
        prev_end = end;
    }
});
