//! Fuzz target for date parsing and range selection.
//!
//! Arbitrary text must either parse or be rejected; a parsed range always
//! satisfies `start <= end`.

#![no_main]

use bikeshare::DateRange;
use bikeshare::input::parse_date;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = parse_date(text);

    let (start, end) = text.split_once('|').unwrap_or((text, ""));
    let end = (!end.is_empty()).then_some(end);
    if let Ok(range) = DateRange::parse(start, end) {
        assert!(range.start() <= range.end());
    }
});
