//! Fuzz target: status error summary parser.
//!
//! Feeds arbitrary text through `parse`. Parsing must never panic, and any
//! error it accepts must re-render to a summary it accepts again with the
//! same identity.
#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(se) = statusx_core::parse(text) {
        let again = statusx_core::parse(&se.summary())
            .unwrap_or_else(|e| panic!("re-rendered summary rejected: {e}"));
        assert_eq!(again.key, se.key);
        assert_eq!(again.code, se.code);
        assert_eq!(again.can_be_talk, se.can_be_talk);
    }
});
