#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Formatting is idempotent and never longer than the full pattern.
        let once = pajak::npwp::format_npwp(s);
        assert!(once.len() <= 20);
        assert_eq!(pajak::npwp::format_npwp(&once), once);
    }
});
