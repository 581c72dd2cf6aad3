#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let report = pajak::npwp::validate_npwp(s);
        // A valid report must parse into the newtype and display identically.
        if report.valid {
            let npwp = pajak::npwp::Npwp::parse(s).unwrap();
            assert_eq!(Some(npwp.to_string()), report.formatted);
        }
    }
});
