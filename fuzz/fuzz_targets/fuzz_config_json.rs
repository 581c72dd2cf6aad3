#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Any config that loads must survive a serialize → load round trip.
        if let Ok(config) = pajak::core::TaxConfig::from_json_str(s) {
            let json = serde_json::to_string(&config).unwrap();
            let reloaded = pajak::core::TaxConfig::from_json_str(&json).unwrap();
            assert_eq!(reloaded, config);
        }
    }
});
