#![no_main]

use libfuzzer_sys::fuzz_target;
use pajak::pph::{
    ConstructionScale, ConstructionService, FinalIncomeCategory, Pph22Category, Pph23Category,
    PtkpStatus,
};
use pajak::ppn::PriceMode;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = s.parse::<Pph22Category>();
        let _ = s.parse::<Pph23Category>();
        let _ = s.parse::<PtkpStatus>();
        let _ = s.parse::<PriceMode>();
        let _ = s.parse::<ConstructionScale>();
        let _ = s.parse::<ConstructionService>();

        // Anything that parses must print back to an equal category.
        if let Ok(category) = s.parse::<FinalIncomeCategory>() {
            let reparsed = category.to_string().parse::<FinalIncomeCategory>();
            assert_eq!(reparsed.ok(), Some(category));
        }

        let mut parts = s.splitn(3, '|');
        let income_type = parts.next().unwrap_or_default();
        let _ = FinalIncomeCategory::from_selectors(income_type, parts.next(), parts.next());
    }
});
