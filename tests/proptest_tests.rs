//! Property-based tests for the calculators and the NPWP formatter.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(all(feature = "pph", feature = "ppn", feature = "npwp"))]

use chrono::NaiveDate;
use pajak::core::*;
use pajak::npwp::*;
use pajak::pph::*;
use pajak::ppn::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Whole-rupiah amounts from 1 to 10^13, plus up to two decimals.
fn amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000_000_000, 0u32..=2).prop_map(|(n, scale)| Decimal::new(n, scale))
}

fn pph22_category() -> impl Strategy<Value = Pph22Category> {
    prop::sample::select(Pph22Category::ALL.to_vec())
}

fn pph23_category() -> impl Strategy<Value = Pph23Category> {
    prop::sample::select(Pph23Category::ALL.to_vec())
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn is_dotted_npwp(s: &str) -> bool {
    let bytes = s.as_bytes();
    let shape = "dd.ddd.ddd.d-ddd.ddd".as_bytes();
    bytes.len() == shape.len()
        && bytes.iter().zip(shape).all(|(&b, &p)| match p {
            b'd' => b.is_ascii_digit(),
            sep => b == sep,
        })
}

proptest! {
    #[test]
    fn pph_final_tax_is_exact(gross in amount()) {
        let cfg = PphFinalConfig::default();
        let r = calculate_pph_final(&PphFinalInput::new(gross), &cfg, today()).unwrap();
        prop_assert_eq!(r.tax_amount, gross * dec!(0.003));
        prop_assert_eq!(r.net_income + r.tax_amount, gross);
        prop_assert_eq!(r.eligible, gross <= dec!(4_800_000_000));
    }

    #[test]
    fn pph21_boundary_has_no_jump(
        idx in 0usize..4,
        offset in 0i64..1_000_000,
    ) {
        let cfg = Pph21Config::default();
        let bound = cfg.brackets[idx].upper_bound.unwrap();
        let rate = cfg.brackets[idx].rate;
        let next = cfg.brackets[idx + 1].rate;
        let below = bound - Decimal::from(offset);
        let above = bound + Decimal::from(offset);
        let at = progressive_tax(bound, &cfg.brackets);
        prop_assert_eq!(at - progressive_tax(below, &cfg.brackets), rate * Decimal::from(offset));
        prop_assert_eq!(progressive_tax(above, &cfg.brackets) - at, next * Decimal::from(offset));
    }

    #[test]
    fn pph21_tax_is_monotonic(a in amount(), b in amount()) {
        let cfg = Pph21Config::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(progressive_tax(lo, &cfg.brackets) <= progressive_tax(hi, &cfg.brackets));
    }

    #[test]
    fn pph22_missing_tax_id_doubles(gross in amount(), category in pph22_category()) {
        let rates = Pph22Rates::default();
        let with = calculate_pph22(&Pph22Input::new(gross, category), &rates).unwrap();
        let without =
            calculate_pph22(&Pph22Input::new(gross, category).has_tax_id(false), &rates).unwrap();
        prop_assert_eq!(without.tax_amount, dec!(2) * with.tax_amount);
    }

    #[test]
    fn pph23_missing_tax_id_doubles(gross in amount(), category in pph23_category()) {
        let rates = Pph23Rates::default();
        let with = calculate_pph23(&Pph23Input::new(gross, category), &rates).unwrap();
        let without =
            calculate_pph23(&Pph23Input::new(gross, category).has_tax_id(false), &rates).unwrap();
        prop_assert_eq!(without.tax_amount, dec!(2) * with.tax_amount);
    }

    #[test]
    fn pph24_credit_never_exceeds_either_cap(
        income in amount(),
        paid_pct in 0u32..=100,
        country in prop::sample::select(vec!["SG", "AU", "US", "uk", "ZZ", ""]),
    ) {
        let paid = income * Decimal::new(i64::from(paid_pct), 2);
        let input = Pph24Input::new(income, ForeignTax::Paid(paid), country);
        let r = calculate_pph24(&input, &Pph24Config::default()).unwrap();
        prop_assert!(r.creditable_tax <= r.domestic_tax);
        prop_assert!(r.creditable_tax <= r.foreign_tax_paid);
        prop_assert_eq!(r.creditable_tax, r.domestic_tax.min(r.foreign_tax_paid));
        prop_assert_eq!(r.creditable_tax + r.non_creditable_tax, r.foreign_tax_paid);
    }

    #[test]
    fn pph25_outputs_never_negative(
        prev in 0i64..1_000_000_000_000,
        losses in 0i64..1_000_000_000_000,
        paid in 0i64..1_000_000_000_000,
    ) {
        let input = Pph25Input::new(Decimal::from(prev))
            .fiscal_losses(Decimal::from(losses))
            .pph_paid(Decimal::from(paid));
        let r = calculate_pph25(&input, &Pph25Config::default()).unwrap();
        prop_assert!(r.adjusted_base >= Decimal::ZERO);
        prop_assert!(r.remaining_tax >= Decimal::ZERO);
        prop_assert!(r.monthly_installment >= Decimal::ZERO);
    }

    #[test]
    fn ppn_inclusive_recovers_exclusive_base(base in amount(), rate_pct in 1u32..=20) {
        let rate = Decimal::new(i64::from(rate_pct), 2);
        let cfg = PpnConfig::default();
        let exclusive = calculate_ppn(
            &PpnInput::new(base).registered(true).rate(rate),
            &cfg,
        )
        .unwrap();
        let inclusive = calculate_ppn(
            &PpnInput::new(exclusive.total)
                .registered(true)
                .rate(rate)
                .mode(PriceMode::Inclusive),
            &cfg,
        )
        .unwrap();
        prop_assert!((inclusive.tax_base - base).abs() < dec!(0.000001));
    }

    #[test]
    fn npwp_any_fifteen_digits_valid(digits in "[0-9]{15}") {
        let r = validate_npwp(&digits);
        prop_assert!(r.valid);
        prop_assert!(is_dotted_npwp(r.formatted.as_deref().unwrap()));
    }

    #[test]
    fn npwp_wrong_length_rejected(digits in "[0-9]{1,30}") {
        prop_assume!(digits.len() != 15);
        let r = validate_npwp(&digits);
        prop_assert!(!r.valid);
        let expected = format!("NPWP must be exactly 15 digits, got {}", digits.len());
        prop_assert_eq!(r.errors, vec![expected]);
    }

    #[test]
    fn npwp_format_is_idempotent(input in "[0-9.\\- ]{0,40}") {
        let once = format_npwp(&input);
        prop_assert_eq!(format_npwp(&once), once.clone());
    }

    #[test]
    fn npwp_validate_never_panics(input in "\\PC{0,64}") {
        let _ = validate_npwp(&input);
        let _ = format_npwp(&input);
    }
}
