#![cfg(feature = "pph")]

use chrono::NaiveDate;
use pajak::core::*;
use pajak::pph::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn config() -> TaxConfig {
    TaxConfig::default()
}

// ---------------------------------------------------------------------------
// PPh Final UMKM
// ---------------------------------------------------------------------------

#[test]
fn final_one_billion() {
    let r = calculate_pph_final(
        &PphFinalInput::new(dec!(1_000_000_000)),
        &config().pph_final,
        date(2026, 10, 18),
    )
    .unwrap();
    assert_eq!(r.tax_rate, dec!(0.003));
    assert_eq!(r.tax_amount, dec!(3_000_000));
    assert_eq!(r.net_income + r.tax_amount, r.gross_income);
}

#[test]
fn final_eligibility_boundary() {
    let cfg = config().pph_final;
    assert!(check_pph_final_eligibility(dec!(4_800_000_000), &cfg));
    assert!(!check_pph_final_eligibility(dec!(4_800_000_001), &cfg));
}

#[test]
fn final_window_expires_on_anniversary() {
    let cfg = config().pph_final;
    let input = PphFinalInput::new(dec!(100_000_000)).start_date(date(2022, 10, 18));

    let day_before = calculate_pph_final(&input, &cfg, date(2026, 10, 17)).unwrap();
    let w = day_before.window.unwrap();
    assert!(!w.expired);
    assert_eq!(w.remaining_days, 1);
    assert!(w.final_year);

    let on_expiry = calculate_pph_final(&input, &cfg, date(2026, 10, 18)).unwrap();
    let w = on_expiry.window.unwrap();
    assert!(w.expired);
    assert_eq!(w.remaining_days, 0);
}

#[test]
fn final_window_start_in_future() {
    let input = PphFinalInput::new(dec!(100_000_000)).start_date(date(2027, 1, 1));
    let r = calculate_pph_final(&input, &config().pph_final, date(2026, 10, 18)).unwrap();
    let w = r.window.unwrap();
    assert!(!w.expired);
    assert_eq!(w.years_elapsed, 0);
    assert_eq!(w.expiry_date, date(2031, 1, 1));
}

#[test]
fn final_custom_window_length() {
    let cfg = PphFinalConfig {
        window_years: 7,
        ..PphFinalConfig::default()
    };
    let input = PphFinalInput::new(dec!(100_000_000)).start_date(date(2020, 3, 1));
    let r = calculate_pph_final(&input, &cfg, date(2026, 10, 18)).unwrap();
    assert_eq!(r.window.unwrap().expiry_date, date(2027, 3, 1));
}

// ---------------------------------------------------------------------------
// PPh 21
// ---------------------------------------------------------------------------

#[test]
fn pph21_hundred_million_scenario() {
    let r = calculate_pph21(&Pph21Input::new(dec!(100_000_000)), &config().pph21).unwrap();
    assert_eq!(r.taxable_income, dec!(100_000_000));
    assert_eq!(r.tax_amount, dec!(9_000_000));
    assert_eq!(r.monthly_tax_amount, dec!(750_000));
    assert_eq!(r.brackets.len(), 2);
    assert_eq!(r.brackets[0].tax, dec!(3_000_000));
    assert_eq!(r.brackets[1].tax, dec!(6_000_000));
    assert_eq!(r.effective_rate, dec!(0.09));
}

#[test]
fn pph21_occupational_cost_and_ptkp() {
    let input = Pph21Input::new(dec!(120_000_000))
        .occupational_cost()
        .ptkp(PtkpStatus::single(0));
    let r = calculate_pph21(&input, &config().pph21).unwrap();
    assert_eq!(r.deductions.occupational, dec!(6_000_000));
    assert_eq!(r.deductions.personal, dec!(54_000_000));
    assert_eq!(r.taxable_income, dec!(60_000_000));
    assert_eq!(r.tax_amount, dec!(3_000_000));
}

#[test]
fn pph21_occupational_cost_capped() {
    let input = Pph21Input::new(dec!(500_000_000)).occupational_cost();
    let r = calculate_pph21(&input, &config().pph21).unwrap();
    assert_eq!(r.deductions.occupational, dec!(6_000_000));
}

#[test]
fn pph21_ptkp_married_three_dependents() {
    let status: PtkpStatus = "K/3".parse().unwrap();
    assert_eq!(status.amount(&config().pph21.ptkp), dec!(72_000_000));
    let capped = PtkpStatus::married(5);
    assert_eq!(capped.amount(&config().pph21.ptkp), dec!(72_000_000));
}

#[test]
fn pph21_deductions_above_income_give_zero_tax() {
    let input = Pph21Input::new(dec!(40_000_000)).ptkp(PtkpStatus::married(2));
    let r = calculate_pph21(&input, &config().pph21).unwrap();
    assert_eq!(r.taxable_income, Decimal::ZERO);
    assert_eq!(r.tax_amount, Decimal::ZERO);
    assert!(r.brackets.is_empty());
    assert_eq!(r.net_income, dec!(40_000_000));
}

#[test]
fn pph21_bracket_boundaries_are_continuous() {
    let cfg = config().pph21;
    for (i, bracket) in cfg.brackets.iter().enumerate() {
        let Some(bound) = bracket.upper_bound else {
            continue;
        };
        let next_rate = cfg.brackets[i + 1].rate;
        let at = progressive_tax(bound, &cfg.brackets);
        let below = progressive_tax(bound - Decimal::ONE, &cfg.brackets);
        let above = progressive_tax(bound + Decimal::ONE, &cfg.brackets);
        assert_eq!(at - below, bracket.rate, "step below {bound}");
        assert_eq!(above - at, next_rate, "step above {bound}");
    }
}

// ---------------------------------------------------------------------------
// PPh 22 / PPh 23
// ---------------------------------------------------------------------------

#[test]
fn pph22_categories_from_keys() {
    let rates = config().pph22;
    let cases = [
        ("import", dec!(0.025)),
        ("import_non_api", dec!(0.075)),
        ("government", dec!(0.015)),
        ("fuel", dec!(0.0025)),
        ("luxury", dec!(0.05)),
    ];
    for (key, rate) in cases {
        let category: Pph22Category = key.parse().unwrap();
        assert_eq!(category.rate(&rates), rate, "{key}");
    }
}

#[test]
fn pph23_rental_without_tax_id_scenario() {
    let input = Pph23Input::new(dec!(50_000_000), Pph23Category::Rental).has_tax_id(false);
    let r = calculate_pph23(&input, &config().pph23).unwrap();
    assert_eq!(r.base_rate, dec!(0.02));
    assert_eq!(r.effective_rate, dec!(0.04));
    assert_eq!(r.tax_amount, dec!(2_000_000));
    assert!(!r.has_tax_id);
}

#[test]
fn pph23_doubling_for_every_category() {
    let rates = config().pph23;
    for category in Pph23Category::ALL {
        let with = calculate_pph23(&Pph23Input::new(dec!(7_777_777), category), &rates).unwrap();
        let without = calculate_pph23(
            &Pph23Input::new(dec!(7_777_777), category).has_tax_id(false),
            &rates,
        )
        .unwrap();
        assert_eq!(without.tax_amount, with.tax_amount * dec!(2), "{category}");
    }
}

// ---------------------------------------------------------------------------
// PPh 4(2)
// ---------------------------------------------------------------------------

#[test]
fn pph4_2_land_sale() {
    let input = Pph4Ayat2Input::new(dec!(2_000_000_000), FinalIncomeCategory::LandBuildingSale);
    let r = calculate_pph4_ayat2(&input, &config().pph4_ayat2).unwrap();
    assert_eq!(r.tax_rate, dec!(0.025));
    assert_eq!(r.tax_amount, dec!(50_000_000));
    assert_eq!(r.net_amount, dec!(1_950_000_000));
}

#[test]
fn pph4_2_selector_chain_to_tax() {
    let category =
        FinalIncomeCategory::from_selectors("construction", Some("supervision"), None).unwrap();
    let r = calculate_pph4_ayat2(
        &Pph4Ayat2Input::new(dec!(300_000_000), category),
        &config().pph4_ayat2,
    )
    .unwrap();
    assert_eq!(r.tax_amount, dec!(12_000_000));
}

#[test]
fn pph4_2_deposit_and_lottery() {
    let rates = config().pph4_ayat2;
    let deposit = FinalIncomeCategory::DepositInterest;
    assert_eq!(deposit.rate(&rates), dec!(0.20));
    assert_eq!(FinalIncomeCategory::Lottery.rate(&rates), dec!(0.25));
    assert_eq!(FinalIncomeCategory::BondInterest.rate(&rates), dec!(0.15));
}

#[test]
fn pph4_2_categories_parse_from_display() {
    for category in FinalIncomeCategory::ALL {
        let key = category.to_string();
        let parsed: FinalIncomeCategory = key.parse().unwrap();
        assert_eq!(parsed, category, "{key}");
    }
    let scale: ConstructionScale = "large".parse().unwrap();
    let service: ConstructionService = "implementation/large".parse().unwrap();
    assert_eq!(service, ConstructionService::Implementation(scale));
}

#[test]
fn error_pph4_2_extra_segment() {
    let parsed: Result<FinalIncomeCategory, _> = "lottery/planning".parse();
    let err = parsed.unwrap_err();
    insta::assert_snapshot!(err, @"unknown PPh 4(2) category 'lottery/planning'");
}

// ---------------------------------------------------------------------------
// PPh 24
// ---------------------------------------------------------------------------

#[test]
fn pph24_japan_credit() {
    let input = Pph24Input::new(dec!(5_000), ForeignTax::Paid(dec!(750)), "jp")
        .exchange_rate(dec!(110));
    let r = calculate_pph24(&input, &config().pph24).unwrap();
    assert_eq!(r.income_idr, dec!(550_000));
    assert_eq!(r.foreign_tax_paid, dec!(82_500));
    assert_eq!(r.domestic_tax, dec!(121_000));
    assert_eq!(r.creditable_tax, dec!(82_500));
    assert_eq!(r.treaty_partner.as_deref(), Some("Jepang"));
    assert_eq!(r.treaty_rate, dec!(0.10));
}

#[test]
fn pph24_overridden_treaty_table() {
    let mut cfg = config().pph24;
    cfg.treaty_rates.insert("FR".into(), dec!(0.10));
    assert_eq!(treaty_rate("fr", &cfg), dec!(0.10));
    assert_eq!(treaty_rate("BR", &cfg), dec!(0.20));
}

#[test]
fn pph24_partner_list_names() {
    let gb = treaty_partners().iter().find(|p| p.code == "GB").unwrap();
    assert_eq!(gb.name, "Inggris");
    assert!(treaty_partners().iter().all(|p| p.code.len() == 2));
}

// ---------------------------------------------------------------------------
// PPh 25
// ---------------------------------------------------------------------------

#[test]
fn pph25_monthly_installment() {
    let input = Pph25Input::new(dec!(36_000_000)).pph_paid(dec!(6_000_000));
    let r = calculate_pph25(&input, &config().pph25).unwrap();
    assert_eq!(r.remaining_tax, dec!(30_000_000));
    assert_eq!(r.installments, 12);
    assert_eq!(r.monthly_installment, dec!(2_500_000));
}

#[test]
fn pph25_never_negative() {
    let input = Pph25Input::new(dec!(1_000_000))
        .fiscal_losses(dec!(2_000_000))
        .pph_paid(dec!(3_000_000));
    let r = calculate_pph25(&input, &config().pph25).unwrap();
    assert_eq!(r.adjusted_base, Decimal::ZERO);
    assert_eq!(r.remaining_tax, Decimal::ZERO);
    assert_eq!(r.monthly_installment, Decimal::ZERO);
}

// ---------------------------------------------------------------------------
// Error messages
// ---------------------------------------------------------------------------

#[test]
fn error_unknown_pph23_category() {
    let err = "gift".parse::<Pph23Category>().unwrap_err();
    insta::assert_snapshot!(err, @"unknown PPh 23 category 'gift'");
}

#[test]
fn error_missing_construction_scale() {
    let err = FinalIncomeCategory::from_selectors("construction", Some("implementation"), None)
        .unwrap_err();
    insta::assert_snapshot!(err, @"construction scale must be specified for this income type");
}

#[test]
fn error_negative_amount() {
    let err = calculate_pph22(
        &Pph22Input::new(dec!(-5), Pph22Category::Fuel),
        &config().pph22,
    )
    .unwrap_err();
    insta::assert_snapshot!(err, @"invalid input: amount: amount must be positive, got -5");
}
