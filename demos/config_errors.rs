use pajak::core::*;
use pajak::pph::*;
use rust_decimal_macros::dec;

fn main() {
    // ── Loading a partial rate table ─────────────────────────────────
    println!("=== Rate Overrides ===\n");

    let json = r#"{ "ppn": { "rate": "0.12" }, "pph23": { "no_npwp_multiplier": "3" } }"#;
    match TaxConfig::from_json_str(json) {
        Ok(config) => {
            println!("  PPN rate: {}", config.ppn.rate);
            let multiplier = config.pph23.no_npwp_multiplier;
            println!("  PPh 23 multiplier: {multiplier}");
        }
        Err(e) => println!("  rejected: {e}"),
    }

    // ── Tables that cannot be used ───────────────────────────────────
    println!("\n=== Rejected Configurations ===\n");

    let rejected = [
        r#"{ "pph_final": { "rate": "3" } }"#,
        r#"{ "pph23": { "no_npwp_multiplier": "10" } }"#,
        r#"{ "pph22": { "no_npwp_multiplier": "10000000000000" } }"#,
        r#"{ "pph21": { "brackets": [{ "upper_bound": "60000000", "rate": "0.05" }] } }"#,
        r#"{ "ppn": { "rate": 0.11 "#,
    ];
    for json in &rejected {
        match TaxConfig::from_json_str(json) {
            Ok(_) => println!("  {json} => accepted"),
            Err(e) => println!("  {json}\n    => {e}"),
        }
    }

    // ── Calculator input errors ──────────────────────────────────────
    println!("\n=== Input Errors ===\n");

    let config = TaxConfig::default();
    let errors = [
        calculate_pph23(
            &Pph23Input::new(dec!(-1), Pph23Category::Rental),
            &config.pph23,
        )
        .err(),
        "construction/implementation"
            .parse::<FinalIncomeCategory>()
            .err(),
        "K/7".parse::<PtkpStatus>().err(),
    ];
    for e in errors.into_iter().flatten() {
        println!("  {e}");
    }
}
