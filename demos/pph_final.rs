use chrono::{Local, NaiveDate};
use pajak::core::*;
use pajak::pph::*;
use rust_decimal_macros::dec;

fn main() {
    let config = TaxConfig::default();
    let today = Local::now().date_naive();

    // ── PPh Final UMKM at 0.3% ───────────────────────────────────────
    println!("=== PPh Final UMKM (as of {today}) ===\n");

    let scenarios = [
        ("Small workshop", dec!(350_000_000), None),
        ("Registered 2023", dec!(1_200_000_000), Some((2023, 3, 1))),
        ("Registered 2019", dec!(900_000_000), Some((2019, 7, 15))),
        ("Over the ceiling", dec!(5_100_000_000), Some((2024, 1, 1))),
    ];

    for (label, gross, start) in scenarios {
        let mut input = PphFinalInput::new(gross);
        if let Some((y, m, d)) = start {
            input = input.start_date(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        }
        let result = calculate_pph_final(&input, &config.pph_final, today).unwrap();

        println!("  {label}: gross={gross}");
        println!(
            "    tax={} eligible={} final rate applies={}",
            round_rupiah(result.tax_amount),
            result.eligible,
            result.final_rate_applicable()
        );
        if let Some(window) = &result.window {
            println!(
                "    window ends {} ({} days left, expired={})",
                window.expiry_date, window.remaining_days, window.expired
            );
        }
    }

    // ── Switching to PPh 25 once the window has closed ───────────────
    println!("\n=== PPh 25 installments after the window ===\n");

    let (income, expenses) = (dec!(2_400_000_000), dec!(1_650_000_000));
    let input = Pph25Input::from_corporate_profit(income, expenses, &config.pph25).unwrap();
    let input = input.pph_paid(dec!(30_000_000));
    let result = calculate_pph25(&input, &config.pph25).unwrap();
    println!("  estimated annual tax: {}", result.adjusted_base);
    println!("  remaining after payments: {}", result.remaining_tax);
    println!(
        "  monthly installment: {}",
        round_rupiah(result.monthly_installment)
    );
}
