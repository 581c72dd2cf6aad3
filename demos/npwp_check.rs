use pajak::npwp::*;

fn main() {
    // ── Format validation ────────────────────────────────────────────
    println!("=== NPWP Validation ===\n");

    let inputs = [
        "01.234.567.8-901.000",
        "012345678901000",
        "01 234 567 8 901 000",
        "01.234.567.8-901",      // office code but no status
        "01.234.567.8-901.0000", // one digit too many
        "",
    ];

    for input in &inputs {
        let report = validate_npwp(input);
        if let Some(c) = &report.components {
            let formatted = report.formatted.as_deref().unwrap_or_default();
            println!("  {input:?} => valid {formatted}");
            println!(
                "    id={} kpp={} status={}",
                c.tax_id, c.office_code, c.status_code
            );
        } else {
            println!("  {input:?} => INVALID: {}", report.errors.join("; "));
        }
    }

    // ── Formatting as the user types ─────────────────────────────────
    println!("\n=== Partial Formatting ===\n");

    let typed = "012345678901000";
    for len in [2, 5, 8, 9, 12, 15] {
        println!("  {:<15} => {}", &typed[..len], format_npwp(&typed[..len]));
    }

    // ── Typed NPWP values ────────────────────────────────────────────
    println!("\n=== Npwp Type ===\n");

    match "012345678901000".parse::<Npwp>() {
        Ok(npwp) => println!("  parsed: {npwp} (digits {})", npwp.digits()),
        Err(e) => println!("  rejected: {e}"),
    }
    match Npwp::parse("12345") {
        Ok(npwp) => println!("  parsed: {npwp}"),
        Err(e) => println!("  rejected: {e}"),
    }
}
