use vatex::exemption::{ExemptionContext, ExemptionSettings, decide};
use vatex::vat::{ExternalValidityOutcome, VatValidator, validate_vat_format};

fn main() {
    // VAT number format validation (no network required)
    println!("=== VAT Number Format Validation ===\n");

    let test_ids = [
        "DE123456789",
        "atu 1234 5678",
        "FR12345678901",
        "NL123456789B01",
        "DE12345678",  // too short for DE
        "XX999999999", // unknown country
        "SE12",        // outside length bounds
    ];

    for id in &test_ids {
        match validate_vat_format(id) {
            Ok(vat) => println!(
                "  {id} => valid (country={}, number={})",
                vat.country_code(),
                vat.local_part()
            ),
            Err(e) => println!("  {id} => INVALID: {e}"),
        }
    }

    // Exemption decisions for a shop based in Germany
    println!("\n=== Exemption Decisions (shop in DE) ===\n");

    let settings = ExemptionSettings::new().require_vat(false);
    let validator = VatValidator::new();

    let orders = [
        ("No VAT number", ExemptionContext::new("", "FR", "DE")),
        (
            "Domestic buyer",
            ExemptionContext::new("DE123456789", "DE", "DE"),
        ),
        (
            "French buyer",
            ExemptionContext::new("FR12345678901", "FR", "DE").shipping_country("FR"),
        ),
        (
            "French buyer, local pickup",
            ExemptionContext::new("FR12345678901", "FR", "DE").shipping_methods(["local_pickup:3"]),
        ),
        (
            "Billing country mismatch",
            ExemptionContext::new("DE123456789", "FR", "AT"),
        ),
    ];

    for (label, ctx) in &orders {
        let result = decide(ctx, &settings, &validator);
        println!("  {label}:");
        println!("    exempt={}", result.is_exempt);
        for message in result.messages() {
            println!("    error: {message}");
        }
        if let Some(reason) = result.exemption_reason() {
            println!("    invoice note: {} [{}]", reason.note, reason.code);
        }
    }

    // External registry down, with and without the ignore policy
    println!("\n=== Registry Unavailable ===\n");

    let registry = |_: &str, _: &str| ExternalValidityOutcome::Unavailable;
    let validator = VatValidator::new().with_external_check(&registry);
    for ignore in [false, true] {
        let ctx = ExemptionContext::new("ATU12345678", "AT", "DE")
            .vies_required(true)
            .vies_errors_ignored(ignore);
        let result = decide(&ctx, &settings, &validator);
        println!(
            "  ignore_errors={ignore}: exempt={}, errors={:?}",
            result.is_exempt,
            result.messages()
        );
    }
}
