use vatex::vat::*;
use vatex::{VatError, vat_country_codes};

/// One minimal valid number per member state, and a one-character
/// mutation of its local part that breaks the country's structure.
const COUNTRY_CASES: &[(&str, &str, &str)] = &[
    ("AT", "ATU12345678", "ATX12345678"),
    ("BE", "BE0123456789", "BE0123456A89"),
    ("BG", "BG123456789", "BG12345678A"),
    ("CY", "CY12345678A", "CY123456789"),
    ("CZ", "CZ12345678", "CZ1234567A"),
    ("DE", "DE123456789", "DE12345678A"),
    ("DK", "DK12345678", "DK1234567A"),
    ("EE", "EE123456789", "EE12345678A"),
    ("EL", "EL123456789", "EL12345678A"),
    ("ES", "ESX1234567X", "ESX12345A7X"),
    ("FI", "FI12345678", "FI1234567A"),
    ("FR", "FR12345678901", "FR1234567890A"),
    ("HR", "HR12345678901", "HR1234567890A"),
    ("HU", "HU12345678", "HU1234567A"),
    ("IE", "IE1234567A", "IE1234567Z"),
    ("IT", "IT12345678901", "IT1234567890A"),
    ("LT", "LT123456789", "LT12345678A"),
    ("LU", "LU12345678", "LU1234567A"),
    ("LV", "LV12345678901", "LV1234567890A"),
    ("MT", "MT12345678", "MT1234567A"),
    ("NL", "NL123456789B01", "NL123456789A01"),
    ("PL", "PL1234567890", "PL123456789A"),
    ("PT", "PT123456789", "PT12345678A"),
    ("RO", "RO12345678", "RO1234567A"),
    ("SE", "SE123456789001", "SE123456789002"),
    ("SI", "SI12345678", "SI1234567A"),
    ("SK", "SK1234567890", "SK123456789A"),
];

// ---------------------------------------------------------------------------
// Every member state
// ---------------------------------------------------------------------------

#[test]
fn cases_cover_every_country() {
    let covered: Vec<&str> = COUNTRY_CASES.iter().map(|(cc, _, _)| *cc).collect();
    assert_eq!(covered, vat_country_codes());
}

#[test]
fn valid_example_per_country() {
    for (cc, valid, _) in COUNTRY_CASES {
        let vat = validate_vat_format(valid)
            .unwrap_or_else(|e| panic!("{valid} should be valid: {e}"));
        assert_eq!(vat.country_code(), *cc);
        assert_eq!(vat.as_str(), *valid);
    }
}

#[test]
fn mutated_example_per_country_fails() {
    for (cc, valid, mutated) in COUNTRY_CASES {
        assert_eq!(valid.len(), mutated.len(), "{cc}: mutation changed length");
        let err = validate_vat_format(mutated).unwrap_err();
        assert_eq!(
            err,
            VatError::InvalidFormat {
                value: mutated.to_string(),
                country: cc.to_string(),
            }
        );
    }
}

// ---------------------------------------------------------------------------
// Country specifics
// ---------------------------------------------------------------------------

#[test]
fn at_missing_u_prefix() {
    assert!(validate_vat_format("AT12345678").is_err());
}

#[test]
fn be_old_nine_digit_and_new_ten_digit() {
    assert!(validate_vat_format("BE123456789").is_ok());
    assert!(validate_vat_format("BE1234567890").is_ok());
    assert!(validate_vat_format("BE2234567890").is_err());
}

#[test]
fn de_leading_zero_rejected() {
    assert!(validate_vat_format("DE012345678").is_err());
}

#[test]
fn es_letter_first_or_last() {
    assert!(validate_vat_format("ESA12345678").is_ok());
    assert!(validate_vat_format("ES12345678Z").is_ok());
    assert!(validate_vat_format("ES123456789").is_ok());
}

#[test]
fn fr_alpha_key() {
    assert!(validate_vat_format("FRAB123456789").is_ok());
    // I and O are never used in the key
    assert!(validate_vat_format("FRIO123456789").is_err());
}

#[test]
fn ie_formats() {
    assert!(validate_vat_format("IE1234567WA").is_ok());
    assert!(validate_vat_format("IE8Z49999W").is_ok());
    assert!(validate_vat_format("IE1234567AJ").is_err());
}

#[test]
fn lt_nine_or_twelve_digits() {
    assert!(validate_vat_format("LT123456789012").is_ok());
    assert!(validate_vat_format("LT1234567890").is_err());
}

#[test]
fn ro_variable_length() {
    assert!(validate_vat_format("RO123456").is_ok());
    assert!(validate_vat_format("RO1234567890").is_ok());
    assert!(validate_vat_format("RO0123456").is_err());
}

#[test]
fn se_requires_01_suffix() {
    assert!(validate_vat_format("SE556677889901").is_ok());
    assert!(validate_vat_format("SE556677889910").is_err());
}

#[test]
fn greece_uses_el_not_gr() {
    assert!(validate_vat_format("EL094259216").is_ok());
    assert!(matches!(
        validate_vat_format("GR094259216"),
        Err(VatError::UnrecognizedCountry { .. })
    ));
}

// ---------------------------------------------------------------------------
// Normalization and bounds
// ---------------------------------------------------------------------------

#[test]
fn spaced_lowercase_matches_compact() {
    assert_eq!(
        validate_vat_format(" be 0123456789 "),
        validate_vat_format("BE0123456789")
    );
    assert_eq!(
        validate_vat_format("nl-123.456.789-b01").unwrap().as_str(),
        "NL123456789B01"
    );
}

#[test]
fn non_eu_prefixes_rejected() {
    for vat in ["GB123456789", "XI123456789", "CHE123456789", "NO123456789"] {
        assert!(
            matches!(
                validate_vat_format(vat),
                Err(VatError::UnrecognizedCountry { .. })
            ),
            "{vat} should be rejected"
        );
    }
}

#[test]
fn length_bounds_are_inclusive() {
    // DK is the shortest (10), SE/NL/LT the longest (14)
    assert!(validate_vat_format("DK12345678").is_ok());
    assert!(validate_vat_format("SE123456789001").is_ok());
    assert!(matches!(
        validate_vat_format("SE1234567890001"),
        Err(VatError::InvalidLength { len: 15, .. })
    ));
    assert!(matches!(
        validate_vat_format("RO12345"),
        Err(VatError::InvalidLength { len: 7, .. })
    ));
}

#[test]
fn empty_string_rejected() {
    assert!(matches!(
        validate_vat_format(""),
        Err(VatError::UnrecognizedCountry { .. })
    ));
}

#[test]
fn error_display() {
    let err = validate_vat_format("de 12").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid VAT number 'DE12': must be 8 to 14 characters, got 4");

    let err = validate_vat_format("XX12345678").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid VAT number 'XX12345678': unknown country code 'XX'");
}

#[test]
fn error_value_is_normalized() {
    let err = validate_vat_format("at 1234 5678").unwrap_err();
    assert_eq!(err.value(), "AT12345678");
}

// ---------------------------------------------------------------------------
// External check
// ---------------------------------------------------------------------------

#[test]
fn unavailable_registry_and_ignore_policy() {
    let registry = |_: &str, _: &str| ExternalValidityOutcome::Unavailable;

    let strict = VatValidator::new().with_external_check(&registry);
    assert!(matches!(
        strict.validate("DE123456789", true),
        Err(VatError::ExternalUnavailable { .. })
    ));

    let lenient = strict.ignore_external_errors(true);
    assert!(lenient.validate("DE123456789", true).is_ok());
}

#[test]
fn registry_rejection() {
    let registry = |_: &str, _: &str| ExternalValidityOutcome::Invalid;
    let err = VatValidator::new()
        .with_external_check(&registry)
        .validate("ATU12345678", true)
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"VAT number 'ATU12345678' is not valid according to VIES");
}

#[test]
fn registry_confirms() {
    let registry = |cc: &str, number: &str| {
        if cc == "NL" && number == "123456789B01" {
            ExternalValidityOutcome::Valid
        } else {
            ExternalValidityOutcome::Invalid
        }
    };
    let validated = VatValidator::new()
        .with_external_check(&registry)
        .validate_detailed("nl 123456789 b01", true)
        .unwrap();
    assert_eq!(validated.vat.as_str(), "NL123456789B01");
    assert_eq!(validated.external, Some(ExternalValidityOutcome::Valid));
}

// ---------------------------------------------------------------------------
// VIES (unit tests only, no network calls)
// ---------------------------------------------------------------------------

#[cfg(feature = "vies")]
#[test]
fn vies_result_struct() {
    let r = ViesResult {
        valid: true,
        request_date: chrono::NaiveDate::from_ymd_opt(2024, 6, 15),
        name: Some("ACME GmbH".into()),
        address: None,
    };
    assert!(r.valid);
    assert_eq!(r.name.as_deref(), Some("ACME GmbH"));
}

#[cfg(feature = "vies")]
#[test]
fn vies_error_display() {
    let e = ViesError::Network("timeout".into());
    assert!(e.to_string().contains("timeout"));

    let e = ViesError::ApiError("MS_UNAVAILABLE".into());
    assert!(e.to_string().contains("MS_UNAVAILABLE"));

    let e = ViesError::ParseError("invalid json".into());
    assert!(e.to_string().contains("invalid json"));
}

#[cfg(feature = "vies")]
#[test]
fn vies_client_builds_from_config() {
    let config: ViesConfig =
        serde_json::from_str(r#"{"endpoint":"http://localhost:8080/check","timeout_secs":3}"#)
            .unwrap();
    assert!(ViesClient::with_config(&config).is_ok());
    assert!(ViesClient::new().is_ok());
}
