//! EU member state VAT prefixes.
//!
//! VAT numbers carry the VAT prefix of the issuing member state, which is
//! the ISO 3166-1 alpha-2 code except for Greece (`EL` instead of `GR`).

/// Check whether `code` is one of the 27 EU VAT country prefixes.
///
/// The check is exact: callers pass an already uppercased prefix.
pub fn is_vat_country(code: &str) -> bool {
    VAT_COUNTRY_CODES.binary_search(&code).is_ok()
}

/// All 27 EU VAT country prefixes, sorted.
pub fn vat_country_codes() -> &'static [&'static str] {
    VAT_COUNTRY_CODES
}

/// Map a VAT prefix to the ISO 3166-1 code used in postal addresses.
///
/// `EL` becomes `GR`; every other code is returned unchanged.
pub fn vat_country_to_iso(code: &str) -> &str {
    if code.eq_ignore_ascii_case("EL") { "GR" } else { code }
}

/// Compare two country codes the way addresses and VAT prefixes are matched:
/// surrounding whitespace and case are ignored, and `EL` equals `GR`.
pub fn same_country(a: &str, b: &str) -> bool {
    let a = vat_country_to_iso(a.trim());
    let b = vat_country_to_iso(b.trim());
    a.eq_ignore_ascii_case(b)
}

/// Sorted for binary search.
static VAT_COUNTRY_CODES: &[&str] = &[
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "EL", "ES", "FI", "FR", "HR", "HU", "IE", "IT",
    "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK",
];
