//! Per-country VAT number format rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::{MAX_VAT_LENGTH, MIN_VAT_LENGTH, VatError, VatNumber, is_vat_country};

/// Structural rule for one member state's VAT numbers.
///
/// The pattern is anchored and matches the full normalized number,
/// country prefix included.
#[derive(Debug)]
pub struct CountryFormatRule {
    /// VAT country prefix, e.g. `DE` or `EL`.
    pub country_code: &'static str,
    pattern: Regex,
}

impl CountryFormatRule {
    /// The regular expression source.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Whether a normalized VAT number has this country's structure.
    pub fn matches(&self, vat: &str) -> bool {
        self.pattern.is_match(vat)
    }
}

/// Patterns use `[0-9]` rather than `\d`, which would accept any Unicode digit.
/// Sorted by country code for binary search.
static FORMAT_PATTERNS: &[(&str, &str)] = &[
    ("AT", r"^ATU[0-9]{8}$"),
    ("BE", r"^BE[01]?[0-9]{9}$"),
    ("BG", r"^BG[0-9]{9,10}$"),
    ("CY", r"^CY[0-9]{8}[A-Z]$"),
    ("CZ", r"^CZ[0-9]{8,10}$"),
    ("DE", r"^DE[1-9][0-9]{8}$"),
    ("DK", r"^DK[0-9]{8}$"),
    ("EE", r"^EE[0-9]{9}$"),
    ("EL", r"^EL[0-9]{9}$"),
    ("ES", r"^ES[A-Z0-9][0-9]{7}[A-Z0-9]$"),
    ("FI", r"^FI[0-9]{8}$"),
    ("FR", r"^FR[A-HJ-NP-Z0-9]{2}[0-9]{9}$"),
    ("HR", r"^HR[0-9]{11}$"),
    ("HU", r"^HU[0-9]{8}$"),
    ("IE", r"^IE(?:[0-9]{7}[A-W][A-IW]?|[0-9][A-Z+*][0-9]{5}[A-W])$"),
    ("IT", r"^IT[0-9]{11}$"),
    ("LT", r"^LT(?:[0-9]{9}|[0-9]{12})$"),
    ("LU", r"^LU[0-9]{8}$"),
    ("LV", r"^LV[0-9]{11}$"),
    ("MT", r"^MT[0-9]{8}$"),
    ("NL", r"^NL[0-9]{9}B[0-9]{2}$"),
    ("PL", r"^PL[0-9]{10}$"),
    ("PT", r"^PT[0-9]{9}$"),
    ("RO", r"^RO[1-9][0-9]{1,9}$"),
    ("SE", r"^SE[0-9]{10}01$"),
    ("SI", r"^SI[1-9][0-9]{7}$"),
    ("SK", r"^SK[1-9][0-9]{9}$"),
];

static FORMAT_RULES: LazyLock<Vec<CountryFormatRule>> = LazyLock::new(|| {
    FORMAT_PATTERNS
        .iter()
        .map(|&(country_code, pattern)| CountryFormatRule {
            country_code,
            pattern: Regex::new(pattern).expect("VAT format pattern is valid"),
        })
        .collect()
});

/// Look up the format rule for a VAT country prefix.
pub fn format_rule(country_code: &str) -> Option<&'static CountryFormatRule> {
    let rules: &'static [CountryFormatRule] = &FORMAT_RULES;
    rules
        .binary_search_by(|rule| rule.country_code.cmp(country_code))
        .ok()
        .map(|idx| &rules[idx])
}

/// Validate a VAT number by structure alone (no network call).
///
/// The input is normalized first, so `" be 0123.456.789 "` is accepted.
/// Checks run in order and stop at the first failure: country prefix,
/// overall length, then the country's pattern.
pub fn validate_vat_format(raw_vat: &str) -> Result<VatNumber, VatError> {
    let vat = VatNumber::parse(raw_vat);
    let country = vat.country_code();

    if !is_vat_country(country) {
        return Err(VatError::UnrecognizedCountry {
            value: vat.to_string(),
            country: country.to_string(),
        });
    }

    let len = vat.len();
    if !(MIN_VAT_LENGTH..=MAX_VAT_LENGTH).contains(&len) {
        return Err(VatError::InvalidLength {
            value: vat.to_string(),
            len,
        });
    }

    // A recognized country without a rule only gets the length check.
    if let Some(rule) = format_rule(country) {
        if !rule.matches(vat.as_str()) {
            return Err(VatError::InvalidFormat {
                value: vat.to_string(),
                country: country.to_string(),
            });
        }
    }

    Ok(vat)
}
