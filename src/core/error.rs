use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{MAX_VAT_LENGTH, MIN_VAT_LENGTH};

/// Errors returned when a VAT number fails validation.
///
/// `value` is always the normalized number, never the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum VatError {
    /// The two-letter prefix is not an EU VAT country code.
    #[error("invalid VAT number '{value}': unknown country code '{country}'")]
    UnrecognizedCountry { value: String, country: String },

    /// The normalized number is shorter or longer than any EU VAT number.
    #[error(
        "invalid VAT number '{value}': must be {min} to {max} characters, got {len}",
        min = MIN_VAT_LENGTH,
        max = MAX_VAT_LENGTH
    )]
    InvalidLength { value: String, len: usize },

    /// The number does not match the structure used by its country.
    #[error("invalid VAT number '{value}': invalid format for country {country}")]
    InvalidFormat { value: String, country: String },

    /// VIES answered that the number is not registered.
    #[error("VAT number '{value}' is not valid according to VIES")]
    ExternalRejection { value: String },

    /// VIES could not be reached or the member state service was down.
    #[error("VAT number '{value}' could not be verified: VIES is unavailable")]
    ExternalUnavailable { value: String },

    /// A [`VatFilter`](crate::vat::VatFilter) refused an otherwise valid number.
    #[error("VAT number '{value}' was rejected")]
    Vetoed { value: String },
}

impl VatError {
    /// The normalized VAT number the error refers to.
    pub fn value(&self) -> &str {
        match self {
            Self::UnrecognizedCountry { value, .. }
            | Self::InvalidLength { value, .. }
            | Self::InvalidFormat { value, .. }
            | Self::ExternalRejection { value }
            | Self::ExternalUnavailable { value }
            | Self::Vetoed { value } => value,
        }
    }
}

/// A checkout field that may be made mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Company,
    VatNumber,
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Company => f.write_str("company name"),
            Self::VatNumber => f.write_str("VAT number"),
        }
    }
}

/// Which address a country mismatch was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressKind {
    Billing,
    Shipping,
}

impl std::fmt::Display for AddressKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Billing => f.write_str("billing"),
            Self::Shipping => f.write_str("shipping"),
        }
    }
}

/// Errors reported by the exemption decision.
///
/// At most one of these is ever produced per decision.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ExemptionError {
    /// A field made mandatory by the shop settings was left empty.
    #[error("{0} is a required field")]
    MissingRequiredField(RequiredField),

    /// The address country differs from the VAT number's country.
    #[error("{address} country ({found}) must match the VAT number country ({expected})")]
    CountryMismatch {
        address: AddressKind,
        found: String,
        expected: String,
    },

    /// The VAT number itself failed validation.
    #[error(transparent)]
    Vat(#[from] VatError),
}
