//! Collaborator seams consulted after the format check.
//!
//! [`ExternalValidityCheck`] is the registry lookup (VIES in production);
//! [`VatFilter`] is a last-word veto for add-ons that apply their own rules.

use serde::{Deserialize, Serialize};

/// Answer from an external VAT registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalValidityOutcome {
    /// The number is registered and active.
    Valid,
    /// The registry answered and does not know the number.
    Invalid,
    /// No answer: network failure, timeout, or the member state is down.
    Unavailable,
}

/// A registry that can confirm a VAT number.
///
/// Implementations must fold every transport or service failure into
/// [`ExternalValidityOutcome::Unavailable`]; the validator never sees
/// their errors, and it never retries or caches.
///
/// Closures `Fn(&str, &str) -> ExternalValidityOutcome` implement this trait.
pub trait ExternalValidityCheck {
    /// Look up `local_part` (the number without prefix) for `country_code`.
    fn check(&self, country_code: &str, local_part: &str) -> ExternalValidityOutcome;
}

impl<F> ExternalValidityCheck for F
where
    F: Fn(&str, &str) -> ExternalValidityOutcome,
{
    fn check(&self, country_code: &str, local_part: &str) -> ExternalValidityOutcome {
        self(country_code, local_part)
    }
}

/// Final veto over a number that passed every other check.
///
/// Closures `Fn(&str, &str) -> bool` implement this trait.
pub trait VatFilter {
    /// Return `false` to reject `vat` (the full normalized number).
    fn accept(&self, vat: &str, country_code: &str) -> bool;
}

impl<F> VatFilter for F
where
    F: Fn(&str, &str) -> bool,
{
    fn accept(&self, vat: &str, country_code: &str) -> bool {
        self(vat, country_code)
    }
}
