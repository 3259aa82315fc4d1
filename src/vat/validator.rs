//! Full VAT number validation: format, optional registry lookup, veto.

use std::fmt;

use tracing::{debug, warn};

use super::external::{ExternalValidityCheck, ExternalValidityOutcome, VatFilter};
use super::format::validate_vat_format;
use crate::core::{VatError, VatNumber};

/// A number that passed validation, with the registry answer if one was asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedVat {
    pub vat: VatNumber,
    /// `None` when no external check was required.
    pub external: Option<ExternalValidityOutcome>,
}

/// Validates VAT numbers, optionally against an external registry.
///
/// The validator holds no state between calls. Collaborators are borrowed,
/// so one validator can be built per request from long-lived clients.
///
/// # Example
///
/// ```rust
/// use vatex::vat::{ExternalValidityOutcome, VatValidator};
///
/// let registry = |_: &str, _: &str| ExternalValidityOutcome::Unavailable;
/// let validator = VatValidator::new()
///     .with_external_check(&registry)
///     .ignore_external_errors(true);
///
/// assert!(validator.validate("DE123456789", true).is_ok());
/// ```
#[derive(Clone, Copy, Default)]
pub struct VatValidator<'a> {
    external: Option<&'a dyn ExternalValidityCheck>,
    filter: Option<&'a dyn VatFilter>,
    ignore_external_errors: bool,
}

impl<'a> VatValidator<'a> {
    /// A validator with no registry, no filter, and strict error handling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry to consult when a caller requires an external check.
    pub fn with_external_check(mut self, check: &'a dyn ExternalValidityCheck) -> Self {
        self.external = Some(check);
        self
    }

    /// Veto applied after every other check passed.
    pub fn with_filter(mut self, filter: &'a dyn VatFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Accept numbers whose registry lookup came back `Unavailable`.
    pub fn ignore_external_errors(mut self, ignore: bool) -> Self {
        self.ignore_external_errors = ignore;
        self
    }

    /// Validate `raw_vat` and return its normalized form.
    ///
    /// # Errors
    ///
    /// Format failures (`UnrecognizedCountry`, `InvalidLength`,
    /// `InvalidFormat`) come first. With `require_external_check`, the
    /// registry may add `ExternalRejection` or `ExternalUnavailable`.
    /// A filter veto yields `Vetoed`.
    pub fn validate(
        &self,
        raw_vat: &str,
        require_external_check: bool,
    ) -> Result<VatNumber, VatError> {
        self.validate_detailed(raw_vat, require_external_check)
            .map(|validated| validated.vat)
    }

    /// Like [`validate`](Self::validate), also reporting the registry outcome.
    pub fn validate_detailed(
        &self,
        raw_vat: &str,
        require_external_check: bool,
    ) -> Result<ValidatedVat, VatError> {
        let vat = validate_vat_format(raw_vat)?;

        let external = if require_external_check {
            let outcome = self.check_external(&vat);
            match outcome {
                ExternalValidityOutcome::Valid => {}
                ExternalValidityOutcome::Invalid => {
                    return Err(VatError::ExternalRejection {
                        value: vat.to_string(),
                    });
                }
                ExternalValidityOutcome::Unavailable if self.ignore_external_errors => {
                    warn!(vat = %vat, "external VAT check unavailable, accepting on format alone");
                }
                ExternalValidityOutcome::Unavailable => {
                    return Err(VatError::ExternalUnavailable {
                        value: vat.to_string(),
                    });
                }
            }
            Some(outcome)
        } else {
            None
        };

        if let Some(filter) = self.filter {
            if !filter.accept(vat.as_str(), vat.country_code()) {
                debug!(vat = %vat, "VAT number vetoed by filter");
                return Err(VatError::Vetoed {
                    value: vat.to_string(),
                });
            }
        }

        Ok(ValidatedVat { vat, external })
    }

    fn check_external(&self, vat: &VatNumber) -> ExternalValidityOutcome {
        match self.external {
            Some(check) => {
                let outcome = check.check(vat.country_code(), vat.local_part());
                debug!(vat = %vat, ?outcome, "external VAT check answered");
                outcome
            }
            None => {
                warn!(vat = %vat, "external VAT check required but none configured");
                ExternalValidityOutcome::Unavailable
            }
        }
    }
}

impl fmt::Debug for VatValidator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VatValidator")
            .field("external", &self.external.is_some())
            .field("filter", &self.filter.is_some())
            .field("ignore_external_errors", &self.ignore_external_errors)
            .finish()
    }
}
