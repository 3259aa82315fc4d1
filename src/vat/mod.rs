//! VAT number validation and VIES integration.
//!
//! Validates VAT numbers by format and, when asked, through an external
//! registry such as the EU VIES API.
//!
//! # Example
//!
//! ```ignore
//! use vatex::vat::*;
//!
//! // Format-only validation (no network)
//! assert!(validate_vat_format("DE123456789").is_ok());
//!
//! // Format plus VIES confirmation (blocking, requires network)
//! let vies = ViesClient::new()?;
//! let validator = VatValidator::new().with_external_check(&vies);
//! let vat = validator.validate("ATU12345678", true)?;
//! ```

mod external;
mod format;
mod validator;
#[cfg(feature = "vies")]
mod vies;

pub use external::{ExternalValidityCheck, ExternalValidityOutcome, VatFilter};
pub use format::{CountryFormatRule, format_rule, validate_vat_format};
pub use validator::{ValidatedVat, VatValidator};
#[cfg(feature = "vies")]
pub use vies::{VIES_URL, ViesClient, ViesConfig, ViesError, ViesResult};
