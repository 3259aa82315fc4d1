//! # vatex
//!
//! EU VAT number validation and reverse-charge exemption decisions for
//! shop checkouts.
//!
//! The crate is the decision core behind a checkout's VAT field: it
//! normalizes and validates buyer VAT numbers against the structural rules
//! of the 27 EU member states, optionally confirms them with the EU VIES
//! service, and decides whether an order qualifies for the intra-community
//! reverse charge. Form rendering, option storage, and order metadata are
//! left to the host shop; every input is passed in explicitly.
//!
//! ## Quick Start
//!
//! ```rust
//! use vatex::exemption::{ExemptionContext, ExemptionSettings, decide};
//! use vatex::vat::VatValidator;
//!
//! let ctx = ExemptionContext::new("FR 12 345678901", "FR", "DE");
//! let result = decide(&ctx, &ExemptionSettings::default(), &VatValidator::new());
//!
//! assert!(result.is_exempt);
//! assert!(result.errors.is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `vies` (default) | Blocking VIES REST client implementing the external check |

pub mod core;
pub mod exemption;
pub mod vat;

// Re-export core types at crate root for convenience
pub use crate::core::*;
