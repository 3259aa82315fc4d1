//! Reverse-charge exemption decisions for checkout orders.
//!
//! An order is VAT-exempt when the buyer gives a valid VAT number from
//! another member state than the shop, both addresses are in that state,
//! and the goods are not collected locally.
//!
//! # Example
//!
//! ```rust
//! use vatex::exemption::*;
//! use vatex::vat::VatValidator;
//!
//! let settings = ExemptionSettings::new().require_vat(true);
//! let ctx = ExemptionContext::new("ATU12345678", "AT", "DE")
//!     .shipping_methods(["flat_rate:1"]);
//!
//! let result = decide(&ctx, &settings, &VatValidator::new());
//! assert!(result.is_exempt);
//! assert_eq!(result.exemption_reason().unwrap().code, "vatex-eu-ae");
//! ```

mod context;
mod decide;
mod settings;

pub use context::{ExemptionContext, ExemptionReason, ExemptionResult, REVERSE_CHARGE};
pub use decide::decide;
pub use settings::{DEFAULT_LOCAL_PICKUP_METHODS, ExemptionSettings};
