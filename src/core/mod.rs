//! Core VAT types, errors, and country tables.
//!
//! Everything here is pure data: no I/O, no configuration, no logging.

mod countries;
mod error;
mod types;

pub use countries::*;
pub use error::*;
pub use types::*;
