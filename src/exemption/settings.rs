//! Shop-level exemption settings.

use serde::{Deserialize, Serialize};

/// Shipping method ids that mean the buyer collects the goods in person.
pub const DEFAULT_LOCAL_PICKUP_METHODS: &[&str] =
    &["legacy_local_pickup", "local_pickup", "pickup_location"];

/// Store-wide settings consumed by [`decide`](super::decide).
///
/// The crate never loads or stores these; glue code builds them from
/// whatever option storage the shop uses. Missing keys fall back to
/// [`Default`] when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExemptionSettings {
    /// Refuse orders without a company name.
    pub require_company: bool,
    /// Refuse orders without a VAT number.
    pub require_vat: bool,
    /// Method ids that always deny exemption. An id matches a chosen
    /// method exactly or its part before the `:` instance separator.
    pub local_pickup_methods: Vec<String>,
}

impl Default for ExemptionSettings {
    fn default() -> Self {
        Self {
            require_company: false,
            require_vat: false,
            local_pickup_methods: DEFAULT_LOCAL_PICKUP_METHODS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl ExemptionSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require_company(mut self, required: bool) -> Self {
        self.require_company = required;
        self
    }

    pub fn require_vat(mut self, required: bool) -> Self {
        self.require_vat = required;
        self
    }

    /// Replace the local pickup method ids.
    pub fn local_pickup_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.local_pickup_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a chosen shipping method id (e.g. `local_pickup:3`) is a
    /// local pickup method.
    pub fn is_local_pickup(&self, method_id: &str) -> bool {
        let method_id = method_id.trim();
        let base = method_id
            .split_once(':')
            .map_or(method_id, |(base, _instance)| base);
        self.local_pickup_methods
            .iter()
            .any(|m| m == method_id || m == base)
    }
}
