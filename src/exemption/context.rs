use serde::{Deserialize, Serialize};

use crate::core::{ExemptionError, VatNumber};
use crate::vat::ExternalValidityOutcome;

/// Order data the exemption decision looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExemptionContext {
    /// VAT number as typed by the buyer; normalized during the decision.
    pub vat_number: String,
    /// Billing company name.
    pub company: String,
    /// Billing address country (ISO 3166-1 alpha-2).
    pub billing_country: String,
    /// Shipping address country; billing is used when absent or empty.
    pub shipping_country: Option<String>,
    /// Country the shop is based in.
    pub shop_base_country: String,
    /// Shipping method ids chosen at checkout, e.g. `flat_rate:1`.
    pub chosen_shipping_method_ids: Vec<String>,
    /// Confirm the number with the external registry.
    pub vies_required: bool,
    /// Accept the number when the registry cannot be reached.
    pub vies_errors_ignored: bool,
}

impl ExemptionContext {
    pub fn new(
        vat_number: impl Into<String>,
        billing_country: impl Into<String>,
        shop_base_country: impl Into<String>,
    ) -> Self {
        Self {
            vat_number: vat_number.into(),
            billing_country: billing_country.into(),
            shop_base_country: shop_base_country.into(),
            ..Self::default()
        }
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn shipping_country(mut self, country: impl Into<String>) -> Self {
        self.shipping_country = Some(country.into());
        self
    }

    pub fn shipping_methods<I, S>(mut self, method_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chosen_shipping_method_ids = method_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn vies_required(mut self, required: bool) -> Self {
        self.vies_required = required;
        self
    }

    pub fn vies_errors_ignored(mut self, ignored: bool) -> Self {
        self.vies_errors_ignored = ignored;
        self
    }

    /// The country goods are delivered to: shipping if given, else billing.
    pub fn destination_country(&self) -> &str {
        match self.shipping_country.as_deref().map(str::trim) {
            Some(shipping) if !shipping.is_empty() => shipping,
            _ => self.billing_country.trim(),
        }
    }
}

/// Why an order is exempt, for printing on invoices and e-mails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExemptionReason {
    /// CEF VATEX exemption reason code.
    pub code: &'static str,
    /// Invoice note text.
    pub note: &'static str,
}

/// Intra-community reverse charge (Art. 196 VAT Directive).
pub const REVERSE_CHARGE: ExemptionReason = ExemptionReason {
    code: "vatex-eu-ae",
    note: "Reverse charge: VAT to be accounted for by the recipient (Article 196, Council Directive 2006/112/EC)",
};

/// Outcome of an exemption decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptionResult {
    /// Whether VAT is removed from the order.
    pub is_exempt: bool,
    /// Empty on success; otherwise the single error that stopped the decision.
    pub errors: Vec<ExemptionError>,
    /// The normalized number, once it passed validation.
    pub vat_number: Option<VatNumber>,
    /// Registry answer, when the registry was consulted.
    pub external_check: Option<ExternalValidityOutcome>,
}

impl ExemptionResult {
    pub(super) fn not_exempt() -> Self {
        Self {
            is_exempt: false,
            errors: Vec::new(),
            vat_number: None,
            external_check: None,
        }
    }

    pub(super) fn failed(error: impl Into<ExemptionError>) -> Self {
        Self {
            errors: vec![error.into()],
            ..Self::not_exempt()
        }
    }

    /// Whether the decision stopped on an error.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Human-readable error messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Invoice note and reason code for an exempt order.
    pub fn exemption_reason(&self) -> Option<ExemptionReason> {
        self.is_exempt.then_some(REVERSE_CHARGE)
    }
}
