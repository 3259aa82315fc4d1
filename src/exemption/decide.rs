//! The exemption decision procedure.

use tracing::debug;

use super::context::{ExemptionContext, ExemptionResult};
use super::settings::ExemptionSettings;
use crate::core::{
    AddressKind, ExemptionError, RequiredField, normalize, same_country, vat_country_to_iso,
};
use crate::vat::VatValidator;

/// Decide whether an order is exempt from VAT.
///
/// `validator` supplies the registry and filter; its own ignore-errors
/// setting is replaced by `ctx.vies_errors_ignored`.
///
/// # Logic
///
/// Steps run in order and the first failure ends the decision with a
/// single error and `is_exempt = false`:
///
/// 1. Company required but empty → `MissingRequiredField(Company)`
/// 2. VAT number required but empty → `MissingRequiredField(VatNumber)`
/// 3. VAT number empty → not exempt, no error
/// 4. VAT number invalid (format, registry, filter) → `Vat(..)`
/// 5. Billing country differs from the VAT country → `CountryMismatch(Billing)`
/// 6. Shipping country (or billing, if none) differs → `CountryMismatch(Shipping)`
/// 7. A local pickup method was chosen → not exempt, no error
/// 8. Exempt iff the VAT country is not the shop's base country
pub fn decide(
    ctx: &ExemptionContext,
    settings: &ExemptionSettings,
    validator: &VatValidator<'_>,
) -> ExemptionResult {
    if settings.require_company && ctx.company.trim().is_empty() {
        debug!("company name required but missing");
        return ExemptionResult::failed(ExemptionError::MissingRequiredField(
            RequiredField::Company,
        ));
    }

    let has_vat = !normalize(&ctx.vat_number).is_empty();
    if !has_vat {
        if settings.require_vat {
            debug!("VAT number required but missing");
            return ExemptionResult::failed(ExemptionError::MissingRequiredField(
                RequiredField::VatNumber,
            ));
        }
        return ExemptionResult::not_exempt();
    }

    let validated = match validator
        .ignore_external_errors(ctx.vies_errors_ignored)
        .validate_detailed(&ctx.vat_number, ctx.vies_required)
    {
        Ok(validated) => validated,
        Err(e) => {
            debug!(error = %e, "VAT number failed validation");
            return ExemptionResult::failed(e);
        }
    };

    let vat_country = vat_country_to_iso(validated.vat.country_code()).to_string();
    let mut result = ExemptionResult {
        vat_number: Some(validated.vat),
        external_check: validated.external,
        ..ExemptionResult::not_exempt()
    };

    let billing = ctx.billing_country.trim();
    if !billing.is_empty() && !same_country(billing, &vat_country) {
        debug!(billing, %vat_country, "billing country mismatch");
        result.errors.push(ExemptionError::CountryMismatch {
            address: AddressKind::Billing,
            found: billing.to_uppercase(),
            expected: vat_country,
        });
        return result;
    }

    let destination = ctx.destination_country();
    if !destination.is_empty() && !same_country(destination, &vat_country) {
        debug!(destination, %vat_country, "shipping country mismatch");
        result.errors.push(ExemptionError::CountryMismatch {
            address: AddressKind::Shipping,
            found: destination.to_uppercase(),
            expected: vat_country,
        });
        return result;
    }

    if let Some(method) = ctx
        .chosen_shipping_method_ids
        .iter()
        .find(|m| settings.is_local_pickup(m))
    {
        debug!(%method, "local pickup chosen, VAT is charged");
        return result;
    }

    result.is_exempt = !same_country(&vat_country, &ctx.shop_base_country);
    debug!(
        %vat_country,
        shop_base_country = %ctx.shop_base_country,
        is_exempt = result.is_exempt,
        "exemption decided"
    );
    result
}
