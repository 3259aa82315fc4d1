#![no_main]

use libfuzzer_sys::fuzz_target;
use vatex::exemption::{ExemptionContext, ExemptionSettings, decide};
use vatex::vat::VatValidator;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut parts = s.splitn(4, '|');
        let vat = parts.next().unwrap_or_default();
        let billing = parts.next().unwrap_or_default();
        let shipping = parts.next().unwrap_or_default();
        let method = parts.next().unwrap_or_default();

        let ctx = ExemptionContext::new(vat, billing, "DE")
            .shipping_country(shipping)
            .shipping_methods([method]);
        let result = decide(&ctx, &ExemptionSettings::default(), &VatValidator::new());
        assert!(result.errors.len() <= 1);
        assert!(!(result.is_exempt && !result.errors.is_empty()));
    }
});
