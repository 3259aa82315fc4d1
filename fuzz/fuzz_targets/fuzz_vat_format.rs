#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Errors are fine, panics are bugs.
        if let Ok(vat) = vatex::vat::validate_vat_format(s) {
            assert_eq!(vatex::vat::validate_vat_format(vat.as_str()), Ok(vat.clone()));
        }
    }
});
