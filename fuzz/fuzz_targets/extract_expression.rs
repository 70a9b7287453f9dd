#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Extraction must never panic, and a successful extraction must be a
    // prefix of the input so callers can advance by its length.
    if let Ok(expr) = templar::goexpr::extract_expression(data) {
        assert!(data.starts_with(&expr));
    }
    let _ = templar::goexpr::extract_func(data);
});
