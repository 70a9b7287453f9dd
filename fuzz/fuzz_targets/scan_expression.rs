#![no_main]

use libfuzzer_sys::fuzz_target;
use templar::cursor::Cursor;
use templar::scanner::ExpressionScanner;

fuzz_target!(|data: &str| {
    let mut input = Cursor::new(data);
    if let Ok(expr) = ExpressionScanner::default().scan(&mut input) {
        // The scanned text ends exactly where the cursor stopped.
        assert_eq!(expr.range.to.index, input.index());
    }
});
