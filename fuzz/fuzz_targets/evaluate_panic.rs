#![no_main]
use libfuzzer_sys::fuzz_target;
use strcalc_core::{Configuration, Evaluator, Operation};

fuzz_target!(|data: &[u8]| {
    // Panic freedom under every operation, including overflowing folds and
    // multi-byte delimiters declared in the header.
    let s = String::from_utf8_lossy(data);
    let evaluator = Evaluator::new();
    for op in [
        Operation::Sum,
        Operation::Product,
        Operation::Difference,
        Operation::Quotient,
    ] {
        let config = Configuration::default()
            .with_operation(op)
            .with_deny_negatives(false)
            .with_upper_bound(i64::MAX);
        let _ = evaluator.evaluate(&s, &config);
    }
});
