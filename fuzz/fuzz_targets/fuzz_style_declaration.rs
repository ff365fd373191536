#![no_main]
use consoleshim::fmt::from_style;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Must not panic on malformed declarations or hex values
    let _ = from_style(data);
});
