#![no_main]
use consoleshim::fmt::{colorize, render_args};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &str| {
    // Split into arguments so %c directives can consume arbitrary followers
    let args: Vec<Value> = data.split('\u{1f}').map(|s| Value::String(s.to_string())).collect();
    let args = colorize(args);
    let _ = render_args(&args, true);
    let _ = render_args(&args, false);
});
