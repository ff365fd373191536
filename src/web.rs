//! Browser host: `console.*` as the original primitives and `window.onerror`
//! as the uncaught-error hook.

use crate::bootstrap::{self, Started};
use crate::config::Config;
use crate::console::Console;
use crate::fmt::Arg;
use crate::internal;
use crate::level::Severity;
use crate::record::{ErrorObject, RawErrorInput, StackTrace};
use crate::report::ServerSink;

use js_sys::{Array, Reflect};
use std::sync::Arc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// The browser's own console functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

fn to_js(arg: &Arg) -> JsValue {
    match arg {
        Arg::Null => JsValue::NULL,
        Arg::Bool(b) => JsValue::from_bool(*b),
        Arg::Number(n) => n.as_f64().map_or(JsValue::NULL, JsValue::from_f64),
        Arg::String(s) => JsValue::from_str(s),
        other => {
            let json = other.to_string();
            js_sys::JSON::parse(&json).unwrap_or_else(|_| JsValue::from_str(&json))
        }
    }
}

impl Console for BrowserConsole {
    fn emit(&self, severity: Severity, args: &[Arg]) {
        let array: Array = args.iter().map(to_js).collect();
        match severity {
            Severity::Log => web_sys::console::log(&array),
            Severity::Debug => web_sys::console::debug(&array),
            Severity::Info => web_sys::console::info(&array),
            Severity::Warn => web_sys::console::warn(&array),
            Severity::Error => web_sys::console::error(&array),
        }
    }
}

fn js_u32(value: &JsValue) -> Option<u32> {
    value
        .as_f64()
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n as u32)
}

fn js_string_field(object: &JsValue, key: &str) -> Option<String> {
    Reflect::get(object, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

fn js_u32_field(object: &JsValue, key: &str) -> Option<u32> {
    Reflect::get(object, &JsValue::from_str(key))
        .ok()
        .and_then(|v| js_u32(&v))
}

/// Reads the fields an `Error` may carry. Firefox names them `lineNumber`/`columnNumber`.
fn error_object(value: &JsValue) -> ErrorObject {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| js_string_field(value, "message"));

    ErrorObject {
        message,
        kind: js_string_field(value, "type"),
        line_number: js_u32_field(value, "lineNumber"),
        column_number: js_u32_field(value, "columnNumber"),
        stack: js_string_field(value, "stack").map(|s| StackTrace::parse(&s)),
    }
}

/// Converts the five `window.onerror` parameters.
#[must_use]
pub fn callback_input(
    message: &JsValue,
    url: &JsValue,
    line_number: &JsValue,
    column_number: &JsValue,
    error: &JsValue,
) -> RawErrorInput {
    let object = if error.is_undefined() || error.is_null() {
        None
    } else {
        Some(error_object(error))
    };

    RawErrorInput::from_callback(
        message.as_string(),
        url.as_string(),
        js_u32(line_number),
        js_u32(column_number),
        object,
    )
}

/// Bootstraps with the browser console and binds `window.onerror`.
pub fn start(config: &Config, sink: Arc<dyn ServerSink>) -> Started {
    let started = bootstrap::start_with(config, Arc::new(BrowserConsole), sink);
    if started == Started::Installed {
        install_onerror();
    }
    started
}

fn install_onerror() {
    let Some(window) = web_sys::window() else {
        internal::warn("WEB", "No window, onerror not bound");
        return;
    };

    let handler = Closure::<dyn Fn(JsValue, JsValue, JsValue, JsValue, JsValue) -> bool>::new(
        |message: JsValue, url: JsValue, line: JsValue, column: JsValue, error: JsValue| {
            let input = callback_input(&message, &url, &line, &column, &error);
            bootstrap::shim().is_none_or(|shim| shim.handle_uncaught(input))
        },
    );

    window.set_onerror(Some(handler.as_ref().unchecked_ref()));
    // The handler lives as long as the page.
    handler.forget();
}
