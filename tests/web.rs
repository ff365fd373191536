//! Browser host mapping of the `window.onerror` parameters.
//! Run with `wasm-pack test --node -- --features web`.

#![cfg(all(feature = "web", target_arch = "wasm32"))]

use consoleshim::RawErrorInput;
use consoleshim::web::callback_input;
use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::wasm_bindgen_test;

#[wasm_bindgen_test]
fn missing_error_object_keeps_loose_parameters() {
    let input = callback_input(
        &JsValue::from_str("boom"),
        &JsValue::from_str("x.js"),
        &JsValue::from_f64(10.0),
        &JsValue::UNDEFINED,
        &JsValue::UNDEFINED,
    );

    assert_eq!(
        input,
        RawErrorInput::WithoutObject {
            message: Some("boom".to_string()),
            url: Some("x.js".to_string()),
            line_number: Some(10),
            column_number: None,
        }
    );
}

#[wasm_bindgen_test]
fn null_error_object_counts_as_missing() {
    let input = callback_input(
        &JsValue::from_str("boom"),
        &JsValue::NULL,
        &JsValue::from_f64(-1.0),
        &JsValue::from_f64(4.0),
        &JsValue::NULL,
    );

    assert_eq!(
        input,
        RawErrorInput::WithoutObject {
            message: Some("boom".to_string()),
            url: None,
            line_number: None,
            column_number: Some(4),
        }
    );
}

#[wasm_bindgen_test]
fn error_instance_supplies_message() {
    let error: JsValue = js_sys::Error::new("inner").into();
    let input = callback_input(
        &JsValue::from_str("Uncaught Error: inner"),
        &JsValue::from_str("x.js"),
        &JsValue::from_f64(3.0),
        &JsValue::from_f64(7.0),
        &error,
    );

    let RawErrorInput::WithObject {
        object,
        url,
        column_number,
    } = input
    else {
        panic!("expected an object-carrying input");
    };
    assert_eq!(object.message.as_deref(), Some("inner"));
    assert_eq!(url.as_deref(), Some("x.js"));
    assert_eq!(column_number, Some(7));
}

#[wasm_bindgen_test]
fn plain_object_fields_are_read() {
    let value = Object::new();
    Reflect::set(&value, &"message".into(), &"tagged".into()).unwrap();
    Reflect::set(&value, &"type".into(), &"warn".into()).unwrap();
    Reflect::set(&value, &"lineNumber".into(), &JsValue::from_f64(12.0)).unwrap();
    Reflect::set(&value, &"stack".into(), &"at a (x.js:12:1)\nat b (x.js:1:1)".into()).unwrap();

    let input = callback_input(
        &JsValue::UNDEFINED,
        &JsValue::UNDEFINED,
        &JsValue::UNDEFINED,
        &JsValue::UNDEFINED,
        &value.into(),
    );

    let RawErrorInput::WithObject { object, .. } = input else {
        panic!("expected an object-carrying input");
    };
    assert_eq!(object.message.as_deref(), Some("tagged"));
    assert_eq!(object.kind.as_deref(), Some("warn"));
    assert_eq!(object.line_number, Some(12));
    assert_eq!(object.stack.unwrap().frames().len(), 2);
}
