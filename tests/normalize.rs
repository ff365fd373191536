//! Tests for uncaught-error normalization.

use consoleshim::{
    Arg, Console, ConsoleTable, ErrorObject, ErrorRecord, Interceptor, Normalizer, OutputFn,
    RawErrorInput, Reporter, ServerSink, Severity, StackTrace, Thresholds,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingSink {
    records: Mutex<Vec<ErrorRecord>>,
}

impl ServerSink for RecordingSink {
    fn send(&self, record: &ErrorRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}

fn setup(server: u8) -> (Normalizer, Arc<Mutex<Vec<Vec<Arg>>>>, Arc<RecordingSink>) {
    let printed = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::new(RecordingSink::default());
    let error_output: OutputFn = {
        let printed = Arc::clone(&printed);
        Arc::new(move |args: &[Arg]| printed.lock().unwrap().push(args.to_vec()))
    };
    let normalizer = Normalizer::new(Reporter::new(server, sink.clone()), error_output);
    (normalizer, printed, sink)
}

#[test]
fn callback_without_object_yields_error_record() {
    let (normalizer, printed, sink) = setup(5);
    let input = RawErrorInput::from_callback(
        Some("boom".to_string()),
        Some("x.js".to_string()),
        Some(10),
        None,
        None,
    );

    assert!(normalizer.handle(input));

    let records = sink.records.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "boom");
    assert_eq!(records[0].line_number, Some(10));
    assert_eq!(records[0].severity.as_deref(), Some("error"));
    assert_eq!(*printed.lock().unwrap(), vec![vec![json!("boom")]]);
}

#[test]
fn object_fields_take_precedence() {
    let (normalizer, _printed, _sink) = setup(5);
    let object = ErrorObject {
        message: Some("from object".to_string()),
        kind: None,
        line_number: Some(3),
        column_number: Some(9),
        stack: Some(StackTrace::parse("at a (x.js:3:9)\n  at b (x.js:1:1)\n")),
    };
    let input = RawErrorInput::from_callback(
        Some("loose".to_string()),
        Some("x.js".to_string()),
        Some(99),
        Some(1),
        Some(object),
    );

    let record = normalizer.normalize(input);
    assert_eq!(record.message, "from object");
    assert_eq!(record.line_number, Some(3));
    assert_eq!(record.column_number, Some(9));
    assert_eq!(record.url.as_deref(), Some("x.js"));
    assert_eq!(
        record.stack.unwrap().frames(),
        ["at a (x.js:3:9)", "at b (x.js:1:1)"]
    );
}

#[test]
fn callback_column_fills_missing_object_column() {
    let (normalizer, _printed, _sink) = setup(5);
    let input = RawErrorInput::WithObject {
        object: ErrorObject::new("m"),
        url: None,
        column_number: Some(4),
    };
    assert_eq!(normalizer.normalize(input).column_number, Some(4));
}

#[test]
fn tagged_object_is_not_printed_again() {
    let (normalizer, printed, sink) = setup(5);
    let object = ErrorObject {
        kind: Some("warn".to_string()),
        ..ErrorObject::new("already logged")
    };
    let input = RawErrorInput::from_callback(None, None, None, None, Some(object));

    assert!(normalizer.handle(input));
    assert!(printed.lock().unwrap().is_empty());
    assert_eq!(sink.records.lock().unwrap()[0].severity.as_deref(), Some("warn"));
}

#[test]
fn unknown_tag_is_not_forwarded_and_still_suppresses() {
    let (normalizer, _printed, sink) = setup(5);
    let object = ErrorObject {
        kind: Some("fatal".to_string()),
        ..ErrorObject::new("odd")
    };
    let input = RawErrorInput::from_callback(None, None, None, None, Some(object));

    assert!(normalizer.handle(input));
    assert!(sink.records.lock().unwrap().is_empty());
}

#[test]
fn malformed_input_yields_empty_record() {
    let (normalizer, printed, sink) = setup(5);
    let input = RawErrorInput::from_callback(None, None, None, None, None);

    let record = normalizer.normalize(input.clone());
    assert_eq!(record.message, "");
    assert_eq!(record.severity, None);

    assert!(normalizer.handle(input));
    assert!(printed.lock().unwrap().is_empty());
    assert!(sink.records.lock().unwrap().is_empty());
}

#[test]
fn below_server_threshold_still_suppresses() {
    let (normalizer, printed, sink) = setup(0);
    let input = RawErrorInput::from_callback(Some("boom".to_string()), None, Some(1), None, None);

    assert!(normalizer.handle(input));
    assert_eq!(printed.lock().unwrap().len(), 1);
    assert!(sink.records.lock().unwrap().is_empty());
}

#[test]
fn blank_stack_is_dropped() {
    let (normalizer, _printed, _sink) = setup(5);
    let blank = StackTrace::parse("  \n\n");
    assert!(blank.is_empty());
    let object = ErrorObject {
        stack: Some(blank),
        ..ErrorObject::new("no frames")
    };
    let input = RawErrorInput::from_callback(None, None, None, None, Some(object));
    assert_eq!(normalizer.normalize(input).stack, None);
}

#[derive(Default)]
struct RecordingConsole {
    calls: Mutex<Vec<(Severity, Vec<Arg>)>>,
}

impl Console for RecordingConsole {
    fn emit(&self, severity: Severity, args: &[Arg]) {
        self.calls.lock().unwrap().push((severity, args.to_vec()));
    }
}

#[test]
fn installation_normalizer_prints_through_unwrapped_error() {
    let host = Arc::new(RecordingConsole::default());
    let sink = Arc::new(RecordingSink::default());
    let mut table = ConsoleTable::from_console(host.clone());
    let installed = Interceptor::new(Thresholds::new(0, 5), Reporter::new(5, sink.clone()))
        .install(&mut table);

    let normalizer = Normalizer::for_installation(&installed);
    let input = RawErrorInput::from_callback(Some("boom".to_string()), None, Some(1), None, None);
    assert!(normalizer.handle(input));

    // Client threshold 0 would hide a wrapped call; the original still prints
    assert_eq!(
        *host.calls.lock().unwrap(),
        vec![(Severity::Error, vec![json!("boom")])]
    );
    assert_eq!(sink.records.lock().unwrap().len(), 1);
}
