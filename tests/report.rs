//! Tests for the server reporter.

use consoleshim::{ErrorRecord, FnSink, NullSink, Reporter, Severity};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn counting_reporter(server: u8) -> (Reporter, Arc<AtomicUsize>) {
    let sent = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&sent);
    let sink = FnSink(move |_: &ErrorRecord| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (Reporter::new(server, Arc::new(sink)), sent)
}

#[test]
fn report_always_returns_true() {
    let (reporter, _) = counting_reporter(0);
    for severity in Severity::all() {
        assert!(reporter.report(&ErrorRecord::from_output(severity, None)));
    }
    assert!(Reporter::new(5, Arc::new(NullSink)).report(&ErrorRecord::new("x")));
}

#[test]
fn forwards_when_threshold_is_at_least_rank() {
    let (reporter, sent) = counting_reporter(3);
    for severity in Severity::all() {
        reporter.report(&ErrorRecord::from_output(severity, None));
    }
    // info, warn, error
    assert_eq!(sent.load(Ordering::SeqCst), 3);
}

#[test]
fn unknown_severity_is_swallowed() {
    let (reporter, sent) = counting_reporter(5);
    let record = ErrorRecord::new("m").with_severity("verbose");
    assert!(reporter.report(&record));
    assert_eq!(sent.load(Ordering::SeqCst), 0);
}

#[test]
fn untagged_record_is_not_forwarded() {
    let (reporter, sent) = counting_reporter(5);
    assert!(reporter.report(&ErrorRecord::new("m")));
    assert_eq!(sent.load(Ordering::SeqCst), 0);
}

#[test]
fn tag_lookup_is_case_insensitive() {
    let (reporter, sent) = counting_reporter(1);
    reporter.report(&ErrorRecord::new("m").with_severity("ERROR"));
    assert_eq!(sent.load(Ordering::SeqCst), 1);
}

#[test]
fn abbreviated_tag_is_not_forwarded() {
    let (reporter, sent) = counting_reporter(5);
    assert!(reporter.report(&ErrorRecord::new("m").with_severity("err")));
    assert!(reporter.report(&ErrorRecord::new("m").with_severity("warning")));
    assert_eq!(sent.load(Ordering::SeqCst), 0);
}

#[test]
fn server_threshold_is_kept_as_given() {
    let (reporter, sent) = counting_reporter(0);
    assert_eq!(reporter.server_threshold(), 0);
    reporter.report(&ErrorRecord::from_output(Severity::Error, None));
    assert_eq!(sent.load(Ordering::SeqCst), 0);
}
