//! Decides whether a record reaches the server sink. Transport is not this
//! module's concern: the sink is an injected collaborator and the reporter
//! never observes whether sending succeeded.

mod jsonl;

pub use jsonl::JsonLinesSink;

use crate::internal;
use crate::level::{self, passes};
use crate::record::ErrorRecord;
use std::sync::Arc;

/// Receives records that met the server threshold.
///
/// Fire-and-forget: implementations own batching, retries and failure handling.
pub trait ServerSink: Send + Sync {
    fn send(&self, record: &ErrorRecord);
}

/// Discards everything. The default when no transport is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ServerSink for NullSink {
    fn send(&self, _record: &ErrorRecord) {}
}

/// Adapts a closure into a sink.
pub struct FnSink<F>(pub F);

impl<F> ServerSink for FnSink<F>
where
    F: Fn(&ErrorRecord) + Send + Sync,
{
    fn send(&self, record: &ErrorRecord) {
        (self.0)(record);
    }
}

impl<S: ServerSink + ?Sized> ServerSink for Arc<S> {
    fn send(&self, record: &ErrorRecord) {
        (**self).send(record);
    }
}

/// Server-side forwarding gate.
#[derive(Clone)]
pub struct Reporter {
    server_threshold: u8,
    sink: Arc<dyn ServerSink>,
}

impl Reporter {
    #[must_use]
    pub fn new(server_threshold: u8, sink: Arc<dyn ServerSink>) -> Self {
        Self {
            server_threshold,
            sink,
        }
    }

    /// Forwards the record when the server threshold admits its severity.
    ///
    /// Always returns `true`: uncaught errors are suppressed from the host's
    /// default surface whether or not they were forwarded. The return value
    /// says nothing about forwarding.
    pub fn report(&self, record: &ErrorRecord) -> bool {
        match level::rank_of(record.severity_tag()) {
            Ok(rank) if passes(self.server_threshold, rank) => {
                internal::trace(
                    "REPORT",
                    &format!("Forwarding {} record {}", record.severity_tag(), record.id),
                );
                self.sink.send(record);
            }
            Ok(_) => {}
            Err(e) => {
                internal::warn("REPORT", &format!("Not forwarding record {}: {e}", record.id));
            }
        }

        true
    }

    #[must_use]
    pub const fn server_threshold(&self) -> u8 {
        self.server_threshold
    }
}

impl std::fmt::Debug for Reporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reporter")
            .field("server_threshold", &self.server_threshold)
            .finish_non_exhaustive()
    }
}
