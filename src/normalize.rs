//! Turns the host's uncaught-error callback parameters into an [`ErrorRecord`]
//! and hands it to the reporter. Runs inside the global error hook, so nothing
//! here may fail or panic.

use crate::console::OutputFn;
use crate::error::Error;
use crate::internal;
use crate::intercept::Installed;
use crate::level::Severity;
use crate::record::{ErrorObject, ErrorRecord, RawErrorInput, StackTrace};
use crate::report::Reporter;
use serde_json::Value;
use std::panic::PanicHookInfo;

#[derive(Clone)]
pub struct Normalizer {
    reporter: Reporter,
    /// Original `error` primitive, used to surface untagged uncaught errors.
    error_output: OutputFn,
}

impl Normalizer {
    #[must_use]
    pub fn new(reporter: Reporter, error_output: OutputFn) -> Self {
        Self {
            reporter,
            error_output,
        }
    }

    /// Wires the normalizer to an installation's reporter and cached `error` original.
    #[must_use]
    pub fn for_installation(installed: &Installed) -> Self {
        Self::new(
            installed.reporter().clone(),
            installed.original(Severity::Error),
        )
    }

    /// Builds the record. An object's own fields take precedence over the
    /// loose callback parameters.
    ///
    /// An untagged record with a message is printed through the original
    /// `error` primitive and tagged `error`.
    #[must_use]
    pub fn normalize(&self, input: RawErrorInput) -> ErrorRecord {
        let mut record = match input {
            RawErrorInput::WithObject {
                object,
                url,
                column_number,
            } => {
                let mut record =
                    ErrorRecord::new(object.message.unwrap_or_default()).with_stack(object.stack);
                record.severity = object.kind;
                record.url = url;
                record.line_number = object.line_number;
                record.column_number = object.column_number.or(column_number);
                record
            }
            RawErrorInput::WithoutObject {
                message,
                url,
                line_number,
                column_number,
            } => {
                if message.as_deref().is_none_or(str::is_empty) && line_number.is_none() {
                    internal::warn(
                        "NORMALIZE",
                        &format!("{}, recording empty message", Error::MalformedErrorInput),
                    );
                }
                let mut record = ErrorRecord::new(message.unwrap_or_default());
                record.url = url;
                record.line_number = line_number;
                record.column_number = column_number;
                record
            }
        };

        if record.severity.is_none() && !record.message.is_empty() {
            (self.error_output)(&[Value::String(record.message.clone())]);
            record.severity = Some(Severity::Error.as_str().to_string());
        }

        record
    }

    /// Hook body: normalize, report, and return the reporter's suppression decision.
    pub fn handle(&self, input: RawErrorInput) -> bool {
        let record = self.normalize(input);
        self.reporter.report(&record)
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("reporter", &self.reporter)
            .finish_non_exhaustive()
    }
}

/// A panic is the native host's uncaught error: payload as message, source
/// location as line and column, file as url.
#[must_use]
pub fn panic_input(info: &PanicHookInfo<'_>, capture_stack: bool) -> RawErrorInput {
    let payload = info.payload();
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "Box<dyn Any>".to_string());

    let location = info.location();
    let object = ErrorObject {
        message: Some(message),
        kind: None,
        line_number: location.map(std::panic::Location::line),
        column_number: location.map(std::panic::Location::column),
        stack: if capture_stack {
            StackTrace::capture()
        } else {
            None
        },
    };

    RawErrorInput::WithObject {
        object,
        url: location.map(|l| l.file().to_string()),
        column_number: None,
    }
}
