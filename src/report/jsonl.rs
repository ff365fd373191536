//! Appends forwarded records to a JSONL file, one object per line. Stands in
//! for the network transport while it does not exist; `jq` can read the result.

use super::ServerSink;
use crate::error::Error;
use crate::internal;
use crate::record::ErrorRecord;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct JsonLinesSink {
    file_path: PathBuf,
}

impl Default for JsonLinesSink {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonLinesSink {
    /// XDG state directory when one exists, otherwise the working directory.
    #[must_use]
    pub fn new() -> Self {
        let file_path = directories::ProjectDirs::from("", "", "consoleshim").map_or_else(
            || PathBuf::from("consoleshim.jsonl"),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("consoleshim.jsonl")
            },
        );

        Self { file_path }
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    /// `~` is expanded at write time so config values stay portable.
    #[must_use]
    pub fn resolve_path(&self) -> PathBuf {
        let path_str = self.file_path.to_string_lossy();
        PathBuf::from(shellexpand::tilde(&path_str).as_ref())
    }

    /// Serializes and appends one record.
    ///
    /// # Errors
    /// I/O errors creating the directory or writing the file, or a serialization failure.
    pub fn write_record(&self, record: &ErrorRecord) -> Result<(), Error> {
        let path = self.resolve_path();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
            internal::debug("SINK", &format!("Created directory: {}", parent.display()));
        }

        // One write per line: concurrent senders append whole lines
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(line.as_bytes())?;

        Ok(())
    }
}

impl ServerSink for JsonLinesSink {
    fn send(&self, record: &ErrorRecord) {
        if let Err(e) = self.write_record(record) {
            internal::error(
                "SINK",
                &format!("Dropped record {} for {}: {e}", record.id, self.file_path.display()),
            );
        }
    }
}
