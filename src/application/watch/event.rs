//! Watch event types and options

use std::time::Duration;

use crate::application::rebuild::{RebuildOptions, RebuildReport};

/// How often the watch loop checks the running flag
pub const POLL_INTERVAL_MS: u64 = 50;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// What each rebuild scans and writes
    pub rebuild: RebuildOptions,
    /// How long the loop waits for an event before checking the running flag
    pub poll_interval: Duration,
}

impl WatchOptions {
    pub fn new(rebuild: RebuildOptions) -> Self {
        Self {
            rebuild,
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
        }
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted { source: String, output: String },
    /// A template file was created or modified
    FileChanged { path: String },
    RebuildStarted,
    /// A template failed to read or compile; its previous form is kept
    TemplateFailed {
        name: String,
        message: String,
        retained: bool,
    },
    /// Rebuild finished
    RebuildComplete {
        compiled: usize,
        failed: usize,
        templates: usize,
        written: bool,
    },
    /// Error occurred
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Events describing a finished rebuild, in the order they are emitted
    pub fn from_report(report: &RebuildReport) -> Vec<WatchEvent> {
        let mut events: Vec<WatchEvent> = report
            .failures
            .iter()
            .map(|failure| WatchEvent::TemplateFailed {
                name: failure.name.clone(),
                message: failure.error.to_string(),
                retained: report.retained.contains(&failure.name),
            })
            .collect();
        if let Some(message) = &report.write_error {
            events.push(WatchEvent::Error {
                message: message.clone(),
            });
        }
        events.push(WatchEvent::RebuildComplete {
            compiled: report.compiled.len(),
            failed: report.failures.len(),
            templates: report.templates,
            written: report.was_written(),
        });
        events
    }

    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
