//! JSONL file writer for quote records.
//!
//! Each settled task result and each application status transition is
//! serialized as a single JSON line with a `type` field and `timestamp`,
//! appended to the file via a buffered writer.

use quoting_application::{QuoteRecorder, RecorderError};
use quoting_domain::{ApplicationId, ApplicationStatus, TaskResult};
use serde_json::{Map, Value, json};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL quote recorder that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Appends to an existing log and
/// flushes on `Drop`.
pub struct JsonlQuoteRecorder {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlQuoteRecorder {
    /// Open (or create) the log at the given path, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RecorderError> {
        let path = path.as_ref();
        let open_error = |source| RecorderError::Open {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(open_error)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(open_error)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_record(&self, record_type: &str, application: &ApplicationId, payload: Value) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut record = match payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        record.insert("type".to_string(), Value::String(record_type.to_string()));
        record.insert("timestamp".to_string(), Value::String(timestamp));
        record.insert(
            "application_id".to_string(),
            Value::String(application.to_string()),
        );

        let line = match serde_json::to_string(&Value::Object(record)) {
            Ok(line) => line,
            Err(e) => {
                warn!("{}", RecorderError::Write(e.to_string()));
                return;
            }
        };

        if let Ok(mut writer) = self.writer.lock() {
            let written = writeln!(writer, "{}", line).and_then(|_| writer.flush());
            if let Err(e) = written {
                warn!("{}", RecorderError::Write(e.to_string()));
            }
        }
    }
}

impl QuoteRecorder for JsonlQuoteRecorder {
    fn record_result(&self, application: &ApplicationId, result: &TaskResult) {
        let payload = match serde_json::to_value(result) {
            Ok(value) => value,
            Err(e) => {
                warn!("{}", RecorderError::Write(e.to_string()));
                return;
            }
        };
        self.write_record("task_result", application, payload);
    }

    fn record_status(&self, application: &ApplicationId, status: ApplicationStatus) {
        self.write_record("application_status", application, json!({ "status": status }));
    }
}

impl Drop for JsonlQuoteRecorder {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoting_domain::{AdapterTask, PolicyType, QuoteOutcome, Tier};
    use rust_decimal::Decimal;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("quotes.jsonl");
        let recorder = JsonlQuoteRecorder::open(&path).unwrap();
        let application = ApplicationId::new("app-9");

        recorder.record_status(&application, ApplicationStatus::Quoting);
        recorder.record_result(
            &application,
            &TaskResult::new(
                AdapterTask::new("hartwell", "hartwell", PolicyType::Gl, Tier::FIRST),
                QuoteOutcome::quoted(Decimal::new(125_000, 2)),
            ),
        );
        drop(recorder);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(line.get("timestamp").is_some());
            assert_eq!(line["application_id"], "app-9");
        }

        assert_eq!(lines[0]["type"], "application_status");
        assert_eq!(lines[0]["status"], "quoting");

        assert_eq!(lines[1]["type"], "task_result");
        assert_eq!(lines[1]["task"]["insurer_id"], "hartwell");
        assert_eq!(lines[1]["outcome"]["status"], "quoted");
        assert_eq!(lines[1]["outcome"]["amount"], "1250.00");
    }

    #[test]
    fn test_appends_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.jsonl");
        let application = ApplicationId::new("app-1");

        for status in [ApplicationStatus::Quoting, ApplicationStatus::Quoted] {
            let recorder = JsonlQuoteRecorder::open(&path).unwrap();
            recorder.record_status(&application, status);
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["status"], "quoted");
    }

    #[test]
    fn test_open_fails_on_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonlQuoteRecorder::open(dir.path()).err().unwrap();
        assert!(matches!(err, RecorderError::Open { .. }));
    }
}
