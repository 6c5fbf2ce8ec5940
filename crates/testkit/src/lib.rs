#![warn(missing_docs)]
//! Test fixtures and event recording for hotbar tests.

mod fixtures;

use anyhow::Result;
use chrono::{DateTime, Utc};
use hotbar_core::HotbarEvent;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub use fixtures::*;

/// One recorded change, as written by [`JsonlSink`].
#[derive(Debug, Serialize)]
pub struct EventRecord<'a> {
    /// Position of the event in the recorded stream.
    pub sequence: u64,
    /// Wall-clock time the event was recorded.
    pub recorded_at: DateTime<Utc>,
    /// The change itself.
    pub event: &'a HotbarEvent,
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    file: File,
    next_sequence: u64,
}

impl JsonlSink {
    /// Create a new sink at `path`, creating parent dirs if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self {
            file: File::create(path)?,
            next_sequence: 0,
        })
    }

    /// Append one event to the log.
    pub fn write(&mut self, event: &HotbarEvent) -> Result<()> {
        let record = EventRecord {
            sequence: self.next_sequence,
            recorded_at: Utc::now(),
            event,
        };
        let line = serde_json::to_string(&record)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        self.next_sequence += 1;
        Ok(())
    }

    /// Append every event in order.
    pub fn write_all(&mut self, events: &[HotbarEvent]) -> Result<()> {
        events.iter().try_for_each(|event| self.write(event))
    }

    /// Number of events written so far.
    pub fn written(&self) -> u64 {
        self.next_sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotbar_core::HotbarId;

    #[test]
    fn jsonl_sink_writes_one_line_per_event() {
        let path = std::env::temp_dir().join(format!(
            "hotbar-events-{}.jsonl",
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let events = vec![
            HotbarEvent::HotbarCreated {
                id: HotbarId::from("h1"),
            },
            HotbarEvent::ActiveChanged {
                id: HotbarId::from("h1"),
            },
        ];

        let mut sink = JsonlSink::create(&path).expect("sink create");
        sink.write_all(&events).expect("write succeeds");
        assert_eq!(sink.written(), 2);
        drop(sink);

        let contents = fs::read_to_string(&path).expect("file readable");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"kind\":\"hotbar_created\""));
        assert!(lines[1].contains("\"sequence\":1"));
    }
}
