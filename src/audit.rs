//! Append-only JSONL audit log, one file per session.
//!
//! Every mutating or security-relevant action lands here as a timestamped
//! event. Call sites deliberately ignore audit failures (`let _ =`): the log
//! must never interrupt the interactive flow.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

pub const DEFAULT_AUDIT_DIR: &str = ".staffdesk";

pub struct Audit {
    session_id: String,
    file: Option<File>,
}

#[derive(Serialize)]
struct Event<'a> {
    ts: DateTime<Utc>,
    session_id: &'a str,
    #[serde(rename = "type")]
    event_type: &'a str,
    #[serde(flatten)]
    data: serde_json::Value,
}

impl Audit {
    pub fn open(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;

        let session_id = uuid::Uuid::new_v4().to_string();
        let path = dir.join(format!("{}.jsonl", session_id));
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            session_id,
            file: Some(file),
        })
    }

    /// A sink that drops every event. Used with `--no-audit` and in tests.
    pub fn disabled() -> Self {
        Self {
            session_id: String::new(),
            file: None,
        }
    }

    fn log(&mut self, event_type: &str, data: serde_json::Value) -> Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };

        let event = Event {
            ts: Utc::now(),
            session_id: &self.session_id,
            event_type,
            data,
        };
        let line = serde_json::to_string(&event)?;
        writeln!(file, "{}", line)?;
        file.flush()?;
        Ok(())
    }

    pub fn session_start(&mut self, data_dir: &Path) -> Result<()> {
        self.log(
            "session_start",
            serde_json::json!({ "data_dir": data_dir.display().to_string() }),
        )
    }

    pub fn store_seeded(&mut self, id: u32) -> Result<()> {
        self.log("store_seeded", serde_json::json!({ "id": id }))
    }

    pub fn bad_record_file(&mut self, path: &Path, reason: &str) -> Result<()> {
        self.log(
            "bad_record_file",
            serde_json::json!({
                "path": path.display().to_string(),
                "reason": reason,
            }),
        )
    }

    pub fn login_ok(&mut self, id: u32, username: &str) -> Result<()> {
        self.log(
            "login_ok",
            serde_json::json!({ "id": id, "username": username }),
        )
    }

    pub fn login_failed(&mut self, username: &str) -> Result<()> {
        self.log("login_failed", serde_json::json!({ "username": username }))
    }

    pub fn employee_created(&mut self, id: u32, username: &str) -> Result<()> {
        self.log(
            "employee_created",
            serde_json::json!({ "id": id, "username": username }),
        )
    }

    pub fn employee_updated(&mut self, id: u32) -> Result<()> {
        self.log("employee_updated", serde_json::json!({ "id": id }))
    }

    pub fn employee_removed(&mut self, id: u32, username: &str) -> Result<()> {
        self.log(
            "employee_removed",
            serde_json::json!({ "id": id, "username": username }),
        )
    }
}
