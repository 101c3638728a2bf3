use crate::domain::model::ConversationMessage;
use crate::domain::ports::{ConversationLog, ToRecord};
use crate::utils::error::Result;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Append-only JSONL log: one `{role, content, timestamp}` object per line.
#[derive(Debug, Clone)]
pub struct JsonlConversationLog {
    log_path: PathBuf,
}

impl JsonlConversationLog {
    pub fn open<P: AsRef<Path>>(log_path: P) -> Result<Self> {
        let log_path = log_path.as_ref().to_path_buf();
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { log_path })
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

impl ConversationLog for JsonlConversationLog {
    fn append(&self, message: &ConversationMessage) -> Result<()> {
        let line = serde_json::to_string(&message.to_record().into_value())?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    fn load(&self) -> Result<Vec<ConversationMessage>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(fs::File::open(&self.log_path)?);
        let mut messages = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            messages.push(serde_json::from_str(&line)?);
        }

        tracing::debug!(
            "Loaded {} messages from {}",
            messages.len(),
            self.log_path.display()
        );
        Ok(messages)
    }
}
