//! JSONL log of game notifications, one record per line.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameEvent;

#[derive(Debug, Serialize)]
struct EventRecord<'a> {
    seq: u64,
    score: u32,
    #[serde(flatten)]
    event: &'a GameEvent,
}

pub struct EventLog<W: Write> {
    out: W,
    seq: u64,
}

impl EventLog<BufWriter<File>> {
    /// Create (or truncate) the log file at `path`.
    pub fn create(path: &str) -> Result<Self> {
        let file = File::create(path).with_context(|| format!("open event log {}", path))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self { out, seq: 0 }
    }

    pub fn record(&mut self, event: &GameEvent, score: u32) -> Result<()> {
        self.seq += 1;
        let record = EventRecord {
            seq: self.seq,
            score,
            event,
        };
        serde_json::to_writer(&mut self.out, &record)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
