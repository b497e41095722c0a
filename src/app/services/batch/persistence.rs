//! Persistence sink collaborator
//!
//! The engine hands one flattened [`StationResultRecord`] per row to a
//! [`PersistenceSink`]. Sinks are driven concurrently per batch and failures
//! are counted, never fatal.

use crate::app::models::StationResultRecord;
use crate::{Error, Result};
use std::fs::File;
use std::future::Future;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

/// Collaborator accepting flattened per-station result records
pub trait PersistenceSink: Send + Sync {
    /// Persist one station record. Failures are reported back for counting
    /// but never abort the batch.
    fn persist(&self, record: StationResultRecord) -> impl Future<Output = Result<()>> + Send;
}

/// Sink writing one JSON document per line to a file
#[derive(Debug)]
pub struct JsonlSink {
    writer: Mutex<BufWriter<File>>,
}

impl JsonlSink {
    /// Create (truncating) the output file
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .map_err(|e| Error::io(format!("Unable to create '{}'", path.display()), e))?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Flush buffered records to disk
    pub fn flush(&self) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| Error::persistence("result writer lock poisoned", None))?;
        writer
            .flush()
            .map_err(|e| Error::persistence("unable to flush results", Some(Box::new(e))))
    }
}

impl PersistenceSink for JsonlSink {
    fn persist(&self, record: StationResultRecord) -> impl Future<Output = Result<()>> + Send {
        let line = serde_json::to_string(&record);
        async move {
            let line =
                line.map_err(|e| Error::persistence("unable to encode record", Some(Box::new(e))))?;
            let mut writer = self
                .writer
                .lock()
                .map_err(|_| Error::persistence("result writer lock poisoned", None))?;
            writeln!(writer, "{}", line)
                .map_err(|e| Error::persistence("unable to write record", Some(Box::new(e))))
        }
    }
}

/// In-memory sink, mainly for tests and dry runs
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<StationResultRecord>>,
}

impl MemorySink {
    /// Empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything persisted so far
    pub fn records(&self) -> Vec<StationResultRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl PersistenceSink for MemorySink {
    fn persist(&self, record: StationResultRecord) -> impl Future<Output = Result<()>> + Send {
        let result = self
            .records
            .lock()
            .map(|mut records| records.push(record))
            .map_err(|_| Error::persistence("memory sink lock poisoned", None));
        async move { result }
    }
}

/// Sink that discards every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PersistenceSink for NullSink {
    fn persist(&self, _record: StationResultRecord) -> impl Future<Output = Result<()>> + Send {
        async { Ok(()) }
    }
}
