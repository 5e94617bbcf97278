//! Row sinks: the file-backed CSV sink and its disabled-mode stand-in.

use std::fs::{File, OpenOptions};
use std::path::Path;

use crate::error::Result;

/// One tag's row destination.
///
/// Two implementations exist: [`CsvSink`] writes through an append-mode
/// file handle, [`NullSink`] discards everything. Call sites hold
/// `Box<dyn Sink>` and never branch on whether disk writing is enabled.
pub trait Sink {
    /// Write the header row, once. Later calls on the same sink are no-ops.
    fn write_header(&mut self, fields: &[String]) -> Result<()>;

    /// Append one data row.
    fn write_row(&mut self, fields: &[String]) -> Result<()>;

    /// Push buffered rows down to the underlying storage.
    fn flush(&mut self) -> Result<()>;
}

/// Header state of a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    Created,
    HeaderWritten,
}

/// File-backed sink: one append-mode handle plus a CSV row writer.
pub struct CsvSink {
    writer: csv::Writer<File>,
    state: SinkState,
}

impl CsvSink {
    /// Open the CSV file at `path` for appending, creating it if absent.
    /// Prior content is preserved so a resumed run keeps appending to the
    /// same files.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: csv::Writer::from_writer(file),
            state: SinkState::Created,
        })
    }
}

impl Sink for CsvSink {
    fn write_header(&mut self, fields: &[String]) -> Result<()> {
        if self.state == SinkState::HeaderWritten {
            return Ok(());
        }
        self.writer.write_record(fields)?;
        self.state = SinkState::HeaderWritten;
        Ok(())
    }

    fn write_row(&mut self, fields: &[String]) -> Result<()> {
        self.writer.write_record(fields)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Disabled-mode sink: accepts every call, touches nothing.
#[derive(Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn write_header(&mut self, _fields: &[String]) -> Result<()> {
        Ok(())
    }

    fn write_row(&mut self, _fields: &[String]) -> Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
