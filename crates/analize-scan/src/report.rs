//! Streaming report sinks.

use std::io::{self, Write};
use std::path::Path;

use analize_core::{FileRecord, ScanSummary, format_mb};

/// Receives scan events as they happen.
pub trait Reporter {
    /// Called once before the walk with the absolute root.
    fn start(&mut self, root: &Path) -> io::Result<()>;

    /// Called for every classified regular file.
    fn file(&mut self, record: &FileRecord) -> io::Result<()>;

    /// Called for every directory below the root.
    fn directory(&mut self, name: &str) -> io::Result<()>;

    /// Called once after the walk with the final summary.
    fn finish(&mut self, summary: &ScanSummary) -> io::Result<()>;
}

/// Human-readable, line-oriented report.
///
/// Every line is written with a single `writeln!`, so records stay intact
/// even if several reporters share a locked stdout.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    /// Create a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Get the underlying writer back.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn start(&mut self, root: &Path) -> io::Result<()> {
        writeln!(
            self.out,
            "Listing and classifying items in directory: {}",
            root.display()
        )
    }

    fn file(&mut self, record: &FileRecord) -> io::Result<()> {
        let size = format_mb(record.size);
        writeln!(self.out, "{} - {} - {}", record.name, record.category, size)?;

        if record.is_world_writable() {
            writeln!(self.out, "{} has world-writable permissions", record.name)?;
        }

        if record.exceeds_threshold {
            writeln!(self.out, "Large File: {} - {}", record.name, size)?;
        }

        writeln!(self.out)
    }

    fn directory(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "{name} - Directory")?;
        writeln!(self.out)
    }

    fn finish(&mut self, summary: &ScanSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Total sizes for each category:")?;
        for (category, stats) in summary.totals.iter() {
            writeln!(self.out, "{}: {}", category, format_mb(stats.total_size))?;
        }
        self.out.flush()
    }
}

/// Writes the final summary as pretty-printed JSON.
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    /// Create a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Get the underlying writer back.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn start(&mut self, _root: &Path) -> io::Result<()> {
        Ok(())
    }

    fn file(&mut self, _record: &FileRecord) -> io::Result<()> {
        Ok(())
    }

    fn directory(&mut self, _name: &str) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, summary: &ScanSummary) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, summary)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
