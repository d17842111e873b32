use crate::domain::ports::ReportSink;
use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Writes report lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }
}

/// Writes report lines to a file, creating parent directories as needed.
///
/// The file is opened on the first line, so a run that fails before rendering
/// leaves an existing report untouched.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileSink {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        Ok(Self { path, writer: None })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn writer(&mut self) -> Result<&mut BufWriter<File>> {
        let writer = match self.writer.take() {
            Some(writer) => writer,
            None => {
                tracing::debug!("Opening report file {}", self.path.display());
                BufWriter::new(File::create(&self.path)?)
            }
        };
        Ok(self.writer.insert(writer))
    }
}

impl ReportSink for FileSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer()?, "{}", line)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer()?.flush()?;
        tracing::debug!("Report flushed to {}", self.path.display());
        Ok(())
    }
}

/// Keeps lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ReportSink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
        Ok(())
    }
}
