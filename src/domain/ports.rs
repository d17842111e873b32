use crate::domain::model::{Analysis, Dataset};
use crate::utils::error::Result;

/// Where products and orders come from.
pub trait DatasetSource {
    fn describe(&self) -> String;
    fn load(&self) -> Result<Dataset>;
}

/// Append-only line output for the rendered report.
pub trait ReportSink {
    fn write_line(&mut self, line: &str) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

pub trait Pipeline {
    fn extract(&self) -> Result<Dataset>;
    fn transform(&self, data: Dataset) -> Result<Analysis>;
    /// Returns the number of lines written.
    fn load(&mut self, analysis: Analysis) -> Result<usize>;
}

impl<T: DatasetSource + ?Sized> DatasetSource for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn load(&self) -> Result<Dataset> {
        (**self).load()
    }
}

impl<T: ReportSink + ?Sized> ReportSink for Box<T> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}
