pub mod cards;
pub mod engine;
pub mod pipeline;
pub mod report;
pub mod totals;

pub use crate::domain::model::{Analysis, Card, Dataset, Totals};
pub use crate::domain::ports::{DatasetSource, Pipeline, ReportSink};
pub use crate::utils::error::Result;
