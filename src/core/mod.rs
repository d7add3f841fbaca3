pub mod convert_pipeline;
pub mod etl;
pub mod extract_pipeline;
pub mod inputs;

pub use crate::domain::model::{Batch, FileFailure, RunSummary, SourceDoc};
pub use crate::domain::ports::{Pipeline, Storage};
pub use crate::utils::error::Result;
