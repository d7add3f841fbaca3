pub mod config;
pub mod convert;
pub mod core;
pub mod domain;
pub mod extract;
pub mod utils;

pub use config::{Cli, Command, ConvertArgs, ExtractArgs, LocalStorage, ParserOptions};
pub use core::{
    convert_pipeline::ConvertPipeline, etl::EtlEngine, extract_pipeline::ExtractPipeline,
};
pub use domain::model::{
    Batch, EducationEntry, FileFailure, LeadRow, Profile, ProfileRow, Role, RunSummary, SourceDoc,
};
pub use extract::ProfileParser;
pub use utils::error::{EtlError, Result};
