use crate::core::Storage;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, validate_path, Validate};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::Path;

#[derive(Debug, Parser)]
#[command(name = "profile-etl")]
#[command(about = "Extract profile data from saved HTML pages and convert it to CRM-ready CSV")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse saved profile HTML files into JSON records
    Extract(ExtractArgs),
    /// Convert extracted JSON records into CSV files for lead import
    Convert(ConvertArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// HTML files or directories containing them
    pub paths: Vec<String>,

    /// TOML file overriding the parser heuristics
    #[arg(long)]
    pub options: Option<String>,

    /// Name outputs after the capture-filename token instead of the source stem
    #[arg(long)]
    pub rename: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// JSON files or directories containing them
    pub paths: Vec<String>,

    #[arg(long, default_value = "./output")]
    pub output_dir: String,

    /// TOML file overriding the parser heuristics
    #[arg(long)]
    pub options: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for ExtractArgs {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("paths", &self.paths)?;
        for path in &self.paths {
            validate_path("paths", path)?;
        }
        Ok(())
    }
}

impl Validate for ConvertArgs {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("paths", &self.paths)?;
        for path in &self.paths {
            validate_path("paths", path)?;
        }
        validate_path("output_dir", &self.output_dir)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
