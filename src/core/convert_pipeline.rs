use crate::config::cli::ConvertArgs;
use crate::config::options::ParserOptions;
use crate::convert::{lead_row, profile_row};
use crate::core::inputs::{filename_slug, resolve_inputs};
use crate::domain::model::{Batch, FileFailure, LeadRow, Profile, ProfileRow, RunSummary, SourceDoc};
use crate::domain::ports::{Pipeline, Storage};
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::path::Path;

/// JSON pipeline: extracted profile records in, the flat 14-column CSV
/// plus the lead-import CSV out.
pub struct ConvertPipeline<S: Storage> {
    storage: S,
    args: ConvertArgs,
    options: ParserOptions,
}

impl<S: Storage> ConvertPipeline<S> {
    pub fn new(storage: S, args: ConvertArgs, options: ParserOptions) -> Self {
        Self {
            storage,
            args,
            options,
        }
    }
}

#[async_trait]
impl<S: Storage> Pipeline for ConvertPipeline<S> {
    type Item = ProfileRow;

    async fn extract(&self) -> Result<Vec<SourceDoc>> {
        let files = resolve_inputs(&self.args.paths, "json")?;
        if files.is_empty() {
            return Err(EtlError::NoInput {
                paths: self.args.paths.join(", "),
            });
        }

        let mut docs = Vec::new();
        for path in files {
            match self.storage.read_file(&path.to_string_lossy()).await {
                Ok(bytes) => docs.push(SourceDoc {
                    text: String::from_utf8_lossy(&bytes).into_owned(),
                    path,
                }),
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", path.display(), e);
                }
            }
        }
        Ok(docs)
    }

    async fn transform(&self, docs: Vec<SourceDoc>) -> Result<Batch<ProfileRow>> {
        let mut batch = Batch::new();
        for doc in docs {
            match serde_json::from_str::<Profile>(&doc.text) {
                Ok(mut profile) => {
                    if profile.profile_id.is_none() {
                        profile.profile_id = filename_slug(&doc.path);
                    }
                    batch.items.push(profile_row(&profile, &self.options.convert));
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", doc.path.display(), e);
                    batch.failures.push(FileFailure {
                        path: doc.path.to_string_lossy().into_owned(),
                        error: e.to_string(),
                    });
                }
            }
        }
        Ok(batch)
    }

    async fn load(&self, batch: Batch<ProfileRow>) -> Result<RunSummary> {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let profiles_path = Path::new(&self.args.output_dir)
            .join(format!("linkedin_profiles_{timestamp}.csv"));
        let leads_path =
            Path::new(&self.args.output_dir).join(format!("lead_import_{timestamp}.csv"));

        let leads: Vec<_> = batch.items.iter().map(lead_row).collect();

        self.storage
            .write_file(
                &profiles_path.to_string_lossy(),
                &to_csv(&ProfileRow::HEADERS, &batch.items)?,
            )
            .await?;
        self.storage
            .write_file(
                &leads_path.to_string_lossy(),
                &to_csv(&LeadRow::HEADERS, &leads)?,
            )
            .await?;

        Ok(RunSummary {
            written: vec![
                profiles_path.to_string_lossy().into_owned(),
                leads_path.to_string_lossy().into_owned(),
            ],
            failures: batch.failures,
        })
    }
}

/// The header row is written up front so an all-failure batch still
/// produces well-formed CSVs.
fn to_csv<T: Serialize>(headers: &[&str], rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| EtlError::ProcessingError {
            message: e.to_string(),
        })
}
