use crate::config::cli::ExtractArgs;
use crate::config::options::ParserOptions;
use crate::core::inputs::{filename_slug, resolve_inputs};
use crate::domain::model::{Batch, FileFailure, Profile, RunSummary, SourceDoc};
use crate::domain::ports::{Pipeline, Storage};
use crate::extract::diag::TracingSink;
use crate::extract::profile::ProfileParser;
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// HTML pipeline: saved profile pages in, one JSON record per page out,
/// written alongside the source with an extension swap.
pub struct ExtractPipeline<S: Storage> {
    storage: S,
    args: ExtractArgs,
    parser: ProfileParser,
}

#[derive(Debug, Clone)]
pub struct ExtractedProfile {
    pub source: PathBuf,
    pub profile: Profile,
}

impl<S: Storage> ExtractPipeline<S> {
    pub fn new(storage: S, args: ExtractArgs, options: ParserOptions) -> Self {
        Self {
            storage,
            args,
            parser: ProfileParser::new(options),
        }
    }
}

#[async_trait]
impl<S: Storage> Pipeline for ExtractPipeline<S> {
    type Item = ExtractedProfile;

    async fn extract(&self) -> Result<Vec<SourceDoc>> {
        let files = resolve_inputs(&self.args.paths, "html")?;
        if files.is_empty() {
            return Err(EtlError::NoInput {
                paths: self.args.paths.join(", "),
            });
        }

        let mut docs = Vec::new();
        for path in files {
            match self.storage.read_file(&path.to_string_lossy()).await {
                Ok(bytes) => docs.push(SourceDoc {
                    // Decoding errors are replaced, not fatal.
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

    async fn transform(&self, docs: Vec<SourceDoc>) -> Result<Batch<ExtractedProfile>> {
        let mut batch = Batch::new();
        for doc in docs {
            let mut sink = TracingSink;
            let mut profile = self.parser.parse(&doc.text, &mut sink);
            if profile.profile_id.is_none() {
                profile.profile_id = filename_slug(&doc.path);
            }
            tracing::debug!(
                "Parsed {} | name={:?} roles={} education={}",
                doc.path.display(),
                profile.name,
                profile.experience.len(),
                profile.education.len()
            );
            batch.items.push(ExtractedProfile {
                source: doc.path,
                profile,
            });
        }
        Ok(batch)
    }

    async fn load(&self, batch: Batch<ExtractedProfile>) -> Result<RunSummary> {
        let mut summary = RunSummary {
            failures: batch.failures,
            ..Default::default()
        };

        for item in batch.items {
            let out_path = match filename_slug(&item.source) {
                Some(slug) if self.args.rename => {
                    item.source.with_file_name(format!("{slug}.json"))
                }
                _ => item.source.with_extension("json"),
            };
            let result = serde_json::to_string_pretty(&item.profile)
                .map_err(EtlError::from)
                .map(|json| (out_path.clone(), json));
            let written = match result {
                Ok((path, json)) => {
                    self.storage
                        .write_file(&path.to_string_lossy(), json.as_bytes())
                        .await
                }
                Err(e) => Err(e),
            };
            match written {
                Ok(()) => summary.written.push(out_path.to_string_lossy().into_owned()),
                Err(e) => {
                    tracing::warn!("Failed to write {}: {}", out_path.display(), e);
                    summary.failures.push(FileFailure {
                        path: item.source.to_string_lossy().into_owned(),
                        error: e.to_string(),
                    });
                }
            }
        }
        Ok(summary)
    }
}
