use crate::domain::model::{Batch, RunSummary, SourceDoc};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Three-phase pipeline: resolve and read inputs, transform them with
/// per-file failure isolation, write the outputs.
#[async_trait]
pub trait Pipeline: Send + Sync {
    type Item: Send;

    async fn extract(&self) -> Result<Vec<SourceDoc>>;
    async fn transform(&self, docs: Vec<SourceDoc>) -> Result<Batch<Self::Item>>;
    async fn load(&self, batch: Batch<Self::Item>) -> Result<RunSummary>;
}
