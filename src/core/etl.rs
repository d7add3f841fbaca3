use crate::domain::model::RunSummary;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        println!("Starting ETL process...");

        println!("Extracting data...");
        let docs = self.pipeline.extract().await?;
        println!("Resolved {} input file(s)", docs.len());

        println!("Transforming data...");
        let batch = self.pipeline.transform(docs).await?;
        println!(
            "Transformed {} record(s), {} failure(s)",
            batch.items.len(),
            batch.failures.len()
        );

        println!("Loading data...");
        let summary = self.pipeline.load(batch).await?;
        println!("Wrote {} output file(s)", summary.written.len());

        Ok(summary)
    }
}
