use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting keyword analysis...");

        println!("Collecting SEMrush data...");
        let harvest = self.pipeline.extract().await?;
        println!(
            "Collected {} paid and {} related keywords from {} competitors",
            harvest.paid_pool.len(),
            harvest.related.len(),
            harvest.competitors.len()
        );

        println!("Scoring keywords...");
        let report = self.pipeline.transform(harvest).await?;
        println!("✅ Total keywords found: {}", report.total_keywords);

        let output_path = self.pipeline.load(report).await?;
        println!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
