use crate::domain::model::{AnalysisReport, FilterRules, Harvest};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn database(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn display_limit(&self) -> usize;
    fn related_limit(&self) -> usize;
    fn competitors(&self) -> &[String];
    fn seed_keywords(&self) -> &[String];
    fn related_seed_count(&self) -> usize;
    fn relevance_terms(&self) -> &[String];
    fn filter_rules(&self) -> &FilterRules;
    fn output_path(&self) -> &str;
    fn report_filename(&self) -> &str;
    fn top_table(&self) -> usize;
    fn top_report(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Harvest>;
    async fn transform(&self, data: Harvest) -> Result<AnalysisReport>;
    async fn load(&self, report: AnalysisReport) -> Result<String>;
}
