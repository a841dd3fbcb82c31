use crate::core::client::SemrushClient;
use crate::core::{parse, report, score};
use crate::domain::model::{AnalysisReport, CompetitorKeywords, Harvest};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;

/// The whole analysis as extract/transform/load: fetch competitor and seed
/// keyword data from SEMrush, merge/filter/score it, then print the ranking
/// and persist the JSON report.
pub struct KeywordPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: SemrushClient,
}

impl<S: Storage, C: ConfigProvider> KeywordPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let client = SemrushClient::new(
            config.api_endpoint().to_string(),
            config.api_key().to_string(),
            config.database().to_string(),
            config.timeout_seconds(),
            config.display_limit(),
            config.related_limit(),
        );
        Self {
            storage,
            config,
            client,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for KeywordPipeline<S, C> {
    /// Sequential fetch over the work list. A failed call is logged and
    /// contributes no data; the run always continues.
    async fn extract(&self) -> Result<Harvest> {
        let mut harvest = Harvest::default();

        for domain in self.config.competitors() {
            tracing::info!("📊 Analyzing competitor: {}", domain);

            let organic = match self.client.domain_organic(domain).await {
                Ok(body) => parse::parse_organic(&body, self.config.relevance_terms())?,
                Err(e) => {
                    tracing::warn!("⚠️ Organic keywords for {} unavailable: {}", domain, e);
                    Vec::new()
                }
            };

            let paid = match self.client.domain_adwords(domain).await {
                Ok(body) => parse::parse_adwords(&body, domain, self.config.relevance_terms())?,
                Err(e) => {
                    tracing::warn!("⚠️ Paid keywords for {} unavailable: {}", domain, e);
                    Vec::new()
                }
            };

            tracing::info!(
                "✅ {}: {} organic, {} paid keywords",
                domain,
                organic.len(),
                paid.len()
            );

            harvest.paid_pool.extend(paid.iter().cloned());
            harvest
                .competitors
                .insert(domain.clone(), CompetitorKeywords { organic, paid });
        }

        for seed in self.config.seed_keywords() {
            tracing::info!("🔑 Getting data for: {}", seed);
            match self.client.phrase_this(seed).await {
                Ok(body) => {
                    if let Some(metrics) = parse::parse_phrase_metrics(&body, seed)? {
                        tracing::info!(
                            "✅ {}: Vol={}, CPC=${:.2}",
                            metrics.keyword,
                            metrics.volume,
                            metrics.cpc
                        );
                        harvest.seed_metrics.push(metrics);
                    }
                }
                Err(e) => tracing::warn!("⚠️ Metrics for '{}' unavailable: {}", seed, e),
            }
        }

        // Related lookups are capped to hold down API usage.
        let related_seeds = self
            .config
            .seed_keywords()
            .iter()
            .take(self.config.related_seed_count());
        for seed in related_seeds {
            tracing::info!("🔗 Getting related keywords for: {}", seed);
            match self.client.phrase_related(seed).await {
                Ok(body) => {
                    let related = parse::parse_related(&body)?;
                    tracing::info!("✅ Found {} related keywords for '{}'", related.len(), seed);
                    harvest.related.extend(related);
                }
                Err(e) => tracing::warn!("⚠️ Related keywords for '{}' unavailable: {}", seed, e),
            }
        }

        Ok(harvest)
    }

    async fn transform(&self, data: Harvest) -> Result<AnalysisReport> {
        let merged = score::merge_keywords(&data.paid_pool, &data.related);
        tracing::debug!("{} unique keywords after merge", merged.len());

        let scored = score::filter_and_score(merged, self.config.filter_rules());

        Ok(AnalysisReport {
            timestamp: chrono::Local::now().to_rfc3339(),
            competitors_analyzed: self.config.competitors().to_vec(),
            total_keywords: scored.len(),
            top_keywords: scored.iter().take(self.config.top_table()).cloned().collect(),
            all_keywords: scored
                .into_iter()
                .take(self.config.top_report())
                .collect(),
        })
    }

    async fn load(&self, report: AnalysisReport) -> Result<String> {
        println!("\n🔝 TOP {} KEYWORDS:", report.top_keywords.len());
        println!("{}", report::format_table(&report.top_keywords));

        let json = serde_json::to_vec_pretty(&report)?;
        let filename = self.config.report_filename();
        self.storage.write_file(filename, &json).await?;

        let output_path = format!("{}/{}", self.config.output_path(), filename);
        tracing::info!("💾 Results saved to: {}", output_path);
        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FilterRules;
    use crate::utils::error::KwError;
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        endpoint: String,
        competitors: Vec<String>,
        seeds: Vec<String>,
        relevance: Vec<String>,
        rules: FilterRules,
    }

    impl MockConfig {
        fn new(endpoint: String) -> Self {
            Self {
                endpoint,
                competitors: vec!["miraclemethod.com".to_string()],
                seeds: vec!["bathtub refinishing seattle".to_string()],
                relevance: crate::config::toml_config::default_relevance_terms(),
                rules: FilterRules::default(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn api_endpoint(&self) -> &str {
            &self.endpoint
        }
        fn api_key(&self) -> &str {
            "test-key"
        }
        fn database(&self) -> &str {
            "us"
        }
        fn timeout_seconds(&self) -> u64 {
            5
        }
        fn display_limit(&self) -> usize {
            100
        }
        fn related_limit(&self) -> usize {
            50
        }
        fn competitors(&self) -> &[String] {
            &self.competitors
        }
        fn seed_keywords(&self) -> &[String] {
            &self.seeds
        }
        fn related_seed_count(&self) -> usize {
            3
        }
        fn relevance_terms(&self) -> &[String] {
            &self.relevance
        }
        fn filter_rules(&self) -> &FilterRules {
            &self.rules
        }
        fn output_path(&self) -> &str {
            "test_output"
        }
        fn report_filename(&self) -> &str {
            "semrush_analysis_results.json"
        }
        fn top_table(&self) -> usize {
            30
        }
        fn top_report(&self) -> usize {
            100
        }
    }

    fn mock_semrush(server: &MockServer) {
        server.mock(|when, then| {
            when.method(GET).query_param("type", "domain_organic");
            then.status(200).body(
                "Keyword;Position;Search Volume;CPC;Competition;Trends\n\
                 bathtub refinishing seattle;1;500;8;0.5;0.8",
            );
        });
        server.mock(|when, then| {
            when.method(GET).query_param("type", "domain_adwords");
            then.status(200).body(
                "Keyword;Position;Search Volume;CPC;Competition\n\
                 bathtub refinishing seattle;1;500;8;0.5\n\
                 diy tub paint kit;1;900;4;0.2",
            );
        });
        server.mock(|when, then| {
            when.method(GET).query_param("type", "phrase_this");
            then.status(200).body(
                "Keyword;Search Volume;CPC;Competition;Number of Results;Trends\n\
                 bathtub refinishing seattle;500;8;0.5;100000;0.9",
            );
        });
        server.mock(|when, then| {
            when.method(GET).query_param("type", "phrase_related");
            then.status(200).body(
                "Keyword;Search Volume;CPC;Competition;Number of Results\n\
                 bathtub refinishing seattle;450;7;0.4;90000\n\
                 shower reglazing cost;300;6;0.3;50000",
            );
        });
    }

    #[tokio::test]
    async fn test_paid_and_related_duplicate_merge_to_one_entry() {
        let server = MockServer::start();
        mock_semrush(&server);

        let pipeline = KeywordPipeline::new(MockStorage::new(), MockConfig::new(server.url("/")));

        let harvest = pipeline.extract().await.unwrap();
        // "diy tub paint kit" contains "tub", so relevance keeps both rows.
        assert_eq!(harvest.paid_pool.len(), 2);
        assert_eq!(harvest.related.len(), 2);
        assert_eq!(harvest.seed_metrics.len(), 1);

        let report = pipeline.transform(harvest).await.unwrap();

        // "diy tub paint kit" is dropped on negative terms; the related
        // duplicate of the paid keyword does not create a second entry or
        // bump the counter.
        let entry = report
            .all_keywords
            .iter()
            .find(|k| k.keyword == "bathtub refinishing seattle")
            .unwrap();
        assert_eq!(entry.competitors_using, 1);
        assert!(report
            .all_keywords
            .iter()
            .all(|k| !k.keyword.contains("diy")));

        let survivor = report
            .all_keywords
            .iter()
            .find(|k| k.keyword == "shower reglazing cost")
            .unwrap();
        assert_eq!(survivor.competitors_using, 0);
    }

    #[tokio::test]
    async fn test_api_failure_yields_empty_harvest_not_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(500);
        });

        let pipeline = KeywordPipeline::new(MockStorage::new(), MockConfig::new(server.url("/")));

        let harvest = pipeline.extract().await.unwrap();
        assert!(harvest.paid_pool.is_empty());
        assert!(harvest.related.is_empty());
        assert!(harvest.seed_metrics.is_empty());
        // Competitors are still recorded, just with no data.
        assert_eq!(harvest.competitors.len(), 1);
    }

    #[tokio::test]
    async fn test_load_writes_report_through_storage() {
        let server = MockServer::start();
        mock_semrush(&server);

        let storage = MockStorage::new();
        let pipeline = KeywordPipeline::new(storage.clone(), MockConfig::new(server.url("/")));

        let harvest = pipeline.extract().await.unwrap();
        let report = pipeline.transform(harvest).await.unwrap();
        let output_path = pipeline.load(report).await.unwrap();

        assert_eq!(output_path, "test_output/semrush_analysis_results.json");

        let bytes = storage
            .get_file("semrush_analysis_results.json")
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["competitors_analyzed"][0], "miraclemethod.com");
        assert!(value["timestamp"].as_str().unwrap().contains('T'));
        assert_eq!(
            value["total_keywords"].as_u64().unwrap() as usize,
            value["all_keywords"].as_array().unwrap().len()
        );
    }

    #[tokio::test]
    async fn test_storage_failure_is_fatal() {
        struct FailingStorage;
        impl Storage for FailingStorage {
            async fn write_file(&self, _path: &str, _data: &[u8]) -> Result<()> {
                Err(KwError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only filesystem",
                )))
            }
        }

        let server = MockServer::start();
        mock_semrush(&server);

        let pipeline = KeywordPipeline::new(FailingStorage, MockConfig::new(server.url("/")));
        let harvest = pipeline.extract().await.unwrap();
        let report = pipeline.transform(harvest).await.unwrap();
        assert!(pipeline.load(report).await.is_err());
    }
}
