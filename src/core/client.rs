use crate::utils::error::{KwError, Result};
use reqwest::Client;
use std::time::Duration;

const ORGANIC_COLUMNS: &str = "Ph,Po,Nq,Cp,Co,Tr";
const ADWORDS_COLUMNS: &str = "Ph,Po,Nq,Cp,Co";
const PHRASE_COLUMNS: &str = "Ph,Nq,Cp,Co,Nr,Td";
const RELATED_COLUMNS: &str = "Ph,Nq,Cp,Co,Nr";

/// Thin wrapper over the SEMrush analytics API. Each call issues exactly
/// one GET with the access key appended; there are no retries.
pub struct SemrushClient {
    client: Client,
    endpoint: String,
    key: String,
    database: String,
    timeout: Duration,
    display_limit: usize,
    related_limit: usize,
}

impl SemrushClient {
    pub fn new(
        endpoint: String,
        key: String,
        database: String,
        timeout_seconds: u64,
        display_limit: usize,
        related_limit: usize,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            key,
            database,
            timeout: Duration::from_secs(timeout_seconds),
            display_limit,
            related_limit,
        }
    }

    /// Keywords a domain ranks for organically.
    pub async fn domain_organic(&self, domain: &str) -> Result<String> {
        self.fetch(&[
            ("type", "domain_organic".to_string()),
            ("domain", domain.to_string()),
            ("display_limit", self.display_limit.to_string()),
            ("export_columns", ORGANIC_COLUMNS.to_string()),
        ])
        .await
    }

    /// Keywords a domain bids on in paid search.
    pub async fn domain_adwords(&self, domain: &str) -> Result<String> {
        self.fetch(&[
            ("type", "domain_adwords".to_string()),
            ("domain", domain.to_string()),
            ("display_limit", self.display_limit.to_string()),
            ("export_columns", ADWORDS_COLUMNS.to_string()),
        ])
        .await
    }

    /// Metrics for a single phrase.
    pub async fn phrase_this(&self, phrase: &str) -> Result<String> {
        self.fetch(&[
            ("type", "phrase_this".to_string()),
            ("phrase", phrase.to_string()),
            ("export_columns", PHRASE_COLUMNS.to_string()),
        ])
        .await
    }

    /// Phrases related to a seed phrase.
    pub async fn phrase_related(&self, phrase: &str) -> Result<String> {
        self.fetch(&[
            ("type", "phrase_related".to_string()),
            ("phrase", phrase.to_string()),
            ("display_limit", self.related_limit.to_string()),
            ("export_columns", RELATED_COLUMNS.to_string()),
        ])
        .await
    }

    async fn fetch(&self, params: &[(&str, String)]) -> Result<String> {
        tracing::debug!("Making API request to: {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .query(params)
            .query(&[
                ("database", self.database.as_str()),
                ("key", self.key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(KwError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
