use crate::domain::model::FilterRules;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{KwError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_positive_number, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub campaign: CampaignConfig,
    pub api: ApiConfig,
    pub targets: TargetConfig,
    #[serde(default)]
    pub filters: FilterRules,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: String,
    pub key: String,
    pub database: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub display_limit: Option<usize>,
    pub related_limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub competitors: Vec<String>,
    pub seed_keywords: Vec<String>,
    pub related_seed_count: Option<usize>,
    #[serde(default = "default_relevance_terms")]
    pub relevance_terms: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub report_filename: Option<String>,
    pub top_table: Option<usize>,
    pub top_report: Option<usize>,
}

pub fn default_relevance_terms() -> Vec<String> {
    [
        "bathtub", "tub", "tile", "refinish", "reglaz", "resurface", "shower", "bathroom",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KwError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| KwError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` placeholders with environment values, so the
    /// API key can live outside the config file.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KwError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: format!("Regex error: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("api.endpoint", &self.api.endpoint)?;
        validate_non_empty_string("api.key", &self.api.key)?;
        validate_non_empty_string("campaign.name", &self.campaign.name)?;

        validate_non_empty_list("targets.competitors", &self.targets.competitors)?;
        validate_non_empty_list("targets.seed_keywords", &self.targets.seed_keywords)?;

        validate_non_empty_string("output.path", &self.output.path)?;
        if self.output.path.contains('\0') {
            return Err(KwError::InvalidConfigValueError {
                field: "output.path".to_string(),
                value: self.output.path.clone(),
                reason: "Path contains null bytes".to_string(),
            });
        }

        validate_positive_number("api.display_limit", self.display_limit(), 1)?;
        validate_positive_number("api.related_limit", self.related_limit(), 1)?;
        validate_positive_number("api.timeout_seconds", self.timeout_seconds() as usize, 1)?;
        validate_positive_number("output.top_table", self.top_table(), 1)?;
        validate_positive_number("output.top_report", self.top_report(), 1)?;

        if self.filters.min_cpc > self.filters.max_cpc {
            return Err(KwError::InvalidConfigValueError {
                field: "filters.min_cpc".to_string(),
                value: self.filters.min_cpc.to_string(),
                reason: format!(
                    "min_cpc must not exceed max_cpc ({})",
                    self.filters.max_cpc
                ),
            });
        }

        Ok(())
    }

    pub fn database(&self) -> &str {
        self.api.database.as_deref().unwrap_or("us")
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds.unwrap_or(30)
    }

    pub fn display_limit(&self) -> usize {
        self.api.display_limit.unwrap_or(100)
    }

    pub fn related_limit(&self) -> usize {
        self.api.related_limit.unwrap_or(50)
    }

    pub fn related_seed_count(&self) -> usize {
        self.targets.related_seed_count.unwrap_or(3)
    }

    pub fn report_filename(&self) -> &str {
        self.output
            .report_filename
            .as_deref()
            .unwrap_or("semrush_analysis_results.json")
    }

    pub fn top_table(&self) -> usize {
        self.output.top_table.unwrap_or(30)
    }

    pub fn top_report(&self) -> usize {
        self.output.top_report.unwrap_or(100)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.api.endpoint
    }

    fn api_key(&self) -> &str {
        &self.api.key
    }

    fn database(&self) -> &str {
        self.database()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds()
    }

    fn display_limit(&self) -> usize {
        self.display_limit()
    }

    fn related_limit(&self) -> usize {
        self.related_limit()
    }

    fn competitors(&self) -> &[String] {
        &self.targets.competitors
    }

    fn seed_keywords(&self) -> &[String] {
        &self.targets.seed_keywords
    }

    fn related_seed_count(&self) -> usize {
        self.related_seed_count()
    }

    fn relevance_terms(&self) -> &[String] {
        &self.targets.relevance_terms
    }

    fn filter_rules(&self) -> &FilterRules {
        &self.filters
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn report_filename(&self) -> &str {
        self.report_filename()
    }

    fn top_table(&self) -> usize {
        self.top_table()
    }

    fn top_report(&self) -> usize {
        self.top_report()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
