pub mod client;
pub mod etl;
pub mod parse;
pub mod pipeline;
pub mod report;
pub mod score;

pub use crate::domain::model::{AnalysisReport, Harvest, ScoredKeyword};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
