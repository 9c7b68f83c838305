pub mod client;

pub use client::HttpModelClient;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ServiceError;

/// Decoding parameters sent with every inference call. The gateway freezes
/// these per process; `do_sample = false` disables sampling so generation
/// is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationParams {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

/// A ready-to-use summarization capability, shared read-only across
/// requests. The production implementation talks to a model server over
/// HTTP; tests substitute a recording double.
#[async_trait]
pub trait SummarizationModel: Send + Sync {
    async fn summarize(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<String, ServiceError>;
}
