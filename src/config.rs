use std::env;

use crate::model::GenerationParams;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub model_server_url: String,
    pub model_id: String,
    pub max_summary_length: u32,
    pub min_summary_length: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists (for development)
        dotenvy::dotenv().ok();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid PORT value: {}", e))?;

        let model_server_url =
            env::var("MODEL_SERVER_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());

        let model_id = env::var("MODEL_ID")
            .unwrap_or_else(|_| "Falconsai/medical_summarization".to_string());

        let max_summary_length = env::var("MAX_SUMMARY_LENGTH")
            .unwrap_or_else(|_| "2000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid MAX_SUMMARY_LENGTH value: {}", e))?;

        let min_summary_length = env::var("MIN_SUMMARY_LENGTH")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid MIN_SUMMARY_LENGTH value: {}", e))?;

        Ok(Config {
            port,
            model_server_url,
            model_id,
            max_summary_length,
            min_summary_length,
        })
    }

    /// Decoding bounds are fixed per process; callers cannot influence them.
    /// Sampling stays off so the same input yields the same summary.
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            max_length: self.max_summary_length,
            min_length: self.min_summary_length,
            do_sample: false,
        }
    }
}
