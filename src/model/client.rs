use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use hyper_util::client::legacy::{Client, connect::HttpConnector};
use hyper_util::rt::TokioExecutor;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::ServiceError;
use crate::model::{GenerationParams, SummarizationModel};

pub type HttpClient = Client<hyper_tls::HttpsConnector<HttpConnector>, String>;

pub fn create_client() -> HttpClient {
    let https = hyper_tls::HttpsConnector::new();
    Client::builder(TokioExecutor::new()).build(https)
}

/// Wire format of an inference call: the document plus the decoding
/// parameters, as the summarization pipeline protocol expects them.
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParams,
}

/// The pipeline replies with one candidate per input document.
#[derive(Debug, Deserialize)]
struct PipelineOutput {
    summary_text: String,
}

/// Handle to the model server. Built once at startup and reused for every
/// request; holds no per-request state.
pub struct HttpModelClient {
    client: HttpClient,
    endpoint: String,
}

impl HttpModelClient {
    /// Builds the HTTP client and probes the model server once. A probe
    /// failure aborts startup so that nothing is loaded lazily on the
    /// request path.
    pub async fn connect(config: &Config) -> Result<Self, ServiceError> {
        let endpoint = format!(
            "{}/models/{}",
            config.model_server_url.trim_end_matches('/'),
            config.model_id
        );

        let handle = Self {
            client: create_client(),
            endpoint,
        };
        handle.probe().await?;

        Ok(handle)
    }

    /// Any HTTP answer counts as alive; only a connection failure is fatal.
    /// Model servers differ in what they serve on GET, so the status code
    /// is not interpreted.
    async fn probe(&self) -> Result<(), ServiceError> {
        let req = self.build_request(hyper::Method::GET, String::new())?;

        let response = self
            .client
            .request(req)
            .await
            .map_err(|e| ServiceError::ModelConnection(format!("model server unreachable: {}", e)))?;

        tracing::debug!("Model server probe answered {}", response.status());
        Ok(())
    }

    fn build_request(
        &self,
        method: hyper::Method,
        body: String,
    ) -> Result<hyper::Request<String>, ServiceError> {
        let uri: hyper::Uri = self
            .endpoint
            .parse()
            .map_err(|e| ServiceError::Http(format!("Invalid URL: {}", e)))?;

        let mut req = hyper::Request::builder()
            .method(method)
            .uri(uri.clone())
            .header(hyper::header::CONTENT_TYPE, "application/json")
            .body(body)
            .map_err(|e| ServiceError::Http(e.to_string()))?;

        // The Host header has to match the target domain for reverse
        // proxies in front of the model server to route correctly.
        if let Some(authority) = uri.authority() {
            req.headers_mut().insert(
                hyper::header::HOST,
                authority.as_str().parse().map_err(|e| {
                    ServiceError::Http(format!("Invalid host header: {}", e))
                })?,
            );
        }

        Ok(req)
    }
}

#[async_trait]
impl SummarizationModel for HttpModelClient {
    async fn summarize(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<String, ServiceError> {
        let body = serde_json::to_string(&InferenceRequest {
            inputs: text,
            parameters: params,
        })
        .map_err(|e| ServiceError::Http(format!("Failed to encode inference request: {}", e)))?;

        let req = self.build_request(hyper::Method::POST, body)?;

        let response = self
            .client
            .request(req)
            .await
            .map_err(|e| ServiceError::ModelConnection(e.to_string()))?;

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| ServiceError::Http(e.to_string()))?
            .to_bytes();

        if !status.is_success() {
            let detail = String::from_utf8_lossy(&body_bytes).to_string();
            return Err(ServiceError::InvalidResponse(format!(
                "model server returned {}: {}",
                status, detail
            )));
        }

        parse_pipeline_response(&body_bytes)
    }
}

fn parse_pipeline_response(body: &Bytes) -> Result<String, ServiceError> {
    let outputs: Vec<PipelineOutput> = serde_json::from_slice(body)
        .map_err(|e| ServiceError::InvalidResponse(format!("unparseable model output: {}", e)))?;

    outputs
        .into_iter()
        .next()
        .map(|output| output.summary_text)
        .ok_or_else(|| ServiceError::InvalidResponse("model returned no candidates".to_string()))
}
