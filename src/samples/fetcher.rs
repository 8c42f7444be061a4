use crate::samples::error::SampleError;
use crate::samples::extractor::{extract_samples, ExtractedSamples};
use crate::samples::query::SampleQuery;
use log::{info, warn};
use reqwest::Client;

/// Issues `getSamples` requests. One GET per call: no timeout, retry or backoff
/// beyond what the supplied [`Client`] is configured with.
pub struct SampleFetcher {
    client: Client,
}

impl SampleFetcher {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Sends `query` to `endpoint` and returns the raw response body.
    pub async fn fetch_body(
        &self,
        endpoint: &str,
        query: &SampleQuery,
    ) -> Result<String, SampleError> {
        let url = query.to_url(endpoint)?;
        let url_text = url.to_string();
        info!("Requesting samples of {} from {}", query.variable, url_text);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SampleError::NetworkRequest(url_text.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url_text, e);
                return Err(if let Some(status) = e.status() {
                    SampleError::HttpStatus {
                        url: url_text,
                        status,
                        source: e,
                    }
                } else {
                    SampleError::NetworkRequest(url_text, e)
                });
            }
        };

        response
            .text()
            .await
            .map_err(|e| SampleError::ResponseBody(url_text, e))
    }

    /// Fetches and extracts the valid samples of `query.variable`.
    pub async fn fetch(
        &self,
        endpoint: &str,
        query: &SampleQuery,
    ) -> Result<ExtractedSamples, SampleError> {
        let body = self.fetch_body(endpoint, query).await?;
        extract_samples(&body, &query.variable)
    }
}

impl Default for SampleFetcher {
    fn default() -> Self {
        Self::new()
    }
}
