//! SerpAPI Google Images client, used for enrichment and as the image
//! proxy's last-resort source.

use crate::{ClientError, Result as ClientResult};

use std::time::Duration;

use log::warn;
use reqwest::Client as ReqwestClient;
use serde_json::Value;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for SerpAPI image search
pub struct SerpApiClient {
    base_url: String,
    api_key: String,
    client: ReqwestClient,
}

impl SerpApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://serpapi.com")
    /// * `api_key` - SerpAPI key
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// First image URL for a query, or `None` when the search comes back
    /// empty. Prefers the full-size image, falls back to the thumbnail.
    pub async fn first_image_url(&self, query: &str) -> ClientResult<Option<String>> {
        let url = format!("{}/search.json", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .query(&[
                ("engine", "google_images"),
                ("q", query),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("Image search returned status {}: {}", status, text);
            return Err(ClientError::api(status.as_u16(), text));
        }

        let body: Value = response.json().await?;
        let first = body
            .get("images_results")
            .and_then(|r| r.get(0))
            .map(|entry| {
                entry
                    .get("original")
                    .or_else(|| entry.get("thumbnail"))
                    .and_then(|v| v.as_str())
                    .map(String::from)
                    .ok_or_else(|| {
                        ClientError::malformed("image result has neither original nor thumbnail")
                    })
            })
            .transpose()?;

        Ok(first)
    }
}
