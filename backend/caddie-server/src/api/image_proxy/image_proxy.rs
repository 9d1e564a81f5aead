//! Image proxy handler
//!
//! Retail sites and CDNs are picky about which requests they answer, so
//! the proxy walks a list of fetch strategies with decreasing header
//! richness, then falls back to an image search keyed on the file name.
//! URLs that fail everything land in the failed-URL cache.

use crate::state::AppState;

use caddie_clients::SerpApiClient;

use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use log::{debug, error, warn};
use reqwest::Client as ReqwestClient;
use serde::Deserialize;

const SUCCESS_CACHE_CONTROL: &str = "public, max-age=86400";
const FAILURE_CACHE_CONTROL: &str = "public, max-age=3600";

struct FetchStrategy {
    timeout: Duration,
    headers: &'static [(&'static str, &'static str)],
}

const STRATEGIES: &[FetchStrategy] = &[
    // Full browser headers, generous timeout
    FetchStrategy {
        timeout: Duration::from_secs(10),
        headers: &[
            (
                "User-Agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            ),
            (
                "Accept",
                "image/avif,image/webp,image/apng,image/svg+xml,image/*,*/*;q=0.8",
            ),
            ("Accept-Language", "en-US,en;q=0.9"),
            ("Cache-Control", "no-cache"),
        ],
    },
    // Alternate browser with a Google referer
    FetchStrategy {
        timeout: Duration::from_secs(8),
        headers: &[
            (
                "User-Agent",
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
            ),
            ("Accept", "image/*,*/*;q=0.8"),
            ("Referer", "https://www.google.com/"),
        ],
    },
    // Plain bot identification, short timeout
    FetchStrategy {
        timeout: Duration::from_secs(5),
        headers: &[("User-Agent", "Mozilla/5.0 (compatible; GolfClubBot/1.0)")],
    },
];

#[derive(Debug, Deserialize)]
pub struct ImageProxyQuery {
    pub url: Option<String>,
}

/// GET /api/v1/image-proxy?url=<encoded>
pub async fn image_proxy(
    State(state): State<AppState>,
    Query(query): Query<ImageProxyQuery>,
) -> Response {
    let Some(url) = query.url.filter(|u| !u.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "Missing image URL").into_response();
    };

    if state.failed_images.contains(&url) {
        debug!("Skipping known-failing image URL: {}", url);
        return unavailable();
    }

    let client = ReqwestClient::new();

    match fetch_with_strategies(&client, &url).await {
        Ok(Some((bytes, content_type))) => return success(bytes, content_type),
        Ok(None) => {}
        Err(e) => {
            error!("Image proxy failed reading body from {}: {}", url, e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load image").into_response();
        }
    }

    // Search fallback: look the product up by the file name in the URL.
    if let Some(ref key) = state.config.serpapi.api_key {
        if let Some(name) = product_name_from_url(&url) {
            let serpapi = SerpApiClient::new(&state.config.serpapi.base_url, key);
            let search = format!("{} golf club image", name);

            match serpapi.first_image_url(&search).await {
                Ok(Some(alt_url)) => match fetch_once(&client, &alt_url, &STRATEGIES[2]).await {
                    Ok(Some((bytes, content_type))) => return success(bytes, content_type),
                    Ok(None) => warn!("Fallback image fetch failed for {}", alt_url),
                    Err(e) => {
                        error!("Image proxy failed reading fallback body: {}", e);
                        return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load image")
                            .into_response();
                    }
                },
                Ok(None) => warn!("No fallback image found for \"{}\"", search),
                Err(e) => warn!("Image search fallback failed: {}", e),
            }
        }
    }

    state.failed_images.insert(url);
    unavailable()
}

/// Walk the strategy list; first 2xx wins. `Err` only for a body read
/// failing after a successful status, which is the unexpected case.
async fn fetch_with_strategies(
    client: &ReqwestClient,
    url: &str,
) -> Result<Option<(Bytes, String)>, reqwest::Error> {
    for strategy in STRATEGIES {
        if let Some(found) = fetch_once(client, url, strategy).await? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

async fn fetch_once(
    client: &ReqwestClient,
    url: &str,
    strategy: &FetchStrategy,
) -> Result<Option<(Bytes, String)>, reqwest::Error> {
    let mut request = client.get(url).timeout(strategy.timeout);
    for (name, value) in strategy.headers {
        request = request.header(*name, *value);
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            debug!("Fetch attempt for {} failed: {}", url, e);
            return Ok(None);
        }
    };

    if !response.status().is_success() {
        debug!("Fetch attempt for {} got status {}", url, response.status());
        return Ok(None);
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("image/jpeg")
        .to_string();
    let bytes = response.bytes().await?;

    Ok(Some((bytes, content_type)))
}

/// "https://cdn.example.com/imgs/ping-g430_7iron.jpg?w=400" ->
/// "ping g430 7iron"
pub(crate) fn product_name_from_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let file = path.rsplit('/').next()?;
    let stem = file.rsplit_once('.').map(|(s, _)| s).unwrap_or(file);
    let name = stem.replace(['-', '_'], " ").trim().to_string();
    (!name.is_empty()).then_some(name)
}

fn success(bytes: Bytes, content_type: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, SUCCESS_CACHE_CONTROL.to_string()),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string()),
        ],
        bytes,
    )
        .into_response()
}

fn unavailable() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CACHE_CONTROL, FAILURE_CACHE_CONTROL)],
        "Image unavailable",
    )
        .into_response()
}
