//! Chat-completion client for candidate generation, attribute synthesis,
//! and per-club explanations.

use crate::{ClientError, Result as ClientResult};

use std::collections::HashMap;
use std::time::Duration;

use caddie_core::{Category, Club, KeyStrength, PricePoint, UserInput};
use log::warn;
use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use serde_json::{Value, json};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Candidate list returned by the first chat-completion call.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelSuggestions {
    pub model_names: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
}

/// Structured attributes synthesized for a club the catalog does not know.
/// The enum fields reject anything outside the fixed vocabularies at parse
/// time, so a sanity check on the handicap range is all that remains before
/// insertion.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClubAttributes {
    pub brand: String,
    pub category: Category,
    pub handicap_min: i32,
    pub handicap_max: i32,
    pub key_strengths: Vec<KeyStrength>,
    pub price_point: PricePoint,
    #[serde(default)]
    pub approximate_price: Option<i32>,
}

/// Client for an OpenAI-compatible chat-completion API
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: ReqwestClient,
}

impl OpenAiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://api.openai.com/v1")
    /// * `api_key` - Bearer token
    /// * `model` - Chat model name (e.g., "gpt-3.5-turbo")
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Ask for iron-set candidates for a user profile. The catalog is listed
    /// in the prompt so the model prefers known entries, but it may name
    /// models outside the list.
    pub async fn suggest_clubs(
        &self,
        input: &UserInput,
        catalog: &[Club],
    ) -> ClientResult<ModelSuggestions> {
        let listing = catalog
            .iter()
            .map(|c| {
                format!(
                    "- {} ({}, handicap {}-{}, {})",
                    c.full_name(),
                    c.category.as_str(),
                    c.handicap_min,
                    c.handicap_max,
                    c.price_point.as_str()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let mut profile = format!(
            "Handicap: {}\nPrimary goal: {}\nBudget: {}",
            input.handicap,
            input.goal.as_str(),
            input.budget.as_str()
        );
        if let Some(ref brand) = input.preferred_brand {
            profile.push_str(&format!("\nPreferred brand: {}", brand));
        }
        if let Some(age) = input.age {
            profile.push_str(&format!("\nAge: {}", age));
        }
        if let Some(speed) = input.club_speed {
            profile.push_str(&format!("\nDriver swing speed: {} mph", speed));
        }

        let user = format!(
            "Known iron sets:\n{}\n\nGolfer profile:\n{}\n\n\
             Suggest up to 8 iron-set models for this golfer. Prefer models \
             from the known list but you may add well-known models that are \
             not listed. Respond with JSON only, in the exact shape \
             {{\"modelNames\": [\"...\"], \"reasoning\": \"...\"}}.",
            listing, profile
        );

        let content = self
            .chat(
                "You are a golf equipment expert helping golfers choose iron sets.",
                &user,
            )
            .await?;

        let suggestions: ModelSuggestions = serde_json::from_str(strip_code_fence(&content))?;
        Ok(suggestions)
    }

    /// Synthesize catalog attributes for a model name the catalog does not
    /// contain.
    pub async fn synthesize_club(&self, model_name: &str) -> ClientResult<ClubAttributes> {
        let user = format!(
            "Describe the golf iron set \"{}\". Respond with JSON only, in the \
             exact shape {{\"brand\": \"...\", \"category\": \"...\", \
             \"handicapMin\": 0, \"handicapMax\": 36, \
             \"keyStrengths\": [\"...\"], \"pricePoint\": \"...\", \
             \"approximatePrice\": 1000}}. \
             category must be one of \"Game Improvement\", \"Player's Distance\", \
             \"Player's Iron\", \"Blade\". keyStrengths entries must be among \
             \"Forgiveness\", \"Distance\", \"Feel\", \"Workability\". \
             pricePoint must be one of \"Budget\", \"Mid-range\", \"Premium\". \
             approximatePrice is the USD street price for a 7-club set.",
            model_name
        );

        let content = self
            .chat(
                "You are a golf equipment expert with precise product knowledge.",
                &user,
            )
            .await?;

        let attrs: ClubAttributes = serde_json::from_str(strip_code_fence(&content))?;
        Ok(attrs)
    }

    /// One short explanation per ranked club, keyed by the club's model name.
    /// Clubs the model leaves out are handled by the caller.
    pub async fn explanations(
        &self,
        input: &UserInput,
        clubs: &[&Club],
    ) -> ClientResult<HashMap<String, String>> {
        let listing = clubs
            .iter()
            .map(|c| {
                format!(
                    "- {} (model name: \"{}\", {}, handicap {}-{}, {})",
                    c.full_name(),
                    c.model,
                    c.category.as_str(),
                    c.handicap_min,
                    c.handicap_max,
                    c.price_point.as_str()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let user = format!(
            "A golfer with handicap {}, primary goal {}, and budget {} was \
             recommended these iron sets:\n{}\n\n\
             For each, write one or two sentences explaining why it fits this \
             golfer. Respond with JSON only: an object whose keys are the \
             model names exactly as given and whose values are the \
             explanations.",
            input.handicap,
            input.goal.as_str(),
            input.budget.as_str(),
            listing
        );

        let content = self
            .chat(
                "You are a golf equipment expert helping golfers choose iron sets.",
                &user,
            )
            .await?;

        let explanations: HashMap<String, String> =
            serde_json::from_str(strip_code_fence(&content))?;
        Ok(explanations)
    }

    /// One chat-completion round trip; returns the assistant message content.
    async fn chat(&self, system: &str, user: &str) -> ClientResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "temperature": 0.7,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("Chat completion returned status {}: {}", status, text);
            return Err(ClientError::api(status.as_u16(), text));
        }

        let body: Value = response.json().await?;
        let content = body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| ClientError::malformed("completion has no message content"))?;

        Ok(content.to_string())
    }
}

/// Models sometimes wrap their JSON in a markdown code fence; strip it.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
