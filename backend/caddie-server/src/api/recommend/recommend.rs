//! Recommendation handler: cache probe, candidate generation, catalog
//! reconciliation, enrichment, ranking, explanations.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::recommend::recommendation_dto::RecommendationDto;
use crate::state::AppState;

use caddie_clients::{OpenAiClient, SerpApiClient};
use caddie_core::{Club, NewClub, ScoredClub, UserInput, engine, matching};
use caddie_db::repositories::recommendation_cache_repository::DEFAULT_TTL;
use caddie_db::{ClubRepository, RecommendationCacheRepository};

use axum::{Json, extract::State};
use futures::future::join_all;
use log::{info, warn};

/// Per-request cap on synthesized catalog entries. The model rarely names
/// more than a couple of unknown iron sets for one profile.
const MAX_ENRICHMENTS: usize = 4;

/// POST /api/v1/recommend
///
/// Rank the catalog for a user profile. Candidate names come from the
/// language model; unknown names are synthesized into catalog rows before
/// the scoring pass runs.
pub async fn recommend(
    State(state): State<AppState>,
    Json(input): Json<UserInput>,
) -> ApiResult<Json<Vec<RecommendationDto>>> {
    let config = state.config.as_ref();
    let Some(ref api_key) = config.openai.api_key else {
        return Err(ApiError::not_configured("OpenAI API key"));
    };
    if !config.database.is_configured() {
        return Err(ApiError::not_configured("Database connection"));
    }

    let openai = OpenAiClient::new(&config.openai.base_url, api_key, &config.openai.model);
    let clubs = ClubRepository::new(state.pool.clone());
    let cache = RecommendationCacheRepository::new(state.pool.clone());

    // A fresh cache entry skips candidate generation and enrichment. Only
    // the ranked ids are cached; explanations are regenerated.
    if let Some(ids) = cache
        .find_fresh(input.handicap, input.goal, input.budget, DEFAULT_TTL)
        .await?
    {
        let cached = clubs.find_by_ids(&ids).await?;
        if cached.len() == ids.len() {
            info!(
                "Cache hit for handicap={} goal={} budget={}",
                input.handicap,
                input.goal.as_str(),
                input.budget.as_str()
            );
            let ranked = engine::recommend(&input, &cached);
            let dtos = render(&openai, &input, ranked, None).await?;
            return Ok(Json(dtos));
        }
        // Ids point at rows that no longer exist (catalog was reseeded).
        warn!("Cache entry references missing clubs, recomputing");
    }

    let catalog = clubs.find_all().await?;
    let suggestions = openai.suggest_clubs(&input, &catalog).await?;
    info!("Model suggested {} candidates", suggestions.model_names.len());

    let mut unknown: Vec<&String> = suggestions
        .model_names
        .iter()
        .filter(|name| matching::find_club(&catalog, name).is_none())
        .collect();
    unknown.truncate(MAX_ENRICHMENTS);

    if !unknown.is_empty() {
        let serpapi = config
            .serpapi
            .api_key
            .as_ref()
            .map(|key| SerpApiClient::new(&config.serpapi.base_url, key));

        let results = join_all(
            unknown
                .iter()
                .map(|name| enrich_club(name, &openai, serpapi.as_ref(), &clubs)),
        )
        .await;

        let added = results.iter().flatten().count();
        if added > 0 {
            info!("Enriched catalog with {} synthesized clubs", added);
        }
    }

    // Re-read so the scoring pass sees enrichment output.
    let catalog = clubs.find_all().await?;
    let ranked = engine::recommend(&input, &catalog);
    if ranked.is_empty() {
        info!("No catalog club fits handicap {}", input.handicap);
        return Ok(Json(Vec::new()));
    }

    let ids: Vec<i64> = ranked.iter().map(|s| s.club.id).collect();
    cache
        .upsert(input.handicap, input.goal, input.budget, &ids)
        .await?;

    let dtos = render(&openai, &input, ranked, Some(&suggestions.reasoning)).await?;
    Ok(Json(dtos))
}

/// Fetch per-club explanations and attach them to the ranked list. Clubs
/// the model leaves out fall back to the candidate-generation reasoning,
/// then to a deterministic sentence.
async fn render(
    openai: &OpenAiClient,
    input: &UserInput,
    ranked: Vec<ScoredClub>,
    reasoning: Option<&str>,
) -> ApiResult<Vec<RecommendationDto>> {
    let refs: Vec<&Club> = ranked.iter().map(|s| &s.club).collect();
    let explanations = openai.explanations(input, &refs).await?;

    Ok(ranked
        .into_iter()
        .map(|scored| {
            let explanation = explanations
                .get(&scored.club.model)
                .cloned()
                .or_else(|| {
                    reasoning
                        .map(String::from)
                        .filter(|r| !r.is_empty())
                })
                .unwrap_or_else(|| {
                    format!(
                        "{} lines up with your handicap range and {} priority.",
                        scored.club.full_name(),
                        input.goal.as_str()
                    )
                });
            RecommendationDto::from_scored(scored, explanation)
        })
        .collect())
}

/// Turn an unknown model name into a catalog row: synthesize attributes,
/// search for an image, sanity-check, insert. Failures are logged and the
/// name is dropped; enrichment never fails the request.
async fn enrich_club(
    name: &str,
    openai: &OpenAiClient,
    serpapi: Option<&SerpApiClient>,
    clubs: &ClubRepository,
) -> Option<i64> {
    let attrs = match openai.synthesize_club(name).await {
        Ok(attrs) => attrs,
        Err(e) => {
            warn!("Attribute synthesis for \"{}\" failed: {}", name, e);
            return None;
        }
    };

    // Suggestions usually carry the brand; store the bare model name so
    // "brand model" stays the display form.
    let model = name
        .strip_prefix(attrs.brand.as_str())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(name)
        .to_string();

    let image_url = match serpapi {
        Some(client) => {
            let query = format!("{} {} golf club image", attrs.brand, model);
            match client.first_image_url(&query).await {
                Ok(url) => url,
                Err(e) => {
                    warn!("Image search for \"{}\" failed: {}", name, e);
                    None
                }
            }
        }
        None => None,
    }
    .unwrap_or_else(|| caddie_core::catalog::PLACEHOLDER_IMAGE.to_string());

    let club = NewClub {
        brand: attrs.brand,
        model,
        category: attrs.category,
        handicap_min: attrs.handicap_min,
        handicap_max: attrs.handicap_max,
        key_strengths: attrs.key_strengths,
        price_point: attrs.price_point,
        approximate_price: attrs.approximate_price,
        image_url,
    };

    if !club.handicap_range_is_sane() {
        warn!(
            "Rejecting synthesized club \"{}\": handicap range {}-{}",
            name, club.handicap_min, club.handicap_max
        );
        return None;
    }

    match clubs.insert(&club).await {
        Ok(id) => {
            info!("Added \"{} {}\" to the catalog (id {})", club.brand, club.model, id);
            Some(id)
        }
        Err(e) => {
            warn!("Failed to insert synthesized club \"{}\": {}", name, e);
            None
        }
    }
}
