use serde::Serialize;

/// Response for the seed endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupResponse {
    pub message: String,
    pub clubs_inserted: i64,
}
