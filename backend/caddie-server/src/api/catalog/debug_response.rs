use crate::api::catalog::club_dto::ClubDto;

use serde::Serialize;

/// Catalog dump for the debug endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugResponse {
    pub message: String,
    pub total_clubs: i64,
    pub clubs: Vec<ClubDto>,
}
