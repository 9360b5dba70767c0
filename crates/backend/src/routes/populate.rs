//! Bulk import route handler

use axum::{extract::State, http::StatusCode, Json};
use gamedex_core::Game;
use std::sync::Arc;

use crate::feeds;
use crate::AppState;

/// Fetch both store feeds and load every entry into the catalog in one
/// bulk insert. Nothing is written unless both fetches succeed, and the
/// insert itself is all-or-nothing.
/// GET /api/games/populate
pub async fn populate_games(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Game>>, (StatusCode, Json<serde_json::Value>)> {
    let rows = match feeds::fetch_top100(&state.http).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to fetch store feeds: {}", e);
            return Err((
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({"error": format!("Failed to fetch store feeds: {}", e)}))
            ));
        }
    };

    match crate::db::bulk_insert_games(&state.db_pool, &rows, feeds::import_stamp()).await {
        Ok(games) => {
            tracing::info!(count = %games.len(), "Imported store feed entries");
            Ok(Json(games))
        }
        Err(e) => {
            tracing::error!("Failed to import store feed entries: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": format!("Failed to import store feed entries: {}", e)}))
            ))
        }
    }
}
