//! Game catalog route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use gamedex_core::{Game, GameInput, SearchRequest};
use std::sync::Arc;

use crate::AppState;

/// List the whole catalog, unfiltered and unpaginated
/// GET /api/games
pub async fn get_games(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Game>>, (StatusCode, Json<serde_json::Value>)> {
    match crate::db::list_games(&state.db_pool).await {
        Ok(games) => Ok(Json(games)),
        Err(e) => {
            tracing::error!("Failed to list games: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": format!("Failed to list games: {}", e)}))
            ))
        }
    }
}

/// Create a catalog entry from the seven client-supplied fields. Keys
/// absent from the body are stored as NULL; the server stamps both
/// timestamps and generates the id.
/// POST /api/games
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GameInput>,
) -> Result<Json<Game>, (StatusCode, Json<serde_json::Value>)> {
    match crate::db::create_game(&state.db_pool, &body).await {
        Ok(game) => {
            tracing::info!(id = %game.id, "Game created");
            Ok(Json(game))
        }
        Err(e) => {
            tracing::error!("Failed to create game: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": format!("Failed to create game: {}", e)}))
            ))
        }
    }
}

/// Overwrite all seven fields of an existing entry. A key absent from the
/// body wipes the stored value; the id and `created_at` are untouched.
/// PUT /api/games/{id}
pub async fn update_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(body): Json<GameInput>,
) -> Result<Json<Game>, (StatusCode, Json<serde_json::Value>)> {
    match crate::db::update_game(&state.db_pool, id, &body).await {
        Ok(Some(game)) => Ok(Json(game)),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": format!("No game with id {}", id)}))
        )),
        Err(e) => {
            tracing::error!("Failed to update game {}: {:?}", id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": format!("Failed to update game: {}", e)}))
            ))
        }
    }
}

#[derive(serde::Serialize)]
pub struct DeleteGameResponse {
    pub id: i32,
}

/// Permanently remove an entry, answering with its id
/// DELETE /api/games/{id}
pub async fn delete_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteGameResponse>, (StatusCode, Json<serde_json::Value>)> {
    match crate::db::delete_game(&state.db_pool, id).await {
        Ok(true) => Ok(Json(DeleteGameResponse { id })),
        Ok(false) => Err((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": format!("No game with id {}", id)}))
        )),
        Err(e) => {
            tracing::error!("Failed to delete game {}: {:?}", id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": format!("Failed to delete game: {}", e)}))
            ))
        }
    }
}

/// Search the catalog by exact platform AND name substring. Both criteria
/// empty returns everything.
/// POST /api/games/search
pub async fn search_games(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchRequest>,
) -> Result<Json<Vec<Game>>, (StatusCode, Json<serde_json::Value>)> {
    match crate::db::search_games(&state.db_pool, &body.name, &body.platform).await {
        Ok(games) => Ok(Json(games)),
        Err(e) => {
            tracing::error!("Failed to search games: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": format!("Failed to search games: {}", e)}))
            ))
        }
    }
}
