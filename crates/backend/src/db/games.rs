//! Game catalog database operations

use chrono::{DateTime, Utc};
use deadpool_postgres::Pool;
use gamedex_core::{Game, GameInput};
use tokio_postgres::Row;

use crate::db::DbError;

fn game_from_row(row: &Row) -> Game {
    Game {
        id: row.get("id"),
        publisher_id: row.get("publisher_id"),
        name: row.get("name"),
        platform: row.get("platform"),
        store_id: row.get("store_id"),
        bundle_id: row.get("bundle_id"),
        app_version: row.get("app_version"),
        is_published: row.get("is_published"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Get the whole catalog. No ordering guarantee.
pub async fn list_games(pool: &Pool) -> Result<Vec<Game>, DbError> {
    let client = pool.get().await?;

    let rows = client.query(
        r#"
        SELECT id, publisher_id, name, platform, store_id, bundle_id,
               app_version, is_published, created_at, updated_at
        FROM games
        "#,
        &[],
    ).await?;

    Ok(rows.iter().map(game_from_row).collect())
}

/// Insert a new catalog row. Both timestamps are stamped with the current
/// time; fields the client did not send are stored as NULL.
pub async fn create_game(pool: &Pool, input: &GameInput) -> Result<Game, DbError> {
    let client = pool.get().await?;
    let now = Utc::now();

    let row = client.query_one(
        r#"
        INSERT INTO games (publisher_id, name, platform, store_id, bundle_id,
                           app_version, is_published, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        RETURNING id, publisher_id, name, platform, store_id, bundle_id,
                  app_version, is_published, created_at, updated_at
        "#,
        &[
            &input.publisher_id,
            &input.name,
            &input.platform,
            &input.store_id,
            &input.bundle_id,
            &input.app_version,
            &input.is_published,
            &now,
        ],
    ).await?;

    Ok(game_from_row(&row))
}

/// Overwrite all seven client-supplied columns of a row and restamp
/// `updated_at`. `created_at` is left alone. Returns `None` when the id
/// does not exist.
pub async fn update_game(pool: &Pool, id: i32, input: &GameInput) -> Result<Option<Game>, DbError> {
    let client = pool.get().await?;
    let now = Utc::now();

    let row = client.query_opt(
        r#"
        UPDATE games
        SET publisher_id = $2, name = $3, platform = $4, store_id = $5,
            bundle_id = $6, app_version = $7, is_published = $8, updated_at = $9
        WHERE id = $1
        RETURNING id, publisher_id, name, platform, store_id, bundle_id,
                  app_version, is_published, created_at, updated_at
        "#,
        &[
            &id,
            &input.publisher_id,
            &input.name,
            &input.platform,
            &input.store_id,
            &input.bundle_id,
            &input.app_version,
            &input.is_published,
            &now,
        ],
    ).await?;

    Ok(row.as_ref().map(game_from_row))
}

/// Hard-delete a row. Returns false when the id does not exist.
pub async fn delete_game(pool: &Pool, id: i32) -> Result<bool, DbError> {
    let client = pool.get().await?;

    let deleted = client.execute(
        "DELETE FROM games WHERE id = $1",
        &[&id],
    ).await?;

    Ok(deleted > 0)
}

/// Search the catalog: exact platform match AND substring name match.
///
/// Both criteria empty means no filter at all. Otherwise the conjunction
/// always applies: an empty name is a substring match for "" and matches
/// every row, while an empty platform matches only rows whose platform is
/// literally the empty string.
pub async fn search_games(pool: &Pool, name: &str, platform: &str) -> Result<Vec<Game>, DbError> {
    if name.is_empty() && platform.is_empty() {
        return list_games(pool).await;
    }

    let client = pool.get().await?;
    let pattern = like_pattern(name);

    let rows = client.query(
        r#"
        SELECT id, publisher_id, name, platform, store_id, bundle_id,
               app_version, is_published, created_at, updated_at
        FROM games
        WHERE platform = $1 AND name LIKE $2
        "#,
        &[&platform, &pattern],
    ).await?;

    Ok(rows.iter().map(game_from_row).collect())
}

// LIKE wildcards in the name are passed through unescaped, as the original
// search did.
fn like_pattern(name: &str) -> String {
    format!("%{}%", name)
}

/// Insert a batch of rows in a single transaction, all stamped with the
/// same timestamp. Either every row is committed or none are. Returns the
/// created rows in input order.
pub async fn bulk_insert_games(
    pool: &Pool,
    inputs: &[GameInput],
    stamp: DateTime<Utc>,
) -> Result<Vec<Game>, DbError> {
    let mut client = pool.get().await?;
    let tx = client.transaction().await?;

    let stmt = tx.prepare(
        r#"
        INSERT INTO games (publisher_id, name, platform, store_id, bundle_id,
                           app_version, is_published, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        RETURNING id, publisher_id, name, platform, store_id, bundle_id,
                  app_version, is_published, created_at, updated_at
        "#,
    ).await?;

    let mut created = Vec::with_capacity(inputs.len());
    for input in inputs {
        let row = tx.query_one(
            &stmt,
            &[
                &input.publisher_id,
                &input.name,
                &input.platform,
                &input.store_id,
                &input.bundle_id,
                &input.app_version,
                &input.is_published,
                &stamp,
            ],
        ).await?;
        created.push(game_from_row(&row));
    }

    tx.commit().await?;
    Ok(created)
}
