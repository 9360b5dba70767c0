//! Catalog entity and request body types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A mobile application listing in the catalog.
///
/// JSON wire format is camelCase (`publisherId`, `storeId`, ...). All
/// client-supplied columns are nullable; only the id and the timestamps
/// are always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i32,
    pub publisher_id: Option<String>,
    pub name: Option<String>,
    pub platform: Option<String>,
    pub store_id: Option<String>,
    pub bundle_id: Option<String>,
    pub app_version: Option<String>,
    pub is_published: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The seven client-supplied fields of a create or update request.
///
/// Every field is optional and a key absent from the body deserializes to
/// `None`. Updates write all seven columns unconditionally, so an absent
/// key wipes the stored value. Timestamps are never taken from the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameInput {
    pub publisher_id: Option<String>,
    pub name: Option<String>,
    pub platform: Option<String>,
    pub store_id: Option<String>,
    pub bundle_id: Option<String>,
    pub app_version: Option<String>,
    pub is_published: Option<bool>,
}

/// Body of POST /api/games/search.
///
/// A missing key behaves like an empty criterion. Both criteria empty
/// means "return everything".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub name: String,
    pub platform: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_serializes_with_camel_case_keys() {
        let now = Utc::now();
        let game = Game {
            id: 7,
            publisher_id: Some("321".to_string()),
            name: Some("Clash of Clans".to_string()),
            platform: Some("android".to_string()),
            store_id: Some("com.supercell.clashofclans".to_string()),
            bundle_id: Some("com.supercell.clashofclans".to_string()),
            app_version: Some("14.0.1".to_string()),
            is_published: Some(true),
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&game).unwrap();
        for key in [
            "id",
            "publisherId",
            "name",
            "platform",
            "storeId",
            "bundleId",
            "appVersion",
            "isPublished",
            "createdAt",
            "updatedAt",
        ] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
    }

    #[test]
    fn game_input_missing_keys_deserialize_to_none() {
        let input: GameInput = serde_json::from_str(r#"{"name": "Clash"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("Clash"));
        assert!(input.publisher_id.is_none());
        assert!(input.platform.is_none());
        assert!(input.store_id.is_none());
        assert!(input.bundle_id.is_none());
        assert!(input.app_version.is_none());
        assert!(input.is_published.is_none());
    }

    #[test]
    fn game_input_reads_camel_case_keys() {
        let input: GameInput = serde_json::from_str(
            r#"{"publisherId": "1", "storeId": "s", "bundleId": "b", "appVersion": "2.0", "isPublished": false}"#,
        )
        .unwrap();
        assert_eq!(input.publisher_id.as_deref(), Some("1"));
        assert_eq!(input.store_id.as_deref(), Some("s"));
        assert_eq!(input.bundle_id.as_deref(), Some("b"));
        assert_eq!(input.app_version.as_deref(), Some("2.0"));
        assert_eq!(input.is_published, Some(false));
    }

    #[test]
    fn search_request_defaults_to_empty_criteria() {
        let req: SearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.name, "");
        assert_eq!(req.platform, "");
    }
}
