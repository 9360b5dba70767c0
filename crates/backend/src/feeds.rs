//! Store feed integration for the populate endpoint
//!
//! Both feeds are S3-hosted JSON snapshots of the top-100 charts, one per
//! platform. Each document is an array of rank groups, each group an array
//! of entries.

use chrono::{DateTime, NaiveTime, Utc};
use gamedex_core::GameInput;

const ANDROID_FEED_URL: &str =
    "https://interview-marketing-eng-dev.s3.eu-west-1.amazonaws.com/android.top100.json";
const IOS_FEED_URL: &str =
    "https://interview-marketing-eng-dev.s3.eu-west-1.amazonaws.com/ios.top100.json";

/// One entry of a store feed document (only the fields the catalog keeps)
#[derive(Debug, serde::Deserialize)]
pub struct FeedEntry {
    #[serde(default)]
    pub publisher_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default, rename = "appId")]
    pub app_id: Option<String>,
    #[serde(default)]
    pub bundle_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// A feed document: entries grouped into sub-arrays by rank block
type FeedDocument = Vec<Vec<FeedEntry>>;

/// Fetch both top-100 feeds and flatten them into insertable rows.
pub async fn fetch_top100(client: &reqwest::Client) -> Result<Vec<GameInput>, String> {
    fetch_feeds(client, ANDROID_FEED_URL, IOS_FEED_URL).await
}

/// Fetch two feed documents in parallel and flatten their entries, Android
/// first, into one mapped list. A failure on either side aborts the whole
/// import before anything is mapped.
pub async fn fetch_feeds(
    client: &reqwest::Client,
    android_url: &str,
    ios_url: &str,
) -> Result<Vec<GameInput>, String> {
    let (android, ios) = tokio::try_join!(
        fetch_feed(client, android_url),
        fetch_feed(client, ios_url),
    )?;

    Ok(android
        .into_iter()
        .chain(ios)
        .flatten()
        .map(map_entry)
        .collect())
}

async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<FeedDocument, String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| format!("Network error fetching {}: {}", url, e))?;

    if !response.status().is_success() {
        return Err(format!("Feed {} returned status: {}", url, response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse feed {}: {}", url, e))
}

/// Rename feed fields onto catalog columns. Imported entries are always
/// published.
fn map_entry(entry: FeedEntry) -> GameInput {
    GameInput {
        publisher_id: entry.publisher_id,
        name: entry.name,
        platform: entry.os,
        store_id: entry.app_id,
        bundle_id: entry.bundle_id,
        app_version: entry.version,
        is_published: Some(true),
    }
}

/// Timestamp for imported rows: today at midnight UTC. The feeds carry no
/// timestamps of their own and imported rows keep date precision only.
pub fn import_stamp() -> DateTime<Utc> {
    Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc()
}
