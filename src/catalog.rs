use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

/// Every store category worth charting. Categories starting with `FAMILY`
/// are additionally split by age bracket.
pub const CATEGORIES: &[&str] = &[
    "APPLICATION",
    "ANDROID_WEAR",
    "ART_AND_DESIGN",
    "AUTO_AND_VEHICLES",
    "BEAUTY",
    "BOOKS_AND_REFERENCE",
    "BUSINESS",
    "COMICS",
    "COMMUNICATION",
    "DATING",
    "EDUCATION",
    "ENTERTAINMENT",
    "EVENTS",
    "FINANCE",
    "FOOD_AND_DRINK",
    "HEALTH_AND_FITNESS",
    "HOUSE_AND_HOME",
    "LIBRARIES_AND_DEMO",
    "LIFESTYLE",
    "MAPS_AND_NAVIGATION",
    "MEDICAL",
    "MUSIC_AND_AUDIO",
    "NEWS_AND_MAGAZINES",
    "PARENTING",
    "PERSONALIZATION",
    "PHOTOGRAPHY",
    "PRODUCTIVITY",
    "SHOPPING",
    "SOCIAL",
    "SPORTS",
    "TOOLS",
    "TRAVEL_AND_LOCAL",
    "VIDEO_PLAYERS",
    "WATCH_FACE",
    "WEATHER",
    "GAME",
    "GAME_ACTION",
    "GAME_ADVENTURE",
    "GAME_ARCADE",
    "GAME_BOARD",
    "GAME_CARD",
    "GAME_CASINO",
    "GAME_CASUAL",
    "GAME_EDUCATIONAL",
    "GAME_MUSIC",
    "GAME_PUZZLE",
    "GAME_RACING",
    "GAME_ROLE_PLAYING",
    "GAME_SIMULATION",
    "GAME_SPORTS",
    "GAME_STRATEGY",
    "GAME_TRIVIA",
    "GAME_WORD",
    "FAMILY",
    "FAMILY_ACTION",
    "FAMILY_BRAINGAMES",
    "FAMILY_CREATE",
    "FAMILY_EDUCATION",
    "FAMILY_MUSICVIDEO",
    "FAMILY_PRETEND",
];

pub const COLLECTIONS: &[&str] = &["TOP_FREE", "TOP_PAID", "GROSSING"];

pub const AGES: &[&str] = &["FIVE_UNDER", "SIX_EIGHT", "NINE_UP"];

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// One chart to request. Generated once per run, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTuple {
    pub category: String,
    pub collection: String,
    pub age: Option<String>,
}

impl QueryTuple {
    /// Key of the output file for this chart: the tuple components joined
    /// by `-`, e.g. `FAMILY_ACTION-TOP_FREE-FIVE_UNDER`.
    pub fn key(&self) -> String {
        match &self.age {
            Some(age) => format!("{}-{}-{}", self.category, self.collection, age),
            None => format!("{}-{}", self.category, self.collection),
        }
    }
}

/// Cross product of the given enumerations: every category is paired with
/// every collection, and `FAMILY*` categories are additionally crossed with
/// every age bracket. Order follows the input slices.
pub fn build_tuples(
    categories: &[&str],
    collections: &[&str],
    ages: &[&str],
) -> Vec<QueryTuple> {
    let mut tuples = Vec::new();
    for category in categories {
        for collection in collections {
            if category.starts_with("FAMILY") {
                for age in ages {
                    tuples.push(QueryTuple {
                        category: category.to_string(),
                        collection: collection.to_string(),
                        age: Some(age.to_string()),
                    });
                }
            } else {
                tuples.push(QueryTuple {
                    category: category.to_string(),
                    collection: collection.to_string(),
                    age: None,
                });
            }
        }
    }
    tuples
}

/// One ranked chart entry. Only the app id is interpreted; everything else
/// the service returns is kept as-is so chart files round-trip losslessly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartEntry {
    #[serde(rename = "appId")]
    pub app_id: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Full detail document for a single app. The record's own `appId` names
/// the output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailRecord {
    #[serde(rename = "appId")]
    pub app_id: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// The remote catalog: chart listings and per-app detail lookups.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Ranked listing for one chart, at most `num` entries.
    async fn list(
        &self,
        query: &QueryTuple,
        num: usize,
        lang: &str,
        country: &str,
    ) -> Result<Vec<ChartEntry>>;

    /// Full detail record for a single app id.
    async fn details(&self, app_id: &str, lang: &str, country: &str) -> Result<DetailRecord>;
}

/// Catalog backed by the scraper endpoint over HTTP.
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            // Client uses Arc internally so it can be cloned cheaply.
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl CatalogService for HttpCatalog {
    async fn list(
        &self,
        query: &QueryTuple,
        num: usize,
        lang: &str,
        country: &str,
    ) -> Result<Vec<ChartEntry>> {
        let num = num.to_string();
        let mut req = self.client.get(format!("{}/list", self.base_url)).query(&[
            ("category", query.category.as_str()),
            ("collection", query.collection.as_str()),
            ("num", num.as_str()),
            ("lang", lang),
            ("country", country),
        ]);
        if let Some(age) = &query.age {
            req = req.query(&[("age", age.as_str())]);
        }
        let entries = req.send().await?.error_for_status()?.json().await?;
        Ok(entries)
    }

    async fn details(&self, app_id: &str, lang: &str, country: &str) -> Result<DetailRecord> {
        let record = self
            .client
            .get(format!("{}/app/{app_id}", self.base_url))
            .query(&[("lang", lang), ("country", country)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(record)
    }
}
