use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

#[derive(Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    #[validate(length(min = 1, message = "Page is required"))]
    pub page: String,
    #[validate(length(min = 1, message = "Session ID is required"))]
    pub session_id: String,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub timestamp: Option<i64>, // Epoch milliseconds, defaults to ingestion time
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PopularPage {
    pub page: String,
    pub views: i64,
}

/// Lightweight visit projection returned in the recent-visitors list. Also
/// used as the read type for the projected MongoDB query.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecentVisitor {
    pub country: Option<String>,
    pub city: Option<String>,
    pub timestamp: i64,
    pub page: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_views: u64,
    pub unique_visitors: u64,
    pub popular_pages: Vec<PopularPage>,
    pub recent_visitors: Vec<RecentVisitor>,
    pub country_stats: HashMap<String, i64>,
}
