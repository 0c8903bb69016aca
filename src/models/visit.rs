use crate::utils::geolocation::GeoInfo;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded page view. Inserted on every tracked visit, never updated.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VisitEvent {
    pub id: String, // Pre-generated unique identifier, immutable once assigned
    pub session_id: String,
    pub page: String,
    pub timestamp: i64, // Epoch milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
}

impl VisitEvent {
    pub fn new(
        page: String,
        session_id: String,
        timestamp: Option<i64>,
        user_agent: Option<String>,
        referrer: Option<String>,
        ip: Option<String>,
        geo: GeoInfo,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            session_id,
            page,
            timestamp: timestamp.unwrap_or_else(|| chrono::Utc::now().timestamp_millis()),
            user_agent,
            ip,
            country: Some(geo.country),
            city: Some(geo.city),
            referrer,
        }
    }
}
