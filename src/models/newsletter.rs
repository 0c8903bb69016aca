use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterRecord {
    pub id: String,
    pub email: String,
    pub name: String,
    pub subscribed_at: i64,
    pub status: String, // active, unsubscribed
}

impl NewsletterRecord {
    pub fn new(email: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            name,
            subscribed_at: chrono::Utc::now().timestamp_millis(),
            status: String::from("active"),
        }
    }
}
