use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A contact-form submission stored in the inbox.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: i64,
    pub status: String, // new, read, replied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

impl ContactRecord {
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        subject: String,
        message: String,
        ip: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            first_name,
            last_name,
            email,
            subject,
            message,
            timestamp: chrono::Utc::now().timestamp_millis(),
            status: String::from("new"),
            ip,
        }
    }
}
