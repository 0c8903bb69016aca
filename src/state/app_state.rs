use mongodb::Database;

/// Shared application state, cloned into every worker.
pub struct AppState {
    pub db: Database,
    pub http_client: reqwest::Client,
    pub geo_api_url: String,
}
