use mongodb::{Client, Database};
use std::env;

/// Connect to MongoDB and return a handle to the configured database.
pub async fn get_database() -> Result<Database, mongodb::error::Error> {
    let mongo_url = env::var("MONGO_URL").expect("MONGO_URL not set.");
    let db_name = env::var("DB_NAME").unwrap_or_else(|_| String::from("portfolio"));

    let client = Client::with_uri_str(&mongo_url).await?;
    Ok(client.database(&db_name))
}
