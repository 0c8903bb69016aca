use actix_web::{HttpRequest, HttpResponse, Result, error, web};
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use validator::Validate;

use crate::models::contact::ContactRecord;
use crate::state::app_state::AppState;
use crate::structs::contact::ContactRequest;
use crate::structs::response::SuccessResponse;
use crate::utils::client_ip::get_client_ip;
use crate::utils::sanitize::sanitize_string;

const MAX_SUBJECT_LENGTH: usize = 200;
const MAX_MESSAGE_LENGTH: usize = 5000;
const MESSAGES_PAGE_SIZE: i64 = 100;

/// Accept a contact-form submission
pub async fn submit_contact(
    app_state: web::Data<AppState>,
    req: HttpRequest,
    web::Json(body): web::Json<ContactRequest>,
) -> Result<HttpResponse> {
    if let Err(errors) = body.validate() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    let db = &app_state.db;
    let contacts_collection = db.collection::<ContactRecord>("contacts");

    let client_ip = get_client_ip(&req);
    let subject = sanitize_string(&body.subject, MAX_SUBJECT_LENGTH);
    let message = sanitize_string(&body.message, MAX_MESSAGE_LENGTH);

    let record = ContactRecord::new(
        body.first_name,
        body.last_name,
        body.email,
        subject,
        message,
        client_ip,
    );

    contacts_collection
        .insert_one(&record)
        .await
        .map_err(|e| error::ErrorInternalServerError(format!("Database error: {}", e)))?;

    log::info!("New contact message from {}: {}", record.email, record.subject);

    Ok(HttpResponse::Ok().json(SuccessResponse::with_data(
        "Thank you for your message! We will get back to you within 24-48 hours.",
        serde_json::json!({ "submitted": true }),
    )))
}

/// List stored contact messages, newest first
pub async fn get_contact_messages(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    let db = &app_state.db;
    let contacts_collection = db.collection::<ContactRecord>("contacts");

    let messages: Vec<ContactRecord> = contacts_collection
        .find(doc! {})
        .sort(doc! { "timestamp": -1 })
        .limit(MESSAGES_PAGE_SIZE)
        .await
        .map_err(|e| error::ErrorInternalServerError(format!("Database error: {}", e)))?
        .try_collect()
        .await
        .map_err(|e| error::ErrorInternalServerError(format!("Database error: {}", e)))?;

    Ok(HttpResponse::Ok().json(SuccessResponse::with_data(
        "Contact messages retrieved",
        serde_json::json!({ "messages": messages }),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::init_routes;
    use actix_web::{App, test};

    async fn test_state(db_name: &str) -> web::Data<AppState> {
        let mongo_url = std::env::var("MONGO_URL")
            .unwrap_or_else(|_| String::from("mongodb://localhost:27017"));
        let client = mongodb::Client::with_uri_str(&mongo_url).await.unwrap();
        web::Data::new(AppState {
            db: client.database(db_name),
            http_client: reqwest::Client::new(),
            geo_api_url: crate::utils::geolocation::DEFAULT_GEO_API_URL.to_string(),
        })
    }

    #[actix_web::test]
    async fn contact_rejects_invalid_email() {
        let state = test_state("portfolio_unused").await;
        let app =
            test::init_service(App::new().app_data(state).configure(init_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "not-an-email",
                "subject": "Hi",
                "message": "Hello"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn contact_round_trip_sanitizes_message() {
        if std::env::var("MONGO_URL").is_err() {
            eprintln!("MONGO_URL not set, skipping MongoDB-backed test");
            return;
        }
        let db_name = format!("portfolio_test_{}", uuid::Uuid::new_v4().simple());
        let state = test_state(&db_name).await;
        let db = state.db.clone();
        let app =
            test::init_service(App::new().app_data(state).configure(init_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "subject": "<b>Hi</b>",
                "message": "See <script>alert(1)</script>"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let stored = db
            .collection::<ContactRecord>("contacts")
            .find_one(doc! { "email": "ada@example.com" })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.subject, "&lt;b&gt;Hi&lt;/b&gt;");
        assert_eq!(stored.message, "See &lt;script&gt;alert(1)&lt;/script&gt;");
        assert_eq!(stored.status, "new");

        db.drop().await.unwrap();
    }
}
