use actix_web::{HttpResponse, Result, error, web};
use mongodb::bson::doc;
use validator::Validate;

use crate::models::newsletter::NewsletterRecord;
use crate::state::app_state::AppState;
use crate::structs::newsletter::SubscribeRequest;
use crate::structs::response::SuccessResponse;

/// Subscribe an email address to the newsletter
pub async fn subscribe_newsletter(
    app_state: web::Data<AppState>,
    web::Json(body): web::Json<SubscribeRequest>,
) -> Result<HttpResponse> {
    if let Err(errors) = body.validate() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    let db = &app_state.db;
    let newsletter_collection = db.collection::<NewsletterRecord>("newsletter");

    // Check if already subscribed
    let existing = newsletter_collection
        .find_one(doc! { "email": &body.email })
        .await
        .map_err(|e| error::ErrorInternalServerError(format!("Database error: {}", e)))?;

    if existing.is_some() {
        return Ok(HttpResponse::Ok().json(SuccessResponse::new(
            "You are already subscribed to our newsletter!",
        )));
    }

    let record = NewsletterRecord::new(body.email, body.name);

    newsletter_collection
        .insert_one(&record)
        .await
        .map_err(|e| error::ErrorInternalServerError(format!("Database error: {}", e)))?;

    Ok(HttpResponse::Ok().json(SuccessResponse::new(
        "Thank you for subscribing to our newsletter!",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::init_routes;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn subscribe_rejects_invalid_email() {
        let mongo_url = std::env::var("MONGO_URL")
            .unwrap_or_else(|_| String::from("mongodb://localhost:27017"));
        let client = mongodb::Client::with_uri_str(&mongo_url).await.unwrap();
        let state = web::Data::new(AppState {
            db: client.database("portfolio_unused"),
            http_client: reqwest::Client::new(),
            geo_api_url: crate::utils::geolocation::DEFAULT_GEO_API_URL.to_string(),
        });
        let app =
            test::init_service(App::new().app_data(state).configure(init_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/newsletter/subscribe")
            .set_json(serde_json::json!({ "email": "nope", "name": "Ada" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn double_subscribe_inserts_once() {
        let Ok(mongo_url) = std::env::var("MONGO_URL") else {
            eprintln!("MONGO_URL not set, skipping MongoDB-backed test");
            return;
        };
        let client = mongodb::Client::with_uri_str(&mongo_url).await.unwrap();
        let db = client.database(&format!(
            "portfolio_test_{}",
            uuid::Uuid::new_v4().simple()
        ));
        let state = web::Data::new(AppState {
            db: db.clone(),
            http_client: reqwest::Client::new(),
            geo_api_url: crate::utils::geolocation::DEFAULT_GEO_API_URL.to_string(),
        });
        let app =
            test::init_service(App::new().app_data(state).configure(init_routes)).await;

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/newsletter/subscribe")
                .set_json(serde_json::json!({ "email": "ada@example.com", "name": "Ada" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_success());
        }

        let count = db
            .collection::<NewsletterRecord>("newsletter")
            .count_documents(doc! { "email": "ada@example.com" })
            .await
            .unwrap();
        assert_eq!(count, 1);

        db.drop().await.unwrap();
    }
}
