use actix_web::{HttpRequest, HttpResponse, Responder, Result, error, web};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, from_document};
use serde::Deserialize;
use validator::Validate;

use crate::models::visit::VisitEvent;
use crate::state::app_state::AppState;
use crate::structs::analytics::{PopularPage, RecentVisitor, StatsResponse, TrackRequest};
use crate::structs::response::SuccessResponse;
use crate::utils::client_ip::get_client_ip;
use crate::utils::country_stats::count_countries;
use crate::utils::geolocation::{GeoInfo, lookup_ip};

const POPULAR_PAGES_LIMIT: i64 = 10;
const RECENT_VISITORS_LIMIT: i64 = 20;
const RECENT_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

/// Shape of one `$group` result from the popular-pages pipeline.
#[derive(Deserialize)]
struct PageCount {
    #[serde(rename = "_id")]
    page: String,
    count: i64,
}

/// Projected read used for the country tally.
#[derive(Deserialize)]
struct CountryRow {
    country: Option<String>,
}

/// Record a page view
pub async fn track_analytics(
    app_state: web::Data<AppState>,
    req: HttpRequest,
    web::Json(body): web::Json<TrackRequest>,
) -> Result<impl Responder> {
    // Validate the request body
    if let Err(errors) = body.validate() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    let db = &app_state.db;
    let events_collection = db.collection::<VisitEvent>("analytics");

    // Resolve the caller's IP and enrich with geolocation. Lookup failures
    // degrade to the "Unknown" sentinel and must never fail ingestion.
    let client_ip = get_client_ip(&req);
    let geo = match &client_ip {
        Some(ip) => lookup_ip(&app_state.http_client, &app_state.geo_api_url, ip)
            .await
            .unwrap_or_else(|e| {
                log::warn!("Failed to get IP info for {}: {}", ip, e);
                GeoInfo::unknown()
            }),
        None => GeoInfo::unknown(),
    };

    let event = VisitEvent::new(
        body.page,
        body.session_id,
        body.timestamp,
        body.user_agent,
        body.referrer,
        client_ip,
        geo,
    );

    // Save to database
    events_collection
        .insert_one(&event)
        .await
        .map_err(|e| error::ErrorInternalServerError(format!("Database error: {}", e)))?;

    Ok(HttpResponse::Ok().json(SuccessResponse::new("Analytics tracked successfully")))
}

/// Compute the aggregate stats snapshot over all recorded visits
pub async fn get_analytics_stats(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    let db = &app_state.db;
    let events_collection = db.collection::<VisitEvent>("analytics");

    // Basic counters
    let total_views = events_collection
        .count_documents(doc! {})
        .await
        .map_err(|e| error::ErrorInternalServerError(format!("Database error: {}", e)))?;

    let unique_visitors = events_collection
        .distinct("sessionId", doc! {})
        .await
        .map_err(|e| error::ErrorInternalServerError(format!("Database error: {}", e)))?
        .len() as u64;

    // Popular pages: group by page, count descending. Ties are broken by
    // page name ascending so repeated calls return a stable order.
    let pipeline = vec![
        doc! { "$group": { "_id": "$page", "count": { "$sum": 1_i64 } } },
        doc! { "$sort": { "count": -1, "_id": 1 } },
        doc! { "$limit": POPULAR_PAGES_LIMIT },
    ];

    let mut cursor = events_collection
        .aggregate(pipeline)
        .await
        .map_err(|e| error::ErrorInternalServerError(format!("Database error: {}", e)))?;

    let mut popular_pages = Vec::new();
    while let Some(document) = cursor
        .try_next()
        .await
        .map_err(|e| error::ErrorInternalServerError(format!("Database error: {}", e)))?
    {
        let page_count: PageCount = from_document(document)
            .map_err(|e| error::ErrorInternalServerError(format!("Database error: {}", e)))?;
        popular_pages.push(PopularPage {
            page: page_count.page,
            views: page_count.count,
        });
    }

    // Recent visitors: trailing 24 hours, newest first
    let cutoff = chrono::Utc::now().timestamp_millis() - RECENT_WINDOW_MS;
    let recent_visitors: Vec<RecentVisitor> = db
        .collection::<RecentVisitor>("analytics")
        .find(doc! { "timestamp": { "$gte": cutoff } })
        .projection(doc! { "country": 1, "city": 1, "timestamp": 1, "page": 1 })
        .sort(doc! { "timestamp": -1 })
        .limit(RECENT_VISITORS_LIMIT)
        .await
        .map_err(|e| error::ErrorInternalServerError(format!("Database error: {}", e)))?
        .try_collect()
        .await
        .map_err(|e| error::ErrorInternalServerError(format!("Database error: {}", e)))?;

    // Country tally over every event, resolved client-side
    let country_rows: Vec<CountryRow> = db
        .collection::<CountryRow>("analytics")
        .find(doc! {})
        .projection(doc! { "country": 1 })
        .await
        .map_err(|e| error::ErrorInternalServerError(format!("Database error: {}", e)))?
        .try_collect()
        .await
        .map_err(|e| error::ErrorInternalServerError(format!("Database error: {}", e)))?;

    let country_stats = count_countries(country_rows.into_iter().map(|row| row.country));

    Ok(HttpResponse::Ok().json(StatsResponse {
        total_views,
        unique_visitors,
        popular_pages,
        recent_visitors,
        country_stats,
    }))
}
