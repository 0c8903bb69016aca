use actix_web::web;

use crate::handlers::analytics_handlers::{get_analytics_stats, track_analytics};
use crate::handlers::contact_handlers::{get_contact_messages, submit_contact};
use crate::handlers::health_handlers::{health_check, root};
use crate::handlers::newsletter_handlers::subscribe_newsletter;
use crate::handlers::resume_handlers::download_resume;

/// Configure the routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("", web::get().to(root))
            .route("/analytics/track", web::post().to(track_analytics))
            .route("/analytics/stats", web::get().to(get_analytics_stats))
            .route("/contact", web::post().to(submit_contact))
            .route("/contact/messages", web::get().to(get_contact_messages))
            .route("/newsletter/subscribe", web::post().to(subscribe_newsletter))
            .route("/resume/download", web::get().to(download_resume))
            .route("/health/check", web::get().to(health_check)),
    );
}
