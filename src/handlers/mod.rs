pub mod analytics_handlers;
pub mod contact_handlers;
pub mod health_handlers;
pub mod newsletter_handlers;
pub mod resume_handlers;
