pub mod analytics;
pub mod contact;
pub mod newsletter;
pub mod response;
