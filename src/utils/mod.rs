pub mod client_ip;
pub mod country_stats;
pub mod geolocation;
pub mod sanitize;
