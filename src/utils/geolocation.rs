use serde::Deserialize;
use std::time::Duration;

/// Placeholder value stored when geolocation fails or is skipped.
pub const UNKNOWN: &str = "Unknown";

/// Default lookup endpoint (ipapi.co free tier).
pub const DEFAULT_GEO_API_URL: &str = "https://ipapi.co";

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoInfo {
    pub country: String,
    pub city: String,
    pub region: String,
}

impl GeoInfo {
    pub fn unknown() -> Self {
        Self {
            country: UNKNOWN.to_string(),
            city: UNKNOWN.to_string(),
            region: UNKNOWN.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct IpApiResponse {
    country_name: Option<String>,
    city: Option<String>,
    region: Option<String>,
}

impl From<IpApiResponse> for GeoInfo {
    fn from(resp: IpApiResponse) -> Self {
        Self {
            country: resp.country_name.unwrap_or_else(|| UNKNOWN.to_string()),
            city: resp.city.unwrap_or_else(|| UNKNOWN.to_string()),
            region: resp.region.unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

/// Look up country/city/region for an IP address against the given lookup
/// service base URL (see [`DEFAULT_GEO_API_URL`]).
///
/// Bounded by a 5 second timeout; callers are expected to substitute
/// [`GeoInfo::unknown`] on error rather than failing the request.
pub async fn lookup_ip(
    client: &reqwest::Client,
    base_url: &str,
    ip: &str,
) -> Result<GeoInfo, reqwest::Error> {
    let url = format!("{}/{}/json/", base_url.trim_end_matches('/'), ip);
    let response = client
        .get(&url)
        .timeout(LOOKUP_TIMEOUT)
        .send()
        .await?
        .error_for_status()?;

    let body: IpApiResponse = response.json().await?;
    Ok(GeoInfo::from(body))
}
