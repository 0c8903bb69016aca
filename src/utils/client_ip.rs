use actix_web::HttpRequest;

/// Resolve the caller's IP address.
///
/// Checks proxy headers first (`X-Forwarded-For` may carry a comma-separated
/// chain, the first entry is the original client), then `X-Real-IP`, and
/// finally falls back to the transport-level peer address.
pub fn get_client_ip(req: &HttpRequest) -> Option<String> {
    if let Some(forwarded) = req
        .headers()
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return Some(first.to_string());
            }
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP").and_then(|v| v.to_str().ok()) {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return Some(real_ip.to_string());
        }
    }

    req.peer_addr().map(|addr| addr.ip().to_string())
}
