use actix_web::{HttpResponse, Result, error, http, web};

use crate::state::app_state::AppState;

/// Build the download header, quoting the filename so spaces and other
/// special characters survive intact.
fn attachment_header(filename: &str) -> String {
    format!("attachment; filename=\"{}\"", filename)
}

/// Fetch the hosted resume and stream it back as a PDF attachment
pub async fn download_resume(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    let resume_url = std::env::var("RESUME_URL")
        .map_err(|_| error::ErrorInternalServerError("RESUME_URL not set"))?;
    let filename =
        std::env::var("RESUME_FILENAME").unwrap_or_else(|_| String::from("resume.pdf"));

    let response = app_state
        .http_client
        .get(&resume_url)
        .send()
        .await
        .map_err(|e| error::ErrorInternalServerError(format!("Failed to download resume: {}", e)))?
        .error_for_status()
        .map_err(|e| {
            error::ErrorInternalServerError(format!("Failed to download resume: {}", e))
        })?;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .append_header((
            http::header::CONTENT_DISPOSITION,
            attachment_header(&filename),
        ))
        .streaming(response.bytes_stream()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_header_quotes_filename() {
        assert_eq!(
            attachment_header("resume.pdf"),
            "attachment; filename=\"resume.pdf\""
        );
    }

    #[test]
    fn attachment_header_preserves_spaces() {
        assert_eq!(
            attachment_header("My Resume (2026).pdf"),
            "attachment; filename=\"My Resume (2026).pdf\""
        );
    }
}
