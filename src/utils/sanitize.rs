/// Basic sanitization for free-text form fields: escape angle brackets,
/// cap the length (appending "..." when truncated) and trim whitespace.
pub fn sanitize_string(text: &str, max_length: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let sanitized = text.replace('<', "&lt;").replace('>', "&gt;");

    let truncated = if sanitized.chars().count() > max_length {
        let mut cut: String = sanitized.chars().take(max_length).collect();
        cut.push_str("...");
        cut
    } else {
        sanitized
    };

    truncated.trim().to_string()
}
