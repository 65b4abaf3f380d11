//! Embedding rendered output as `data:` URIs.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// MIME type for a layout engine output format.
pub fn mime_type(format: &str) -> &'static str {
    match format.split(':').next().unwrap_or_default() {
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// `data:<mime>;base64,<payload>` for inline embedding in HTML or Markdown.
pub fn data_uri(bytes: &[u8], format: &str) -> String {
    format!("data:{};base64,{}", mime_type(format), STANDARD.encode(bytes))
}
