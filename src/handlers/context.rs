use axum::http::{header, HeaderMap};

/// Hostname the image was uploaded under.
///
/// A configured override wins; otherwise the request's `Host` header is
/// used verbatim, port included. `None` means the lookup cannot be made.
pub fn resolve_hostname(hostname_override: Option<&str>, headers: &HeaderMap) -> Option<String> {
    if let Some(host) = hostname_override {
        return Some(host.to_string());
    }
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(str::to_string)
}
