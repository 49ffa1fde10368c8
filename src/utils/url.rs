//! URL building for backend endpoints.
//!
//! Percent-encoding matches JavaScript `encodeURIComponent` so the backend
//! sees exactly what the browser would send from a form or link. The encoder
//! is written out rather than calling `js_sys::encode_uri_component` so URL
//! building also runs in native tests.

use crate::config::{API_BASE, endpoints};

/// Characters `encodeURIComponent` leaves as-is besides ASCII alphanumerics.
const UNRESERVED_MARKS: &[u8] = b"-_.!~*'()";

/// Percent-encode a string like JavaScript `encodeURIComponent`.
pub fn encode_uri_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || UNRESERVED_MARKS.contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}

/// Full URL of a backend endpoint.
pub fn endpoint(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

/// Listing URL for a storage path.
pub fn list_url(path: &str) -> String {
    format!(
        "{}?path={}",
        endpoint(endpoints::LIST),
        encode_uri_component(path)
    )
}

/// Raw-content URL for a file (download link and preview source).
pub fn open_url(path: &str) -> String {
    format!(
        "{}/{}",
        endpoint(endpoints::OPEN),
        encode_uri_component(path)
    )
}
