//! CORS policy from the configured origin list.

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the CORS layer for `origins`.
///
/// A `*` entry allows every origin. Otherwise only the listed origins are
/// allowed; entries that are not valid header values are skipped.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            // Browsers send the origin without a trailing slash
            let origin = origin.trim_end_matches('/');
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin, "Skipping invalid CORS origin");
                    None
                }
            }
        })
        .collect();

    tracing::debug!(count = allowed.len(), "CORS allow-list configured");
    layer.allow_origin(AllowOrigin::list(allowed))
}
