//! CORS policy: static origin allow-list, credentials allowed.
//!
//! Methods and headers are mirrored from the preflight request because
//! wildcards cannot be combined with credentials.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::error_handler::AppError;

/// Builds the CORS layer for `origins`.
///
/// # Errors
/// `AppError::Config` for `*` or values that are not valid header values.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, AppError> {
    let mut allowed = Vec::with_capacity(origins.len());
    for origin in origins {
        if origin == "*" {
            return Err(AppError::Config(
                "CORS_ALLOWED_ORIGINS: `*` cannot be used with credentials".into(),
            ));
        }
        let value = HeaderValue::from_str(origin).map_err(|_| {
            AppError::Config(format!("CORS_ALLOWED_ORIGINS: invalid origin `{origin}`"))
        })?;
        allowed.push(value);
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
