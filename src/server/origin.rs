//! Browser origin allow-list and the CORS policy built from it.

use super::handlers::AppState;
use crate::{Error, Result, error::ChatError};
use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, header},
    middleware::Next,
    response::Response,
};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

pub const PREFLIGHT_MAX_AGE_SECS: u64 = 3600;

/// Origins permitted to call the API from a browser.
#[derive(Debug, Clone)]
pub struct AllowedOrigins {
    origins: Vec<String>,
    header_values: Vec<HeaderValue>,
}

impl AllowedOrigins {
    /// Fails if any entry cannot be sent back as a header value.
    pub fn new<I, S>(origins: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let origins: Vec<String> = origins.into_iter().map(Into::into).collect();

        let header_values = origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| Error::config(format!("Invalid allowed origin: {:?}", origin)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            origins,
            header_values,
        })
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.origins.iter().any(|allowed| allowed == origin)
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    /// POST with `Content-Type` only, no credentials, preflight cached for an hour.
    pub fn cors_layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.header_values.clone()))
            .allow_methods([Method::POST])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(false)
            .max_age(Duration::from_secs(PREFLIGHT_MAX_AGE_SECS))
    }
}

/// Rejects requests whose `Origin` header is present but not allow-listed.
/// Requests without an `Origin` header pass through.
pub async fn origin_filter(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> std::result::Result<Response, ChatError> {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        let allowed = origin
            .to_str()
            .map(|o| state.allowed_origins.contains(o))
            .unwrap_or(false);

        if !allowed {
            warn!("Rejected request from origin {:?}", origin);
            return Err(ChatError::OriginRejected);
        }
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_exact_match_only() {
        let origins =
            AllowedOrigins::new(["http://localhost:3000", "https://pantheon.example.com"]).unwrap();

        assert_eq!(origins.len(), 2);
        assert!(origins.contains("http://localhost:3000"));
        assert!(origins.contains("https://pantheon.example.com"));
        assert!(!origins.contains("http://localhost:3001"));
        assert!(!origins.contains("https://pantheon.example.com/"));
        assert!(!origins.contains("https://evil.example"));
    }

    #[test]
    fn test_invalid_origin_is_config_error() {
        let result = AllowedOrigins::new(["http://ok.example", "bad\norigin"]);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_empty_allow_list() {
        let origins = AllowedOrigins::new(Vec::<String>::new()).unwrap();
        assert!(origins.is_empty());
        assert!(!origins.contains("http://localhost:3000"));
    }
}
