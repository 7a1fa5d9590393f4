//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimit`]
//! information BigCommerce attaches to every API response.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-Rate-Limit-*` headers.
///
/// BigCommerce reports a per-window request quota, how many requests remain,
/// and how long until the window resets.
///
/// # Example
///
/// ```rust
/// use bigcommerce_provider::clients::RateLimit;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-rate-limit-requests-left".to_string(), vec!["149".to_string()]);
/// headers.insert("x-rate-limit-requests-quota".to_string(), vec!["150".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.requests_left, 149);
/// assert_eq!(limit.requests_quota, Some(150));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests remaining in the current window.
    pub requests_left: u32,
    /// Total requests allowed per window.
    pub requests_quota: Option<u32>,
    /// Milliseconds until the window resets.
    pub time_reset_ms: Option<u64>,
    /// Window length in milliseconds.
    pub time_window_ms: Option<u64>,
}

impl RateLimit {
    /// Parses rate limit headers from lower-cased response headers.
    ///
    /// Returns `None` when `X-Rate-Limit-Requests-Left` is absent or not a number.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        fn first<T: std::str::FromStr>(
            headers: &HashMap<String, Vec<String>>,
            name: &str,
        ) -> Option<T> {
            headers
                .get(name)
                .and_then(|values| values.first())
                .and_then(|value| value.trim().parse().ok())
        }

        Some(Self {
            requests_left: first(headers, "x-rate-limit-requests-left")?,
            requests_quota: first(headers, "x-rate-limit-requests-quota"),
            time_reset_ms: first(headers, "x-rate-limit-time-reset-ms"),
            time_window_ms: first(headers, "x-rate-limit-time-window-ms"),
        })
    }
}

/// An HTTP response from the BigCommerce API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Rate limit information, when reported.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing rate limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the resource payload.
    ///
    /// V3 endpoints wrap the resource in a `data` envelope; bodies without
    /// one are returned as-is.
    #[must_use]
    pub fn data(&self) -> &serde_json::Value {
        self.body.get("data").unwrap_or(&self.body)
    }
}
