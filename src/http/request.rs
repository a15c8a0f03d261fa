//! Request adapters.
//!
//! # Responsibilities
//! - Expose axum requests to the router as method + path
//! - Read or generate the request ID
//! - Parse the query string into the pipeline's parameter map

use axum::http::{HeaderValue, Request};
use url::form_urlencoded;
use uuid::Uuid;

use crate::routing::{ParamMap, RoutedRequest};

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

impl<B> RoutedRequest for Request<B> {
    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    fn path(&self) -> &str {
        self.uri().path()
    }
}

/// The inbound `x-request-id`, or a fresh UUID v4.
pub fn request_id<B>(req: &Request<B>) -> String {
    req.headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Header value for a request ID, if it is valid header text.
pub fn request_id_header(id: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(id).ok()
}

/// Decode the request's query string; later duplicates win.
pub fn query_params<B>(req: &Request<B>) -> ParamMap {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
