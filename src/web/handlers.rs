//! HTTP handlers for the value store API

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use bytes::Bytes;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::store::AgentStore;

/// Shared application state
pub type AppState = Arc<AgentStore>;

/// JSON envelope for a stored value
#[derive(Debug, Serialize)]
pub struct ValueResponse {
    /// The identification the value is stored under
    pub identification: String,
    /// The stored value
    pub value: String,
}

/// JSON envelope for the not-found condition
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// The error message
    pub error: String,
}

/// JSON envelope for the diagnostic home page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    /// The identification of the requesting client
    pub identification: String,
    /// Number of identifications with a stored value
    pub num_entries: usize,
}

/// Extract the identification key from the request headers
///
/// The key is the raw bytes of the User-Agent header. A missing header is the
/// empty identification; the store accepts it like any other key.
fn identification(headers: &HeaderMap) -> Bytes {
    headers
        .get(header::USER_AGENT)
        .map(|v| Bytes::copy_from_slice(v.as_bytes()))
        .unwrap_or_else(Bytes::new)
}

/// Render opaque bytes for a JSON envelope
fn lossy_string(bytes: &Bytes) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Fetch the value stored for the requesting client
pub async fn get_value(State(store): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let id = identification(&headers);
    debug!("GET value for identification '{}'", lossy_string(&id));

    match store.get(&id) {
        Ok(value) => (
            StatusCode::OK,
            Json(ValueResponse {
                identification: lossy_string(&id),
                value: lossy_string(&value),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// Store the raw request body as the value for the requesting client
pub async fn upsert_value(
    State(store): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let id = identification(&headers);
    debug!(
        "UPSERT {} byte value for identification '{}'",
        body.len(),
        lossy_string(&id)
    );

    let stored = store.upsert(id.clone(), body);

    (
        StatusCode::OK,
        Json(ValueResponse {
            identification: lossy_string(&id),
            value: lossy_string(&stored),
        }),
    )
}

/// Remove the value stored for the requesting client
pub async fn delete_value(State(store): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let id = identification(&headers);
    debug!("DELETE value for identification '{}'", lossy_string(&id));

    match store.delete(&id) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// Home page handler - reports the requesting client and the entry count
pub async fn home_handler(State(store): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let id = identification(&headers);

    (
        StatusCode::OK,
        Json(HomeResponse {
            identification: lossy_string(&id),
            num_entries: store.len(),
        }),
    )
}
