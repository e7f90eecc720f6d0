//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! called in response to browser events.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed search degrades
//! to a message in the view without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::ApiErrorBody;
use super::types::PatientSummary;

/// Patient search endpoint; takes a `last_name` query parameter.
pub const PATIENT_SEARCH_ENDPOINT: &str = "/api/patients/search";

#[cfg(any(test, feature = "hydrate"))]
const STATUS_NOT_FOUND: u16 = 404;

#[cfg(any(test, feature = "hydrate"))]
fn search_failed_message(status: u16) -> String {
    format!("search request failed: {status}")
}

/// Failure message, with the server's `detail` appended when it sent one.
#[cfg(any(test, feature = "hydrate"))]
fn describe_failure(message: String, detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!("{message} ({detail})"),
        _ => message,
    }
}

/// Interpret a search response status: `Ok(true)` when the body carries rows,
/// `Ok(false)` when the server reported no matches.
#[cfg(any(test, feature = "hydrate"))]
fn classify_search_status(status: u16, ok: bool) -> Result<bool, String> {
    if ok {
        Ok(true)
    } else if status == STATUS_NOT_FOUND {
        Ok(false)
    } else {
        Err(search_failed_message(status))
    }
}

/// Search patients by last-name fragment via `GET /api/patients/search`.
///
/// A 404 from the server means "no patients found" and is returned as an
/// empty list.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds with
/// any other non-OK status, or the body cannot be decoded.
pub async fn search_patients(last_name: &str) -> Result<Vec<PatientSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PATIENT_SEARCH_ENDPOINT)
            .query([("last_name", last_name)])
            .send()
            .await
            .map_err(|e| e.to_string())?;
        match classify_search_status(resp.status(), resp.ok()) {
            Ok(true) => resp.json::<Vec<PatientSummary>>().await.map_err(|e| e.to_string()),
            Ok(false) => Ok(Vec::new()),
            Err(message) => {
                let body = resp.json::<ApiErrorBody>().await.ok();
                Err(describe_failure(message, body.as_ref().map(|b| b.detail.as_str())))
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = last_name;
        Err("not available on server".to_owned())
    }
}
