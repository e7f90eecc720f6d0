//! Patient REST routes.
//!
//! Handlers translate between HTTP and `services::patient`; every failure is
//! answered with a status code and a `{"detail": ...}` JSON body. Extractors
//! are taken as `Result` so a malformed body, query, or id gets the same
//! shape instead of axum's plain-text rejection.

#[cfg(test)]
#[path = "patients_test.rs"]
mod patients_test;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::services::patient::{self, NewPatient, PatientError, PatientSummary};
use crate::state::AppState;

pub(crate) type ApiError = (StatusCode, Json<serde_json::Value>);

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub last_name: Option<String>,
}

/// `POST /api/patients` — create a patient and its FHIR resource.
pub async fn create_patient(
    State(state): State<AppState>,
    body: Result<Json<NewPatient>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let Json(body) = body.map_err(|r| rejection_response(r.status(), &r.body_text()))?;
    let record = patient::create_patient(state.patients.as_ref(), &body)
        .await
        .map_err(patient_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Patient created successfully",
            "patient_id": record.id,
            "fhir_data": record.fhir,
        })),
    ))
}

/// `GET /api/patients/search?last_name=` — case-insensitive last-name search.
pub async fn search_patients(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<PatientSummary>>, ApiError> {
    let Query(query) = query.map_err(|r| rejection_response(r.status(), &r.body_text()))?;
    let fragment = query.last_name.unwrap_or_default();
    let rows = patient::search_patients(state.patients.as_ref(), &fragment)
        .await
        .map_err(patient_error_response)?;
    Ok(Json(rows))
}

/// `GET /api/patients/:id` — the stored FHIR `Patient` resource.
pub async fn get_patient(
    State(state): State<AppState>,
    patient_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Path(patient_id) = patient_id.map_err(|r| rejection_response(r.status(), &r.body_text()))?;
    let resource = patient::get_patient_resource(state.patients.as_ref(), patient_id)
        .await
        .map_err(patient_error_response)?;
    Ok(Json(resource))
}

/// `DELETE /api/patients/:id` — remove a patient.
pub async fn delete_patient(
    State(state): State<AppState>,
    patient_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Path(patient_id) = patient_id.map_err(|r| rejection_response(r.status(), &r.body_text()))?;
    patient::delete_patient(state.patients.as_ref(), patient_id)
        .await
        .map_err(patient_error_response)?;
    Ok(Json(serde_json::json!({ "message": "Patient deleted successfully" })))
}

pub(crate) fn patient_error_status(err: &PatientError) -> StatusCode {
    match err {
        PatientError::NotFound(_) | PatientError::NoMatches => StatusCode::NOT_FOUND,
        PatientError::Invalid(_) => StatusCode::BAD_REQUEST,
        PatientError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn patient_error_response(err: PatientError) -> ApiError {
    let status = patient_error_status(&err);
    let detail = match &err {
        PatientError::NotFound(_) => "Patient not found".to_owned(),
        PatientError::NoMatches => "No patients found".to_owned(),
        PatientError::Invalid(msg) => msg.clone(),
        PatientError::Database(e) => {
            tracing::error!(error = %e, "patient query failed");
            "Internal server error".to_owned()
        }
    };
    (status, Json(serde_json::json!({ "detail": detail })))
}

/// Re-shape an extractor rejection as a `{"detail"}` error.
pub(crate) fn rejection_response(status: StatusCode, text: &str) -> ApiError {
    tracing::debug!(%status, detail = text, "request rejected");
    (status, Json(serde_json::json!({ "detail": text })))
}
