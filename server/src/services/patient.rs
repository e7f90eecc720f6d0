//! Patient service: validation, FHIR resource building, and storage.
//!
//! DESIGN
//! ======
//! Storage sits behind the `PatientStore` trait so route handlers can be
//! exercised against an in-memory store; `PgPatientStore` is the production
//! implementation. The free functions in this module own the rules (input
//! validation, "no matches" semantics) and are the only entry points routes
//! call.
//!
//! Each stored patient carries a minimal FHIR `Patient` resource alongside
//! its columns; `get` returns that resource verbatim.

#[cfg(test)]
#[path = "patient_test.rs"]
mod patient_test;

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use time::Date;
use time::macros::format_description;
use tracing::info;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("patient not found: {0}")]
    NotFound(i64),
    #[error("no patients found")]
    NoMatches,
    #[error("invalid patient: {0}")]
    Invalid(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create-patient request body.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPatient {
    pub last_name: String,
    pub first_name: String,
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: String,
}

/// A `NewPatient` that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPatient {
    pub last_name: String,
    pub first_name: String,
    pub dob: Date,
}

/// Row stored for a patient.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientRecord {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub dob: Date,
    pub fhir: serde_json::Value,
}

/// Search-result row returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientSummary {
    pub id: i64,
    /// `"<last> <first>"`.
    pub name: String,
    pub dob: String,
}

impl From<&PatientRecord> for PatientSummary {
    fn from(record: &PatientRecord) -> Self {
        Self {
            id: record.id,
            name: format!("{} {}", record.last_name, record.first_name),
            dob: format_dob(record.dob),
        }
    }
}

// =============================================================================
// VALIDATION + FHIR
// =============================================================================

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns `PatientError::Invalid` if the string is not a valid date.
pub fn parse_dob(raw: &str) -> Result<Date, PatientError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| PatientError::Invalid(format!("dob must be YYYY-MM-DD, got {raw:?}")))
}

/// Format a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_dob(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

impl NewPatient {
    /// Trim names, require them non-empty, and parse the date of birth.
    ///
    /// # Errors
    ///
    /// Returns `PatientError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<ValidPatient, PatientError> {
        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            return Err(PatientError::Invalid("last_name is required".to_owned()));
        }
        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            return Err(PatientError::Invalid("first_name is required".to_owned()));
        }
        let dob = parse_dob(&self.dob)?;
        Ok(ValidPatient { last_name: last_name.to_owned(), first_name: first_name.to_owned(), dob })
    }
}

/// Minimal FHIR R4 `Patient` resource for a validated patient.
#[must_use]
pub fn fhir_patient_resource(patient: &ValidPatient) -> serde_json::Value {
    serde_json::json!({
        "resourceType": "Patient",
        "name": [{ "text": format!("{} {}", patient.first_name, patient.last_name) }],
        "birthDate": format_dob(patient.dob),
    })
}

/// SQL `LIKE` pattern matching `fragment` anywhere, with wildcards escaped.
#[must_use]
pub fn like_pattern(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len() + 2);
    out.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('%');
    out
}

/// Case-insensitive substring test with the same meaning as the `ILIKE`
/// query built from [`like_pattern`].
#[must_use]
pub fn last_name_matches(last_name: &str, fragment: &str) -> bool {
    last_name.to_lowercase().contains(&fragment.to_lowercase())
}

// =============================================================================
// STORE
// =============================================================================

#[async_trait::async_trait]
pub trait PatientStore: Send + Sync {
    /// Insert a patient and return its stored record.
    async fn insert(&self, patient: ValidPatient, fhir: serde_json::Value) -> Result<PatientRecord, PatientError>;

    /// Patients whose last name contains `fragment` (case-insensitive),
    /// ordered by id. May be empty.
    async fn find_by_last_name(&self, fragment: &str) -> Result<Vec<PatientRecord>, PatientError>;

    async fn find(&self, id: i64) -> Result<Option<PatientRecord>, PatientError>;

    /// Remove a patient; returns whether a row existed.
    async fn remove(&self, id: i64) -> Result<bool, PatientError>;
}

/// `PostgreSQL`-backed store over the `patients` table.
pub struct PgPatientStore {
    pool: PgPool,
}

impl PgPatientStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

type PatientRow = (i64, String, String, Date, serde_json::Value);

fn record_from_row((id, last_name, first_name, dob, fhir): PatientRow) -> PatientRecord {
    PatientRecord { id, last_name, first_name, dob, fhir }
}

#[async_trait::async_trait]
impl PatientStore for PgPatientStore {
    async fn insert(&self, patient: ValidPatient, fhir: serde_json::Value) -> Result<PatientRecord, PatientError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO patients (last_name, first_name, dob, fhir_json)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&patient.last_name)
        .bind(&patient.first_name)
        .bind(patient.dob)
        .bind(&fhir)
        .fetch_one(&self.pool)
        .await?;

        Ok(PatientRecord { id, last_name: patient.last_name, first_name: patient.first_name, dob: patient.dob, fhir })
    }

    async fn find_by_last_name(&self, fragment: &str) -> Result<Vec<PatientRecord>, PatientError> {
        let rows = sqlx::query_as::<_, PatientRow>(
            r"SELECT id, last_name, first_name, dob, fhir_json
              FROM patients
              WHERE last_name ILIKE $1 ESCAPE '\'
              ORDER BY id",
        )
        .bind(like_pattern(fragment))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(record_from_row).collect())
    }

    async fn find(&self, id: i64) -> Result<Option<PatientRecord>, PatientError> {
        let row = sqlx::query_as::<_, PatientRow>(
            "SELECT id, last_name, first_name, dob, fhir_json FROM patients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(record_from_row))
    }

    async fn remove(&self, id: i64) -> Result<bool, PatientError> {
        let result = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Validate and store a new patient.
///
/// # Errors
///
/// Returns `Invalid` for bad input or `Database` if the insert fails.
pub async fn create_patient(store: &dyn PatientStore, new: &NewPatient) -> Result<PatientRecord, PatientError> {
    let patient = new.validate()?;
    let fhir = fhir_patient_resource(&patient);
    let record = store.insert(patient, fhir).await?;
    info!(patient_id = record.id, "patient created");
    Ok(record)
}

/// Search patients by last-name fragment.
///
/// # Errors
///
/// Returns `Invalid` for a blank fragment, `NoMatches` when nothing matches,
/// or `Database` if the query fails.
pub async fn search_patients(store: &dyn PatientStore, fragment: &str) -> Result<Vec<PatientSummary>, PatientError> {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return Err(PatientError::Invalid("last_name is required".to_owned()));
    }
    let records = store.find_by_last_name(fragment).await?;
    if records.is_empty() {
        return Err(PatientError::NoMatches);
    }
    Ok(records.iter().map(PatientSummary::from).collect())
}

/// Fetch a patient's stored FHIR resource.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id or `Database` if the query fails.
pub async fn get_patient_resource(store: &dyn PatientStore, id: i64) -> Result<serde_json::Value, PatientError> {
    store.find(id).await?.map(|record| record.fhir).ok_or(PatientError::NotFound(id))
}

/// Delete a patient.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id or `Database` if the delete fails.
pub async fn delete_patient(store: &dyn PatientStore, id: i64) -> Result<(), PatientError> {
    if !store.remove(id).await? {
        return Err(PatientError::NotFound(id));
    }
    info!(patient_id = id, "patient deleted");
    Ok(())
}
