//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON bodies of the `/api/patients` routes. Only the
//! fields the search view needs are modeled; unknown fields are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One row of a patient search result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSummary {
    /// Server-assigned patient identifier.
    pub id: i64,
    /// Display name, `"<last> <first>"`.
    pub name: String,
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: String,
}

/// Error body returned by the patient API (`{"detail": "..."}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}
