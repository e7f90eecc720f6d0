//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the patient store behind a trait object and the shell configuration
//! handed to the Leptos renderer.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use client::config::ShellConfig;
use sqlx::PgPool;

use crate::services::patient::{PatientStore, PgPatientStore};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub patients: Arc<dyn PatientStore>,
    pub shell: ShellConfig,
}

impl AppState {
    #[must_use]
    pub fn new(patients: Arc<dyn PatientStore>, shell: ShellConfig) -> Self {
        Self { patients, shell }
    }

    /// State backed by the `PostgreSQL` patient store.
    #[must_use]
    pub fn with_pool(pool: PgPool, shell: ShellConfig) -> Self {
        Self::new(Arc::new(PgPatientStore::new(pool)), shell)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
