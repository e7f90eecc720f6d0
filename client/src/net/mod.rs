//! Networking modules for the patient REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls from the browser and `types` defines the JSON
//! schema shared with the server routes.

pub mod api;
pub mod types;
