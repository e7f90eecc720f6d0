//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business rules and persistence concerns so route
//! handlers can stay focused on protocol translation.

pub mod patient;
