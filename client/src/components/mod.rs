//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome and result listings; pages compose them and
//! own the state they read.

pub mod nav_bar;
pub mod patient_table;
