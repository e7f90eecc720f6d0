//! Client state modules.
//!
//! ARCHITECTURE
//! ============
//! State structs are plain data wrapped in `RwSignal` and provided through
//! Leptos context by the root `App`, so they live for the whole session and
//! are unaffected by route changes.

pub mod search;
