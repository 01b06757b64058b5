//! Session domain — the in-memory authoritative state for the current
//! user and the store that keeps it synchronized with slot persistence.

pub mod models;
pub mod progression;
pub mod store;
