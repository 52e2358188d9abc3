//! Stored record models.
//!
//! These are kept separate from the API models in [`crate::api::models`]: create and update
//! requests here are already normalized (trimmed, blanks dropped, descriptions filled in), so the
//! store only has to validate and persist.

pub mod accounts;
