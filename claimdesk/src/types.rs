//! Common type definitions.
//!
//! # ID Types
//!
//! - [`AccountId`]: Sequential identifier assigned to a patient account record on creation
//! - [`SessionId`]: Opaque string grouping the records entered during one call
//!
//! # Utility Functions
//!
//! - [`abbrev_session`]: Abbreviate session identifiers for logging

// Type aliases for IDs
pub type AccountId = u64;
pub type SessionId = String;

/// Abbreviate a session identifier to its first 8 characters for more readable logs and traces
/// Example: "550e8400-e29b-41d4-a716-446655440000" -> "550e8400"
pub fn abbrev_session(session_id: &str) -> String {
    session_id.chars().take(8).collect()
}

/// Trim a free-text form value, mapping blank input to `None`.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
