//! HTTP request handlers for all API endpoints.
//!
//! Handlers deserialize the request, call into the account store or the pure guidance and
//! comment functions, and serialize the response. Failures are returned as
//! [`crate::errors::Error`], which maps to the appropriate status code.
//!
//! - [`accounts`]: Account record CRUD and per-account comments
//! - [`denial_codes`]: Denial code listing and guidance lookup
//! - [`comments`]: Comment generation from unsaved form values
//! - [`sessions`]: Session identifiers, summaries and clearing

pub mod accounts;
pub mod comments;
pub mod denial_codes;
pub mod sessions;
