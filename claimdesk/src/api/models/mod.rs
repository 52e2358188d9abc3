//! API request and response data models.
//!
//! These models define the public JSON contract and are kept separate from the store models in
//! [`crate::db::models`], so the wire format and the stored representation can evolve
//! independently. All of them are annotated with `utoipa` for the generated API docs.
//!
//! - [`accounts`]: Patient account records and their create/update payloads
//! - [`denials`]: Denial code picker entries and guidance
//! - [`comments`]: Generated summary comments
//! - [`sessions`]: Call session identifiers and summaries
//! - [`pagination`]: Shared `skip`/`limit` query parameters

pub mod accounts;
pub mod comments;
pub mod denials;
pub mod pagination;
pub mod sessions;
