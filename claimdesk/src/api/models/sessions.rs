//! API models for call sessions.

use super::accounts::AccountResponse;
use crate::types::SessionId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A freshly generated session identifier.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionCreated {
    #[schema(example = "9b2f7c1e-4a0d-4f57-8d0e-0c9c9b0d1a55")]
    pub session_id: SessionId,
}

/// One account in a session summary, with its generated comment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionAccountSummary {
    pub account: AccountResponse,
    pub comment: String,
}

/// Every account recorded in a session, in creation order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub accounts: Vec<SessionAccountSummary>,
}

/// Result of clearing a session.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionDeleted {
    /// Number of account records removed
    pub deleted: usize,
}
