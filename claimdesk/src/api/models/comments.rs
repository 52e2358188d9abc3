//! API response models for generated comments.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A generated call summary comment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    #[schema(example = "Called BCBS-778812 re: Jane Doe (acct #A-100234), DOS 03/14/2025. ...")]
    pub comment: String,
}
