//! API response models for denial code guidance.

use crate::denials::DenialGuidance;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Entry in the denial code picker.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DenialCodeSummary {
    #[schema(example = "CO-27")]
    pub code: String,
    #[schema(example = "Expenses incurred after coverage terminated")]
    pub description: String,
}

/// Full guidance shown to the agent once a denial code is selected.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DenialGuidanceResponse {
    #[schema(example = "CO-27")]
    pub code: String,
    pub description: String,
    /// Questions to ask the payer representative
    pub questions: Vec<String>,
    /// Form fields the agent should fill in for this denial
    pub required_fields: Vec<String>,
    /// Suggested follow-up actions
    pub next_steps: Vec<String>,
}

impl From<&DenialGuidance> for DenialCodeSummary {
    fn from(g: &DenialGuidance) -> Self {
        Self {
            code: g.code.to_string(),
            description: g.description.to_string(),
        }
    }
}

impl From<&DenialGuidance> for DenialGuidanceResponse {
    fn from(g: &DenialGuidance) -> Self {
        Self {
            code: g.code.to_string(),
            description: g.description.to_string(),
            questions: owned(g.questions),
            required_fields: owned(g.required_fields),
            next_steps: owned(g.next_steps),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
