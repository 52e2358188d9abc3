//! API request/response models for patient account records.

use super::pagination::Pagination;
use crate::db::models::accounts::AccountDBResponse;
use crate::types::{AccountId, SessionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for listing accounts
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ListAccountsQuery {
    /// Pagination parameters
    #[serde(flatten)]
    #[param(inline)]
    pub pagination: Pagination,

    /// Only return accounts recorded under this session
    pub session_id: Option<String>,
}

/// Request body for recording a new account during a call.
///
/// Required fields default to empty so that a missing field is reported by the same
/// validation as a blank one.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountCreate {
    /// Session grouping the accounts worked on one call
    #[schema(example = "9b2f7c1e-4a0d-4f57-8d0e-0c9c9b0d1a55")]
    #[serde(default)]
    pub session_id: SessionId,
    /// Patient full name (required)
    #[schema(example = "Jane Doe")]
    #[serde(default)]
    pub patient_name: String,
    /// Facility account number (required)
    #[schema(example = "A-100234")]
    #[serde(default)]
    pub account_number: String,
    /// Insurance plan or member identifier (required)
    #[schema(example = "BCBS-778812")]
    #[serde(default)]
    pub insurance_id: String,
    /// Name of the payer representative
    pub rep_name: Option<String>,
    /// Reference number given by the representative
    pub call_reference: Option<String>,
    /// Denial reason code, e.g. `CO-27`
    #[schema(example = "CO-27")]
    pub denial_code: Option<String>,
    /// Denial description. Filled from the guidance table when omitted for a known code.
    pub denial_description: Option<String>,
    pub date_of_service: Option<String>,
    pub eligibility_effective_date: Option<String>,
    pub eligibility_status: Option<String>,
    pub notes: Option<String>,
}

/// Request body for updating an account. All fields are optional;
/// only provided fields will be updated. An empty string clears an optional field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AccountUpdate {
    pub session_id: Option<SessionId>,
    pub patient_name: Option<String>,
    pub account_number: Option<String>,
    pub insurance_id: Option<String>,
    pub rep_name: Option<String>,
    pub call_reference: Option<String>,
    pub denial_code: Option<String>,
    pub denial_description: Option<String>,
    pub date_of_service: Option<String>,
    pub eligibility_effective_date: Option<String>,
    pub eligibility_status: Option<String>,
    pub notes: Option<String>,
}

/// A stored account record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    /// Sequential identifier assigned on creation
    pub id: AccountId,
    pub session_id: SessionId,
    pub patient_name: String,
    pub account_number: String,
    pub insurance_id: String,
    pub rep_name: Option<String>,
    pub call_reference: Option<String>,
    pub denial_code: Option<String>,
    pub denial_description: Option<String>,
    pub date_of_service: Option<String>,
    pub eligibility_effective_date: Option<String>,
    pub eligibility_status: Option<String>,
    pub notes: Option<String>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl From<AccountDBResponse> for AccountResponse {
    fn from(db: AccountDBResponse) -> Self {
        Self {
            id: db.id,
            session_id: db.session_id,
            patient_name: db.patient_name,
            account_number: db.account_number,
            insurance_id: db.insurance_id,
            rep_name: db.rep_name,
            call_reference: db.call_reference,
            denial_code: db.denial_code,
            denial_description: db.denial_description,
            date_of_service: db.date_of_service,
            eligibility_effective_date: db.eligibility_effective_date,
            eligibility_status: db.eligibility_status,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
