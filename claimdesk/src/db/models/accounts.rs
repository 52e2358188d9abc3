//! Store models for patient account records.

use crate::api::models::accounts::{AccountCreate, AccountUpdate};
use crate::denials;
use crate::types::{AccountId, SessionId, non_blank};
use chrono::{DateTime, Utc};

/// Store request for creating a new account record
#[derive(Debug, Clone)]
pub struct AccountCreateDBRequest {
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
}

impl AccountCreateDBRequest {
    /// Build a store request from the API payload.
    ///
    /// Blank optional fields are dropped. A known denial code without a description picks up the
    /// standard description from the guidance table.
    pub fn new(create: AccountCreate) -> Self {
        let denial_code = optional(create.denial_code);
        let denial_description = optional(create.denial_description).or_else(|| standard_description(denial_code.as_deref()));

        Self {
            session_id: create.session_id.trim().to_string(),
            patient_name: create.patient_name.trim().to_string(),
            account_number: create.account_number.trim().to_string(),
            insurance_id: create.insurance_id.trim().to_string(),
            rep_name: optional(create.rep_name),
            call_reference: optional(create.call_reference),
            denial_code,
            denial_description,
            date_of_service: optional(create.date_of_service),
            eligibility_effective_date: optional(create.eligibility_effective_date),
            eligibility_status: optional(create.eligibility_status),
            notes: create.notes,
        }
    }
}

/// Store request for a partial update.
///
/// Outer `None` leaves a field unchanged. For optional fields, `Some(None)` clears the value.
#[derive(Debug, Clone, Default)]
pub struct AccountUpdateDBRequest {
    pub session_id: Option<SessionId>,
    pub patient_name: Option<String>,
    pub account_number: Option<String>,
    pub insurance_id: Option<String>,
    pub rep_name: Option<Option<String>>,
    pub call_reference: Option<Option<String>>,
    pub denial_code: Option<Option<String>>,
    pub denial_description: Option<Option<String>>,
    pub date_of_service: Option<Option<String>>,
    pub eligibility_effective_date: Option<Option<String>>,
    pub eligibility_status: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl AccountUpdateDBRequest {
    /// Build a store update from the API payload.
    ///
    /// An empty string clears an optional field. Changing the denial code without supplying a
    /// description replaces the description with the standard one for the new code, when known.
    pub fn new(update: AccountUpdate) -> Self {
        let denial_code = update.denial_code.map(|c| non_blank(Some(c.as_str())).map(str::to_string));
        let mut denial_description = update.denial_description.map(|d| non_blank(Some(d.as_str())).map(str::to_string));
        if denial_description.is_none()
            && let Some(code) = &denial_code
        {
            denial_description = Some(standard_description(code.as_deref()));
        }

        Self {
            session_id: update.session_id.map(|s| s.trim().to_string()),
            patient_name: update.patient_name.map(|s| s.trim().to_string()),
            account_number: update.account_number.map(|s| s.trim().to_string()),
            insurance_id: update.insurance_id.map(|s| s.trim().to_string()),
            rep_name: clearable(update.rep_name),
            call_reference: clearable(update.call_reference),
            denial_code,
            denial_description,
            date_of_service: clearable(update.date_of_service),
            eligibility_effective_date: clearable(update.eligibility_effective_date),
            eligibility_status: clearable(update.eligibility_status),
            notes: update.notes.map(|n| if n.trim().is_empty() { None } else { Some(n) }),
        }
    }
}

/// Store response for an account record
#[derive(Debug, Clone, PartialEq)]
pub struct AccountDBResponse {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn optional(value: Option<String>) -> Option<String> {
    non_blank(value.as_deref()).map(str::to_string)
}

fn clearable(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| non_blank(Some(v.as_str())).map(str::to_string))
}

fn standard_description(code: Option<&str>) -> Option<String> {
    code.and_then(denials::guidance).map(|g| g.description.to_string())
}
