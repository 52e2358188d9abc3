//! Call summary comment generation.
//!
//! [`generate_comment`] fills one of a handful of fixed sentence templates with the values the
//! agent entered on the form. The template is picked by denial code; anything unrecognized gets
//! the generic one. Missing or blank values are rendered as [`PLACEHOLDER`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::models::accounts::AccountDBResponse;
use crate::denials::{self, normalize_code};
use crate::types::non_blank;

/// Text substituted for any value the agent left empty.
pub const PLACEHOLDER: &str = "N/A";

/// Form values feeding the comment template. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CommentInput {
    #[schema(example = "Jane Doe")]
    pub patient_name: Option<String>,
    #[schema(example = "A-100234")]
    pub account_number: Option<String>,
    #[schema(example = "BCBS-778812")]
    pub insurance_id: Option<String>,
    #[schema(example = "Maria")]
    pub rep_name: Option<String>,
    #[schema(example = "REF-55821")]
    pub call_reference: Option<String>,
    #[schema(example = "CO-27")]
    pub denial_code: Option<String>,
    pub denial_description: Option<String>,
    #[schema(example = "03/14/2025")]
    pub date_of_service: Option<String>,
    #[schema(example = "01/01/2024")]
    pub eligibility_effective_date: Option<String>,
    #[schema(example = "Terminated")]
    pub eligibility_status: Option<String>,
    pub notes: Option<String>,
}

impl From<&AccountDBResponse> for CommentInput {
    fn from(account: &AccountDBResponse) -> Self {
        Self {
            patient_name: Some(account.patient_name.clone()),
            account_number: Some(account.account_number.clone()),
            insurance_id: Some(account.insurance_id.clone()),
            rep_name: account.rep_name.clone(),
            call_reference: account.call_reference.clone(),
            denial_code: account.denial_code.clone(),
            denial_description: account.denial_description.clone(),
            date_of_service: account.date_of_service.clone(),
            eligibility_effective_date: account.eligibility_effective_date.clone(),
            eligibility_status: account.eligibility_status.clone(),
            notes: account.notes.clone(),
        }
    }
}

fn or_placeholder(value: &Option<String>) -> &str {
    non_blank(value.as_deref()).unwrap_or(PLACEHOLDER)
}

/// Build the summary comment for one account.
///
/// Pure and total: the output depends only on `input`, and every input produces a comment.
///
/// Notes are copied verbatim, surrounding whitespace included. The one exception is notes that
/// are empty or whitespace only, which count as missing and render as [`PLACEHOLDER`] like any
/// other blank field.
pub fn generate_comment(input: &CommentInput) -> String {
    let code = non_blank(input.denial_code.as_deref()).map(normalize_code);
    let description = non_blank(input.denial_description.as_deref())
        .or_else(|| code.as_deref().and_then(denials::guidance).map(|g| g.description))
        .unwrap_or(PLACEHOLDER);

    let insurance = or_placeholder(&input.insurance_id);
    let patient = or_placeholder(&input.patient_name);
    let account = or_placeholder(&input.account_number);
    let dos = or_placeholder(&input.date_of_service);
    let rep = or_placeholder(&input.rep_name);
    let reference = or_placeholder(&input.call_reference);
    let effective = or_placeholder(&input.eligibility_effective_date);
    let status = or_placeholder(&input.eligibility_status);
    // Notes are free text and go in untouched.
    let notes = input.notes.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or(PLACEHOLDER);

    let header = format!(
        "Called {insurance} re: {patient} (acct #{account}), DOS {dos}. Spoke with rep {rep}, call ref #{reference}."
    );

    let body = match code.as_deref() {
        Some("CO-16") => format!(
            "Claim denied CO-16: {description}. Rep advised a corrected claim with the missing information is required."
        ),
        Some("CO-18") => format!(
            "Claim denied CO-18 as a duplicate: {description}. Rep confirmed the status of the original claim."
        ),
        Some("CO-22") => format!(
            "Claim denied CO-22: {description}. Per rep, other coverage on file effective {effective}, status {status}. Patient needs to update coordination of benefits."
        ),
        Some("CO-27") => format!(
            "Claim denied CO-27: {description}. Per rep, coverage effective {effective}, eligibility status {status}; DOS falls outside the active coverage period."
        ),
        Some("CO-29") => format!(
            "Claim denied CO-29: {description}. Rep advised proof of timely filing is required for reconsideration."
        ),
        Some("CO-50") => format!(
            "Claim denied CO-50: {description}. Rep advised an appeal with medical records supporting medical necessity is required."
        ),
        Some("CO-97") => format!(
            "Claim denied CO-97: {description}. Rep advised the service is bundled into another procedure already adjudicated."
        ),
        Some("CO-197") => format!(
            "Claim denied CO-197: {description}. Rep advised no authorization was on file for the DOS; retro-authorization or appeal required."
        ),
        other => {
            let code = other.unwrap_or(PLACEHOLDER);
            format!("Claim denied {code}: {description}. Eligibility effective {effective}, status {status}.")
        }
    };

    format!("{header} {body} Notes: {notes}")
}
