//! HTTP handlers for the denial code guidance table.

use crate::api::models::denials::{DenialCodeSummary, DenialGuidanceResponse};
use crate::denials;
use crate::errors::{Error, Result};
use axum::{Json, extract::Path};

#[utoipa::path(
    get,
    path = "/denial-codes",
    tag = "denial-codes",
    summary = "List denial codes",
    responses(
        (status = 200, description = "Known denial codes", body = Vec<DenialCodeSummary>),
    )
)]
#[tracing::instrument]
pub async fn list_denial_codes() -> Json<Vec<DenialCodeSummary>> {
    Json(denials::all().iter().map(DenialCodeSummary::from).collect())
}

#[utoipa::path(
    get,
    path = "/denial-codes/{code}",
    tag = "denial-codes",
    summary = "Get denial guidance",
    description = "Questions, fields to capture and next steps for one denial code",
    params(
        ("code" = String, Path, description = "Denial code, e.g. CO-27 (case-insensitive)")
    ),
    responses(
        (status = 200, description = "Guidance for the code", body = DenialGuidanceResponse),
        (status = 404, description = "Unknown denial code"),
    )
)]
#[tracing::instrument]
pub async fn get_denial_guidance(Path(code): Path<String>) -> Result<Json<DenialGuidanceResponse>> {
    denials::guidance(&code)
        .map(|g| Json(DenialGuidanceResponse::from(g)))
        .ok_or_else(|| Error::not_found("Denial code", code))
}

#[cfg(test)]
mod tests {
    use crate::api::models::denials::{DenialCodeSummary, DenialGuidanceResponse};
    use crate::test_utils::create_test_app;

    #[test_log::test(tokio::test)]
    async fn test_list_denial_codes() {
        let app = create_test_app();

        let response = app.get("/api/v1/denial-codes").await;
        response.assert_status_ok();
        let codes: Vec<DenialCodeSummary> = response.json();
        assert_eq!(codes.len(), crate::denials::all().len());
        assert!(codes.iter().any(|c| c.code == "CO-27"));
    }

    #[test_log::test(tokio::test)]
    async fn test_get_denial_guidance() {
        let app = create_test_app();

        let response = app.get("/api/v1/denial-codes/co-22").await;
        response.assert_status_ok();
        let guidance: DenialGuidanceResponse = response.json();
        assert_eq!(guidance.code, "CO-22");
        assert!(!guidance.questions.is_empty());
        assert!(guidance.required_fields.contains(&"eligibility_effective_date".to_string()));
        assert!(!guidance.next_steps.is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_unknown_denial_code() {
        let app = create_test_app();

        let response = app.get("/api/v1/denial-codes/XX-404").await;
        response.assert_status_not_found();
        assert_eq!(response.text(), "Denial code with ID XX-404 not found");
    }
}
