//! HTTP handler for ad-hoc comment generation from form values.

use crate::api::models::comments::CommentResponse;
use crate::comments::{CommentInput, generate_comment};
use crate::errors::Result;
use axum::{Json, extract::rejection::JsonRejection};

#[utoipa::path(
    post,
    path = "/comments",
    tag = "comments",
    summary = "Generate comment",
    description = "Fill the summary template for the posted form values. Nothing is stored.",
    request_body = CommentInput,
    responses(
        (status = 200, description = "Generated comment", body = CommentResponse),
        (status = 400, description = "Invalid input"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn generate(payload: std::result::Result<Json<CommentInput>, JsonRejection>) -> Result<Json<CommentResponse>> {
    let Json(input) = payload?;
    let comment = generate_comment(&input);
    metrics::counter!("claimdesk_comments_generated_total").increment(1);

    Ok(Json(CommentResponse { comment }))
}
