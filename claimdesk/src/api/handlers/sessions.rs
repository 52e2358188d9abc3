//! HTTP handlers for call sessions.
//!
//! A session is only a grouping key; these endpoints hand out fresh identifiers and operate on
//! every account recorded under one.

use crate::AppState;
use crate::api::models::accounts::AccountResponse;
use crate::api::models::sessions::{SessionAccountSummary, SessionCreated, SessionDeleted, SessionSummary};
use crate::comments::{CommentInput, generate_comment};
use crate::db::handlers::{AccountFilter, AccountStore, Repository};
use crate::errors::Result;
use crate::types::SessionId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/sessions",
    tag = "sessions",
    summary = "Start session",
    description = "Generate a new session identifier for grouping the accounts of one call",
    responses(
        (status = 201, description = "Session identifier", body = SessionCreated),
    )
)]
#[tracing::instrument]
pub async fn create_session() -> (StatusCode, Json<SessionCreated>) {
    let session_id = Uuid::new_v4().to_string();
    tracing::debug!(%session_id, "Session started");
    (StatusCode::CREATED, Json(SessionCreated { session_id }))
}

#[utoipa::path(
    get,
    path = "/sessions/{session_id}/summary",
    tag = "sessions",
    summary = "Session summary",
    description = "Every account in the session with its generated comment, in creation order. \
                   An unknown session yields an empty summary.",
    params(
        ("session_id" = String, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session summary", body = SessionSummary),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_session_summary(State(state): State<AppState>, Path(session_id): Path<SessionId>) -> Result<Json<SessionSummary>> {
    // Single read so the summary is a consistent snapshot of the session
    let accounts = state
        .accounts
        .list(&AccountFilter::unbounded().with_session(session_id.clone()))
        .await?;

    let accounts = accounts
        .into_iter()
        .map(|account| {
            let comment = generate_comment(&CommentInput::from(&account));
            SessionAccountSummary {
                account: AccountResponse::from(account),
                comment,
            }
        })
        .collect();

    Ok(Json(SessionSummary { session_id, accounts }))
}

#[utoipa::path(
    delete,
    path = "/sessions/{session_id}",
    tag = "sessions",
    summary = "Clear session",
    description = "Delete every account recorded under the session",
    params(
        ("session_id" = String, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Number of accounts removed", body = SessionDeleted),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_session(State(state): State<AppState>, Path(session_id): Path<SessionId>) -> Result<Json<SessionDeleted>> {
    let deleted = state.accounts.delete_session(&session_id).await?;
    metrics::counter!("claimdesk_accounts_deleted_total").increment(deleted as u64);
    tracing::info!(deleted, "Session cleared");

    Ok(Json(SessionDeleted { deleted }))
}
