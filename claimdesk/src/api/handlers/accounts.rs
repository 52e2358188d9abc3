use crate::AppState;
use crate::api::models::accounts::{AccountCreate, AccountResponse, AccountUpdate, ListAccountsQuery};
use crate::api::models::comments::CommentResponse;
use crate::comments::{CommentInput, generate_comment};
use crate::db::errors::DbError;
use crate::db::handlers::{AccountFilter, Repository};
use crate::db::models::accounts::{AccountCreateDBRequest, AccountUpdateDBRequest};
use crate::errors::{Error, Result};
use crate::types::AccountId;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/accounts",
    tag = "accounts",
    summary = "List accounts",
    params(ListAccountsQuery),
    responses(
        (status = 200, description = "Accounts in creation order", body = Vec<AccountResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_accounts(State(state): State<AppState>, Query(query): Query<ListAccountsQuery>) -> Result<Json<Vec<AccountResponse>>> {
    let (skip, limit) = query.pagination.params();
    let mut filter = AccountFilter::new(skip, limit);
    if let Some(session_id) = query.session_id {
        filter = filter.with_session(session_id);
    }

    let accounts = state.accounts.list(&filter).await?;
    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/accounts",
    tag = "accounts",
    summary = "Create account",
    request_body = AccountCreate,
    responses(
        (status = 201, description = "Account recorded", body = AccountResponse),
        (status = 400, description = "Invalid input"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_account(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AccountCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<AccountResponse>)> {
    let Json(create) = payload?;
    let request = AccountCreateDBRequest::new(create);

    let account = state.accounts.create(&request).await?;
    metrics::counter!("claimdesk_accounts_created_total").increment(1);
    tracing::info!(account_id = account.id, "Account recorded");

    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}

#[utoipa::path(
    get,
    path = "/accounts/{id}",
    tag = "accounts",
    summary = "Get account",
    params(
        ("id" = u64, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account details", body = AccountResponse),
        (status = 404, description = "Account not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(account_id = id))]
pub async fn get_account(State(state): State<AppState>, Path(id): Path<AccountId>) -> Result<Json<AccountResponse>> {
    match state.accounts.get_by_id(id).await? {
        Some(account) => Ok(Json(AccountResponse::from(account))),
        None => Err(Error::not_found("Account", id)),
    }
}

#[utoipa::path(
    patch,
    path = "/accounts/{id}",
    tag = "accounts",
    summary = "Update account",
    request_body = AccountUpdate,
    params(
        ("id" = u64, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Updated account", body = AccountResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Account not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(account_id = id))]
pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
    payload: std::result::Result<Json<AccountUpdate>, JsonRejection>,
) -> Result<Json<AccountResponse>> {
    let Json(update) = payload?;
    let request = AccountUpdateDBRequest::new(update);

    let account = state.accounts.update(id, &request).await.map_err(|e| match e {
        DbError::NotFound => Error::not_found("Account", id),
        other => Error::Database(other),
    })?;

    Ok(Json(AccountResponse::from(account)))
}

#[utoipa::path(
    delete,
    path = "/accounts/{id}",
    tag = "accounts",
    summary = "Delete account",
    params(
        ("id" = u64, Path, description = "Account ID")
    ),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 404, description = "Account not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(account_id = id))]
pub async fn delete_account(State(state): State<AppState>, Path(id): Path<AccountId>) -> Result<StatusCode> {
    if state.accounts.delete(id).await? {
        metrics::counter!("claimdesk_accounts_deleted_total").increment(1);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::not_found("Account", id))
    }
}

#[utoipa::path(
    get,
    path = "/accounts/{id}/comment",
    tag = "accounts",
    summary = "Generate account comment",
    description = "Generate the call summary comment from the values stored on the account",
    params(
        ("id" = u64, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Generated comment", body = CommentResponse),
        (status = 404, description = "Account not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(account_id = id))]
pub async fn get_account_comment(State(state): State<AppState>, Path(id): Path<AccountId>) -> Result<Json<CommentResponse>> {
    let account = state
        .accounts
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("Account", id))?;

    let comment = generate_comment(&CommentInput::from(&account));
    metrics::counter!("claimdesk_comments_generated_total").increment(1);

    Ok(Json(CommentResponse { comment }))
}

#[cfg(test)]
mod tests {
    use crate::api::models::accounts::AccountResponse;
    use crate::api::models::comments::CommentResponse;
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test_log::test(tokio::test)]
    async fn test_create_and_get_account() {
        let app = create_test_app();

        let response = app
            .post("/api/v1/accounts")
            .json(&json!({
                "session_id": "call-1",
                "patient_name": "Jane Doe",
                "account_number": "A-100",
                "insurance_id": "BCBS-1",
                "denial_code": "CO-27",
                "notes": "Member terminated 12/31"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let created: AccountResponse = response.json();
        assert_eq!(created.id, 1);
        assert_eq!(created.session_id, "call-1");
        assert_eq!(created.denial_description.as_deref(), Some("Expenses incurred after coverage terminated"));
        assert_eq!(created.created_at, created.updated_at);

        let response = app.get(&format!("/api/v1/accounts/{}", created.id)).await;
        response.assert_status_ok();
        let fetched: AccountResponse = response.json();
        assert_eq!(fetched.patient_name, "Jane Doe");
        assert_eq!(fetched.notes.as_deref(), Some("Member terminated 12/31"));
    }

    #[test_log::test(tokio::test)]
    async fn test_create_account_validation() {
        let app = create_test_app();

        // Blank required field
        let response = app
            .post("/api/v1/accounts")
            .json(&json!({
                "session_id": "call-1",
                "patient_name": "   ",
                "account_number": "A-100",
                "insurance_id": "BCBS-1"
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().contains("patient_name"));

        // Missing required field
        let response = app
            .post("/api/v1/accounts")
            .json(&json!({
                "session_id": "call-1",
                "patient_name": "Jane Doe",
                "account_number": "A-100"
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().contains("insurance_id"));

        // Wrong type
        let response = app
            .post("/api/v1/accounts")
            .json(&json!({
                "session_id": "call-1",
                "patient_name": 42,
                "account_number": "A-100",
                "insurance_id": "BCBS-1"
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        // Nothing was stored
        let accounts: Vec<AccountResponse> = app.get("/api/v1/accounts").await.json();
        assert!(accounts.is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_list_accounts_by_session() {
        let app = create_test_app();
        create_test_account(&app, "call-1", "Alice").await;
        create_test_account(&app, "call-2", "Bob").await;
        create_test_account(&app, "call-1", "Carol").await;

        let response = app.get("/api/v1/accounts?session_id=call-1").await;
        response.assert_status_ok();
        let accounts: Vec<AccountResponse> = response.json();
        let names: Vec<_> = accounts.iter().map(|a| a.patient_name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);

        let accounts: Vec<AccountResponse> = app.get("/api/v1/accounts").await.json();
        assert_eq!(accounts.len(), 3);

        let accounts: Vec<AccountResponse> = app.get("/api/v1/accounts?skip=1&limit=1").await.json();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].patient_name, "Bob");

        let accounts: Vec<AccountResponse> = app.get("/api/v1/accounts?session_id=unknown").await.json();
        assert!(accounts.is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_update_account_partial() {
        let app = create_test_app();
        let account = create_test_account(&app, "call-1", "Alice").await;

        let response = app
            .patch(&format!("/api/v1/accounts/{}", account.id))
            .json(&json!({
                "rep_name": "Maria",
                "denial_code": "CO-29"
            }))
            .await;
        response.assert_status_ok();
        let updated: AccountResponse = response.json();
        assert_eq!(updated.patient_name, "Alice");
        assert_eq!(updated.rep_name.as_deref(), Some("Maria"));
        assert_eq!(updated.denial_code.as_deref(), Some("CO-29"));
        assert_eq!(updated.denial_description.as_deref(), Some("The time limit for filing has expired"));
        assert!(updated.updated_at >= account.updated_at);

        // Empty string clears an optional field
        let updated: AccountResponse = app
            .patch(&format!("/api/v1/accounts/{}", account.id))
            .json(&json!({ "rep_name": "" }))
            .await
            .json();
        assert_eq!(updated.rep_name, None);
        assert_eq!(updated.denial_code.as_deref(), Some("CO-29"));

        // Required fields cannot be blanked
        let response = app
            .patch(&format!("/api/v1/accounts/{}", account.id))
            .json(&json!({ "account_number": "" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[test_log::test(tokio::test)]
    async fn test_move_into_full_session_rejected() {
        let mut config = create_test_config();
        config.limits.max_accounts_per_session = Some(1);
        let app = create_test_app_with_config(config);

        create_test_account(&app, "call-1", "Alice").await;
        let bob = create_test_account(&app, "call-2", "Bob").await;

        let response = app
            .patch(&format!("/api/v1/accounts/{}", bob.id))
            .json(&json!({ "session_id": "call-1" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().contains("maximum of 1 accounts"));

        let in_call_1: Vec<AccountResponse> = app.get("/api/v1/accounts?session_id=call-1").await.json();
        assert_eq!(in_call_1.len(), 1);
        let bob: AccountResponse = app.get(&format!("/api/v1/accounts/{}", bob.id)).await.json();
        assert_eq!(bob.session_id, "call-2");
    }

    #[test_log::test(tokio::test)]
    async fn test_missing_account_returns_not_found() {
        let app = create_test_app();

        app.get("/api/v1/accounts/99").await.assert_status_not_found();
        app.patch("/api/v1/accounts/99")
            .json(&json!({ "notes": "x" }))
            .await
            .assert_status_not_found();
        app.delete("/api/v1/accounts/99").await.assert_status_not_found();
        app.get("/api/v1/accounts/99/comment").await.assert_status_not_found();
    }

    #[test_log::test(tokio::test)]
    async fn test_delete_account() {
        let app = create_test_app();
        let account = create_test_account(&app, "call-1", "Alice").await;

        app.delete(&format!("/api/v1/accounts/{}", account.id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.get(&format!("/api/v1/accounts/{}", account.id)).await.assert_status_not_found();

        // Identifiers are not reused
        let next = create_test_account(&app, "call-1", "Bob").await;
        assert_eq!(next.id, account.id + 1);
    }

    #[test_log::test(tokio::test)]
    async fn test_account_comment_contains_notes() {
        let app = create_test_app();
        let account = create_test_account(&app, "call-1", "Alice").await;

        app.patch(&format!("/api/v1/accounts/{}", account.id))
            .json(&json!({ "denial_code": "CO-27", "notes": "Patient has new Aetna card." }))
            .await
            .assert_status_ok();

        let response = app.get(&format!("/api/v1/accounts/{}/comment", account.id)).await;
        response.assert_status_ok();
        let comment: CommentResponse = response.json();
        assert!(comment.comment.contains("Alice"));
        assert!(comment.comment.contains("Claim denied CO-27"));
        assert!(comment.comment.ends_with("Notes: Patient has new Aetna card."));
    }
}
