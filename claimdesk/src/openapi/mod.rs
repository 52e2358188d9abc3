//! OpenAPI documentation for the workspace API at `/api/v1/*`, served at `/docs`.

use utoipa::OpenApi;

use crate::{api, comments};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "claimdesk API",
        description = "Record patient accounts during payer calls, look up denial guidance and generate call summary comments."
    ),
    servers(
        (url = "/api/v1", description = "Workspace API")
    ),
    paths(
        api::handlers::accounts::list_accounts,
        api::handlers::accounts::create_account,
        api::handlers::accounts::get_account,
        api::handlers::accounts::update_account,
        api::handlers::accounts::delete_account,
        api::handlers::accounts::get_account_comment,
        api::handlers::denial_codes::list_denial_codes,
        api::handlers::denial_codes::get_denial_guidance,
        api::handlers::comments::generate,
        api::handlers::sessions::create_session,
        api::handlers::sessions::get_session_summary,
        api::handlers::sessions::delete_session,
    ),
    components(
        schemas(
            api::models::accounts::AccountCreate,
            api::models::accounts::AccountUpdate,
            api::models::accounts::AccountResponse,
            api::models::comments::CommentResponse,
            api::models::denials::DenialCodeSummary,
            api::models::denials::DenialGuidanceResponse,
            api::models::sessions::SessionCreated,
            api::models::sessions::SessionAccountSummary,
            api::models::sessions::SessionSummary,
            api::models::sessions::SessionDeleted,
            comments::CommentInput,
        )
    ),
    tags(
        (name = "accounts", description = "Patient account records captured during a call."),
        (name = "denial-codes", description = "Static guidance for common claim denial codes."),
        (name = "comments", description = "Generate a call summary comment from form fields."),
        (name = "sessions", description = "Group the accounts worked on a single call."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/accounts",
            "/accounts/{id}",
            "/accounts/{id}/comment",
            "/denial-codes",
            "/denial-codes/{code}",
            "/comments",
            "/sessions",
            "/sessions/{session_id}",
            "/sessions/{session_id}/summary",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
