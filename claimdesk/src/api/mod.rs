//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers for all API endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! # API Structure
//!
//! Everything is nested under `/api/v1`:
//!
//! - **Accounts** (`/accounts/*`): Record, edit and remove patient accounts; per-account comment
//! - **Denial codes** (`/denial-codes/*`): Code picker and guidance lookup
//! - **Comments** (`/comments`): Generate a comment from unsaved form values
//! - **Sessions** (`/sessions/*`): New session ids, call summaries and clearing a call
//!
//! # OpenAPI Documentation
//!
//! All endpoints are documented with `utoipa`. Interactive documentation is available at `/docs`
//! when the server is running.

pub mod handlers;
pub mod models;
