//! Storage layer for patient account records.
//!
//! It follows the Repository pattern so handlers depend on a trait, not on a concrete store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (API request handlers)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - validation & storage)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - stored records)
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: The [`handlers::Repository`] contract and the in-memory account store
//! - [`models`]: Stored record structures and normalized create/update requests
//! - [`errors`]: Store-specific error types
//!
//! ## Example Usage
//!
//! ```ignore
//! use claimdesk::db::handlers::{AccountFilter, InMemoryAccounts, Repository};
//!
//! let store = InMemoryAccounts::new();
//! let account = store.create(&create_request).await?;
//! let same_call = store.list(&AccountFilter::new(0, 100).with_session(account.session_id)).await?;
//! ```

pub mod errors;
pub mod handlers;
pub mod models;
