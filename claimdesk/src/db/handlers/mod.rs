//! Repository implementations for record access.
//!
//! # Available Repositories
//!
//! - [`InMemoryAccounts`]: Patient account records, held in process memory
//!
//! The [`Repository`] trait defines the common CRUD operations:
//!
//! - `create()`: Insert a new record
//! - `get_by_id()`: Fetch a record by ID
//! - `list()`: List records with a filter
//! - `update()`: Apply a partial update
//! - `delete()`: Delete a record by ID
//!
//! [`AccountStore`] fixes the account types and adds session-wide operations. It is the type
//! the application state holds, as `Arc<dyn AccountStore>`.

pub mod accounts;
pub mod repository;

pub use accounts::{AccountFilter, AccountStore, InMemoryAccounts};
pub use repository::Repository;
