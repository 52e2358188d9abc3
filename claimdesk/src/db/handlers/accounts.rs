//! In-memory repository for patient account records.
//!
//! Records live in an ordered map keyed by [`AccountId`], so listings come back in creation
//! order. Everything is lost on restart.

use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::accounts::{AccountCreateDBRequest, AccountDBResponse, AccountUpdateDBRequest},
};
use crate::types::{AccountId, abbrev_session};

/// Filter for listing accounts
#[derive(Debug, Clone)]
pub struct AccountFilter {
    pub skip: i64,
    pub limit: i64,
    pub session_id: Option<String>,
}

impl AccountFilter {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self {
            skip,
            limit,
            session_id: None,
        }
    }

    /// Every matching record in one read.
    pub fn unbounded() -> Self {
        Self::new(0, i64::MAX)
    }

    pub fn with_session(mut self, session_id: String) -> Self {
        self.session_id = Some(session_id);
        self
    }
}

/// Store interface injected into the application state.
///
/// Adds the session-wide operations on top of the basic [`Repository`] contract.
#[async_trait::async_trait]
pub trait AccountStore:
    Repository<
        CreateRequest = AccountCreateDBRequest,
        UpdateRequest = AccountUpdateDBRequest,
        Response = AccountDBResponse,
        Id = AccountId,
        Filter = AccountFilter,
    > + Send
    + Sync
{
    /// Delete every record in a session, returning how many were removed
    async fn delete_session(&self, session_id: &str) -> Result<usize>;
}

#[derive(Debug, Default)]
struct Inner {
    next_id: AccountId,
    accounts: BTreeMap<AccountId, AccountDBResponse>,
}

/// In-memory implementation of [`AccountStore`].
#[derive(Debug, Default)]
pub struct InMemoryAccounts {
    inner: RwLock<Inner>,
    max_per_session: Option<usize>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse to add records to a session that already holds `limit` of them.
    pub fn with_session_limit(mut self, limit: Option<usize>) -> Self {
        self.max_per_session = limit;
        self
    }

    /// Fails when one more record in `session_id` would exceed the session limit.
    fn check_session_capacity(&self, inner: &Inner, session_id: &str) -> Result<()> {
        if let Some(limit) = self.max_per_session {
            let in_session = inner.accounts.values().filter(|a| a.session_id == session_id).count();
            if in_session >= limit {
                return Err(DbError::check_violation(
                    "session_id",
                    format!("session already holds the maximum of {limit} accounts"),
                ));
            }
        }
        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DbError::check_violation(field, format!("{field} must not be empty")));
    }
    Ok(())
}

#[async_trait::async_trait]
impl Repository for InMemoryAccounts {
    type CreateRequest = AccountCreateDBRequest;
    type UpdateRequest = AccountUpdateDBRequest;
    type Response = AccountDBResponse;
    type Id = AccountId;
    type Filter = AccountFilter;

    #[instrument(skip(self, request), fields(session_id = %abbrev_session(&request.session_id)), err)]
    async fn create(&self, request: &Self::CreateRequest) -> Result<Self::Response> {
        require("patient_name", &request.patient_name)?;
        require("account_number", &request.account_number)?;
        require("insurance_id", &request.insurance_id)?;

        let mut inner = self.inner.write().await;

        self.check_session_capacity(&inner, &request.session_id)?;

        inner.next_id += 1;
        let id = inner.next_id;
        let now = Utc::now();

        let account = AccountDBResponse {
            id,
            session_id: request.session_id.clone(),
            patient_name: request.patient_name.clone(),
            account_number: request.account_number.clone(),
            insurance_id: request.insurance_id.clone(),
            rep_name: request.rep_name.clone(),
            call_reference: request.call_reference.clone(),
            denial_code: request.denial_code.clone(),
            denial_description: request.denial_description.clone(),
            date_of_service: request.date_of_service.clone(),
            eligibility_effective_date: request.eligibility_effective_date.clone(),
            eligibility_status: request.eligibility_status.clone(),
            notes: request.notes.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.accounts.insert(id, account.clone());

        Ok(account)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Response>> {
        Ok(self.inner.read().await.accounts.get(&id).cloned())
    }

    #[instrument(skip(self), err)]
    async fn list(&self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let inner = self.inner.read().await;

        let accounts = inner
            .accounts
            .values()
            .filter(|a| filter.session_id.as_ref().is_none_or(|s| &a.session_id == s))
            .skip(filter.skip.max(0) as usize)
            .take(filter.limit.max(0) as usize)
            .cloned()
            .collect();

        Ok(accounts)
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, id: Self::Id) -> Result<bool> {
        Ok(self.inner.write().await.accounts.remove(&id).is_some())
    }

    #[instrument(skip(self, request), err)]
    async fn update(&self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        for (field, value) in [
            ("patient_name", &request.patient_name),
            ("account_number", &request.account_number),
            ("insurance_id", &request.insurance_id),
        ] {
            if let Some(value) = value {
                require(field, value)?;
            }
        }

        let mut inner = self.inner.write().await;
        let current_session = inner.accounts.get(&id).ok_or(DbError::NotFound)?.session_id.clone();

        // Moving a record counts against the target session's limit
        if let Some(session_id) = &request.session_id
            && *session_id != current_session
        {
            self.check_session_capacity(&inner, session_id)?;
        }

        let account = inner.accounts.get_mut(&id).ok_or(DbError::NotFound)?;

        if let Some(session_id) = &request.session_id {
            account.session_id = session_id.clone();
        }
        if let Some(patient_name) = &request.patient_name {
            account.patient_name = patient_name.clone();
        }
        if let Some(account_number) = &request.account_number {
            account.account_number = account_number.clone();
        }
        if let Some(insurance_id) = &request.insurance_id {
            account.insurance_id = insurance_id.clone();
        }

        for (slot, value) in [
            (&mut account.rep_name, &request.rep_name),
            (&mut account.call_reference, &request.call_reference),
            (&mut account.denial_code, &request.denial_code),
            (&mut account.denial_description, &request.denial_description),
            (&mut account.date_of_service, &request.date_of_service),
            (&mut account.eligibility_effective_date, &request.eligibility_effective_date),
            (&mut account.eligibility_status, &request.eligibility_status),
            (&mut account.notes, &request.notes),
        ] {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }

        account.updated_at = Utc::now();

        Ok(account.clone())
    }
}

#[async_trait::async_trait]
impl AccountStore for InMemoryAccounts {
    #[instrument(skip(self), fields(session_id = %abbrev_session(session_id)), err)]
    async fn delete_session(&self, session_id: &str) -> Result<usize> {
        let mut inner = self.inner.write().await;
        let before = inner.accounts.len();
        inner.accounts.retain(|_, a| a.session_id != session_id);
        Ok(before - inner.accounts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(session_id: &str, patient_name: &str) -> AccountCreateDBRequest {
        AccountCreateDBRequest {
            session_id: session_id.to_string(),
            patient_name: patient_name.to_string(),
            account_number: "A-100".to_string(),
            insurance_id: "INS-1".to_string(),
            rep_name: None,
            call_reference: None,
            denial_code: None,
            denial_description: None,
            date_of_service: None,
            eligibility_effective_date: None,
            eligibility_status: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryAccounts::new();

        let first = repo.create(&create_request("s1", "Jane")).await.unwrap();
        let second = repo.create(&create_request("s1", "John")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryAccounts::new();

        let first = repo.create(&create_request("s1", "Jane")).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());
        assert!(!repo.delete(first.id).await.unwrap());

        let second = repo.create(&create_request("s1", "John")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_required_fields() {
        let repo = InMemoryAccounts::new();

        let mut request = create_request("s1", "Jane");
        request.insurance_id = "   ".to_string();

        let err = repo.create(&request).await.unwrap_err();
        assert!(matches!(err, DbError::CheckViolation { ref field, .. } if field == "insurance_id"));
        assert!(repo.list(&AccountFilter::new(0, 100)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_filters_by_session_in_id_order() {
        let repo = InMemoryAccounts::new();
        repo.create(&create_request("s1", "A")).await.unwrap();
        repo.create(&create_request("s2", "B")).await.unwrap();
        repo.create(&create_request("s1", "C")).await.unwrap();

        let s1 = repo.list(&AccountFilter::new(0, 100).with_session("s1".to_string())).await.unwrap();
        let names: Vec<_> = s1.iter().map(|a| a.patient_name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);

        let paged = repo.list(&AccountFilter::new(1, 1)).await.unwrap();
        assert_eq!(paged.len(), 1);
        assert_eq!(paged[0].patient_name, "B");
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let repo = InMemoryAccounts::new();
        let mut request = create_request("s1", "Jane");
        request.rep_name = Some("Bob".to_string());
        request.notes = Some("first".to_string());
        let created = repo.create(&request).await.unwrap();

        let update = AccountUpdateDBRequest {
            rep_name: Some(None),
            notes: Some(Some("second".to_string())),
            ..Default::default()
        };
        let updated = repo.update(created.id, &update).await.unwrap();

        assert_eq!(updated.patient_name, "Jane");
        assert_eq!(updated.rep_name, None);
        assert_eq!(updated.notes.as_deref(), Some("second"));
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_and_invalid() {
        let repo = InMemoryAccounts::new();
        let err = repo.update(42, &AccountUpdateDBRequest::default()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound));

        let created = repo.create(&create_request("s1", "Jane")).await.unwrap();
        let update = AccountUpdateDBRequest {
            patient_name: Some(String::new()),
            ..Default::default()
        };
        let err = repo.update(created.id, &update).await.unwrap_err();
        assert!(matches!(err, DbError::CheckViolation { .. }));
        assert_eq!(repo.get_by_id(created.id).await.unwrap().unwrap().patient_name, "Jane");
    }

    #[tokio::test]
    async fn test_session_limit() {
        let repo = InMemoryAccounts::new().with_session_limit(Some(1));
        repo.create(&create_request("s1", "Jane")).await.unwrap();

        let err = repo.create(&create_request("s1", "John")).await.unwrap_err();
        assert!(matches!(err, DbError::CheckViolation { ref field, .. } if field == "session_id"));

        repo.create(&create_request("s2", "John")).await.unwrap();
    }

    #[tokio::test]
    async fn test_session_limit_applies_to_moves() {
        let repo = InMemoryAccounts::new().with_session_limit(Some(1));
        repo.create(&create_request("s1", "Jane")).await.unwrap();
        let john = repo.create(&create_request("s2", "John")).await.unwrap();

        let move_to_s1 = AccountUpdateDBRequest {
            session_id: Some("s1".to_string()),
            ..Default::default()
        };
        let err = repo.update(john.id, &move_to_s1).await.unwrap_err();
        assert!(matches!(err, DbError::CheckViolation { ref field, .. } if field == "session_id"));
        assert_eq!(repo.get_by_id(john.id).await.unwrap().unwrap().session_id, "s2");

        // Re-stating the current session is not a move
        let stay = AccountUpdateDBRequest {
            session_id: Some("s2".to_string()),
            notes: Some(Some("still here".to_string())),
            ..Default::default()
        };
        let updated = repo.update(john.id, &stay).await.unwrap();
        assert_eq!(updated.notes.as_deref(), Some("still here"));

        // A session with room accepts the move
        let move_to_s3 = AccountUpdateDBRequest {
            session_id: Some("s3".to_string()),
            ..Default::default()
        };
        assert_eq!(repo.update(john.id, &move_to_s3).await.unwrap().session_id, "s3");
    }

    #[tokio::test]
    async fn test_list_whole_session_unbounded() {
        let repo = InMemoryAccounts::new();
        for i in 0..5 {
            repo.create(&create_request("s1", &format!("P{i}"))).await.unwrap();
        }
        repo.create(&create_request("s2", "Other")).await.unwrap();

        let all = repo
            .list(&AccountFilter::unbounded().with_session("s1".to_string()))
            .await
            .unwrap();
        assert_eq!(all.len(), 5);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_delete_session() {
        let repo = InMemoryAccounts::new();
        repo.create(&create_request("s1", "A")).await.unwrap();
        repo.create(&create_request("s2", "B")).await.unwrap();
        repo.create(&create_request("s1", "C")).await.unwrap();

        assert_eq!(repo.delete_session("s1").await.unwrap(), 2);
        assert_eq!(repo.delete_session("s1").await.unwrap(), 0);

        let remaining = repo.list(&AccountFilter::new(0, 100)).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].session_id, "s2");
    }
}
