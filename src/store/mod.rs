use crate::models::status::StatusCheck;
use async_trait::async_trait;
use thiserror::Error;

/// In-memory backing store, used when no MongoDB URI is configured.
pub mod memory;

/// MongoDB backing store.
pub mod mongo;

/// Errors surfaced by a [`StatusStore`] implementation.
///
/// `Validation` maps to HTTP 422 at the route layer; `Backend` maps to 500.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("backing store unavailable: {0}")]
    Backend(#[from] mongodb::error::Error),
}

impl StoreError {
    pub fn empty_client_name() -> Self {
        StoreError::Validation {
            field: "client_name",
            message: "field is required and must be a non-empty string".to_string(),
        }
    }
}

/// # Status Store Contract
///
/// Storage of [`StatusCheck`] records behind an injected abstraction, so the
/// backing implementation (in-memory vec, MongoDB collection) is swappable
/// without touching the HTTP surface.
///
/// The contract is append-only: no update or delete operations exist.
/// Each `create` is atomic. It either fully appends a complete record or has
/// no effect; `list_all` never observes a partial record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Constructs a new record with a freshly generated unique id and the
    /// current server timestamp, then appends it to the backing store.
    ///
    /// Fails with [`StoreError::Validation`] if `client_name` is empty or
    /// whitespace-only; no record is created in that case.
    async fn create(&self, client_name: &str) -> Result<StatusCheck, StoreError>;

    /// Returns every stored record, insertion order preserved. No filtering,
    /// no pagination. Side-effect-free; an empty store yields an empty vec.
    async fn list_all(&self) -> Result<Vec<StatusCheck>, StoreError>;
}

/// Shared request validation for store implementations: rejects empty or
/// whitespace-only input before any record is constructed. The submitted
/// value itself is persisted as-is, surrounding whitespace included.
pub(crate) fn validate_client_name(client_name: &str) -> Result<(), StoreError> {
    if client_name.trim().is_empty() {
        return Err(StoreError::empty_client_name());
    }
    Ok(())
}
