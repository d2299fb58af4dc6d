use gather_shared::ActivityDto;

use crate::error::BackendError;

/// The remote collaborator the store syncs against.
///
/// Each call is an opaque async request that either completes or fails
/// with a [`BackendError`]; the store treats every failure uniformly (log,
/// abort the commit) regardless of the underlying cause. The store never
/// enforces timeouts; that responsibility belongs to implementations.
#[async_trait::async_trait]
pub trait ActivityBackend: Send + Sync {
    async fn list_all(&self) -> Result<Vec<ActivityDto>, BackendError>;

    async fn create(&self, activity: &ActivityDto) -> Result<(), BackendError>;

    async fn update(&self, activity: &ActivityDto) -> Result<(), BackendError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), BackendError>;
}
