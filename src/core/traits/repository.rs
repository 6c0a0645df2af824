use async_trait::async_trait;

use crate::core::error::Result;

/// Read-only lookup into a collaborator-owned store
///
/// Documents never write back; all repositories the crate consumes implement
/// this trait.
#[async_trait]
pub trait ReadRepository<T, ID>: Send + Sync {
    /// Find entity by ID
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;
}
