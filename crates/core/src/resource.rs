//! CRUD capability shared by every entity endpoint
//!
//! The list controller and the reference helpers only see this trait, so
//! response envelopes and URL layouts stay inside each client.

use crate::model::Record;
use async_trait::async_trait;

/// Typed CRUD operations for one entity
#[async_trait]
pub trait Resource: Send + Sync {
    /// Entity returned by reads
    type Entity: Record + Send + Sync;
    /// Payload accepted by [`Resource::create`]
    type Create: Send + Sync;
    /// Partial payload accepted by [`Resource::update`]
    type Update: Send + Sync;
    /// Error raised by the underlying transport
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short name used in log events
    fn name(&self) -> &'static str;

    /// Fetch one zero-based page
    async fn list(&self, page: u32) -> Result<Vec<Self::Entity>, Self::Error>;

    /// Fetch a single entity
    async fn get(&self, id: i64) -> Result<Option<Self::Entity>, Self::Error>;

    /// Create an entity; the server may or may not echo it back
    async fn create(&self, payload: &Self::Create) -> Result<Option<Self::Entity>, Self::Error>;

    /// Apply a partial update
    async fn update(
        &self,
        id: i64,
        payload: &Self::Update,
    ) -> Result<Option<Self::Entity>, Self::Error>;

    /// Delete an entity; `Ok` means it is gone
    async fn delete(&self, id: i64) -> Result<(), Self::Error>;
}
