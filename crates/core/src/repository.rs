//! Repository contract: persistence access over one entity type.

use std::sync::Arc;

use async_trait::async_trait;

use crate::entity::Entity;

/// Persistence-access contract over entities of one type.
///
/// This is purely an interface boundary: no storage strategy is mandated and
/// no implementation ships with this crate. Operations are `async` because
/// real backends do I/O; the contract imposes no ordering, batching, or
/// locking discipline, and any concurrency control (optimistic locking on
/// [`Repository::save`], retries) belongs to the implementing backend.
///
/// Each backend brings its own failure taxonomy via [`Repository::Error`].
/// "Not found" is not a failure — [`Repository::by_id`] reports absence as
/// `None`.
#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity + Send + Sync,
{
    /// Backend-specific failure type (connection loss, serialization, ...).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Look up an entity by its identifier.
    ///
    /// Returns `None` when no entity carries the identifier.
    async fn by_id(&self, id: &E::Id) -> Result<Option<E>, Self::Error>;

    /// Persist the entity (insert or update).
    ///
    /// Saving the same entity state twice is idempotent.
    async fn save(&self, entity: &E) -> Result<(), Self::Error>;

    /// Remove the entity by its identity.
    ///
    /// Whether removing an already-absent entity is a failure is the
    /// backend's choice.
    async fn remove(&self, entity: &E) -> Result<(), Self::Error>;
}

#[async_trait]
impl<E, R> Repository<E> for Arc<R>
where
    E: Entity + Send + Sync,
    R: Repository<E> + ?Sized,
{
    type Error = R::Error;

    async fn by_id(&self, id: &E::Id) -> Result<Option<E>, Self::Error> {
        (**self).by_id(id).await
    }

    async fn save(&self, entity: &E) -> Result<(), Self::Error> {
        (**self).save(entity).await
    }

    async fn remove(&self, entity: &E) -> Result<(), Self::Error> {
        (**self).remove(entity).await
    }
}
