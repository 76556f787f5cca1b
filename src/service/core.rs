//! The generic validated mutation pipeline.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{Error, Result, ValidationFailure};
use crate::port::{Store, Validate};

/// Whether a service accepts mutations.
///
/// Wiring decides per entity; a read-only service rejects every mutation
/// with [`Error::MutationDisabled`] before validation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mutability {
    #[default]
    Mutable,
    ReadOnly,
}

type PrePersist<E> = Arc<dyn Fn(&mut E) -> Result<()> + Send + Sync>;

/// Uniform, validation-gated CRUD for one entity type.
///
/// Every mutation runs the same fixed pipeline: capability gate → rule-set
/// validation → optional pre-persist transform → store. The transform stage
/// is a no-op unless wiring injects one (the user service injects credential
/// hashing); entity-specific behavior is composed in, never subclassed.
///
/// This layer performs no existence, uniqueness, or foreign-key checks:
/// those belong to the store and its backing schema, and their errors
/// propagate unchanged.
pub struct EntityService<E, S> {
    entity: &'static str,
    store: Arc<S>,
    validator: Arc<dyn Validate<E>>,
    mutability: Mutability,
    pre_persist: Option<PrePersist<E>>,
}

impl<E, S> EntityService<E, S>
where
    E: Send + Sync,
    S: Store<E>,
{
    /// Create a mutable service with no pre-persist transform.
    pub fn new(
        entity: &'static str,
        store: Arc<S>,
        validator: impl Validate<E> + 'static,
    ) -> Self {
        Self {
            entity,
            store,
            validator: Arc::new(validator),
            mutability: Mutability::default(),
            pre_persist: None,
        }
    }

    /// Set the mutation capability.
    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.mutability = mutability;
        self
    }

    /// Install a transform applied between validation and persistence.
    #[must_use]
    pub fn with_pre_persist(
        mut self,
        transform: impl Fn(&mut E) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.pre_persist = Some(Arc::new(transform));
        self
    }

    /// Entity type name, used in errors and logs.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Current mutation capability.
    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    /// The wired store, for the specialized query methods.
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Validate and persist a new entity.
    pub async fn add(&self, mut entity: E) -> Result<()> {
        self.ensure_mutable()?;
        self.check(&entity)?;
        self.transform(&mut entity)?;
        self.store.add(&entity).await?;
        debug!(entity = self.entity, "added");
        Ok(())
    }

    /// Validate **every** entity in the batch before any is persisted.
    ///
    /// The first failing entity aborts the whole batch with its aggregated
    /// violations; zero entities reach the store. An empty batch is a caller
    /// error.
    pub async fn add_range(&self, mut entities: Vec<E>) -> Result<()> {
        self.ensure_mutable()?;
        if entities.is_empty() {
            return Err(Error::invalid_argument(
                "entities",
                "batch cannot be empty",
            ));
        }
        for entity in &entities {
            self.check(entity)?;
        }
        for entity in &mut entities {
            self.transform(entity)?;
        }
        self.store.add_range(&entities).await?;
        debug!(entity = self.entity, count = entities.len(), "batch added");
        Ok(())
    }

    /// Validate and persist an update.
    ///
    /// No existence check: a missing identity surfaces whatever the store's
    /// own not-found semantics are.
    pub async fn update(&self, mut entity: E) -> Result<()> {
        self.ensure_mutable()?;
        self.check(&entity)?;
        self.transform(&mut entity)?;
        self.store.update(&entity).await?;
        debug!(entity = self.entity, "updated");
        Ok(())
    }

    /// Delete an entity. `None` (the shape a failed lookup hands the caller)
    /// fails with [`Error::NullArgument`]. No existence check.
    pub async fn delete(&self, entity: Option<&E>) -> Result<()> {
        self.ensure_mutable()?;
        let entity = entity.ok_or(Error::NullArgument { name: "entity" })?;
        self.store.delete(entity).await
    }

    /// Delete a batch. An empty batch is a caller error.
    pub async fn delete_range(&self, entities: &[E]) -> Result<()> {
        self.ensure_mutable()?;
        if entities.is_empty() {
            return Err(Error::invalid_argument(
                "entities",
                "batch cannot be empty",
            ));
        }
        self.store.delete_range(entities).await
    }

    /// List every stored entity. Full materialization, no paging.
    pub async fn get_all(&self) -> Result<Vec<E>> {
        self.store.get_all().await
    }

    fn ensure_mutable(&self) -> Result<()> {
        match self.mutability {
            Mutability::Mutable => Ok(()),
            Mutability::ReadOnly => Err(Error::MutationDisabled {
                entity: self.entity,
            }),
        }
    }

    fn check(&self, entity: &E) -> Result<()> {
        let report = self.validator.validate(entity);
        if report.is_valid() {
            return Ok(());
        }
        warn!(
            entity = self.entity,
            violations = report.violations().len(),
            "validation failed"
        );
        Err(Error::Validation(ValidationFailure {
            entity: self.entity,
            violations: report.into_violations(),
        }))
    }

    fn transform(&self, entity: &mut E) -> Result<()> {
        match &self.pre_persist {
            Some(transform) => transform(entity),
            None => Ok(()),
        }
    }
}
