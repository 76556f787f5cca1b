//! Grade-level service.

use std::ops::Deref;
use std::sync::Arc;

use crate::domain::GradeLevel;
use crate::error::Result;
use crate::port::GradeLevelStore;
use crate::validation::grade_level_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to grade levels.
pub struct GradeLevelService<S> {
    inner: EntityService<GradeLevel, S>,
}

impl<S: GradeLevelStore> GradeLevelService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("GradeLevel", store, grade_level_rules()),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, grade_level_id: i32) -> Result<Option<GradeLevel>> {
        guard::positive("grade_level_id", grade_level_id)?;
        self.inner.store().get_by_id(grade_level_id).await
    }

    pub async fn by_name(&self, grade_name: &str) -> Result<Option<GradeLevel>> {
        guard::non_blank("grade_name", grade_name)?;
        self.inner.store().by_name(grade_name).await
    }
}

impl<S> Deref for GradeLevelService<S> {
    type Target = EntityService<GradeLevel, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
