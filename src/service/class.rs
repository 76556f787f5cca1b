//! Class service.

use std::ops::Deref;
use std::sync::Arc;

use crate::domain::Class;
use crate::error::Result;
use crate::port::ClassStore;
use crate::validation::class_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to classes.
pub struct ClassService<S> {
    inner: EntityService<Class, S>,
}

impl<S: ClassStore> ClassService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("Class", store, class_rules()),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, class_id: i32) -> Result<Option<Class>> {
        guard::positive("class_id", class_id)?;
        self.inner.store().get_by_id(class_id).await
    }

    pub async fn by_name(&self, class_name: &str) -> Result<Option<Class>> {
        guard::non_blank("class_name", class_name)?;
        self.inner.store().by_name(class_name).await
    }

    pub async fn by_grade_level_id(&self, grade_level_id: i32) -> Result<Vec<Class>> {
        guard::positive("grade_level_id", grade_level_id)?;
        self.inner.store().by_grade_level_id(grade_level_id).await
    }

    pub async fn by_grade_level_name(&self, grade_name: &str) -> Result<Vec<Class>> {
        guard::non_blank("grade_name", grade_name)?;
        self.inner.store().by_grade_level_name(grade_name).await
    }
}

impl<S> Deref for ClassService<S> {
    type Target = EntityService<Class, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
