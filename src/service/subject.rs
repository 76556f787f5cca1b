//! Subject service.

use std::ops::Deref;
use std::sync::Arc;

use crate::domain::Subject;
use crate::error::Result;
use crate::port::SubjectStore;
use crate::validation::subject_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to subjects.
pub struct SubjectService<S> {
    inner: EntityService<Subject, S>,
}

impl<S: SubjectStore> SubjectService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("Subject", store, subject_rules()),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, subject_id: i32) -> Result<Option<Subject>> {
        guard::positive("subject_id", subject_id)?;
        self.inner.store().get_by_id(subject_id).await
    }

    pub async fn by_name(&self, subject_name: &str) -> Result<Option<Subject>> {
        guard::non_blank("subject_name", subject_name)?;
        self.inner.store().by_name(subject_name).await
    }
}

impl<S> Deref for SubjectService<S> {
    type Target = EntityService<Subject, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
