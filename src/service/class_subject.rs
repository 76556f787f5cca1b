//! Class-subject service.

use std::ops::Deref;
use std::sync::Arc;

use crate::domain::ClassSubject;
use crate::error::Result;
use crate::port::ClassSubjectStore;
use crate::validation::class_subject_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to subject-to-class assignments.
pub struct ClassSubjectService<S> {
    inner: EntityService<ClassSubject, S>,
}

impl<S: ClassSubjectStore> ClassSubjectService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("ClassSubject", store, class_subject_rules()),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, class_subject_id: i32) -> Result<Option<ClassSubject>> {
        guard::positive("class_subject_id", class_subject_id)?;
        self.inner.store().get_by_id(class_subject_id).await
    }

    pub async fn by_class_name(&self, class_name: &str) -> Result<Vec<ClassSubject>> {
        guard::non_blank("class_name", class_name)?;
        self.inner.store().by_class_name(class_name).await
    }

    pub async fn by_subject_id(&self, subject_id: i32) -> Result<Vec<ClassSubject>> {
        guard::positive("subject_id", subject_id)?;
        self.inner.store().by_subject_id(subject_id).await
    }

    pub async fn by_teacher_id(&self, teacher_id: i32) -> Result<Vec<ClassSubject>> {
        guard::positive("teacher_id", teacher_id)?;
        self.inner.store().by_teacher_id(teacher_id).await
    }

    /// Assignments carrying a given grading weight (1-10).
    pub async fn by_subject_factor(&self, subject_factor: i32) -> Result<Vec<ClassSubject>> {
        guard::in_interval("subject_factor", subject_factor, 1, 10)?;
        self.inner.store().by_subject_factor(subject_factor).await
    }
}

impl<S> Deref for ClassSubjectService<S> {
    type Target = EntityService<ClassSubject, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
