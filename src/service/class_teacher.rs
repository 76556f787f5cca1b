//! Class-teacher service.

use std::ops::Deref;
use std::sync::Arc;

use crate::domain::ClassTeacher;
use crate::error::Result;
use crate::port::ClassTeacherStore;
use crate::validation::class_teacher_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to teacher-to-class assignments.
pub struct ClassTeacherService<S> {
    inner: EntityService<ClassTeacher, S>,
}

impl<S: ClassTeacherStore> ClassTeacherService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("ClassTeacher", store, class_teacher_rules()),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, class_teacher_id: i32) -> Result<Option<ClassTeacher>> {
        guard::positive("class_teacher_id", class_teacher_id)?;
        self.inner.store().get_by_id(class_teacher_id).await
    }

    pub async fn by_class_name(&self, class_name: &str) -> Result<Vec<ClassTeacher>> {
        guard::non_blank("class_name", class_name)?;
        self.inner.store().by_class_name(class_name).await
    }

    pub async fn by_teacher_id(&self, teacher_id: i32) -> Result<Vec<ClassTeacher>> {
        guard::positive("teacher_id", teacher_id)?;
        self.inner.store().by_teacher_id(teacher_id).await
    }
}

impl<S> Deref for ClassTeacherService<S> {
    type Target = EntityService<ClassTeacher, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
