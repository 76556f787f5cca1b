//! Teacher service.

use std::ops::Deref;
use std::sync::Arc;

use crate::domain::Teacher;
use crate::error::Result;
use crate::port::TeacherStore;
use crate::validation::teacher_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to teachers.
pub struct TeacherService<S> {
    inner: EntityService<Teacher, S>,
}

impl<S: TeacherStore> TeacherService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("Teacher", store, teacher_rules()),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, teacher_id: i32) -> Result<Option<Teacher>> {
        guard::positive("teacher_id", teacher_id)?;
        self.inner.store().get_by_id(teacher_id).await
    }

    pub async fn by_email(&self, email: &str) -> Result<Option<Teacher>> {
        guard::non_blank("email", email)?;
        self.inner.store().by_email(email).await
    }

    pub async fn by_phone_number(&self, phone_number: &str) -> Result<Option<Teacher>> {
        guard::non_blank("phone_number", phone_number)?;
        self.inner.store().by_phone_number(phone_number).await
    }

    pub async fn by_user_id(&self, user_id: i32) -> Result<Option<Teacher>> {
        guard::positive("user_id", user_id)?;
        self.inner.store().by_user_id(user_id).await
    }

    pub async fn by_class_name(&self, class_name: &str) -> Result<Vec<Teacher>> {
        guard::non_blank("class_name", class_name)?;
        self.inner.store().by_class_name(class_name).await
    }

    pub async fn by_first_name(&self, first_name: &str) -> Result<Vec<Teacher>> {
        guard::non_blank("first_name", first_name)?;
        self.inner.store().by_first_name(first_name).await
    }

    pub async fn by_last_name(&self, last_name: &str) -> Result<Vec<Teacher>> {
        guard::non_blank("last_name", last_name)?;
        self.inner.store().by_last_name(last_name).await
    }

    pub async fn by_subject_specialization(&self, specialization: &str) -> Result<Vec<Teacher>> {
        guard::non_blank("subject_specialization", specialization)?;
        self.inner.store().by_subject_specialization(specialization).await
    }
}

impl<S> Deref for TeacherService<S> {
    type Target = EntityService<Teacher, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
