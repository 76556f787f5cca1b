//! Parent service.

use std::ops::Deref;
use std::sync::Arc;

use crate::domain::Parent;
use crate::error::Result;
use crate::port::ParentStore;
use crate::validation::parent_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to parents/guardians.
pub struct ParentService<S> {
    inner: EntityService<Parent, S>,
}

impl<S: ParentStore> ParentService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("Parent", store, parent_rules()),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, parent_id: i32) -> Result<Option<Parent>> {
        guard::positive("parent_id", parent_id)?;
        self.inner.store().get_by_id(parent_id).await
    }

    /// The parent of a given student.
    pub async fn by_student_id(&self, student_id: i32) -> Result<Option<Parent>> {
        guard::positive("student_id", student_id)?;
        self.inner.store().by_student_id(student_id).await
    }

    pub async fn by_email(&self, email: &str) -> Result<Option<Parent>> {
        guard::non_blank("email", email)?;
        self.inner.store().by_email(email).await
    }

    pub async fn by_phone_number(&self, phone_number: &str) -> Result<Option<Parent>> {
        guard::non_blank("phone_number", phone_number)?;
        self.inner.store().by_phone_number(phone_number).await
    }

    pub async fn by_first_name(&self, first_name: &str) -> Result<Vec<Parent>> {
        guard::non_blank("first_name", first_name)?;
        self.inner.store().by_first_name(first_name).await
    }

    pub async fn by_last_name(&self, last_name: &str) -> Result<Vec<Parent>> {
        guard::non_blank("last_name", last_name)?;
        self.inner.store().by_last_name(last_name).await
    }
}

impl<S> Deref for ParentService<S> {
    type Target = EntityService<Parent, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
