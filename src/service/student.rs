//! Student service.

use std::ops::Deref;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::Student;
use crate::error::Result;
use crate::port::StudentStore;
use crate::validation::student_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to students, with lookups over their natural keys.
pub struct StudentService<S> {
    inner: EntityService<Student, S>,
}

impl<S: StudentStore> StudentService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("Student", store, student_rules()),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, student_id: i32) -> Result<Option<Student>> {
        guard::positive("student_id", student_id)?;
        self.inner.store().get_by_id(student_id).await
    }

    pub async fn by_first_name(&self, first_name: &str) -> Result<Vec<Student>> {
        guard::non_blank("first_name", first_name)?;
        self.inner.store().by_first_name(first_name).await
    }

    pub async fn by_last_name(&self, last_name: &str) -> Result<Vec<Student>> {
        guard::non_blank("last_name", last_name)?;
        self.inner.store().by_last_name(last_name).await
    }

    pub async fn by_full_name(&self, first_name: &str, last_name: &str) -> Result<Vec<Student>> {
        guard::non_blank("first_name", first_name)?;
        guard::non_blank("last_name", last_name)?;
        self.inner.store().by_full_name(first_name, last_name).await
    }

    pub async fn by_class_name(&self, class_name: &str) -> Result<Vec<Student>> {
        guard::non_blank("class_name", class_name)?;
        self.inner.store().by_class_name(class_name).await
    }

    pub async fn by_parent_id(&self, parent_id: i32) -> Result<Vec<Student>> {
        guard::positive("parent_id", parent_id)?;
        self.inner.store().by_parent_id(parent_id).await
    }

    pub async fn by_date_of_birth(&self, date_of_birth: NaiveDate) -> Result<Vec<Student>> {
        self.inner.store().by_date_of_birth(date_of_birth).await
    }
}

impl<S> Deref for StudentService<S> {
    type Target = EntityService<Student, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
