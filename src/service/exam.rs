//! Exam service.

use std::ops::Deref;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::Exam;
use crate::error::Result;
use crate::port::ExamStore;
use crate::validation::exam_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to exams.
pub struct ExamService<S> {
    inner: EntityService<Exam, S>,
}

impl<S: ExamStore> ExamService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("Exam", store, exam_rules()),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, exam_id: i32) -> Result<Option<Exam>> {
        guard::positive("exam_id", exam_id)?;
        self.inner.store().get_by_id(exam_id).await
    }

    pub async fn by_name(&self, exam_name: &str) -> Result<Option<Exam>> {
        guard::non_blank("exam_name", exam_name)?;
        self.inner.store().by_name(exam_name).await
    }

    pub async fn by_class_subject_id(&self, class_subject_id: i32) -> Result<Vec<Exam>> {
        guard::positive("class_subject_id", class_subject_id)?;
        self.inner.store().by_class_subject_id(class_subject_id).await
    }

    /// Exams planned for a given day; future dates are a normal lookup here.
    pub async fn by_date_scheduled(&self, date_scheduled: NaiveDate) -> Result<Vec<Exam>> {
        self.inner.store().by_date_scheduled(date_scheduled).await
    }

    pub async fn by_trimester(&self, trimester: i32) -> Result<Vec<Exam>> {
        guard::in_interval("trimester", trimester, 1, 3)?;
        self.inner.store().by_trimester(trimester).await
    }
}

impl<S> Deref for ExamService<S> {
    type Target = EntityService<Exam, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
