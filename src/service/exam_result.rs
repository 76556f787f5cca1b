//! Exam-result service.

use std::ops::Deref;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::ExamResult;
use crate::error::Result;
use crate::port::ExamResultStore;
use crate::validation::exam_result_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to exam results.
pub struct ExamResultService<S> {
    inner: EntityService<ExamResult, S>,
}

impl<S: ExamResultStore> ExamResultService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("ExamResult", store, exam_result_rules()),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, exam_result_id: i32) -> Result<Option<ExamResult>> {
        guard::positive("exam_result_id", exam_result_id)?;
        self.inner.store().get_by_id(exam_result_id).await
    }

    /// One student's result for one exam.
    pub async fn by_student_and_exam(
        &self,
        student_id: i32,
        exam_id: i32,
    ) -> Result<Option<ExamResult>> {
        guard::positive("student_id", student_id)?;
        guard::positive("exam_id", exam_id)?;
        self.inner.store().by_student_and_exam(student_id, exam_id).await
    }

    pub async fn by_exam_id(&self, exam_id: i32) -> Result<Vec<ExamResult>> {
        guard::positive("exam_id", exam_id)?;
        self.inner.store().by_exam_id(exam_id).await
    }

    pub async fn by_exam_name(&self, exam_name: &str) -> Result<Vec<ExamResult>> {
        guard::non_blank("exam_name", exam_name)?;
        self.inner.store().by_exam_name(exam_name).await
    }

    pub async fn by_student_id(&self, student_id: i32) -> Result<Vec<ExamResult>> {
        guard::positive("student_id", student_id)?;
        self.inner.store().by_student_id(student_id).await
    }

    pub async fn by_score(&self, score: Decimal) -> Result<Vec<ExamResult>> {
        guard::score("score", score)?;
        self.inner.store().by_score(score).await
    }
}

impl<S> Deref for ExamResultService<S> {
    type Target = EntityService<ExamResult, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
