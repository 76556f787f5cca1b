//! Trimester-rate service.

use std::ops::Deref;
use std::sync::Arc;

use crate::domain::StudentTrimesterRate;
use crate::error::Result;
use crate::port::StudentTrimesterRateStore;
use crate::validation::trimester_rate_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to per-trimester subject rates.
pub struct StudentTrimesterRateService<S> {
    inner: EntityService<StudentTrimesterRate, S>,
}

impl<S: StudentTrimesterRateStore> StudentTrimesterRateService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("StudentTrimesterRate", store, trimester_rate_rules()),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, student_rate_id: i32) -> Result<Option<StudentTrimesterRate>> {
        guard::positive("student_rate_id", student_rate_id)?;
        self.inner.store().get_by_id(student_rate_id).await
    }

    pub async fn by_student_id(&self, student_id: i32) -> Result<Vec<StudentTrimesterRate>> {
        guard::positive("student_id", student_id)?;
        self.inner.store().by_student_id(student_id).await
    }

    pub async fn by_student_per_trimester(
        &self,
        student_id: i32,
        trimester: i32,
    ) -> Result<Vec<StudentTrimesterRate>> {
        guard::positive("student_id", student_id)?;
        guard::in_interval("trimester", trimester, 1, 3)?;
        self.inner
            .store()
            .by_student_per_trimester(student_id, trimester)
            .await
    }

    pub async fn by_student_per_trimester_in_year(
        &self,
        student_id: i32,
        trimester: i32,
        start_year: i32,
    ) -> Result<Vec<StudentTrimesterRate>> {
        guard::positive("student_id", student_id)?;
        guard::in_interval("trimester", trimester, 1, 3)?;
        guard::school_year("start_year", start_year)?;
        self.inner
            .store()
            .by_student_per_trimester_in_year(student_id, trimester, start_year)
            .await
    }

    pub async fn by_student_per_subject(
        &self,
        student_id: i32,
        subject_id: i32,
    ) -> Result<Vec<StudentTrimesterRate>> {
        guard::positive("student_id", student_id)?;
        guard::positive("subject_id", subject_id)?;
        self.inner
            .store()
            .by_student_per_subject(student_id, subject_id)
            .await
    }

    pub async fn by_student_per_subject_per_trimester(
        &self,
        student_id: i32,
        trimester: i32,
        subject_id: i32,
    ) -> Result<Vec<StudentTrimesterRate>> {
        guard::positive("student_id", student_id)?;
        guard::in_interval("trimester", trimester, 1, 3)?;
        guard::positive("subject_id", subject_id)?;
        self.inner
            .store()
            .by_student_per_subject_per_trimester(student_id, trimester, subject_id)
            .await
    }

    /// Natural-key read: one student's rate for one subject, trimester and
    /// school year.
    pub async fn rate_for(
        &self,
        student_id: i32,
        trimester: i32,
        subject_id: i32,
        start_year: i32,
    ) -> Result<Option<StudentTrimesterRate>> {
        guard::positive("student_id", student_id)?;
        guard::in_interval("trimester", trimester, 1, 3)?;
        guard::positive("subject_id", subject_id)?;
        guard::school_year("start_year", start_year)?;
        self.inner
            .store()
            .rate_for(student_id, trimester, subject_id, start_year)
            .await
    }

    /// Same read with the subject resolved by name.
    pub async fn rate_for_subject_name(
        &self,
        student_id: i32,
        trimester: i32,
        subject_name: &str,
        start_year: i32,
    ) -> Result<Option<StudentTrimesterRate>> {
        guard::positive("student_id", student_id)?;
        guard::in_interval("trimester", trimester, 1, 3)?;
        guard::non_blank("subject_name", subject_name)?;
        guard::school_year("start_year", start_year)?;
        self.inner
            .store()
            .rate_for_subject_name(student_id, trimester, subject_name, start_year)
            .await
    }

    pub async fn by_start_year(&self, start_year: i32) -> Result<Vec<StudentTrimesterRate>> {
        guard::school_year("start_year", start_year)?;
        self.inner.store().by_start_year(start_year).await
    }

    pub async fn by_end_year(&self, end_year: i32) -> Result<Vec<StudentTrimesterRate>> {
        guard::school_year("end_year", end_year)?;
        self.inner.store().by_end_year(end_year).await
    }
}

impl<S> Deref for StudentTrimesterRateService<S> {
    type Target = EntityService<StudentTrimesterRate, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
