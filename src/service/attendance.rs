//! Attendance service.
//!
//! Each lookup dimension comes in three public flavors: unfiltered,
//! presents only, absents only. The store sees a single method per
//! dimension with an optional status filter.

use std::ops::Deref;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{Attendance, AttendanceStatus};
use crate::error::Result;
use crate::port::AttendanceStore;
use crate::validation::attendance_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to attendance records.
pub struct AttendanceService<S> {
    inner: EntityService<Attendance, S>,
}

impl<S: AttendanceStore> AttendanceService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("Attendance", store, attendance_rules()),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, attendance_id: i32) -> Result<Option<Attendance>> {
        guard::positive("attendance_id", attendance_id)?;
        self.inner.store().get_by_id(attendance_id).await
    }

    pub async fn by_student_id(&self, student_id: i32) -> Result<Vec<Attendance>> {
        self.student_dim(student_id, None).await
    }

    pub async fn by_student_id_presents(&self, student_id: i32) -> Result<Vec<Attendance>> {
        self.student_dim(student_id, Some(AttendanceStatus::Present)).await
    }

    pub async fn by_student_id_absents(&self, student_id: i32) -> Result<Vec<Attendance>> {
        self.student_dim(student_id, Some(AttendanceStatus::Absent)).await
    }

    pub async fn by_class_name(&self, class_name: &str) -> Result<Vec<Attendance>> {
        self.class_dim(class_name, None).await
    }

    pub async fn by_class_name_presents(&self, class_name: &str) -> Result<Vec<Attendance>> {
        self.class_dim(class_name, Some(AttendanceStatus::Present)).await
    }

    pub async fn by_class_name_absents(&self, class_name: &str) -> Result<Vec<Attendance>> {
        self.class_dim(class_name, Some(AttendanceStatus::Absent)).await
    }

    pub async fn by_session_id(&self, session_id: i32) -> Result<Vec<Attendance>> {
        self.session_dim(session_id, None).await
    }

    pub async fn by_session_id_presents(&self, session_id: i32) -> Result<Vec<Attendance>> {
        self.session_dim(session_id, Some(AttendanceStatus::Present)).await
    }

    pub async fn by_session_id_absents(&self, session_id: i32) -> Result<Vec<Attendance>> {
        self.session_dim(session_id, Some(AttendanceStatus::Absent)).await
    }

    pub async fn by_date(&self, date: NaiveDate) -> Result<Vec<Attendance>> {
        self.date_dim(date, None).await
    }

    pub async fn by_date_presents(&self, date: NaiveDate) -> Result<Vec<Attendance>> {
        self.date_dim(date, Some(AttendanceStatus::Present)).await
    }

    pub async fn by_date_absents(&self, date: NaiveDate) -> Result<Vec<Attendance>> {
        self.date_dim(date, Some(AttendanceStatus::Absent)).await
    }

    pub async fn by_date_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Attendance>> {
        self.range_dim(from, to, None).await
    }

    pub async fn by_date_range_presents(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Attendance>> {
        self.range_dim(from, to, Some(AttendanceStatus::Present)).await
    }

    pub async fn by_date_range_absents(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Attendance>> {
        self.range_dim(from, to, Some(AttendanceStatus::Absent)).await
    }

    async fn student_dim(
        &self,
        student_id: i32,
        status: Option<AttendanceStatus>,
    ) -> Result<Vec<Attendance>> {
        guard::positive("student_id", student_id)?;
        self.inner.store().by_student_id(student_id, status).await
    }

    async fn class_dim(
        &self,
        class_name: &str,
        status: Option<AttendanceStatus>,
    ) -> Result<Vec<Attendance>> {
        guard::non_blank("class_name", class_name)?;
        self.inner.store().by_class_name(class_name, status).await
    }

    async fn session_dim(
        &self,
        session_id: i32,
        status: Option<AttendanceStatus>,
    ) -> Result<Vec<Attendance>> {
        guard::positive("session_id", session_id)?;
        self.inner.store().by_session_id(session_id, status).await
    }

    async fn date_dim(
        &self,
        date: NaiveDate,
        status: Option<AttendanceStatus>,
    ) -> Result<Vec<Attendance>> {
        guard::not_future("date", date)?;
        self.inner.store().by_date(date, status).await
    }

    async fn range_dim(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        status: Option<AttendanceStatus>,
    ) -> Result<Vec<Attendance>> {
        guard::ordered_dates(from, to)?;
        guard::not_future("to", to)?;
        self.inner.store().by_date_range(from, to, status).await
    }
}

impl<S> Deref for AttendanceService<S> {
    type Target = EntityService<Attendance, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
