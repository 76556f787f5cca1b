//! Teacher-schedule service.

use std::ops::Deref;
use std::sync::Arc;

use chrono::{NaiveTime, Weekday};

use crate::domain::TeacherSchedule;
use crate::error::Result;
use crate::port::TeacherScheduleStore;
use crate::validation::teacher_schedule_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to teachers' weekly schedules.
pub struct TeacherScheduleService<S> {
    inner: EntityService<TeacherSchedule, S>,
}

impl<S: TeacherScheduleStore> TeacherScheduleService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("TeacherSchedule", store, teacher_schedule_rules()),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, teacher_schedule_id: i32) -> Result<Option<TeacherSchedule>> {
        guard::positive("teacher_schedule_id", teacher_schedule_id)?;
        self.inner.store().get_by_id(teacher_schedule_id).await
    }

    pub async fn by_teacher_id(&self, teacher_id: i32) -> Result<Vec<TeacherSchedule>> {
        guard::positive("teacher_id", teacher_id)?;
        self.inner.store().by_teacher_id(teacher_id).await
    }

    pub async fn by_class_name(&self, class_name: &str) -> Result<Vec<TeacherSchedule>> {
        guard::non_blank("class_name", class_name)?;
        self.inner.store().by_class_name(class_name).await
    }

    pub async fn by_day_of_week(&self, day: Weekday) -> Result<Vec<TeacherSchedule>> {
        self.inner.store().by_day_of_week(day).await
    }

    pub async fn by_start_time(&self, starts_at: NaiveTime) -> Result<Vec<TeacherSchedule>> {
        self.inner.store().by_start_time(starts_at).await
    }

    pub async fn by_ending_time(&self, ends_at: NaiveTime) -> Result<Vec<TeacherSchedule>> {
        self.inner.store().by_ending_time(ends_at).await
    }

    pub async fn by_time_range(
        &self,
        starts_at: NaiveTime,
        ends_at: NaiveTime,
    ) -> Result<Vec<TeacherSchedule>> {
        guard::ordered_times(starts_at, ends_at)?;
        self.inner.store().by_time_range(starts_at, ends_at).await
    }

    pub async fn by_subject_id(&self, subject_id: i32) -> Result<Vec<TeacherSchedule>> {
        guard::positive("subject_id", subject_id)?;
        self.inner.store().by_subject_id(subject_id).await
    }

    pub async fn by_subject_and_teacher(
        &self,
        subject_id: i32,
        teacher_id: i32,
    ) -> Result<Vec<TeacherSchedule>> {
        guard::positive("subject_id", subject_id)?;
        guard::positive("teacher_id", teacher_id)?;
        self.inner
            .store()
            .by_subject_and_teacher(subject_id, teacher_id)
            .await
    }

    pub async fn by_subject_teacher_and_class(
        &self,
        subject_id: i32,
        teacher_id: i32,
        class_name: &str,
    ) -> Result<Vec<TeacherSchedule>> {
        guard::positive("subject_id", subject_id)?;
        guard::positive("teacher_id", teacher_id)?;
        guard::non_blank("class_name", class_name)?;
        self.inner
            .store()
            .by_subject_teacher_and_class(subject_id, teacher_id, class_name)
            .await
    }
}

impl<S> Deref for TeacherScheduleService<S> {
    type Target = EntityService<TeacherSchedule, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
