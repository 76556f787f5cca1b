//! Class-schedule service.

use std::ops::Deref;
use std::sync::Arc;

use chrono::{NaiveTime, Weekday};

use crate::domain::ClassSchedule;
use crate::error::Result;
use crate::port::ClassScheduleStore;
use crate::validation::class_schedule_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to class timetables.
pub struct ClassScheduleService<S> {
    inner: EntityService<ClassSchedule, S>,
}

impl<S: ClassScheduleStore> ClassScheduleService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("ClassSchedule", store, class_schedule_rules()),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, class_schedule_id: i32) -> Result<Option<ClassSchedule>> {
        guard::positive("class_schedule_id", class_schedule_id)?;
        self.inner.store().get_by_id(class_schedule_id).await
    }

    pub async fn by_class_name(&self, class_name: &str) -> Result<Vec<ClassSchedule>> {
        guard::non_blank("class_name", class_name)?;
        self.inner.store().by_class_name(class_name).await
    }

    pub async fn by_day_of_week(&self, day: Weekday) -> Result<Vec<ClassSchedule>> {
        self.inner.store().by_day_of_week(day).await
    }

    pub async fn by_start_time(&self, starts_at: NaiveTime) -> Result<Vec<ClassSchedule>> {
        self.inner.store().by_start_time(starts_at).await
    }

    pub async fn by_ending_time(&self, ends_at: NaiveTime) -> Result<Vec<ClassSchedule>> {
        self.inner.store().by_ending_time(ends_at).await
    }

    pub async fn by_time_range(
        &self,
        starts_at: NaiveTime,
        ends_at: NaiveTime,
    ) -> Result<Vec<ClassSchedule>> {
        guard::ordered_times(starts_at, ends_at)?;
        self.inner.store().by_time_range(starts_at, ends_at).await
    }

    pub async fn by_subject_id(&self, subject_id: i32) -> Result<Vec<ClassSchedule>> {
        guard::positive("subject_id", subject_id)?;
        self.inner.store().by_subject_id(subject_id).await
    }
}

impl<S> Deref for ClassScheduleService<S> {
    type Target = EntityService<ClassSchedule, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
