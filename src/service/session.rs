//! Session service.

use std::ops::Deref;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};

use crate::domain::Session;
use crate::error::Result;
use crate::port::SessionStore;
use crate::validation::session_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to taught sessions.
pub struct SessionService<S> {
    inner: EntityService<Session, S>,
}

impl<S: SessionStore> SessionService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("Session", store, session_rules()),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, session_id: i32) -> Result<Option<Session>> {
        guard::positive("session_id", session_id)?;
        self.inner.store().get_by_id(session_id).await
    }

    pub async fn by_class_subject_id(&self, class_subject_id: i32) -> Result<Vec<Session>> {
        guard::positive("class_subject_id", class_subject_id)?;
        self.inner.store().by_class_subject_id(class_subject_id).await
    }

    pub async fn by_date(&self, date: NaiveDate) -> Result<Vec<Session>> {
        guard::not_future("date", date)?;
        self.inner.store().by_date(date).await
    }

    pub async fn by_start_time(&self, starts_at: NaiveTime) -> Result<Vec<Session>> {
        self.inner.store().by_start_time(starts_at).await
    }

    pub async fn by_ending_time(&self, ends_at: NaiveTime) -> Result<Vec<Session>> {
        self.inner.store().by_ending_time(ends_at).await
    }

    pub async fn by_time_range(
        &self,
        starts_at: NaiveTime,
        ends_at: NaiveTime,
    ) -> Result<Vec<Session>> {
        guard::ordered_times(starts_at, ends_at)?;
        self.inner.store().by_time_range(starts_at, ends_at).await
    }
}

impl<S> Deref for SessionService<S> {
    type Target = EntityService<Session, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
