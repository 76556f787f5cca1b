//! Yearly general-rate service.

use std::ops::Deref;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::StudentGeneralRate;
use crate::error::Result;
use crate::port::StudentGeneralRateStore;
use crate::validation::general_rate_rules;

use super::core::{EntityService, Mutability};
use super::guard;

/// Validated access to yearly general rates.
pub struct StudentGeneralRateService<S> {
    inner: EntityService<StudentGeneralRate, S>,
}

impl<S: StudentGeneralRateStore> StudentGeneralRateService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            inner: EntityService::new("StudentGeneralRate", store, general_rate_rules()),
        }
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.inner = self.inner.with_mutability(mutability);
        self
    }

    pub async fn by_id(&self, student_rate_id: i32) -> Result<Option<StudentGeneralRate>> {
        guard::positive("student_rate_id", student_rate_id)?;
        self.inner.store().get_by_id(student_rate_id).await
    }

    pub async fn by_student_id(&self, student_id: i32) -> Result<Vec<StudentGeneralRate>> {
        guard::positive("student_id", student_id)?;
        self.inner.store().by_student_id(student_id).await
    }

    pub async fn by_class_name(&self, class_name: &str) -> Result<Vec<StudentGeneralRate>> {
        guard::non_blank("class_name", class_name)?;
        self.inner.store().by_class_name(class_name).await
    }

    /// General rates are percentages, not marks on the 0-20 scale.
    pub async fn by_rate(&self, rate: Decimal) -> Result<Vec<StudentGeneralRate>> {
        guard::general_rate("rate", rate)?;
        self.inner.store().by_rate(rate).await
    }

    pub async fn by_start_year(&self, start_year: i32) -> Result<Vec<StudentGeneralRate>> {
        guard::school_year("start_year", start_year)?;
        self.inner.store().by_start_year(start_year).await
    }

    pub async fn by_end_year(&self, end_year: i32) -> Result<Vec<StudentGeneralRate>> {
        guard::school_year("end_year", end_year)?;
        self.inner.store().by_end_year(end_year).await
    }
}

impl<S> Deref for StudentGeneralRateService<S> {
    type Target = EntityService<StudentGeneralRate, S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
