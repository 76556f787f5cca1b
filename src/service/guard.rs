//! Parameter guards shared by every specialized query.
//!
//! Guards run synchronously before any storage call; a failed guard means
//! the store is never reached.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{Error, Result};
use crate::validation::today;

/// ID-shaped parameters must be positive.
pub(crate) fn positive(name: &'static str, value: i32) -> Result<()> {
    if value <= 0 {
        return Err(Error::invalid_argument(name, "must be a positive integer"));
    }
    Ok(())
}

/// Free-text lookup keys must be non-empty after trimming.
pub(crate) fn non_blank(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(name, "must not be empty"));
    }
    Ok(())
}

/// Range queries require `from <= to`.
pub(crate) fn ordered_dates(from: NaiveDate, to: NaiveDate) -> Result<()> {
    if from > to {
        return Err(Error::invalid_argument(
            "from",
            "start date cannot be later than the end date",
        ));
    }
    Ok(())
}

/// Time-of-day ranges require `starts_at <= ends_at`.
pub(crate) fn ordered_times(starts_at: NaiveTime, ends_at: NaiveTime) -> Result<()> {
    if starts_at > ends_at {
        return Err(Error::invalid_argument(
            "starts_at",
            "start time cannot be later than the end time",
        ));
    }
    Ok(())
}

/// Real-world occurrence dates cannot lie in the future.
pub(crate) fn not_future(name: &'static str, date: NaiveDate) -> Result<()> {
    if date > today() {
        return Err(Error::invalid_argument(name, "cannot be later than today"));
    }
    Ok(())
}

/// Closed integer interval, e.g. trimester 1-3.
pub(crate) fn in_interval(name: &'static str, value: i32, min: i32, max: i32) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(Error::invalid_argument(
            name,
            format!("must be between {min} and {max}"),
        ));
    }
    Ok(())
}

/// Scores live on the closed 0-20 scale.
pub(crate) fn score(name: &'static str, value: Decimal) -> Result<()> {
    if value < dec!(0) || value > dec!(20) {
        return Err(Error::invalid_argument(name, "must be between 0 and 20"));
    }
    Ok(())
}

/// Academic years start after 2000 in this system.
pub(crate) fn school_year(name: &'static str, value: i32) -> Result<()> {
    if value <= 2000 {
        return Err(Error::invalid_argument(name, "must be greater than 2000"));
    }
    Ok(())
}

/// Yearly general rates live on the closed 0-100 scale.
pub(crate) fn general_rate(name: &'static str, value: Decimal) -> Result<()> {
    if value < dec!(0) || value > dec!(100) {
        return Err(Error::invalid_argument(name, "must be between 0 and 100"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert!(positive("student_id", 1).is_ok());
        assert!(positive("student_id", 0).is_err());
        assert!(positive("student_id", -7).is_err());
    }

    #[test]
    fn non_blank_rejects_whitespace() {
        assert!(non_blank("class_name", "7B").is_ok());
        assert!(non_blank("class_name", "   ").is_err());
    }

    #[test]
    fn date_order_and_future_bound() {
        let today = today();
        assert!(ordered_dates(today, today).is_ok());
        assert!(ordered_dates(today, today - chrono::Days::new(1)).is_err());
        assert!(not_future("date", today).is_ok());
        assert!(not_future("date", today + chrono::Days::new(1)).is_err());
    }

    #[test]
    fn score_bounds() {
        assert!(score("score", dec!(0)).is_ok());
        assert!(score("score", dec!(20)).is_ok());
        assert!(score("score", dec!(-0.5)).is_err());
        assert!(score("score", dec!(20.5)).is_err());
    }

    #[test]
    fn general_rate_bounds() {
        assert!(general_rate("rate", dec!(0)).is_ok());
        assert!(general_rate("rate", dec!(100)).is_ok());
        assert!(general_rate("rate", dec!(-1)).is_err());
        assert!(general_rate("rate", dec!(100.01)).is_err());
    }
}
