//! Query parameter guards: bad parameters fail fast, before storage.

mod support;

use chalkboard::Error;
use chrono::{Days, NaiveTime, Utc};
use rust_decimal_macros::dec;
use support::registry::registry;

#[tokio::test]
async fn non_positive_ids_are_rejected() {
    let reg = registry();
    for id in [0, -1] {
        assert!(reg.students.by_id(id).await.unwrap_err().is_caller_error());
        assert!(reg.exams.by_id(id).await.unwrap_err().is_caller_error());
        assert!(reg
            .attendances
            .by_student_id(id)
            .await
            .unwrap_err()
            .is_caller_error());
    }
}

#[tokio::test]
async fn blank_text_keys_are_rejected() {
    let reg = registry();
    for key in ["", "   "] {
        assert!(reg
            .classes
            .by_name(key)
            .await
            .unwrap_err()
            .is_caller_error());
        assert!(reg
            .students
            .by_class_name(key)
            .await
            .unwrap_err()
            .is_caller_error());
        assert!(reg
            .users
            .by_username(key)
            .await
            .unwrap_err()
            .is_caller_error());
    }
}

#[tokio::test]
async fn inverted_time_range_is_rejected() {
    let reg = registry();
    let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let ten = NaiveTime::from_hms_opt(10, 0, 0).unwrap();

    assert!(reg
        .sessions
        .by_time_range(ten, eight)
        .await
        .unwrap_err()
        .is_caller_error());
    assert!(reg.sessions.by_time_range(eight, ten).await.unwrap().is_empty());
}

#[tokio::test]
async fn future_occurrence_dates_are_rejected() {
    let reg = registry();
    let today = Utc::now().date_naive();
    let tomorrow = today + Days::new(1);

    assert!(reg
        .sessions
        .by_date(tomorrow)
        .await
        .unwrap_err()
        .is_caller_error());
    assert!(reg
        .attendances
        .by_date(tomorrow)
        .await
        .unwrap_err()
        .is_caller_error());
    // Exams are scheduled ahead of time; a future date is a normal lookup.
    assert!(reg.exams.by_date_scheduled(tomorrow).await.unwrap().is_empty());
}

#[tokio::test]
async fn inverted_date_range_is_rejected() {
    let reg = registry();
    let today = Utc::now().date_naive();

    assert!(reg
        .attendances
        .by_date_range(today, today - Days::new(1))
        .await
        .unwrap_err()
        .is_caller_error());
    assert!(reg
        .attendances
        .by_date_range(today - Days::new(7), today)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn date_range_ending_in_the_future_is_rejected() {
    let reg = registry();
    let today = Utc::now().date_naive();

    let err = reg
        .attendances
        .by_date_range(today - Days::new(1), today + Days::new(1))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { name: "to", .. }));
    assert!(reg
        .attendances
        .by_date_range_presents(today, today + Days::new(1))
        .await
        .unwrap_err()
        .is_caller_error());
}

#[tokio::test]
async fn trimester_and_factor_windows_are_enforced() {
    let reg = registry();
    for trimester in [0, 4] {
        assert!(reg
            .exams
            .by_trimester(trimester)
            .await
            .unwrap_err()
            .is_caller_error());
        assert!(reg
            .trimester_rates
            .by_student_per_trimester(1, trimester)
            .await
            .unwrap_err()
            .is_caller_error());
    }
    for trimester in [1, 3] {
        assert!(reg.exams.by_trimester(trimester).await.unwrap().is_empty());
    }

    for factor in [0, 11] {
        assert!(reg
            .class_subjects
            .by_subject_factor(factor)
            .await
            .unwrap_err()
            .is_caller_error());
    }
}

#[tokio::test]
async fn score_and_rate_scales_are_enforced() {
    let reg = registry();
    for score in [dec!(-0.5), dec!(20.5)] {
        assert!(reg
            .exam_results
            .by_score(score)
            .await
            .unwrap_err()
            .is_caller_error());
    }
    for score in [dec!(0), dec!(20)] {
        assert!(reg.exam_results.by_score(score).await.unwrap().is_empty());
    }

    assert!(reg
        .general_rates
        .by_rate(dec!(101))
        .await
        .unwrap_err()
        .is_caller_error());
    assert!(reg.general_rates.by_rate(dec!(100)).await.unwrap().is_empty());
}

#[tokio::test]
async fn school_year_lookups_reject_out_of_range_years() {
    let reg = registry();
    assert!(reg
        .general_rates
        .by_start_year(1999)
        .await
        .unwrap_err()
        .is_caller_error());
    assert!(reg
        .trimester_rates
        .by_end_year(2000)
        .await
        .unwrap_err()
        .is_caller_error());
    assert!(reg.general_rates.by_start_year(2023).await.unwrap().is_empty());
}
