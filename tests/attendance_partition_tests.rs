//! Attendance status partitioning: for every lookup dimension the presents
//! and absents variants split the unfiltered result exactly.

mod support;

use chalkboard::domain::AttendanceStatus;
use chalkboard::testkit::builders;
use chrono::{Days, Utc};
use support::registry::registry;

/// Ten records for one session: six present, four absent.
async fn seeded() -> support::registry::TestRegistry {
    let reg = registry();
    let records = (1..=10)
        .map(|id| {
            let mut a = builders::attendance(id);
            a.student_id = id;
            a.status = if id <= 6 {
                AttendanceStatus::Present
            } else {
                AttendanceStatus::Absent
            };
            a
        })
        .collect();
    reg.attendances.add_range(records).await.unwrap();
    reg
}

#[tokio::test]
async fn session_dimension_partitions_by_status() {
    let reg = seeded().await;

    let all = reg.attendances.by_session_id(1).await.unwrap();
    let presents = reg.attendances.by_session_id_presents(1).await.unwrap();
    let absents = reg.attendances.by_session_id_absents(1).await.unwrap();

    assert_eq!(all.len(), 10);
    assert_eq!(presents.len(), 6);
    assert_eq!(absents.len(), 4);
    assert!(presents
        .iter()
        .all(|a| a.status == AttendanceStatus::Present));
    assert!(absents.iter().all(|a| a.status == AttendanceStatus::Absent));
}

#[tokio::test]
async fn class_dimension_partitions_by_status() {
    let reg = seeded().await;

    let all = reg.attendances.by_class_name("7B").await.unwrap();
    let presents = reg.attendances.by_class_name_presents("7B").await.unwrap();
    let absents = reg.attendances.by_class_name_absents("7B").await.unwrap();

    assert_eq!(presents.len() + absents.len(), all.len());
    assert!(reg.attendances.by_class_name("9C").await.unwrap().is_empty());
}

#[tokio::test]
async fn student_dimension_filters_to_one_record() {
    let reg = seeded().await;

    assert_eq!(reg.attendances.by_student_id(3).await.unwrap().len(), 1);
    assert_eq!(
        reg.attendances.by_student_id_presents(3).await.unwrap().len(),
        1
    );
    assert!(reg
        .attendances
        .by_student_id_absents(3)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn date_range_dimension_partitions_by_status() {
    let reg = seeded().await;
    let today = Utc::now().date_naive();
    let from = today - Days::new(7);

    let all = reg.attendances.by_date_range(from, today).await.unwrap();
    let presents = reg
        .attendances
        .by_date_range_presents(from, today)
        .await
        .unwrap();
    let absents = reg
        .attendances
        .by_date_range_absents(from, today)
        .await
        .unwrap();

    assert_eq!(all.len(), 10);
    assert_eq!(presents.len(), 6);
    assert_eq!(absents.len(), 4);
}
