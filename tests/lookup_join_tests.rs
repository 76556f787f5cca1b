//! Finders that resolve through another entity: parent by student, class by
//! grade name, results by exam name, rates by subject name.

mod support;

use chalkboard::testkit::builders;
use rust_decimal_macros::dec;
use support::registry::registry;

#[tokio::test]
async fn parent_resolves_through_the_student_record() {
    let reg = registry();
    let mut student = builders::student(1);
    student.parent_id = 7;
    reg.parents.add(builders::parent(7)).await.unwrap();
    reg.students.add(student).await.unwrap();

    let parent = reg.parents.by_student_id(1).await.unwrap().unwrap();
    assert_eq!(parent.parent_id, 7);
    assert!(reg.parents.by_student_id(2).await.unwrap().is_none());
}

#[tokio::test]
async fn classes_resolve_through_the_grade_level_name() {
    let reg = registry();
    reg.grade_levels.add(builders::grade_level(1)).await.unwrap();
    reg.classes.add(builders::class(1)).await.unwrap();
    let mut other = builders::class(2);
    other.class_name = "8A".into();
    other.grade_level_id = 2;
    reg.classes.add(other).await.unwrap();

    let seventh = reg.classes.by_grade_level_name("Grade 7").await.unwrap();
    assert_eq!(seventh.len(), 1);
    assert_eq!(seventh[0].class_name, "7B");
    assert!(reg
        .classes
        .by_grade_level_name("Grade 12")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn results_resolve_through_the_exam_name() {
    let reg = registry();
    reg.exams.add(builders::exam(4)).await.unwrap();
    let mut result = builders::exam_result(1);
    result.exam_id = 4;
    reg.exam_results.add(result).await.unwrap();

    let found = reg
        .exam_results
        .by_exam_name("First Trimester Exam")
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].exam_id, 4);
    assert!(reg
        .exam_results
        .by_exam_name("Final Exam")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn exam_natural_key_returns_one_result() {
    let reg = registry();
    let mut result = builders::exam_result(1);
    result.student_id = 2;
    result.exam_id = 3;
    reg.exam_results.add(result).await.unwrap();

    assert!(reg
        .exam_results
        .by_student_and_exam(2, 3)
        .await
        .unwrap()
        .is_some());
    assert!(reg
        .exam_results
        .by_student_and_exam(2, 4)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn trimester_rate_natural_key_lookups_agree() {
    let reg = registry();
    reg.subjects.add(builders::subject(1)).await.unwrap();
    reg.trimester_rates.add(builders::trimester_rate(1)).await.unwrap();

    let by_id = reg
        .trimester_rates
        .rate_for(1, 1, 1, 2023)
        .await
        .unwrap()
        .unwrap();
    let by_name = reg
        .trimester_rates
        .rate_for_subject_name(1, 1, "Mathematics", 2023)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(by_id, by_name);
    assert_eq!(by_id.rate, Some(dec!(13.25)));
    assert!(reg
        .trimester_rates
        .rate_for_subject_name(1, 1, "History", 2023)
        .await
        .unwrap()
        .is_none());
    assert!(reg
        .trimester_rates
        .rate_for(1, 2, 1, 2023)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn teachers_resolve_through_class_assignments() {
    let reg = registry();
    reg.teachers.add(builders::teacher(1)).await.unwrap();
    let mut assignment = builders::class_teacher(1);
    assignment.teacher_id = 1;
    reg.class_teachers.add(assignment).await.unwrap();

    let teachers = reg.teachers.by_class_name("7B").await.unwrap();
    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0].teacher_id, 1);
    assert!(reg.teachers.by_class_name("8A").await.unwrap().is_empty());
}

#[tokio::test]
async fn teacher_schedule_narrows_by_subject_teacher_and_class() {
    let reg = registry();
    let mut slot = builders::teacher_schedule(1);
    slot.teacher_id = 2;
    slot.subject_id = 3;
    reg.teacher_schedules.add(slot).await.unwrap();

    assert_eq!(
        reg.teacher_schedules
            .by_subject_and_teacher(3, 2)
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        reg.teacher_schedules
            .by_subject_teacher_and_class(3, 2, "7B")
            .await
            .unwrap()
            .len(),
        1
    );
    assert!(reg
        .teacher_schedules
        .by_subject_teacher_and_class(3, 2, "8A")
        .await
        .unwrap()
        .is_empty());
}
