//! Valid-by-construction entity builders.
//!
//! Every builder returns a record that passes its rule set; tests mutate
//! one field at a time to provoke specific violations. The `id` parameter
//! feeds the synthetic identity so batches stay distinguishable.

use chrono::{Days, NaiveDate, NaiveTime, Utc, Weekday};
use rust_decimal_macros::dec;

use crate::domain::{
    Attendance, AttendanceStatus, Class, ClassSchedule, ClassSubject, ClassTeacher, Exam,
    ExamResult, GradeLevel, Parent, Role, Session, Student, StudentGeneralRate,
    StudentTrimesterRate, Subject, Teacher, TeacherSchedule, User,
};

fn yesterday() -> NaiveDate {
    Utc::now().date_naive() - Days::new(1)
}

fn eight_am() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap()
}

fn ten_am() -> NaiveTime {
    NaiveTime::from_hms_opt(10, 0, 0).unwrap()
}

pub fn student(id: i32) -> Student {
    Student {
        student_id: id,
        first_name: "Amira".into(),
        last_name: "Haddad".into(),
        date_of_birth: NaiveDate::from_ymd_opt(2012, 3, 14).unwrap(),
        class_name: "7B".into(),
        parent_id: id,
    }
}

pub fn teacher(id: i32) -> Teacher {
    Teacher {
        teacher_id: id,
        first_name: "Nadia".into(),
        last_name: "Karim".into(),
        subject_specialization: Some("Mathematics".into()),
        phone_number: "+21612345678".into(),
        email: Some("nadia.karim@school.test".into()),
        user_id: Some(id),
    }
}

pub fn teacher_schedule(id: i32) -> TeacherSchedule {
    TeacherSchedule {
        teacher_schedule_id: id,
        teacher_id: id,
        subject_id: 1,
        class_name: "7B".into(),
        day_of_week: Weekday::Mon,
        start_time: eight_am(),
        end_time: ten_am(),
    }
}

pub fn parent(id: i32) -> Parent {
    Parent {
        parent_id: id,
        first_name: "Omar".into(),
        last_name: "Haddad".into(),
        phone_number: "+21698765432".into(),
        email: Some("omar.haddad@family.test".into()),
    }
}

pub fn class(id: i32) -> Class {
    Class {
        class_id: id,
        class_name: "7B".into(),
        grade_level_id: 1,
    }
}

pub fn class_schedule(id: i32) -> ClassSchedule {
    ClassSchedule {
        class_schedule_id: id,
        class_name: "7B".into(),
        subject_id: 1,
        day_of_week: Weekday::Mon,
        start_time: eight_am(),
        end_time: ten_am(),
    }
}

pub fn class_subject(id: i32) -> ClassSubject {
    ClassSubject {
        class_subject_id: id,
        class_name: "7B".into(),
        subject_id: 1,
        teacher_id: 1,
        subject_factor: Some(3),
    }
}

pub fn class_teacher(id: i32) -> ClassTeacher {
    ClassTeacher {
        class_teacher_id: id,
        class_name: "7B".into(),
        teacher_id: 1,
    }
}

pub fn subject(id: i32) -> Subject {
    Subject {
        subject_id: id,
        subject_name: "Mathematics".into(),
    }
}

pub fn grade_level(id: i32) -> GradeLevel {
    GradeLevel {
        grade_level_id: id,
        grade_name: "Grade 7".into(),
    }
}

pub fn session(id: i32) -> Session {
    Session {
        session_id: id,
        class_subject_id: 1,
        date: yesterday(),
        start_time: eight_am(),
        end_time: ten_am(),
    }
}

pub fn exam(id: i32) -> Exam {
    Exam {
        exam_id: id,
        exam_name: "First Trimester Exam".into(),
        class_subject_id: 1,
        date_scheduled: Utc::now().date_naive() + Days::new(7),
        trimester: 1,
    }
}

pub fn exam_result(id: i32) -> ExamResult {
    ExamResult {
        exam_result_id: id,
        student_id: 1,
        exam_id: 1,
        score: Some(dec!(14.5)),
        date_taken: yesterday(),
        note: None,
    }
}

pub fn general_rate(id: i32) -> StudentGeneralRate {
    StudentGeneralRate {
        student_rate_id: id,
        student_id: 1,
        class_name: "7B".into(),
        rate: dec!(72.5),
        start_year: 2023,
        end_year: 2024,
    }
}

pub fn trimester_rate(id: i32) -> StudentTrimesterRate {
    StudentTrimesterRate {
        student_rate_id: id,
        student_id: 1,
        subject_id: 1,
        trimester: 1,
        start_year: 2023,
        end_year: 2024,
        in_class_activities_note: Some(dec!(12)),
        first_test_note: Some(dec!(13.5)),
        second_test_note: Some(dec!(11)),
        exam_note: Some(dec!(15)),
        rate: Some(dec!(13.25)),
    }
}

pub fn user(id: i32) -> User {
    User {
        user_id: id,
        username: format!("teacher{id:02}"),
        password_hash: "correct-horse".into(),
        role: Role::Teacher,
        email: "nadia.karim@school.test".into(),
        first_name: "Nadia".into(),
        last_name: "Karim".into(),
        created_at: Utc::now(),
    }
}

pub fn attendance(id: i32) -> Attendance {
    Attendance {
        attendance_id: id,
        student_id: 1,
        class_name: "7B".into(),
        session_id: 1,
        date: yesterday(),
        status: AttendanceStatus::Present,
    }
}
