//! Store port for persistence operations.
//!
//! [`Store`] is the generic key-addressable contract every entity shares;
//! the per-entity traits below add the finder methods named after each
//! entity's natural keys. Adapters are expected to provide at least the
//! durability and identity semantics of a relational table with an integer
//! primary key.
//!
//! # Implementation notes
//!
//! - Implementations must be thread-safe (`Send + Sync`).
//! - Methods return futures that can be awaited; cancellation propagates
//!   through the future, this layer installs no signal of its own.
//! - Not-found on `update`/`delete`, uniqueness, and referential integrity
//!   are adapter concerns; services forward without existence checks.

use std::future::Future;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use rust_decimal::Decimal;

use crate::domain::{
    Attendance, AttendanceStatus, Class, ClassSchedule, ClassSubject, ClassTeacher, Exam,
    ExamResult, GradeLevel, Parent, Role, Session, Student, StudentGeneralRate,
    StudentTrimesterRate, Subject, Teacher, TeacherSchedule, User,
};
use crate::error::Result;

/// Generic storage operations for one entity type.
pub trait Store<E>: Send + Sync {
    /// Get an entity by its synthetic identity.
    fn get_by_id(&self, id: i32) -> impl Future<Output = Result<Option<E>>> + Send;

    /// List every stored entity. No paging; full materialization.
    fn get_all(&self) -> impl Future<Output = Result<Vec<E>>> + Send;

    /// Persist a new entity.
    fn add(&self, entity: &E) -> impl Future<Output = Result<()>> + Send;

    /// Persist a batch of new entities.
    fn add_range(&self, entities: &[E]) -> impl Future<Output = Result<()>> + Send;

    /// Update an existing entity, matched by identity.
    fn update(&self, entity: &E) -> impl Future<Output = Result<()>> + Send;

    /// Delete an entity, matched by identity.
    fn delete(&self, entity: &E) -> impl Future<Output = Result<()>> + Send;

    /// Delete a batch of entities, matched by identity.
    fn delete_range(&self, entities: &[E]) -> impl Future<Output = Result<()>> + Send;
}

/// Student finders.
pub trait StudentStore: Store<Student> {
    fn by_first_name(&self, first_name: &str)
        -> impl Future<Output = Result<Vec<Student>>> + Send;

    fn by_last_name(&self, last_name: &str) -> impl Future<Output = Result<Vec<Student>>> + Send;

    fn by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> impl Future<Output = Result<Vec<Student>>> + Send;

    fn by_class_name(&self, class_name: &str)
        -> impl Future<Output = Result<Vec<Student>>> + Send;

    fn by_parent_id(&self, parent_id: i32) -> impl Future<Output = Result<Vec<Student>>> + Send;

    fn by_date_of_birth(
        &self,
        date_of_birth: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Student>>> + Send;
}

/// Teacher finders.
pub trait TeacherStore: Store<Teacher> {
    fn by_email(&self, email: &str) -> impl Future<Output = Result<Option<Teacher>>> + Send;

    fn by_phone_number(
        &self,
        phone_number: &str,
    ) -> impl Future<Output = Result<Option<Teacher>>> + Send;

    fn by_user_id(&self, user_id: i32) -> impl Future<Output = Result<Option<Teacher>>> + Send;

    fn by_class_name(&self, class_name: &str)
        -> impl Future<Output = Result<Vec<Teacher>>> + Send;

    fn by_first_name(&self, first_name: &str)
        -> impl Future<Output = Result<Vec<Teacher>>> + Send;

    fn by_last_name(&self, last_name: &str) -> impl Future<Output = Result<Vec<Teacher>>> + Send;

    fn by_subject_specialization(
        &self,
        specialization: &str,
    ) -> impl Future<Output = Result<Vec<Teacher>>> + Send;
}

/// Teacher-schedule finders.
pub trait TeacherScheduleStore: Store<TeacherSchedule> {
    fn by_teacher_id(
        &self,
        teacher_id: i32,
    ) -> impl Future<Output = Result<Vec<TeacherSchedule>>> + Send;

    fn by_class_name(
        &self,
        class_name: &str,
    ) -> impl Future<Output = Result<Vec<TeacherSchedule>>> + Send;

    fn by_day_of_week(
        &self,
        day: Weekday,
    ) -> impl Future<Output = Result<Vec<TeacherSchedule>>> + Send;

    fn by_start_time(
        &self,
        starts_at: NaiveTime,
    ) -> impl Future<Output = Result<Vec<TeacherSchedule>>> + Send;

    fn by_ending_time(
        &self,
        ends_at: NaiveTime,
    ) -> impl Future<Output = Result<Vec<TeacherSchedule>>> + Send;

    fn by_time_range(
        &self,
        starts_at: NaiveTime,
        ends_at: NaiveTime,
    ) -> impl Future<Output = Result<Vec<TeacherSchedule>>> + Send;

    fn by_subject_id(
        &self,
        subject_id: i32,
    ) -> impl Future<Output = Result<Vec<TeacherSchedule>>> + Send;

    fn by_subject_and_teacher(
        &self,
        subject_id: i32,
        teacher_id: i32,
    ) -> impl Future<Output = Result<Vec<TeacherSchedule>>> + Send;

    fn by_subject_teacher_and_class(
        &self,
        subject_id: i32,
        teacher_id: i32,
        class_name: &str,
    ) -> impl Future<Output = Result<Vec<TeacherSchedule>>> + Send;
}

/// Parent finders.
pub trait ParentStore: Store<Parent> {
    fn by_student_id(&self, student_id: i32)
        -> impl Future<Output = Result<Option<Parent>>> + Send;

    fn by_email(&self, email: &str) -> impl Future<Output = Result<Option<Parent>>> + Send;

    fn by_phone_number(
        &self,
        phone_number: &str,
    ) -> impl Future<Output = Result<Option<Parent>>> + Send;

    fn by_first_name(&self, first_name: &str) -> impl Future<Output = Result<Vec<Parent>>> + Send;

    fn by_last_name(&self, last_name: &str) -> impl Future<Output = Result<Vec<Parent>>> + Send;
}

/// Class finders.
pub trait ClassStore: Store<Class> {
    fn by_name(&self, class_name: &str) -> impl Future<Output = Result<Option<Class>>> + Send;

    fn by_grade_level_id(
        &self,
        grade_level_id: i32,
    ) -> impl Future<Output = Result<Vec<Class>>> + Send;

    fn by_grade_level_name(
        &self,
        grade_name: &str,
    ) -> impl Future<Output = Result<Vec<Class>>> + Send;
}

/// Class-schedule finders.
pub trait ClassScheduleStore: Store<ClassSchedule> {
    fn by_class_name(
        &self,
        class_name: &str,
    ) -> impl Future<Output = Result<Vec<ClassSchedule>>> + Send;

    fn by_day_of_week(
        &self,
        day: Weekday,
    ) -> impl Future<Output = Result<Vec<ClassSchedule>>> + Send;

    fn by_start_time(
        &self,
        starts_at: NaiveTime,
    ) -> impl Future<Output = Result<Vec<ClassSchedule>>> + Send;

    fn by_ending_time(
        &self,
        ends_at: NaiveTime,
    ) -> impl Future<Output = Result<Vec<ClassSchedule>>> + Send;

    fn by_time_range(
        &self,
        starts_at: NaiveTime,
        ends_at: NaiveTime,
    ) -> impl Future<Output = Result<Vec<ClassSchedule>>> + Send;

    fn by_subject_id(
        &self,
        subject_id: i32,
    ) -> impl Future<Output = Result<Vec<ClassSchedule>>> + Send;
}

/// Class-subject finders.
pub trait ClassSubjectStore: Store<ClassSubject> {
    fn by_class_name(
        &self,
        class_name: &str,
    ) -> impl Future<Output = Result<Vec<ClassSubject>>> + Send;

    fn by_subject_id(
        &self,
        subject_id: i32,
    ) -> impl Future<Output = Result<Vec<ClassSubject>>> + Send;

    fn by_teacher_id(
        &self,
        teacher_id: i32,
    ) -> impl Future<Output = Result<Vec<ClassSubject>>> + Send;

    fn by_subject_factor(
        &self,
        subject_factor: i32,
    ) -> impl Future<Output = Result<Vec<ClassSubject>>> + Send;
}

/// Class-teacher finders.
pub trait ClassTeacherStore: Store<ClassTeacher> {
    fn by_class_name(
        &self,
        class_name: &str,
    ) -> impl Future<Output = Result<Vec<ClassTeacher>>> + Send;

    fn by_teacher_id(
        &self,
        teacher_id: i32,
    ) -> impl Future<Output = Result<Vec<ClassTeacher>>> + Send;
}

/// Subject finders.
pub trait SubjectStore: Store<Subject> {
    fn by_name(&self, subject_name: &str)
        -> impl Future<Output = Result<Option<Subject>>> + Send;
}

/// Grade-level finders.
pub trait GradeLevelStore: Store<GradeLevel> {
    fn by_name(&self, grade_name: &str)
        -> impl Future<Output = Result<Option<GradeLevel>>> + Send;
}

/// Session finders.
pub trait SessionStore: Store<Session> {
    fn by_class_subject_id(
        &self,
        class_subject_id: i32,
    ) -> impl Future<Output = Result<Vec<Session>>> + Send;

    fn by_date(&self, date: NaiveDate) -> impl Future<Output = Result<Vec<Session>>> + Send;

    fn by_start_time(
        &self,
        starts_at: NaiveTime,
    ) -> impl Future<Output = Result<Vec<Session>>> + Send;

    fn by_ending_time(
        &self,
        ends_at: NaiveTime,
    ) -> impl Future<Output = Result<Vec<Session>>> + Send;

    fn by_time_range(
        &self,
        starts_at: NaiveTime,
        ends_at: NaiveTime,
    ) -> impl Future<Output = Result<Vec<Session>>> + Send;
}

/// Exam finders.
pub trait ExamStore: Store<Exam> {
    fn by_name(&self, exam_name: &str) -> impl Future<Output = Result<Option<Exam>>> + Send;

    fn by_class_subject_id(
        &self,
        class_subject_id: i32,
    ) -> impl Future<Output = Result<Vec<Exam>>> + Send;

    fn by_date_scheduled(
        &self,
        date_scheduled: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Exam>>> + Send;

    fn by_trimester(&self, trimester: i32) -> impl Future<Output = Result<Vec<Exam>>> + Send;
}

/// Exam-result finders.
pub trait ExamResultStore: Store<ExamResult> {
    /// Natural-key read: one student's result for one exam.
    fn by_student_and_exam(
        &self,
        student_id: i32,
        exam_id: i32,
    ) -> impl Future<Output = Result<Option<ExamResult>>> + Send;

    fn by_exam_id(&self, exam_id: i32) -> impl Future<Output = Result<Vec<ExamResult>>> + Send;

    fn by_exam_name(
        &self,
        exam_name: &str,
    ) -> impl Future<Output = Result<Vec<ExamResult>>> + Send;

    fn by_student_id(
        &self,
        student_id: i32,
    ) -> impl Future<Output = Result<Vec<ExamResult>>> + Send;

    fn by_score(&self, score: Decimal) -> impl Future<Output = Result<Vec<ExamResult>>> + Send;
}

/// General-rate finders.
pub trait StudentGeneralRateStore: Store<StudentGeneralRate> {
    fn by_student_id(
        &self,
        student_id: i32,
    ) -> impl Future<Output = Result<Vec<StudentGeneralRate>>> + Send;

    fn by_class_name(
        &self,
        class_name: &str,
    ) -> impl Future<Output = Result<Vec<StudentGeneralRate>>> + Send;

    fn by_rate(
        &self,
        rate: Decimal,
    ) -> impl Future<Output = Result<Vec<StudentGeneralRate>>> + Send;

    fn by_start_year(
        &self,
        start_year: i32,
    ) -> impl Future<Output = Result<Vec<StudentGeneralRate>>> + Send;

    fn by_end_year(
        &self,
        end_year: i32,
    ) -> impl Future<Output = Result<Vec<StudentGeneralRate>>> + Send;
}

/// Trimester-rate finders.
pub trait StudentTrimesterRateStore: Store<StudentTrimesterRate> {
    fn by_student_id(
        &self,
        student_id: i32,
    ) -> impl Future<Output = Result<Vec<StudentTrimesterRate>>> + Send;

    fn by_student_per_trimester(
        &self,
        student_id: i32,
        trimester: i32,
    ) -> impl Future<Output = Result<Vec<StudentTrimesterRate>>> + Send;

    fn by_student_per_trimester_in_year(
        &self,
        student_id: i32,
        trimester: i32,
        start_year: i32,
    ) -> impl Future<Output = Result<Vec<StudentTrimesterRate>>> + Send;

    fn by_student_per_subject(
        &self,
        student_id: i32,
        subject_id: i32,
    ) -> impl Future<Output = Result<Vec<StudentTrimesterRate>>> + Send;

    fn by_student_per_subject_per_trimester(
        &self,
        student_id: i32,
        trimester: i32,
        subject_id: i32,
    ) -> impl Future<Output = Result<Vec<StudentTrimesterRate>>> + Send;

    /// Natural-key read: `(student, subject, trimester, start year)`.
    fn rate_for(
        &self,
        student_id: i32,
        trimester: i32,
        subject_id: i32,
        start_year: i32,
    ) -> impl Future<Output = Result<Option<StudentTrimesterRate>>> + Send;

    /// Same natural-key read with the subject resolved by name.
    fn rate_for_subject_name(
        &self,
        student_id: i32,
        trimester: i32,
        subject_name: &str,
        start_year: i32,
    ) -> impl Future<Output = Result<Option<StudentTrimesterRate>>> + Send;

    fn by_start_year(
        &self,
        start_year: i32,
    ) -> impl Future<Output = Result<Vec<StudentTrimesterRate>>> + Send;

    fn by_end_year(
        &self,
        end_year: i32,
    ) -> impl Future<Output = Result<Vec<StudentTrimesterRate>>> + Send;
}

/// User finders.
pub trait UserStore: Store<User> {
    fn by_username(&self, username: &str) -> impl Future<Output = Result<Option<User>>> + Send;

    fn by_password_hash(
        &self,
        password_hash: &str,
    ) -> impl Future<Output = Result<Option<User>>> + Send;

    fn by_role(&self, role: Role) -> impl Future<Output = Result<Vec<User>>> + Send;

    fn by_email(&self, email: &str) -> impl Future<Output = Result<Option<User>>> + Send;

    fn by_first_name(&self, first_name: &str) -> impl Future<Output = Result<Vec<User>>> + Send;

    fn by_last_name(&self, last_name: &str) -> impl Future<Output = Result<Vec<User>>> + Send;

    fn created_at(
        &self,
        created_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<User>>> + Send;
}

/// Attendance finders.
///
/// Every dimension takes an optional status filter; `None` means unfiltered.
/// The attendance service exposes the three public variants per dimension on
/// top of these.
pub trait AttendanceStore: Store<Attendance> {
    fn by_student_id(
        &self,
        student_id: i32,
        status: Option<AttendanceStatus>,
    ) -> impl Future<Output = Result<Vec<Attendance>>> + Send;

    fn by_class_name(
        &self,
        class_name: &str,
        status: Option<AttendanceStatus>,
    ) -> impl Future<Output = Result<Vec<Attendance>>> + Send;

    fn by_session_id(
        &self,
        session_id: i32,
        status: Option<AttendanceStatus>,
    ) -> impl Future<Output = Result<Vec<Attendance>>> + Send;

    fn by_date(
        &self,
        date: NaiveDate,
        status: Option<AttendanceStatus>,
    ) -> impl Future<Output = Result<Vec<Attendance>>> + Send;

    fn by_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        status: Option<AttendanceStatus>,
    ) -> impl Future<Output = Result<Vec<Attendance>>> + Send;
}
