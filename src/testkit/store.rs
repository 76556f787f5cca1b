//! Vector-backed implementation of every store port.
//!
//! Mirrors relational semantics closely enough for service tests: integer
//! identity, not-found errors on `update`/`delete`, and the cross-entity
//! joins the finder traits imply. No durability, no transactions.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use parking_lot::RwLock;
use rust_decimal::Decimal;

use crate::domain::{
    Attendance, AttendanceStatus, Class, ClassSchedule, ClassSubject, ClassTeacher, Exam,
    ExamResult, GradeLevel, Parent, Role, Session, Student, StudentGeneralRate,
    StudentTrimesterRate, Subject, Teacher, TeacherSchedule, User,
};
use crate::error::{Error, Result};
use crate::port::{
    AttendanceStore, ClassScheduleStore, ClassStore, ClassSubjectStore, ClassTeacherStore,
    ExamResultStore, ExamStore, GradeLevelStore, ParentStore, SessionStore,
    StudentGeneralRateStore, StudentStore, StudentTrimesterRateStore, SubjectStore, Store,
    TeacherScheduleStore, TeacherStore, UserStore,
};

#[derive(Default)]
struct Inner {
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    teacher_schedules: Vec<TeacherSchedule>,
    parents: Vec<Parent>,
    classes: Vec<Class>,
    class_schedules: Vec<ClassSchedule>,
    class_subjects: Vec<ClassSubject>,
    class_teachers: Vec<ClassTeacher>,
    subjects: Vec<Subject>,
    grade_levels: Vec<GradeLevel>,
    sessions: Vec<Session>,
    exams: Vec<Exam>,
    exam_results: Vec<ExamResult>,
    general_rates: Vec<StudentGeneralRate>,
    trimester_rates: Vec<StudentTrimesterRate>,
    users: Vec<User>,
    attendances: Vec<Attendance>,
}

/// In-memory store for service tests.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

macro_rules! impl_store {
    ($entity:ty, $table:ident, $id:ident) => {
        impl Store<$entity> for MemoryStore {
            async fn get_by_id(&self, id: i32) -> Result<Option<$entity>> {
                Ok(self
                    .inner
                    .read()
                    .$table
                    .iter()
                    .find(|e| e.$id == id)
                    .cloned())
            }

            async fn get_all(&self) -> Result<Vec<$entity>> {
                Ok(self.inner.read().$table.clone())
            }

            async fn add(&self, entity: &$entity) -> Result<()> {
                let mut inner = self.inner.write();
                if inner.$table.iter().any(|e| e.$id == entity.$id) {
                    return Err(Error::Database(format!(
                        concat!(stringify!($entity), " {} already exists"),
                        entity.$id
                    )));
                }
                inner.$table.push(entity.clone());
                Ok(())
            }

            async fn add_range(&self, entities: &[$entity]) -> Result<()> {
                let mut inner = self.inner.write();
                for entity in entities {
                    if inner.$table.iter().any(|e| e.$id == entity.$id) {
                        return Err(Error::Database(format!(
                            concat!(stringify!($entity), " {} already exists"),
                            entity.$id
                        )));
                    }
                }
                inner.$table.extend(entities.iter().cloned());
                Ok(())
            }

            async fn update(&self, entity: &$entity) -> Result<()> {
                let mut inner = self.inner.write();
                match inner.$table.iter_mut().find(|e| e.$id == entity.$id) {
                    Some(slot) => {
                        *slot = entity.clone();
                        Ok(())
                    }
                    None => Err(Error::Database(format!(
                        concat!(stringify!($entity), " {} not found"),
                        entity.$id
                    ))),
                }
            }

            async fn delete(&self, entity: &$entity) -> Result<()> {
                let mut inner = self.inner.write();
                let before = inner.$table.len();
                inner.$table.retain(|e| e.$id != entity.$id);
                if inner.$table.len() == before {
                    return Err(Error::Database(format!(
                        concat!(stringify!($entity), " {} not found"),
                        entity.$id
                    )));
                }
                Ok(())
            }

            async fn delete_range(&self, entities: &[$entity]) -> Result<()> {
                let mut inner = self.inner.write();
                for entity in entities {
                    let before = inner.$table.len();
                    inner.$table.retain(|e| e.$id != entity.$id);
                    if inner.$table.len() == before {
                        return Err(Error::Database(format!(
                            concat!(stringify!($entity), " {} not found"),
                            entity.$id
                        )));
                    }
                }
                Ok(())
            }
        }
    };
}

impl_store!(Student, students, student_id);
impl_store!(Teacher, teachers, teacher_id);
impl_store!(TeacherSchedule, teacher_schedules, teacher_schedule_id);
impl_store!(Parent, parents, parent_id);
impl_store!(Class, classes, class_id);
impl_store!(ClassSchedule, class_schedules, class_schedule_id);
impl_store!(ClassSubject, class_subjects, class_subject_id);
impl_store!(ClassTeacher, class_teachers, class_teacher_id);
impl_store!(Subject, subjects, subject_id);
impl_store!(GradeLevel, grade_levels, grade_level_id);
impl_store!(Session, sessions, session_id);
impl_store!(Exam, exams, exam_id);
impl_store!(ExamResult, exam_results, exam_result_id);
impl_store!(StudentGeneralRate, general_rates, student_rate_id);
impl_store!(StudentTrimesterRate, trimester_rates, student_rate_id);
impl_store!(User, users, user_id);
impl_store!(Attendance, attendances, attendance_id);

impl StudentStore for MemoryStore {
    async fn by_first_name(&self, first_name: &str) -> Result<Vec<Student>> {
        Ok(filter(&self.inner.read().students, |s| {
            s.first_name == first_name
        }))
    }

    async fn by_last_name(&self, last_name: &str) -> Result<Vec<Student>> {
        Ok(filter(&self.inner.read().students, |s| {
            s.last_name == last_name
        }))
    }

    async fn by_full_name(&self, first_name: &str, last_name: &str) -> Result<Vec<Student>> {
        Ok(filter(&self.inner.read().students, |s| {
            s.first_name == first_name && s.last_name == last_name
        }))
    }

    async fn by_class_name(&self, class_name: &str) -> Result<Vec<Student>> {
        Ok(filter(&self.inner.read().students, |s| {
            s.class_name == class_name
        }))
    }

    async fn by_parent_id(&self, parent_id: i32) -> Result<Vec<Student>> {
        Ok(filter(&self.inner.read().students, |s| {
            s.parent_id == parent_id
        }))
    }

    async fn by_date_of_birth(&self, date_of_birth: NaiveDate) -> Result<Vec<Student>> {
        Ok(filter(&self.inner.read().students, |s| {
            s.date_of_birth == date_of_birth
        }))
    }
}

impl TeacherStore for MemoryStore {
    async fn by_email(&self, email: &str) -> Result<Option<Teacher>> {
        Ok(self
            .inner
            .read()
            .teachers
            .iter()
            .find(|t| t.email.as_deref() == Some(email))
            .cloned())
    }

    async fn by_phone_number(&self, phone_number: &str) -> Result<Option<Teacher>> {
        Ok(self
            .inner
            .read()
            .teachers
            .iter()
            .find(|t| t.phone_number == phone_number)
            .cloned())
    }

    async fn by_user_id(&self, user_id: i32) -> Result<Option<Teacher>> {
        Ok(self
            .inner
            .read()
            .teachers
            .iter()
            .find(|t| t.user_id == Some(user_id))
            .cloned())
    }

    /// Join through the class-teacher assignment rows.
    async fn by_class_name(&self, class_name: &str) -> Result<Vec<Teacher>> {
        let inner = self.inner.read();
        let ids: Vec<i32> = inner
            .class_teachers
            .iter()
            .filter(|ct| ct.class_name == class_name)
            .map(|ct| ct.teacher_id)
            .collect();
        Ok(filter(&inner.teachers, |t| ids.contains(&t.teacher_id)))
    }

    async fn by_first_name(&self, first_name: &str) -> Result<Vec<Teacher>> {
        Ok(filter(&self.inner.read().teachers, |t| {
            t.first_name == first_name
        }))
    }

    async fn by_last_name(&self, last_name: &str) -> Result<Vec<Teacher>> {
        Ok(filter(&self.inner.read().teachers, |t| {
            t.last_name == last_name
        }))
    }

    async fn by_subject_specialization(&self, specialization: &str) -> Result<Vec<Teacher>> {
        Ok(filter(&self.inner.read().teachers, |t| {
            t.subject_specialization.as_deref() == Some(specialization)
        }))
    }
}

impl TeacherScheduleStore for MemoryStore {
    async fn by_teacher_id(&self, teacher_id: i32) -> Result<Vec<TeacherSchedule>> {
        Ok(filter(&self.inner.read().teacher_schedules, |ts| {
            ts.teacher_id == teacher_id
        }))
    }

    async fn by_class_name(&self, class_name: &str) -> Result<Vec<TeacherSchedule>> {
        Ok(filter(&self.inner.read().teacher_schedules, |ts| {
            ts.class_name == class_name
        }))
    }

    async fn by_day_of_week(&self, day: Weekday) -> Result<Vec<TeacherSchedule>> {
        Ok(filter(&self.inner.read().teacher_schedules, |ts| {
            ts.day_of_week == day
        }))
    }

    async fn by_start_time(&self, starts_at: NaiveTime) -> Result<Vec<TeacherSchedule>> {
        Ok(filter(&self.inner.read().teacher_schedules, |ts| {
            ts.start_time == starts_at
        }))
    }

    async fn by_ending_time(&self, ends_at: NaiveTime) -> Result<Vec<TeacherSchedule>> {
        Ok(filter(&self.inner.read().teacher_schedules, |ts| {
            ts.end_time == ends_at
        }))
    }

    async fn by_time_range(
        &self,
        starts_at: NaiveTime,
        ends_at: NaiveTime,
    ) -> Result<Vec<TeacherSchedule>> {
        Ok(filter(&self.inner.read().teacher_schedules, |ts| {
            ts.start_time >= starts_at && ts.end_time <= ends_at
        }))
    }

    async fn by_subject_id(&self, subject_id: i32) -> Result<Vec<TeacherSchedule>> {
        Ok(filter(&self.inner.read().teacher_schedules, |ts| {
            ts.subject_id == subject_id
        }))
    }

    async fn by_subject_and_teacher(
        &self,
        subject_id: i32,
        teacher_id: i32,
    ) -> Result<Vec<TeacherSchedule>> {
        Ok(filter(&self.inner.read().teacher_schedules, |ts| {
            ts.subject_id == subject_id && ts.teacher_id == teacher_id
        }))
    }

    async fn by_subject_teacher_and_class(
        &self,
        subject_id: i32,
        teacher_id: i32,
        class_name: &str,
    ) -> Result<Vec<TeacherSchedule>> {
        Ok(filter(&self.inner.read().teacher_schedules, |ts| {
            ts.subject_id == subject_id
                && ts.teacher_id == teacher_id
                && ts.class_name == class_name
        }))
    }
}

impl ParentStore for MemoryStore {
    /// Join through the student's parent reference.
    async fn by_student_id(&self, student_id: i32) -> Result<Option<Parent>> {
        let inner = self.inner.read();
        let Some(student) = inner.students.iter().find(|s| s.student_id == student_id) else {
            return Ok(None);
        };
        Ok(inner
            .parents
            .iter()
            .find(|p| p.parent_id == student.parent_id)
            .cloned())
    }

    async fn by_email(&self, email: &str) -> Result<Option<Parent>> {
        Ok(self
            .inner
            .read()
            .parents
            .iter()
            .find(|p| p.email.as_deref() == Some(email))
            .cloned())
    }

    async fn by_phone_number(&self, phone_number: &str) -> Result<Option<Parent>> {
        Ok(self
            .inner
            .read()
            .parents
            .iter()
            .find(|p| p.phone_number == phone_number)
            .cloned())
    }

    async fn by_first_name(&self, first_name: &str) -> Result<Vec<Parent>> {
        Ok(filter(&self.inner.read().parents, |p| {
            p.first_name == first_name
        }))
    }

    async fn by_last_name(&self, last_name: &str) -> Result<Vec<Parent>> {
        Ok(filter(&self.inner.read().parents, |p| {
            p.last_name == last_name
        }))
    }
}

impl ClassStore for MemoryStore {
    async fn by_name(&self, class_name: &str) -> Result<Option<Class>> {
        Ok(self
            .inner
            .read()
            .classes
            .iter()
            .find(|c| c.class_name == class_name)
            .cloned())
    }

    async fn by_grade_level_id(&self, grade_level_id: i32) -> Result<Vec<Class>> {
        Ok(filter(&self.inner.read().classes, |c| {
            c.grade_level_id == grade_level_id
        }))
    }

    /// Join through the grade-level lookup.
    async fn by_grade_level_name(&self, grade_name: &str) -> Result<Vec<Class>> {
        let inner = self.inner.read();
        let Some(grade) = inner.grade_levels.iter().find(|g| g.grade_name == grade_name) else {
            return Ok(Vec::new());
        };
        Ok(filter(&inner.classes, |c| {
            c.grade_level_id == grade.grade_level_id
        }))
    }
}

impl ClassScheduleStore for MemoryStore {
    async fn by_class_name(&self, class_name: &str) -> Result<Vec<ClassSchedule>> {
        Ok(filter(&self.inner.read().class_schedules, |cs| {
            cs.class_name == class_name
        }))
    }

    async fn by_day_of_week(&self, day: Weekday) -> Result<Vec<ClassSchedule>> {
        Ok(filter(&self.inner.read().class_schedules, |cs| {
            cs.day_of_week == day
        }))
    }

    async fn by_start_time(&self, starts_at: NaiveTime) -> Result<Vec<ClassSchedule>> {
        Ok(filter(&self.inner.read().class_schedules, |cs| {
            cs.start_time == starts_at
        }))
    }

    async fn by_ending_time(&self, ends_at: NaiveTime) -> Result<Vec<ClassSchedule>> {
        Ok(filter(&self.inner.read().class_schedules, |cs| {
            cs.end_time == ends_at
        }))
    }

    async fn by_time_range(
        &self,
        starts_at: NaiveTime,
        ends_at: NaiveTime,
    ) -> Result<Vec<ClassSchedule>> {
        Ok(filter(&self.inner.read().class_schedules, |cs| {
            cs.start_time >= starts_at && cs.end_time <= ends_at
        }))
    }

    async fn by_subject_id(&self, subject_id: i32) -> Result<Vec<ClassSchedule>> {
        Ok(filter(&self.inner.read().class_schedules, |cs| {
            cs.subject_id == subject_id
        }))
    }
}

impl ClassSubjectStore for MemoryStore {
    async fn by_class_name(&self, class_name: &str) -> Result<Vec<ClassSubject>> {
        Ok(filter(&self.inner.read().class_subjects, |cs| {
            cs.class_name == class_name
        }))
    }

    async fn by_subject_id(&self, subject_id: i32) -> Result<Vec<ClassSubject>> {
        Ok(filter(&self.inner.read().class_subjects, |cs| {
            cs.subject_id == subject_id
        }))
    }

    async fn by_teacher_id(&self, teacher_id: i32) -> Result<Vec<ClassSubject>> {
        Ok(filter(&self.inner.read().class_subjects, |cs| {
            cs.teacher_id == teacher_id
        }))
    }

    async fn by_subject_factor(&self, subject_factor: i32) -> Result<Vec<ClassSubject>> {
        Ok(filter(&self.inner.read().class_subjects, |cs| {
            cs.subject_factor == Some(subject_factor)
        }))
    }
}

impl ClassTeacherStore for MemoryStore {
    async fn by_class_name(&self, class_name: &str) -> Result<Vec<ClassTeacher>> {
        Ok(filter(&self.inner.read().class_teachers, |ct| {
            ct.class_name == class_name
        }))
    }

    async fn by_teacher_id(&self, teacher_id: i32) -> Result<Vec<ClassTeacher>> {
        Ok(filter(&self.inner.read().class_teachers, |ct| {
            ct.teacher_id == teacher_id
        }))
    }
}

impl SubjectStore for MemoryStore {
    async fn by_name(&self, subject_name: &str) -> Result<Option<Subject>> {
        Ok(self
            .inner
            .read()
            .subjects
            .iter()
            .find(|s| s.subject_name == subject_name)
            .cloned())
    }
}

impl GradeLevelStore for MemoryStore {
    async fn by_name(&self, grade_name: &str) -> Result<Option<GradeLevel>> {
        Ok(self
            .inner
            .read()
            .grade_levels
            .iter()
            .find(|g| g.grade_name == grade_name)
            .cloned())
    }
}

impl SessionStore for MemoryStore {
    async fn by_class_subject_id(&self, class_subject_id: i32) -> Result<Vec<Session>> {
        Ok(filter(&self.inner.read().sessions, |s| {
            s.class_subject_id == class_subject_id
        }))
    }

    async fn by_date(&self, date: NaiveDate) -> Result<Vec<Session>> {
        Ok(filter(&self.inner.read().sessions, |s| s.date == date))
    }

    async fn by_start_time(&self, starts_at: NaiveTime) -> Result<Vec<Session>> {
        Ok(filter(&self.inner.read().sessions, |s| {
            s.start_time == starts_at
        }))
    }

    async fn by_ending_time(&self, ends_at: NaiveTime) -> Result<Vec<Session>> {
        Ok(filter(&self.inner.read().sessions, |s| s.end_time == ends_at))
    }

    async fn by_time_range(&self, starts_at: NaiveTime, ends_at: NaiveTime) -> Result<Vec<Session>> {
        Ok(filter(&self.inner.read().sessions, |s| {
            s.start_time >= starts_at && s.end_time <= ends_at
        }))
    }
}

impl ExamStore for MemoryStore {
    async fn by_name(&self, exam_name: &str) -> Result<Option<Exam>> {
        Ok(self
            .inner
            .read()
            .exams
            .iter()
            .find(|e| e.exam_name == exam_name)
            .cloned())
    }

    async fn by_class_subject_id(&self, class_subject_id: i32) -> Result<Vec<Exam>> {
        Ok(filter(&self.inner.read().exams, |e| {
            e.class_subject_id == class_subject_id
        }))
    }

    async fn by_date_scheduled(&self, date_scheduled: NaiveDate) -> Result<Vec<Exam>> {
        Ok(filter(&self.inner.read().exams, |e| {
            e.date_scheduled == date_scheduled
        }))
    }

    async fn by_trimester(&self, trimester: i32) -> Result<Vec<Exam>> {
        Ok(filter(&self.inner.read().exams, |e| {
            e.trimester == trimester
        }))
    }
}

impl ExamResultStore for MemoryStore {
    async fn by_student_and_exam(&self, student_id: i32, exam_id: i32) -> Result<Option<ExamResult>> {
        Ok(self
            .inner
            .read()
            .exam_results
            .iter()
            .find(|er| er.student_id == student_id && er.exam_id == exam_id)
            .cloned())
    }

    async fn by_exam_id(&self, exam_id: i32) -> Result<Vec<ExamResult>> {
        Ok(filter(&self.inner.read().exam_results, |er| {
            er.exam_id == exam_id
        }))
    }

    /// Join through the exam's name.
    async fn by_exam_name(&self, exam_name: &str) -> Result<Vec<ExamResult>> {
        let inner = self.inner.read();
        let Some(exam) = inner.exams.iter().find(|e| e.exam_name == exam_name) else {
            return Ok(Vec::new());
        };
        Ok(filter(&inner.exam_results, |er| er.exam_id == exam.exam_id))
    }

    async fn by_student_id(&self, student_id: i32) -> Result<Vec<ExamResult>> {
        Ok(filter(&self.inner.read().exam_results, |er| {
            er.student_id == student_id
        }))
    }

    async fn by_score(&self, score: Decimal) -> Result<Vec<ExamResult>> {
        Ok(filter(&self.inner.read().exam_results, |er| {
            er.score == Some(score)
        }))
    }
}

impl StudentGeneralRateStore for MemoryStore {
    async fn by_student_id(&self, student_id: i32) -> Result<Vec<StudentGeneralRate>> {
        Ok(filter(&self.inner.read().general_rates, |r| {
            r.student_id == student_id
        }))
    }

    async fn by_class_name(&self, class_name: &str) -> Result<Vec<StudentGeneralRate>> {
        Ok(filter(&self.inner.read().general_rates, |r| {
            r.class_name == class_name
        }))
    }

    async fn by_rate(&self, rate: Decimal) -> Result<Vec<StudentGeneralRate>> {
        Ok(filter(&self.inner.read().general_rates, |r| r.rate == rate))
    }

    async fn by_start_year(&self, start_year: i32) -> Result<Vec<StudentGeneralRate>> {
        Ok(filter(&self.inner.read().general_rates, |r| {
            r.start_year == start_year
        }))
    }

    async fn by_end_year(&self, end_year: i32) -> Result<Vec<StudentGeneralRate>> {
        Ok(filter(&self.inner.read().general_rates, |r| {
            r.end_year == end_year
        }))
    }
}

impl StudentTrimesterRateStore for MemoryStore {
    async fn by_student_id(&self, student_id: i32) -> Result<Vec<StudentTrimesterRate>> {
        Ok(filter(&self.inner.read().trimester_rates, |r| {
            r.student_id == student_id
        }))
    }

    async fn by_student_per_trimester(
        &self,
        student_id: i32,
        trimester: i32,
    ) -> Result<Vec<StudentTrimesterRate>> {
        Ok(filter(&self.inner.read().trimester_rates, |r| {
            r.student_id == student_id && r.trimester == trimester
        }))
    }

    async fn by_student_per_trimester_in_year(
        &self,
        student_id: i32,
        trimester: i32,
        start_year: i32,
    ) -> Result<Vec<StudentTrimesterRate>> {
        Ok(filter(&self.inner.read().trimester_rates, |r| {
            r.student_id == student_id && r.trimester == trimester && r.start_year == start_year
        }))
    }

    async fn by_student_per_subject(
        &self,
        student_id: i32,
        subject_id: i32,
    ) -> Result<Vec<StudentTrimesterRate>> {
        Ok(filter(&self.inner.read().trimester_rates, |r| {
            r.student_id == student_id && r.subject_id == subject_id
        }))
    }

    async fn by_student_per_subject_per_trimester(
        &self,
        student_id: i32,
        trimester: i32,
        subject_id: i32,
    ) -> Result<Vec<StudentTrimesterRate>> {
        Ok(filter(&self.inner.read().trimester_rates, |r| {
            r.student_id == student_id && r.trimester == trimester && r.subject_id == subject_id
        }))
    }

    async fn rate_for(
        &self,
        student_id: i32,
        trimester: i32,
        subject_id: i32,
        start_year: i32,
    ) -> Result<Option<StudentTrimesterRate>> {
        Ok(self
            .inner
            .read()
            .trimester_rates
            .iter()
            .find(|r| {
                r.student_id == student_id
                    && r.trimester == trimester
                    && r.subject_id == subject_id
                    && r.start_year == start_year
            })
            .cloned())
    }

    /// Join through the subject's name.
    async fn rate_for_subject_name(
        &self,
        student_id: i32,
        trimester: i32,
        subject_name: &str,
        start_year: i32,
    ) -> Result<Option<StudentTrimesterRate>> {
        let inner = self.inner.read();
        let Some(subject) = inner.subjects.iter().find(|s| s.subject_name == subject_name)
        else {
            return Ok(None);
        };
        Ok(inner
            .trimester_rates
            .iter()
            .find(|r| {
                r.student_id == student_id
                    && r.trimester == trimester
                    && r.subject_id == subject.subject_id
                    && r.start_year == start_year
            })
            .cloned())
    }

    async fn by_start_year(&self, start_year: i32) -> Result<Vec<StudentTrimesterRate>> {
        Ok(filter(&self.inner.read().trimester_rates, |r| {
            r.start_year == start_year
        }))
    }

    async fn by_end_year(&self, end_year: i32) -> Result<Vec<StudentTrimesterRate>> {
        Ok(filter(&self.inner.read().trimester_rates, |r| {
            r.end_year == end_year
        }))
    }
}

impl UserStore for MemoryStore {
    async fn by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .inner
            .read()
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn by_password_hash(&self, password_hash: &str) -> Result<Option<User>> {
        Ok(self
            .inner
            .read()
            .users
            .iter()
            .find(|u| u.password_hash == password_hash)
            .cloned())
    }

    async fn by_role(&self, role: Role) -> Result<Vec<User>> {
        Ok(filter(&self.inner.read().users, |u| u.role == role))
    }

    async fn by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .inner
            .read()
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn by_first_name(&self, first_name: &str) -> Result<Vec<User>> {
        Ok(filter(&self.inner.read().users, |u| {
            u.first_name == first_name
        }))
    }

    async fn by_last_name(&self, last_name: &str) -> Result<Vec<User>> {
        Ok(filter(&self.inner.read().users, |u| u.last_name == last_name))
    }

    async fn created_at(&self, created_at: DateTime<Utc>) -> Result<Vec<User>> {
        Ok(filter(&self.inner.read().users, |u| {
            u.created_at == created_at
        }))
    }
}

impl AttendanceStore for MemoryStore {
    async fn by_student_id(
        &self,
        student_id: i32,
        status: Option<AttendanceStatus>,
    ) -> Result<Vec<Attendance>> {
        Ok(filter(&self.inner.read().attendances, |a| {
            a.student_id == student_id && a.matches_status(status)
        }))
    }

    async fn by_class_name(
        &self,
        class_name: &str,
        status: Option<AttendanceStatus>,
    ) -> Result<Vec<Attendance>> {
        Ok(filter(&self.inner.read().attendances, |a| {
            a.class_name == class_name && a.matches_status(status)
        }))
    }

    async fn by_session_id(
        &self,
        session_id: i32,
        status: Option<AttendanceStatus>,
    ) -> Result<Vec<Attendance>> {
        Ok(filter(&self.inner.read().attendances, |a| {
            a.session_id == session_id && a.matches_status(status)
        }))
    }

    async fn by_date(
        &self,
        date: NaiveDate,
        status: Option<AttendanceStatus>,
    ) -> Result<Vec<Attendance>> {
        Ok(filter(&self.inner.read().attendances, |a| {
            a.date == date && a.matches_status(status)
        }))
    }

    async fn by_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        status: Option<AttendanceStatus>,
    ) -> Result<Vec<Attendance>> {
        Ok(filter(&self.inner.read().attendances, |a| {
            a.date >= from && a.date <= to && a.matches_status(status)
        }))
    }
}

fn filter<E: Clone>(rows: &[E], predicate: impl Fn(&E) -> bool) -> Vec<E> {
    rows.iter().filter(|e| predicate(e)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::builders;

    #[tokio::test]
    async fn update_of_missing_row_is_a_store_error() {
        let store = MemoryStore::new();
        let err = Store::<Student>::update(&store, &builders::student(1))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Database(_)));
    }

    #[tokio::test]
    async fn add_rejects_duplicate_identity() {
        let store = MemoryStore::new();
        Store::<Student>::add(&store, &builders::student(1)).await.unwrap();
        assert!(Store::<Student>::add(&store, &builders::student(1))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn parent_lookup_joins_through_student() {
        let store = MemoryStore::new();
        let mut student = builders::student(5);
        student.parent_id = 9;
        Store::<Student>::add(&store, &student).await.unwrap();
        Store::<Parent>::add(&store, &builders::parent(9)).await.unwrap();

        let found = ParentStore::by_student_id(&store, 5).await.unwrap().unwrap();
        assert_eq!(found.parent_id, 9);
        assert!(ParentStore::by_student_id(&store, 6).await.unwrap().is_none());
    }
}
