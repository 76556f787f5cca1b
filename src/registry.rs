//! Service wiring.
//!
//! One storage handle fans out into every entity service. Capabilities are
//! fixed at construction; there is no way to re-enable mutations on a
//! running registry.

use std::sync::Arc;

use crate::port::{
    AttendanceStore, ClassScheduleStore, ClassStore, ClassSubjectStore, ClassTeacherStore,
    ExamResultStore, ExamStore, GradeLevelStore, ParentStore, SessionStore, StudentGeneralRateStore,
    StudentStore, StudentTrimesterRateStore, SubjectStore, TeacherScheduleStore, TeacherStore,
    UserStore,
};
use crate::service::{
    AttendanceService, ClassScheduleService, ClassService, ClassSubjectService,
    ClassTeacherService, ExamResultService, ExamService, GradeLevelService, Mutability,
    ParentService, SessionService, StudentGeneralRateService, StudentService,
    StudentTrimesterRateService, SubjectService, TeacherScheduleService, TeacherService,
    UserService,
};

/// Per-entity mutation capabilities. Defaults to everything mutable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Capabilities {
    pub students: Mutability,
    pub teachers: Mutability,
    pub teacher_schedules: Mutability,
    pub parents: Mutability,
    pub classes: Mutability,
    pub class_schedules: Mutability,
    pub class_subjects: Mutability,
    pub class_teachers: Mutability,
    pub subjects: Mutability,
    pub grade_levels: Mutability,
    pub sessions: Mutability,
    pub exams: Mutability,
    pub exam_results: Mutability,
    pub general_rates: Mutability,
    pub trimester_rates: Mutability,
    pub users: Mutability,
    pub attendances: Mutability,
}

impl Capabilities {
    /// Every service rejects mutations.
    pub fn read_only() -> Self {
        Self {
            students: Mutability::ReadOnly,
            teachers: Mutability::ReadOnly,
            teacher_schedules: Mutability::ReadOnly,
            parents: Mutability::ReadOnly,
            classes: Mutability::ReadOnly,
            class_schedules: Mutability::ReadOnly,
            class_subjects: Mutability::ReadOnly,
            class_teachers: Mutability::ReadOnly,
            subjects: Mutability::ReadOnly,
            grade_levels: Mutability::ReadOnly,
            sessions: Mutability::ReadOnly,
            exams: Mutability::ReadOnly,
            exam_results: Mutability::ReadOnly,
            general_rates: Mutability::ReadOnly,
            trimester_rates: Mutability::ReadOnly,
            users: Mutability::ReadOnly,
            attendances: Mutability::ReadOnly,
        }
    }
}

/// Every entity service wired over one shared store.
pub struct Registry<S> {
    pub students: StudentService<S>,
    pub teachers: TeacherService<S>,
    pub teacher_schedules: TeacherScheduleService<S>,
    pub parents: ParentService<S>,
    pub classes: ClassService<S>,
    pub class_schedules: ClassScheduleService<S>,
    pub class_subjects: ClassSubjectService<S>,
    pub class_teachers: ClassTeacherService<S>,
    pub subjects: SubjectService<S>,
    pub grade_levels: GradeLevelService<S>,
    pub sessions: SessionService<S>,
    pub exams: ExamService<S>,
    pub exam_results: ExamResultService<S>,
    pub general_rates: StudentGeneralRateService<S>,
    pub trimester_rates: StudentTrimesterRateService<S>,
    pub users: UserService<S>,
    pub attendances: AttendanceService<S>,
}

impl<S> Registry<S>
where
    S: StudentStore
        + TeacherStore
        + TeacherScheduleStore
        + ParentStore
        + ClassStore
        + ClassScheduleStore
        + ClassSubjectStore
        + ClassTeacherStore
        + SubjectStore
        + GradeLevelStore
        + SessionStore
        + ExamStore
        + ExamResultStore
        + StudentGeneralRateStore
        + StudentTrimesterRateStore
        + UserStore
        + AttendanceStore,
{
    /// Wire every service mutable.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_capabilities(store, Capabilities::default())
    }

    /// Wire with explicit per-entity capabilities.
    pub fn with_capabilities(store: Arc<S>, caps: Capabilities) -> Self {
        Self {
            students: StudentService::new(Arc::clone(&store)).with_mutability(caps.students),
            teachers: TeacherService::new(Arc::clone(&store)).with_mutability(caps.teachers),
            teacher_schedules: TeacherScheduleService::new(Arc::clone(&store))
                .with_mutability(caps.teacher_schedules),
            parents: ParentService::new(Arc::clone(&store)).with_mutability(caps.parents),
            classes: ClassService::new(Arc::clone(&store)).with_mutability(caps.classes),
            class_schedules: ClassScheduleService::new(Arc::clone(&store))
                .with_mutability(caps.class_schedules),
            class_subjects: ClassSubjectService::new(Arc::clone(&store))
                .with_mutability(caps.class_subjects),
            class_teachers: ClassTeacherService::new(Arc::clone(&store))
                .with_mutability(caps.class_teachers),
            subjects: SubjectService::new(Arc::clone(&store)).with_mutability(caps.subjects),
            grade_levels: GradeLevelService::new(Arc::clone(&store))
                .with_mutability(caps.grade_levels),
            sessions: SessionService::new(Arc::clone(&store)).with_mutability(caps.sessions),
            exams: ExamService::new(Arc::clone(&store)).with_mutability(caps.exams),
            exam_results: ExamResultService::new(Arc::clone(&store))
                .with_mutability(caps.exam_results),
            general_rates: StudentGeneralRateService::new(Arc::clone(&store))
                .with_mutability(caps.general_rates),
            trimester_rates: StudentTrimesterRateService::new(Arc::clone(&store))
                .with_mutability(caps.trimester_rates),
            users: UserService::new(Arc::clone(&store)).with_mutability(caps.users),
            attendances: AttendanceService::new(store).with_mutability(caps.attendances),
        }
    }
}
