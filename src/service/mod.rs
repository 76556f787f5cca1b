//! Validated entity services.
//!
//! [`EntityService`] is the generic mutation pipeline shared by every
//! entity: capability gate → rule-set validation → optional pre-persist
//! transform → store. The per-entity services compose it with guarded read
//! queries over their natural keys; they all deref to the generic core, so
//! mutations and queries live on one handle.
//!
//! The user service is the only one that installs a pre-persist transform
//! (salted credential hashing); the attendance service is the only one with
//! a status-partitioned query surface.

mod core;
mod guard;

mod attendance;
mod class;
mod class_schedule;
mod class_subject;
mod class_teacher;
mod exam;
mod exam_result;
mod general_rate;
mod grade_level;
mod parent;
mod session;
mod student;
mod subject;
mod teacher;
mod teacher_schedule;
mod trimester_rate;
mod user;

pub use core::{EntityService, Mutability};

pub use attendance::AttendanceService;
pub use class::ClassService;
pub use class_schedule::ClassScheduleService;
pub use class_subject::ClassSubjectService;
pub use class_teacher::ClassTeacherService;
pub use exam::ExamService;
pub use exam_result::ExamResultService;
pub use general_rate::StudentGeneralRateService;
pub use grade_level::GradeLevelService;
pub use parent::ParentService;
pub use session::SessionService;
pub use student::StudentService;
pub use subject::SubjectService;
pub use teacher::TeacherService;
pub use teacher_schedule::TeacherScheduleService;
pub use trimester_rate::StudentTrimesterRateService;
pub use user::UserService;
