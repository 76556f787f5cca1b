//! School-administration domain records.
//!
//! Every entity is a plain record with a synthetic `i32` identity and scalar
//! or relational fields. Entities carry no behavior beyond construction
//! helpers; rules live in [`crate::validation`] and access goes through
//! [`crate::service`].

mod attendance;
mod class;
mod exam;
mod parent;
mod rate;
mod session;
mod student;
mod subject;
mod teacher;
mod user;

pub use attendance::{Attendance, AttendanceStatus};
pub use class::{Class, ClassSchedule, ClassSubject, ClassTeacher};
pub use exam::{Exam, ExamResult};
pub use parent::Parent;
pub use rate::{StudentGeneralRate, StudentTrimesterRate};
pub use session::Session;
pub use student::Student;
pub use subject::{GradeLevel, Subject};
pub use teacher::{Teacher, TeacherSchedule};
pub use user::{Role, User};
