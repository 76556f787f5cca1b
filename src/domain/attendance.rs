//! Attendance record and status.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance status. Closed set; drives the status-partitioned query
/// surface on the attendance service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Absent => write!(f, "Absent"),
        }
    }
}

impl FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Present" => Ok(AttendanceStatus::Present),
            "Absent" => Ok(AttendanceStatus::Absent),
            other => Err(format!(
                "status must be either 'Present' or 'Absent', got '{other}'"
            )),
        }
    }
}

/// One student's attendance for one session. The date is never in the
/// future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    pub attendance_id: i32,
    pub student_id: i32,
    pub class_name: String,
    pub session_id: i32,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl Attendance {
    /// True when the record matches the given status filter (`None` matches
    /// everything).
    pub fn matches_status(&self, filter: Option<AttendanceStatus>) -> bool {
        filter.map_or(true, |status| self.status == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_display() {
        for status in [AttendanceStatus::Present, AttendanceStatus::Absent] {
            assert_eq!(
                status.to_string().parse::<AttendanceStatus>().unwrap(),
                status
            );
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("Late".parse::<AttendanceStatus>().is_err());
    }

    #[test]
    fn status_serializes_as_the_bare_variant_name() {
        let json = serde_json::to_string(&AttendanceStatus::Present).unwrap();
        assert_eq!(json, "\"Present\"");
        let back: AttendanceStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AttendanceStatus::Present);
    }
}
