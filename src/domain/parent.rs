//! Parent/guardian record.

use serde::{Deserialize, Serialize};

/// A parent or guardian reachable by phone and optionally email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parent {
    pub parent_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: Option<String>,
}
