//! Login account record and role.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Teacher,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Teacher => write!(f, "Teacher"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Teacher" => Ok(Role::Teacher),
            other => Err(format!("role must be either 'Admin' or 'Teacher', got '{other}'")),
        }
    }
}

/// A login account.
///
/// `password_hash` holds the caller-supplied plaintext only until the user
/// service's pre-persist transform replaces it with a salted digest; the
/// plaintext form never reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_display() {
        for role in [Role::Admin, Role::Teacher] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!("Student".parse::<Role>().is_err());
        assert!("admin".parse::<Role>().is_err());
    }
}
