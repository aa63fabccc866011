//! User records and role definitions.
//!
//! The `users` table is the sole source of truth for privilege. Roles are a
//! closed enumeration stored as a Postgres enum; unknown strings cannot
//! reach the authorization code.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Privilege level of a user. Ordered least to most privileged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Instructor,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Instructor => "instructor",
            UserRole::Admin => "admin",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(UserRole::User),
            "instructor" => Ok(UserRole::Instructor),
            "admin" => Ok(UserRole::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// A user record. `student_count` tracks how many students have enrolled
/// with this user when they act as an instructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub role: UserRole,
    pub student_count: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Upsert payload for first login. Deliberately carries no role: an upsert
/// can never grant or revoke privilege.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpsertUserRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub photo_url: Option<String>,
}

/// Body of a promotion request. `email` is the acting admin's own email,
/// matched against the token before the role check runs.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PromoteRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct StudentIncrementRequest {
    /// Instructor whose student count is incremented.
    #[validate(email)]
    pub email: String,
}

/// Answer to the parameterized "do I hold this role" probe.
#[derive(Debug, Serialize, ToSchema)]
pub struct RoleCheckResponse {
    pub role: UserRole,
    pub matches: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_round_trips_through_strings() {
        for role in [UserRole::User, UserRole::Instructor, UserRole::Admin] {
            assert_eq!(UserRole::from_str(role.as_str()), Ok(role));
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(UserRole::from_str("superuser").is_err());
        assert!(UserRole::from_str("Admin").is_err());
        assert!(UserRole::from_str("").is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Instructor).unwrap(),
            "\"instructor\""
        );
        let parsed: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, UserRole::Admin);
    }

    #[test]
    fn default_role_is_user() {
        assert_eq!(UserRole::default(), UserRole::User);
    }

    #[test]
    fn upsert_request_validation() {
        let ok = UpsertUserRequest {
            name: "Sam Coach".to_string(),
            email: "sam@example.com".to_string(),
            photo_url: None,
        };
        assert!(ok.validate().is_ok());

        let bad_email = UpsertUserRequest {
            name: "Sam Coach".to_string(),
            email: "not-an-email".to_string(),
            photo_url: None,
        };
        assert!(bad_email.validate().is_err());

        let empty_name = UpsertUserRequest {
            name: String::new(),
            email: "sam@example.com".to_string(),
            photo_url: None,
        };
        assert!(empty_name.validate().is_err());
    }
}
