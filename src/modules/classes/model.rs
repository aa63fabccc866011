use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Moderation state of a class. New classes start `pending` and become
/// visible to students only once an admin approves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "class_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ClassStatus {
    Pending,
    Approved,
    Denied,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Class {
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub instructor_name: String,
    pub instructor_email: String,
    pub seats: i32,
    pub enrolled: i32,
    pub price: f64,
    pub status: ClassStatus,
    pub feedback: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateClassRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub image_url: Option<String>,
    #[validate(length(min = 1))]
    pub instructor_name: String,
    #[validate(email)]
    pub instructor_email: String,
    #[validate(range(min = 0))]
    pub seats: i32,
    #[validate(range(min = 0.0))]
    pub price: f64,
}

/// Instructor edit of their own class. `instructor_email` must match the
/// caller's token.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateClassRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0))]
    pub seats: i32,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(email)]
    pub instructor_email: String,
}

/// Admin decision on a pending class. `email` is the acting admin's own
/// email, matched against the token.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateStatusRequest {
    #[validate(email)]
    pub email: String,
    pub status: ClassStatus,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct FeedbackRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub feedback: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct EnrollRequest {
    #[validate(email)]
    pub email: String,
}
