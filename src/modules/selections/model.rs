use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A class a student has picked but not yet paid for. One row per
/// `(class_id, email)` pair; picking the same class twice updates in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Selection {
    pub id: Uuid,
    pub class_id: Uuid,
    pub email: String,
    pub class_name: String,
    pub image_url: Option<String>,
    pub price: f64,
    pub instructor_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SelectClassRequest {
    pub class_id: Uuid,
    #[validate(length(min = 1))]
    pub class_name: String,
    pub image_url: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1))]
    pub instructor_name: String,
}

/// Query string carrying the caller's own email, matched against the token.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OwnerEmailParams {
    pub email: String,
}
