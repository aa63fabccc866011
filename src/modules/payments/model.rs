use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A settled payment. One row per `(class_id, email)`; re-recording the same
/// purchase updates in place rather than duplicating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Payment {
    pub id: Uuid,
    pub class_id: Uuid,
    pub email: String,
    pub transaction_id: String,
    pub amount: f64,
    pub class_name: String,
    pub paid_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PaymentIntentRequest {
    /// Price in whole currency units; converted to cents for the processor.
    #[validate(range(min = 0.5))]
    pub price: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RecordPaymentRequest {
    pub class_id: Uuid,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub transaction_id: String,
    #[validate(range(min = 0.0))]
    pub amount: f64,
    #[validate(length(min = 1))]
    pub class_name: String,
}
