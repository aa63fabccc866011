use sqlx::PgPool;
use tracing::instrument;

use crate::modules::payments::model::{Payment, RecordPaymentRequest};
use crate::utils::errors::AppError;

const PAYMENT_COLUMNS: &str =
    "id, class_id, email, transaction_id, amount, class_name, paid_at";

pub struct PaymentService;

impl PaymentService {
    /// Payment history for a user, newest first.
    #[instrument(skip(db))]
    pub async fn history(db: &PgPool, email: &str) -> Result<Vec<Payment>, AppError> {
        let payments = sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments
             WHERE email = $1
             ORDER BY paid_at DESC"
        ))
        .bind(email)
        .fetch_all(db)
        .await?;

        Ok(payments)
    }

    #[instrument(skip(db))]
    pub async fn record(db: &PgPool, dto: RecordPaymentRequest) -> Result<Payment, AppError> {
        let payment = sqlx::query_as::<_, Payment>(&format!(
            "INSERT INTO payments (class_id, email, transaction_id, amount, class_name)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (class_id, email) DO UPDATE
             SET transaction_id = EXCLUDED.transaction_id,
                 amount = EXCLUDED.amount,
                 class_name = EXCLUDED.class_name,
                 paid_at = now()
             RETURNING {PAYMENT_COLUMNS}"
        ))
        .bind(dto.class_id)
        .bind(&dto.email)
        .bind(&dto.transaction_id)
        .bind(dto.amount)
        .bind(&dto.class_name)
        .fetch_one(db)
        .await?;

        Ok(payment)
    }
}
