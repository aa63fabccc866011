use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::selections::model::{SelectClassRequest, Selection};
use crate::utils::errors::AppError;

const SELECTION_COLUMNS: &str =
    "id, class_id, email, class_name, image_url, price, instructor_name, created_at";

pub struct SelectionService;

impl SelectionService {
    #[instrument(skip(db))]
    pub async fn list_for_user(db: &PgPool, email: &str) -> Result<Vec<Selection>, AppError> {
        let selections = sqlx::query_as::<_, Selection>(&format!(
            "SELECT {SELECTION_COLUMNS} FROM selections WHERE email = $1"
        ))
        .bind(email)
        .fetch_all(db)
        .await?;

        Ok(selections)
    }

    #[instrument(skip(db))]
    pub async fn upsert(
        db: &PgPool,
        email: &str,
        dto: SelectClassRequest,
    ) -> Result<Selection, AppError> {
        let selection = sqlx::query_as::<_, Selection>(&format!(
            "INSERT INTO selections (class_id, email, class_name, image_url, price, instructor_name)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (class_id, email) DO UPDATE
             SET class_name = EXCLUDED.class_name,
                 image_url = EXCLUDED.image_url,
                 price = EXCLUDED.price,
                 instructor_name = EXCLUDED.instructor_name
             RETURNING {SELECTION_COLUMNS}"
        ))
        .bind(dto.class_id)
        .bind(email)
        .bind(&dto.class_name)
        .bind(&dto.image_url)
        .bind(dto.price)
        .bind(&dto.instructor_name)
        .fetch_one(db)
        .await?;

        Ok(selection)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM selections WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("selection {id}")));
        }
        Ok(())
    }

    /// Removes the selection for a class once its payment has been recorded.
    #[instrument(skip(db))]
    pub async fn delete_by_class(db: &PgPool, class_id: Uuid, email: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM selections WHERE class_id = $1 AND email = $2")
            .bind(class_id)
            .bind(email)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "selection for class {class_id}"
            )));
        }
        Ok(())
    }
}
