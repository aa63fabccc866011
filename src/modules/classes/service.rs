use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classes::model::{Class, ClassStatus, CreateClassRequest, UpdateClassRequest};
use crate::utils::errors::AppError;

const CLASS_COLUMNS: &str = "id, name, image_url, instructor_name, instructor_email, seats, \
                             enrolled, price, status, feedback, created_at, updated_at";

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db))]
    pub async fn list_approved(db: &PgPool) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE status = $1"
        ))
        .bind(ClassStatus::Approved)
        .fetch_all(db)
        .await?;

        Ok(classes)
    }

    /// Six most popular approved classes by enrollment.
    #[instrument(skip(db))]
    pub async fn popular(db: &PgPool) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes
             WHERE status = $1
             ORDER BY enrolled DESC
             LIMIT 6"
        ))
        .bind(ClassStatus::Approved)
        .fetch_all(db)
        .await?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn find(db: &PgPool, id: Uuid) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("class {id}")))?;

        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn list_all(db: &PgPool) -> Result<Vec<Class>, AppError> {
        let classes =
            sqlx::query_as::<_, Class>(&format!("SELECT {CLASS_COLUMNS} FROM classes"))
                .fetch_all(db)
                .await?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn list_by_instructor(db: &PgPool, email: &str) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE instructor_email = $1"
        ))
        .bind(email)
        .fetch_all(db)
        .await?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, dto: CreateClassRequest) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            "INSERT INTO classes (name, image_url, instructor_name, instructor_email, seats, price)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {CLASS_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.image_url)
        .bind(&dto.instructor_name)
        .bind(&dto.instructor_email)
        .bind(dto.seats)
        .bind(dto.price)
        .fetch_one(db)
        .await?;

        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn update(db: &PgPool, id: Uuid, dto: UpdateClassRequest) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            "UPDATE classes
             SET name = $2, seats = $3, price = $4, updated_at = now()
             WHERE id = $1
             RETURNING {CLASS_COLUMNS}"
        ))
        .bind(id)
        .bind(&dto.name)
        .bind(dto.seats)
        .bind(dto.price)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("class {id}")))?;

        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn set_status(
        db: &PgPool,
        id: Uuid,
        status: ClassStatus,
    ) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            "UPDATE classes SET status = $2, updated_at = now()
             WHERE id = $1
             RETURNING {CLASS_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("class {id}")))?;

        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn set_feedback(db: &PgPool, id: Uuid, feedback: &str) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            "UPDATE classes SET feedback = $2, updated_at = now()
             WHERE id = $1
             RETURNING {CLASS_COLUMNS}"
        ))
        .bind(id)
        .bind(feedback)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("class {id}")))?;

        Ok(class)
    }

    /// Takes one seat and records the enrollment in a single statement, so
    /// concurrent enrollments cannot oversell the class.
    #[instrument(skip(db))]
    pub async fn enroll(db: &PgPool, id: Uuid) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            "UPDATE classes
             SET seats = seats - 1, enrolled = enrolled + 1, updated_at = now()
             WHERE id = $1 AND seats > 0
             RETURNING {CLASS_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::BadRequest("no seats available".to_string()))?;

        Ok(class)
    }
}
