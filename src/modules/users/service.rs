use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{UpsertUserRequest, User, UserRole};
use crate::utils::errors::AppError;

const USER_COLUMNS: &str =
    "id, name, email, photo_url, role, student_count, created_at, updated_at";

pub struct UserService;

impl UserService {
    /// First-login upsert keyed on email. A conflicting row keeps its role:
    /// logging in again must never demote an admin back to `user`.
    #[instrument(skip(db))]
    pub async fn upsert_user(db: &PgPool, dto: UpsertUserRequest) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, photo_url)
             VALUES ($1, $2, $3)
             ON CONFLICT (email) DO UPDATE
             SET name = EXCLUDED.name, photo_url = EXCLUDED.photo_url, updated_at = now()
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.photo_url)
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn list_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users"))
            .fetch_all(db)
            .await?;

        Ok(users)
    }

    /// Stored role for an email. A user who has never been upserted is a
    /// plain `user`.
    #[instrument(skip(db))]
    pub async fn role_of(db: &PgPool, email: &str) -> Result<UserRole, AppError> {
        let role = crate::middleware::role::lookup_role(db, email).await?;
        Ok(role.unwrap_or_default())
    }

    #[instrument(skip(db))]
    pub async fn list_instructors(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = $1"
        ))
        .bind(UserRole::Instructor)
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    /// Six most popular instructors by student count.
    #[instrument(skip(db))]
    pub async fn popular_instructors(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users
             WHERE role = $1
             ORDER BY student_count DESC
             LIMIT 6"
        ))
        .bind(UserRole::Instructor)
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn promote(db: &PgPool, id: Uuid, role: UserRole) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET role = $2, updated_at = now()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(role)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn increment_students(db: &PgPool, email: &str) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET student_count = student_count + 1, updated_at = now()
             WHERE email = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {email}")))?;

        Ok(user)
    }
}
