//! PostgreSQL connection pool initialization.
//!
//! The pool is created once at startup from `DATABASE_URL`, carried in
//! [`crate::state::AppState`], and closed by the shutdown hook in `main`.
//! Handlers receive it through state rather than reaching for a global.

use sqlx::PgPool;
use std::env;

/// Connects the pool and brings the schema up to date.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is unset, the database is unreachable, or a
/// migration fails. All three are unrecoverable at startup.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    pool
}
