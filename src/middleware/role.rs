//! Authorization checks: stage B of the access guard.
//!
//! Both checks run inside handlers, after [`AuthUser`] has authenticated the
//! request. `ensure_self` compares the target email against the token;
//! `ensure_role` reads the stored role fresh on every call so a promotion or
//! demotion takes effect on the very next request, even for tokens issued
//! before the change.

use sqlx::PgPool;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::utils::errors::{AppError, AuthError};

/// Self-match check: the caller may only act on their own resource.
pub fn ensure_self(auth_user: &AuthUser, email: &str) -> Result<(), AppError> {
    if auth_user.email() != email {
        return Err(AuthError::Forbidden.into());
    }
    Ok(())
}

/// Looks up the stored role for an email. `None` means the user has never
/// been upserted, which the role endpoints treat as plain `user`.
pub async fn lookup_role(db: &PgPool, email: &str) -> Result<Option<UserRole>, AppError> {
    let role = sqlx::query_scalar::<_, UserRole>("SELECT role FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(db)
        .await?;

    Ok(role)
}

/// Role check against the store. The token never carries privilege, so this
/// is the only way a handler may establish it.
pub async fn ensure_role(
    db: &PgPool,
    auth_user: &AuthUser,
    required: UserRole,
) -> Result<(), AppError> {
    match lookup_role(db, auth_user.email()).await? {
        Some(role) if role == required => Ok(()),
        _ => Err(AuthError::Forbidden.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::model::Claims;

    fn auth_user(email: &str) -> AuthUser {
        AuthUser(Claims {
            sub: email.to_string(),
            name: None,
            exp: 9999999999,
            iat: 1234567890,
        })
    }

    #[test]
    fn self_match_accepts_own_email() {
        let user = auth_user("coach@example.com");
        assert!(ensure_self(&user, "coach@example.com").is_ok());
    }

    #[test]
    fn self_match_rejects_other_email() {
        let user = auth_user("coach@example.com");
        let err = ensure_self(&user, "other@example.com").unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::Forbidden)));
    }

    #[test]
    fn self_match_is_case_sensitive() {
        let user = auth_user("coach@example.com");
        assert!(ensure_self(&user, "Coach@example.com").is_err());
    }
}
