use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// JWT claims. The subject is the user's email; it is a claim of identity
/// only. Privilege is never read from the token — every role decision goes
/// back to the user store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Email of the authenticated user.
    pub sub: String,
    /// Display name supplied at issuance, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct IssueTokenRequest {
    #[validate(email)]
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}
