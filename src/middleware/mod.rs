//! The access guard.
//!
//! Every protected request passes two stages, each able to short-circuit to
//! a terminal rejection:
//!
//! 1. **Authenticate** ([`auth::AuthUser`]): the `Authorization: Bearer`
//!    header is required, parsed, and verified. Failures are 401 with one
//!    uniform message.
//! 2. **Authorize** ([`role`]): optional per route — a self-match against
//!    the target email, a role check against the user store, or both.
//!    Failures are 403.
//!
//! The role check always re-reads the store; nothing about privilege is
//! trusted from the token or cached between requests.

pub mod auth;
pub mod role;
