//! Request extractors that authenticate the caller and gate routes by role.
//!
//! - [`auth::AuthUser`] decodes the Bearer access token.
//! - [`rbac::RequireAdmin`] admits admins only.
//! - [`rbac::RequireLearner`] admits learners only.
//! - [`rbac::RequireAuth`] admits any signed-in account.

pub mod auth;
pub mod rbac;
