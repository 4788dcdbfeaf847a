//! Request handlers, one submodule per resource.
//!
//! Handlers extract the caller and inputs, validate them, and delegate to
//! [`crate::engine`] or a `skillkart_db` repository. Errors map through
//! [`crate::error::AppError`].

pub mod auth;
pub mod badges;
pub mod discussion;
pub mod enrollment;
pub mod profile;
pub mod roadmap;
