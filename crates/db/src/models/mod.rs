//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts where the table accepts them
//! - An update DTO (all `Option` fields) for patches where updates exist

pub mod badge;
pub mod discussion;
pub mod enrollment;
pub mod progress;
pub mod roadmap;
pub mod session;
pub mod user;
pub mod xp;
