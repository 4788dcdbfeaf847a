//! Domain types and pure logic for SkillKart.
//!
//! This crate has no database or HTTP dependencies. Progress transitions,
//! XP rewards, and badge eligibility are decided here; the `db` and `api`
//! crates load data, call into these functions, and persist the results.

pub mod accounts;
pub mod badges;
pub mod discussion;
pub mod error;
pub mod progress;
pub mod roadmap;
pub mod roles;
pub mod types;
pub mod xp;
