//! Credential handling for learner and admin accounts.
//!
//! - [`password`] hashes and checks account passwords with Argon2id.
//! - [`jwt`] issues and verifies bearer tokens and derives refresh-token hashes.

pub mod jwt;
pub mod password;
