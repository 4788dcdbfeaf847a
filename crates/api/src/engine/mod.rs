//! Progress and gamification engine.
//!
//! Handlers stay thin and delegate here. Each submodule owns one part of the
//! step-completion flow:
//!
//! - [`enrollment`] starts roadmaps and resolves a learner's enrollments.
//! - [`progress`] writes step status and decides on the XP award.
//! - [`xp`] appends to and sums the XP ledger.
//! - [`badges`] seeds the catalog and awards badges whose rules are met.

pub mod badges;
pub mod enrollment;
pub mod progress;
pub mod xp;
