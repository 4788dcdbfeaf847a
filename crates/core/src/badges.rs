//! Badge catalog and eligibility rules.
//!
//! The catalog is a fixed list of definitions seeded into the `badges` table
//! at startup. Eligibility is decided by [`BADGE_RULES`], an ordered table of
//! (rule, badge name) pairs evaluated against a user's [`BadgeStats`]. The
//! core crate has no database access; callers load the stats and persist
//! the awards.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

pub const BADGE_GETTING_STARTED: &str = "Getting Started";
pub const BADGE_ROADMAP_FINISHER: &str = "Roadmap Finisher";
pub const BADGE_STREAK_MASTER: &str = "Streak Master";

/// A badge definition as seeded into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeDefinition {
    pub name: &'static str,
    pub description: &'static str,
}

/// Badges inserted by the startup seeding routine, in creation order.
///
/// `Roadmap Finisher` and `Streak Master` have no rule in [`BADGE_RULES`]
/// and cannot be earned yet.
pub const DEFAULT_BADGES: &[BadgeDefinition] = &[
    BadgeDefinition {
        name: BADGE_GETTING_STARTED,
        description: "Complete your first roadmap step",
    },
    BadgeDefinition {
        name: BADGE_ROADMAP_FINISHER,
        description: "Complete every step of a roadmap",
    },
    BadgeDefinition {
        name: BADGE_STREAK_MASTER,
        description: "Stay active several days in a row",
    },
];

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Aggregates about a user that badge rules are evaluated against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BadgeStats {
    /// Completed progress records across all of the user's enrollments.
    pub completed_steps: i64,
}

/// An eligibility predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeRule {
    /// At least `min` steps completed.
    CompletedStepsAtLeast { min: i64 },
}

impl BadgeRule {
    pub fn is_satisfied(&self, stats: &BadgeStats) -> bool {
        match self {
            Self::CompletedStepsAtLeast { min } => stats.completed_steps >= *min,
        }
    }
}

/// Ordered rule table. Each satisfied rule awards the paired badge.
pub const BADGE_RULES: &[(BadgeRule, &str)] = &[(
    BadgeRule::CompletedStepsAtLeast { min: 1 },
    BADGE_GETTING_STARTED,
)];

/// Names of every badge whose rule is satisfied by `stats`, in rule order.
pub fn eligible_badges(stats: &BadgeStats) -> Vec<&'static str> {
    eligible_badges_from(BADGE_RULES, stats)
}

/// Evaluate an explicit rule table.
pub fn eligible_badges_from(
    rules: &[(BadgeRule, &'static str)],
    stats: &BadgeStats,
) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|(rule, _)| rule.is_satisfied(stats))
        .map(|(_, name)| *name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_badges_before_first_completion() {
        let stats = BadgeStats { completed_steps: 0 };
        assert!(eligible_badges(&stats).is_empty());
    }

    #[test]
    fn first_completion_earns_getting_started() {
        let stats = BadgeStats { completed_steps: 1 };
        assert_eq!(eligible_badges(&stats), vec![BADGE_GETTING_STARTED]);
    }

    #[test]
    fn many_completions_still_earn_getting_started() {
        let stats = BadgeStats {
            completed_steps: 25,
        };
        assert!(eligible_badges(&stats).contains(&BADGE_GETTING_STARTED));
    }

    #[test]
    fn rules_evaluated_in_order() {
        let rules = [
            (BadgeRule::CompletedStepsAtLeast { min: 5 }, "Five"),
            (BadgeRule::CompletedStepsAtLeast { min: 1 }, "One"),
            (BadgeRule::CompletedStepsAtLeast { min: 10 }, "Ten"),
        ];
        let stats = BadgeStats { completed_steps: 6 };
        assert_eq!(eligible_badges_from(&rules, &stats), vec!["Five", "One"]);
    }

    #[test]
    fn every_rule_names_a_catalog_badge() {
        for (_, name) in BADGE_RULES {
            assert!(
                DEFAULT_BADGES.iter().any(|b| b.name == *name),
                "rule badge '{name}' missing from catalog"
            );
        }
    }

    #[test]
    fn catalog_names_are_unique() {
        let mut names: Vec<_> = DEFAULT_BADGES.iter().map(|b| b.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DEFAULT_BADGES.len());
    }
}
