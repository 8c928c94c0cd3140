//! Viewer personality classification.
//!
//! Rules live in [`PERSONALITY_RULES`] and are checked top to bottom; the
//! first rule whose predicate holds decides the label. Several predicates can
//! hold at once, so the table order is the priority order.

use watch_stats_models::PersonalityKind;

/// Aggregates the classifier looks at
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PersonalityInputs {
    pub total_movies: usize,
    pub total_episodes: usize,
    pub total_entries: usize,
    /// Mean over all rated entries on the 5-point scale; `None` when nothing is rated
    pub combined_average: Option<f64>,
    pub distinct_genres: usize,
    pub review_count: usize,
    pub total_hours: f64,
}

pub struct PersonalityRule {
    pub kind: PersonalityKind,
    pub applies: fn(&PersonalityInputs) -> bool,
}

const RATED_RULES_MIN_ENTRIES: usize = 10;

pub const PERSONALITY_RULES: &[PersonalityRule] = &[
    PersonalityRule {
        kind: PersonalityKind::Newcomer,
        applies: |inputs| inputs.total_entries == 0,
    },
    PersonalityRule {
        kind: PersonalityKind::Binger,
        applies: |inputs| inputs.total_episodes > inputs.total_movies * 3,
    },
    PersonalityRule {
        kind: PersonalityKind::Critic,
        applies: |inputs| {
            inputs.total_entries > RATED_RULES_MIN_ENTRIES
                && inputs.combined_average.map_or(false, |average| average < 2.5)
        },
    },
    PersonalityRule {
        kind: PersonalityKind::Enthusiast,
        applies: |inputs| {
            inputs.total_entries > RATED_RULES_MIN_ENTRIES
                && inputs.combined_average.map_or(false, |average| average > 4.0)
        },
    },
    PersonalityRule {
        kind: PersonalityKind::Explorer,
        applies: |inputs| inputs.distinct_genres > 5,
    },
    PersonalityRule {
        kind: PersonalityKind::Reviewer,
        // more than 30% of entries reviewed
        applies: |inputs| inputs.review_count * 10 > inputs.total_entries * 3,
    },
    PersonalityRule {
        kind: PersonalityKind::MarathonRunner,
        applies: |inputs| inputs.total_hours > 200.0,
    },
    PersonalityRule {
        kind: PersonalityKind::Cinephile,
        applies: |inputs| inputs.total_movies > inputs.total_episodes,
    },
    PersonalityRule {
        kind: PersonalityKind::BalancedViewer,
        applies: |_| true,
    },
];

pub fn classify(inputs: &PersonalityInputs) -> PersonalityKind {
    PERSONALITY_RULES
        .iter()
        .find(|rule| (rule.applies)(inputs))
        .map(|rule| rule.kind)
        .unwrap_or(PersonalityKind::BalancedViewer)
}
