use serde::{Deserialize, Serialize};

/// Label keywords that mark an issue as approachable for newcomers.
/// Order matters: the query builder emits label terms in table order.
pub const EASY_LABELS: &[&str] = &[
    "good first issue",
    "beginner",
    "easy",
    "good-first-issue",
    "first-timers-only",
    "first-time",
    "newcomer",
];

/// Only consulted by the query builder; the classifier defaults to
/// intermediate when neither of the other tables matches.
pub const INTERMEDIATE_LABELS: &[&str] = &["intermediate", "medium", "moderate"];

pub const ADVANCED_LABELS: &[&str] = &["advanced", "expert", "hard", "difficult"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// Map an issue's labels to a difficulty tier.
///
/// Case-insensitive substring match against the keyword tables, first
/// match wins: an easy keyword takes priority over an advanced one, and
/// an issue with no recognized label is treated as intermediate rather
/// than unknown.
pub fn classify(labels: &[String]) -> Difficulty {
    if matches_any(labels, EASY_LABELS) {
        return Difficulty::Easy;
    }
    if matches_any(labels, ADVANCED_LABELS) {
        return Difficulty::Advanced;
    }
    Difficulty::Intermediate
}

/// Keyword table for a selected difficulty filter value. Unrecognized
/// values contribute nothing to the label group.
pub fn labels_for(difficulty: &str) -> &'static [&'static str] {
    match difficulty {
        "easy" => EASY_LABELS,
        "intermediate" => INTERMEDIATE_LABELS,
        "advanced" => ADVANCED_LABELS,
        _ => &[],
    }
}

fn matches_any(labels: &[String], keywords: &[&str]) -> bool {
    labels.iter().any(|label| {
        let label = label.to_lowercase();
        keywords.iter().any(|keyword| label.contains(keyword))
    })
}
