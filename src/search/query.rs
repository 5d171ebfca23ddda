use std::sync::LazyLock;

use regex::Regex;

use crate::search::difficulty;

/// Matches the entire parenthesized label group emitted by `build_query`.
static LABEL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\(label:"[^"]*"(\s+label:"[^"]*")*\)"#).unwrap());

/// Assemble the upstream search query string.
///
/// Always starts with `state:open`, then the free-text query verbatim,
/// then a parenthesized OR-group of languages, then a parenthesized
/// OR-group of quoted labels. The label group combines explicitly
/// selected labels with the keyword table of each selected difficulty.
/// Labels are not deduplicated; the upstream grammar tolerates repeats.
pub fn build_query(
    query: &str,
    languages: &[String],
    difficulties: &[String],
    labels: &[String],
) -> String {
    let mut search_query = String::from("state:open");

    if !query.is_empty() {
        search_query.push(' ');
        search_query.push_str(query);
    }

    if !languages.is_empty() {
        let terms: Vec<String> = languages
            .iter()
            .map(|lang| format!("language:{lang}"))
            .collect();
        search_query.push_str(&format!(" ({})", terms.join(" ")));
    }

    let mut all_labels: Vec<String> = labels.to_vec();
    for diff in difficulties {
        all_labels.extend(
            difficulty::labels_for(diff)
                .iter()
                .map(|label| label.to_string()),
        );
    }

    if !all_labels.is_empty() {
        let terms: Vec<String> = all_labels
            .iter()
            .map(|label| format!("label:\"{label}\""))
            .collect();
        search_query.push_str(&format!(" ({})", terms.join(" ")));
    }

    search_query
}

/// Rewrite a query for the easy-issue fallback search: drop the strict
/// quoted label group entirely and search for the literal phrase instead.
pub fn broaden_for_easy(query: &str) -> String {
    let stripped = LABEL_GROUP.replace(query, "");
    format!("{} good first issue", stripped.trim_end())
}
