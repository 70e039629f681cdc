use std::collections::HashMap;

/// Statuses suggested in help text. Any string is accepted.
pub const CONVENTIONAL_STATUSES: &[&str] = &[
    "Indexed",
    "Idea",
    "Started",
    "Paused",
    "Completed",
    "Aborted",
    "Ongoing",
    "Not Started",
];

/// Entries whose status exactly matches one of `statuses`.
pub fn filter_by_statuses(
    data: &HashMap<String, String>,
    statuses: &[String],
) -> HashMap<String, String> {
    data.iter()
        .filter(|(_, v)| statuses.iter().any(|s| s == *v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Capitalize the first letter of every word and lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphanumeric() || c == '\'' {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
