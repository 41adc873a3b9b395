//! Context test for "is this flagged word somebody's name?".

use regex::RegexBuilder;

use super::text::{is_all_caps, is_title_case};

/// Whether `word` is likely a proper name given the text it appears in.
///
/// ALL-CAPS words are object types, never names. Occurrences are found
/// case-insensitively and judged by their casing in `full_text`; a word counts
/// as a proper name when any whole-word occurrence of it:
/// - follows an initial (`"E. Jarup"`),
/// - is Title-Case and directly follows a comma (`"VAS, glas, Orrefors"`),
/// - is Title-Case and sits next to another Title-Case word (`"Erik Jarup"`).
pub fn is_likely_proper_name(word: &str, full_text: &str) -> bool {
    let word = word.trim();
    if word.is_empty() || is_all_caps(word) {
        return false;
    }
    let Ok(occurrences) = RegexBuilder::new(&regex::escape(word))
        .case_insensitive(true)
        .build()
    else {
        return false;
    };

    for found in occurrences.find_iter(full_text) {
        let matched = found.as_str();
        let before = &full_text[..found.start()];
        let after = &full_text[found.end()..];

        let glued = before.chars().next_back().is_some_and(char::is_alphanumeric)
            || after.chars().next().is_some_and(char::is_alphanumeric);
        if glued {
            continue;
        }

        if is_all_caps(matched) {
            continue;
        }
        if follows_initial(before) {
            return true;
        }
        if !is_title_case(matched) {
            continue;
        }
        if before.trim_end().ends_with(',') {
            return true;
        }
        if previous_word(before).is_some_and(is_title_case)
            || next_word(after).is_some_and(is_title_case)
        {
            return true;
        }
    }

    false
}

/// `before` ends with a lone capital letter and a period, e.g. `"... E. "`.
fn follows_initial(before: &str) -> bool {
    let mut rev = before.trim_end().chars().rev();
    match (rev.next(), rev.next()) {
        (Some('.'), Some(initial)) if initial.is_uppercase() => {
            rev.next().is_none_or(|c| !c.is_alphabetic())
        }
        _ => false,
    }
}

/// The word directly before, separated only by whitespace.
fn previous_word(before: &str) -> Option<&str> {
    if !before.ends_with(char::is_whitespace) {
        return None;
    }
    before
        .split_whitespace()
        .next_back()
        .filter(|w| w.chars().all(|c| c.is_alphabetic() || c == '-'))
}

/// The word directly after, separated only by whitespace.
fn next_word(after: &str) -> Option<&str> {
    if !after.starts_with(char::is_whitespace) {
        return None;
    }
    after
        .split_whitespace()
        .next()
        .map(|w| w.trim_end_matches(|c: char| !c.is_alphabetic()))
        .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_alphabetic() || c == '-'))
}
