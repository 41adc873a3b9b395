//! Small casing and diacritic helpers shared by the classifiers.

/// Fold the diacritics that commonly get dropped when typing Swedish catalog
/// text: `ä/å → a`, `ö → o`, `ü → u`, `é/è/ê → e`.
///
/// The input is lower-cased first, so the result is always lower case.
pub fn fold_diacritics(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .map(|c| match c {
            'ä' | 'å' => 'a',
            'ö' => 'o',
            'ü' => 'u',
            'é' | 'è' | 'ê' => 'e',
            other => other,
        })
        .collect()
}

/// Two words are diacritic-equivalent when they only differ in the
/// characters folded by [`fold_diacritics`].
///
/// Words that are already equal after case folding are *not* variants.
pub fn is_diacritic_variant(a: &str, b: &str) -> bool {
    let (la, lb) = (a.to_lowercase(), b.to_lowercase());
    la != lb && fold_diacritics(&la) == fold_diacritics(&lb)
}

/// All cased characters are upper case and there is at least one letter.
pub fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
        && !word.chars().any(char::is_lowercase)
}

/// Upper-case first letter followed by at least one lower-case letter.
pub fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.any(char::is_lowercase),
        _ => false,
    }
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title-case every whitespace-separated word (`"rolf lidberg"` → `"Rolf Lidberg"`).
pub fn title_case_words(text: &str) -> String {
    text.split_whitespace()
        .map(|w| capitalize_first(&w.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Re-case `replacement` to follow the casing style of `original`.
pub fn match_case(original: &str, replacement: &str) -> String {
    if is_all_caps(original) && original.chars().count() > 1 {
        replacement.to_uppercase()
    } else if original.chars().next().is_some_and(char::is_uppercase) {
        capitalize_first(replacement)
    } else {
        replacement.to_string()
    }
}

/// Collapse runs of whitespace and trim.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_diacritics() {
        assert_eq!(fold_diacritics("Rörstrand"), "rorstrand");
        assert_eq!(fold_diacritics("Höganäs"), "hoganas");
        assert_eq!(fold_diacritics("Gustavsberg"), "gustavsberg");
    }

    #[test]
    fn test_diacritic_variant() {
        assert!(is_diacritic_variant("Rorstrand", "Rörstrand"));
        assert!(!is_diacritic_variant("Rörstrand", "rörstrand"));
        assert!(!is_diacritic_variant("Orrefos", "Orrefors"));
    }

    #[test]
    fn test_casing_predicates() {
        assert!(is_all_caps("TAVLA"));
        assert!(!is_all_caps("Tavla"));
        assert!(!is_all_caps("1947"));
        assert!(is_title_case("Jarup"));
        assert!(!is_title_case("JARUP"));
        assert!(!is_title_case("jarup"));
    }

    #[test]
    fn test_match_case() {
        assert_eq!(match_case("PORSLING", "porslin"), "PORSLIN");
        assert_eq!(match_case("Porsling", "porslin"), "Porslin");
        assert_eq!(match_case("porsling", "porslin"), "porslin");
    }

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case_words("rolf  lidberg"), "Rolf Lidberg");
        assert_eq!(title_case_words("ÅKE ÖBERG"), "Åke Öberg");
    }
}
