//! Person-name plausibility classifier.
//!
//! Catalog titles are full of Title-Case word pairs that are not people:
//! places ("Royal Copenhagen"), manufacturers ("Kosta Boda"), subjects
//! ("Gustav Vasa") and short descriptions ("Flicka med hund"). The classifier
//! is deliberately conservative and is shared by artist detection and the
//! spellcheck false-positive filter.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// STATIC TABLES
// =============================================================================

/// Whole-candidate exclusions: places, manufacturers and historical subjects.
static EXCLUDED_FULL_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Places
        "new york",
        "los angeles",
        "san francisco",
        "buenos aires",
        "costa rica",
        "hong kong",
        "sankt petersburg",
        "st petersburg",
        "gamla stan",
        "gamla uppsala",
        // Manufacturers and brands
        "royal copenhagen",
        "kosta boda",
        "upsala ekeby",
        "bing grøndahl",
        "georg jensen",
        "svenskt tenn",
        "fritz hansen",
        "louis vuitton",
        "herman miller",
        "nils nessim",
        // Historical figures who appear as subjects
        "gustav vasa",
        "gustaf vasa",
        "karl xii",
        "karl xiv johan",
        "karl johan",
        "gustav iii",
        "gustaf iii",
        "drottning kristina",
        "drottning victoria",
        "napoleon bonaparte",
        "carl von linné",
        "jungfru maria",
        "jesus kristus",
        "kung oscar",
    ]
    .into_iter()
    .collect()
});

/// Single tokens that never occur in an artist's name.
static NON_NAME_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Cities and countries
        "stockholm", "göteborg", "malmö", "uppsala", "visby", "kalmar",
        "paris", "london", "köpenhamn", "oslo", "helsingfors", "helsinki",
        "berlin", "wien", "rom", "venedig", "milano", "amsterdam", "new",
        "sverige", "danmark", "norge", "finland", "frankrike", "italien",
        "tyskland", "england", "kina", "japan",
        // Manufacturers
        "orrefors", "kosta", "boda", "gustavsberg", "rörstrand", "arabia",
        "iittala", "höganäs", "ekeby", "upsala", "skultuna", "pukeberg",
        "royal", "copenhagen", "grøndahl", "meissen", "rosenthal", "ikea",
        "svenskt", "tenn", "nuutajärvi", "holmegaard", "lammhults",
        // Materials and techniques
        "glas", "kristall", "porslin", "stengods", "keramik", "fajans",
        "flintgods", "silver", "nysilver", "mässing", "koppar", "brons",
        "järn", "gjutjärn", "trä", "teak", "mahogny", "jakaranda", "furu",
        "valnöt", "olja", "duk", "pannå", "papper",
        "akvarell", "gouache", "litografi", "etsning", "serigrafi",
        "träsnitt", "färglitografi", "tempera", "pastell", "kol", "blyerts",
        "tusch", "emalj", "glasyr", "marmor", "alabaster", "läder", "textil",
        "ull", "siden", "guld", "förgylld", "patinerad", "signerad",
        // Object types
        "tavla", "målning", "oljemålning", "teckning", "skulptur", "figurin",
        "vas", "skål", "fat", "tallrik", "kanna", "karaff", "pokal", "ljusstake",
        "lampa", "bordslampa", "golvlampa", "stol", "karmstol", "fåtölj",
        "bord", "soffbord", "byrå", "skåp", "sekretär", "soffa", "spegel",
        "matta", "klocka", "ur", "servis", "kaffeservis", "ljuslykta", "ask",
        "dosa", "bricka", "kruka", "urna", "bägare", "glas", "skulpturer",
        // Descriptive nouns
        "kvinna", "kvinnor", "man", "män", "flicka", "flickor", "pojke",
        "pojkar", "barn", "dam", "herre", "hund", "katt", "häst", "fågel",
        "fåglar", "blommor", "blomma", "landskap", "hus", "motiv", "porträtt",
        "stilleben", "figur", "dekor", "hav", "skog", "sjö", "båt", "stad",
        "vinter", "sommar", "höst", "vår",
        "par", "set", "sats",
        "pendyl", "kista", "skrin", "ljuskrona", "kandelaber", "hylla", "pall",
        "taburett", "brosch", "armband", "halsband", "kopp", "mugg", "terrin",
        "flaska", "krus", "lampett", "bonad", "ikon", "relief", "bestick",
        // Descriptive adjectives
        "antik", "antika", "antikt", "äldre", "gammal", "gamla", "gammalt",
        "vacker", "vackra", "vackert", "fin", "fina", "fint", "stor", "stora",
        "stort", "liten", "litet", "lilla", "små", "hög", "höga", "låg", "låga",
        "rund", "runda", "oval", "ovala", "fyrkantig", "ovanlig", "sällsynt",
        "dekorativ", "rustik", "modern", "klassisk", "handmålad", "handgjord",
        "blå", "röd", "grön", "vit", "svart", "gul", "brun", "grå",
        "svensk", "svenska", "dansk", "danska", "norsk", "finsk", "fransk",
        "engelsk", "tysk", "rysk", "kinesisk", "japansk",
        "gustaviansk", "sengustaviansk", "jugend", "barock", "rokoko",
        "allmoge", "empire",
        // Prepositions and conjunctions
        "och", "med", "på", "i", "av", "för", "från", "till", "under", "över",
        "vid", "samt", "eller", "utan", "efter", "mot", "om", "ca", "cirka",
        "the", "and", "of", "with",
    ]
    .into_iter()
    .collect()
});

/// Object and material nouns that also end compounds ("glasskulptur",
/// "spegel-byrå"). Kept to heads no common surname ends with.
const OBJECT_NOUN_HEADS: &[&str] = &[
    "skulptur", "målning", "teckning", "figurin", "ljusstake", "lampa",
    "byrå", "skåp", "spegel", "klocka", "tallrik", "servis", "lykta", "skrin",
    "kista", "pendyl", "karaff", "pokal", "bricka", "kruka", "bägare",
    "fåtölj", "soffa", "skål", "kanna", "porslin", "keramik", "kristall",
    "mässing", "gods", "fajans", "litografi", "akvarell", "etsning",
    "träsnitt",
];

/// "Flicka med hund", "Båt vid brygga" and friends.
static DESCRIPTIVE_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\S+\s+(?:med|och|vid|på|under)\s+\S+$").unwrap()
});

// =============================================================================
// CLASSIFIER
// =============================================================================

/// Decide whether `candidate` is plausibly a person's name.
///
/// Accepts two or three tokens (firstname [middle] lastname), each at least
/// two characters long and starting with a letter. Case is not checked:
/// informally typed lowercase names are accepted and normalised elsewhere.
pub fn looks_like_person_name(candidate: &str) -> bool {
    let tokens: Vec<&str> = candidate.split_whitespace().collect();
    if !(2..=3).contains(&tokens.len()) {
        return false;
    }

    let shape_ok = tokens.iter().all(|token| {
        token.chars().count() >= 2 && token.chars().next().is_some_and(char::is_alphabetic)
    });
    if !shape_ok {
        return false;
    }

    let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
    if EXCLUDED_FULL_NAMES.contains(lowered.join(" ").as_str()) {
        return false;
    }

    if lowered.iter().any(|t| NON_NAME_WORDS.contains(t.as_str())) {
        return false;
    }

    if lowered
        .iter()
        .any(|t| OBJECT_NOUN_HEADS.iter().any(|head| t.ends_with(head)))
    {
        return false;
    }

    !DESCRIPTIVE_PHRASE.is_match(candidate.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_names() {
        assert!(looks_like_person_name("Pablo Picasso"));
        assert!(looks_like_person_name("Carl Gustaf Malmsten"));
        assert!(looks_like_person_name("LISA LARSON"));
        assert!(looks_like_person_name("rolf lidberg"));
        assert!(looks_like_person_name("Åke Öberg"));
    }

    #[test]
    fn test_rejects_token_counts() {
        assert!(!looks_like_person_name("Picasso"));
        assert!(!looks_like_person_name("Carl Gustaf Von Malmsten Junior"));
        assert!(!looks_like_person_name(""));
    }

    #[test]
    fn test_rejects_short_or_non_letter_tokens() {
        assert!(!looks_like_person_name("A B"));
        assert!(!looks_like_person_name("E Jarup"));
        assert!(!looks_like_person_name("1947 Larson"));
    }

    #[test]
    fn test_rejects_places_and_brands() {
        assert!(!looks_like_person_name("Stockholm Göteborg"));
        assert!(!looks_like_person_name("Royal Copenhagen"));
        assert!(!looks_like_person_name("Kosta Boda"));
        assert!(!looks_like_person_name("Gustav Vasa"));
        assert!(!looks_like_person_name("glas kristall"));
    }

    #[test]
    fn test_rejects_descriptive_adjectives() {
        assert!(!looks_like_person_name("Antik pendyl"));
        assert!(!looks_like_person_name("Äldre kista"));
        assert!(!looks_like_person_name("vacker vas"));
        assert!(!looks_like_person_name("Gammal Svensk"));
    }

    #[test]
    fn test_rejects_compound_object_nouns() {
        assert!(!looks_like_person_name("Bertil Vallien Glasskulptur"));
        assert!(!looks_like_person_name("ek spegel-byrå"));
        assert!(!looks_like_person_name("Gustavsbergs stengods"));
        assert!(looks_like_person_name("Stig Lindberg"));
        assert!(looks_like_person_name("Niels Thorsson"));
    }

    #[test]
    fn test_rejects_descriptive_phrases() {
        assert!(!looks_like_person_name("Flicka med hund"));
        assert!(!looks_like_person_name("Anna och Erik"));
        assert!(!looks_like_person_name("Båtar vid bryggan"));
    }
}
