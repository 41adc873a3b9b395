//! Prioritised title patterns for locating a person's name.
//!
//! Every pattern is a row in [`DESCRIPTORS`]: a regex template whose named
//! groups carry the roles (`name`, or `first` + `last`, `object`, `lead`,
//! `work`, `rest`) plus the expected name arity. One routine applies any
//! row. Rows are tried in order and the first candidate accepted by the
//! name classifier wins, so row order is precedence. Within a family the
//! three-word row comes before the two-word row so middle names are kept.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::names::{capitalize_first, looks_like_person_name, normalize_whitespace, title_case_words};

/// Structural family a pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternFamily {
    /// `LISA LARSON. Skulptur, stengods`
    CapsNamePeriod,
    /// `rolf lidberg papper litografi 1947`
    InformalLeadingName,
    /// `Larson, Lisa. Skulptur` or `Lisa Larson, skulptur`
    LeadingName,
    /// `FAT, stengods, Danmark. Niels Thorsson`
    TrailingName,
    /// `TAVLA, "Sommar", Carl Larsson (1853-1919), akvarell`
    EmbeddedName,
}

impl PatternFamily {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PatternFamily::CapsNamePeriod => "all-caps name",
            PatternFamily::InformalLeadingName => "informal leading name",
            PatternFamily::LeadingName => "leading name",
            PatternFamily::TrailingName => "trailing name",
            PatternFamily::EmbeddedName => "embedded name",
        }
    }
}

/// Number of words a pattern expects in the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameArity {
    Two,
    Three,
}

impl NameArity {
    fn words(self) -> usize {
        match self {
            NameArity::Two => 2,
            NameArity::Three => 3,
        }
    }
}

/// A candidate split of a title into object type, name and the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleCandidate {
    /// Leading object type, e.g. "FAT". May be empty.
    pub object_type: String,
    /// The name as it appears in the title, whitespace-normalised.
    pub candidate_name: String,
    /// Title text that remains once the name is removed.
    pub remainder: String,
    /// Row id of the pattern that produced this candidate.
    pub pattern_id: u8,
    /// Family of that pattern.
    pub family: PatternFamily,
}

impl TitleCandidate {
    /// The name as it should be presented to the user.
    ///
    /// Informal entries and all-lowercase names are title-cased; anything
    /// else keeps the cataloguer's casing.
    pub fn display_name(&self) -> String {
        let all_lower = !self.candidate_name.chars().any(char::is_uppercase);
        if self.family == PatternFamily::InformalLeadingName || all_lower {
            title_case_words(&self.candidate_name)
        } else {
            self.candidate_name.clone()
        }
    }

    /// The title with the name removed.
    pub fn suggested_title(&self) -> String {
        if self.family == PatternFamily::TrailingName {
            return self.remainder.trim().to_string();
        }
        let object_type = self.object_type.trim();
        let remainder = self.remainder.trim();
        let joined = match (object_type.is_empty(), remainder.is_empty()) {
            (true, _) => remainder.to_string(),
            (false, true) => object_type.to_string(),
            (false, false) => format!("{}, {}", object_type, remainder),
        };
        capitalize_first(&joined)
    }
}

// =============================================================================
// DESCRIPTOR TABLE
// =============================================================================

struct PatternDescriptor {
    id: u8,
    family: PatternFamily,
    arity: NameArity,
    template: &'static str,
}

/// Placeholders expanded before compilation. Order matters: composite
/// placeholders first.
const FRAGMENTS: &[(&str, &str)] = &[
    ("%OBJ%", r"%C%(?:\s+%C%)*"),
    ("%DATES%", r"(?:\s*\((?P<dates>[^)]*)\))?"),
    ("%WORK%", r#"(?:(?P<work>"[^"]+"|“[^”]+”|'[^']+'),\s*)?"#),
    ("%END%", r"(?:,\s*(?P<rest>.+)|\.?\s*)$"),
    // Free text after an unpunctuated name: the next token neither opens
    // with nor ends in punctuation, so "Name, ..." and "Name (dates)" stay
    // with the structured rows.
    ("%FREE%", r"\s+(?P<rest>[^\s,.;:(\[](?:\S*[^\s,.;:])?(?:\s+.*)?)$"),
    // ALL-CAPS word
    ("%C%", r"\p{Lu}[\p{Lu}\-]+"),
    // Title-Case word
    ("%T%", r"\p{Lu}\p{Ll}[\p{L}\-']*"),
    // Informal word: any first letter, lower case after
    ("%I%", r"\p{L}\p{Ll}[\p{Ll}\-']*"),
];

const DESCRIPTORS: &[PatternDescriptor] = &[
    // All-caps name followed by a period.
    PatternDescriptor {
        id: 1,
        family: PatternFamily::CapsNamePeriod,
        arity: NameArity::Three,
        template: r"^(?P<name>%C%\s+%C%\s+%C%)\.\s+(?P<rest>.+)$",
    },
    PatternDescriptor {
        id: 2,
        family: PatternFamily::CapsNamePeriod,
        arity: NameArity::Two,
        template: r"^(?P<name>%C%\s+%C%)\.\s+(?P<rest>.+)$",
    },
    // Informal name at the very start, followed by free text.
    PatternDescriptor {
        id: 3,
        family: PatternFamily::InformalLeadingName,
        arity: NameArity::Three,
        template: r"^(?P<name>%I%\s+%I%\s+%I%)%FREE%",
    },
    PatternDescriptor {
        id: 4,
        family: PatternFamily::InformalLeadingName,
        arity: NameArity::Two,
        template: r"^(?P<name>%I%\s+%I%)%FREE%",
    },
    // "Lastname, Firstname" at the start.
    PatternDescriptor {
        id: 5,
        family: PatternFamily::LeadingName,
        arity: NameArity::Three,
        template: r"^(?P<last>%T%),\s*(?P<first>%T%\s+%T%)%DATES%[,.]\s*(?P<rest>.+)$",
    },
    PatternDescriptor {
        id: 6,
        family: PatternFamily::LeadingName,
        arity: NameArity::Two,
        template: r"^(?P<last>%T%),\s*(?P<first>%T%)%DATES%[,.]\s*(?P<rest>.+)$",
    },
    // "Firstname Lastname," at the start.
    PatternDescriptor {
        id: 7,
        family: PatternFamily::LeadingName,
        arity: NameArity::Three,
        template: r"^(?P<name>%T%\s+%T%\s+%T%)%DATES%[,.]\s*(?P<rest>.+)$",
    },
    PatternDescriptor {
        id: 8,
        family: PatternFamily::LeadingName,
        arity: NameArity::Two,
        template: r"^(?P<name>%T%\s+%T%)%DATES%[,.]\s*(?P<rest>.+)$",
    },
    // Name after the final period of an object-type + attribute title.
    PatternDescriptor {
        id: 9,
        family: PatternFamily::TrailingName,
        arity: NameArity::Three,
        template: r"^(?P<object>%OBJ%),\s*(?P<rest>.+?)\.\s+(?P<name>%T%\s+%T%\s+%T%)%DATES%\.?\s*$",
    },
    PatternDescriptor {
        id: 10,
        family: PatternFamily::TrailingName,
        arity: NameArity::Two,
        template: r"^(?P<object>%OBJ%),\s*(?P<rest>.+?)\.\s+(?P<name>%T%\s+%T%)%DATES%\.?\s*$",
    },
    // Name directly after the object type, optionally after a quoted work title.
    PatternDescriptor {
        id: 11,
        family: PatternFamily::EmbeddedName,
        arity: NameArity::Three,
        template: r"^(?P<object>%OBJ%),\s*%WORK%(?P<name>%T%\s+%T%\s+%T%)%DATES%%END%",
    },
    PatternDescriptor {
        id: 12,
        family: PatternFamily::EmbeddedName,
        arity: NameArity::Two,
        template: r"^(?P<object>%OBJ%),\s*%WORK%(?P<name>%T%\s+%T%)%DATES%%END%",
    },
    // Name between commas further into the attribute list.
    PatternDescriptor {
        id: 13,
        family: PatternFamily::EmbeddedName,
        arity: NameArity::Three,
        template: r"^(?P<object>%OBJ%),\s*(?P<lead>[^,]+?(?:,\s*[^,]+?)*?),\s*%WORK%(?P<name>%T%\s+%T%\s+%T%)%DATES%%END%",
    },
    PatternDescriptor {
        id: 14,
        family: PatternFamily::EmbeddedName,
        arity: NameArity::Two,
        template: r"^(?P<object>%OBJ%),\s*(?P<lead>[^,]+?(?:,\s*[^,]+?)*?),\s*%WORK%(?P<name>%T%\s+%T%)%DATES%%END%",
    },
];

/// Name length bounds, in characters.
const MIN_NAME_CHARS: usize = 4;
const MAX_NAME_CHARS: usize = 40;

/// Words skipped when picking an informal title's object type.
const INFORMAL_FILLER_WORDS: &[&str] = &[
    "och", "med", "på", "av", "för", "från", "till", "under", "över", "vid",
    "samt", "eller", "utan", "ca", "cirka", "den", "det", "ett", "en",
];

struct CompiledPattern {
    id: u8,
    family: PatternFamily,
    arity: NameArity,
    regex: Regex,
}

fn expand(template: &str) -> String {
    FRAGMENTS
        .iter()
        .fold(template.to_string(), |acc, (placeholder, fragment)| {
            acc.replace(placeholder, fragment)
        })
}

static PATTERNS: Lazy<Vec<CompiledPattern>> = Lazy::new(|| {
    DESCRIPTORS
        .iter()
        .map(|d| CompiledPattern {
            id: d.id,
            family: d.family,
            arity: d.arity,
            regex: Regex::new(&expand(d.template)).unwrap(),
        })
        .collect()
});

fn group<'t>(caps: &Captures<'t>, role: &str) -> &'t str {
    caps.name(role).map(|m| m.as_str().trim()).unwrap_or("")
}

impl CompiledPattern {
    /// Apply this row to a title, without classifying the name.
    fn apply(&self, title: &str) -> Option<TitleCandidate> {
        let caps = self.regex.captures(title)?;

        let raw_name = match caps.name("name") {
            Some(name) => name.as_str().to_string(),
            None => format!("{} {}", group(&caps, "first"), group(&caps, "last")),
        };
        let candidate_name = normalize_whitespace(&raw_name);

        let name_chars = candidate_name.chars().count();
        if candidate_name.split(' ').count() != self.arity.words()
            || !(MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&name_chars)
        {
            return None;
        }

        let rest = group(&caps, "rest");
        let (object_type, remainder) = match self.family {
            PatternFamily::CapsNamePeriod | PatternFamily::LeadingName => {
                split_leading_segment(rest)
            }
            PatternFamily::InformalLeadingName => informal_object_type(rest),
            PatternFamily::TrailingName => (group(&caps, "object").to_string(), rest.to_string()),
            PatternFamily::EmbeddedName => {
                let parts: Vec<&str> = [group(&caps, "lead"), group(&caps, "work"), rest]
                    .into_iter()
                    .filter(|p| !p.is_empty())
                    .collect();
                (group(&caps, "object").to_string(), parts.join(", "))
            }
        };

        Some(TitleCandidate {
            object_type,
            candidate_name,
            remainder: normalize_whitespace(&remainder),
            pattern_id: self.id,
            family: self.family,
        })
    }
}

/// Split `"Skulptur, stengods, Gustavsberg"` into `("Skulptur", "stengods, Gustavsberg")`.
fn split_leading_segment(rest: &str) -> (String, String) {
    match rest.split_once(',') {
        Some((head, tail)) => (head.trim().to_string(), tail.trim().to_string()),
        None => (rest.trim().to_string(), String::new()),
    }
}

/// Pick the first meaningful word of an informal title as its object type.
///
/// Short words, year-like tokens and filler words are skipped; the chosen
/// word is upper-cased and removed from the remainder.
fn informal_object_type(rest: &str) -> (String, String) {
    let words: Vec<&str> = rest.split_whitespace().collect();
    let position = words.iter().position(|word| {
        let core = word.trim_matches(|c: char| !c.is_alphanumeric());
        core.chars().count() > 2
            && !core.starts_with(|c: char| c.is_ascii_digit())
            && !INFORMAL_FILLER_WORDS.contains(&core.to_lowercase().as_str())
    });

    match position {
        Some(i) => {
            let object_type = words[i]
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_uppercase();
            let remainder: Vec<&str> = words
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, w)| *w)
                .collect();
            (object_type, remainder.join(" "))
        }
        None => (String::new(), rest.trim().to_string()),
    }
}

// =============================================================================
// EXTRACTOR
// =============================================================================

/// Splits titles into object type, candidate name and remainder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl PatternExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Every raw pattern match, in priority order, before name classification.
    pub fn candidates(&self, title: &str) -> Vec<TitleCandidate> {
        let title = title.trim();
        PATTERNS.iter().filter_map(|p| p.apply(title)).collect()
    }

    /// The first candidate whose name passes the person-name classifier.
    pub fn extract(&self, title: &str) -> Option<TitleCandidate> {
        let title = title.trim();
        PATTERNS
            .iter()
            .filter_map(|p| p.apply(title))
            .find(|c| looks_like_person_name(&c.candidate_name))
    }

    /// Like [`extract`](Self::extract), restricted to informal leading names.
    pub fn informal_candidate(&self, title: &str) -> Option<TitleCandidate> {
        let title = title.trim();
        PATTERNS
            .iter()
            .filter(|p| p.family == PatternFamily::InformalLeadingName)
            .filter_map(|p| p.apply(title))
            .find(|c| looks_like_person_name(&c.candidate_name))
    }
}
