//! Cross-source deduplication and false-positive filtering.

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::trace;

use crate::dictionary::Dictionary;
use crate::names::{is_diacritic_variant, is_likely_proper_name};
use crate::session::SessionContext;

use super::issue::{IssueType, SpellIssue};

/// Why an issue was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    Ignored,
    Whitelisted,
    InArtistField,
    NameDiacritics,
    UnsureAboutName,
}

/// Merges issues from all sources into one ranked list.
pub struct ResultMerger<'a> {
    dictionary: &'a Dictionary,
    proper_name_min_confidence: f64,
}

impl<'a> ResultMerger<'a> {
    /// Create a merger using `dictionary` for the whitelist.
    pub fn new(dictionary: &'a Dictionary, proper_name_min_confidence: f64) -> Self {
        Self {
            dictionary,
            proper_name_min_confidence,
        }
    }

    /// Keep one issue per case-folded original: the most confident one.
    ///
    /// Ties go to the issue seen first, so source order is the tie-break.
    pub fn dedupe(issues: impl IntoIterator<Item = SpellIssue>) -> Vec<SpellIssue> {
        let mut best: IndexMap<String, SpellIssue> = IndexMap::new();
        for issue in issues {
            match best.entry(issue.key()) {
                Entry::Occupied(mut slot) => {
                    if issue.confidence > slot.get().confidence {
                        slot.insert(issue);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(issue);
                }
            }
        }
        best.into_values().collect()
    }

    /// The first filter that drops `issue`, if any.
    pub fn drop_reason(&self, issue: &SpellIssue, text: &str, session: &SessionContext) -> Option<DropReason> {
        let original = issue.original.trim();
        if session.is_ignored(original) {
            return Some(DropReason::Ignored);
        }
        if self.dictionary.is_whitelisted(original) {
            return Some(DropReason::Whitelisted);
        }
        if session.is_in_artist_field(original) {
            return Some(DropReason::InArtistField);
        }
        // Brands skip the proper-name guard. They come from a closed list and
        // sit Title-Case after a comma in nearly every title, so the guard
        // would drop every brand correction.
        if issue.issue_type != IssueType::Brand && is_likely_proper_name(original, text) {
            if is_diacritic_variant(original, &issue.corrected) {
                return Some(DropReason::NameDiacritics);
            }
            if issue.confidence < self.proper_name_min_confidence {
                return Some(DropReason::UnsureAboutName);
            }
        }
        None
    }

    /// Drop issues that are likely false positives.
    pub fn filter_false_positives(
        &self,
        issues: Vec<SpellIssue>,
        text: &str,
        session: &SessionContext,
    ) -> Vec<SpellIssue> {
        issues
            .into_iter()
            .filter(|issue| match self.drop_reason(issue, text, session) {
                Some(reason) => {
                    trace!(original = %issue.original, ?reason, "dropped spelling issue");
                    false
                }
                None => true,
            })
            .collect()
    }

    /// Deduplicate, filter and rank issues from every source.
    ///
    /// Sources should be passed in precedence order: dictionary, oracle, brand.
    pub fn merge(
        &self,
        sources: Vec<Vec<SpellIssue>>,
        text: &str,
        session: &SessionContext,
    ) -> Vec<SpellIssue> {
        let deduped = Self::dedupe(sources.into_iter().flatten());
        let mut issues = self.filter_false_positives(deduped, text, session);
        issues.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        issues
    }
}
