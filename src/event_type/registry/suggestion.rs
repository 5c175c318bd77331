//! Relevance scoring for event type suggestions.
//!
//! Scores are kept in tenths so that ranking is exact: a substring match on
//! the action is worth 5, a substring match on the context 3, and every
//! matching keyword hint 2.

use crate::event_type::domain::EventCategory;

/// Relevance of a type string to an action/context query, in tenths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelevanceScore(u32);

impl RelevanceScore {
    /// A score that excludes the type from suggestions.
    pub const ZERO: Self = Self(0);

    /// Creates a score from a number of tenths.
    #[must_use]
    pub const fn from_tenths(tenths: u32) -> Self {
        Self(tenths)
    }

    /// Returns the score in tenths.
    #[must_use]
    pub const fn tenths(self) -> u32 {
        self.0
    }

    /// Returns `true` for a zero score.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

/// A keyword that, when found in an action, hints at likely categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordHint {
    /// Lowercase keyword searched for in the action.
    pub keyword: String,
    /// Categories the keyword points at.
    pub categories: Vec<EventCategory>,
}

impl KeywordHint {
    /// Creates a hint; the keyword is lowercased.
    #[must_use]
    pub fn new(keyword: &str, categories: impl IntoIterator<Item = EventCategory>) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            categories: categories.into_iter().collect(),
        }
    }

    /// A category hint matches when its spelling occurs inside the leading
    /// segment, so an `action` hint also matches `action_response` types.
    fn matches(&self, action: &str, leading_segment: &str) -> bool {
        action.contains(self.keyword.as_str())
            && self
                .categories
                .iter()
                .any(|category| leading_segment.contains(category.as_str()))
    }
}

/// Scoring weights and keyword table used by the registry's suggestions.
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event_type::registry::SuggestionConfig;
///
/// let config = SuggestionConfig::default();
/// let score = config.score("action.qq.send_group_msg", "send", "group");
/// assert_eq!(score.tenths(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionConfig {
    /// Added when the action is a substring of the type.
    pub action_weight: u32,
    /// Added when the non-empty context is a substring of the type.
    pub context_weight: u32,
    /// Added for every matching keyword hint.
    pub keyword_weight: u32,
    /// Keyword table consulted for category hints.
    pub keyword_hints: Vec<KeywordHint>,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        use EventCategory::{Action, Message, Notice, Request};

        Self {
            action_weight: 5,
            context_weight: 3,
            keyword_weight: 2,
            keyword_hints: vec![
                KeywordHint::new("send", [Message, Action]),
                KeywordHint::new("receive", [Message]),
                KeywordHint::new("kick", [Action]),
                KeywordHint::new("ban", [Action]),
                KeywordHint::new("add", [Request, Action]),
                KeywordHint::new("join", [Notice, Request]),
                KeywordHint::new("leave", [Notice]),
            ],
        }
    }
}

impl SuggestionConfig {
    /// Creates a configuration with the default weights and no keyword table.
    #[must_use]
    pub fn without_keywords() -> Self {
        Self {
            keyword_hints: Vec::new(),
            ..Self::default()
        }
    }

    /// Adds a keyword hint.
    #[must_use]
    pub fn with_keyword_hint(
        mut self,
        keyword: &str,
        categories: impl IntoIterator<Item = EventCategory>,
    ) -> Self {
        self.keyword_hints.push(KeywordHint::new(keyword, categories));
        self
    }

    /// Scores a type string against an action and optional context.
    ///
    /// Matching is case-insensitive.
    #[must_use]
    pub fn score(&self, event_type: &str, action: &str, context: &str) -> RelevanceScore {
        let type_lower = event_type.to_lowercase();
        let action_lower = action.to_lowercase();
        let leading_segment = event_type.split('.').next().unwrap_or_default();
        let mut tenths = 0_u32;

        if type_lower.contains(action_lower.as_str()) {
            tenths = tenths.saturating_add(self.action_weight);
        }

        if !context.is_empty() && type_lower.contains(context.to_lowercase().as_str()) {
            tenths = tenths.saturating_add(self.context_weight);
        }

        for hint in &self.keyword_hints {
            if hint.matches(&action_lower, leading_segment) {
                tenths = tenths.saturating_add(self.keyword_weight);
            }
        }

        RelevanceScore(tenths)
    }

    /// Ranks candidates by descending score, dropping zero scores.
    ///
    /// Equal scores keep their candidate order.
    pub fn rank<'a>(
        &self,
        candidates: impl IntoIterator<Item = &'a str>,
        action: &str,
        context: &str,
    ) -> Vec<String> {
        let mut scored: Vec<(&str, RelevanceScore)> = candidates
            .into_iter()
            .map(|event_type| (event_type, self.score(event_type, action, context)))
            .filter(|(_, score)| !score.is_zero())
            .collect();
        scored.sort_by(|left, right| right.1.cmp(&left.1));
        scored
            .into_iter()
            .map(|(event_type, _)| event_type.to_owned())
            .collect()
    }
}
