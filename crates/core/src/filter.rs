//! Search and filter predicates for the question browser.

use std::collections::BTreeSet;
use std::fmt;

use crate::model::{Category, Difficulty, Question, QuestionId};

/// Label used for the wildcard entries in category/difficulty pickers.
pub const WILDCARD_LABEL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Resolve a category name (e.g. from a `?category=` query) against the
    /// categories that actually exist. Unknown or blank names fall back to
    /// the wildcard.
    #[must_use]
    pub fn from_query(raw: &str, questions: &[Question]) -> Self {
        let trimmed = raw.trim();
        questions
            .iter()
            .map(Question::category)
            .find(|category| category.as_str() == trimmed)
            .map_or(Self::All, |category| Self::Only(category.clone()))
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => WILDCARD_LABEL,
            Self::Only(category) => category.as_str(),
        }
    }

    fn admits(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Wildcard followed by every difficulty level.
    pub const CHOICES: [Self; 4] = [
        Self::All,
        Self::Only(Difficulty::Easy),
        Self::Only(Difficulty::Medium),
        Self::Only(Difficulty::Hard),
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => WILDCARD_LABEL,
            Self::Only(level) => level.as_str(),
        }
    }

    fn admits(self, difficulty: Difficulty) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == difficulty,
        }
    }
}

/// The browser's filter inputs. `Default` is the "show everything" filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionFilter {
    pub search: String,
    pub category: CategoryFilter,
    pub difficulty: DifficultyFilter,
    pub bookmarked_only: bool,
}

impl QuestionFilter {
    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn matches(&self, question: &Question, bookmarks: &BTreeSet<QuestionId>) -> bool {
        let needle = self.search.to_lowercase();
        self.matches_with_needle(question, &needle, bookmarks)
    }

    /// Filter `questions`, preserving their order.
    #[must_use]
    pub fn apply<'a>(
        &self,
        questions: &'a [Question],
        bookmarks: &BTreeSet<QuestionId>,
    ) -> Vec<&'a Question> {
        let needle = self.search.to_lowercase();
        questions
            .iter()
            .filter(|question| self.matches_with_needle(question, &needle, bookmarks))
            .collect()
    }

    fn matches_with_needle(
        &self,
        question: &Question,
        needle: &str,
        bookmarks: &BTreeSet<QuestionId>,
    ) -> bool {
        question.matches_search(needle)
            && self.category.admits(question.category())
            && self.difficulty.admits(question.difficulty())
            && (!self.bookmarked_only || bookmarks.contains(&question.id()))
    }
}

/// Wildcard followed by each distinct category in first-seen order.
#[must_use]
pub fn categories(questions: &[Question]) -> Vec<CategoryFilter> {
    let mut seen = BTreeSet::new();
    let mut out = vec![CategoryFilter::All];
    for question in questions {
        if seen.insert(question.category().clone()) {
            out.push(CategoryFilter::Only(question.category().clone()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionDraft;

    fn question(id: u64, category: &str, difficulty: Difficulty, prompt: &str, tags: &[&str]) -> Question {
        QuestionDraft {
            id: QuestionId::new(id),
            category: category.into(),
            difficulty,
            prompt: prompt.into(),
            code_sample: None,
            explanation: format!("Explanation for {id}"),
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
            estimated_minutes: 5,
        }
        .validate()
        .unwrap()
    }

    fn sample() -> Vec<Question> {
        vec![
            question(1, "Basics", Difficulty::Easy, "var, let and const", &["variables"]),
            question(2, "Functions", Difficulty::Medium, "Explain closures", &["closures"]),
            question(3, "Async", Difficulty::Hard, "Promise combinators", &["promises"]),
            question(4, "Async", Difficulty::Medium, "async/await", &["await"]),
        ]
    }

    fn ids(found: &[&Question]) -> Vec<u64> {
        found.iter().map(|q| q.id().value()).collect()
    }

    #[test]
    fn default_filter_returns_everything_in_order() {
        let questions = sample();
        let found = QuestionFilter::default().apply(&questions, &BTreeSet::new());
        assert_eq!(ids(&found), vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_is_case_insensitive_over_tags() {
        let questions = sample();
        let filter = QuestionFilter {
            search: "PROMISE".into(),
            ..QuestionFilter::default()
        };
        assert_eq!(ids(&filter.apply(&questions, &BTreeSet::new())), vec![3]);
    }

    #[test]
    fn search_matches_explanation_text() {
        let questions = sample();
        let filter = QuestionFilter {
            search: "explanation for 4".into(),
            ..QuestionFilter::default()
        };
        assert_eq!(ids(&filter.apply(&questions, &BTreeSet::new())), vec![4]);
    }

    #[test]
    fn category_and_difficulty_combine() {
        let questions = sample();
        let filter = QuestionFilter {
            category: CategoryFilter::Only(Category::new("Async").unwrap()),
            difficulty: DifficultyFilter::Only(Difficulty::Medium),
            ..QuestionFilter::default()
        };
        assert_eq!(ids(&filter.apply(&questions, &BTreeSet::new())), vec![4]);
    }

    #[test]
    fn bookmark_filter_uses_bookmarked_set() {
        let questions = sample();
        let bookmarks = BTreeSet::from([QuestionId::new(2), QuestionId::new(4)]);
        let filter = QuestionFilter {
            bookmarked_only: true,
            ..QuestionFilter::default()
        };
        assert_eq!(ids(&filter.apply(&questions, &bookmarks)), vec![2, 4]);
        assert!(filter.apply(&questions, &BTreeSet::new()).is_empty());
    }

    #[test]
    fn no_match_yields_empty() {
        let questions = sample();
        let filter = QuestionFilter {
            search: "generators".into(),
            ..QuestionFilter::default()
        };
        assert!(filter.apply(&questions, &BTreeSet::new()).is_empty());
        assert!(!filter.matches(&questions[0], &BTreeSet::new()));
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let labels: Vec<String> = categories(&sample())
            .iter()
            .map(|c| c.label().to_string())
            .collect();
        assert_eq!(labels, vec!["All", "Basics", "Functions", "Async"]);
    }

    #[test]
    fn unknown_query_category_falls_back_to_wildcard() {
        let questions = sample();
        assert_eq!(CategoryFilter::from_query("DOM", &questions), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_query("Functions", &questions).label(),
            "Functions"
        );
    }

    #[test]
    fn reset_restores_default() {
        let mut filter = QuestionFilter {
            search: "x".into(),
            bookmarked_only: true,
            ..QuestionFilter::default()
        };
        assert!(!filter.is_default());
        filter.reset();
        assert!(filter.is_default());
    }
}
