use std::collections::BTreeSet;
use std::sync::Arc;

use prep_core::filter::{self, CategoryFilter, QuestionFilter};
use prep_core::model::{Question, QuestionId};
use storage::QuestionRepository;
use tracing::debug;

use crate::error::QuestionServiceError;

/// Read-side access to the study questions for the question browser.
#[derive(Clone)]
pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Every study question in catalog order, with the categories they span.
    ///
    /// # Errors
    ///
    /// Returns `QuestionServiceError::Storage` if repository access fails.
    pub async fn catalog(&self) -> Result<QuestionCatalog, QuestionServiceError> {
        let questions = self.questions.list_questions().await?;
        let categories = filter::categories(&questions);
        Ok(QuestionCatalog {
            questions,
            categories,
        })
    }
}

/// Snapshot of the study questions backing one question browser.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionCatalog {
    pub questions: Vec<Question>,
    /// Wildcard followed by the distinct categories in catalog order.
    pub categories: Vec<CategoryFilter>,
}

impl QuestionCatalog {
    /// Resolve a `?category=` value; unknown names become the wildcard.
    #[must_use]
    pub fn resolve_category(&self, raw: &str) -> CategoryFilter {
        let resolved = CategoryFilter::from_query(raw, &self.questions);
        if resolved == CategoryFilter::All && !raw.trim().is_empty() {
            debug!(category = raw, "unknown category in query, showing all");
        }
        resolved
    }

    /// Questions admitted by `filter`, in catalog order.
    #[must_use]
    pub fn filtered(&self, filter: &QuestionFilter, bookmarks: &BTreeSet<QuestionId>) -> Vec<&Question> {
        filter.apply(&self.questions, bookmarks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::InMemoryRepository;

    async fn catalog() -> QuestionCatalog {
        QuestionService::new(Arc::new(InMemoryRepository::builtin().unwrap()))
            .catalog()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn default_filter_returns_whole_catalog() {
        let catalog = catalog().await;
        let filtered = catalog.filtered(&QuestionFilter::default(), &BTreeSet::new());
        assert_eq!(filtered.len(), catalog.questions.len());
        assert_eq!(catalog.categories[0], CategoryFilter::All);
    }

    #[tokio::test]
    async fn resolves_known_and_unknown_categories() {
        let catalog = catalog().await;
        assert_eq!(catalog.resolve_category("Async").label(), "Async");
        assert_eq!(catalog.resolve_category("Generators"), CategoryFilter::All);
        assert_eq!(catalog.resolve_category(""), CategoryFilter::All);
    }
}
