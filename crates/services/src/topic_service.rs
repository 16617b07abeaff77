use std::sync::Arc;

use prep_core::model::{Topic, rounded_percentage};
use storage::TopicRepository;

use crate::error::TopicServiceError;

/// Aggregate counters across every topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicOverview {
    pub topic_count: usize,
    pub total_questions: u32,
    pub completed_questions: u32,
    /// Topics whose completion percentage is 100.
    pub mastered: usize,
    pub overall_percent: u32,
}

impl TopicOverview {
    #[must_use]
    pub fn from_topics(topics: &[Topic]) -> Self {
        let total_questions = topics.iter().map(Topic::question_count).sum();
        let completed_questions = topics.iter().map(Topic::completed_count).sum();
        let mastered = topics
            .iter()
            .filter(|topic| topic.completion_percentage() == 100)
            .count();
        Self {
            topic_count: topics.len(),
            total_questions,
            completed_questions,
            mastered,
            overall_percent: rounded_percentage(completed_questions, total_questions),
        }
    }
}

#[derive(Clone)]
pub struct TopicService {
    topics: Arc<dyn TopicRepository>,
}

impl TopicService {
    #[must_use]
    pub fn new(topics: Arc<dyn TopicRepository>) -> Self {
        Self { topics }
    }

    /// Topics in catalog order plus their aggregate counters.
    ///
    /// # Errors
    ///
    /// Returns `TopicServiceError::Storage` if repository access fails.
    pub async fn listing(&self) -> Result<TopicListing, TopicServiceError> {
        let topics = self.topics.list_topics().await?;
        let overview = TopicOverview::from_topics(&topics);
        Ok(TopicListing { topics, overview })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicListing {
    pub topics: Vec<Topic>,
    pub overview: TopicOverview,
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::InMemoryRepository;

    #[tokio::test]
    async fn overview_aggregates_builtin_topics() {
        let service = TopicService::new(Arc::new(InMemoryRepository::builtin().unwrap()));
        let listing = service.listing().await.unwrap();
        assert_eq!(listing.topics.len(), 8);
        let overview = listing.overview;
        assert_eq!(overview.topic_count, 8);
        assert_eq!(overview.total_questions, 227);
        assert_eq!(overview.completed_questions, 78);
        assert_eq!(overview.overall_percent, 34);
        assert_eq!(overview.mastered, 0);
    }

    #[test]
    fn empty_overview_is_zero() {
        let overview = TopicOverview::from_topics(&[]);
        assert_eq!(overview.overall_percent, 0);
        assert_eq!(overview.topic_count, 0);
    }
}
