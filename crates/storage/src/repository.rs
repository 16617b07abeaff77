use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

use prep_core::model::{PracticeQuestion, Question, QuestionError, QuestionId, Topic, TopicError, TopicSlug};

use crate::catalog;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("duplicate {kind} id in catalog: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("invalid catalog question: {0}")]
    InvalidQuestion(#[from] QuestionError),

    #[error("invalid catalog topic: {0}")]
    InvalidTopic(#[from] TopicError),
}

/// Read access to study questions, in catalog order.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the questions cannot be read.
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no question has this id.
    async fn get_question(&self, id: QuestionId) -> Result<Question, StorageError>;
}

/// Read access to the multiple-choice practice set, in catalog order.
#[async_trait]
pub trait PracticeRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the practice set cannot be read.
    async fn list_practice_questions(&self) -> Result<Vec<PracticeQuestion>, StorageError>;
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the topics cannot be read.
    async fn list_topics(&self) -> Result<Vec<Topic>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no topic has this slug.
    async fn get_topic(&self, slug: &TopicSlug) -> Result<Topic, StorageError>;
}

/// Immutable, loaded-once content store.
///
/// Cloning is cheap; every clone shares the same records.
#[derive(Clone, Debug)]
pub struct InMemoryRepository {
    questions: Arc<[Question]>,
    practice: Arc<[PracticeQuestion]>,
    topics: Arc<[Topic]>,
}

impl InMemoryRepository {
    /// Build a content store from validated records.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DuplicateId` if two records in the same set share an id.
    pub fn new(
        questions: Vec<Question>,
        practice: Vec<PracticeQuestion>,
        topics: Vec<Topic>,
    ) -> Result<Self, StorageError> {
        ensure_unique("question", questions.iter().map(|q| q.id().to_string()))?;
        ensure_unique("practice question", practice.iter().map(|q| q.id().to_string()))?;
        ensure_unique("topic", topics.iter().map(|t| t.slug().to_string()))?;

        Ok(Self {
            questions: questions.into(),
            practice: practice.into(),
            topics: topics.into(),
        })
    }

    /// The bundled interview-prep catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if any bundled record fails validation.
    pub fn builtin() -> Result<Self, StorageError> {
        Self::new(
            catalog::study_questions()?,
            catalog::practice_questions()?,
            catalog::topics()?,
        )
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            questions: Arc::from(Vec::new()),
            practice: Arc::from(Vec::new()),
            topics: Arc::from(Vec::new()),
        }
    }
}

fn ensure_unique(
    kind: &'static str,
    ids: impl Iterator<Item = String>,
) -> Result<(), StorageError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id.clone()) {
            return Err(StorageError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        Ok(self.questions.to_vec())
    }

    async fn get_question(&self, id: QuestionId) -> Result<Question, StorageError> {
        self.questions
            .iter()
            .find(|question| question.id() == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}

#[async_trait]
impl PracticeRepository for InMemoryRepository {
    async fn list_practice_questions(&self) -> Result<Vec<PracticeQuestion>, StorageError> {
        Ok(self.practice.to_vec())
    }
}

#[async_trait]
impl TopicRepository for InMemoryRepository {
    async fn list_topics(&self) -> Result<Vec<Topic>, StorageError> {
        Ok(self.topics.to_vec())
    }

    async fn get_topic(&self, slug: &TopicSlug) -> Result<Topic, StorageError> {
        self.topics
            .iter()
            .find(|topic| topic.slug() == slug)
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}

/// Aggregates the content repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
    pub practice: Arc<dyn PracticeRepository>,
    pub topics: Arc<dyn TopicRepository>,
}

impl Storage {
    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let questions: Arc<dyn QuestionRepository> = Arc::new(repo.clone());
        let practice: Arc<dyn PracticeRepository> = Arc::new(repo.clone());
        let topics: Arc<dyn TopicRepository> = Arc::new(repo);
        Self {
            questions,
            practice,
            topics,
        }
    }

    /// Storage backed by the bundled catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the bundled catalog is invalid.
    pub fn builtin() -> Result<Self, StorageError> {
        InMemoryRepository::builtin().map(Self::from_repository)
    }
}
