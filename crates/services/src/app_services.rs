use std::sync::Arc;

use storage::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::question_service::QuestionService;
use crate::sessions::PracticeLoopService;
use crate::settings::PracticeSettings;
use crate::topic_service::TopicService;

/// Assembles app-facing services over one content store.
#[derive(Clone)]
pub struct AppServices {
    practice_loop: Arc<PracticeLoopService>,
    questions: Arc<QuestionService>,
    topics: Arc<TopicService>,
}

impl AppServices {
    /// Build services backed by the bundled catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the catalog fails validation.
    pub fn builtin(clock: Clock, settings: PracticeSettings) -> Result<Self, AppServicesError> {
        let storage = Storage::builtin()?;
        Ok(Self::from_storage(&storage, clock, settings))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, settings: PracticeSettings) -> Self {
        let practice_loop = Arc::new(
            PracticeLoopService::new(clock, Arc::clone(&storage.practice)).with_settings(settings),
        );
        let questions = Arc::new(QuestionService::new(Arc::clone(&storage.questions)));
        let topics = Arc::new(TopicService::new(Arc::clone(&storage.topics)));
        Self {
            practice_loop,
            questions,
            topics,
        }
    }

    #[must_use]
    pub fn practice_loop(&self) -> Arc<PracticeLoopService> {
        Arc::clone(&self.practice_loop)
    }

    #[must_use]
    pub fn questions(&self) -> Arc<QuestionService> {
        Arc::clone(&self.questions)
    }

    #[must_use]
    pub fn topics(&self) -> Arc<TopicService> {
        Arc::clone(&self.topics)
    }
}
