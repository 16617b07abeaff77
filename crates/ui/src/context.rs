use std::sync::Arc;

use services::{PracticeLoopService, QuestionService, TopicService};

/// Services the views need, supplied by the composition root (`crates/app`).
pub trait UiApp: Send + Sync {
    fn practice_loop(&self) -> Arc<PracticeLoopService>;
    fn questions(&self) -> Arc<QuestionService>;
    fn topics(&self) -> Arc<TopicService>;
}

#[derive(Clone)]
pub struct AppContext {
    practice_loop: Arc<PracticeLoopService>,
    questions: Arc<QuestionService>,
    topics: Arc<TopicService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            practice_loop: app.practice_loop(),
            questions: app.questions(),
            topics: app.topics(),
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

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
