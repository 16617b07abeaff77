use std::sync::Arc;

use rand::rng;
use rand::seq::SliceRandom;
use storage::PracticeRepository;
use tracing::info;

use crate::Clock;
use crate::error::SessionError;
use crate::settings::PracticeSettings;
use super::service::PracticeSession;
use super::summary::PracticeSummary;

/// Orchestrates practice session start and completion.
#[derive(Clone)]
pub struct PracticeLoopService {
    clock: Clock,
    practice: Arc<dyn PracticeRepository>,
    settings: PracticeSettings,
}

impl PracticeLoopService {
    #[must_use]
    pub fn new(clock: Clock, practice: Arc<dyn PracticeRepository>) -> Self {
        Self {
            clock,
            practice,
            settings: PracticeSettings::default(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: PracticeSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn settings(&self) -> PracticeSettings {
        self.settings
    }

    /// Start a new practice run over the whole practice set.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` when the practice set is empty, or
    /// `SessionError::Storage` if it cannot be read.
    pub async fn start_session(&self) -> Result<PracticeSession, SessionError> {
        let mut questions = self.practice.list_practice_questions().await?;
        if self.settings.shuffle() {
            questions.as_mut_slice().shuffle(&mut rng());
        }
        let session = PracticeSession::new(questions, self.settings.countdown_secs())?;
        info!(
            questions = session.question_count(),
            countdown_secs = session.countdown_secs(),
            shuffled = self.settings.shuffle(),
            "practice session started"
        );
        Ok(session)
    }

    /// Summary of a finished run, or `None` while the last question is unrevealed.
    #[must_use]
    pub fn summarize(&self, session: &PracticeSession) -> Option<PracticeSummary> {
        if !session.is_complete() {
            return None;
        }
        let summary = PracticeSummary::from_session(session, self.clock.now());
        info!(
            score = summary.score(),
            total = summary.total(),
            verdict = ?summary.verdict(),
            "practice session complete"
        );
        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::time::fixed_clock;
    use storage::InMemoryRepository;

    fn service(settings: PracticeSettings) -> PracticeLoopService {
        let repo = InMemoryRepository::builtin().unwrap();
        PracticeLoopService::new(fixed_clock(), Arc::new(repo)).with_settings(settings)
    }

    #[tokio::test]
    async fn starts_in_catalog_order_with_configured_countdown() {
        let loop_service = service(PracticeSettings::new(12, false).unwrap());
        let session = loop_service.start_session().await.unwrap();
        assert_eq!(session.question_count(), 5);
        assert_eq!(session.remaining_secs(), 12);
        assert_eq!(session.current_question().id().value(), 1);
    }

    #[tokio::test]
    async fn shuffled_session_keeps_every_question() {
        let loop_service = service(PracticeSettings::new(30, true).unwrap());
        let session = loop_service.start_session().await.unwrap();
        let mut ids: Vec<u64> = session.questions().iter().map(|q| q.id().value()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn empty_practice_set_is_rejected() {
        let loop_service = PracticeLoopService::new(
            fixed_clock(),
            Arc::new(InMemoryRepository::empty()),
        );
        let err = loop_service.start_session().await.unwrap_err();
        assert!(matches!(err, SessionError::Empty));
    }

    #[tokio::test]
    async fn summary_only_after_last_reveal() {
        let loop_service = service(PracticeSettings::default());
        let mut session = loop_service.start_session().await.unwrap();
        assert!(loop_service.summarize(&session).is_none());

        session.jump_to(session.question_count() - 1);
        let correct = session.current_question().correct_option();
        session.select_answer(correct);
        session.submit();

        let summary = loop_service.summarize(&session).unwrap();
        assert_eq!(summary.score(), 1);
        assert_eq!(summary.total(), 5);
        assert_eq!(summary.completed_at(), prep_core::time::fixed_now());
    }
}
