use prep_core::model::option_letter;
use services::{
    OptionState, PracticeLoopService, PracticeSession, PracticeSummary, SessionError, TickOutcome,
    TimePressure, Transition,
};
use tracing::warn;

use crate::views::ViewError;
use crate::vm::question_vm::difficulty_class;
use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PracticeIntent {
    Select(usize),
    Submit,
    Next,
    Previous,
    Jump(usize),
    StartOver,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionItemVm {
    pub index: usize,
    pub label: String,
    pub class: &'static str,
    pub marker: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavDotVm {
    pub index: usize,
    pub number: usize,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeSummaryVm {
    pub score_label: String,
    pub percent: u32,
    pub message: &'static str,
    pub completed_at: String,
}

impl From<&PracticeSummary> for PracticeSummaryVm {
    fn from(summary: &PracticeSummary) -> Self {
        Self {
            score_label: format!("Your Score: {} out of {}", summary.score(), summary.total()),
            percent: summary.percent(),
            message: summary.verdict().message(),
            completed_at: format_datetime(summary.completed_at()),
        }
    }
}

/// Practice session plus the summary taken when it completes.
#[derive(Clone, Debug, PartialEq)]
pub struct PracticeVm {
    session: PracticeSession,
    summary: Option<PracticeSummaryVm>,
    /// Bumped each time the current question gets a fresh countdown.
    generation: u64,
}

impl PracticeVm {
    #[must_use]
    pub fn new(session: PracticeSession) -> Self {
        Self {
            session,
            summary: None,
            generation: 0,
        }
    }

    #[must_use]
    pub fn session(&self) -> &PracticeSession {
        &self.session
    }

    #[must_use]
    pub fn summary(&self) -> Option<&PracticeSummaryVm> {
        self.summary.as_ref()
    }

    /// Changes whenever the countdown restarts, so a pending tick can be dropped.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_answering(&self) -> bool {
        !self.session.is_revealed()
    }

    pub fn apply(&mut self, practice_loop: &PracticeLoopService, intent: PracticeIntent) -> Transition {
        let outcome = match intent {
            PracticeIntent::Select(index) => self.session.select_answer(index),
            PracticeIntent::Submit => self.session.submit(),
            PracticeIntent::Next => self.session.next(),
            PracticeIntent::Previous => self.session.previous(),
            PracticeIntent::Jump(index) => self.session.jump_to(index),
            PracticeIntent::StartOver => {
                self.session.reset();
                Transition::Applied
            }
        };
        let rearms = matches!(
            intent,
            PracticeIntent::Next
                | PracticeIntent::Previous
                | PracticeIntent::Jump(_)
                | PracticeIntent::StartOver
        );
        if rearms && outcome.is_applied() {
            self.generation = self.generation.wrapping_add(1);
        }
        self.refresh_summary(practice_loop);
        outcome
    }

    pub fn tick(&mut self, practice_loop: &PracticeLoopService) -> TickOutcome {
        let outcome = self.session.tick();
        if outcome == TickOutcome::TimedOut {
            self.refresh_summary(practice_loop);
        }
        outcome
    }

    fn refresh_summary(&mut self, practice_loop: &PracticeLoopService) {
        if !self.session.is_complete() {
            self.summary = None;
        } else if self.summary.is_none() {
            self.summary = practice_loop
                .summarize(&self.session)
                .as_ref()
                .map(PracticeSummaryVm::from);
        }
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.session.score(), self.session.question_count())
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        format!("{}s", self.session.remaining_secs())
    }

    #[must_use]
    pub fn timer_class(&self) -> &'static str {
        match self.session.time_pressure() {
            TimePressure::Relaxed => "timer timer--relaxed",
            TimePressure::Warning => "timer timer--warning",
            TimePressure::Urgent => "timer timer--urgent",
        }
    }

    #[must_use]
    pub fn position_label(&self) -> String {
        let progress = self.session.progress();
        format!("Question {} of {}", progress.position, progress.total)
    }

    #[must_use]
    pub fn answered_label(&self) -> String {
        format!("{} answered", self.session.answered_count())
    }

    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        self.session.progress().percent
    }

    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.session.is_answered(self.session.current_index()) {
            "Answered"
        } else {
            "Not answered"
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        self.session.current_question().category().as_str()
    }

    #[must_use]
    pub fn difficulty_label(&self) -> &'static str {
        self.session.current_question().difficulty().as_str()
    }

    #[must_use]
    pub fn difficulty_class(&self) -> &'static str {
        difficulty_class(self.session.current_question().difficulty())
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.session.current_question().prompt()
    }

    #[must_use]
    pub fn code_sample(&self) -> Option<&str> {
        self.session.current_question().code_sample()
    }

    /// Only once the current question is revealed.
    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.session
            .is_revealed()
            .then(|| self.session.current_question().explanation())
    }

    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.session.reveal_cause() == Some(services::RevealCause::TimedOut)
    }

    #[must_use]
    pub fn options(&self) -> Vec<OptionItemVm> {
        let question = self.session.current_question();
        question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let (class, marker) = match self.session.option_state(index) {
                    OptionState::Neutral => ("option", None),
                    OptionState::Selected => ("option option--selected", None),
                    OptionState::Correct => ("option option--correct", Some("✓")),
                    OptionState::Incorrect => ("option option--incorrect", Some("✗")),
                };
                OptionItemVm {
                    index,
                    label: format!("{}. {text}", option_letter(index)),
                    class,
                    marker,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn nav_dots(&self) -> Vec<NavDotVm> {
        (0..self.session.question_count())
            .map(|index| {
                let class = if index == self.session.current_index() {
                    "nav-dot nav-dot--current"
                } else if self.session.is_answered(index) {
                    "nav-dot nav-dot--answered"
                } else {
                    "nav-dot"
                };
                NavDotVm {
                    index,
                    number: index + 1,
                    class,
                }
            })
            .collect()
    }
}

/// # Errors
///
/// Returns `ViewError::EmptySession` when no practice questions exist.
/// Returns `ViewError::Unknown` for other failures.
pub async fn start_practice(practice_loop: &PracticeLoopService) -> Result<PracticeVm, ViewError> {
    match practice_loop.start_session().await {
        Ok(session) => Ok(PracticeVm::new(session)),
        Err(SessionError::Empty) => Err(ViewError::EmptySession),
        Err(err) => {
            warn!(error = %err, "failed to start practice session");
            Err(ViewError::Unknown)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use prep_core::time::fixed_clock;
    use services::PracticeSettings;
    use storage::InMemoryRepository;

    async fn started(countdown_secs: u32) -> (PracticeLoopService, PracticeVm) {
        let practice_loop = PracticeLoopService::new(
            fixed_clock(),
            Arc::new(InMemoryRepository::builtin().unwrap()),
        )
        .with_settings(PracticeSettings::new(countdown_secs, false).unwrap());
        let vm = start_practice(&practice_loop).await.unwrap();
        (practice_loop, vm)
    }

    #[tokio::test]
    async fn options_are_lettered_and_marked_after_submit() {
        let (practice_loop, mut vm) = started(30).await;
        let labels: Vec<String> = vm.options().into_iter().map(|o| o.label).collect();
        assert!(labels[0].starts_with("A. "));
        assert!(labels[3].starts_with("D. "));

        let correct = vm.session().current_question().correct_option();
        let wrong = (correct + 1) % vm.session().current_question().option_count();
        vm.apply(&practice_loop, PracticeIntent::Select(wrong));
        assert_eq!(vm.options()[wrong].class, "option option--selected");
        vm.apply(&practice_loop, PracticeIntent::Submit);

        let options = vm.options();
        assert_eq!(options[wrong].marker, Some("✗"));
        assert_eq!(options[correct].marker, Some("✓"));
        assert!(vm.explanation().is_some());
        assert_eq!(vm.status_label(), "Answered");
    }

    #[tokio::test]
    async fn generation_moves_only_when_the_countdown_restarts() {
        let (practice_loop, mut vm) = started(30).await;
        assert_eq!(vm.generation(), 0);

        vm.apply(&practice_loop, PracticeIntent::Select(0));
        vm.tick(&practice_loop);
        assert_eq!(vm.generation(), 0);

        vm.apply(&practice_loop, PracticeIntent::Next);
        assert_eq!(vm.generation(), 0, "ignored advance keeps the countdown");

        vm.apply(&practice_loop, PracticeIntent::Submit);
        assert_eq!(vm.generation(), 0);
        vm.apply(&practice_loop, PracticeIntent::Next);
        assert_eq!(vm.generation(), 1);

        vm.apply(&practice_loop, PracticeIntent::Previous);
        vm.apply(&practice_loop, PracticeIntent::Jump(2));
        vm.apply(&practice_loop, PracticeIntent::StartOver);
        assert_eq!(vm.generation(), 4);

        vm.apply(&practice_loop, PracticeIntent::Jump(99));
        assert_eq!(vm.generation(), 4);
    }

    #[tokio::test]
    async fn summary_percent_is_shown_with_score() {
        let (practice_loop, mut vm) = started(30).await;
        let count = vm.session().question_count();
        for index in 0..count {
            let correct = vm.session().current_question().correct_option();
            vm.apply(&practice_loop, PracticeIntent::Select(correct));
            vm.apply(&practice_loop, PracticeIntent::Submit);
            if index + 1 < count {
                vm.apply(&practice_loop, PracticeIntent::Next);
            }
        }
        let summary = vm.summary().unwrap();
        assert_eq!(summary.percent, 100);
        assert_eq!(summary.score_label, "Your Score: 5 out of 5");
    }

    #[tokio::test]
    async fn timer_class_follows_remaining_time() {
        let (practice_loop, mut vm) = started(21).await;
        assert_eq!(vm.timer_class(), "timer timer--relaxed");
        vm.tick(&practice_loop);
        assert_eq!(vm.timer_label(), "20s");
        assert_eq!(vm.timer_class(), "timer timer--warning");
        for _ in 0..10 {
            vm.tick(&practice_loop);
        }
        assert_eq!(vm.timer_class(), "timer timer--urgent");
    }

    #[tokio::test]
    async fn summary_appears_on_last_timeout_and_clears_on_start_over() {
        let (practice_loop, mut vm) = started(1).await;
        let last = vm.session().question_count() - 1;
        vm.apply(&practice_loop, PracticeIntent::Jump(last));
        assert!(vm.summary().is_none());
        assert_eq!(vm.tick(&practice_loop), TickOutcome::TimedOut);

        let summary = vm.summary().unwrap();
        assert_eq!(summary.score_label, "Your Score: 0 out of 5");
        assert!(vm.timed_out());

        vm.apply(&practice_loop, PracticeIntent::StartOver);
        assert!(vm.summary().is_none());
        assert_eq!(vm.nav_dots()[0].class, "nav-dot nav-dot--current");
    }
}
