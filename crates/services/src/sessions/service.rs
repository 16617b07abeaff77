use std::fmt;
use std::sync::Arc;

use prep_core::Countdown;
use prep_core::model::{PracticeQuestion, rounded_percentage};
use tracing::{debug, info};

use crate::error::SessionError;
use super::progress::PracticeProgress;

//
// ─── STATES AND OUTCOMES ───────────────────────────────────────────────────────
//

/// Per-question phase of a practice session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PracticePhase {
    /// Waiting for a selection and submission; the countdown is running.
    Answering,
    /// Correctness and explanation are shown; the countdown is stopped.
    Revealed,
}

/// Why the current question left `Answering`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealCause {
    Submitted,
    TimedOut,
}

/// Result of a user-driven transition. Guard violations are no-ops, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored,
}

impl Transition {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Result of one timer tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not answering: nothing is counting down.
    Ignored,
    Counting { remaining_secs: u32 },
    /// The countdown hit zero and the question was revealed.
    TimedOut,
}

/// How an option should be presented for the current question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Neutral,
    Selected,
    Correct,
    Incorrect,
}

/// Colour band for the remaining time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimePressure {
    Relaxed,
    Warning,
    Urgent,
}

impl TimePressure {
    #[must_use]
    pub fn from_remaining(remaining_secs: u32) -> Self {
        if remaining_secs > 20 {
            Self::Relaxed
        } else if remaining_secs > 10 {
            Self::Warning
        } else {
            Self::Urgent
        }
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Timer-gated multiple-choice quiz over a fixed question list.
///
/// Score only moves on the first explicit submission of a question. Timeouts
/// mark the question answered but never score it.
#[derive(Clone, PartialEq, Eq)]
pub struct PracticeSession {
    questions: Arc<[PracticeQuestion]>,
    current: usize,
    selected: Option<usize>,
    phase: PracticePhase,
    reveal_cause: Option<RevealCause>,
    score: u32,
    countdown: Countdown,
    answered: Vec<bool>,
    submitted: Vec<bool>,
}

impl PracticeSession {
    /// # Errors
    ///
    /// Returns `SessionError::Empty` for an empty question list and
    /// `SessionError::InvalidCountdown` for a zero countdown.
    pub fn new(
        questions: impl Into<Arc<[PracticeQuestion]>>,
        countdown_secs: u32,
    ) -> Result<Self, SessionError> {
        let questions = questions.into();
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }
        if countdown_secs == 0 {
            return Err(SessionError::InvalidCountdown(countdown_secs));
        }
        let len = questions.len();
        Ok(Self {
            questions,
            current: 0,
            selected: None,
            phase: PracticePhase::Answering,
            reveal_cause: None,
            score: 0,
            countdown: Countdown::new(countdown_secs),
            answered: vec![false; len],
            submitted: vec![false; len],
        })
    }

    // ─── read-outs ────────────────────────────────────────────────────────────

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn questions(&self) -> &[PracticeQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &PracticeQuestion {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn phase(&self) -> PracticePhase {
        self.phase
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.phase == PracticePhase::Revealed
    }

    #[must_use]
    pub fn reveal_cause(&self) -> Option<RevealCause> {
        self.reveal_cause
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    #[must_use]
    pub fn countdown_secs(&self) -> u32 {
        self.countdown.start_secs()
    }

    #[must_use]
    pub fn time_pressure(&self) -> TimePressure {
        TimePressure::from_remaining(self.remaining_secs())
    }

    #[must_use]
    pub fn answered(&self) -> &[bool] {
        &self.answered
    }

    #[must_use]
    pub fn is_answered(&self, index: usize) -> bool {
        self.answered.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answered.iter().filter(|flag| **flag).count()
    }

    #[must_use]
    pub fn is_first_question(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// The last question has been revealed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_last_question() && self.is_revealed()
    }

    #[must_use]
    pub fn progress(&self) -> PracticeProgress {
        let total = self.question_count();
        let position = self.current + 1;
        PracticeProgress {
            total,
            position,
            answered: self.answered_count(),
            score: self.score,
            percent: rounded_percentage(
                u32::try_from(position).unwrap_or(u32::MAX),
                u32::try_from(total).unwrap_or(u32::MAX),
            ),
        }
    }

    #[must_use]
    pub fn option_state(&self, index: usize) -> OptionState {
        let question = self.current_question();
        let revealed = self.is_revealed();
        if self.selected == Some(index) {
            if !revealed {
                OptionState::Selected
            } else if question.is_correct(index) {
                OptionState::Correct
            } else {
                OptionState::Incorrect
            }
        } else if revealed && question.is_correct(index) {
            OptionState::Correct
        } else {
            OptionState::Neutral
        }
    }

    // ─── transitions ──────────────────────────────────────────────────────────

    /// Record the chosen option. Only while answering, and only for a real option.
    pub fn select_answer(&mut self, index: usize) -> Transition {
        if self.phase != PracticePhase::Answering {
            return self.ignored("select_answer", "question already revealed");
        }
        if index >= self.current_question().option_count() {
            return self.ignored("select_answer", "option out of range");
        }
        self.selected = Some(index);
        Transition::Applied
    }

    /// Reveal the current question, scoring it if this is its first submission
    /// and the selection is correct.
    pub fn submit(&mut self) -> Transition {
        if self.phase != PracticePhase::Answering {
            return self.ignored("submit", "question already revealed");
        }
        let Some(selected) = self.selected else {
            return self.ignored("submit", "no option selected");
        };

        let index = self.current;
        let first_submission = !self.submitted[index];
        let correct = self.current_question().is_correct(selected);
        if first_submission && correct {
            self.score += 1;
        }
        self.submitted[index] = true;
        self.answered[index] = true;
        self.reveal(RevealCause::Submitted);
        info!(
            question = index,
            correct,
            scored = first_submission && correct,
            score = self.score,
            "practice answer submitted"
        );
        Transition::Applied
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != PracticePhase::Answering {
            return TickOutcome::Ignored;
        }
        let remaining_secs = self.countdown.tick();
        if remaining_secs > 0 {
            return TickOutcome::Counting { remaining_secs };
        }
        self.answered[self.current] = true;
        self.reveal(RevealCause::TimedOut);
        info!(question = self.current, "practice question timed out");
        TickOutcome::TimedOut
    }

    /// Move to the next question. Only after reveal and never past the last question.
    pub fn next(&mut self) -> Transition {
        if self.phase != PracticePhase::Revealed {
            return self.ignored("next", "question not revealed");
        }
        if self.is_last_question() {
            return self.ignored("next", "already on last question");
        }
        self.current += 1;
        self.reset_question_ui();
        Transition::Applied
    }

    /// Move to the previous question, keeping recorded answers and score.
    pub fn previous(&mut self) -> Transition {
        if self.current == 0 {
            return self.ignored("previous", "already on first question");
        }
        self.current -= 1;
        self.reset_question_ui();
        Transition::Applied
    }

    /// Jump to any question, keeping recorded answers and score.
    pub fn jump_to(&mut self, index: usize) -> Transition {
        if index >= self.questions.len() {
            return self.ignored("jump_to", "question out of range");
        }
        self.current = index;
        self.reset_question_ui();
        Transition::Applied
    }

    /// Start over from the first question with a clean slate.
    pub fn reset(&mut self) {
        self.current = 0;
        self.score = 0;
        self.answered.fill(false);
        self.submitted.fill(false);
        self.reset_question_ui();
        info!(questions = self.questions.len(), "practice session reset");
    }

    fn reveal(&mut self, cause: RevealCause) {
        self.phase = PracticePhase::Revealed;
        self.reveal_cause = Some(cause);
    }

    fn reset_question_ui(&mut self) {
        self.selected = None;
        self.phase = PracticePhase::Answering;
        self.reveal_cause = None;
        self.countdown.restart();
    }

    fn ignored(&self, transition: &'static str, reason: &'static str) -> Transition {
        debug!(transition, reason, question = self.current, "practice transition ignored");
        Transition::Ignored
    }
}

impl fmt::Debug for PracticeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticeSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("selected", &self.selected)
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("remaining_secs", &self.countdown.remaining_secs())
            .field("answered", &self.answered)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
