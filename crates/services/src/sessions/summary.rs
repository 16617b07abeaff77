use chrono::{DateTime, Utc};

use super::service::PracticeSession;

/// Closing remark for a finished practice run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Perfect,
    Great,
    Good,
    KeepLearning,
}

impl Verdict {
    /// `Perfect` only for a full score; then 80% and 60% thresholds.
    #[must_use]
    pub fn from_score(score: u32, total: u32) -> Self {
        let (score, total) = (u64::from(score), u64::from(total));
        if total > 0 && score == total {
            Self::Perfect
        } else if score * 5 >= total * 4 && total > 0 {
            Self::Great
        } else if score * 5 >= total * 3 && total > 0 {
            Self::Good
        } else {
            Self::KeepLearning
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect! You're ready for any JavaScript interview! 🎉",
            Self::Great => "Great job! You have a solid understanding of JavaScript! 👏",
            Self::Good => "Good work! Keep practicing to improve your skills! 💪",
            Self::KeepLearning => "Keep learning! Practice makes perfect! 📚",
        }
    }
}

/// Result of a practice run, taken once the last question is revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSummary {
    score: u32,
    total: u32,
    answered: u32,
    completed_at: DateTime<Utc>,
    verdict: Verdict,
}

impl PracticeSummary {
    #[must_use]
    pub fn from_session(session: &PracticeSession, completed_at: DateTime<Utc>) -> Self {
        let total = u32::try_from(session.question_count()).unwrap_or(u32::MAX);
        let answered = u32::try_from(session.answered_count()).unwrap_or(u32::MAX);
        let score = session.score();
        Self {
            score,
            total,
            answered,
            completed_at,
            verdict: Verdict::from_score(score, total),
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn answered(&self) -> u32 {
        self.answered
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    #[must_use]
    pub fn percent(&self) -> u32 {
        prep_core::model::rounded_percentage(self.score, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Verdict::from_score(5, 5), Verdict::Perfect);
        assert_eq!(Verdict::from_score(4, 5), Verdict::Great);
        assert_eq!(Verdict::from_score(3, 5), Verdict::Good);
        assert_eq!(Verdict::from_score(2, 5), Verdict::KeepLearning);
        assert_eq!(Verdict::from_score(0, 0), Verdict::KeepLearning);
    }

    #[test]
    fn eight_of_ten_is_great_not_perfect() {
        assert_eq!(Verdict::from_score(8, 10), Verdict::Great);
        assert_eq!(Verdict::from_score(7, 10), Verdict::Good);
        assert!(Verdict::Perfect.message().starts_with("Perfect!"));
    }
}
