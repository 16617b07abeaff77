use crate::model::ids::QuestionId;
use crate::model::question::{Difficulty, QuestionError};
use crate::model::tag::Category;

/// Unvalidated multiple-choice question used by practice sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeQuestionDraft {
    pub id: QuestionId,
    pub category: String,
    pub difficulty: Difficulty,
    pub prompt: String,
    pub code_sample: Option<String>,
    pub options: Vec<String>,
    pub correct_option: usize,
    pub explanation: String,
}

impl PracticeQuestionDraft {
    /// Validate the draft into an immutable `PracticeQuestion`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` for a blank prompt or explanation, an empty
    /// option list, a blank option, or a correct index outside the options.
    pub fn validate(self) -> Result<PracticeQuestion, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.explanation.trim().is_empty() {
            return Err(QuestionError::EmptyExplanation);
        }
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if let Some(index) = self.options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }
        if self.correct_option >= self.options.len() {
            return Err(QuestionError::CorrectOptionOutOfRange {
                index: self.correct_option,
                len: self.options.len(),
            });
        }

        Ok(PracticeQuestion {
            id: self.id,
            category: Category::new(self.category)?,
            difficulty: self.difficulty,
            prompt: self.prompt,
            code_sample: self.code_sample.filter(|code| !code.trim().is_empty()),
            options: self.options.into_iter().map(|opt| opt.trim().to_string()).collect(),
            correct_option: self.correct_option,
            explanation: self.explanation,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeQuestion {
    id: QuestionId,
    category: Category,
    difficulty: Difficulty,
    prompt: String,
    code_sample: Option<String>,
    options: Vec<String>,
    correct_option: usize,
    explanation: String,
}

impl PracticeQuestion {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn code_sample(&self) -> Option<&str> {
        self.code_sample.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_option
    }
}

/// Letter label for an option position: 0 → `A`, 1 → `B`, ...
///
/// Positions past `Z` wrap around.
#[must_use]
pub fn option_letter(index: usize) -> char {
    const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    char::from(LETTERS[index % LETTERS.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PracticeQuestionDraft {
        PracticeQuestionDraft {
            id: QuestionId::new(1),
            category: "Basics".into(),
            difficulty: Difficulty::Easy,
            prompt: "What will be the output of the following code?".into(),
            code_sample: Some("console.log(typeof null);".into()),
            options: vec!["null".into(), "undefined ".into(), "object".into()],
            correct_option: 2,
            explanation: "typeof null is \"object\".".into(),
        }
    }

    #[test]
    fn valid_draft_trims_options() {
        let question = draft().validate().unwrap();
        assert_eq!(question.options()[1], "undefined");
        assert!(question.is_correct(2));
        assert!(!question.is_correct(0));
    }

    #[test]
    fn empty_options_are_rejected() {
        let mut draft = draft();
        draft.options.clear();
        assert_eq!(draft.validate().unwrap_err(), QuestionError::NoOptions);
    }

    #[test]
    fn correct_option_must_be_in_range() {
        let mut draft = draft();
        draft.correct_option = 3;
        assert_eq!(
            draft.validate().unwrap_err(),
            QuestionError::CorrectOptionOutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn blank_option_is_rejected() {
        let mut draft = draft();
        draft.options[0] = " ".into();
        assert_eq!(
            draft.validate().unwrap_err(),
            QuestionError::EmptyOption { index: 0 }
        );
    }

    #[test]
    fn option_letters() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
        assert_eq!(option_letter(26), 'A');
    }
}
