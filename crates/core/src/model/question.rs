use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::tag::{Category, CategoryError, TagError, TagName};

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty: {0}")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseDifficultyError(trimmed.to_string()))
    }
}

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated study question, as written in a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub category: String,
    pub difficulty: Difficulty,
    pub prompt: String,
    pub code_sample: Option<String>,
    pub explanation: String,
    pub tags: Vec<String>,
    pub estimated_minutes: u32,
}

impl QuestionDraft {
    /// Validate the draft into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or explanation is blank, or if the
    /// category or any tag fails validation.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.explanation.trim().is_empty() {
            return Err(QuestionError::EmptyExplanation);
        }
        let category = Category::new(self.category)?;
        let tags = self
            .tags
            .into_iter()
            .map(TagName::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Question {
            id: self.id,
            category,
            difficulty: self.difficulty,
            prompt: self.prompt,
            code_sample: self.code_sample.filter(|code| !code.trim().is_empty()),
            explanation: self.explanation,
            tags,
            estimated_minutes: self.estimated_minutes,
        })
    }
}

/// A browsable interview question with its written explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    category: Category,
    difficulty: Difficulty,
    prompt: String,
    code_sample: Option<String>,
    explanation: String,
    tags: Vec<TagName>,
    estimated_minutes: u32,
}

impl Question {
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
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn tags(&self) -> &[TagName] {
        &self.tags
    }

    #[must_use]
    pub fn estimated_minutes(&self) -> u32 {
        self.estimated_minutes
    }

    /// Case-insensitive substring match over prompt, explanation and tags.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        self.prompt.to_lowercase().contains(needle)
            || self.explanation.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.as_str().to_lowercase().contains(needle))
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question explanation cannot be empty")]
    EmptyExplanation,

    #[error("practice question needs at least one option")]
    NoOptions,

    #[error("practice question option {index} is empty")]
    EmptyOption { index: usize },

    #[error("correct option {index} is out of range for {len} options")]
    CorrectOptionOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error(transparent)]
    Tag(#[from] TagError),
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
