use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::tag::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TopicTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl TopicTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for TopicTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URL-safe topic identifier (lowercase ascii letters, digits and `-`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TopicSlug(String);

impl TopicSlug {
    /// Create a validated slug.
    ///
    /// # Errors
    ///
    /// Returns `SlugError::Empty` for blank input and `SlugError::InvalidChar`
    /// for anything outside `[a-z0-9-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, SlugError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SlugError::Empty);
        }
        if let Some(ch) = trimmed
            .chars()
            .find(|ch| !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == '-'))
        {
            return Err(SlugError::InvalidChar(ch));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SlugError {
    #[error("topic slug cannot be empty")]
    Empty,
    #[error("topic slug contains invalid character {0:?}")]
    InvalidChar(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDraft {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub tier: TopicTier,
    pub estimated_time: String,
    pub concepts: Vec<String>,
    pub question_count: u32,
    pub completed_count: u32,
}

impl TopicDraft {
    /// # Errors
    ///
    /// Returns `TopicError` when the slug or title is invalid, or the completed
    /// counter exceeds the question counter.
    pub fn validate(self) -> Result<Topic, TopicError> {
        let slug = TopicSlug::new(self.slug)?;
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(TopicError::EmptyTitle);
        }
        if self.completed_count > self.question_count {
            return Err(TopicError::CompletedExceedsTotal {
                completed: self.completed_count,
                total: self.question_count,
            });
        }
        Ok(Topic {
            slug,
            title,
            description: self.description,
            tier: self.tier,
            estimated_time: self.estimated_time,
            concepts: self.concepts,
            question_count: self.question_count,
            completed_count: self.completed_count,
        })
    }
}

/// A study topic card. Counters are static sample data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    slug: TopicSlug,
    title: String,
    description: String,
    tier: TopicTier,
    estimated_time: String,
    concepts: Vec<String>,
    question_count: u32,
    completed_count: u32,
}

impl Topic {
    #[must_use]
    pub fn slug(&self) -> &TopicSlug {
        &self.slug
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn tier(&self) -> TopicTier {
        self.tier
    }

    #[must_use]
    pub fn estimated_time(&self) -> &str {
        &self.estimated_time
    }

    #[must_use]
    pub fn concepts(&self) -> &[String] {
        &self.concepts
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    #[must_use]
    pub fn completed_count(&self) -> u32 {
        self.completed_count
    }

    #[must_use]
    pub fn completion_percentage(&self) -> u32 {
        rounded_percentage(self.completed_count, self.question_count)
    }

    /// Category handed to the question browser: the first word of the title.
    #[must_use]
    pub fn question_category(&self) -> Option<Category> {
        self.title
            .split_whitespace()
            .next()
            .and_then(|word| Category::new(word).ok())
    }
}

/// `round(part / whole * 100)`, with `0` for an empty whole.
#[must_use]
pub fn rounded_percentage(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = u64::from(part) * 100;
    let whole = u64::from(whole);
    let rounded = (part + whole / 2) / whole;
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error(transparent)]
    Slug(#[from] SlugError),
    #[error("topic title cannot be empty")]
    EmptyTitle,
    #[error("completed count ({completed}) exceeds question count ({total})")]
    CompletedExceedsTotal { completed: u32, total: u32 },
}
