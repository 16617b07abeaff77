mod ids;
mod practice;
mod question;
mod tag;
mod topic;

pub use ids::{ParseIdError, QuestionId};
pub use practice::{PracticeQuestion, PracticeQuestionDraft, option_letter};
pub use question::{Difficulty, ParseDifficultyError, Question, QuestionDraft, QuestionError};
pub use tag::{Category, CategoryError, TagError, TagName};
pub use topic::{SlugError, Topic, TopicDraft, TopicError, TopicSlug, TopicTier, rounded_percentage};
