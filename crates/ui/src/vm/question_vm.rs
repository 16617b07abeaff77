use prep_core::model::{Difficulty, Question, QuestionId};
use services::StudyProgress;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub id: QuestionId,
    pub category: String,
    pub difficulty_label: &'static str,
    pub difficulty_class: &'static str,
    pub estimated_label: String,
    pub prompt: String,
    pub tags: Vec<String>,
    pub explanation: String,
    pub code_sample: Option<String>,
    pub bookmarked: bool,
    pub completed: bool,
}

#[must_use]
pub fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "badge badge--easy",
        Difficulty::Medium => "badge badge--medium",
        Difficulty::Hard => "badge badge--hard",
    }
}

#[must_use]
pub fn map_question_card(question: &Question, progress: &StudyProgress) -> QuestionCardVm {
    QuestionCardVm {
        id: question.id(),
        category: question.category().as_str().to_string(),
        difficulty_label: question.difficulty().as_str(),
        difficulty_class: difficulty_class(question.difficulty()),
        estimated_label: format!("{} min", question.estimated_minutes()),
        prompt: question.prompt().to_string(),
        tags: question
            .tags()
            .iter()
            .map(|tag| format!("#{}", tag.as_str()))
            .collect(),
        explanation: question.explanation().to_string(),
        code_sample: question.code_sample().map(str::to_string),
        bookmarked: progress.is_bookmarked(question.id()),
        completed: progress.is_completed(question.id()),
    }
}

#[must_use]
pub fn map_question_cards<'a>(
    questions: impl IntoIterator<Item = &'a Question>,
    progress: &StudyProgress,
) -> Vec<QuestionCardVm> {
    questions
        .into_iter()
        .map(|question| map_question_card(question, progress))
        .collect()
}
