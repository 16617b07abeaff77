use std::collections::BTreeSet;

use prep_core::model::{QuestionId, rounded_percentage};

/// Bookmarks and completion marks for the question browser. Lives only as
/// long as the view that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyProgress {
    bookmarked: BTreeSet<QuestionId>,
    completed: BTreeSet<QuestionId>,
}

impl StudyProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the bookmark; returns whether the question is now bookmarked.
    pub fn toggle_bookmark(&mut self, id: QuestionId) -> bool {
        toggle(&mut self.bookmarked, id)
    }

    /// Flip the completion mark; returns whether the question is now completed.
    pub fn toggle_completed(&mut self, id: QuestionId) -> bool {
        toggle(&mut self.completed, id)
    }

    #[must_use]
    pub fn is_bookmarked(&self, id: QuestionId) -> bool {
        self.bookmarked.contains(&id)
    }

    #[must_use]
    pub fn is_completed(&self, id: QuestionId) -> bool {
        self.completed.contains(&id)
    }

    #[must_use]
    pub fn bookmarked(&self) -> &BTreeSet<QuestionId> {
        &self.bookmarked
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Rounded percentage of `total` questions marked completed.
    #[must_use]
    pub fn completion_rate(&self, total: usize) -> u32 {
        let done = u32::try_from(self.completed.len()).unwrap_or(u32::MAX);
        rounded_percentage(done, u32::try_from(total).unwrap_or(u32::MAX))
    }
}

fn toggle(set: &mut BTreeSet<QuestionId>, id: QuestionId) -> bool {
    if set.remove(&id) {
        false
    } else {
        set.insert(id);
        true
    }
}
