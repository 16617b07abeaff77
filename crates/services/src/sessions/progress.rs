/// Aggregated view of practice progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeProgress {
    pub total: usize,
    /// 1-based position of the current question.
    pub position: usize,
    pub answered: usize,
    pub score: u32,
    pub percent: u32,
}
