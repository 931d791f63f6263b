/// Aggregated view of exam progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExamProgress {
    pub total: usize,
    pub answered: usize,
    pub unanswered: usize,
    pub current: usize,
}

impl ExamProgress {
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.total
    }
}
