use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use exam_core::model::{ExamQuestion, Question};
use storage::QuestionBank;

/// Draws exam questions from a bank and scrambles their options.
///
/// Owns its PRNG so tests can seed it; there is no cryptographic requirement.
#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: StdRng,
}

impl Randomizer {
    /// Seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sequence for tests.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick `min(count, bank.len())` distinct questions in random order.
    ///
    /// Asking for more than the bank holds returns the whole bank shuffled.
    pub fn select_questions(&mut self, bank: &QuestionBank, count: usize) -> Vec<Question> {
        let mut pool = bank.questions().to_vec();
        pool.as_mut_slice().shuffle(&mut self.rng);
        pool.truncate(count);
        pool
    }

    /// Permute the options of `question`, tracking where the correct one lands.
    pub fn scramble(&mut self, question: &Question) -> ExamQuestion {
        ExamQuestion::arranged(question, |slots| slots.shuffle(&mut self.rng))
    }

    /// Select and scramble in one pass.
    pub fn draw_exam(&mut self, bank: &QuestionBank, count: usize) -> Vec<ExamQuestion> {
        self.select_questions(bank, count)
            .iter()
            .map(|question| self.scramble(question))
            .collect()
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::model::{QuestionDraft, QuestionId};
    use std::collections::HashSet;

    fn question(id: u32, options: &[&str], correct_index: usize) -> Question {
        QuestionDraft {
            text: format!("Question {id}"),
            options: options.iter().map(|o| (*o).to_string()).collect(),
            correct_index,
            explanation: None,
        }
        .validate(QuestionId::new(id))
        .unwrap()
    }

    fn bank(size: u32) -> QuestionBank {
        QuestionBank::new(
            (0..size)
                .map(|id| question(id, &["a", "b", "c", "d"], 0))
                .collect(),
        )
    }

    #[test]
    fn selection_is_distinct_and_sized() {
        let bank = bank(10);
        let mut randomizer = Randomizer::with_seed(7);
        for count in 0..=10 {
            let picked = randomizer.select_questions(&bank, count);
            assert_eq!(picked.len(), count);
            let ids: HashSet<_> = picked.iter().map(Question::id).collect();
            assert_eq!(ids.len(), count);
            assert!(picked.iter().all(|q| bank.get(q.id()) == Some(q)));
        }
    }

    #[test]
    fn oversized_request_returns_whole_bank() {
        let bank = bank(4);
        let picked = Randomizer::with_seed(1).select_questions(&bank, 40);
        assert_eq!(picked.len(), 4);
    }

    #[test]
    fn empty_bank_yields_nothing() {
        let picked = Randomizer::with_seed(1).select_questions(&QuestionBank::default(), 5);
        assert!(picked.is_empty());
    }

    #[test]
    fn scramble_keeps_options_and_tracks_correct_answer() {
        let original = question(3, &["red", "green", "blue", "cyan", "pink"], 2);
        let mut randomizer = Randomizer::with_seed(42);
        for _ in 0..50 {
            let scrambled = randomizer.scramble(&original);
            let mut before: Vec<_> = original.options().to_vec();
            let mut after: Vec<_> = scrambled.options().to_vec();
            before.sort();
            after.sort();
            assert_eq!(before, after);
            assert_eq!(
                scrambled.options()[scrambled.correct_index()],
                original.correct_option()
            );
            assert_eq!(scrambled.source(), original.id());
        }
        // input untouched
        assert_eq!(original.correct_index(), 2);
        assert_eq!(original.options()[0], "red");
    }

    #[test]
    fn scramble_reorders_options() {
        let original = question(0, &["a", "b", "c", "d", "e", "f"], 0);
        let mut randomizer = Randomizer::with_seed(3);
        let reordered = (0..20)
            .map(|_| randomizer.scramble(&original))
            .filter(|scrambled| scrambled.options() != original.options())
            .count();
        assert!(reordered > 0);
    }

    #[test]
    fn same_seed_same_exam() {
        let bank = bank(10);
        let first = Randomizer::with_seed(9).draw_exam(&bank, 5);
        let second = Randomizer::with_seed(9).draw_exam(&bank, 5);
        assert_eq!(first, second);
    }
}
