//! Single-pass quiz over a shuffled question bank.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::bank::Question;

/// Feedback for one answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub chosen: usize,
    pub correct: bool,
    pub correct_index: usize,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Vec<Question>,
    order: Vec<Question>,
    position: usize,
    score: usize,
    /// Set once the current question has been answered.
    locked: bool,
}

impl QuizSession {
    /// Create a session and shuffle the bank into a first run.
    pub fn new<R: Rng + ?Sized>(bank: Vec<Question>, rng: &mut R) -> Self {
        let mut session = Self {
            bank,
            order: Vec::new(),
            position: 0,
            score: 0,
            locked: false,
        };
        session.restart(rng);
        session
    }

    /// Reshuffle the full bank and zero score and position.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut order = self.bank.clone();
        order.shuffle(rng);
        self.order = order;
        self.position = 0;
        self.score = 0;
        self.locked = false;
    }

    pub fn current(&self) -> Option<&Question> {
        self.order.get(self.position)
    }

    /// 1-based index of the current question.
    pub fn number(&self) -> usize {
        (self.position + 1).min(self.order.len())
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.order.len()
    }

    /// Whether `advance()` is currently allowed.
    pub fn can_advance(&self) -> bool {
        self.locked && !self.is_finished()
    }

    /// Answer the current question.
    ///
    /// Only the first choice per question counts; later calls return `None`.
    pub fn choose(&mut self, option: usize) -> Option<Answer> {
        if self.locked {
            return None;
        }
        let question = self.order.get(self.position)?;
        let correct = option == question.answer;
        let answer = Answer {
            chosen: option,
            correct,
            correct_index: question.answer,
            explanation: question.explanation.clone(),
        };

        self.locked = true;
        if correct {
            self.score += 1;
        }
        Some(answer)
    }

    /// Move to the next question once the current one is answered.
    ///
    /// Returns false when nothing moved.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.position += 1;
        self.locked = false;
        true
    }

    /// Final result, available once every question is done.
    pub fn summary(&self) -> Option<Summary> {
        self.is_finished().then(|| Summary {
            score: self.score,
            total: self.order.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::bank::builtin_bank;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn session(seed: u64) -> QuizSession {
        QuizSession::new(builtin_bank(), &mut Pcg64::seed_from_u64(seed))
    }

    #[test]
    fn restart_uses_whole_bank() {
        let bank = builtin_bank();
        let s = session(42);
        assert_eq!(s.total(), bank.len());
        let mut shuffled: Vec<_> = s.order.iter().map(|q| q.prompt.clone()).collect();
        let mut original: Vec<_> = bank.iter().map(|q| q.prompt.clone()).collect();
        shuffled.sort();
        original.sort();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn same_seed_same_order() {
        let a: Vec<_> = session(7).order.into_iter().map(|q| q.prompt).collect();
        let b: Vec<_> = session(7).order.into_iter().map(|q| q.prompt).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn second_choice_is_ignored() {
        let mut s = session(1);
        let answer = s.current().unwrap().answer;
        let first = s.choose(answer).unwrap();
        assert!(first.correct);
        assert_eq!(s.score(), 1);
        assert!(s.choose(answer).is_none());
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut s = session(1);
        assert!(!s.advance());
        assert_eq!(s.number(), 1);
        s.choose(0);
        assert!(s.advance());
        assert_eq!(s.number(), 2);
    }

    #[test]
    fn wrong_answer_reveals_correct_index() {
        let mut s = session(3);
        let q = s.current().unwrap().clone();
        let wrong = (q.answer + 1) % q.options.len();
        let answer = s.choose(wrong).unwrap();
        assert!(!answer.correct);
        assert_eq!(answer.correct_index, q.answer);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn full_run_yields_summary() {
        let mut s = session(9);
        assert!(s.summary().is_none());
        let mut expected = 0;
        let mut toggle = false;
        while let Some(q) = s.current() {
            let pick = if toggle { q.answer } else { (q.answer + 1) % q.options.len() };
            if toggle {
                expected += 1;
            }
            toggle = !toggle;
            s.choose(pick);
            s.advance();
        }
        let summary = s.summary().unwrap();
        assert_eq!(summary.total, builtin_bank().len());
        assert_eq!(summary.score, expected);
        assert!(!s.advance());
    }

    #[test]
    fn restart_resets_progress() {
        let mut s = session(5);
        s.choose(0);
        s.advance();
        s.restart(&mut Pcg64::seed_from_u64(6));
        assert_eq!(s.score(), 0);
        assert_eq!(s.number(), 1);
        assert!(!s.is_finished());
    }
}
