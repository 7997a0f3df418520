// src/client/quiz.rs

use uuid::Uuid;

use crate::models::question::Question;

/// Percentage required to unlock the secret-key reveal.
pub const PASS_THRESHOLD: f64 = 80.0;

/// Scores an epsilon below the threshold still pass, absorbing
/// floating-point rounding from the percentage division.
const PASS_EPSILON: f64 = 0.01;

/// Where the quiz taker is in the flow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QuizState {
    /// Questions not yet loaded (initial state, and after a restart).
    #[default]
    Loading,
    /// Mid-quiz: `current` indexes into the loaded questions.
    Active { current: usize, score: i32 },
    /// All questions answered; both the raw score and its percentage.
    Finished { score: i32, percentage: f64 },
}

/// The quiz flow as an explicit state machine, independent of any
/// rendering surface: `Loading -> Active -> Finished`, with restart
/// returning to `Loading`.
#[derive(Debug, Default)]
pub struct QuizFlow {
    questions: Vec<Question>,
    selected: Option<usize>,
    state: QuizState,
}

impl QuizFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Feeds a fetched question sequence into the flow, starting the
    /// quiz. An empty sequence leaves the flow in `Loading` (there is
    /// nothing to answer).
    pub fn load(&mut self, questions: Vec<Question>) {
        if questions.is_empty() {
            self.questions = questions;
            return;
        }
        self.questions = questions;
        self.selected = None;
        self.state = QuizState::Active { current: 0, score: 0 };
    }

    /// The question currently presented, if mid-quiz.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::Active { current, .. } => self.questions.get(current),
            _ => None,
        }
    }

    /// Marks an option for the current question. Re-selecting before
    /// submit just moves the mark; nothing is scored yet. Returns false
    /// outside `Active` or for an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        if index >= question.options.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Submits the marked option. With no selection this is a no-op and
    /// returns false. Otherwise scores the answer, advances to the next
    /// question or transitions to `Finished`, and clears the mark.
    pub fn submit(&mut self) -> bool {
        let QuizState::Active { current, score } = self.state else {
            return false;
        };
        let Some(selected) = self.selected.take() else {
            return false;
        };

        let correct = self.questions[current].correct_answer as usize == selected;
        let score = if correct { score + 1 } else { score };
        let next = current + 1;

        self.state = if next >= self.questions.len() {
            let percentage = score as f64 / self.questions.len() as f64 * 100.0;
            QuizState::Finished { score, percentage }
        } else {
            QuizState::Active { current: next, score }
        };
        true
    }

    /// Whether the finished attempt clears the reveal threshold.
    /// Outside `Finished` this is always false.
    pub fn passed(&self) -> bool {
        match self.state {
            QuizState::Finished { percentage, .. } => percentage >= PASS_THRESHOLD - PASS_EPSILON,
            _ => false,
        }
    }

    pub fn score(&self) -> i32 {
        match self.state {
            QuizState::Active { score, .. } => score,
            _ => 0,
        }
    }

    /// Final raw score, available once finished.
    pub fn final_score(&self) -> Option<i32> {
        match self.state {
            QuizState::Finished { score, .. } => Some(score),
            _ => None,
        }
    }

    /// Resets score and index and returns to `Loading`; the caller
    /// re-fetches questions and calls [`QuizFlow::load`] again.
    pub fn restart(&mut self) {
        self.questions.clear();
        self.selected = None;
        self.state = QuizState::Loading;
    }
}

/// Opaque per-attempt identifier: "user_" plus nine random characters.
/// Not authenticated and not required to be unique.
pub fn generate_user_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("user_{}", &id[..9])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, correct: i32) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            options: vec!["A".into(), "B".into(), "C".into()],
            correct_answer: correct,
        }
    }

    fn flow_with(n: usize) -> QuizFlow {
        let mut flow = QuizFlow::new();
        flow.load((0..n).map(|i| question(i as i64, 0)).collect());
        flow
    }

    fn answer(flow: &mut QuizFlow, index: usize) {
        assert!(flow.select(index));
        assert!(flow.submit());
    }

    #[test]
    fn starts_loading_and_activates_on_load() {
        let mut flow = QuizFlow::new();
        assert_eq!(*flow.state(), QuizState::Loading);
        flow.load(vec![question(1, 0), question(2, 1)]);
        assert_eq!(*flow.state(), QuizState::Active { current: 0, score: 0 });
    }

    #[test]
    fn empty_load_stays_loading() {
        let mut flow = QuizFlow::new();
        flow.load(vec![]);
        assert_eq!(*flow.state(), QuizState::Loading);
        assert!(!flow.submit());
    }

    #[test]
    fn submit_without_selection_is_a_no_op() {
        let mut flow = flow_with(2);
        assert!(!flow.submit());
        assert_eq!(*flow.state(), QuizState::Active { current: 0, score: 0 });
    }

    #[test]
    fn reselecting_before_submit_does_not_double_count() {
        let mut flow = flow_with(1);
        assert!(flow.select(1));
        assert!(flow.select(0)); // change of mind, correct answer
        assert!(flow.submit());
        assert_eq!(
            *flow.state(),
            QuizState::Finished { score: 1, percentage: 100.0 }
        );
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut flow = flow_with(1);
        assert!(!flow.select(3));
        assert!(!flow.submit());
    }

    #[test]
    fn selection_is_cleared_between_questions() {
        let mut flow = flow_with(2);
        answer(&mut flow, 0);
        // New question starts unmarked; bare submit must not advance.
        assert!(!flow.submit());
        assert_eq!(*flow.state(), QuizState::Active { current: 1, score: 1 });
    }

    #[test]
    fn four_of_five_is_exactly_eighty_and_passes() {
        let mut flow = flow_with(5);
        for _ in 0..4 {
            answer(&mut flow, 0);
        }
        answer(&mut flow, 1); // wrong
        assert_eq!(
            *flow.state(),
            QuizState::Finished { score: 4, percentage: 80.0 }
        );
        assert!(flow.passed());
        assert_eq!(flow.final_score(), Some(4));
    }

    #[test]
    fn three_of_five_fails_and_takes_restart_path() {
        let mut flow = flow_with(5);
        for _ in 0..3 {
            answer(&mut flow, 0);
        }
        for _ in 0..2 {
            answer(&mut flow, 1); // wrong
        }
        assert_eq!(
            *flow.state(),
            QuizState::Finished { score: 3, percentage: 60.0 }
        );
        assert!(!flow.passed());

        flow.restart();
        assert_eq!(*flow.state(), QuizState::Loading);
        assert_eq!(flow.score(), 0);
    }

    #[test]
    fn user_ids_are_prefixed_and_opaque() {
        let id = generate_user_id();
        assert!(id.starts_with("user_"));
        assert_eq!(id.len(), "user_".len() + 9);
        assert_ne!(id, generate_user_id());
    }
}
