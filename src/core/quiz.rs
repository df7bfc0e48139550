//! Quiz session state machine.
//!
//! A [`QuizSession`] walks a topic's questions in order. Each question is
//! either unanswered or answered with exactly one option; the first answer
//! is final. Everything the quiz view shows is derived from the session by
//! [`QuizSession::view`], so a revisited question renders exactly as it did
//! when it was answered.
//!
//! ```text
//!   unanswered ──select_option──▶ answered(option)   (terminal)
//!
//!   [0] ◀──previous── [i] ──next──▶ [N-1]            (no wraparound)
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::error::QuizError;
use crate::models::{Question, Topic};

// =============================================================================
// Feedback
// =============================================================================

/// Highlight applied to a single option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    /// No feedback (question unanswered, or neither chosen nor correct).
    Plain,
    Correct,
    Incorrect,
}

/// Feedback for an answered question, derived from `(question, answer)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub selected: usize,
    pub correct: usize,
}

impl AnswerFeedback {
    pub fn new(question: &Question, selected: usize) -> Self {
        Self {
            selected,
            correct: question.correct,
        }
    }

    pub fn is_correct(&self) -> bool {
        self.selected == self.correct
    }

    /// Mark for one option: the correct option is always flagged correct,
    /// a wrong choice is flagged incorrect, everything else stays plain.
    pub fn mark(&self, option: usize) -> OptionMark {
        if option == self.correct {
            OptionMark::Correct
        } else if option == self.selected {
            OptionMark::Incorrect
        } else {
            OptionMark::Plain
        }
    }
}

// =============================================================================
// View Model
// =============================================================================

/// One option as the quiz view renders it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub index: usize,
    pub label: String,
    pub mark: OptionMark,
    /// Clickable only while the question is unanswered.
    pub selectable: bool,
}

/// The current question as the quiz view renders it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    /// "Question i+1 of N"
    pub heading: String,
    pub prompt: String,
    pub options: Vec<OptionView>,
    /// Present only once answered, and only if the question has a
    /// non-blank one.
    pub explanation: Option<String>,
    pub show_previous: bool,
    pub show_next: bool,
    /// Forward navigation is allowed once the current question is answered.
    pub next_enabled: bool,
}

/// Running tally of answers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

impl Score {
    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }
}

// =============================================================================
// Session
// =============================================================================

/// Navigation and answer state for one in-progress quiz.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizSession {
    topic: Arc<Topic>,
    current: usize,
    /// Question index → selected option. Sparse: only answered questions.
    answers: BTreeMap<usize, usize>,
}

impl QuizSession {
    /// Start a quiz at the first question. Topics without questions
    /// cannot be quizzed.
    pub fn new(topic: Arc<Topic>) -> Result<Self, QuizError> {
        if topic.quiz.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        Ok(Self {
            topic,
            current: 0,
            answers: BTreeMap::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.topic.quiz.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.topic.quiz[self.current]
    }

    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(&question).copied()
    }

    pub fn is_answered(&self, question: usize) -> bool {
        self.answers.contains_key(&question)
    }

    /// Whether forward navigation should be offered right now.
    pub fn can_advance(&self) -> bool {
        self.is_answered(self.current)
    }

    /// Feedback for an answered question.
    pub fn feedback(&self, question: usize) -> Option<AnswerFeedback> {
        let selected = self.answer(question)?;
        let question = self.topic.quiz.get(question)?;
        Some(AnswerFeedback::new(question, selected))
    }

    /// Record an answer. Answers are write-once: a second selection for the
    /// same question is rejected and leaves the recorded answer untouched.
    pub fn select_option(
        &mut self,
        question: usize,
        option: usize,
    ) -> Result<AnswerFeedback, QuizError> {
        let q = self
            .topic
            .quiz
            .get(question)
            .ok_or(QuizError::QuestionOutOfRange(question))?;

        if self.answers.contains_key(&question) {
            return Err(QuizError::AlreadyAnswered(question));
        }
        if option >= q.options.len() {
            return Err(QuizError::OptionOutOfRange { question, option });
        }

        let feedback = AnswerFeedback::new(q, option);
        self.answers.insert(question, option);
        tracing::debug!(question, option, correct = feedback.is_correct(), "answer recorded");
        Ok(feedback)
    }

    /// Answer the question currently shown.
    pub fn select_current(&mut self, option: usize) -> Result<AnswerFeedback, QuizError> {
        self.select_option(self.current, option)
    }

    /// Move to the next question. Rejected at the last question.
    pub fn next(&mut self) -> Result<usize, QuizError> {
        if self.current + 1 >= self.len() {
            return Err(QuizError::AtLastQuestion);
        }
        self.current += 1;
        Ok(self.current)
    }

    /// Move to the previous question. Rejected at the first question.
    pub fn previous(&mut self) -> Result<usize, QuizError> {
        if self.current == 0 {
            return Err(QuizError::AtFirstQuestion);
        }
        self.current -= 1;
        Ok(self.current)
    }

    pub fn score(&self) -> Score {
        let correct = self
            .answers
            .iter()
            .filter(|&(&q, &option)| self.topic.quiz[q].is_correct(option))
            .count();

        Score {
            correct,
            answered: self.answers.len(),
            total: self.len(),
        }
    }

    /// Project the current question into its view model.
    pub fn view(&self) -> QuestionView {
        let index = self.current_index();
        let question = self.current_question();
        let feedback = self.feedback(index);

        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(i, label)| OptionView {
                index: i,
                label: label.clone(),
                mark: feedback.map_or(OptionMark::Plain, |f| f.mark(i)),
                selectable: feedback.is_none(),
            })
            .collect();

        let explanation = feedback
            .and(question.explanation.as_ref())
            .filter(|text| !text.trim().is_empty())
            .cloned();

        QuestionView {
            heading: format!("Question {} of {}", index + 1, self.len()),
            prompt: question.text.clone(),
            options,
            explanation,
            show_previous: index > 0,
            show_next: index + 1 < self.len(),
            next_enabled: self.can_advance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::three_question_topic;

    fn session() -> QuizSession {
        QuizSession::new(Arc::new(three_question_topic())).unwrap()
    }

    fn marks(view: &QuestionView) -> Vec<OptionMark> {
        view.options.iter().map(|o| o.mark).collect()
    }

    #[test]
    fn test_empty_quiz_rejected() {
        let mut topic = three_question_topic();
        topic.quiz.clear();
        assert_eq!(
            QuizSession::new(Arc::new(topic)).unwrap_err(),
            QuizError::NoQuestions
        );
    }

    #[test]
    fn test_fresh_session() {
        let s = session();
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.len(), 3);
        assert!(!s.can_advance());

        let view = s.view();
        assert_eq!(view.heading, "Question 1 of 3");
        assert_eq!(view.prompt, "What opposes the supply voltage?");
        assert!(view.options.iter().all(|o| o.selectable));
        assert!(view.options.iter().all(|o| o.mark == OptionMark::Plain));
        assert_eq!(view.explanation, None);
        assert!(!view.show_previous);
        assert!(view.show_next);
        assert!(!view.next_enabled);
    }

    #[test]
    fn test_answers_are_write_once() {
        let mut s = session();
        s.select_option(0, 0).unwrap();

        for option in 0..3 {
            assert_eq!(
                s.select_option(0, option),
                Err(QuizError::AlreadyAnswered(0))
            );
        }
        assert_eq!(s.answer(0), Some(0));
    }

    #[test]
    fn test_out_of_range_selection_rejected() {
        let mut s = session();
        assert_eq!(s.select_option(3, 0), Err(QuizError::QuestionOutOfRange(3)));
        assert_eq!(
            s.select_option(1, 2),
            Err(QuizError::OptionOutOfRange {
                question: 1,
                option: 2
            })
        );
        assert!(!s.is_answered(1));
    }

    #[test]
    fn test_correct_answer_flags_only_chosen_option() {
        let mut s = session();
        let feedback = s.select_current(1).unwrap();
        assert!(feedback.is_correct());

        let view = s.view();
        assert_eq!(
            marks(&view),
            [OptionMark::Plain, OptionMark::Correct, OptionMark::Plain]
        );
    }

    #[test]
    fn test_flag_counts_hold_for_every_choice() {
        let topic = Arc::new(three_question_topic());
        for (q, question) in topic.quiz.iter().enumerate() {
            for chosen in 0..question.options.len() {
                let mut s = QuizSession::new(topic.clone()).unwrap();
                s.select_option(q, chosen).unwrap();
                let feedback = s.feedback(q).unwrap();

                let all: Vec<_> = (0..question.options.len())
                    .map(|i| feedback.mark(i))
                    .collect();
                let correct = all.iter().filter(|m| **m == OptionMark::Correct).count();
                let incorrect = all.iter().filter(|m| **m == OptionMark::Incorrect).count();

                assert_eq!(correct, 1);
                assert_eq!(incorrect, usize::from(chosen != question.correct));
            }
        }
    }

    #[test]
    fn test_navigation_bounds() {
        let mut s = session();
        assert_eq!(s.previous(), Err(QuizError::AtFirstQuestion));
        assert_eq!(s.current_index(), 0);

        assert_eq!(s.next(), Ok(1));
        assert_eq!(s.next(), Ok(2));
        assert_eq!(s.next(), Err(QuizError::AtLastQuestion));
        assert_eq!(s.current_index(), 2);

        let view = s.view();
        assert!(view.show_previous);
        assert!(!view.show_next);

        assert_eq!(s.previous(), Ok(1));
        assert_eq!(s.previous(), Ok(0));
        assert_eq!(s.previous(), Err(QuizError::AtFirstQuestion));
    }

    #[test]
    fn test_next_enabled_iff_answered() {
        let mut s = session();
        s.select_current(2).unwrap();
        assert!(s.view().next_enabled);

        s.next().unwrap();
        assert!(!s.view().next_enabled);
        assert!(!s.can_advance());

        s.previous().unwrap();
        assert!(s.view().next_enabled);
    }

    #[test]
    fn test_three_question_walkthrough() {
        let mut s = session();

        // Q1: pick option 0, correct is 1.
        s.select_current(0).unwrap();
        let q1 = s.view();
        assert_eq!(
            marks(&q1),
            [OptionMark::Incorrect, OptionMark::Correct, OptionMark::Plain]
        );
        assert_eq!(
            q1.explanation.as_deref(),
            Some("Back EMF opposes the applied voltage.")
        );
        assert!(q1.options.iter().all(|o| !o.selectable));
        assert!(q1.next_enabled);

        // Q2 starts unanswered.
        s.next().unwrap();
        let q2 = s.view();
        assert_eq!(q2.heading, "Question 2 of 3");
        assert!(q2.options.iter().all(|o| o.mark == OptionMark::Plain));
        assert!(!q2.next_enabled);

        // Back to Q1: identical feedback.
        s.previous().unwrap();
        assert_eq!(s.view(), q1);
    }

    #[test]
    fn test_revisit_is_idempotent() {
        let mut s = session();
        s.next().unwrap();
        s.select_current(1).unwrap();
        let answered = s.view();

        s.previous().unwrap();
        s.next().unwrap();
        assert_eq!(s.view(), answered);
    }

    #[test]
    fn test_explanation_hidden_until_answered() {
        let mut s = session();
        assert_eq!(s.view().explanation, None);

        // Q2 has no explanation even after answering.
        s.next().unwrap();
        s.select_current(0).unwrap();
        assert_eq!(s.view().explanation, None);

        s.next().unwrap();
        assert_eq!(s.view().explanation, None);
        s.select_current(0).unwrap();
        assert!(s.view().explanation.is_some());
    }

    #[test]
    fn test_blank_explanation_stays_hidden() {
        let mut topic = three_question_topic();
        topic.quiz[0].explanation = Some(String::new());
        topic.quiz[2].explanation = Some("  \n".to_string());
        let mut s = QuizSession::new(Arc::new(topic)).unwrap();

        s.select_current(0).unwrap();
        assert_eq!(s.view().explanation, None);

        s.next().unwrap();
        s.next().unwrap();
        s.select_current(2).unwrap();
        assert_eq!(s.view().explanation, None);
    }

    #[test]
    fn test_score() {
        let mut s = session();
        assert_eq!(
            s.score(),
            Score {
                correct: 0,
                answered: 0,
                total: 3
            }
        );

        s.select_option(0, 1).unwrap();
        s.select_option(1, 1).unwrap();
        s.select_option(2, 2).unwrap();

        let score = s.score();
        assert_eq!(score.correct, 2);
        assert!(score.is_complete());
    }

    #[test]
    fn test_single_question_quiz_has_no_navigation() {
        let mut topic = three_question_topic();
        topic.quiz.truncate(1);
        let mut s = QuizSession::new(Arc::new(topic)).unwrap();

        let view = s.view();
        assert!(!view.show_next);
        assert!(!view.show_previous);
        assert_eq!(s.next(), Err(QuizError::AtLastQuestion));
    }
}
