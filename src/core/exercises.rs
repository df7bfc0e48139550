//! Show/hide state for exercise solutions.

use crate::models::Exercise;

pub const SHOW_SOLUTION: &str = "Show Solution";
pub const HIDE_SOLUTION: &str = "Hide Solution";

/// One exercise card as the exercises view renders it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseView {
    pub index: usize,
    /// "Exercise i+1"
    pub heading: String,
    pub problem: String,
    pub solution: String,
    pub revealed: bool,
    pub toggle_label: &'static str,
}

/// Which solutions are currently revealed. Rebuilt (all hidden) whenever
/// a topic's exercise list is rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExerciseBoard {
    revealed: Vec<bool>,
}

impl ExerciseBoard {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Flip one solution's visibility. Returns the new state, or `None`
    /// for an index outside the board.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let slot = self.revealed.get_mut(index)?;
        *slot = !*slot;
        Some(*slot)
    }

    pub fn views(&self, exercises: &[Exercise]) -> Vec<ExerciseView> {
        exercises
            .iter()
            .enumerate()
            .map(|(index, exercise)| {
                let revealed = self.is_revealed(index);
                ExerciseView {
                    index,
                    heading: format!("Exercise {}", index + 1),
                    problem: exercise.problem.clone(),
                    solution: exercise.solution.clone(),
                    revealed,
                    toggle_label: if revealed { HIDE_SOLUTION } else { SHOW_SOLUTION },
                }
            })
            .collect()
    }
}
