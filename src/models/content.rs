//! Content documents: the topics index and per-topic study material.
//!
//! These types mirror the JSON documents served from the data directory.
//! They are immutable once loaded; the loader validates them and applies
//! the configured [`ContentTrust`] policy before they reach any view.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::{ContentTrust, DEFAULT_CATEGORY};
use crate::core::error::ContentError;

// =============================================================================
// Topics Index
// =============================================================================

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Summary metadata for one topic, as listed in the index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub title: String,
    #[serde(default = "default_category")]
    pub category: String,
}

/// A topic entry inside a [`CategoryGroup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicEntry {
    pub id: String,
    pub title: String,
}

/// Topics sharing a category, in index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: String,
    pub topics: Vec<TopicEntry>,
}

/// Mapping from topic id to its summary, in the order the index lists
/// them. Loaded once per session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicsIndex {
    topics: IndexMap<String, TopicSummary>,
}

impl TopicsIndex {
    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&TopicSummary> {
        self.topics.get(id)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Group topics by category. Categories appear in the order of their
    /// first topic; topics keep their index order.
    pub fn by_category(&self) -> Vec<CategoryGroup> {
        let mut groups: IndexMap<&str, Vec<TopicEntry>> = IndexMap::new();

        for (id, summary) in &self.topics {
            groups
                .entry(summary.category.as_str())
                .or_default()
                .push(TopicEntry {
                    id: id.clone(),
                    title: summary.title.clone(),
                });
        }

        groups
            .into_iter()
            .map(|(name, topics)| CategoryGroup {
                name: name.to_string(),
                topics,
            })
            .collect()
    }
}

// =============================================================================
// Topic Documents
// =============================================================================

/// A single multiple-choice quiz question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question prompt (markup).
    #[serde(rename = "question")]
    pub text: String,
    /// Answer options in display order (markup).
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct: usize,
    /// Revealed once the question has been answered.
    #[serde(default)]
    pub explanation: Option<String>,
}

impl Question {
    #[inline]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

/// A practice problem with its worked solution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub problem: String,
    /// Worked solution (markup).
    pub solution: String,
}

/// One unit of study material: explanation, quiz and exercises.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Filled from the requested id when the document omits it.
    #[serde(default)]
    pub id: String,
    pub title: String,
    /// Explanation body (markup).
    pub explanation: String,
    pub quiz: Vec<Question>,
    pub exercises: Vec<Exercise>,
}

impl Topic {
    /// Check the document against the shape every view relies on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.title.trim().is_empty() {
            return Err(ContentError::MissingTitle);
        }

        for (index, question) in self.quiz.iter().enumerate() {
            if question.text.trim().is_empty() {
                return Err(ContentError::BlankQuestion { question: index });
            }
            if question.options.is_empty() {
                return Err(ContentError::NoOptions { question: index });
            }
            if question.correct >= question.options.len() {
                return Err(ContentError::CorrectOutOfRange {
                    question: index,
                    correct: question.correct,
                    options: question.options.len(),
                });
            }
        }

        for (index, exercise) in self.exercises.iter().enumerate() {
            if exercise.problem.trim().is_empty() {
                return Err(ContentError::BlankProblem { exercise: index });
            }
        }

        Ok(())
    }

    /// Apply the trust policy to every markup field.
    ///
    /// The title is always rendered as text and is left untouched.
    pub fn with_trust(mut self, trust: ContentTrust) -> Self {
        if trust == ContentTrust::Trusted {
            return self;
        }

        self.explanation = ammonia::clean(&self.explanation);
        for question in &mut self.quiz {
            question.text = ammonia::clean(&question.text);
            for option in &mut question.options {
                *option = ammonia::clean(option);
            }
            if let Some(explanation) = question.explanation.as_mut() {
                *explanation = ammonia::clean(explanation);
            }
        }
        for exercise in &mut self.exercises {
            exercise.problem = ammonia::clean(&exercise.problem);
            exercise.solution = ammonia::clean(&exercise.solution);
        }

        self
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Three-question topic with correct answers at [1, 0, 2].
    pub fn three_question_topic() -> Topic {
        Topic {
            id: "dc-motors".to_string(),
            title: "DC Motors".to_string(),
            explanation: "<p>Back EMF: $E_b = k \\phi \\omega$</p>".to_string(),
            quiz: vec![
                Question {
                    text: "What opposes the supply voltage?".to_string(),
                    options: vec![
                        "Armature current".to_string(),
                        "Back EMF".to_string(),
                        "Field flux".to_string(),
                    ],
                    correct: 1,
                    explanation: Some("Back EMF opposes the applied voltage.".to_string()),
                },
                Question {
                    text: "Which motor has the highest starting torque?".to_string(),
                    options: vec!["Series".to_string(), "Shunt".to_string()],
                    correct: 0,
                    explanation: None,
                },
                Question {
                    text: "Speed is proportional to?".to_string(),
                    options: vec![
                        "$\\phi$".to_string(),
                        "$I_a$".to_string(),
                        "$E_b / \\phi$".to_string(),
                    ],
                    correct: 2,
                    explanation: Some("$\\omega = E_b / (k\\phi)$".to_string()),
                },
            ],
            exercises: vec![
                Exercise {
                    problem: "A 220 V motor draws 10 A with $R_a = 0.5\\Omega$. Find $E_b$."
                        .to_string(),
                    solution: "<p>$E_b = 220 - 10 \\times 0.5 = 215$ V</p>".to_string(),
                },
                Exercise {
                    problem: "Explain armature reaction.".to_string(),
                    solution: "<p>The armature field distorts the main field.</p>".to_string(),
                },
            ],
        }
    }
}
