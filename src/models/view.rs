//! Named views and the study modes that lead to them.

/// The top-level views; exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    /// Topic selector (initial view)
    #[default]
    Selector,
    /// Topic explanation
    Explanation,
    /// Quiz for the current topic
    Quiz,
    /// Practice exercises for the current topic
    Exercises,
}

/// What the user asked to do with a topic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StudyMode {
    Explain,
    Quiz,
    Exercises,
}

impl StudyMode {
    /// All modes in the order they are offered on a topic card.
    pub const ALL: [StudyMode; 3] = [Self::Explain, Self::Quiz, Self::Exercises];

    /// View that presents this mode.
    pub fn view(self) -> View {
        match self {
            Self::Explain => View::Explanation,
            Self::Quiz => View::Quiz,
            Self::Exercises => View::Exercises,
        }
    }

    /// Button label on the topic card.
    pub fn label(self) -> &'static str {
        match self {
            Self::Explain => "Explanation",
            Self::Quiz => "Quiz",
            Self::Exercises => "Exercises",
        }
    }

    /// Heading of the mode's view for a topic.
    pub fn title(self, topic_title: &str) -> String {
        match self {
            Self::Explain => topic_title.to_string(),
            Self::Quiz => format!("{} Quiz", topic_title),
            Self::Exercises => format!("{} - Practice Exercises", topic_title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_titles() {
        assert_eq!(StudyMode::Explain.title("DC Motors"), "DC Motors");
        assert_eq!(StudyMode::Quiz.title("DC Motors"), "DC Motors Quiz");
        assert_eq!(
            StudyMode::Exercises.title("DC Motors"),
            "DC Motors - Practice Exercises"
        );
    }

    #[test]
    fn test_mode_views_are_distinct() {
        let views: Vec<_> = StudyMode::ALL.iter().map(|m| m.view()).collect();
        assert_eq!(views, [View::Explanation, View::Quiz, View::Exercises]);
        assert!(!views.contains(&View::default()));
    }
}
