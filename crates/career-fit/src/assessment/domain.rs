use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Lowest value accepted on an agreement scale.
pub const SCALE_MIN: u8 = 1;
/// Highest value accepted on an agreement scale.
pub const SCALE_MAX: u8 = 7;
/// Value shown on an unanswered scale question.
pub const SCALE_DEFAULT: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Borrow<str> for QuestionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The six readiness dimensions of the WISCAR framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarDimension {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Will,
            Self::Interest,
            Self::Skill,
            Self::Cognitive,
            Self::Ability,
            Self::RealWorld,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Will => "will",
            Self::Interest => "interest",
            Self::Skill => "skill",
            Self::Cognitive => "cognitive",
            Self::Ability => "ability",
            Self::RealWorld => "real_world",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Will => "Will & Persistence",
            Self::Interest => "Interest & Engagement",
            Self::Skill => "Current Skills",
            Self::Cognitive => "Cognitive Readiness",
            Self::Ability => "Ability to Learn",
            Self::RealWorld => "Real-World Fit",
        }
    }
}

/// Scoring bucket a question belongs to. WISCAR questions carry their dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "category", content = "dimension", rename_all = "snake_case")]
pub enum QuestionCategory {
    Psychometric,
    Technical,
    Wiscar(WiscarDimension),
}

impl QuestionCategory {
    /// Every scoring dimension, psychometric and technical first.
    pub fn dimensions() -> Vec<Self> {
        let mut dimensions = vec![Self::Psychometric, Self::Technical];
        dimensions.extend(WiscarDimension::ordered().into_iter().map(Self::Wiscar));
        dimensions
    }

    pub const fn badge(self) -> &'static str {
        match self {
            Self::Psychometric => "PSYCHOMETRIC",
            Self::Technical => "TECHNICAL",
            Self::Wiscar(_) => "WISCAR",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychological Fit",
            Self::Technical => "Technical Readiness",
            Self::Wiscar(dimension) => dimension.label(),
        }
    }
}

/// One selectable answer on a choice question.
///
/// `weight` is the rubric value (0-100) awarded when the option is chosen. It
/// is never serialized so the answer key stays server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub label: &'static str,
    #[serde(skip)]
    pub weight: u8,
}

impl ChoiceOption {
    pub const fn new(label: &'static str, weight: u8) -> Self {
        Self { label, weight }
    }
}

/// Copy to rewrite on a free-text editing question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditingTask {
    pub original: &'static str,
    pub instruction: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Agreement scale from 1 (strongly disagree) to 7 (strongly agree).
    Scale,
    SingleChoice {
        options: Vec<ChoiceOption>,
    },
    ScenarioChoice {
        scenario: &'static str,
        options: Vec<ChoiceOption>,
    },
    FreeTextEdit {
        task: EditingTask,
    },
}

impl QuestionKind {
    pub fn options(&self) -> Option<&[ChoiceOption]> {
        match self {
            Self::SingleChoice { options } | Self::ScenarioChoice { options, .. } => {
                Some(options)
            }
            Self::Scale | Self::FreeTextEdit { .. } => None,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Scale => "scale",
            Self::SingleChoice { .. } => "single_choice",
            Self::ScenarioChoice { .. } => "scenario_choice",
            Self::FreeTextEdit { .. } => "free_text_edit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    #[serde(flatten)]
    pub category: QuestionCategory,
    pub prompt: &'static str,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    pub fn question_id(&self) -> QuestionId {
        QuestionId::from(self.id)
    }
}
