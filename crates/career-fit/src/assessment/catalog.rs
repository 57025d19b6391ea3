use std::collections::HashSet;

use super::domain::{
    ChoiceOption, EditingTask, Question, QuestionCategory, QuestionKind, WiscarDimension,
};

/// Ordered, read-only list of questions presented during an assessment.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog must contain at least one question")]
    Empty,
    #[error("question id {0} appears more than once")]
    DuplicateId(&'static str),
    #[error("choice question {0} needs at least two options")]
    TooFewOptions(&'static str),
    #[error("choice question {question_id} repeats option '{label}'")]
    DuplicateOption {
        question_id: &'static str,
        label: &'static str,
    },
    #[error("option '{label}' on {question_id} has weight {weight}, above 100")]
    WeightOutOfRange {
        question_id: &'static str,
        label: &'static str,
        weight: u8,
    },
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateId(question.id));
            }

            if let Some(options) = question.kind.options() {
                if options.len() < 2 {
                    return Err(CatalogError::TooFewOptions(question.id));
                }
                let mut labels = HashSet::new();
                for option in options {
                    if !labels.insert(option.label) {
                        return Err(CatalogError::DuplicateOption {
                            question_id: question.id,
                            label: option.label,
                        });
                    }
                    if option.weight > 100 {
                        return Err(CatalogError::WeightOutOfRange {
                            question_id: question.id,
                            label: option.label,
                            weight: option.weight,
                        });
                    }
                }
            }
        }

        Ok(Self { questions })
    }

    /// The UX copywriting assessment.
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn count(&self) -> usize {
        self.questions.len()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Indexed lookup for callers that already hold a valid index.
    ///
    /// # Panics
    ///
    /// Panics when `index >= self.count()`.
    pub fn question(&self, index: usize) -> &Question {
        &self.questions[index]
    }

    pub fn find(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn in_dimension(&self, dimension: QuestionCategory) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.category == dimension)
            .collect()
    }
}

fn scale(id: &'static str, category: QuestionCategory, prompt: &'static str) -> Question {
    Question {
        id,
        category,
        prompt,
        kind: QuestionKind::Scale,
    }
}

fn choice(
    id: &'static str,
    category: QuestionCategory,
    prompt: &'static str,
    options: [ChoiceOption; 4],
) -> Question {
    Question {
        id,
        category,
        prompt,
        kind: QuestionKind::SingleChoice {
            options: options.to_vec(),
        },
    }
}

fn scenario(
    id: &'static str,
    category: QuestionCategory,
    prompt: &'static str,
    scenario: &'static str,
    options: [ChoiceOption; 4],
) -> Question {
    Question {
        id,
        category,
        prompt,
        kind: QuestionKind::ScenarioChoice {
            scenario,
            options: options.to_vec(),
        },
    }
}

fn editing(
    id: &'static str,
    category: QuestionCategory,
    prompt: &'static str,
    original: &'static str,
    instruction: &'static str,
) -> Question {
    Question {
        id,
        category,
        prompt,
        kind: QuestionKind::FreeTextEdit {
            task: EditingTask {
                original,
                instruction,
            },
        },
    }
}

fn standard_questions() -> Vec<Question> {
    use QuestionCategory::{Psychometric, Technical, Wiscar};
    use WiscarDimension::{Ability, Cognitive, Interest, RealWorld, Skill, Will};

    vec![
        scale(
            "psych_1",
            Psychometric,
            "I enjoy writing that helps people accomplish their goals more effectively.",
        ),
        scale(
            "psych_2",
            Psychometric,
            "I find satisfaction in simplifying complex information for others.",
        ),
        scale(
            "psych_3",
            Psychometric,
            "I naturally consider how my words might affect someone's emotions and actions.",
        ),
        choice(
            "psych_4",
            Psychometric,
            "When approaching a new project, I typically:",
            [
                ChoiceOption::new("Jump right in and start creating", 40),
                ChoiceOption::new("Research thoroughly before beginning", 85),
                ChoiceOption::new("Collaborate with others to understand requirements", 100),
                ChoiceOption::new("Create a detailed plan and timeline", 70),
            ],
        ),
        scenario(
            "psych_5",
            Psychometric,
            "How would you approach this situation?",
            "A user reports that they can't find the checkout button on an e-commerce site. The button is clearly visible but users keep missing it.",
            [
                ChoiceOption::new("Make the button bigger and more colorful", 30),
                ChoiceOption::new("Research similar user complaints and test button placement", 100),
                ChoiceOption::new("Add more explanatory text around the button", 40),
                ChoiceOption::new("Change the button text to be more action-oriented", 70),
            ],
        ),
        choice(
            "tech_1",
            Technical,
            "What is the primary goal of UX writing?",
            [
                ChoiceOption::new("To showcase creative writing skills", 0),
                ChoiceOption::new("To guide users smoothly through interface interactions", 100),
                ChoiceOption::new("To promote brand personality", 20),
                ChoiceOption::new("To provide detailed product information", 30),
            ],
        ),
        editing(
            "tech_2",
            Technical,
            "Improve this error message for better user experience:",
            "ERROR: Invalid input detected. Please check your data and try again.",
            "Rewrite this error message to be more user-friendly and actionable.",
        ),
        choice(
            "tech_3",
            Technical,
            "Which principle is most important for effective microcopy?",
            [
                ChoiceOption::new("Being clever and memorable", 10),
                ChoiceOption::new("Using technical accuracy", 30),
                ChoiceOption::new("Being clear and concise", 100),
                ChoiceOption::new("Matching brand voice perfectly", 40),
            ],
        ),
        editing(
            "tech_4",
            Technical,
            "Improve this call-to-action button text:",
            "Click Here",
            "Rewrite this button text to be more specific and action-oriented for a newsletter signup.",
        ),
        scale(
            "wiscar_will_1",
            Wiscar(Will),
            "I am willing to spend time learning about user psychology and behavior.",
        ),
        scenario(
            "wiscar_will_2",
            Wiscar(Will),
            "You receive critical feedback about copy you wrote. Your response:",
            "A colleague points out that your copy for a form might be confusing users and suggests major revisions.",
            [
                ChoiceOption::new("Defend your original approach with reasoning", 20),
                ChoiceOption::new("Immediately accept the feedback and make changes", 50),
                ChoiceOption::new("Ask for specific examples and user data to understand the issue", 100),
                ChoiceOption::new("Suggest testing both versions to see which performs better", 85),
            ],
        ),
        scale(
            "wiscar_interest_1",
            Wiscar(Interest),
            "I find it exciting to analyze how word choices affect user behavior.",
        ),
        choice(
            "wiscar_interest_2",
            Wiscar(Interest),
            "Which UX writing task sounds most appealing to you?",
            [
                ChoiceOption::new("Writing onboarding flows for new apps", 90),
                ChoiceOption::new("Crafting error messages that reduce user frustration", 100),
                ChoiceOption::new("Creating consistent voice and tone guidelines", 85),
                ChoiceOption::new("A/B testing different copy variations", 85),
            ],
        ),
        editing(
            "wiscar_skill_1",
            Wiscar(Skill),
            "Simplify this instruction for a mobile app:",
            "To initiate the process of creating your user profile, please navigate to the account settings section and locate the profile configuration options.",
            "Rewrite this to be clear and concise for mobile users.",
        ),
        scenario(
            "wiscar_cognitive_1",
            Wiscar(Cognitive),
            "Analyze this A/B test result:",
            "Version A: 'Start Free Trial' (12% click rate) vs Version B: 'Try Free for 30 Days' (18% click rate). Both buttons were identical except for text.",
            [
                ChoiceOption::new("Version B won because it's more specific about the trial length", 80),
                ChoiceOption::new("Version B won because it sounds more beneficial to users", 60),
                ChoiceOption::new("Version A lost because it seems too sales-focused", 30),
                ChoiceOption::new("The result is inconclusive without more context about the audience", 100),
            ],
        ),
        scale(
            "wiscar_ability_1",
            Wiscar(Ability),
            "I actively seek feedback on my writing to improve my skills.",
        ),
        choice(
            "wiscar_ability_2",
            Wiscar(Ability),
            "When learning a new UX writing concept, you prefer:",
            [
                ChoiceOption::new("Reading detailed guides and documentation", 80),
                ChoiceOption::new("Watching video tutorials and examples", 70),
                ChoiceOption::new("Practicing with hands-on exercises", 100),
                ChoiceOption::new("Discussing with peers and mentors", 85),
            ],
        ),
        scenario(
            "wiscar_real_world_1",
            Wiscar(RealWorld),
            "How do you handle this common workplace situation?",
            "You're working on copy for a new feature launch. Marketing wants promotional language, while the product team wants purely functional descriptions.",
            [
                ChoiceOption::new("Create two separate versions for different contexts", 50),
                ChoiceOption::new("Find a middle ground that satisfies both teams", 60),
                ChoiceOption::new("Advocate for the user's perspective above all else", 75),
                ChoiceOption::new("Present user research to guide the decision", 100),
            ],
        ),
        scale(
            "wiscar_real_world_2",
            Wiscar(RealWorld),
            "I would enjoy collaborating daily with designers, developers, and product managers.",
        ),
    ]
}
