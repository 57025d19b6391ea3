use super::config::ScoringConfig;
use serde::{Deserialize, Serialize};

/// Career-fit verdict derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongFit,
    ModerateFit,
    LowFit,
}

/// A suggested role shown alongside a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerPath {
    pub title: &'static str,
    pub detail: &'static str,
}

impl Recommendation {
    pub fn from_overall(overall: u8, config: &ScoringConfig) -> Self {
        if overall >= config.strong_fit_threshold {
            Self::StrongFit
        } else if overall >= config.moderate_fit_threshold {
            Self::ModerateFit
        } else {
            Self::LowFit
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StrongFit => "Strong Fit",
            Self::ModerateFit => "Moderate Fit",
            Self::LowFit => "Low Fit",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::StrongFit => "Excellent! Your profile strongly suggests you'd thrive in UX copywriting. Your user empathy and writing skills indicate a great fit for this career path.",
            Self::ModerateFit => "Good potential! You have solid motivation but may need to develop some technical skills and UX knowledge. With focused learning, you could excel in this field.",
            Self::LowFit => "Your current profile suggests exploring related roles like Content Marketing or Technical Writing might be a better fit. Consider these alternative pathways.",
        }
    }

    pub const fn next_steps(self) -> [&'static str; 4] {
        match self {
            Self::StrongFit => [
                "Enroll in intermediate UX writing courses",
                "Start building a UX writing portfolio",
                "Practice with real product copy exercises",
                "Connect with UX writing communities",
            ],
            Self::ModerateFit => [
                "Take foundational UX design courses",
                "Practice rewriting existing UX copy",
                "Learn about user research basics",
                "Improve technical writing skills",
            ],
            Self::LowFit => [
                "Explore content marketing opportunities",
                "Consider technical writing roles",
                "Develop general copywriting skills",
                "Research related creative careers",
            ],
        }
    }

    pub const fn career_paths(self) -> [CareerPath; 2] {
        match self {
            Self::StrongFit => [
                CareerPath {
                    title: "Primary: UX Copywriter",
                    detail: "Strong match for interface copy",
                },
                CareerPath {
                    title: "Secondary: Content Strategist",
                    detail: "Leverage strategic thinking",
                },
            ],
            Self::ModerateFit => [
                CareerPath {
                    title: "Consider: UX Writing (Junior)",
                    detail: "With skill development",
                },
                CareerPath {
                    title: "Alternative: Content Designer",
                    detail: "Broader content role",
                },
            ],
            Self::LowFit => [
                CareerPath {
                    title: "Content Marketing",
                    detail: "Better skill alignment",
                },
                CareerPath {
                    title: "Technical Writing",
                    detail: "Documentation focus",
                },
            ],
        }
    }
}
