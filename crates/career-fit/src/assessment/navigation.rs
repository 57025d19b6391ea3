use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::flow::AssessmentSession;
use super::results::ResultsView;
use super::service::AssessmentService;
use super::snapshot::SnapshotStore;

/// The three screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Landing,
    Assessment,
    Results,
}

impl Screen {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Assessment => "/assessment",
            Self::Results => "/results",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// Static copy for the landing screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingPage {
    pub headline: &'static str,
    pub summary: &'static str,
    pub role_overview: &'static str,
    pub roles: [&'static str; 5],
    pub features: [Feature; 4],
}

impl LandingPage {
    pub const fn standard() -> Self {
        Self {
            headline: "Is UX Copywriting Right for You?",
            summary: "Discover if you have what it takes to excel in UX copywriting. Our comprehensive assessment evaluates your psychological fit, technical skills, and career alignment using proven frameworks.",
            role_overview: "UX copywriting involves creating clear, concise, user-centered copy for digital interfaces that guides users, improves usability, and supports brand voice.",
            roles: [
                "UX Copywriter",
                "Content Strategist",
                "UX Designer (writing focus)",
                "Product Writer",
                "Microcopy Specialist",
            ],
            features: [
                Feature {
                    title: "Psychological Fit Analysis",
                    description: "Evaluate your personality traits and cognitive style for UX copywriting success",
                },
                Feature {
                    title: "Technical Readiness",
                    description: "Assess your current skills and identify areas for improvement",
                },
                Feature {
                    title: "WISCAR Framework",
                    description: "Comprehensive analysis of Will, Interest, Skill, Cognitive readiness, Ability to learn, and Real-world alignment",
                },
                Feature {
                    title: "Personalized Recommendations",
                    description: "Get tailored career advice and learning pathways based on your results",
                },
            ],
        }
    }
}

/// Outcome of opening the results screen.
pub enum ResultsPage<S> {
    Ready(ResultsView),
    /// No usable snapshot; the user lands on a fresh assessment.
    Redirected(AssessmentSession<S>),
}

/// Screen-level navigation over a shared assessment service.
pub struct AssessmentApp<S> {
    service: Arc<AssessmentService<S>>,
    screen: Screen,
}

impl<S> AssessmentApp<S>
where
    S: SnapshotStore + 'static,
{
    pub fn new(service: Arc<AssessmentService<S>>) -> Self {
        Self {
            service,
            screen: Screen::Landing,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn service(&self) -> &Arc<AssessmentService<S>> {
        &self.service
    }

    pub fn go_home(&mut self) {
        self.go_to(Screen::Landing);
    }

    pub fn start_assessment(&mut self) -> AssessmentSession<S> {
        self.go_to(Screen::Assessment);
        self.service.start_session()
    }

    /// Show the stored results, or redirect to a new assessment when there are
    /// none. A snapshot that cannot be read is treated as absent.
    pub fn open_results(&mut self) -> ResultsPage<S> {
        match self.service.latest() {
            Ok(Some(snapshot)) => {
                self.go_to(Screen::Results);
                ResultsPage::Ready(ResultsView::from_snapshot(&snapshot))
            }
            Ok(None) => {
                debug!("no stored results, redirecting to assessment");
                ResultsPage::Redirected(self.start_assessment())
            }
            Err(err) => {
                warn!(error = %err, "stored results unreadable, redirecting to assessment");
                ResultsPage::Redirected(self.start_assessment())
            }
        }
    }

    /// Move to `screen`. Used after a session reports its own destination.
    pub fn go_to(&mut self, screen: Screen) {
        debug!(from = ?self.screen, to = ?screen, "navigating");
        self.screen = screen;
    }
}
