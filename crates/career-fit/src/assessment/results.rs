use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{QuestionCategory, WiscarDimension};
use super::scoring::{CareerPath, Recommendation};
use super::snapshot::Snapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreLine {
    pub key: &'static str,
    pub label: &'static str,
    pub score: u8,
}

/// Presentation model for the results screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsView {
    pub overall_score: u8,
    pub recommendation: Recommendation,
    pub recommendation_label: &'static str,
    pub message: &'static str,
    pub core_scores: Vec<ScoreLine>,
    pub wiscar_scores: Vec<ScoreLine>,
    pub career_paths: Vec<CareerPath>,
    pub next_steps: Vec<&'static str>,
    pub completed_at: DateTime<Utc>,
}

impl ResultsView {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let report = &snapshot.report;
        let recommendation = report.recommendation;

        let core_scores = vec![
            ScoreLine {
                key: "psychometric",
                label: QuestionCategory::Psychometric.label(),
                score: report.psychometric_score,
            },
            ScoreLine {
                key: "technical",
                label: QuestionCategory::Technical.label(),
                score: report.technical_score,
            },
        ];

        let wiscar_scores = WiscarDimension::ordered()
            .into_iter()
            .map(|dimension| ScoreLine {
                key: dimension.key(),
                label: dimension.label(),
                score: report.wiscar_score(dimension),
            })
            .collect();

        Self {
            overall_score: report.overall_score,
            recommendation,
            recommendation_label: recommendation.label(),
            message: recommendation.message(),
            core_scores,
            wiscar_scores,
            career_paths: recommendation.career_paths().to_vec(),
            next_steps: recommendation.next_steps().to_vec(),
            completed_at: snapshot.completed_at,
        }
    }
}
