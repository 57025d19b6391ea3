mod config;
mod policy;
mod rules;

pub use config::ScoringConfig;
pub use policy::{CareerPath, Recommendation};

use std::collections::BTreeMap;

use super::answers::AnswerStore;
use super::catalog::QuestionCatalog;
use super::domain::{QuestionCategory, QuestionId, WiscarDimension};
use serde::{Deserialize, Serialize};

/// Stateless scorer that turns a set of answers into a report.
///
/// Scoring is a pure function of the catalog, the answers and the thresholds;
/// persisting the result is left to the caller.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, catalog: &QuestionCatalog, answers: &AnswerStore) -> ScoreReport {
        let components = rules::score_answers(catalog, answers);
        let dimensions = rules::dimension_scores(&components);
        let dimension = |key: QuestionCategory| dimensions.get(&key).copied().unwrap_or(0);

        let psychometric_score = dimension(QuestionCategory::Psychometric);
        let technical_score = dimension(QuestionCategory::Technical);
        let wiscar_scores: BTreeMap<WiscarDimension, u8> = WiscarDimension::ordered()
            .into_iter()
            .map(|wiscar| (wiscar, dimension(QuestionCategory::Wiscar(wiscar))))
            .collect();

        let wiscar_mean = wiscar_scores.values().copied().map(f32::from).sum::<f32>()
            / wiscar_scores.len() as f32;
        let overall =
            (f32::from(psychometric_score) + f32::from(technical_score) + wiscar_mean) / 3.0;
        let overall_score = overall.floor().clamp(0.0, 100.0) as u8;

        ScoreReport {
            psychometric_score,
            technical_score,
            wiscar_scores,
            overall_score,
            recommendation: Recommendation::from_overall(overall_score, &self.config),
            components,
        }
    }
}

/// Per-question contribution, kept so a report can be audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub question_id: QuestionId,
    pub dimension: QuestionCategory,
    pub score: u8,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub psychometric_score: u8,
    pub technical_score: u8,
    pub wiscar_scores: BTreeMap<WiscarDimension, u8>,
    pub overall_score: u8,
    pub recommendation: Recommendation,
    #[serde(default)]
    pub components: Vec<ScoreComponent>,
}

impl ScoreReport {
    pub fn wiscar_score(&self, dimension: WiscarDimension) -> u8 {
        self.wiscar_scores.get(&dimension).copied().unwrap_or(0)
    }
}
