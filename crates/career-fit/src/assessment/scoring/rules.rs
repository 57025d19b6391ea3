use std::collections::BTreeMap;

use super::super::answers::{Answer, AnswerStore};
use super::super::catalog::QuestionCatalog;
use super::super::domain::{
    ChoiceOption, EditingTask, Question, QuestionCategory, QuestionKind, SCALE_MAX, SCALE_MIN,
};
use super::ScoreComponent;

const JARGON: [&str; 12] = [
    "invalid",
    "error",
    "detected",
    "initiate",
    "navigate",
    "configuration",
    "locate",
    "input",
    "data",
    "click here",
    "utilize",
    "functionality",
];

const ACTION_VERBS: [&str; 24] = [
    "add", "check", "choose", "continue", "create", "edit", "enter", "find", "fix", "get", "go",
    "join", "open", "review", "save", "set", "sign", "start", "subscribe", "tap", "try", "update",
    "use", "verify",
];

const CHANGED_POINTS: u8 = 25;
const CONCISE_POINTS: u8 = 25;
const CALM_TONE_POINTS: u8 = 15;
const PLAIN_LANGUAGE_POINTS: u8 = 15;
const ACTION_VERB_POINTS: u8 = 20;

pub(crate) fn score_answers(catalog: &QuestionCatalog, answers: &AnswerStore) -> Vec<ScoreComponent> {
    catalog
        .questions()
        .iter()
        .map(|question| score_question(question, answers.get(question.id)))
        .collect()
}

fn score_question(question: &Question, answer: Option<&Answer>) -> ScoreComponent {
    let (score, notes) = match (answer, &question.kind) {
        (None, _) => (0, "unanswered".to_string()),
        (Some(Answer::Scale(value)), QuestionKind::Scale) => {
            let score = scale_contribution(*value);
            (score, format!("scale response {value} of {SCALE_MAX}"))
        }
        (Some(Answer::Choice(label)), QuestionKind::SingleChoice { options })
        | (Some(Answer::Choice(label)), QuestionKind::ScenarioChoice { options, .. }) => {
            choice_contribution(options, label)
        }
        (Some(Answer::Text(text)), QuestionKind::FreeTextEdit { task }) => edit_rubric(task, text),
        (Some(answer), kind) => (
            0,
            format!("{} answer does not fit a {} question", answer_kind(answer), kind.label()),
        ),
    };

    ScoreComponent {
        question_id: question.question_id(),
        dimension: question.category,
        score,
        notes,
    }
}

fn answer_kind(answer: &Answer) -> &'static str {
    match answer {
        Answer::Scale(_) => "scale",
        Answer::Choice(_) => "choice",
        Answer::Text(_) => "text",
    }
}

/// Rescale 1..=7 onto 0..=100.
pub(crate) fn scale_contribution(value: u8) -> u8 {
    let clamped = value.clamp(SCALE_MIN, SCALE_MAX);
    let steps = f32::from(clamped - SCALE_MIN);
    let span = f32::from(SCALE_MAX - SCALE_MIN);
    (steps / span * 100.0).round() as u8
}

fn choice_contribution(options: &[ChoiceOption], label: &str) -> (u8, String) {
    match options.iter().find(|option| option.label == label) {
        Some(option) => (option.weight, format!("selected '{}'", option.label)),
        None => (0, format!("'{label}' is not an offered option")),
    }
}

/// Deterministic rubric for rewritten copy.
pub(crate) fn edit_rubric(task: &EditingTask, rewrite: &str) -> (u8, String) {
    let rewrite_words = words(rewrite);
    if rewrite_words.is_empty() {
        return (0, "blank rewrite".to_string());
    }

    let original_words = words(task.original);
    let rewrite_lower = normalized(&rewrite_words);
    let mut score = 0;
    let mut met = Vec::new();

    if rewrite_lower != normalized(&original_words) {
        score += CHANGED_POINTS;
        met.push("changed");
    }

    if rewrite_words.len() <= original_words.len() {
        score += CONCISE_POINTS;
        met.push("concise");
    }

    let shouting = rewrite_words
        .iter()
        .any(|word| word.chars().count() >= 3 && word.chars().all(|c| c.is_ascii_uppercase()));
    if !shouting {
        score += CALM_TONE_POINTS;
        met.push("calm tone");
    }

    let padded = format!(" {rewrite_lower} ");
    let uses_jargon = JARGON
        .iter()
        .any(|phrase| padded.contains(&format!(" {phrase} ")));
    if !uses_jargon {
        score += PLAIN_LANGUAGE_POINTS;
        met.push("plain language");
    }

    let has_action = rewrite_lower
        .split(' ')
        .any(|word| ACTION_VERBS.contains(&word));
    if has_action {
        score += ACTION_VERB_POINTS;
        met.push("action verb");
    }

    let notes = if met.is_empty() {
        "rewrite met no rubric criteria".to_string()
    } else {
        format!("rewrite met: {}", met.join(", "))
    };

    (score, notes)
}

fn words(text: &str) -> Vec<&str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|word| !word.is_empty())
        .collect()
}

fn normalized(words: &[&str]) -> String {
    words
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rounded mean per dimension. Dimensions without questions score zero.
pub(crate) fn dimension_scores(components: &[ScoreComponent]) -> BTreeMap<QuestionCategory, u8> {
    QuestionCategory::dimensions()
        .into_iter()
        .map(|dimension| {
            let scores: Vec<f32> = components
                .iter()
                .filter(|component| component.dimension == dimension)
                .map(|component| f32::from(component.score))
                .collect();
            let mean = if scores.is_empty() {
                0.0
            } else {
                scores.iter().sum::<f32>() / scores.len() as f32
            };
            (dimension, mean.round().clamp(0.0, 100.0) as u8)
        })
        .collect()
}
