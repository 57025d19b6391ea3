use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Question, QuestionId, QuestionKind, SCALE_MAX, SCALE_MIN};

/// A validated answer. The variant always matches the kind of its question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Answer {
    Scale(u8),
    Choice(String),
    Text(String),
}

/// Answer payload as it arrives from a front-end or an HTTP body, before it
/// has been checked against its question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Number(i64),
    Text(String),
}

impl From<i64> for RawAnswer {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawAnswer {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawAnswer {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("question {question_id} expects a {expected} answer")]
    KindMismatch {
        question_id: String,
        expected: &'static str,
    },
    #[error(
        "question {question_id} takes a value between {} and {}, got {value}",
        SCALE_MIN,
        SCALE_MAX
    )]
    ScaleOutOfRange { question_id: String, value: i64 },
    #[error("'{option}' is not one of the options offered by {question_id}")]
    UnknownOption { question_id: String, option: String },
}

impl Answer {
    /// Interpret a raw value against the question it answers.
    ///
    /// Scale questions accept numbers or numeric text; choice questions accept
    /// the exact label of an offered option; editing questions accept any text,
    /// including the empty string.
    pub fn interpret(question: &Question, raw: RawAnswer) -> Result<Self, AnswerError> {
        let mismatch = || AnswerError::KindMismatch {
            question_id: question.id.to_string(),
            expected: question.kind.label(),
        };

        let answer = match (&question.kind, raw) {
            (QuestionKind::Scale, RawAnswer::Number(value)) => scale_value(question, value)?,
            (QuestionKind::Scale, RawAnswer::Text(text)) => {
                let value = text.trim().parse::<i64>().map_err(|_| mismatch())?;
                scale_value(question, value)?
            }
            (QuestionKind::SingleChoice { .. }, RawAnswer::Text(label))
            | (QuestionKind::ScenarioChoice { .. }, RawAnswer::Text(label)) => Answer::Choice(label),
            (QuestionKind::FreeTextEdit { .. }, RawAnswer::Text(text)) => Answer::Text(text),
            _ => return Err(mismatch()),
        };

        answer.validate(question)?;
        Ok(answer)
    }

    /// Check that an already typed answer fits its question.
    pub fn validate(&self, question: &Question) -> Result<(), AnswerError> {
        match (&question.kind, self) {
            (QuestionKind::Scale, Answer::Scale(value)) => {
                if (SCALE_MIN..=SCALE_MAX).contains(value) {
                    Ok(())
                } else {
                    Err(AnswerError::ScaleOutOfRange {
                        question_id: question.id.to_string(),
                        value: i64::from(*value),
                    })
                }
            }
            (QuestionKind::SingleChoice { options }, Answer::Choice(label))
            | (QuestionKind::ScenarioChoice { options, .. }, Answer::Choice(label)) => {
                if options.iter().any(|option| option.label == label.as_str()) {
                    Ok(())
                } else {
                    Err(AnswerError::UnknownOption {
                        question_id: question.id.to_string(),
                        option: label.clone(),
                    })
                }
            }
            (QuestionKind::FreeTextEdit { .. }, Answer::Text(_)) => Ok(()),
            _ => Err(AnswerError::KindMismatch {
                question_id: question.id.to_string(),
                expected: question.kind.label(),
            }),
        }
    }

    pub fn display_value(&self) -> String {
        match self {
            Answer::Scale(value) => value.to_string(),
            Answer::Choice(text) | Answer::Text(text) => text.clone(),
        }
    }
}

fn scale_value(question: &Question, value: i64) -> Result<Answer, AnswerError> {
    u8::try_from(value)
        .ok()
        .filter(|value| (SCALE_MIN..=SCALE_MAX).contains(value))
        .map(Answer::Scale)
        .ok_or_else(|| AnswerError::ScaleOutOfRange {
            question_id: question.id.to_string(),
            value,
        })
}

/// Session-local answers keyed by question id.
///
/// Writes are upserts; an entry is never removed except by [`AnswerStore::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerStore {
    answers: BTreeMap<QuestionId, Answer>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret `raw` against `question` and store it.
    pub fn set(&mut self, question: &Question, raw: RawAnswer) -> Result<&Answer, AnswerError> {
        let answer = Answer::interpret(question, raw)?;
        Ok(self.upsert(question, answer))
    }

    /// Store an already typed answer after validating it.
    pub fn record(&mut self, question: &Question, answer: Answer) -> Result<&Answer, AnswerError> {
        answer.validate(question)?;
        Ok(self.upsert(question, answer))
    }

    fn upsert(&mut self, question: &Question, answer: Answer) -> &Answer {
        match self.answers.entry(question.question_id()) {
            Entry::Occupied(mut entry) => {
                entry.insert(answer);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(answer),
        }
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.get(question_id).is_some()
    }

    pub fn entries(&self) -> &BTreeMap<QuestionId, Answer> {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}
