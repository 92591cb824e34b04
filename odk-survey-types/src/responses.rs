use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::QuestionKind;

/// One decoded question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    /// The question text.
    pub question: String,

    pub question_type: QuestionKind,

    /// One entry for single-choice and single-input questions, any number for multiple-choice.
    pub answer: Vec<String>,
}

impl SurveyResponse {
    pub fn new(question: impl Into<String>, question_type: QuestionKind, answer: Vec<String>) -> Self {
        Self {
            question: question.into(),
            question_type,
            answer,
        }
    }
}

/// The string answers of one submission, keyed by question identifier.
///
/// Built from the raw submission data; entries whose value is not a string
/// (nested groups, metadata objects) are not answers and are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submissions {
    values: HashMap<String, String>,
}

impl Submissions {
    /// Create an empty submission lookup.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Collect the string-valued entries of raw submission data.
    pub fn from_data(data: &Map<String, Value>) -> Self {
        data.iter()
            .filter_map(|(key, value)| value.as_str().map(|v| (key.clone(), v.to_string())))
            .collect()
    }

    /// Insert an answer for a question identifier.
    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.values.insert(question_id.into(), value.into());
    }

    /// Get the raw answer for a question identifier.
    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.values.get(question_id).map(String::as_str)
    }

    /// Get the raw answer, treating an unanswered question as an empty string.
    pub fn value_of(&self, question_id: &str) -> &str {
        self.get(question_id).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, String)> for Submissions {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
