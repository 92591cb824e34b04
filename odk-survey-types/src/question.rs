use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{DecodeError, ResponsePath};

/// The kind of question, determined by the XForm body element it was declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionKind {
    /// Pick one choice (`select1`).
    SingleChoice,

    /// Pick any number of choices (`select`).
    MultipleChoice,

    /// Free-text input (`input`).
    SingleInput,
}

impl QuestionKind {
    /// All kinds, in the order their responses are composed.
    pub const ALL: [QuestionKind; 3] = [Self::SingleChoice, Self::MultipleChoice, Self::SingleInput];

    /// The XForm body element holding questions of this kind.
    pub fn element(&self) -> &'static str {
        match self {
            Self::SingleChoice => "select1",
            Self::MultipleChoice => "select",
            Self::SingleInput => "input",
        }
    }

    /// Check if questions of this kind carry a choice vocabulary.
    pub fn has_choices(&self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultipleChoice)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SingleChoice => "single choice",
            Self::MultipleChoice => "multiple choice",
            Self::SingleInput => "single input",
        };
        f.write_str(name)
    }
}

/// One entry of a question's choice vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// The stored code, e.g. "1".
    pub value: String,

    /// The human-readable text, e.g. "Yes".
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The declared choices of a `select`/`select1` question, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choices {
    items: Vec<Choice>,
}

impl Choices {
    pub fn new(items: Vec<Choice>) -> Self {
        Self { items }
    }

    /// Look up the label for a stored code.
    ///
    /// If a code is declared twice the later declaration wins.
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.items
            .iter()
            .rev()
            .find(|choice| choice.value == value)
            .map(|choice| choice.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Decode the `item` array of a question node.
    fn from_items(
        kind: QuestionKind,
        items: &[Value],
        location: &str,
    ) -> Result<Self, DecodeError> {
        let mut choices = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let item_location = format!("{location}.item[{index}]");
            let value = string_field(item, "value").ok_or_else(|| DecodeError::InvalidChoice {
                kind,
                location: item_location.clone(),
                field: "value",
            })?;
            let label = string_field(item, "label").ok_or(DecodeError::InvalidChoice {
                kind,
                location: item_location,
                field: "label",
            })?;
            choices.push(Choice::new(value, label));
        }
        Ok(Self::new(choices))
    }
}

/// A single validated question from a form body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The XForm reference of this question's answer.
    path: ResponsePath,

    /// The question text.
    label: String,

    kind: QuestionKind,

    /// Empty for `SingleInput` questions.
    choices: Choices,
}

impl Question {
    /// Create a new question.
    pub fn new(
        path: impl Into<ResponsePath>,
        label: impl Into<String>,
        kind: QuestionKind,
        choices: Choices,
    ) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            kind,
            choices,
        }
    }

    /// The key this question's answer is stored under in a submission.
    pub fn id(&self) -> &str {
        self.path.question_id()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn choices(&self) -> &Choices {
        &self.choices
    }

    /// Decode one question node.
    ///
    /// Returns `Ok(None)` for an `input` node without a string `label`: such
    /// questions are dropped, while a choice question without one is malformed.
    pub fn from_node(
        kind: QuestionKind,
        node: &Value,
        location: &str,
    ) -> Result<Option<Self>, DecodeError> {
        if !node.is_object() {
            return Err(DecodeError::InvalidQuestion {
                kind,
                location: location.to_string(),
                node: node.to_string(),
            });
        }

        let reference = string_field(node, "-ref").ok_or_else(|| missing(kind, location, "ref"))?;

        let Some(label) = string_field(node, "label") else {
            if kind.has_choices() {
                return Err(missing(kind, location, "label"));
            }
            tracing::debug!(%location, reference, "skipping input question without a label");
            return Ok(None);
        };

        let choices = if kind.has_choices() {
            let items = node
                .get("item")
                .and_then(Value::as_array)
                .ok_or_else(|| missing(kind, location, "item"))?;
            Choices::from_items(kind, items, location)?
        } else {
            Choices::default()
        };

        Ok(Some(Self::new(reference, label, kind, choices)))
    }

    /// Decode every node of one body group, failing on the first malformed node.
    pub fn from_group(
        kind: QuestionKind,
        nodes: &[Value],
        location: &str,
    ) -> Result<Vec<Self>, DecodeError> {
        let mut questions = Vec::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            let node_location = format!("{location}[{index}]");
            if let Some(question) = Self::from_node(kind, node, &node_location)? {
                questions.push(question);
            }
        }
        Ok(questions)
    }
}

fn string_field<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    node.get(key).and_then(Value::as_str)
}

fn missing(kind: QuestionKind, location: &str, field: &'static str) -> DecodeError {
    DecodeError::MissingQuestionField {
        kind,
        location: location.to_string(),
        field,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn yes_no(reference: &str) -> Value {
        json!({
            "-ref": reference,
            "label": "Do you smoke?",
            "item": [
                { "value": "1", "label": "Yes" },
                { "value": "2", "label": "No" }
            ]
        })
    }

    #[test]
    fn decodes_choice_question() {
        let question = Question::from_node(QuestionKind::SingleChoice, &yes_no("/data/smoker"), "q")
            .unwrap()
            .unwrap();

        assert_eq!(question.id(), "smoker");
        assert_eq!(question.label(), "Do you smoke?");
        assert_eq!(question.choices().len(), 2);
        assert_eq!(question.choices().label_for("2"), Some("No"));
        assert_eq!(question.choices().label_for("3"), None);
    }

    #[test]
    fn later_duplicate_choice_wins() {
        let choices = Choices::new(vec![Choice::new("1", "Yes"), Choice::new("1", "Yep")]);
        assert_eq!(choices.label_for("1"), Some("Yep"));
    }

    #[test]
    fn non_object_node_is_invalid() {
        let err = Question::from_node(QuestionKind::SingleChoice, &json!("oops"), "html.body.select1[0]")
            .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidQuestion { .. }));
        assert_eq!(
            err.to_string(),
            "invalid single choice question at html.body.select1[0]: \"oops\""
        );
    }

    #[test]
    fn missing_ref_is_fatal() {
        let node = json!({ "label": "Q", "item": [] });
        let err = Question::from_node(QuestionKind::SingleInput, &node, "q").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MissingQuestionField { field: "ref", .. }
        ));
    }

    #[test]
    fn missing_label_is_fatal_for_choices() {
        let node = json!({ "-ref": "/data/q1", "item": [] });
        for kind in [QuestionKind::SingleChoice, QuestionKind::MultipleChoice] {
            let err = Question::from_node(kind, &node, "q").unwrap_err();
            assert!(matches!(
                err,
                DecodeError::MissingQuestionField { field: "label", .. }
            ));
        }
    }

    #[test]
    fn missing_label_skips_input() {
        let node = json!({ "-ref": "/data/q1" });
        let question = Question::from_node(QuestionKind::SingleInput, &node, "q").unwrap();
        assert!(question.is_none());
    }

    #[test]
    fn non_string_label_skips_input() {
        let node = json!({ "-ref": "/data/q1", "label": { "-ref": "jr:itext('q1')" } });
        let question = Question::from_node(QuestionKind::SingleInput, &node, "q").unwrap();
        assert!(question.is_none());
    }

    #[test]
    fn missing_items_is_fatal() {
        let node = json!({ "-ref": "/data/q1", "label": "Q1" });
        let err = Question::from_node(QuestionKind::SingleChoice, &node, "q").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MissingQuestionField { field: "item", .. }
        ));
    }

    #[test]
    fn item_without_label_is_fatal() {
        let node = json!({ "-ref": "/data/q1", "label": "Q1", "item": [{ "value": "1" }] });
        let err = Question::from_node(QuestionKind::MultipleChoice, &node, "q").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidChoice {
                kind: QuestionKind::MultipleChoice,
                location: "q.item[0]".to_string(),
                field: "label",
            }
        );
    }

    #[test]
    fn item_with_numeric_value_is_fatal() {
        let node = json!({ "-ref": "/data/q1", "label": "Q1", "item": [{ "value": 1, "label": "Yes" }] });
        let err = Question::from_node(QuestionKind::SingleChoice, &node, "q").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidChoice { field: "value", .. }));
    }

    #[test]
    fn non_object_item_is_fatal() {
        let nodes = vec![json!({ "-ref": "/data/q1", "label": "Q1", "item": ["x"] })];
        let err = Question::from_group(QuestionKind::SingleChoice, &nodes, "html.body.select1").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidChoice {
                kind: QuestionKind::SingleChoice,
                location: "html.body.select1[0].item[0]".to_string(),
                field: "value",
            }
        );
    }

    #[test]
    fn group_keeps_order_and_drops_unlabelled_inputs() {
        let nodes = vec![
            json!({ "-ref": "/data/name", "label": "Name" }),
            json!({ "-ref": "/data/note" }),
            json!({ "-ref": "/data/town", "label": "Town" }),
        ];
        let questions = Question::from_group(QuestionKind::SingleInput, &nodes, "html.body.input").unwrap();
        let ids: Vec<_> = questions.iter().map(Question::id).collect();
        assert_eq!(ids, vec!["name", "town"]);
    }

    #[test]
    fn group_error_names_the_node() {
        let nodes = vec![yes_no("/data/q1"), json!({ "-ref": "/data/q2", "label": "Q2" })];
        let err = Question::from_group(QuestionKind::SingleChoice, &nodes, "html.body.select1").unwrap_err();
        assert_eq!(err.location(), Some("html.body.select1[1]"));
    }

    #[test]
    fn kind_serializes_to_wire_name() {
        assert_eq!(
            serde_json::to_value(QuestionKind::MultipleChoice).unwrap(),
            json!("MULTIPLE_CHOICE")
        );
        assert_eq!(QuestionKind::SingleChoice.element(), "select1");
    }
}
