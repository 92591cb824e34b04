use serde_json::Value;

use crate::{DecodeError, Question, QuestionKind};

/// The question groups declared in a form's `html.body`.
///
/// A group whose element is absent, or is not an array, was not used by the
/// form and decodes to `None`. A present group is validated node by node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    single_choice: Option<Vec<Question>>,
    multiple_choice: Option<Vec<Question>>,
    single_input: Option<Vec<Question>>,
}

impl FormBody {
    /// Decode the body of a full form document.
    ///
    /// Groups are validated in composition order (`select1`, `select`, `input`)
    /// and the first malformed node aborts the decode.
    pub fn from_form(form: &Value) -> Result<Self, DecodeError> {
        let html = object_at(form, "html")?;
        let body = object_at(html, "body")?;

        let mut decoded = Self::default();
        for kind in QuestionKind::ALL {
            let Some(nodes) = body.get(kind.element()).and_then(Value::as_array) else {
                continue;
            };
            let location = format!("html.body.{}", kind.element());
            let questions = Question::from_group(kind, nodes, &location)?;
            tracing::trace!(%kind, count = questions.len(), "decoded question group");
            *decoded.group_mut(kind) = Some(questions);
        }
        Ok(decoded)
    }

    /// Get the questions of one kind, or `None` if the form does not use it.
    pub fn group(&self, kind: QuestionKind) -> Option<&[Question]> {
        match kind {
            QuestionKind::SingleChoice => self.single_choice.as_deref(),
            QuestionKind::MultipleChoice => self.multiple_choice.as_deref(),
            QuestionKind::SingleInput => self.single_input.as_deref(),
        }
    }

    fn group_mut(&mut self, kind: QuestionKind) -> &mut Option<Vec<Question>> {
        match kind {
            QuestionKind::SingleChoice => &mut self.single_choice,
            QuestionKind::MultipleChoice => &mut self.multiple_choice,
            QuestionKind::SingleInput => &mut self.single_input,
        }
    }
}

/// Look up a mandatory object-valued key of the form document.
fn object_at<'a>(parent: &'a Value, key: &'static str) -> Result<&'a Value, DecodeError> {
    parent
        .get(key)
        .filter(|value| value.is_object())
        .ok_or(DecodeError::MissingFormKey { key })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_html_is_fatal() {
        let err = FormBody::from_form(&json!({ "h:html": {} })).unwrap_err();
        assert_eq!(err, DecodeError::MissingFormKey { key: "html" });
    }

    #[test]
    fn non_object_body_is_fatal() {
        let err = FormBody::from_form(&json!({ "html": { "body": [] } })).unwrap_err();
        assert_eq!(err, DecodeError::MissingFormKey { key: "body" });
    }

    #[test]
    fn absent_and_mistyped_groups_are_unused() {
        let form = json!({
            "html": {
                "body": {
                    "select": { "-ref": "/data/q1" },
                    "input": [{ "-ref": "/data/name", "label": "Name" }]
                }
            }
        });
        let body = FormBody::from_form(&form).unwrap();

        assert!(body.group(QuestionKind::SingleChoice).is_none());
        assert!(body.group(QuestionKind::MultipleChoice).is_none());
        assert_eq!(body.group(QuestionKind::SingleInput).map(<[_]>::len), Some(1));
    }

    #[test]
    fn groups_are_decoded_by_element() {
        let form = json!({
            "html": {
                "body": {
                    "input": [{ "-ref": "/data/name", "label": "Name" }],
                    "select": [{ "-ref": "/data/fruit", "label": "Fruit", "item": [] }],
                    "select1": [{ "-ref": "/data/smoker", "label": "Smoker", "item": [] }]
                }
            }
        });
        let body = FormBody::from_form(&form).unwrap();
        let ids: Vec<_> = QuestionKind::ALL
            .into_iter()
            .filter_map(|kind| body.group(kind))
            .flatten()
            .map(Question::id)
            .collect();
        assert_eq!(ids, vec!["smoker", "fruit", "name"]);
    }

    #[test]
    fn empty_body() {
        let body = FormBody::from_form(&json!({ "html": { "body": {} } })).unwrap();
        assert_eq!(body, FormBody::default());
    }

    #[test]
    fn first_malformed_group_is_reported() {
        let form = json!({
            "html": {
                "body": {
                    "input": [{ "label": "No ref" }],
                    "select1": [{ "-ref": "/data/q1", "label": "Q1" }]
                }
            }
        });
        let err = FormBody::from_form(&form).unwrap_err();
        assert_eq!(err.location(), Some("html.body.select1[0]"));
    }
}
