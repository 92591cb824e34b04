use crate::QuestionKind;

/// Error type for decoding form documents.
///
/// Every variant names the node that failed validation so callers can tell a
/// malformed form apart from an unanswered question without matching on strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// One of the mandatory document levels (`html`, `head`, `model`, `body`) is absent or not an object.
    #[error("invalid form: expected a '{key}' key")]
    MissingFormKey { key: &'static str },

    /// A question node is not an object.
    #[error("invalid {kind} question at {location}: {node}")]
    InvalidQuestion {
        kind: QuestionKind,
        location: String,
        node: String,
    },

    /// A question node lacks a required field (`-ref`, `label` or `item`).
    #[error("invalid question: expected a question '{field}' key at {location}")]
    MissingQuestionField {
        kind: QuestionKind,
        location: String,
        field: &'static str,
    },

    /// A choice item lacks a string `value` or `label`.
    #[error("invalid {kind}: expected a '{field}' key at {location}")]
    InvalidChoice {
        kind: QuestionKind,
        location: String,
        field: &'static str,
    },
}

impl DecodeError {
    /// The document location of the offending node, if the error concerns one.
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::MissingFormKey { .. } => None,
            Self::InvalidQuestion { location, .. }
            | Self::MissingQuestionField { location, .. }
            | Self::InvalidChoice { location, .. } => Some(location),
        }
    }
}

/// Error type for reading survey responses from a survey service.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// The submitter has no submission for the form.
    #[error("survey response not found: project {project_id}, form {form_id}, submitter {submitter_id}")]
    NotFound {
        project_id: i64,
        form_id: String,
        submitter_id: i64,
    },

    /// The submission document does not have the expected envelope.
    #[error("invalid submission, expected a '{key}' key: {context}")]
    InvalidSubmission { key: String, context: String },

    /// The red-flag field holds something other than a boolean.
    #[error("invalid alert value: {0:?}")]
    InvalidAlert(String),

    /// The form document could not be decoded against the submission.
    #[error("failed to get responses for submission {instance_id}, form {form}: {source}")]
    Decode {
        instance_id: String,
        form: String,
        #[source]
        source: DecodeError,
    },

    /// The form document is malformed.
    #[error("invalid form {form}: {source}")]
    InvalidForm {
        form: String,
        #[source]
        source: DecodeError,
    },

    /// Survey service failure (transport, unknown form, etc.)
    #[error("Survey service error: {0}")]
    Service(#[from] anyhow::Error),
}

impl SurveyError {
    /// Create a service error from any error type.
    pub fn service(err: impl Into<anyhow::Error>) -> Self {
        Self::Service(err.into())
    }

    /// Check if this error means the submitter has no submission.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_key_message() {
        let err = DecodeError::MissingFormKey { key: "body" };
        assert_eq!(err.to_string(), "invalid form: expected a 'body' key");
        assert_eq!(err.location(), None);
    }

    #[test]
    fn question_field_message() {
        let err = DecodeError::MissingQuestionField {
            kind: QuestionKind::SingleChoice,
            location: "html.body.select1[0]".to_string(),
            field: "ref",
        };
        assert_eq!(
            err.to_string(),
            "invalid question: expected a question 'ref' key at html.body.select1[0]"
        );
        assert_eq!(err.location(), Some("html.body.select1[0]"));
    }

    #[test]
    fn service_error_wraps_anyhow() {
        let err = SurveyError::service(anyhow::anyhow!("connection refused"));
        assert!(matches!(err, SurveyError::Service(_)));
        assert!(!err.is_not_found());
    }
}
