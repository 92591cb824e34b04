use serde::{Deserialize, Serialize};

/// One entry of a form's submission listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Identifies the submission document, e.g. "uuid:85cb9aff-005e-4edd-9739-dc9c1a829c44".
    pub instance_id: String,

    /// The survey-service actor that submitted the form.
    pub submitter_id: i64,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub review_state: Option<String>,
}

impl Submission {
    pub fn new(instance_id: impl Into<String>, submitter_id: i64) -> Self {
        Self {
            instance_id: instance_id.into(),
            submitter_id,
            created_at: None,
            review_state: None,
        }
    }
}

/// Identifies one respondent's submission of one form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponseInput {
    pub project_id: i64,
    pub form_id: String,
    pub submitter_id: i64,
}

impl SurveyResponseInput {
    pub fn new(project_id: i64, form_id: impl Into<String>, submitter_id: i64) -> Self {
        Self {
            project_id,
            form_id: form_id.into(),
            submitter_id,
        }
    }
}

/// Whether a respondent has submitted a form, and whether the answers raise a red flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// No submission with an instance ID exists for the respondent.
    NotSubmitted,

    /// The respondent submitted the form.
    Submitted {
        instance_id: String,

        /// Set when the form's scoring asks for a follow-up service request.
        red_flag: bool,
    },
}

impl SubmissionStatus {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }

    pub fn is_red_flag(&self) -> bool {
        matches!(self, Self::Submitted { red_flag: true, .. })
    }
}
