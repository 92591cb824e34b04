use serde_json::Value;

use crate::Submission;

/// Trait for survey services that store forms and their submissions.
///
/// Documents are returned in their XML-to-JSON converted shape: attributes
/// are keys prefixed with `-` and child elements are nested objects or arrays.
/// Transport, authentication and XML conversion belong to the implementation.
pub trait SurveyService {
    /// The error type for this service.
    type Error: Into<anyhow::Error>;

    /// List the submissions of a form.
    fn submissions(&self, project_id: i64, form_id: &str) -> Result<Vec<Submission>, Self::Error>;

    /// Fetch one submission document, e.g. `{"data": {"-version": "3", "q1": "1"}}`.
    fn submission_document(
        &self,
        project_id: i64,
        form_id: &str,
        instance_id: &str,
    ) -> Result<Value, Self::Error>;

    /// Fetch the form definition document for one form version.
    fn form_document(&self, project_id: i64, form_id: &str, version: &str) -> Result<Value, Self::Error>;
}
