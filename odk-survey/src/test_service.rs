//! In-memory survey service for testing without a survey server.
//!
//! `TestService` serves pre-defined submission listings and documents, so
//! [`SurveyResponseReader`](crate::SurveyResponseReader) can be exercised
//! programmatically.
//!
//! # Example
//!
//! ```rust
//! use odk_survey::{Submission, SurveyResponseInput, SurveyResponseReader, TestService};
//! use serde_json::json;
//!
//! let service = TestService::new()
//!     .with_submission(1, "phq9", Submission::new("uuid:1", 42))
//!     .with_submission_document(1, "phq9", "uuid:1", json!({
//!         "data": { "-version": "2", "q1": "hello" }
//!     }))
//!     .with_form_document(1, "phq9", "2", json!({
//!         "html": { "body": { "input": [{ "-ref": "/data/q1", "label": "Greeting" }] } }
//!     }));
//!
//! let reader = SurveyResponseReader::new(service);
//! let responses = reader
//!     .get_survey_response(&SurveyResponseInput::new(1, "phq9", 42))
//!     .unwrap();
//! assert_eq!(responses[0].answer, vec!["hello"]);
//! ```

use std::collections::HashMap;

use serde_json::Value;

use crate::{Submission, SurveyService};

/// A survey service that returns pre-configured documents.
#[derive(Debug, Clone, Default)]
pub struct TestService {
    submissions: HashMap<(i64, String), Vec<Submission>>,
    submission_documents: HashMap<(i64, String, String), Value>,
    form_documents: HashMap<(i64, String, String), Value>,
    unavailable: bool,
}

/// Error type for TestService.
#[derive(Debug, thiserror::Error)]
pub enum TestServiceError {
    #[error("No such document: {0}")]
    NotFound(String),

    #[error("Survey service unavailable")]
    Unavailable,
}

impl TestService {
    /// Create a new empty test service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service that fails every request.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Add an entry to a form's submission listing.
    pub fn with_submission(mut self, project_id: i64, form_id: impl Into<String>, submission: Submission) -> Self {
        self.submissions
            .entry((project_id, form_id.into()))
            .or_default()
            .push(submission);
        self
    }

    /// Add a submission document for an instance ID.
    pub fn with_submission_document(
        mut self,
        project_id: i64,
        form_id: impl Into<String>,
        instance_id: impl Into<String>,
        document: Value,
    ) -> Self {
        self.submission_documents
            .insert((project_id, form_id.into(), instance_id.into()), document);
        self
    }

    /// Add a form definition document for a form version.
    pub fn with_form_document(
        mut self,
        project_id: i64,
        form_id: impl Into<String>,
        version: impl Into<String>,
        document: Value,
    ) -> Self {
        self.form_documents
            .insert((project_id, form_id.into(), version.into()), document);
        self
    }

    fn check_available(&self) -> Result<(), TestServiceError> {
        if self.unavailable {
            Err(TestServiceError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl SurveyService for TestService {
    type Error = TestServiceError;

    fn submissions(&self, project_id: i64, form_id: &str) -> Result<Vec<Submission>, Self::Error> {
        self.check_available()?;
        // An unknown form simply has no submissions yet.
        Ok(self
            .submissions
            .get(&(project_id, form_id.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn submission_document(
        &self,
        project_id: i64,
        form_id: &str,
        instance_id: &str,
    ) -> Result<Value, Self::Error> {
        self.check_available()?;
        self.submission_documents
            .get(&(project_id, form_id.to_string(), instance_id.to_string()))
            .cloned()
            .ok_or_else(|| {
                TestServiceError::NotFound(format!("submission {project_id}/{form_id}/{instance_id}"))
            })
    }

    fn form_document(&self, project_id: i64, form_id: &str, version: &str) -> Result<Value, Self::Error> {
        self.check_available()?;
        self.form_documents
            .get(&(project_id, form_id.to_string(), version.to_string()))
            .cloned()
            .ok_or_else(|| TestServiceError::NotFound(format!("form {project_id}/{form_id}@{version}")))
    }
}
