use serde_json::{Map, Value};

use crate::{
    ReaderConfig, Submission, SubmissionStatus, SurveyError, SurveyResponse, SurveyResponseInput,
    SurveyService, get_form_response, get_program_ids_with,
};

/// Reads respondents' survey answers from a survey service.
pub struct SurveyResponseReader<S> {
    service: S,
    config: ReaderConfig,
}

impl<S: SurveyService> SurveyResponseReader<S> {
    /// Create a reader with the default XForm conventions.
    pub fn new(service: S) -> Self {
        Self::with_config(service, ReaderConfig::default())
    }

    pub fn with_config(service: S, config: ReaderConfig) -> Self {
        Self { service, config }
    }

    /// Fetch a respondent's submission and decode it against the form version it was made with.
    pub fn get_survey_response(
        &self,
        input: &SurveyResponseInput,
    ) -> Result<Vec<SurveyResponse>, SurveyError> {
        let instance_id = self
            .find_instance(input)?
            .ok_or_else(|| SurveyError::NotFound {
                project_id: input.project_id,
                form_id: input.form_id.clone(),
                submitter_id: input.submitter_id,
            })?;

        let data = self.submission_data(input, &instance_id)?;
        let context = format!("{}.{}.{}", input.project_id, input.form_id, instance_id);
        let version = data
            .get(&self.config.version_key)
            .and_then(Value::as_str)
            .ok_or_else(|| SurveyError::InvalidSubmission {
                key: self.config.version_key.clone(),
                context,
            })?;

        let form = self
            .service
            .form_document(input.project_id, &input.form_id, version)
            .map_err(SurveyError::service)?;

        get_form_response(&form, &data).map_err(|source| {
            let form = format!("{}-{}-{}", input.project_id, input.form_id, version);
            tracing::error!(%instance_id, %form, error = %source, "failed to decode survey response");
            SurveyError::Decode {
                instance_id,
                form,
                source,
            }
        })
    }

    /// Check whether a respondent submitted a form and whether the answers raise a red flag.
    ///
    /// Recording the submission and opening a service request for red flags is
    /// left to the caller.
    pub fn verify_submission(
        &self,
        input: &SurveyResponseInput,
    ) -> Result<SubmissionStatus, SurveyError> {
        let Some(instance_id) = self.find_instance(input)? else {
            return Ok(SubmissionStatus::NotSubmitted);
        };

        let data = self.submission_data(input, &instance_id)?;
        let red_flag = match data.get(&self.config.alert_field).and_then(Value::as_str) {
            Some(raw) => parse_bool(raw).ok_or_else(|| SurveyError::InvalidAlert(raw.to_string()))?,
            None => false,
        };

        Ok(SubmissionStatus::Submitted {
            instance_id,
            red_flag,
        })
    }

    /// Fetch one form version and extract the program IDs it is scoped to.
    pub fn get_program_ids(
        &self,
        project_id: i64,
        form_id: &str,
        version: &str,
    ) -> Result<Vec<String>, SurveyError> {
        let form = self
            .service
            .form_document(project_id, form_id, version)
            .map_err(SurveyError::service)?;

        get_program_ids_with(&form, &self.config).map_err(|source| SurveyError::InvalidForm {
            form: format!("{project_id}-{form_id}-{version}"),
            source,
        })
    }

    /// The instance ID of the respondent's first submission, if it has one.
    fn find_instance(&self, input: &SurveyResponseInput) -> Result<Option<String>, SurveyError> {
        let submissions = self
            .service
            .submissions(input.project_id, &input.form_id)
            .map_err(SurveyError::service)?;

        let Some(Submission { instance_id, .. }) = submissions
            .into_iter()
            .find(|submission| submission.submitter_id == input.submitter_id)
        else {
            return Ok(None);
        };

        if instance_id.is_empty() {
            tracing::warn!(
                project_id = input.project_id,
                form_id = %input.form_id,
                submitter_id = input.submitter_id,
                "submission without an instance ID"
            );
            return Ok(None);
        }
        Ok(Some(instance_id))
    }

    fn submission_data(
        &self,
        input: &SurveyResponseInput,
        instance_id: &str,
    ) -> Result<Map<String, Value>, SurveyError> {
        let document = self
            .service
            .submission_document(input.project_id, &input.form_id, instance_id)
            .map_err(SurveyError::service)?;

        match document {
            Value::Object(mut envelope) => match envelope.remove("data") {
                Some(Value::Object(data)) => Ok(data),
                _ => Err(missing_data(input, instance_id)),
            },
            _ => Err(missing_data(input, instance_id)),
        }
    }
}

fn missing_data(input: &SurveyResponseInput, instance_id: &str) -> SurveyError {
    SurveyError::InvalidSubmission {
        key: "data".to_string(),
        context: format!("{}.{}.{}", input.project_id, input.form_id, instance_id),
    }
}

/// Parse the boolean spellings survey tools emit for toggles.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
