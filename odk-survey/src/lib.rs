//! # odk-survey
//!
//! Decode ODK survey submissions into human-readable question/answer pairs.
//!
//! A form definition (an XForm converted to JSON) declares its questions in
//! `html.body`, grouped by widget: `select1` (single choice), `select`
//! (multiple choice) and `input` (free text). A submission is a flat object
//! mapping each question's leaf reference to the raw answer.
//!
//! ## Usage
//!
//! ```rust
//! use odk_survey::{QuestionKind, get_form_response};
//! use serde_json::json;
//!
//! let form = json!({
//!     "html": {
//!         "body": {
//!             "select1": [{
//!                 "-ref": "/data/q1",
//!                 "label": "Q1",
//!                 "item": [
//!                     { "value": "1", "label": "Yes" },
//!                     { "value": "2", "label": "No" }
//!                 ]
//!             }]
//!         }
//!     }
//! });
//! let submission = json!({ "q1": "1" });
//!
//! let responses = get_form_response(&form, submission.as_object().unwrap()).unwrap();
//! assert_eq!(responses[0].question, "Q1");
//! assert_eq!(responses[0].question_type, QuestionKind::SingleChoice);
//! assert_eq!(responses[0].answer, vec!["Yes"]);
//! ```
//!
//! ## Answer rules
//!
//! - Single choice: the submitted code is mapped to its label; a question
//!   whose code maps to nothing (or to a blank label) is left out.
//! - Multiple choice: the submitted value is split on spaces and each code is
//!   mapped to its label, unknown codes becoming empty strings. These
//!   questions are always reported.
//! - Single input: the raw value is reported unless it is blank. Input
//!   questions without a label are left out.
//!
//! ## Services
//!
//! [`SurveyResponseReader`] fetches documents through a [`SurveyService`]
//! implementation. [`TestService`] serves documents from memory.

// Re-export all types from odk-survey-types
pub use odk_survey_types::*;

mod config;
pub use config::ReaderConfig;

mod decode;
pub use decode::{
    get_form_response, get_multi_choice_responses, get_single_choice_responses,
    get_single_input_responses, responses_for,
};

mod programs;
pub use programs::{get_program_ids, get_program_ids_with};

mod reader;
pub use reader::SurveyResponseReader;

// In-memory service for testing without a survey server
mod test_service;
pub use test_service::{TestService, TestServiceError};
