//! Core types for the odk-survey crate.
//!
//! This crate provides the typed model that ODK survey documents are decoded into:
//! - `FormBody` - The validated question groups of an XForm body
//! - `Question`, `QuestionKind` and `Choices` - Individual questions and their vocabulary
//! - `Submissions` and `ResponsePath` - Submitted answers and XForm references
//! - `SurveyResponse` - One decoded question/answer pair
//! - `SurveyService` trait - For fetching form and submission documents

mod response_path;
pub use response_path::ResponsePath;

mod responses;
pub use responses::{Submissions, SurveyResponse};

mod question;
pub use question::{Choice, Choices, Question, QuestionKind};

mod form_definition;
pub use form_definition::FormBody;

mod submission;
pub use submission::{Submission, SubmissionStatus, SurveyResponseInput};

mod error;
pub use error::{DecodeError, SurveyError};

mod traits;
pub use traits::SurveyService;
