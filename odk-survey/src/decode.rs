use serde_json::{Map, Value};

use crate::{DecodeError, FormBody, Question, QuestionKind, Submissions, SurveyResponse};

/// Compose the responses to a form from one submission.
///
/// Responses are grouped single choice, then multiple choice, then single
/// input, each group in form order. A form that omits a group contributes
/// nothing for it; a malformed question in any group fails the whole call.
pub fn get_form_response(
    form: &Value,
    submission_data: &Map<String, Value>,
) -> Result<Vec<SurveyResponse>, DecodeError> {
    let body = FormBody::from_form(form)?;
    let submissions = Submissions::from_data(submission_data);

    let mut responses = Vec::new();
    for kind in QuestionKind::ALL {
        if let Some(questions) = body.group(kind) {
            responses.extend(responses_for(questions, &submissions));
        }
    }
    Ok(responses)
}

/// Decode the responses to a `select1` group.
pub fn get_single_choice_responses(
    questions: &[Value],
    submission_data: &Map<String, Value>,
) -> Result<Vec<SurveyResponse>, DecodeError> {
    decode_group(QuestionKind::SingleChoice, questions, submission_data)
}

/// Decode the responses to a `select` group.
pub fn get_multi_choice_responses(
    questions: &[Value],
    submission_data: &Map<String, Value>,
) -> Result<Vec<SurveyResponse>, DecodeError> {
    decode_group(QuestionKind::MultipleChoice, questions, submission_data)
}

/// Decode the responses to an `input` group.
pub fn get_single_input_responses(
    questions: &[Value],
    submission_data: &Map<String, Value>,
) -> Result<Vec<SurveyResponse>, DecodeError> {
    decode_group(QuestionKind::SingleInput, questions, submission_data)
}

/// Locations are relative to the group element, since the slice may not come from a form body.
fn decode_group(
    kind: QuestionKind,
    nodes: &[Value],
    submission_data: &Map<String, Value>,
) -> Result<Vec<SurveyResponse>, DecodeError> {
    let questions = Question::from_group(kind, nodes, kind.element())?;
    let submissions = Submissions::from_data(submission_data);
    Ok(responses_for(&questions, &submissions))
}

/// Resolve already-decoded questions against a submission.
pub fn responses_for(questions: &[Question], submissions: &Submissions) -> Vec<SurveyResponse> {
    questions
        .iter()
        .filter_map(|question| resolve(question, submissions))
        .collect()
}

fn resolve(question: &Question, submissions: &Submissions) -> Option<SurveyResponse> {
    let raw = submissions.value_of(question.id());

    let answer = match question.kind() {
        QuestionKind::SingleChoice => {
            let choice = question.choices().label_for(raw).unwrap_or_default();
            if choice.trim().is_empty() {
                tracing::debug!(question = question.id(), "skipping unanswered single choice question");
                return None;
            }
            vec![choice.to_string()]
        }
        // Multiple choice answers are reported even when no code resolves.
        QuestionKind::MultipleChoice => raw
            .split(' ')
            .map(|code| question.choices().label_for(code).unwrap_or_default().to_string())
            .collect(),
        QuestionKind::SingleInput => {
            if raw.trim().is_empty() {
                tracing::debug!(question = question.id(), "skipping unanswered input question");
                return None;
            }
            vec![raw.to_string()]
        }
    };

    Some(SurveyResponse::new(question.label(), question.kind(), answer))
}
