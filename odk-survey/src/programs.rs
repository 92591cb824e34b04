use serde_json::Value;

use crate::{DecodeError, ReaderConfig};

/// Extract the program IDs a form is scoped to, using the default conventions.
///
/// See [`get_program_ids_with`].
pub fn get_program_ids(form: &Value) -> Result<Vec<String>, DecodeError> {
    get_program_ids_with(form, &ReaderConfig::default())
}

/// Extract the program IDs a form is scoped to.
///
/// The IDs live in a `setvalue` directive of the form's model, e.g.
/// `{"-ref": "/data/programs", "-value": "'id-1:id-2'"}`. Quotes are stripped
/// and the value is split on `:`.
///
/// `html`, `head` and `model` are mandatory. A missing or malformed directive,
/// or one that sets a different reference, means the form targets every
/// program and yields no IDs.
pub fn get_program_ids_with(form: &Value, config: &ReaderConfig) -> Result<Vec<String>, DecodeError> {
    let model = ["html", "head", "model"]
        .into_iter()
        .try_fold(form, |node, key| {
            node.get(key)
                .filter(|value| value.is_object())
                .ok_or(DecodeError::MissingFormKey { key })
        })?;

    let Some(setvalue) = model.get("setvalue").filter(|value| value.is_object()) else {
        return Ok(Vec::new());
    };

    if setvalue.get("-ref").and_then(Value::as_str) != Some(config.programs_ref.as_str()) {
        return Ok(Vec::new());
    }

    let Some(value) = setvalue.get("-value").and_then(Value::as_str) else {
        return Ok(Vec::new());
    };

    Ok(value.replace('\'', "").split(':').map(str::to_string).collect())
}
