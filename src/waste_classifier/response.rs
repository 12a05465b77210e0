use crate::waste_classifier::interface::{
    CategoryProbability, ClassificationResponse, ClassifyError,
};
use serde_json::{Map, Value};

fn malformed(reason: impl Into<String>) -> ClassifyError {
    ClassifyError::MalformedResponse {
        reason: reason.into(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Turns a raw HTTP reply into a response, or the failure the user should see.
pub fn parse_response(status: u16, body: &str) -> Result<ClassificationResponse, ClassifyError> {
    if !(200..300).contains(&status) {
        return Err(ClassifyError::ClassificationRequestFailed {
            status,
            body: body.to_string(),
        });
    }

    let object: Map<String, Value> =
        serde_json::from_str(body).map_err(|e| malformed(e.to_string()))?;

    if object.is_empty() {
        return Err(malformed("the JSON object has no categories"));
    }

    let mut entries = Vec::with_capacity(object.len());
    for (category, value) in object {
        let probability = value.as_f64().ok_or_else(|| {
            malformed(format!(
                "probability for {:?} is {}, expected a number",
                category,
                kind(&value)
            ))
        })?;
        entries.push(CategoryProbability {
            category,
            probability,
        });
    }

    Ok(ClassificationResponse::new(entries))
}
