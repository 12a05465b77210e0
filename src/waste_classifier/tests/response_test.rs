use crate::waste_classifier::interface::{CategoryProbability, ClassifyError};
use crate::waste_classifier::response::parse_response;

#[test]
fn test_parses_object_in_reply_order() {
    let response =
        parse_response(200, r#"{"trash": 0.18, "battery": 0.62, "glass": 0.2}"#).unwrap();

    let categories: Vec<&str> = response
        .entries()
        .iter()
        .map(|e| e.category.as_str())
        .collect();
    assert_eq!(categories, vec!["trash", "battery", "glass"]);
    assert_eq!(
        response.entries()[1],
        CategoryProbability {
            category: "battery".to_string(),
            probability: 0.62,
        }
    );
}

#[test]
fn test_integer_probabilities_are_accepted() {
    let response = parse_response(200, r#"{"paper": 1, "plastic": 0}"#).unwrap();

    assert_eq!(response.entries()[0].probability, 1.0);
    assert_eq!(response.entries()[1].probability, 0.0);
}

#[test]
fn test_any_2xx_status_is_success() {
    assert!(parse_response(201, r#"{"paper": 0.9}"#).is_ok());
    assert!(parse_response(299, r#"{"paper": 0.9}"#).is_ok());
}

#[test]
fn test_server_error_is_request_failure() {
    let result = parse_response(500, "Internal Server Error");

    assert_eq!(
        result.unwrap_err(),
        ClassifyError::ClassificationRequestFailed {
            status: 500,
            body: "Internal Server Error".to_string(),
        }
    );
}

#[test]
fn test_request_failure_message_shows_status_and_body() {
    let error = parse_response(422, "missing field img").unwrap_err();

    assert_eq!(error.to_string(), "Error 422: missing field img");
}

#[test]
fn test_redirect_status_is_request_failure_even_with_json_body() {
    let result = parse_response(304, r#"{"paper": 0.9}"#);

    assert!(matches!(
        result,
        Err(ClassifyError::ClassificationRequestFailed { status: 304, .. })
    ));
}

#[test]
fn test_null_body_is_malformed() {
    let result = parse_response(200, "null");

    assert!(matches!(
        result,
        Err(ClassifyError::MalformedResponse { .. })
    ));
}

#[test]
fn test_empty_object_is_malformed() {
    let result = parse_response(200, "{}");

    assert!(matches!(
        result,
        Err(ClassifyError::MalformedResponse { .. })
    ));
}

#[test]
fn test_invalid_json_is_malformed() {
    let result = parse_response(200, "<html>oops</html>");

    assert!(matches!(
        result,
        Err(ClassifyError::MalformedResponse { .. })
    ));
}

#[test]
fn test_array_body_is_malformed() {
    match parse_response(200, r#"[0.1, 0.9]"#) {
        Err(ClassifyError::MalformedResponse { reason }) => {
            assert!(reason.contains("expected a map"), "{}", reason);
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_non_numeric_probability_is_malformed() {
    match parse_response(200, r#"{"paper": "high"}"#) {
        Err(ClassifyError::MalformedResponse { reason }) => {
            assert!(reason.contains("\"paper\""), "{}", reason);
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}
