use sigma_core::errors::{ErrorInfo, SigmaError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("subset", "{4}")
        .with_context("universe", "{1, 2, 3}")
}

#[test]
fn validation_error_surface() {
    let err = SigmaError::Validation(sample_info("subset-not-in-universe", "not a subset"));
    assert_eq!(err.code(), "subset-not-in-universe");
    assert!(err.info().context.contains_key("subset"));
    assert!(err.info().context.contains_key("universe"));
}

#[test]
fn type_validation_error_surface() {
    let err = SigmaError::TypeValidation(ErrorInfo::new("empty-family", "no members"));
    assert_eq!(err.info().code, "empty-family");
    assert!(err.info().context.is_empty());
}

#[test]
fn limit_error_surface() {
    let err = SigmaError::Limit(
        ErrorInfo::new("too-many-classes", "enumeration too large").with_hint("raise max_classes"),
    );
    assert_eq!(err.info().hint.as_deref(), Some("raise max_classes"));
}

#[test]
fn display_includes_code_and_context() {
    let err = SigmaError::Validation(sample_info("subset-not-in-universe", "not a subset"));
    let rendered = err.to_string();
    assert!(rendered.starts_with("validation error: not a subset"));
    assert!(rendered.contains("code: subset-not-in-universe"));
    assert!(rendered.contains("subset={4}"));
}

#[test]
fn errors_round_trip_through_json() {
    let err = SigmaError::Serde(ErrorInfo::new("json-deserialize", "bad input"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Serde\""));
    let decoded: SigmaError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
