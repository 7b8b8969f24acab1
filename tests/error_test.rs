use functionsdk::{FunctionError, Result};

#[test]
fn test_error_display() {
    let err = FunctionError::InvalidArgument("api_key must be specified".to_string());
    assert!(err.to_string().contains("api_key must be specified"));
}

#[test]
fn test_stream_empty_display() {
    assert!(FunctionError::StreamEmpty.to_string().contains("first chunk"));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(FunctionError::StreamEmpty)
    }
    assert!(returns_error().is_err());
}

#[test]
fn status_converts_to_remote_error() {
    let err: FunctionError = tonic::Status::permission_denied("bad key").into();
    assert!(matches!(err, FunctionError::Remote(_)));
    assert_eq!(err.code(), Some(tonic::Code::PermissionDenied));
    assert!(err.to_string().contains("bad key"));
}

// ============================================================================
// Transport fault classification
// ============================================================================

#[test]
fn transport_faults() {
    assert!(FunctionError::from(tonic::Status::unavailable("refused")).is_transport_fault());
    assert!(FunctionError::from(tonic::Status::deadline_exceeded("slow")).is_transport_fault());
    assert!(FunctionError::from(tonic::Status::cancelled("dropped")).is_transport_fault());
}

#[test]
fn application_faults() {
    assert!(!FunctionError::from(tonic::Status::not_found("model")).is_transport_fault());
    assert!(!FunctionError::from(tonic::Status::unauthenticated("key")).is_transport_fault());
    assert!(!FunctionError::from(tonic::Status::invalid_argument("size")).is_transport_fault());
    assert!(!FunctionError::InvalidArgument("x".into()).is_transport_fault());
    assert!(!FunctionError::StreamEmpty.is_transport_fault());
    assert!(!FunctionError::Configuration("x".into()).is_transport_fault());
}

#[test]
fn code_only_for_remote_errors() {
    assert_eq!(FunctionError::StreamEmpty.code(), None);
    assert_eq!(FunctionError::InvalidArgument("x".into()).code(), None);
}
