use functionsdk::{ChatCompleteMessage, ClientOptions, DEFAULT_BASE_URL};

#[test]
fn test_default_base_url() {
    assert_eq!(DEFAULT_BASE_URL, "https://api.function.network");
    let options = ClientOptions::new("fxn-key");
    assert_eq!(options.api_key, "fxn-key");
    assert_eq!(options.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_base_url_builder() {
    let options = ClientOptions::new("fxn-key").base_url("http://localhost:50051");
    assert_eq!(options.base_url, "http://localhost:50051");
}

#[test]
fn test_debug_redacts_api_key() {
    let debug = format!("{:?}", ClientOptions::new("fxn-super-secret"));
    assert!(!debug.contains("fxn-super-secret"));
    assert!(debug.contains("redacted"));
    assert!(debug.contains(DEFAULT_BASE_URL));
}

#[test]
fn test_debug_marks_empty_key() {
    let debug = format!("{:?}", ClientOptions::new(""));
    assert!(debug.contains("<empty>"));
}

#[test]
fn test_deserialize_defaults_base_url() {
    let options: ClientOptions = toml::from_str(r#"api_key = "fxn-from-file""#).unwrap();
    assert_eq!(options.api_key, "fxn-from-file");
    assert_eq!(options.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_deserialize_keeps_explicit_base_url() {
    let options: ClientOptions = toml::from_str(
        r#"
            api_key = "fxn-from-file"
            base_url = "http://localhost:50051/edge"
        "#,
    )
    .unwrap();
    assert_eq!(options.base_url, "http://localhost:50051/edge");
}

#[test]
fn test_deserialize_requires_api_key() {
    let result: Result<ClientOptions, _> = toml::from_str(r#"base_url = "http://localhost""#);
    assert!(result.is_err());
}

#[test]
fn test_message_constructors() {
    assert_eq!(ChatCompleteMessage::system("s").role, "system");
    assert_eq!(ChatCompleteMessage::user("u").role, "user");
    let assistant = ChatCompleteMessage::assistant("a");
    assert_eq!(assistant.role, "assistant");
    assert_eq!(assistant.content, "a");
    assert_eq!(ChatCompleteMessage::with_role("tool", "t").role, "tool");
}
