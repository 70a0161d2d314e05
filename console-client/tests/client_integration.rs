// console-client/tests/client_integration.rs

use console_client::{ClientConfig, ClientError};

#[tokio::test]
async fn test_client_creation() {
    let client = ClientConfig::new("http://localhost:8000").build();
    assert!(!client.is_logged_in());
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_token_attach_and_clear() {
    let mut client = ClientConfig::new("http://localhost:8000")
        .with_token("tok-1")
        .build();
    assert!(client.is_logged_in());
    assert_eq!(client.token(), Some("tok-1"));

    client.logout();
    assert!(!client.is_logged_in());
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_group_scoped_call_requires_group() {
    let client = ClientConfig::new("http://localhost:8000").build();
    let err = client.get_post("p-1").await.unwrap_err();
    assert!(matches!(err, ClientError::MissingGroup));
    assert_eq!(err.user_message(), "No group is configured");
}

#[test]
fn test_config_builder() {
    let config = ClientConfig::new("http://localhost:8000/")
        .with_group("g1")
        .with_token("tok")
        .with_timeout(5);
    assert_eq!(config.group_id.as_deref(), Some("g1"));
    assert_eq!(config.timeout, 5);

    let client = config.build();
    assert_eq!(client.token(), Some("tok"));
}
