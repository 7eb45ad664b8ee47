use std::{collections::HashMap, time::Duration};

use api::{AppConfig, AppError, serve};

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k: &str| map.get(k).cloned()
}

#[test]
fn missing_api_key_fails_configuration() {
    let err = AppConfig::from_lookup(vars(&[("CONTENT_SOURCE", "remote_json")])).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
    assert!(err.to_string().contains("GROQ_API_KEY"));

    let err = AppConfig::from_lookup(vars(&[("LLM_PROVIDER", "openai")])).unwrap_err();
    assert!(err.to_string().contains("OPENAI_API_KEY"));
}

#[tokio::test]
async fn missing_document_fails_before_binding() {
    let reserved = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = reserved.local_addr().unwrap().to_string();
    drop(reserved);

    let cfg = AppConfig::from_lookup(vars(&[
        ("GROQ_API_KEY", "gsk_test"),
        ("EMBEDDING_PROVIDER", "remote"),
        ("EMBEDDING_ENDPOINT", "http://127.0.0.1:9"),
        ("EMBEDDING_API_KEY", "sk_test"),
        ("SOURCE_DOC_PATH", "/definitely/not/here/Resume.pdf"),
        ("API_ADDRESS", addr.as_str()),
    ]))
    .unwrap();

    let result = tokio::time::timeout(Duration::from_secs(10), serve(cfg, async {}))
        .await
        .unwrap();
    assert!(matches!(result, Err(AppError::Rag(_))));
    assert!(std::net::TcpListener::bind(&addr).is_ok());
}

#[tokio::test]
async fn remote_mode_serves_until_shutdown() {
    let cfg = AppConfig::from_lookup(vars(&[
        ("GROQ_API_KEY", "gsk_test"),
        ("CONTENT_SOURCE", "remote_json"),
        ("API_ADDRESS", "127.0.0.1:0"),
    ]))
    .unwrap();

    let result = tokio::time::timeout(Duration::from_secs(10), serve(cfg, async {}))
        .await
        .unwrap();
    assert!(result.is_ok());
}
