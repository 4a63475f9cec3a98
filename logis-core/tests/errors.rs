use logis_core::{EmbeddingError, LogisError, StoreError};

#[test]
fn store_errors_name_the_offending_document() {
    let err = StoreError::MissingEmbedding("chambre-102-1".to_string());
    assert_eq!(err.to_string(), "document 'chambre-102-1' has no embedding");

    let err = StoreError::InvalidId("  ".to_string());
    assert_eq!(err.to_string(), "invalid document id: \"  \"");
}

#[test]
fn provider_errors_keep_their_message() {
    let err = LogisError::LlmProvider("quota exceeded".to_string());
    assert_eq!(err.to_string(), "generation provider error: quota exceeded");

    let err = EmbeddingError::Provider("connection refused".to_string());
    assert_eq!(
        err.to_string(),
        "embedding provider unavailable: connection refused"
    );

    let err = StoreError::DimensionMismatch {
        expected: 768,
        got: 4,
    };
    assert_eq!(err.to_string(), "dimension mismatch: expected 768, got 4");
}

#[test]
fn corrupt_index_is_a_format_error() {
    let err: StoreError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, StoreError::Format(_)));
}
