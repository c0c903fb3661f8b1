use super::*;

#[test]
fn test_init_logging_installs_once() {
    init_logging("debug").unwrap();
    tracing::info!("Logging initialized");

    let err = init_logging("info").unwrap_err();
    assert!(err
        .to_string()
        .starts_with("Failed to install the log subscriber"));
}

#[test]
fn test_receipt_error_message() {
    let receipt = TxReceipt {
        effect: TxEffect::Reverted,
        events: Vec::new(),
        error: Some(anyhow::anyhow!("Only the authority may do that").into()),
    };
    assert!(!receipt.is_successful());
    assert_eq!(
        receipt.error_message().as_deref(),
        Some("Only the authority may do that")
    );

    let receipt = TxReceipt {
        effect: TxEffect::Successful,
        events: vec![Event::new("key", "value")],
        error: None,
    };
    assert!(receipt.is_successful());
    assert!(receipt.error_message().is_none());
}
