use crate::BinError;

/// WHAT: detail() returns the bare reason for query faults
/// WHY: Notification bodies must not carry source locations
#[test]
fn given_query_fault_when_reading_detail_then_reason_only() {
    // Given: A query fault
    let err = BinError::query_failed("shell query returned 0x80004005");

    // Then: Detail is the reason, Display adds the location
    assert_eq!(err.detail(), "shell query returned 0x80004005");
    assert!(err.to_string().starts_with("Bin query failed: shell query"));
    assert!(err.to_string().len() > err.detail().len());
}

/// WHAT: Action faults name the action in Display but not in detail()
/// WHY: The monitor builds its own message around the detail
#[test]
fn given_action_fault_when_formatting_then_action_named() {
    // Given: An action fault for opening the bin view
    let err = BinError::action_failed("open", "no handler for trash:///");

    // Then: Both views are as expected
    assert_eq!(err.detail(), "no handler for trash:///");
    assert!(err.to_string().contains("'open'"));
    assert!(matches!(err, BinError::ActionFailed { action: "open", .. }));
}
