use zkindicator::errors::AppError;
use zkindicator::indicator::{FilterExpr, FilterOp};
use zkindicator::models::Document;

#[test]
fn parses_equality_filters() {
    let f: FilterExpr = "status,=,Online".parse().unwrap();
    assert_eq!(f.field, "status");
    assert_eq!(f.op, FilterOp::Eq);
    assert_eq!(f.value, "Online");
    assert_eq!(f.to_string(), "status,=,Online");
}

#[test]
fn value_may_contain_commas() {
    let f: FilterExpr = "device_name,!=,Gate 1, north".parse().unwrap();
    assert_eq!(f.op, FilterOp::NotEq);
    assert_eq!(f.value, "Gate 1, north");
    assert_eq!(f.to_string().parse::<FilterExpr>().unwrap(), f);
}

#[test]
fn rejects_malformed_filters() {
    for bad in ["", "status", "status,=", ",=,Online", "status,~,Online", "status,<,1"] {
        let err = bad.parse::<FilterExpr>().unwrap_err();
        assert!(matches!(err, AppError::InvalidFilter(_)), "{bad}");
    }
}

#[test]
fn matches_compare_text_values() {
    let doc = Document::new("SN1")
        .with("status", "Online")
        .with("processed", 1)
        .with("flag", true);

    assert!(FilterExpr::eq("status", "Online").matches(&doc));
    assert!(!FilterExpr::eq("status", "Offline").matches(&doc));
    assert!(FilterExpr::eq("processed", "1").matches(&doc));
    assert!(FilterExpr::eq("flag", "1").matches(&doc));

    let not_offline: FilterExpr = "status,!=,Offline".parse().unwrap();
    assert!(not_offline.matches(&doc));
}

#[test]
fn missing_fields_compare_as_empty() {
    let doc = Document::new("SN1").with("status", serde_json::Value::Null);
    assert!(FilterExpr::eq("status", "").matches(&doc));
    assert!(FilterExpr::eq("ip_address", "").matches(&doc));
    assert!(!FilterExpr::eq("status", "Offline").matches(&doc));
}
