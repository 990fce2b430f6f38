use zkindicator::i18n::{Catalog, Identity};
use zkindicator::indicator::{
    FilterExpr, IndicatorColor, IndicatorResolver, Resolver, resolve_device_indicator,
    resolve_log_indicator,
};
use zkindicator::models::{AttendanceDeviceRecord, Document, ZkLogRecord};

fn device(status: Option<&str>) -> AttendanceDeviceRecord {
    let mut rec = AttendanceDeviceRecord::new("SN1");
    rec.status = status.map(str::to_string);
    rec
}

fn log(processed: bool) -> ZkLogRecord {
    ZkLogRecord {
        processed,
        ..ZkLogRecord::default()
    }
}

#[test]
fn online_device_is_green() {
    let ind = resolve_device_indicator(&device(Some("Online")), &Identity);
    assert_eq!(
        ind.to_triple(),
        ("Online".to_string(), "green", "status,=,Online".to_string())
    );
}

#[test]
fn offline_device_is_red() {
    let ind = resolve_device_indicator(&device(Some("Offline")), &Identity);
    assert_eq!(
        ind.to_triple(),
        ("Offline".to_string(), "red", "status,=,Offline".to_string())
    );
}

#[test]
fn unknown_missing_or_empty_status_shows_offline() {
    for status in [Some("Unknown"), Some(""), Some("online"), None] {
        let ind = resolve_device_indicator(&device(status), &Identity);
        assert_eq!(ind.label, "Offline", "status {:?}", status);
        assert_eq!(ind.color, IndicatorColor::Red);
        assert_eq!(ind.filter, FilterExpr::eq("status", "Offline"));
    }
}

#[test]
fn processed_log_is_green() {
    let ind = resolve_log_indicator(&log(true), &Identity);
    assert_eq!(
        ind.to_triple(),
        ("Processed".to_string(), "green", "processed,=,1".to_string())
    );
}

#[test]
fn pending_log_is_orange() {
    let ind = resolve_log_indicator(&log(false), &Identity);
    assert_eq!(
        ind.to_triple(),
        ("Pending".to_string(), "orange", "processed,=,0".to_string())
    );
}

#[test]
fn processed_follows_loose_truthiness() {
    let truthy = [
        serde_json::json!(true),
        serde_json::json!(1),
        serde_json::json!(2),
        serde_json::json!("yes"),
    ];
    for v in truthy {
        let doc = Document::new("1").with("processed", v.clone());
        assert!(ZkLogRecord::from_document(&doc).processed, "{v}");
    }

    let falsy = [
        serde_json::json!(false),
        serde_json::json!(0),
        serde_json::Value::Null,
        serde_json::json!(""),
    ];
    for v in falsy {
        let doc = Document::new("1").with("processed", v.clone());
        assert!(!ZkLogRecord::from_document(&doc).processed, "{v}");
    }

    assert!(!ZkLogRecord::from_document(&Document::new("1")).processed);
}

#[test]
fn ill_typed_status_falls_back_to_offline() {
    let doc = Document::new("SN1").with("status", 1);
    let rec = AttendanceDeviceRecord::from_document(&doc);
    assert_eq!(rec.status, None);
    assert_eq!(resolve_device_indicator(&rec, &Identity).label, "Offline");
}

#[test]
fn resolving_twice_gives_the_same_indicator() {
    let resolver = Resolver::new(Identity);
    let dev = device(Some("Online"));
    let rec = log(false);

    assert_eq!(resolver.device_indicator(&dev), resolver.device_indicator(&dev));
    assert_eq!(resolver.log_indicator(&rec), resolver.log_indicator(&rec));
}

#[test]
fn labels_are_translated_but_filters_are_not() {
    let mut catalog = Catalog::new("it");
    catalog.insert("Online", "In linea");
    catalog.insert("Pending", "In attesa");

    let resolver = Resolver::new(catalog);

    let ind = resolver.device_indicator(&device(Some("Online")));
    assert_eq!(ind.label, "In linea");
    assert_eq!(ind.color, IndicatorColor::Green);
    assert_eq!(ind.filter.to_string(), "status,=,Online");

    let ind = resolver.log_indicator(&log(false));
    assert_eq!(ind.label, "In attesa");
    assert_eq!(ind.filter.to_string(), "processed,=,0");

    // no translation → source text
    assert_eq!(resolver.log_indicator(&log(true)).label, "Processed");
}

#[test]
fn device_name_defaults_from_serial() {
    let mut rec = AttendanceDeviceRecord::new("ABC123");
    rec.before_save();
    assert_eq!(rec.device_name, "ZKTeco Device ABC123");

    let mut named = AttendanceDeviceRecord::new("ABC123");
    named.device_name = "Front door".into();
    named.before_save();
    assert_eq!(named.device_name, "Front door");

    // only an empty name is replaced
    let mut blank = AttendanceDeviceRecord::new("ABC123");
    blank.device_name = "  ".into();
    blank.before_save();
    assert_eq!(blank.device_name, "  ");
}

#[test]
fn indicator_serializes_as_host_triple() {
    let ind = resolve_device_indicator(&device(Some("Online")), &Identity);
    let json = serde_json::to_value(&ind).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"label": "Online", "color": "green", "filter": "status,=,Online"})
    );
}

#[test]
fn punch_types_parse_from_cli_and_device_states() {
    use zkindicator::models::PunchType;

    assert_eq!("in".parse::<PunchType>().unwrap(), PunchType::In);
    assert_eq!("0".parse::<PunchType>().unwrap(), PunchType::In);
    assert_eq!("Out".parse::<PunchType>().unwrap(), PunchType::Out);
    assert_eq!("1".parse::<PunchType>().unwrap(), PunchType::Out);
    assert!("2".parse::<PunchType>().is_err());

    assert_eq!(PunchType::from_device_state("0"), PunchType::In);
    assert_eq!(PunchType::from_device_state("1"), PunchType::Out);
    assert_eq!(PunchType::from_device_state("4"), PunchType::Out);
}

#[test]
fn every_color_token_has_a_name_and_terminal_colour() {
    use ansi_term::Colour;

    let expected = [
        (IndicatorColor::Green, "green", Colour::Green),
        (IndicatorColor::Red, "red", Colour::Red),
        (IndicatorColor::Orange, "orange", Colour::RGB(255, 153, 51)),
        (IndicatorColor::Blue, "blue", Colour::Blue),
        (IndicatorColor::Gray, "gray", Colour::Fixed(244)),
    ];
    for (color, name, colour) in expected {
        assert_eq!(color.as_str(), name);
        assert_eq!(color.to_string(), name);
        assert_eq!(color.colour(), colour);
        assert_eq!(color.paint("x"), colour.paint("x").to_string());
    }
}
