use zkindicator::core::device::DeviceLogic;
use zkindicator::core::listing::ListLogic;
use zkindicator::core::punch::PunchLogic;
use zkindicator::db::pool::DbPool;
use zkindicator::errors::AppError;
use zkindicator::i18n::{Catalog, Identity};
use zkindicator::indicator::{FilterExpr, IndicatorColor};
use zkindicator::listview::{ListView, ListViewRegistry};
use zkindicator::models::{DocType, Document};

fn devices() -> Vec<Document> {
    vec![
        Document::new("A").with("status", "Online"),
        Document::new("B").with("status", "Offline"),
        Document::new("C").with("status", "Broken"),
        Document::new("D"),
    ]
}

#[test]
fn standard_registry_exposes_both_doctypes() {
    let registry = ListViewRegistry::standard();
    assert_eq!(
        registry.doctypes(),
        vec![DocType::AttendanceDevice, DocType::ZkLog]
    );

    let dev = registry.get(DocType::AttendanceDevice).unwrap();
    assert_eq!(dev.add_fields(), &["status", "last_sync_time"]);

    let log = registry.get(DocType::ZkLog).unwrap();
    assert_eq!(log.add_fields(), &["processed", "punch_type"]);

    assert!(ListViewRegistry::new().get(DocType::ZkLog).is_none());
}

#[test]
fn render_keeps_order_and_resolves_every_row() {
    let registry = ListViewRegistry::standard();
    let settings = registry.get(DocType::AttendanceDevice).unwrap();

    let rows = ListView::render(settings, &devices(), None, &Identity);
    let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C", "D"]);

    let colors: Vec<_> = rows.iter().map(|r| r.indicator.color).collect();
    assert_eq!(
        colors,
        [
            IndicatorColor::Green,
            IndicatorColor::Red,
            IndicatorColor::Red,
            IndicatorColor::Red
        ]
    );
}

#[test]
fn clicking_an_indicator_filters_to_its_own_rows() {
    let registry = ListViewRegistry::standard();
    let settings = registry.get(DocType::AttendanceDevice).unwrap();
    let docs = devices();

    let all = ListView::render(settings, &docs, None, &Identity);
    let online_filter = all[0].indicator.filter.clone();

    let online = ListView::render(settings, &docs, Some(&online_filter), &Identity);
    assert_eq!(online.len(), 1);
    assert_eq!(online[0].name, "A");

    // "Broken" and missing statuses show as Offline but hold no "Offline" value
    let offline_filter = all[1].indicator.filter.clone();
    let offline = ListView::render(settings, &docs, Some(&offline_filter), &Identity);
    assert_eq!(offline.len(), 1);
    assert_eq!(offline[0].name, "B");
}

#[test]
fn catalog_loads_from_csv_and_skips_bad_rows() {
    let csv = "Online,Connesso\n\nOffline,Disconnesso,status\nlonely\n,empty source\nOnline,In linea\n";
    let catalog = Catalog::from_reader("it", csv.as_bytes()).unwrap();
    assert_eq!(catalog.language(), "it");
    assert_eq!(catalog.len(), 2);

    let registry = ListViewRegistry::standard();
    let settings = registry.get(DocType::AttendanceDevice).unwrap();
    let rows = ListView::render(settings, &devices(), None, &catalog);

    assert_eq!(rows[0].indicator.label, "In linea");
    assert_eq!(rows[1].indicator.label, "Disconnesso");
    assert_eq!(rows[1].indicator.filter.to_string(), "status,=,Offline");
}

#[test]
fn store_backed_listing_resolves_indicators() {
    let pool = DbPool::in_memory().unwrap();
    let conn = &pool.conn;

    DeviceLogic::add(conn, "SN1", None, Some("10.0.0.5"), Some("Online")).unwrap();
    let dev = DeviceLogic::add(conn, "SN2", Some("Back door"), None, None).unwrap();
    assert_eq!(dev.status.as_deref(), Some("Offline"));
    assert_eq!(dev.device_name, "Back door");

    let p1 = PunchLogic::add(conn, "SN1", "7", "2026-03-02 08:00:00", None).unwrap();
    PunchLogic::add(conn, "SN1", "7", "2026-03-02 17:00:00", Some("1")).unwrap();
    PunchLogic::mark(conn, p1.id, true).unwrap();

    let registry = ListViewRegistry::standard();

    let rows = ListLogic::rows(conn, &registry, DocType::AttendanceDevice, None, &Identity).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "SN1");
    assert_eq!(rows[0].indicator.label, "Online");
    assert!(rows[0].fields.contains_key("last_sync_time"));
    assert_eq!(rows[1].indicator.label, "Offline");

    let pending = FilterExpr::eq("processed", "0");
    let rows = ListLogic::rows(conn, &registry, DocType::ZkLog, Some(&pending), &Identity).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].indicator.label, "Pending");
    assert_eq!(rows[0].indicator.color, IndicatorColor::Orange);
    assert_eq!(rows[0].fields["punch_type"], "OUT");
}

#[test]
fn unknown_device_and_filter_field_are_errors() {
    let pool = DbPool::in_memory().unwrap();
    let conn = &pool.conn;

    let err = DeviceLogic::set_status(conn, "NOPE", "Online").unwrap_err();
    assert!(matches!(err, AppError::DeviceNotFound(_)));

    let err = PunchLogic::mark(conn, 42, true).unwrap_err();
    assert!(matches!(err, AppError::LogNotFound(42)));

    let bad = FilterExpr::eq("status; DROP TABLE zk_log", "x");
    let err = ListLogic::rows(
        conn,
        &ListViewRegistry::standard(),
        DocType::AttendanceDevice,
        Some(&bad),
        &Identity,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidFilter(_)));
}

#[test]
fn status_update_stamps_sync_time_only_when_online() {
    let pool = DbPool::in_memory().unwrap();
    let conn = &pool.conn;

    let dev = DeviceLogic::add(conn, "SN9", None, None, None).unwrap();
    assert!(dev.last_sync_time.is_none());

    let dev = DeviceLogic::set_status(conn, "SN9", "Online").unwrap();
    let synced = dev.last_sync_time.expect("sync time set");

    let dev = DeviceLogic::set_status(conn, "SN9", "Offline").unwrap();
    assert_eq!(dev.last_sync_time, Some(synced));
    assert!(!dev.is_online());
}

#[test]
fn doctype_names_parse_loosely() {
    for s in ["Attendance Device", "attendance_device", "device", "DEVICE"] {
        assert_eq!(s.parse::<DocType>().unwrap(), DocType::AttendanceDevice);
    }
    for s in ["ZK Log", "zk_log", "log"] {
        assert_eq!(s.parse::<DocType>().unwrap(), DocType::ZkLog);
    }
    assert!(matches!(
        "employee".parse::<DocType>(),
        Err(AppError::InvalidDocType(_))
    ));
}

#[test]
fn re_adding_a_device_keeps_omitted_fields() {
    let pool = DbPool::in_memory().unwrap();
    let conn = &pool.conn;

    let first = DeviceLogic::add(conn, "SN1", Some("Front door"), None, Some("Online")).unwrap();
    let synced = first.last_sync_time;
    assert!(synced.is_some());

    let dev = DeviceLogic::add(conn, "SN1", None, Some("10.0.0.5"), None).unwrap();
    assert_eq!(dev.device_name, "Front door");
    assert_eq!(dev.status.as_deref(), Some("Online"));
    assert_eq!(dev.ip_address.as_deref(), Some("10.0.0.5"));
    assert_eq!(dev.last_sync_time, synced);

    let dev = DeviceLogic::add(conn, "SN1", None, None, Some("Offline")).unwrap();
    assert_eq!(dev.device_name, "Front door");
    assert_eq!(dev.ip_address.as_deref(), Some("10.0.0.5"));
    assert!(!dev.is_online());
}
