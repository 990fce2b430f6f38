use crate::i18n::Localizer;
use crate::indicator::{Indicator, resolve_device_indicator, resolve_log_indicator};
use crate::models::{AttendanceDeviceRecord, DocType, Document, ZkLogRecord};

/// What the host needs to render one document type's list.
pub trait ListViewSettings {
    fn doctype(&self) -> DocType;

    /// Fields fetched alongside each row.
    fn add_fields(&self) -> &'static [&'static str];

    /// Called once per row with the fetched document.
    fn indicator(&self, doc: &Document, localizer: &dyn Localizer) -> Indicator;
}

pub struct DeviceListView;

impl ListViewSettings for DeviceListView {
    fn doctype(&self) -> DocType {
        DocType::AttendanceDevice
    }

    fn add_fields(&self) -> &'static [&'static str] {
        &["status", "last_sync_time"]
    }

    fn indicator(&self, doc: &Document, localizer: &dyn Localizer) -> Indicator {
        resolve_device_indicator(&AttendanceDeviceRecord::from_document(doc), localizer)
    }
}

pub struct ZkLogListView;

impl ListViewSettings for ZkLogListView {
    fn doctype(&self) -> DocType {
        DocType::ZkLog
    }

    fn add_fields(&self) -> &'static [&'static str] {
        &["processed", "punch_type"]
    }

    fn indicator(&self, doc: &Document, localizer: &dyn Localizer) -> Indicator {
        resolve_log_indicator(&ZkLogRecord::from_document(doc), localizer)
    }
}

/// Settings keyed by document type. Built by the caller and passed
/// where it is needed.
#[derive(Default)]
pub struct ListViewRegistry {
    entries: Vec<Box<dyn ListViewSettings>>,
}

impl ListViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the attendance device and ZK log settings.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(DeviceListView));
        registry.register(Box::new(ZkLogListView));
        registry
    }

    /// Registering a doctype twice replaces the earlier settings.
    pub fn register(&mut self, settings: Box<dyn ListViewSettings>) {
        let doctype = settings.doctype();
        self.entries.retain(|s| s.doctype() != doctype);
        self.entries.push(settings);
    }

    pub fn get(&self, doctype: DocType) -> Option<&dyn ListViewSettings> {
        self.entries
            .iter()
            .find(|s| s.doctype() == doctype)
            .map(|s| s.as_ref())
    }

    pub fn doctypes(&self) -> Vec<DocType> {
        self.entries.iter().map(|s| s.doctype()).collect()
    }
}
