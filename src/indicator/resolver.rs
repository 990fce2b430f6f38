use crate::i18n::Localizer;
use crate::indicator::{FilterExpr, Indicator, IndicatorColor};
use crate::models::device::{STATUS_OFFLINE, STATUS_ONLINE};
use crate::models::{AttendanceDeviceRecord, ZkLogRecord};

/// Online → green, everything else → red.
///
/// Unknown or missing statuses are shown as Offline; a typo'd status in the
/// store therefore looks like a legitimately offline device.
pub fn resolve_device_indicator(
    record: &AttendanceDeviceRecord,
    localizer: &dyn Localizer,
) -> Indicator {
    if record.is_online() {
        Indicator::new(
            localizer.translate(STATUS_ONLINE),
            IndicatorColor::Green,
            FilterExpr::eq("status", STATUS_ONLINE),
        )
    } else {
        Indicator::new(
            localizer.translate(STATUS_OFFLINE),
            IndicatorColor::Red,
            FilterExpr::eq("status", STATUS_OFFLINE),
        )
    }
}

/// Processed → green, pending → orange.
pub fn resolve_log_indicator(record: &ZkLogRecord, localizer: &dyn Localizer) -> Indicator {
    if record.processed {
        Indicator::new(
            localizer.translate("Processed"),
            IndicatorColor::Green,
            FilterExpr::eq("processed", "1"),
        )
    } else {
        Indicator::new(
            localizer.translate("Pending"),
            IndicatorColor::Orange,
            FilterExpr::eq("processed", "0"),
        )
    }
}

/// One indicator method per document type.
pub trait IndicatorResolver {
    fn device_indicator(&self, record: &AttendanceDeviceRecord) -> Indicator;
    fn log_indicator(&self, record: &ZkLogRecord) -> Indicator;
}

/// Default resolver carrying its localizer.
pub struct Resolver<L: Localizer> {
    localizer: L,
}

impl<L: Localizer> Resolver<L> {
    pub fn new(localizer: L) -> Self {
        Self { localizer }
    }
}

impl<L: Localizer> IndicatorResolver for Resolver<L> {
    fn device_indicator(&self, record: &AttendanceDeviceRecord) -> Indicator {
        resolve_device_indicator(record, &self.localizer)
    }

    fn log_indicator(&self, record: &ZkLogRecord) -> Indicator {
        resolve_log_indicator(record, &self.localizer)
    }
}
