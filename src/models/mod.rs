pub mod device;
pub mod doctype;
pub mod document;
pub mod punch_type;
pub mod zk_log;

pub use device::AttendanceDeviceRecord;
pub use doctype::DocType;
pub use document::Document;
pub use punch_type::PunchType;
pub use zk_log::ZkLogRecord;
