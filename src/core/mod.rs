pub mod attendance;
pub mod backup;
pub mod log;

pub use attendance::AttendanceLogic;
pub use backup::BackupLogic;
pub use log::LogLogic;
