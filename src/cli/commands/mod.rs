pub mod audit;
pub mod config;
pub mod device;
pub mod indicator;
pub mod init;
pub mod list;
pub mod punch;
