pub mod audit;
pub mod device;
pub mod listing;
pub mod punch;
