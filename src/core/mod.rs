pub mod planet_service;
pub mod report;

pub use crate::domain::ports::ConfigProvider;
