pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod http;
pub mod manifest;
pub mod progress;
pub mod report;

pub use config::Config;
pub use error::PanelgrabError;
