//! mhtrack-app
//!
//! Application shell around the session: configuration file, tracing
//! setup and the DOCX file exporter used as the print collaborator.

pub mod config;
pub mod error;
pub mod exporter;
pub mod logging;

pub use config::{LogFormat, TrackerConfig};
pub use error::AppError;
pub use exporter::DocxFileExporter;
