use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("export failed: {0}")]
    Export(#[from] mhtrack_export::ExportError),

    #[error("failed to write summary: {0}")]
    Io(#[from] std::io::Error),
}
