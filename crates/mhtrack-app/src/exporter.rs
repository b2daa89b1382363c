use std::path::{Path, PathBuf};

use mhtrack_core::SessionSummary;
use mhtrack_export::{summary_docx, DocumentStyles, Labels};
use mhtrack_session::SummaryExporter;
use tracing::info;

use crate::config::TrackerConfig;
use crate::error::AppError;

/// Print collaborator that writes each summary as a DOCX file.
pub struct DocxFileExporter {
    output_dir: PathBuf,
    labels: Labels,
    styles: DocumentStyles,
    written: Vec<PathBuf>,
}

impl DocxFileExporter {
    pub fn new(output_dir: impl Into<PathBuf>, labels: Labels, styles: DocumentStyles) -> Self {
        Self {
            output_dir: output_dir.into(),
            labels,
            styles,
            written: Vec::new(),
        }
    }

    pub fn from_config(config: &TrackerConfig) -> eyre::Result<Self> {
        Ok(Self::new(
            config.resolved_output_dir()?,
            config.labels.clone(),
            config.styles.clone(),
        ))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Files written so far, oldest first.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn next_path(&self, summary: &SessionSummary) -> PathBuf {
        let stamp = summary.generated_at.strftime("%Y%m%dT%H%M%SZ").to_string();
        let mut path = self.output_dir.join(format!("summary-{stamp}.docx"));
        let mut n = 1;
        while path.exists() {
            path = self.output_dir.join(format!("summary-{stamp}-{n}.docx"));
            n += 1;
        }
        path
    }
}

impl SummaryExporter for DocxFileExporter {
    type Error = AppError;

    fn export(&mut self, summary: &SessionSummary) -> Result<(), Self::Error> {
        let bytes = summary_docx(summary, &self.labels, &self.styles)?;

        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.next_path(summary);
        std::fs::write(&path, bytes)?;

        info!(path = %path.display(), "summary written");
        self.written.push(path);
        Ok(())
    }
}
