use std::convert::Infallible;
use std::fmt;

use mhtrack_core::SessionSummary;
use serde::{Deserialize, Serialize};

/// Shown to the operator before the summary is produced.
pub const CONFIRM_PRINT_MESSAGE: &str = "Veuillez confirmer que toutes les informations sont exactes. \
     Une fois le PDF généré, toutes les données seront effacées.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confirmation {
    Accept,
    Decline,
}

/// Blocking confirmation dialog.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> Confirmation;
}

/// A fixed answer, for headless callers and tests.
impl ConfirmPrompt for Confirmation {
    fn confirm(&mut self, _message: &str) -> Confirmation {
        *self
    }
}

/// The print/export collaborator. Called once per confirmed session.
pub trait SummaryExporter {
    type Error: fmt::Display;

    fn export(&mut self, summary: &SessionSummary) -> Result<(), Self::Error>;
}

/// Collects summaries in memory.
impl SummaryExporter for Vec<SessionSummary> {
    type Error = Infallible;

    fn export(&mut self, summary: &SessionSummary) -> Result<(), Self::Error> {
        self.push(summary.clone());
        Ok(())
    }
}
