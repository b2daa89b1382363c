//! mhtrack-session
//!
//! The single owner of session state. Entry and patient edits go through
//! [`Session`] so the entry cap and score coercion cannot be bypassed, and
//! the confirm → export → clear workflow runs exactly once per session.

pub mod collaborators;
pub mod lifecycle;
pub mod snapshot;

pub use collaborators::{Confirmation, ConfirmPrompt, SummaryExporter, CONFIRM_PRINT_MESSAGE};
pub use lifecycle::{PrintOutcome, Session, SessionState};
pub use snapshot::SessionSnapshot;
