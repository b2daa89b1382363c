use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: jiff::Error,
    },

    #[error("unknown score field: {0}")]
    UnknownField(String),

    #[error("unknown patient field: {0}")]
    UnknownPatientField(String),
}
