use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Roboto", "Calibri").
    pub body_font: String,

    /// Font for headings.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    pub heading1_size: usize,
    pub heading2_size: usize,
    pub heading3_size: usize,

    /// Hex RGB without `#`, applied to headings.
    pub heading_color: String,

    /// Hex RGB without `#`, applied to alert lines.
    pub alert_color: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Roboto".to_string(),
            heading_font: "Roboto".to_string(),
            body_size: 11,
            heading1_size: 16,
            heading2_size: 13,
            heading3_size: 12,
            heading_color: "095797".to_string(),
            alert_color: "DC2626".to_string(),
        }
    }
}
