use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Generate a DOCX document from a rendered summary.
///
/// Understood subset:
/// - `#`, `##`, `###` headings
/// - `- item` bullets, `**bold**` inline runs
/// - `! text` alert line, bold in the alert colour
/// - `---` page break
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    // Runs of blank template lines collapse into a single spacer.
    let mut previous_blank = false;

    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !previous_blank {
                docx = docx.add_paragraph(Paragraph::new());
            }
            previous_blank = true;
            continue;
        }
        previous_blank = false;

        let paragraph = if let Some(text) = trimmed.strip_prefix("### ") {
            heading_paragraph(text, "Heading3", styles)
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            heading_paragraph(text, "Heading2", styles)
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            heading_paragraph(text, "Heading1", styles)
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            bullet_paragraph(text, styles)
        } else if let Some(text) = trimmed.strip_prefix("! ") {
            alert_paragraph(text, styles)
        } else if trimmed == "---" {
            Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
        } else {
            body_paragraph(trimmed, styles)
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .color(&styles.heading_color)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let bullet = text_run("\u{2022} ", styles);
    parse_inline(text, styles)
        .into_iter()
        .fold(
            Paragraph::new().align(AlignmentType::Left).add_run(bullet),
            Paragraph::add_run,
        )
}

fn alert_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(text_run(text, styles).bold().color(&styles.alert_color))
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    parse_inline(text, styles)
        .into_iter()
        .fold(Paragraph::new().align(AlignmentType::Left), Paragraph::add_run)
}

fn text_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Split `**bold**` segments into runs. An unclosed `**` is kept as text.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let Some(len) = remaining[start + 2..].find("**") else {
            break;
        };
        if start > 0 {
            runs.push(text_run(&remaining[..start], styles));
        }
        let bold = &remaining[start + 2..start + 2 + len];
        runs.push(text_run(bold, styles).bold());
        remaining = &remaining[start + 4 + len..];
    }

    if !remaining.is_empty() {
        runs.push(text_run(remaining, styles));
    }
    runs
}
