use mhtrack_core::series::SeriesPoint;
use mhtrack_core::{PatientContext, PatientField, ScoreEntry, SessionSummary};
use mhtrack_instruments::{classify_entry, instrument_charts};
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::labels::Labels;

pub const DEFAULT_TEMPLATE_NAME: &str = "summary.md";

/// Markdown-ish layout understood by [`crate::docx::generate_docx`].
/// Lines starting with `!` are alerts. Patient text is flattened by
/// [`plain_text`] before it reaches the template.
pub const DEFAULT_TEMPLATE: &str = r#"# {{ labels.header }}

- **{{ labels.provider_name }} :** {{ patient.provider_name }}
- **{{ labels.request_number }} :** {{ patient.request_number }}
- **{{ labels.date_of_birth }} :** {{ patient.date_of_birth }}
- **{{ labels.health_insurance_number }} :** {{ patient.health_insurance_number }}
{% for entry in entries %}
## {{ labels.date }} : {{ entry.date }}
{% for score in entry.scores %}
- **{{ score.label }} :** {{ score.total }}{% if score.status %} ({{ score.status }}){% endif %}
{% endfor %}
- {{ labels.suicidal_question }}
{% if entry.ideation_alert %}! {{ entry.ideation }}{% else %}- {{ entry.ideation }}{% endif %}
{% endfor %}
{% if charts | length > 0 %}
---
{% for chart in charts %}
### {{ chart.title }}
{% for point in chart.points %}
- {{ point.date }} : {{ point.score }}
{% endfor %}
{% endfor %}
{% endif %}
{{ labels.generated_on }} {{ generated_on }}
"#;

#[derive(Serialize)]
struct SummaryView<'a> {
    labels: &'a Labels,
    patient: PatientContext,
    generated_on: String,
    entries: Vec<EntryView<'a>>,
    charts: Vec<ChartView<'a>>,
}

#[derive(Serialize)]
struct EntryView<'a> {
    date: String,
    scores: Vec<ScoreView<'a>>,
    ideation_alert: bool,
    ideation: &'a str,
}

#[derive(Serialize)]
struct ScoreView<'a> {
    label: &'a str,
    total: u32,
    status: Option<&'a str>,
}

#[derive(Serialize)]
struct ChartView<'a> {
    title: &'a str,
    color: String,
    points: Vec<SeriesPoint>,
}

/// Render the summary with [`DEFAULT_TEMPLATE`].
pub fn render_summary(summary: &SessionSummary, labels: &Labels) -> Result<String, ExportError> {
    render_template(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE, summary, labels)
}

/// Render a Tera template against a session summary.
///
/// The template sees `labels`, `patient`, `generated_on`, `entries` (each
/// with classified `scores` and the ideation line) and `charts` (`title`,
/// `color`, `points`), which is empty when there are too few entries to
/// chart.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    summary: &SessionSummary,
    labels: &Labels,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let view = SummaryView {
        labels,
        patient: plain_patient(&summary.patient),
        generated_on: summary.generated_at.strftime("%Y-%m-%d").to_string(),
        entries: summary.entries.iter().map(|e| entry_view(e, labels)).collect(),
        charts: chart_views(&summary.entries, labels),
    };

    let value = serde_json::to_value(&view)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

fn entry_view<'a>(entry: &ScoreEntry, labels: &'a Labels) -> EntryView<'a> {
    let classification = classify_entry(entry);
    let scores = [classification.phq9, classification.gad7, classification.wsas]
        .into_iter()
        .map(|c| ScoreView {
            label: labels.total(c.instrument),
            total: c.score,
            status: labels.threshold(c.bucket()),
        })
        .collect();

    EntryView {
        date: entry.date.to_string(),
        scores,
        ideation_alert: classification.suicidal_ideation.is_present(),
        ideation: labels.ideation(classification.suicidal_ideation),
    }
}

fn chart_views<'a>(entries: &[ScoreEntry], labels: &'a Labels) -> Vec<ChartView<'a>> {
    instrument_charts(entries)
        .into_iter()
        .map(|chart| ChartView {
            title: labels.chart_title(chart.instrument),
            color: chart.color,
            points: chart.points,
        })
        .collect()
}

fn plain_patient(patient: &PatientContext) -> PatientContext {
    let mut plain = PatientContext::default();
    for field in PatientField::ALL {
        plain.set(field, plain_text(patient.get(field)));
    }
    plain
}

/// Make free text inert in the summary markup: line breaks become spaces,
/// `**` cannot open a bold run, and a leading `#`, `!` or `-` cannot start
/// a heading, alert, bullet or page break.
pub fn plain_text(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
        .collect();
    // A word joiner after every `*` keeps stars from pairing up.
    let flat = flat.trim().replace('*', "*\u{2060}");

    if flat.starts_with(['#', '!', '-']) {
        format!("\u{2060}{flat}")
    } else {
        flat
    }
}
