use mhtrack_instruments::{InstrumentKind, SuicidalIdeation, ThresholdBucket};
use serde::{Deserialize, Serialize};

/// Text catalog for the printed summary. Defaults are the French
/// wording of the tracker; any subset can be overridden from config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub header: String,
    pub provider_name: String,
    pub request_number: String,
    pub date_of_birth: String,
    pub health_insurance_number: String,
    pub date: String,
    pub phq9_total: String,
    pub gad7_total: String,
    pub wsas_total: String,
    pub above_threshold: String,
    pub below_threshold: String,
    pub suicidal_question: String,
    pub suicidal_yes: String,
    pub suicidal_no: String,
    pub phq9_chart_title: String,
    pub gad7_chart_title: String,
    pub wsas_chart_title: String,
    pub score: String,
    pub generated_on: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            header: "Évolution de l'état de l'usager".to_string(),
            provider_name: "Nom de l’intervenant".to_string(),
            request_number: "Numéro de trajectoire".to_string(),
            date_of_birth: "Date de naissance".to_string(),
            health_insurance_number: "Numéro d'assurance maladie".to_string(),
            date: "Date".to_string(),
            phq9_total: "Score total PHQ-9".to_string(),
            gad7_total: "Score total GAD-7".to_string(),
            wsas_total: "Score total WSAS".to_string(),
            above_threshold: "Au-dessus du seuil clinique".to_string(),
            below_threshold: "Au-dessous du seuil clinique".to_string(),
            suicidal_question: "Score > 0 à la question 9?".to_string(),
            suicidal_yes: "Idéation suicidaire".to_string(),
            suicidal_no: "Aucune idéation suicidaire".to_string(),
            phq9_chart_title: "Symptômes dépressifs dans le temps".to_string(),
            gad7_chart_title: "Symptômes anxieux dans le temps".to_string(),
            wsas_chart_title: "Impact fonctionnel dans le temps".to_string(),
            score: "Score".to_string(),
            generated_on: "Généré le".to_string(),
        }
    }
}

impl Labels {
    /// `None` for instruments without a threshold.
    pub fn threshold(&self, bucket: ThresholdBucket) -> Option<&str> {
        match bucket {
            ThresholdBucket::Above => Some(&self.above_threshold),
            ThresholdBucket::Below => Some(&self.below_threshold),
            ThresholdBucket::NotApplicable => None,
        }
    }

    pub fn ideation(&self, ideation: SuicidalIdeation) -> &str {
        match ideation {
            SuicidalIdeation::Present => &self.suicidal_yes,
            SuicidalIdeation::Absent => &self.suicidal_no,
        }
    }

    pub fn total(&self, kind: InstrumentKind) -> &str {
        match kind {
            InstrumentKind::Phq9 => &self.phq9_total,
            InstrumentKind::Gad7 => &self.gad7_total,
            InstrumentKind::Wsas => &self.wsas_total,
        }
    }

    pub fn chart_title(&self, kind: InstrumentKind) -> &str {
        match kind {
            InstrumentKind::Phq9 => &self.phq9_chart_title,
            InstrumentKind::Gad7 => &self.gad7_chart_title,
            InstrumentKind::Wsas => &self.wsas_chart_title,
        }
    }
}
