use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Identifying metadata printed on the summary. Free text, no validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientContext {
    pub provider_name: String,
    pub request_number: String,
    pub date_of_birth: String,
    pub health_insurance_number: String,
}

impl PatientContext {
    pub fn get(&self, field: PatientField) -> &str {
        match field {
            PatientField::ProviderName => &self.provider_name,
            PatientField::RequestNumber => &self.request_number,
            PatientField::DateOfBirth => &self.date_of_birth,
            PatientField::HealthInsuranceNumber => &self.health_insurance_number,
        }
    }

    pub fn set(&mut self, field: PatientField, value: impl Into<String>) {
        let slot = match field {
            PatientField::ProviderName => &mut self.provider_name,
            PatientField::RequestNumber => &mut self.request_number,
            PatientField::DateOfBirth => &mut self.date_of_birth,
            PatientField::HealthInsuranceNumber => &mut self.health_insurance_number,
        };
        *slot = value.into();
    }

    pub fn is_blank(&self) -> bool {
        PatientField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Reset every field to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PatientField {
    ProviderName,
    RequestNumber,
    DateOfBirth,
    HealthInsuranceNumber,
}

impl PatientField {
    pub const ALL: [PatientField; 4] = [
        PatientField::ProviderName,
        PatientField::RequestNumber,
        PatientField::DateOfBirth,
        PatientField::HealthInsuranceNumber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatientField::ProviderName => "provider_name",
            PatientField::RequestNumber => "request_number",
            PatientField::DateOfBirth => "date_of_birth",
            PatientField::HealthInsuranceNumber => "health_insurance_number",
        }
    }
}

impl FromStr for PatientField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatientField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| CoreError::UnknownPatientField(s.to_string()))
    }
}
