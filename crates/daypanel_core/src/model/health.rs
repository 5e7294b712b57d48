//! Health reading domain model.
//!
//! # Responsibility
//! - Define the recorded reading and its insert shape.
//! - Expose the vital signs as one copyable value for evaluation.
//!
//! # Invariants
//! - A stored reading carries at least one vital sign.
//! - `time` has minute precision (`HH:MM`).

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a health reading.
pub type ReadingId = Uuid;

/// The optional vital signs of one reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    /// Beats per minute.
    pub heart_rate: Option<u32>,
    /// mmHg.
    pub systolic: Option<u32>,
    /// mmHg.
    pub diastolic: Option<u32>,
    /// mg/dL.
    pub blood_sugar: Option<u32>,
}

impl Vitals {
    /// Returns whether at least one vital sign is present.
    pub fn has_any(&self) -> bool {
        self.heart_rate.is_some()
            || self.systolic.is_some()
            || self.diastolic.is_some()
            || self.blood_sugar.is_some()
    }

    /// Returns the pressure pair only when both halves are present.
    pub fn blood_pressure(&self) -> Option<(u32, u32)> {
        self.systolic.zip(self.diastolic)
    }
}

/// Health-area errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthError {
    /// The reading carries no vital sign at all.
    MissingMetric,
    NotFound(ReadingId),
}

impl Display for HealthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMetric => write!(f, "please enter at least one health metric"),
            Self::NotFound(id) => write!(f, "health reading not found: {id}"),
        }
    }
}

impl Error for HealthError {}

/// One recorded set of vitals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReading {
    pub id: ReadingId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub heart_rate: Option<u32>,
    pub systolic: Option<u32>,
    pub diastolic: Option<u32>,
    pub blood_sugar: Option<u32>,
    pub notes: Option<String>,
}

impl HealthReading {
    pub fn vitals(&self) -> Vitals {
        Vitals {
            heart_rate: self.heart_rate,
            systolic: self.systolic,
            diastolic: self.diastolic,
            blood_sugar: self.blood_sugar,
        }
    }
}

/// Insert (and full-replacement) shape for a reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewReading {
    pub vitals: Vitals,
    pub notes: Option<String>,
}

impl NewReading {
    /// Rejects a reading without any vital sign.
    pub fn validate(&self) -> Result<(), HealthError> {
        if self.vitals.has_any() {
            Ok(())
        } else {
            Err(HealthError::MissingMetric)
        }
    }

    /// Blank notes are stored as `None`.
    pub(crate) fn normalized_notes(&self) -> Option<String> {
        self.notes
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::{HealthError, NewReading, Vitals};

    #[test]
    fn validate_requires_one_vital() {
        assert_eq!(
            NewReading::default().validate(),
            Err(HealthError::MissingMetric)
        );

        let diastolic_only = NewReading {
            vitals: Vitals {
                diastolic: Some(80),
                ..Vitals::default()
            },
            notes: None,
        };
        assert_eq!(diastolic_only.validate(), Ok(()));
    }

    #[test]
    fn blood_pressure_needs_both_halves() {
        let partial = Vitals {
            systolic: Some(150),
            ..Vitals::default()
        };
        assert_eq!(partial.blood_pressure(), None);

        let full = Vitals {
            systolic: Some(150),
            diastolic: Some(95),
            ..Vitals::default()
        };
        assert_eq!(full.blood_pressure(), Some((150, 95)));
    }

    #[test]
    fn blank_notes_normalize_to_none() {
        let reading = NewReading {
            vitals: Vitals::default(),
            notes: Some("   ".to_string()),
        };
        assert_eq!(reading.normalized_notes(), None);
    }
}
