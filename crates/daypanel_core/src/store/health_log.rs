//! Health reading log.
//!
//! # Responsibility
//! - Own recorded readings, newest first.
//! - Validate and evaluate each reading as it is recorded.
//!
//! # Invariants
//! - Every stored reading carries at least one vital sign.
//! - Readings change only by full replacement; id, date and time are kept.
//! - Log lines carry ids and counts only, never vital values or notes.

use crate::health::threshold::{alert_summary, evaluate, HealthAlert};
use crate::model::health::{HealthError, HealthReading, NewReading, ReadingId};
use chrono::{Local, NaiveDateTime, NaiveTime, Timelike};
use log::{debug, warn};
use uuid::Uuid;

/// Confirmation shown when a reading has no alert.
pub const READING_SAVED_MESSAGE: &str = "Your health data has been recorded successfully.";

/// Result of recording one reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
    pub id: ReadingId,
    pub alerts: Vec<HealthAlert>,
}

impl RecordOutcome {
    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }

    /// Notification text for the caller to surface.
    pub fn notice(&self) -> String {
        alert_summary(&self.alerts).unwrap_or_else(|| READING_SAVED_MESSAGE.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct HealthLog {
    readings: Vec<HealthReading>,
}

impl HealthLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing list, which must already be newest first.
    pub fn from_readings(readings: Vec<HealthReading>) -> Self {
        Self { readings }
    }

    /// Records a reading stamped at `at` and returns its alerts.
    ///
    /// # Errors
    /// - `MissingMetric` when no vital sign is present.
    pub fn record(
        &mut self,
        new_reading: NewReading,
        at: NaiveDateTime,
    ) -> Result<RecordOutcome, HealthError> {
        if let Err(err) = new_reading.validate() {
            warn!("event=health_record module=health status=rejected reason=missing_metric");
            return Err(err);
        }

        let alerts = evaluate(&new_reading.vitals);
        let id = Uuid::new_v4();
        let reading = HealthReading {
            id,
            date: at.date(),
            time: minute_precision(at.time()),
            heart_rate: new_reading.vitals.heart_rate,
            systolic: new_reading.vitals.systolic,
            diastolic: new_reading.vitals.diastolic,
            blood_sugar: new_reading.vitals.blood_sugar,
            notes: new_reading.normalized_notes(),
        };
        self.readings.insert(0, reading);

        if alerts.is_empty() {
            debug!("event=health_record module=health status=ok reading_id={id}");
        } else {
            warn!(
                "event=health_record module=health status=alert reading_id={} alert_count={}",
                id,
                alerts.len()
            );
        }
        Ok(RecordOutcome { id, alerts })
    }

    /// Records a reading stamped with the host's local clock.
    pub fn record_now(&mut self, new_reading: NewReading) -> Result<RecordOutcome, HealthError> {
        self.record(new_reading, Local::now().naive_local())
    }

    /// Replaces every vital and the notes of an existing reading.
    pub fn replace(
        &mut self,
        id: ReadingId,
        new_reading: NewReading,
    ) -> Result<RecordOutcome, HealthError> {
        new_reading.validate()?;
        let reading = self
            .readings
            .iter_mut()
            .find(|reading| reading.id == id)
            .ok_or(HealthError::NotFound(id))?;

        reading.heart_rate = new_reading.vitals.heart_rate;
        reading.systolic = new_reading.vitals.systolic;
        reading.diastolic = new_reading.vitals.diastolic;
        reading.blood_sugar = new_reading.vitals.blood_sugar;
        reading.notes = new_reading.normalized_notes();

        debug!("event=health_replace module=health status=ok reading_id={id}");
        Ok(RecordOutcome {
            id,
            alerts: evaluate(&new_reading.vitals),
        })
    }

    /// Readings, newest first.
    pub fn readings(&self) -> &[HealthReading] {
        &self.readings
    }

    pub fn latest(&self) -> Option<&HealthReading> {
        self.readings.first()
    }

    /// Readings with at least one alert.
    pub fn flagged(&self) -> Vec<&HealthReading> {
        self.readings
            .iter()
            .filter(|reading| !evaluate(&reading.vitals()).is_empty())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

fn minute_precision(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}
