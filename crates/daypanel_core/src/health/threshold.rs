//! Fixed clinical bands for vital-sign alerts and status badges.
//!
//! # Responsibility
//! - Turn one set of vitals into ordered, human-readable alerts.
//! - Classify a single value into `Low | Normal | High` for badges.
//!
//! # Invariants
//! - Alerts and badges share the band constants below; boundaries are
//!   strict (`<` / `>`), the boundary value itself is normal.
//! - Alert order is heart rate, blood pressure, blood sugar.
//! - Pure: nothing here logs, allocates state or reads the clock.

use crate::model::health::Vitals;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const HEART_RATE_LOW_BPM: u32 = 60;
pub const HEART_RATE_HIGH_BPM: u32 = 100;
pub const SYSTOLIC_HIGH_MMHG: u32 = 140;
pub const DIASTOLIC_HIGH_MMHG: u32 = 90;
pub const BLOOD_SUGAR_LOW_MG_DL: u32 = 70;
pub const BLOOD_SUGAR_HIGH_MG_DL: u32 = 140;

/// Metric families that have a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    HeartRate,
    /// Classified by its systolic value.
    BloodPressure,
    BloodSugar,
}

impl MetricType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HeartRate => "heart_rate",
            Self::BloodPressure => "blood_pressure",
            Self::BloodSugar => "blood_sugar",
        }
    }
}

/// Error returned when a metric name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetric(pub String);

impl Display for UnknownMetric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown metric `{}`; expected heart_rate|blood_pressure|blood_sugar",
            self.0
        )
    }
}

impl std::error::Error for UnknownMetric {}

impl FromStr for MetricType {
    type Err = UnknownMetric;

    /// Accepts snake_case and camelCase spellings.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "").as_str() {
            "heartrate" => Ok(Self::HeartRate),
            "bloodpressure" => Ok(Self::BloodPressure),
            "bloodsugar" => Ok(Self::BloodSugar),
            _ => Err(UnknownMetric(value.trim().to_string())),
        }
    }
}

/// Badge status for one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Low,
    Normal,
    High,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }

    /// Whether the badge should be rendered as a warning.
    pub fn is_abnormal(self) -> bool {
        self != Self::Normal
    }
}

/// Which vital raised an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertMetric {
    HeartRate,
    BloodPressure,
    BloodSugar,
}

/// One out-of-range vital, with the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthAlert {
    pub metric: AlertMetric,
    pub message: String,
}

impl Display for HealthAlert {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Evaluates vitals against the alert bands.
///
/// Absent vitals contribute nothing. Blood pressure is only checked when
/// both systolic and diastolic are present.
pub fn evaluate(vitals: &Vitals) -> Vec<HealthAlert> {
    let mut alerts = Vec::new();

    if let Some(bpm) = vitals.heart_rate {
        if classify(bpm, MetricType::HeartRate).is_abnormal() {
            alerts.push(HealthAlert {
                metric: AlertMetric::HeartRate,
                message: format!("Heart rate: {bpm} bpm"),
            });
        }
    }

    if let Some((systolic, diastolic)) = vitals.blood_pressure() {
        if classify_blood_pressure(systolic, diastolic).is_abnormal() {
            alerts.push(HealthAlert {
                metric: AlertMetric::BloodPressure,
                message: format!("Blood pressure: {systolic}/{diastolic} mmHg"),
            });
        }
    }

    if let Some(sugar) = vitals.blood_sugar {
        if classify(sugar, MetricType::BloodSugar).is_abnormal() {
            alerts.push(HealthAlert {
                metric: AlertMetric::BloodSugar,
                message: format!("Blood sugar: {sugar} mg/dL"),
            });
        }
    }

    alerts
}

/// Plain alert strings, in evaluation order.
pub fn alert_messages(vitals: &Vitals) -> Vec<String> {
    evaluate(vitals)
        .into_iter()
        .map(|alert| alert.message)
        .collect()
}

/// Classifies one value for its metric's badge.
pub fn classify(value: u32, metric: MetricType) -> Status {
    match metric {
        MetricType::HeartRate => band(value, Some(HEART_RATE_LOW_BPM), HEART_RATE_HIGH_BPM),
        MetricType::BloodPressure => band(value, None, SYSTOLIC_HIGH_MMHG),
        MetricType::BloodSugar => band(
            value,
            Some(BLOOD_SUGAR_LOW_MG_DL),
            BLOOD_SUGAR_HIGH_MG_DL,
        ),
    }
}

/// Classifies a full pressure pair; `High` exactly when the alert fires.
pub fn classify_blood_pressure(systolic: u32, diastolic: u32) -> Status {
    if systolic > SYSTOLIC_HIGH_MMHG || diastolic > DIASTOLIC_HIGH_MMHG {
        Status::High
    } else {
        Status::Normal
    }
}

/// Notification body for a freshly recorded reading.
///
/// Returns `None` when nothing is out of range.
pub fn alert_summary(alerts: &[HealthAlert]) -> Option<String> {
    if alerts.is_empty() {
        return None;
    }
    let joined = alerts
        .iter()
        .map(|alert| alert.message.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!(
        "Abnormal readings detected: {joined}. Consider consulting your healthcare provider."
    ))
}

fn band(value: u32, low: Option<u32>, high: u32) -> Status {
    match low {
        Some(low) if value < low => Status::Low,
        _ if value > high => Status::High,
        _ => Status::Normal,
    }
}
