//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose the health evaluator and calendar indexer to the UI host via FRB.
//! - Keep error semantics simple: envelopes with `ok` and a message.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Dates cross the boundary as `YYYY-MM-DD` strings.

use daypanel_core::{
    alert_summary, classify, core_version as core_version_inner, date_key, days_in_month,
    evaluate, init_logging as init_logging_inner, is_today_local, normalize_date,
    ping as ping_inner, shift_month, MetricType, MonthStep, NewReading, Vitals,
};
use log::warn;

/// Confirmation shown when a reading is inside every band.
const READING_OK_MESSAGE: &str = "All readings are within normal range.";

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Alert evaluation envelope for the reading form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheckResponse {
    /// `false` when the reading carries no vital sign.
    pub ok: bool,
    /// Alert strings in heart rate, blood pressure, blood sugar order.
    pub alerts: Vec<String>,
    /// Notification text for the UI.
    pub message: String,
}

/// Badge envelope for one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    pub ok: bool,
    /// `low|normal|high` when `ok`.
    pub status: Option<String>,
    pub message: String,
}

/// Month grid envelope; `None` cells are leading blanks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGridResponse {
    pub ok: bool,
    pub cells: Vec<Option<String>>,
    pub message: String,
}

/// Single-date envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateResponse {
    pub ok: bool,
    pub date: Option<String>,
    pub message: String,
}

impl DateResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            date: None,
            message: message.into(),
        }
    }
}

/// Evaluates a reading before it is saved.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Rejects a reading without any vital sign (`ok = false`).
#[flutter_rust_bridge::frb(sync)]
pub fn health_evaluate(
    heart_rate: Option<u32>,
    systolic: Option<u32>,
    diastolic: Option<u32>,
    blood_sugar: Option<u32>,
) -> HealthCheckResponse {
    let reading = NewReading {
        vitals: Vitals {
            heart_rate,
            systolic,
            diastolic,
            blood_sugar,
        },
        notes: None,
    };
    if let Err(err) = reading.validate() {
        return HealthCheckResponse {
            ok: false,
            alerts: Vec::new(),
            message: err.to_string(),
        };
    }

    let alerts = evaluate(&reading.vitals);
    let message = alert_summary(&alerts).unwrap_or_else(|| READING_OK_MESSAGE.to_string());
    HealthCheckResponse {
        ok: true,
        alerts: alerts.into_iter().map(|alert| alert.message).collect(),
        message,
    }
}

/// Classifies one value for its badge.
///
/// `metric` accepts `heart_rate|blood_pressure|blood_sugar` (or camelCase).
#[flutter_rust_bridge::frb(sync)]
pub fn health_classify(value: u32, metric: String) -> StatusResponse {
    match metric.parse::<MetricType>() {
        Ok(metric) => {
            let status = classify(value, metric);
            StatusResponse {
                ok: true,
                status: Some(status.as_str().to_string()),
                message: String::new(),
            }
        }
        Err(err) => StatusResponse {
            ok: false,
            status: None,
            message: err.to_string(),
        },
    }
}

/// Builds the month grid for `year` and 0-indexed `month`.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_month_grid(year: i32, month: u32) -> MonthGridResponse {
    match days_in_month(year, month) {
        Ok(days) => MonthGridResponse {
            ok: true,
            cells: days.into_iter().map(|day| day.map(date_key)).collect(),
            message: String::new(),
        },
        Err(err) => {
            warn!("event=calendar_month_grid module=ffi status=error year={year} month={month}");
            MonthGridResponse {
                ok: false,
                cells: Vec::new(),
                message: err.to_string(),
            }
        }
    }
}

/// Steps a `YYYY-MM-DD` date one month `prev` or `next`.
///
/// Overflowing days roll into the following month.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_shift_month(date: String, direction: String) -> DateResponse {
    let day = match normalize_date(&date) {
        Ok(day) => day,
        Err(err) => return DateResponse::failure(err.to_string()),
    };
    let step = match direction.parse::<MonthStep>() {
        Ok(step) => step,
        Err(err) => return DateResponse::failure(err.to_string()),
    };
    match shift_month(day, step) {
        Ok(shifted) => DateResponse {
            ok: true,
            date: Some(date_key(shifted)),
            message: String::new(),
        },
        Err(err) => DateResponse::failure(err.to_string()),
    }
}

/// Whether `date` is the host's local today; `false` for unparseable input.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_is_today(date: String) -> bool {
    normalize_date(&date)
        .map(is_today_local)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::{
        calendar_is_today, calendar_month_grid, calendar_shift_month, core_version,
        health_classify, health_evaluate, init_logging, ping,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn health_evaluate_rejects_empty_reading() {
        let response = health_evaluate(None, None, None, None);
        assert!(!response.ok);
        assert!(response.alerts.is_empty());
        assert!(response.message.contains("at least one health metric"));
    }

    #[test]
    fn health_evaluate_reports_alerts_in_order() {
        let response = health_evaluate(Some(45), Some(150), Some(95), Some(100));
        assert!(response.ok);
        assert_eq!(
            response.alerts,
            vec!["Heart rate: 45 bpm", "Blood pressure: 150/95 mmHg"]
        );
        assert!(response.message.starts_with("Abnormal readings detected"));

        let calm = health_evaluate(Some(72), None, None, None);
        assert!(calm.ok);
        assert!(calm.alerts.is_empty());
    }

    #[test]
    fn health_classify_maps_status_strings() {
        let response = health_classify(145, "bloodSugar".to_string());
        assert_eq!(response.status.as_deref(), Some("high"));

        let unknown = health_classify(10, "weight".to_string());
        assert!(!unknown.ok);
        assert!(unknown.message.contains("weight"));
    }

    #[test]
    fn month_grid_uses_date_keys_and_blanks() {
        let response = calendar_month_grid(2024, 1);
        assert!(response.ok);
        assert_eq!(response.cells.len(), 33);
        assert_eq!(response.cells[3], None);
        assert_eq!(response.cells[4].as_deref(), Some("2024-02-01"));

        let invalid = calendar_month_grid(2024, 12);
        assert!(!invalid.ok);
        assert!(invalid.message.contains("invalid month 12"));
    }

    #[test]
    fn shift_month_accepts_direction_strings() {
        let response = calendar_shift_month("2024-01-15".to_string(), "prev".to_string());
        assert_eq!(response.date.as_deref(), Some("2023-12-15"));

        let rolled = calendar_shift_month("2024-03-31".to_string(), "PREV".to_string());
        assert_eq!(rolled.date.as_deref(), Some("2024-03-02"));

        let bad_direction = calendar_shift_month("2024-01-15".to_string(), "up".to_string());
        assert!(!bad_direction.ok);

        let bad_date = calendar_shift_month("Jan 15".to_string(), "next".to_string());
        assert!(!bad_date.ok);
    }

    #[test]
    fn is_today_is_false_for_garbage() {
        assert!(!calendar_is_today("not-a-date".to_string()));
        assert!(!calendar_is_today("1999-01-01".to_string()));
    }
}
