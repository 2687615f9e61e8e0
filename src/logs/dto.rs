use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::error::ApiError;
use crate::logs::repo::WeightLog;

const LOG_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

#[derive(Debug, Deserialize)]
pub struct NewLogRequest {
    pub weight: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub id: i64,
    pub weight: f64,
    pub date: String,
}

impl LogEntry {
    pub fn from_row(log: WeightLog) -> Result<Self, ApiError> {
        let date = log
            .logged_at
            .format(LOG_DATE_FORMAT)
            .map_err(|e| ApiError::Internal(e.into()))?;
        Ok(Self {
            id: log.id,
            weight: log.weight,
            date,
        })
    }
}

/// Clients send weight as a JSON number or a numeric string; anything that
/// does not parse to a finite value is rejected.
pub fn parse_weight(value: &Value) -> Result<f64, ApiError> {
    let weight = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match weight {
        Some(w) if w.is_finite() => Ok(w),
        _ => Err(ApiError::InvalidWeight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;
    use uuid::Uuid;

    #[test]
    fn parse_weight_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_weight(&json!(72.5)).unwrap(), 72.5);
        assert_eq!(parse_weight(&json!(80)).unwrap(), 80.0);
        assert_eq!(parse_weight(&json!("72.5")).unwrap(), 72.5);
        assert_eq!(parse_weight(&json!(" 65 ")).unwrap(), 65.0);
    }

    #[test]
    fn parse_weight_rejects_non_numeric_input() {
        for value in [json!("heavy"), json!(""), json!(true), json!(null), json!([1])] {
            assert!(matches!(
                parse_weight(&value),
                Err(ApiError::InvalidWeight)
            ));
        }
    }

    #[test]
    fn parse_weight_rejects_non_finite_values() {
        for value in [json!("NaN"), json!("inf"), json!("-inf")] {
            assert!(matches!(
                parse_weight(&value),
                Err(ApiError::InvalidWeight)
            ));
        }
    }

    #[test]
    fn log_entry_formats_the_timestamp() {
        let entry = LogEntry::from_row(WeightLog {
            id: 7,
            user_id: Uuid::new_v4(),
            weight: 72.5,
            logged_at: datetime!(2024-03-09 08:15:30 UTC),
        })
        .unwrap();
        assert_eq!(entry.date, "2024-03-09 08:15:30");
        assert_eq!(entry.id, 7);
        assert_eq!(entry.weight, 72.5);
    }
}
