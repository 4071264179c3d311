use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::time::{date_from_millis, parse_record_date};

/// Raw date as supplied by the data source: either epoch milliseconds
/// or a date string. Unresolvable values are excluded downstream
/// rather than surfaced as errors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum DateField {
    Millis(i64),
    Text(String),
}

impl DateField {
    pub fn resolve(&self) -> Option<NaiveDate> {
        match self {
            DateField::Millis(ms) => date_from_millis(*ms),
            DateField::Text(s) => parse_record_date(s),
        }
    }
}

impl From<NaiveDate> for DateField {
    fn from(date: NaiveDate) -> Self {
        DateField::Text(date.format("%Y-%m-%d").to_string())
    }
}

/// One day of input data. The count fields are lenient on purpose:
/// a missing or null field is `None`, a JSON number is `Some(n)`, and
/// any other JSON type becomes `Some(NaN)` so the renderer can skip
/// the cell instead of the whole load failing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: DateField,
    #[serde(default, deserialize_with = "lenient_count")]
    pub incidents: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub risks: Option<f64>,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, incidents: f64, risks: f64) -> Self {
        Self {
            date: date.into(),
            incidents: Some(incidents),
            risks: Some(risks),
        }
    }
}

/// Per-day counts after coalescing, ready for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DayCounts {
    pub incidents: f64,
    pub risks: f64,
}

/// One shaped data point: a record that matched the selected month.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredPoint {
    pub date: NaiveDate,
    pub counts: DayCounts,
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(n.as_f64().unwrap_or(f64::NAN)),
        Some(_) => Some(f64::NAN),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_text_date() {
        let field = DateField::Text("2025-02-24".to_string());
        assert_eq!(field.resolve(), NaiveDate::from_ymd_opt(2025, 2, 24));
    }

    #[test]
    fn test_resolve_millis_date() {
        let field = DateField::Millis(1740355200000);
        assert_eq!(field.resolve(), NaiveDate::from_ymd_opt(2025, 2, 24));
    }

    #[test]
    fn test_resolve_malformed_is_none() {
        let field = DateField::Text("24/02/2025".to_string());
        assert_eq!(field.resolve(), None);
    }

    #[test]
    fn test_deserialize_missing_counts() {
        let record: DailyRecord = serde_json::from_str(r#"{"date":"2025-02-24"}"#).unwrap();
        assert_eq!(record.incidents, None);
        assert_eq!(record.risks, None);
    }

    #[test]
    fn test_deserialize_numeric_counts() {
        let record: DailyRecord =
            serde_json::from_str(r#"{"date":"2025-02-24","incidents":3,"risks":0}"#).unwrap();
        assert_eq!(record.incidents, Some(3.0));
        assert_eq!(record.risks, Some(0.0));
    }

    #[test]
    fn test_deserialize_non_numeric_count_is_nan() {
        let record: DailyRecord =
            serde_json::from_str(r#"{"date":"2025-02-24","incidents":"lots","risks":1}"#).unwrap();
        assert!(record.incidents.unwrap().is_nan());
        assert_eq!(record.risks, Some(1.0));
    }

    #[test]
    fn test_deserialize_millis_date() {
        let record: DailyRecord =
            serde_json::from_str(r#"{"date":1740355200000,"incidents":1}"#).unwrap();
        assert_eq!(record.date.resolve(), NaiveDate::from_ymd_opt(2025, 2, 24));
    }

    #[test]
    fn test_roundtrip_new_record() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let record = DailyRecord::new(date, 2.0, 1.0);
        let json = serde_json::to_string(&record).unwrap();
        let back: DailyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
