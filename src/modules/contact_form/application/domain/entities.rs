use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::fields::FieldName;

/// One invalid field of one rejected submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrorRecord {
    pub field: FieldName,
    pub label: String,
    pub message: String,
    pub value: String,
    /// ISO-8601 UTC with millisecond precision.
    pub time: String,
}

impl FormErrorRecord {
    pub fn new(field: FieldName, message: String, value: String, at: DateTime<Utc>) -> Self {
        Self {
            field,
            label: field.label().to_string(),
            message,
            value,
            time: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Payload handed to the form's action once every field validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub msg: String,
    /// JSON array of every [`FormErrorRecord`] from earlier attempts.
    #[serde(rename = "form-errors")]
    pub form_errors: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn record_time_is_iso_utc() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let record = FormErrorRecord::new(
            FieldName::Name,
            "Name is required.".to_string(),
            String::new(),
            at,
        );

        assert_eq!(record.time, "2025-03-01T09:30:00.000Z");
        assert_eq!(record.label, "Name");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["field"], "name");
    }
}
