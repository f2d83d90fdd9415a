//! Records owned by sibling services, as they appear on the wire.
pub mod event;
pub mod user;

pub use event::EventModel;
pub use user::User;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Dates are written as RFC 3339 in UTC with millisecond precision, or `null` when unset.
pub fn serialize_datetime<S>(
    datetime: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match datetime {
        Some(datetime) => {
            serializer.serialize_str(&datetime.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        None => serializer.serialize_none(),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireDate {
    EpochMillis(i64),
    Formatted(String),
}

/// Dates are read either as an RFC 3339 string or as milliseconds since the epoch,
/// depending on how the owning service's serializer is configured. `null` reads as `None`.
pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let datetime = match Option::<WireDate>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(WireDate::EpochMillis(millis)) => Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| serde::de::Error::custom("epoch milliseconds out of range"))?,
        Some(WireDate::Formatted(formatted)) => DateTime::parse_from_rfc3339(&formatted)
            .or_else(|_| DateTime::parse_from_str(&formatted, "%Y-%m-%dT%H:%M:%S%.f%z"))
            .map(|datetime| datetime.with_timezone(&Utc))
            .map_err(|_| serde::de::Error::custom("Invalid datetime format"))?,
    };

    Ok(Some(datetime))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Dated {
        #[serde(
            default,
            serialize_with = "serialize_datetime",
            deserialize_with = "deserialize_datetime"
        )]
        at: Option<DateTime<Utc>>,
    }

    fn expected() -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
    }

    #[test]
    fn test_deserialize_rfc3339() {
        let dated: Dated =
            serde_json::from_str(r#"{"at": "2024-05-01T10:00:00.000+00:00"}"#).unwrap();
        assert_eq!(dated.at, expected());

        let dated: Dated = serde_json::from_str(r#"{"at": "2024-05-01T12:00:00+02:00"}"#).unwrap();
        assert_eq!(dated.at, expected());
    }

    #[test]
    fn test_deserialize_offset_without_colon() {
        let dated: Dated =
            serde_json::from_str(r#"{"at": "2024-05-01T10:00:00.000+0000"}"#).unwrap();
        assert_eq!(dated.at, expected());
    }

    #[test]
    fn test_deserialize_epoch_millis() {
        let dated: Dated = serde_json::from_str(r#"{"at": 1714557600000}"#).unwrap();
        assert_eq!(dated.at, expected());
    }

    #[test]
    fn test_deserialize_null_or_missing() {
        let dated: Dated = serde_json::from_str(r#"{"at": null}"#).unwrap();
        assert_eq!(dated.at, None);

        let dated: Dated = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(dated.at, None);
    }

    #[test]
    fn test_deserialize_rejects_other_shapes() {
        assert!(serde_json::from_str::<Dated>(r#"{"at": "yesterday"}"#).is_err());
        assert!(serde_json::from_str::<Dated>(r#"{"at": true}"#).is_err());
        assert!(serde_json::from_str::<Dated>(r#"{"at": 1.5}"#).is_err());
    }

    #[test]
    fn test_serialize_millisecond_utc() {
        let dated = Dated { at: expected() };
        assert_eq!(
            serde_json::to_string(&dated).unwrap(),
            r#"{"at":"2024-05-01T10:00:00.000Z"}"#
        );

        let dated = Dated { at: None };
        assert_eq!(serde_json::to_string(&dated).unwrap(), r#"{"at":null}"#);
    }
}
