use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_datetime, serialize_datetime};

/// An event as served by the event service.
/// Note `user_id` is the numeric owner id used by the event service, not a resident id.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventModel {
    pub event_id: String,
    #[serde(default)]
    pub event_title: Option<String>,
    #[serde(default)]
    pub event_description: Option<String>,
    #[serde(default)]
    pub event_img: Option<String>,
    #[serde(
        default,
        serialize_with = "serialize_datetime",
        deserialize_with = "deserialize_datetime"
    )]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub event_type: Option<String>,
    pub user_id: i32,
}
