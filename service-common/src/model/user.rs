use serde::{Deserialize, Serialize};

/// A resident as served by the user service.
/// Only `user_id` is guaranteed: the user service stores partially filled profiles,
/// and `role`/`status` are free text since the user service owns their vocabulary.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
