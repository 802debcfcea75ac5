//! Canonical JSON rendering of a user profile.

use serde::{Deserialize, Serialize};

use crate::{domain::User, photo::ProfilePhoto, Result};

/// Wire shape of the profile dump shown by `/info`.
///
/// Optional platform fields are flattened to empty strings; `photo_url` is
/// omitted entirely when no photo could be resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileJson {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub language_code: String,
    pub is_premium: bool,
    pub allows_write_to_pm: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl ProfileJson {
    pub fn new(user: &User, photo: &ProfilePhoto) -> Self {
        Self {
            id: user.id.0,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone().unwrap_or_default(),
            username: user.username.clone().unwrap_or_default(),
            language_code: user.language_code.clone().unwrap_or_default(),
            is_premium: user.is_premium,
            allows_write_to_pm: user.allows_write_to_pm(),
            photo_url: photo.url().map(str::to_string),
        }
    }
}

/// Pretty-printed (2-space indented) JSON, non-ASCII kept as-is.
pub fn format_user_info(user: &User, photo: &ProfilePhoto) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ProfileJson::new(user, photo))?)
}
