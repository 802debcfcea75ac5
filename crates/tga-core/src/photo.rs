//! Profile photo lookup.
//!
//! The Bot API never hands out a direct photo URL; the bot lists the user's
//! photos, resolves the largest size of the newest one to a file path and
//! builds a download URL carrying its own token.

use async_trait::async_trait;

use crate::{domain::UserId, Result};

/// Result of a profile photo lookup.
///
/// Every failure (no photos, privacy settings, network, malformed response)
/// collapses into `Unavailable`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfilePhoto {
    Found(String),
    Unavailable,
}

impl ProfilePhoto {
    pub fn url(&self) -> Option<&str> {
        match self {
            ProfilePhoto::Found(url) if !url.is_empty() => Some(url.as_str()),
            _ => None,
        }
    }
}

/// Platform calls needed to resolve a profile photo.
#[async_trait]
pub trait ProfilePhotoSource: Send + Sync {
    /// File id of the largest size of the user's first profile photo, if any.
    async fn largest_profile_photo(&self, user_id: UserId) -> Result<Option<String>>;

    /// Server-side path of a file, relative to the file-serving base.
    async fn file_path(&self, file_id: &str) -> Result<String>;
}

/// Where downloadable file URLs are built from.
#[derive(Clone, Debug)]
pub struct FileUrlBase {
    pub base: String,
    pub bot_token: String,
}

impl FileUrlBase {
    pub fn new(base: impl Into<String>, bot_token: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            bot_token: bot_token.into(),
        }
    }

    /// `{base}/bot{token}/{path}`
    pub fn url_for(&self, file_path: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.base.trim_end_matches('/'),
            self.bot_token,
            file_path.trim_start_matches('/')
        )
    }
}

/// Resolve a user's current profile photo to a fetchable URL.
///
/// Never fails: errors are logged at debug level and reported as `Unavailable`.
pub async fn resolve_profile_photo(
    source: &dyn ProfilePhotoSource,
    files: &FileUrlBase,
    user_id: UserId,
) -> ProfilePhoto {
    match try_resolve(source, files, user_id).await {
        Ok(Some(url)) => ProfilePhoto::Found(url),
        Ok(None) => ProfilePhoto::Unavailable,
        Err(e) => {
            tracing::debug!(user_id = user_id.0, error = %e, "profile photo unavailable");
            ProfilePhoto::Unavailable
        }
    }
}

async fn try_resolve(
    source: &dyn ProfilePhotoSource,
    files: &FileUrlBase,
    user_id: UserId,
) -> Result<Option<String>> {
    let Some(file_id) = source.largest_profile_photo(user_id).await? else {
        return Ok(None);
    };
    let path = source.file_path(&file_id).await?;
    if path.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(files.url_for(&path)))
}
