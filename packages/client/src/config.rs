//! Endpoint configuration.

use crate::{domain::IdentityToken, error::ClientError};

/// Query parameter carrying the identity token on both endpoints.
pub const IDENTITY_QUERY_PARAM: &str = "userID";

pub const DEFAULT_BASE_URL: &str = "ws://127.0.0.1:8080";
pub const DEFAULT_QUEUE_PATH: &str = "/ws/queue";
pub const DEFAULT_CHAT_PATH: &str = "/ws/chat";

/// Where the queue and chat channels live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and authority, optionally with a path prefix (e.g. `wss://host/ragbot`)
    pub base_url: String,
    /// Path of the queue endpoint, appended to `base_url`
    pub queue_path: String,
    /// Path of the chat endpoint, appended to `base_url`
    pub chat_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            queue_path: DEFAULT_QUEUE_PATH.to_string(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a config, validating the base URL scheme.
    ///
    /// A trailing `/` on `base_url` is dropped and paths without a leading `/` get one.
    pub fn new(
        base_url: impl Into<String>,
        queue_path: impl Into<String>,
        chat_path: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("ws://") || base_url.starts_with("wss://")) {
            return Err(ClientError::InvalidConfig(format!(
                "base URL must start with ws:// or wss://, got '{}'",
                base_url
            )));
        }

        Ok(Self {
            base_url,
            queue_path: normalize_path(queue_path.into()),
            chat_path: normalize_path(chat_path.into()),
        })
    }

    /// Queue endpoint addressed by the identity token
    pub fn queue_url(&self, identity: &IdentityToken) -> String {
        endpoint(&self.base_url, &self.queue_path, identity)
    }

    /// Chat endpoint addressed by the identity token
    pub fn chat_url(&self, identity: &IdentityToken) -> String {
        endpoint(&self.base_url, &self.chat_path, identity)
    }
}

fn normalize_path(path: String) -> String {
    if path.starts_with('/') {
        path
    } else {
        format!("/{}", path)
    }
}

fn endpoint(base_url: &str, path: &str, identity: &IdentityToken) -> String {
    format!(
        "{}{}?{}={}",
        base_url, path, IDENTITY_QUERY_PARAM, identity
    )
}
