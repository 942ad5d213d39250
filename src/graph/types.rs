use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::SocialGraphError;

/// Descriptive profile attached to every user. No algorithm reads these fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub name: String,
    pub age: u32,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

/// Input record for [`crate::graph::SocialGraph::insert_user`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub location: String,
}

impl NewUser {
    pub fn new(username: &str, name: &str, age: u32, location: &str) -> Self {
        Self {
            username: username.to_string(),
            name: name.to_string(),
            age,
            location: location.to_string(),
        }
    }
}

/// Canonical form of a username: trimmed and lowercased.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

pub fn validate_key(key: &str) -> Result<String, SocialGraphError> {
    let normalized = normalize_key(key);
    if normalized.is_empty() {
        return Err(SocialGraphError::invalid_input("username must be set"));
    }
    Ok(normalized)
}

/// Only the username is checked; profile fields are free-form.
pub fn validate_user(user: &NewUser) -> Result<String, SocialGraphError> {
    validate_key(&user.username)
}
