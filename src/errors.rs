use thiserror::Error;

/// Error type for social graph operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SocialGraphError {
    #[error("user already exists: {0}")]
    AlreadyExists(String),
    #[error("user not found: {0}")]
    NotFound(String),
    #[error("user cannot befriend themselves: {0}")]
    SelfLoop(String),
    #[error("already friends: {0} and {1}")]
    AlreadyFriends(String, String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl SocialGraphError {
    pub fn already_exists<T: Into<String>>(key: T) -> Self {
        SocialGraphError::AlreadyExists(key.into())
    }

    pub fn not_found<T: Into<String>>(key: T) -> Self {
        SocialGraphError::NotFound(key.into())
    }

    pub fn self_loop<T: Into<String>>(key: T) -> Self {
        SocialGraphError::SelfLoop(key.into())
    }

    pub fn already_friends<A: Into<String>, B: Into<String>>(a: A, b: B) -> Self {
        SocialGraphError::AlreadyFriends(a.into(), b.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        SocialGraphError::InvalidInput(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        SocialGraphError::Serialization(msg.into())
    }
}

impl From<serde_json::Error> for SocialGraphError {
    fn from(err: serde_json::Error) -> Self {
        SocialGraphError::serialization(err.to_string())
    }
}
