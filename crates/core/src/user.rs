//! User model.

use serde::{Deserialize, Serialize};
use crate::id::UserId;
use crate::Time;

/// A person tracking goals in one or more pods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Avatar image location
    #[serde(default)]
    pub avatar_url: String,

    /// When created
    pub created_at: Time,
}

impl User {
    /// Create a new user.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            avatar_url: String::new(),
            created_at: chrono::Utc::now(),
        }
    }
}
