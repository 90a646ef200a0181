use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::HasId;

/// A registered account.
// TODO: hash passwords (bcrypt/argon2) before this goes anywhere near
// production; they are stored and compared as plain strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl HasId for User {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Public projection returned by `/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        PublicUser {
            id: user.id,
            username: user.username.clone(),
        }
    }
}
