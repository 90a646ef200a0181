use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::HasId;

/// A contact message left for a profile. Append-only; `to_id` is not checked
/// against the profiles store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub to_id: i64,
    pub text: String,
    pub from_name: Option<String>,
    pub from_contact: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl HasId for Message {
    fn id(&self) -> i64 {
        self.id
    }
}
