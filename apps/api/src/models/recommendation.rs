use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::HasId;

/// An endorsement left for a profile. Append-only. Ids are unix-millisecond
/// timestamps rather than max-plus-one, so they stay unique without reading
/// the array first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: i64,
    pub to_id: i64,
    pub message: String,
    pub from: String,
    pub created_at: DateTime<Utc>,
}

impl HasId for Recommendation {
    fn id(&self) -> i64 {
        self.id
    }
}
