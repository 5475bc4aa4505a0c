use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::release::ReleaseRecord;

/// A single listen, reduced to what artist discovery needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListenRecord {
    pub user_id: i64,
    pub listened_at: DateTime<Utc>,
    #[serde(default)]
    pub artist_credit_mbids: Vec<String>,
}

/// A release recommended to a user along with how strongly it was matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRelease {
    #[serde(flatten)]
    pub release: ReleaseRecord,
    pub confidence: u64,
}

/// Every release recommended to one user, most confident first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReleases {
    pub user_id: i64,
    pub releases: Vec<ScoredRelease>,
}

/// A batch of per-user recommendations, ready to be handed to a consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentReleasesMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub database: String,
    pub data: Vec<UserReleases>,
}
