//! Identity service records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account record from the identity service. Read-only from this
/// layer's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "$createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// An opaque login session. The caller owns its lifecycle; this layer
/// never inspects or persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(rename = "expire", default)]
    pub expires_at: Option<DateTime<Utc>>,
}
