//! Post documents stored in the content collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::file::ImageSource;
use crate::Error;

/// Publication state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Active,
    Inactive,
}

impl PostStatus {
    /// Returns the wire string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Active => "active",
            PostStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(PostStatus::Active),
            "inactive" => Ok(PostStatus::Inactive),
            other => Err(Error::InvalidStatus(other.to_string())),
        }
    }
}

/// Caller-supplied fields for creating a post.
///
/// `owner_user_id` must be non-empty; creation is refused before any remote
/// call otherwise. The featured image may be a reference to an already
/// stored file or a raw payload to upload first.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub featured_image: Option<ImageSource>,
    pub status: PostStatus,
    pub owner_user_id: String,
}

/// Caller-supplied fields for updating a post.
///
/// An update replaces the stored fields with exactly what is supplied here.
/// There is no merge with the stored document; callers resupply unchanged
/// fields themselves.
#[derive(Debug, Clone, Serialize)]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
    #[serde(rename = "featuredimage", skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub status: PostStatus,
}

/// Wire shape of a post's document data as the collection stores it.
#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub title: String,
    pub content: String,
    #[serde(rename = "featuredimage", skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub status: PostStatus,
    #[serde(rename = "userid")]
    pub owner_user_id: String,
}

/// A post document as returned by the document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDocument {
    /// Caller-chosen primary key within the collection.
    #[serde(rename = "$id")]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Stored-file id of the featured image, when one is attached.
    #[serde(rename = "featuredimage", default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub status: PostStatus,
    #[serde(rename = "userid", default)]
    pub owner_user_id: String,
    #[serde(rename = "$createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "$updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of post documents from a list call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostList {
    pub total: u64,
    pub documents: Vec<PostDocument>,
}
