//! Wire DTOs for the Appwrite-compatible backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's response shapes (`$id` document keys,
//! camelCase payload fields) so serde round-trips stay lossless. Nothing
//! here owns wire semantics; the backend does.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated account as returned by `GET /account`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique account identifier.
    #[serde(rename = "$id")]
    pub id: String,
    /// Display name chosen at signup.
    pub name: String,
    /// Login email address.
    pub email: String,
}

/// A login session handle as returned by the email-session endpoint.
///
/// The durable session itself lives in a backend-managed cookie; the client
/// only ever inspects these two fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHandle {
    /// Unique session identifier.
    #[serde(rename = "$id")]
    pub id: String,
    /// Account this session belongs to.
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Publication status of a post document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Active,
    Inactive,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// A post document; the document key is the user-chosen slug.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDocument {
    /// URL-safe slug acting as the primary key.
    #[serde(rename = "$id")]
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Markdown body.
    pub content: String,
    /// Identifier of the uploaded cover image.
    #[serde(rename = "featuredImage")]
    pub featured_image: String,
    /// Whether the post is publicly listed.
    pub status: PostStatus,
    /// Account that authored the post.
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// A page of documents from the list endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPage {
    /// Total documents matching the query, across pages.
    pub total: u64,
    /// Documents in this page.
    pub documents: Vec<PostDocument>,
}

/// An uploaded file handle from the storage bucket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    /// Generated file identifier.
    #[serde(rename = "$id")]
    pub id: String,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
