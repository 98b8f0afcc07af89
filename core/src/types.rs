//! Resource shapes served by the JSONPlaceholder API.
//!
//! # Design
//! These types mirror the remote schema but are defined independently from the
//! mock-server crate. The wire uses camelCase (`userId`, `postId`); Rust fields
//! stay snake_case via `#[serde(rename_all)]`. Integration tests catch any
//! schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// Identifier of a post, comment or user. The remote uses positive integers.
pub type Id = u64;

/// A blog-post-like resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Id,
    pub user_id: Id,
    pub title: String,
    pub body: String,
}

/// A reply attached to a post through `post_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Id,
    pub post_id: Id,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Payload for creating a post or replacing one wholesale (PUT).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: Id,
}

/// Payload for a partial edit (PATCH). Only the fields present in the JSON are
/// applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Id>,
}

/// Filter for listing posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub user_id: Option<Id>,
}

impl PostQuery {
    pub fn by_user(user_id: Id) -> Self {
        Self { user_id: Some(user_id) }
    }

    /// Render as a query string including the leading `?`, or an empty string.
    pub(crate) fn to_query_string(self) -> String {
        match self.user_id {
            Some(user_id) => format!("?userId={user_id}"),
            None => String::new(),
        }
    }
}
