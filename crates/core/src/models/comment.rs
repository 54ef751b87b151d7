//! Comment entity and DTOs.

use serde::{Deserialize, Serialize};

use crate::models::user::UserSummary;
use crate::schema::{Field, Schema, Validated};
use crate::types::{DbId, Timestamp};

/// A comment on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: DbId,
    pub content: String,
    pub card_id: DbId,
    pub author: UserSummary,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Validated for Comment {
    fn schema() -> Schema {
        Schema::object([
            Field::required("id", Schema::Integer),
            Field::required("content", Schema::String),
            Field::required("cardId", Schema::Integer),
            Field::required("author", UserSummary::schema()),
            Field::required("createdAt", Schema::DateTime),
            Field::required("updatedAt", Schema::DateTime),
        ])
    }
}

/// Response of `GET /comments`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentList {
    pub cursor_id: Option<DbId>,
    pub comments: Vec<Comment>,
}

impl Validated for CommentList {
    fn schema() -> Schema {
        Schema::object([
            Field::required("cursorId", Schema::nullable(Schema::Integer)),
            Field::required("comments", Schema::array_of(Comment::schema())),
        ])
    }
}

/// DTO for `POST /comments`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    pub content: String,
    pub card_id: DbId,
    pub column_id: DbId,
    pub dashboard_id: DbId,
}

/// DTO for `PATCH /comments/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateComment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Query parameters for `GET /comments`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsParams {
    pub card_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_id: Option<DbId>,
}

impl ListCommentsParams {
    pub fn for_card(card_id: DbId) -> Self {
        Self {
            card_id,
            ..Self::default()
        }
    }
}
