//! Card entity, list envelope, and DTOs.

use serde::{Deserialize, Serialize};

use crate::models::user::UserSummary;
use crate::schema::{Field, Schema, Validated};
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// A card. Belongs to exactly one column; `order` positions it within that
/// column when the backend supplies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Present on every card; `None` when no due date has been set.
    pub due_date: Option<String>,
    pub assignee: UserSummary,
    pub image_url: Option<String>,
    pub team_id: String,
    pub column_id: DbId,
    #[serde(default)]
    pub dashboard_id: Option<DbId>,
    #[serde(default)]
    pub order: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Validated for Card {
    fn schema() -> Schema {
        Schema::object([
            Field::required("id", Schema::Integer),
            Field::required("title", Schema::String),
            Field::required("description", Schema::String),
            Field::required("tags", Schema::array_of(Schema::String)),
            Field::required("dueDate", Schema::nullable(Schema::String)),
            Field::required("assignee", UserSummary::schema()),
            Field::required("imageUrl", Schema::nullable(Schema::String)),
            Field::required("teamId", Schema::String),
            Field::required("columnId", Schema::Integer),
            Field::optional("dashboardId", Schema::Integer),
            Field::optional("order", Schema::Integer),
            Field::required("createdAt", Schema::DateTime),
            Field::required("updatedAt", Schema::DateTime),
        ])
    }
}

/// Response of `GET /cards`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardList {
    /// Cursor for the next page; `None` once the column is exhausted.
    pub cursor_id: Option<DbId>,
    pub total_count: i64,
    pub cards: Vec<Card>,
}

impl Validated for CardList {
    fn schema() -> Schema {
        Schema::object([
            Field::required("cursorId", Schema::nullable(Schema::Integer)),
            Field::required("totalCount", Schema::Integer),
            Field::required("cards", Schema::array_of(Card::schema())),
        ])
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for `POST /cards`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_user_id: Option<DbId>,
    pub dashboard_id: DbId,
    pub column_id: DbId,
    pub title: String,
    pub description: String,
    /// Omitted from the body when not provided in this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// DTO for `PATCH /cards/{id}`. Only the fields being changed are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_user_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Query parameters for `GET /cards` (`?columnId=&size=&cursorId=`).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCardsParams {
    pub column_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_id: Option<DbId>,
}

impl ListCardsParams {
    pub fn for_column(column_id: DbId) -> Self {
        Self {
            column_id,
            ..Self::default()
        }
    }
}
