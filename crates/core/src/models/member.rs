//! Dashboard member model.

use serde::{Deserialize, Serialize};

use crate::schema::{Field, Schema, Validated};
use crate::types::{DbId, Timestamp};

/// A user's membership of one dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: DbId,
    pub user_id: DbId,
    pub email: String,
    pub nickname: String,
    pub profile_image_url: Option<String>,
    pub is_owner: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Validated for Member {
    fn schema() -> Schema {
        Schema::object([
            Field::required("id", Schema::Integer),
            Field::required("userId", Schema::Integer),
            Field::required("email", Schema::String),
            Field::required("nickname", Schema::String),
            Field::required("profileImageUrl", Schema::nullable(Schema::String)),
            Field::required("isOwner", Schema::Boolean),
            Field::required("createdAt", Schema::DateTime),
            Field::required("updatedAt", Schema::DateTime),
        ])
    }
}

/// Response of `GET /members`. Page-numbered, no cursor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberList {
    pub members: Vec<Member>,
    pub total_count: i64,
}

impl MemberList {
    pub fn owner(&self) -> Option<&Member> {
        self.members.iter().find(|m| m.is_owner)
    }
}

impl Validated for MemberList {
    fn schema() -> Schema {
        Schema::object([
            Field::required("members", Schema::array_of(Member::schema())),
            Field::required("totalCount", Schema::Integer),
        ])
    }
}

/// Query parameters for `GET /members`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMembersParams {
    pub dashboard_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl ListMembersParams {
    pub fn for_dashboard(dashboard_id: DbId) -> Self {
        Self {
            dashboard_id,
            ..Self::default()
        }
    }
}
