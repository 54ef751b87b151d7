//! User account model and the compact author/assignee summary.

use serde::{Deserialize, Serialize};

use crate::schema::{Field, Schema, Validated};
use crate::types::{DbId, Timestamp};

/// The signed-in account, as returned by `GET /users/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub nickname: String,
    pub profile_image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Validated for User {
    fn schema() -> Schema {
        Schema::object([
            Field::required("id", Schema::Integer),
            Field::required("email", Schema::String),
            Field::required("nickname", Schema::String),
            Field::required("profileImageUrl", Schema::nullable(Schema::String)),
            Field::required("createdAt", Schema::DateTime),
            Field::required("updatedAt", Schema::DateTime),
        ])
    }
}

/// Compact user embedded in cards (`assignee`) and comments (`author`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: DbId,
    pub nickname: String,
    pub profile_image_url: Option<String>,
}

impl Validated for UserSummary {
    fn schema() -> Schema {
        Schema::object([
            Field::required("id", Schema::Integer),
            Field::required("nickname", Schema::String),
            Field::required("profileImageUrl", Schema::nullable(Schema::String)),
        ])
    }
}

/// DTO for `PUT /users/me`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate;
    use serde_json::json;

    #[test]
    fn user_fixture_round_trips_through_schema() {
        let user: User = validate(json!({
            "id": 12,
            "email": "kim@example.com",
            "nickname": "kim",
            "profileImageUrl": null,
            "createdAt": "2024-02-01T10:00:00.000Z",
            "updatedAt": "2024-02-03T10:00:00.000Z",
        }))
        .unwrap();

        assert_eq!(user.nickname, "kim");
        assert!(user.profile_image_url.is_none());
    }

    #[test]
    fn update_user_skips_unset_fields() {
        let body = serde_json::to_value(UpdateUser {
            nickname: Some("lee".into()),
            profile_image_url: None,
        })
        .unwrap();
        assert_eq!(body, json!({"nickname": "lee"}));
    }
}
