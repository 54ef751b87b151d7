//! Column entity and DTOs.

use serde::{Deserialize, Serialize};

use crate::schema::{Field, Schema, Validated};
use crate::types::{DbId, Timestamp};

/// A column on a dashboard. Display order among columns is whatever the
/// backend returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: DbId,
    pub title: String,
    pub team_id: String,
    #[serde(default)]
    pub dashboard_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Validated for Column {
    fn schema() -> Schema {
        Schema::object([
            Field::required("id", Schema::Integer),
            Field::required("title", Schema::String),
            Field::required("teamId", Schema::String),
            Field::optional("dashboardId", Schema::Integer),
            Field::required("createdAt", Schema::DateTime),
            Field::required("updatedAt", Schema::DateTime),
        ])
    }
}

/// Response of `GET /columns`. Columns are not paginated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnList {
    pub result: String,
    pub data: Vec<Column>,
}

impl Validated for ColumnList {
    fn schema() -> Schema {
        Schema::object([
            Field::required("result", Schema::String),
            Field::required("data", Schema::array_of(Column::schema())),
        ])
    }
}

/// Response of `POST /columns/{id}/card-image`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    pub image_url: String,
}

impl Validated for CardImage {
    fn schema() -> Schema {
        Schema::object([Field::required("imageUrl", Schema::String)])
    }
}

/// DTO for `POST /columns`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateColumn {
    pub title: String,
    pub dashboard_id: DbId,
}

/// DTO for `PATCH /columns/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateColumn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Query parameters for `GET /columns`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListColumnsParams {
    pub dashboard_id: DbId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate;
    use serde_json::json;

    #[test]
    fn column_list_fixture_is_accepted() {
        let list: ColumnList = validate(json!({
            "result": "SUCCESS",
            "data": [
                {
                    "id": 9,
                    "title": "To do",
                    "teamId": "4-1",
                    "dashboardId": 3,
                    "createdAt": "2024-03-01T09:30:00.000Z",
                    "updatedAt": "2024-03-01T09:30:00.000Z",
                },
                {
                    "id": 10,
                    "title": "Done",
                    "teamId": "4-1",
                    "createdAt": "2024-03-01T09:31:00.000Z",
                    "updatedAt": "2024-03-01T09:31:00.000Z",
                },
            ],
        }))
        .unwrap();

        assert_eq!(list.data.len(), 2);
        assert_eq!(list.data[0].dashboard_id, Some(3));
        assert_eq!(list.data[1].dashboard_id, None);
    }

    #[test]
    fn column_rejects_numeric_team_id() {
        let err = validate::<Column>(json!({
            "id": 9,
            "title": "To do",
            "teamId": 4,
            "createdAt": "2024-03-01T09:30:00.000Z",
            "updatedAt": "2024-03-01T09:30:00.000Z",
        }))
        .unwrap_err();
        assert_eq!(err.paths(), vec!["$.teamId"]);
    }

    #[test]
    fn update_column_body_carries_title_only() {
        let body = serde_json::to_value(UpdateColumn {
            title: Some("Done".into()),
        })
        .unwrap();
        assert_eq!(body, json!({"title": "Done"}));
    }
}
