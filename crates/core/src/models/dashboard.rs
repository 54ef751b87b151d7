//! Dashboard entity, palette, and DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::invitation::Invitation;
use crate::schema::{Field, Schema, Validated};
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// The fixed dashboard colour palette. Serialized as its hex code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardColor {
    #[serde(rename = "#7AC555")]
    Green,
    #[serde(rename = "#760DDE")]
    Purple,
    #[serde(rename = "#FFA500")]
    Orange,
    #[serde(rename = "#76A5EA")]
    Blue,
    #[serde(rename = "#E876EA")]
    Pink,
}

impl DashboardColor {
    /// Hex codes accepted by the backend, in palette order.
    pub const HEX_CODES: &'static [&'static str] =
        &["#7AC555", "#760DDE", "#FFA500", "#76A5EA", "#E876EA"];

    pub const ALL: [DashboardColor; 5] = [
        DashboardColor::Green,
        DashboardColor::Purple,
        DashboardColor::Orange,
        DashboardColor::Blue,
        DashboardColor::Pink,
    ];

    pub fn as_hex(self) -> &'static str {
        match self {
            DashboardColor::Green => "#7AC555",
            DashboardColor::Purple => "#760DDE",
            DashboardColor::Orange => "#FFA500",
            DashboardColor::Blue => "#76A5EA",
            DashboardColor::Pink => "#E876EA",
        }
    }
}

impl fmt::Display for DashboardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_hex())
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// A dashboard. Membership is modelled separately by
/// [`Member`](crate::models::Member).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub id: DbId,
    pub title: String,
    pub color: DashboardColor,
    pub user_id: DbId,
    pub created_by_me: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Validated for Dashboard {
    fn schema() -> Schema {
        Schema::object([
            Field::required("id", Schema::Integer),
            Field::required("title", Schema::String),
            Field::required("color", Schema::OneOf(DashboardColor::HEX_CODES)),
            Field::required("userId", Schema::Integer),
            Field::required("createdByMe", Schema::Boolean),
            Field::required("createdAt", Schema::DateTime),
            Field::required("updatedAt", Schema::DateTime),
        ])
    }
}

/// Response of `GET /dashboards`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardList {
    pub cursor_id: Option<DbId>,
    pub total_count: i64,
    pub dashboards: Vec<Dashboard>,
}

impl Validated for DashboardList {
    fn schema() -> Schema {
        Schema::object([
            Field::required("cursorId", Schema::nullable(Schema::Integer)),
            Field::required("totalCount", Schema::Integer),
            Field::required("dashboards", Schema::array_of(Dashboard::schema())),
        ])
    }
}

/// Response of `GET /dashboards/{id}/invitations`. Page-numbered, no cursor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardInvitationList {
    pub total_count: i64,
    pub invitations: Vec<Invitation>,
}

impl Validated for DashboardInvitationList {
    fn schema() -> Schema {
        Schema::object([
            Field::required("totalCount", Schema::Integer),
            Field::required("invitations", Schema::array_of(Invitation::schema())),
        ])
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for `POST /dashboards`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDashboard {
    pub title: String,
    pub color: DashboardColor,
}

/// DTO for `PATCH /dashboards/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDashboard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<DashboardColor>,
}

/// DTO for `POST /dashboards/{id}/invitations`.
#[derive(Debug, Clone, Serialize)]
pub struct InviteToDashboard {
    pub email: String,
}

/// How the dashboard list is paged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NavigationMethod {
    /// Cursor-based, driven by `cursorId`.
    #[default]
    InfiniteScroll,
    /// Page-numbered, driven by `page`.
    Pagination,
}

/// Query parameters for `GET /dashboards`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDashboardsParams {
    pub navigation_method: NavigationMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// Query parameters for `GET /dashboards/{id}/invitations`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListDashboardInvitationsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}
