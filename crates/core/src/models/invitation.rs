//! Dashboard invitation model and DTOs.

use serde::{Deserialize, Serialize};

use crate::schema::{Field, Schema, Validated};
use crate::types::{DbId, Timestamp};

/// Inviter or invitee as embedded in an invitation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvitationUser {
    pub id: DbId,
    pub nickname: String,
    pub email: String,
}

impl Validated for InvitationUser {
    fn schema() -> Schema {
        Schema::object([
            Field::required("id", Schema::Integer),
            Field::required("nickname", Schema::String),
            Field::required("email", Schema::String),
        ])
    }
}

/// The dashboard an invitation points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRef {
    pub id: DbId,
    pub title: String,
}

impl Validated for DashboardRef {
    fn schema() -> Schema {
        Schema::object([
            Field::required("id", Schema::Integer),
            Field::required("title", Schema::String),
        ])
    }
}

/// An invitation to join a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: DbId,
    pub inviter: InvitationUser,
    pub invitee: InvitationUser,
    pub team_id: String,
    pub dashboard: DashboardRef,
    /// `None` while pending, `Some(_)` once decided.
    pub invite_accepted: Option<bool>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Invitation {
    pub fn is_pending(&self) -> bool {
        self.invite_accepted.is_none()
    }
}

impl Validated for Invitation {
    fn schema() -> Schema {
        Schema::object([
            Field::required("id", Schema::Integer),
            Field::required("inviter", InvitationUser::schema()),
            Field::required("invitee", InvitationUser::schema()),
            Field::required("teamId", Schema::String),
            Field::required("dashboard", DashboardRef::schema()),
            Field::required("inviteAccepted", Schema::nullable(Schema::Boolean)),
            Field::required("createdAt", Schema::DateTime),
            Field::required("updatedAt", Schema::DateTime),
        ])
    }
}

/// Response of `GET /invitations` (invitations addressed to the caller).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationList {
    pub cursor_id: Option<DbId>,
    pub invitations: Vec<Invitation>,
}

impl Validated for InvitationList {
    fn schema() -> Schema {
        Schema::object([
            Field::required("cursorId", Schema::nullable(Schema::Integer)),
            Field::required("invitations", Schema::array_of(Invitation::schema())),
        ])
    }
}

/// DTO for `PUT /invitations/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondToInvitation {
    pub invite_accepted: bool,
}

/// Query parameters for `GET /invitations`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInvitationsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_id: Option<DbId>,
    /// Filter by dashboard title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
