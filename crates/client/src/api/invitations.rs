//! `/invitations` operations (invitations addressed to the caller).

use taskify_core::models::{Invitation, InvitationList, ListInvitationsParams, RespondToInvitation};
use taskify_core::types::DbId;

use crate::error::ApiResult;
use crate::fetch::ApiClient;
use crate::pagination::collect_all;

#[derive(Debug, Clone, Copy)]
pub struct InvitationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> InvitationsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /invitations?size=&cursorId=&title=`
    pub async fn list(&self, params: &ListInvitationsParams) -> ApiResult<InvitationList> {
        self.client.get_with("invitations", params).await
    }

    /// Every invitation addressed to the caller, optionally filtered by
    /// dashboard title.
    pub async fn list_all(&self, title: Option<&str>, page_size: u32) -> ApiResult<Vec<Invitation>> {
        let api = *self;
        let title = title.map(str::to_owned);
        collect_all(move |cursor_id| {
            let params = ListInvitationsParams {
                size: Some(page_size),
                cursor_id,
                title: title.clone(),
            };
            async move { api.list(&params).await }
        })
        .await
    }

    /// `PUT /invitations/{id}` with `{ "inviteAccepted": bool }`.
    pub async fn respond(&self, invitation_id: DbId, accept: bool) -> ApiResult<Invitation> {
        let body = RespondToInvitation {
            invite_accepted: accept,
        };
        self.client
            .put(&format!("invitations/{invitation_id}"), &body)
            .await
    }
}
