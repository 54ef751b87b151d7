//! `/dashboards` operations, including dashboard-side invitations.

use taskify_core::models::{
    CreateDashboard, Dashboard, DashboardInvitationList, DashboardList, Invitation,
    InviteToDashboard, ListDashboardInvitationsParams, ListDashboardsParams, NavigationMethod,
    UpdateDashboard,
};
use taskify_core::types::DbId;

use crate::error::ApiResult;
use crate::fetch::ApiClient;
use crate::pagination::collect_all;

#[derive(Debug, Clone, Copy)]
pub struct DashboardsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DashboardsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /dashboards?navigationMethod=&cursorId=&page=&size=`
    pub async fn list(&self, params: &ListDashboardsParams) -> ApiResult<DashboardList> {
        self.client.get_with("dashboards", params).await
    }

    /// Every dashboard visible to the caller, by cursor.
    pub async fn list_all(&self, page_size: u32) -> ApiResult<Vec<Dashboard>> {
        let api = *self;
        collect_all(move |cursor_id| {
            let params = ListDashboardsParams {
                navigation_method: NavigationMethod::InfiniteScroll,
                cursor_id,
                page: None,
                size: Some(page_size),
            };
            async move { api.list(&params).await }
        })
        .await
    }

    /// `GET /dashboards/{id}`
    pub async fn get(&self, dashboard_id: DbId) -> ApiResult<Dashboard> {
        self.client
            .get(&format!("dashboards/{dashboard_id}"))
            .await
    }

    /// `POST /dashboards`
    pub async fn create(&self, input: &CreateDashboard) -> ApiResult<Dashboard> {
        self.client.post("dashboards", input).await
    }

    /// `PATCH /dashboards/{id}`
    pub async fn update(
        &self,
        dashboard_id: DbId,
        input: &UpdateDashboard,
    ) -> ApiResult<Dashboard> {
        self.client
            .patch(&format!("dashboards/{dashboard_id}"), input)
            .await
    }

    /// `DELETE /dashboards/{id}`
    pub async fn delete(&self, dashboard_id: DbId) -> ApiResult<()> {
        self.client
            .delete(&format!("dashboards/{dashboard_id}"))
            .await
    }

    /// `POST /dashboards/{id}/invitations`
    pub async fn invite(&self, dashboard_id: DbId, email: &str) -> ApiResult<Invitation> {
        let body = InviteToDashboard {
            email: email.to_string(),
        };
        self.client
            .post(&format!("dashboards/{dashboard_id}/invitations"), &body)
            .await
    }

    /// `GET /dashboards/{id}/invitations?page=&size=`
    pub async fn list_invitations(
        &self,
        dashboard_id: DbId,
        params: &ListDashboardInvitationsParams,
    ) -> ApiResult<DashboardInvitationList> {
        self.client
            .get_with(&format!("dashboards/{dashboard_id}/invitations"), params)
            .await
    }

    /// `DELETE /dashboards/{id}/invitations/{invitationId}`
    pub async fn cancel_invitation(&self, dashboard_id: DbId, invitation_id: DbId) -> ApiResult<()> {
        self.client
            .delete(&format!(
                "dashboards/{dashboard_id}/invitations/{invitation_id}"
            ))
            .await
    }
}
