//! `/members` operations.

use taskify_core::models::{ListMembersParams, MemberList};
use taskify_core::types::DbId;

use crate::error::ApiResult;
use crate::fetch::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct MembersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> MembersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /members?dashboardId=&page=&size=`
    pub async fn list(&self, params: &ListMembersParams) -> ApiResult<MemberList> {
        self.client.get_with("members", params).await
    }

    /// `DELETE /members/{id}` -- remove a member from their dashboard.
    pub async fn delete(&self, member_id: DbId) -> ApiResult<()> {
        self.client.delete(&format!("members/{member_id}")).await
    }
}
