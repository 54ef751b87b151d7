//! `/users/me` operations.

use taskify_core::models::{UpdateUser, User};

use crate::error::ApiResult;
use crate::fetch::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /users/me`
    pub async fn me(&self) -> ApiResult<User> {
        self.client.get("users/me").await
    }

    /// `PUT /users/me`
    pub async fn update_me(&self, input: &UpdateUser) -> ApiResult<User> {
        self.client.put("users/me", input).await
    }
}
