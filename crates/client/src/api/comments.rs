//! `/comments` operations.

use taskify_core::models::{Comment, CommentList, CreateComment, ListCommentsParams, UpdateComment};
use taskify_core::types::DbId;

use crate::error::ApiResult;
use crate::fetch::ApiClient;
use crate::pagination::collect_all;

#[derive(Debug, Clone, Copy)]
pub struct CommentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CommentsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /comments?cardId=&size=&cursorId=`
    pub async fn list(&self, params: &ListCommentsParams) -> ApiResult<CommentList> {
        self.client.get_with("comments", params).await
    }

    /// Every comment on a card, following cursors until exhausted.
    pub async fn list_all(&self, card_id: DbId, page_size: u32) -> ApiResult<Vec<Comment>> {
        let api = *self;
        collect_all(move |cursor_id| {
            let params = ListCommentsParams {
                card_id,
                size: Some(page_size),
                cursor_id,
            };
            async move { api.list(&params).await }
        })
        .await
    }

    /// `POST /comments`
    pub async fn create(&self, input: &CreateComment) -> ApiResult<Comment> {
        self.client.post("comments", input).await
    }

    /// `PATCH /comments/{id}`
    pub async fn update(&self, comment_id: DbId, input: &UpdateComment) -> ApiResult<Comment> {
        self.client
            .patch(&format!("comments/{comment_id}"), input)
            .await
    }

    /// `DELETE /comments/{id}`
    pub async fn delete(&self, comment_id: DbId) -> ApiResult<()> {
        self.client.delete(&format!("comments/{comment_id}")).await
    }
}
