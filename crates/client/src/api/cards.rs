//! `/cards` operations.

use taskify_core::models::{Card, CardList, CreateCard, ListCardsParams, UpdateCard};
use taskify_core::types::DbId;

use crate::error::ApiResult;
use crate::fetch::ApiClient;
use crate::pagination::collect_all;

#[derive(Debug, Clone, Copy)]
pub struct CardsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CardsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /cards?columnId=&size=&cursorId=`
    pub async fn list(&self, params: &ListCardsParams) -> ApiResult<CardList> {
        self.client.get_with("cards", params).await
    }

    /// Every card of a column, following cursors until exhausted.
    pub async fn list_all(&self, column_id: DbId, page_size: u32) -> ApiResult<Vec<Card>> {
        let api = *self;
        collect_all(move |cursor_id| {
            let params = ListCardsParams {
                column_id,
                size: Some(page_size),
                cursor_id,
            };
            async move { api.list(&params).await }
        })
        .await
    }

    /// `GET /cards/{id}`. A missing card surfaces as an HTTP 404 error.
    pub async fn get(&self, card_id: DbId) -> ApiResult<Card> {
        self.client.get(&format!("cards/{card_id}")).await
    }

    /// `POST /cards`
    pub async fn create(&self, input: &CreateCard) -> ApiResult<Card> {
        self.client.post("cards", input).await
    }

    /// `PATCH /cards/{id}`
    pub async fn update(&self, card_id: DbId, input: &UpdateCard) -> ApiResult<Card> {
        self.client.patch(&format!("cards/{card_id}"), input).await
    }

    /// `DELETE /cards/{id}`
    pub async fn delete(&self, card_id: DbId) -> ApiResult<()> {
        self.client.delete(&format!("cards/{card_id}")).await
    }
}
