//! `/columns` operations.

use reqwest::multipart::{Form, Part};
use taskify_core::models::{
    CardImage, Column, ColumnList, CreateColumn, ListColumnsParams, UpdateColumn,
};
use taskify_core::types::DbId;

use crate::error::ApiResult;
use crate::fetch::ApiClient;

#[derive(Debug, Clone, Copy)]
pub struct ColumnsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ColumnsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /columns?dashboardId=`
    pub async fn list(&self, dashboard_id: DbId) -> ApiResult<ColumnList> {
        self.client
            .get_with("columns", &ListColumnsParams { dashboard_id })
            .await
    }

    /// `POST /columns`
    pub async fn create(&self, input: &CreateColumn) -> ApiResult<Column> {
        self.client.post("columns", input).await
    }

    /// `PATCH /columns/{id}`
    pub async fn update(&self, column_id: DbId, input: &UpdateColumn) -> ApiResult<Column> {
        self.client
            .patch(&format!("columns/{column_id}"), input)
            .await
    }

    /// `DELETE /columns/{id}`
    pub async fn delete(&self, column_id: DbId) -> ApiResult<()> {
        self.client.delete(&format!("columns/{column_id}")).await
    }

    /// `POST /columns/{id}/card-image`
    ///
    /// Uploads an image for a card in this column and returns its hosted
    /// URL, to be passed as `imageUrl` when creating or updating the card.
    pub async fn upload_card_image(
        &self,
        column_id: DbId,
        file_name: &str,
        image: Vec<u8>,
    ) -> ApiResult<CardImage> {
        let part = Part::bytes(image).file_name(file_name.to_string());
        let form = Form::new().part("image", part);
        self.client
            .post_multipart(&format!("columns/{column_id}/card-image"), form)
            .await
    }
}
