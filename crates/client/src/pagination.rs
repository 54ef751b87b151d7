//! Cursor pagination helpers.
//!
//! A `cursorId` of `null` in a list response means the collection is
//! exhausted. [`collect_all`] follows cursors until then.

use std::collections::HashSet;
use std::future::Future;

use taskify_core::models::{Card, CardList, Comment, CommentList, Dashboard, DashboardList};
use taskify_core::models::{Invitation, InvitationList};
use taskify_core::types::DbId;

use crate::error::ApiResult;

/// Default page length used by the `list_all` helpers.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A list envelope that carries a forward cursor.
pub trait CursorPage {
    type Item;

    /// Cursor of the next page, `None` when there are no further pages.
    fn next_cursor(&self) -> Option<DbId>;

    fn into_items(self) -> Vec<Self::Item>;
}

/// Fetch pages until the backend returns a `null` cursor.
///
/// `fetch` receives the cursor to request (`None` for the first page).
/// The first error stops the walk and is returned as-is. A cursor that was
/// already requested also ends the walk, so a cycling backend cannot keep
/// it going.
pub async fn collect_all<P, F, Fut>(mut fetch: F) -> ApiResult<Vec<P::Item>>
where
    P: CursorPage,
    F: FnMut(Option<DbId>) -> Fut,
    Fut: Future<Output = ApiResult<P>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<DbId> = None;
    let mut seen: HashSet<DbId> = HashSet::new();

    loop {
        let page = fetch(cursor).await?;
        let next = page.next_cursor();
        items.extend(page.into_items());

        match next {
            Some(next) if !seen.insert(next) => {
                tracing::warn!(cursor = next, "Backend returned a page cursor again, stopping");
                return Ok(items);
            }
            Some(next) => cursor = Some(next),
            None => return Ok(items),
        }
    }
}

impl CursorPage for CardList {
    type Item = Card;

    fn next_cursor(&self) -> Option<DbId> {
        self.cursor_id
    }

    fn into_items(self) -> Vec<Card> {
        self.cards
    }
}

impl CursorPage for CommentList {
    type Item = Comment;

    fn next_cursor(&self) -> Option<DbId> {
        self.cursor_id
    }

    fn into_items(self) -> Vec<Comment> {
        self.comments
    }
}

impl CursorPage for DashboardList {
    type Item = Dashboard;

    fn next_cursor(&self) -> Option<DbId> {
        self.cursor_id
    }

    fn into_items(self) -> Vec<Dashboard> {
        self.dashboards
    }
}

impl CursorPage for InvitationList {
    type Item = Invitation;

    fn next_cursor(&self) -> Option<DbId> {
        self.cursor_id
    }

    fn into_items(self) -> Vec<Invitation> {
        self.invitations
    }
}
