//! Resource API modules.
//!
//! One handle per backend resource, borrowed from an [`ApiClient`]:
//!
//! ```ignore
//! let card = client.cards().get(11).await?;
//! client.members().delete(42).await?;
//! ```
//!
//! Ids are always placed in paths and queries as decimal strings.

pub mod cards;
pub mod columns;
pub mod comments;
pub mod dashboards;
pub mod invitations;
pub mod members;
pub mod users;

use crate::fetch::ApiClient;

pub use cards::CardsApi;
pub use columns::ColumnsApi;
pub use comments::CommentsApi;
pub use dashboards::DashboardsApi;
pub use invitations::InvitationsApi;
pub use members::MembersApi;
pub use users::UsersApi;

impl ApiClient {
    pub fn cards(&self) -> CardsApi<'_> {
        CardsApi::new(self)
    }

    pub fn columns(&self) -> ColumnsApi<'_> {
        ColumnsApi::new(self)
    }

    pub fn comments(&self) -> CommentsApi<'_> {
        CommentsApi::new(self)
    }

    pub fn dashboards(&self) -> DashboardsApi<'_> {
        DashboardsApi::new(self)
    }

    pub fn invitations(&self) -> InvitationsApi<'_> {
        InvitationsApi::new(self)
    }

    pub fn members(&self) -> MembersApi<'_> {
        MembersApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }
}
