//! Resource models, list envelopes, and request DTOs.
//!
//! Response structs implement [`Validated`](crate::schema::Validated) and
//! derive `Deserialize`; request DTOs derive `Serialize` only. All wire
//! names are camelCase.

pub mod card;
pub mod column;
pub mod comment;
pub mod dashboard;
pub mod invitation;
pub mod member;
pub mod user;

pub use card::{Card, CardList, CreateCard, ListCardsParams, UpdateCard};
pub use column::{CardImage, Column, ColumnList, CreateColumn, ListColumnsParams, UpdateColumn};
pub use comment::{Comment, CommentList, CreateComment, ListCommentsParams, UpdateComment};
pub use dashboard::{
    CreateDashboard, Dashboard, DashboardColor, DashboardInvitationList, DashboardList,
    InviteToDashboard, ListDashboardInvitationsParams, ListDashboardsParams, NavigationMethod,
    UpdateDashboard,
};
pub use invitation::{
    DashboardRef, Invitation, InvitationList, InvitationUser, ListInvitationsParams,
    RespondToInvitation,
};
pub use member::{ListMembersParams, Member, MemberList};
pub use user::{UpdateUser, User, UserSummary};
