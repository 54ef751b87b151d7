mod common;

use axum::http::Method;
use serde_json::{json, Value};

use common::{invitation_json, Canned, MockBackend};
use taskify_core::models::ListInvitationsParams;

#[tokio::test]
async fn list_my_invitations_filtered_by_title() {
    let mock = MockBackend::start().await;
    mock.on(
        Method::GET,
        "/4-1/invitations",
        Canned::json(200, json!({"cursorId": null, "invitations": [invitation_json(70, Value::Null)]})),
    );

    let params = ListInvitationsParams {
        size: Some(10),
        cursor_id: None,
        title: Some("Sprint".into()),
    };
    let list = mock.client().invitations().list(&params).await.unwrap();

    assert_eq!(list.invitations.len(), 1);
    assert_eq!(
        mock.single_request().query.as_deref(),
        Some("size=10&title=Sprint")
    );
}

#[tokio::test]
async fn list_all_invitations_walks_cursor() {
    let mock = MockBackend::start().await;
    mock.on(
        Method::GET,
        "/4-1/invitations",
        Canned::json(200, json!({"cursorId": 70, "invitations": [invitation_json(70, Value::Null)]})),
    )
    .on(
        Method::GET,
        "/4-1/invitations",
        Canned::json(200, json!({"cursorId": null, "invitations": [invitation_json(71, Value::Null)]})),
    );

    let invitations = mock.client().invitations().list_all(None, 1).await.unwrap();

    let ids: Vec<i64> = invitations.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![70, 71]);
    assert_eq!(
        mock.requests()[1].query.as_deref(),
        Some("size=1&cursorId=70")
    );
}

#[tokio::test]
async fn accept_invitation_with_put() {
    let mock = MockBackend::start().await;
    mock.on(
        Method::PUT,
        "/4-1/invitations/70",
        Canned::json(200, invitation_json(70, json!(true))),
    );

    let invitation = mock.client().invitations().respond(70, true).await.unwrap();

    assert_eq!(invitation.invite_accepted, Some(true));
    let request = mock.single_request();
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.body, Some(json!({"inviteAccepted": true})));
}
