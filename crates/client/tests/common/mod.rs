//! In-process mock of the Taskify backend.
//!
//! Canned responses are registered per `(method, path)` and served in
//! order; the last one registered for a route keeps being served once the
//! earlier ones are used up. Every request is recorded so tests can assert
//! on method, path, query, headers and JSON body.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::Value;

use taskify_client::{ApiClient, ClientConfig};

/// A response the mock will serve.
#[derive(Debug, Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub body: String,
}

impl Canned {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self::raw(status, "")
    }
}

/// One request as the mock saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Option<Value>,
    pub raw_body: Bytes,
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<Mutex<HashMap<(Method, String), VecDeque<Canned>>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// A running mock backend bound to an ephemeral localhost port.
pub struct MockBackend {
    pub base_url: String,
    state: MockState,
}

impl MockBackend {
    /// Bind to `127.0.0.1:0` and start serving in the background.
    ///
    /// The base URL carries a team prefix (`/4-1`) like the real backend.
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new()
            .fallback(respond)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/4-1"),
            state,
        }
    }

    /// Register a canned response for `method` on `path` (path includes
    /// the `/4-1` prefix).
    pub fn on(&self, method: Method, path: &str, canned: Canned) -> &Self {
        self.state
            .routes
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(canned);
        self
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(ClientConfig::new(self.base_url.clone())).unwrap()
    }

    pub fn client_with_config(&self, config: ClientConfig) -> ApiClient {
        ApiClient::new(config).unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The only request received; panics if there were zero or several.
    pub fn single_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

async fn respond(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_owned),
        headers,
        body: serde_json::from_slice(&body).ok(),
        raw_body: body,
    });

    let canned = {
        let mut routes = state.routes.lock().unwrap();
        routes.get_mut(&(method, path)).and_then(|queue| {
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        })
    };

    match canned {
        Some(canned) => (
            canned.status,
            [(CONTENT_TYPE, "application/json")],
            canned.body,
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(CONTENT_TYPE, "application/json")],
            r#"{"message":"no canned response"}"#.to_string(),
        )
            .into_response(),
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub const TS: &str = "2024-03-01T09:30:00.000Z";

pub fn card_json(id: i64, column_id: i64) -> Value {
    serde_json::json!({
        "id": id,
        "title": format!("Card {id}"),
        "description": "Details",
        "tags": ["backend"],
        "dueDate": null,
        "assignee": {"id": 4, "nickname": "kim", "profileImageUrl": null},
        "imageUrl": null,
        "teamId": "4-1",
        "columnId": column_id,
        "dashboardId": 3,
        "createdAt": TS,
        "updatedAt": TS,
    })
}

pub fn column_json(id: i64, title: &str) -> Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "teamId": "4-1",
        "dashboardId": 3,
        "createdAt": TS,
        "updatedAt": TS,
    })
}

pub fn comment_json(id: i64, card_id: i64) -> Value {
    serde_json::json!({
        "id": id,
        "content": format!("Comment {id}"),
        "cardId": card_id,
        "author": {"id": 4, "nickname": "kim", "profileImageUrl": null},
        "createdAt": TS,
        "updatedAt": TS,
    })
}

pub fn dashboard_json(id: i64, color: &str) -> Value {
    serde_json::json!({
        "id": id,
        "title": format!("Dashboard {id}"),
        "color": color,
        "userId": 4,
        "createdByMe": true,
        "createdAt": TS,
        "updatedAt": TS,
    })
}

pub fn invitation_json(id: i64, accepted: Value) -> Value {
    serde_json::json!({
        "id": id,
        "inviter": {"id": 4, "nickname": "kim", "email": "kim@example.com"},
        "invitee": {"id": 8, "nickname": "lee", "email": "lee@example.com"},
        "teamId": "4-1",
        "dashboard": {"id": 3, "title": "Dashboard 3"},
        "inviteAccepted": accepted,
        "createdAt": TS,
        "updatedAt": TS,
    })
}

pub fn member_json(id: i64, is_owner: bool) -> Value {
    serde_json::json!({
        "id": id,
        "userId": id + 100,
        "email": format!("user{id}@example.com"),
        "nickname": format!("user{id}"),
        "profileImageUrl": null,
        "isOwner": is_owner,
        "createdAt": TS,
        "updatedAt": TS,
    })
}

pub fn user_json(nickname: &str) -> Value {
    serde_json::json!({
        "id": 4,
        "email": "kim@example.com",
        "nickname": nickname,
        "profileImageUrl": null,
        "createdAt": TS,
        "updatedAt": TS,
    })
}
