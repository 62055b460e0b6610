// qcut-dashboard/tests/dashboard_flow.rs
// End-to-end view flows against a mocked venue API

use qcut_client::ClientConfig;
use qcut_dashboard::{
    Action, HistoryView, MenuView, RecordingNotifier, RouteRole, Session, SessionPhase, TokenStore,
    VenueBinding,
};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_body() -> serde_json::Value {
    json!({
        "id": "u1",
        "name": "Sam",
        "email": "sam@example.com",
        "access_token": "tok-123"
    })
}

fn drink_body(id: &str, name: &str, updated_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "category": "Cocktails",
        "name": name,
        "abv": "24",
        "is_popular": false,
        "in_stock": true,
        "deleted": false,
        "sizes": [{ "size": "Standard", "price": 9.0 }],
        "updated_at": updated_at
    })
}

fn order_body(id: &str, number: i64) -> serde_json::Value {
    json!({
        "id": id,
        "order_id": number,
        "customer": { "name": "Alice" },
        "created_at": "2026-08-20T19:00:00Z",
        "updated_at": "2026-08-20T19:10:00Z",
        "total_price": 12.0,
        "table_number": 3
    })
}

#[tokio::test]
async fn test_login_flow_binds_venue_with_user_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
        .mount(&server)
        .await;

    // The venue fetch must carry the token obtained at login.
    Mock::given(method("GET"))
        .and(path("/venue/me"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "v1",
            "name": "The Crown",
            "image": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let notifier = RecordingNotifier::new();
    let mut session = Session::new(TokenStore::new(dir.path()));

    let client = ClientConfig::new(server.uri()).build_http_client();
    let user = client.login("sam@example.com", "hunter2").await.unwrap();
    assert!(!user.access_token.is_empty());
    session.dispatch(Action::SetUser(user), &notifier);

    assert!(RouteRole::Public.redirect_needed(session.state()));

    let authed = client.with_token(session.access_token().unwrap());
    let binding = session.bind_venue(&authed, &notifier).await;

    assert_eq!(binding, VenueBinding::Bound);
    assert_eq!(session.state().venue.as_ref().unwrap().name, "The Crown");
    assert_eq!(notifier.successes(), vec!["Welcome Sam!"]);
}

#[tokio::test]
async fn test_account_without_venue_is_a_distinct_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venue/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let notifier = RecordingNotifier::new();
    let mut session = Session::new(TokenStore::new(dir.path()));

    let client = ClientConfig::new(server.uri())
        .with_token("tok-123")
        .build_http_client();
    let binding = session.bind_venue(&client, &notifier).await;

    // Not a failure: nothing surfaced, no venue bound.
    assert_eq!(binding, VenueBinding::NoVenue);
    assert!(session.state().venue.is_none());
    assert!(notifier.errors().is_empty());
}

#[tokio::test]
async fn test_restore_resolves_persisted_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/me"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    TokenStore::new(dir.path()).save("tok-123").unwrap();

    let notifier = RecordingNotifier::new();
    let mut session = Session::new(TokenStore::new(dir.path()));
    assert_eq!(session.phase(), SessionPhase::Restoring);

    let client = ClientConfig::new(server.uri()).build_http_client();
    session.restore(&client, &notifier).await;

    assert_eq!(session.phase(), SessionPhase::Ready);
    assert_eq!(session.state().user.as_ref().unwrap().name, "Sam");
}

#[tokio::test]
async fn test_restore_failure_is_silent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/me"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "token expired" })),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    TokenStore::new(dir.path()).save("stale").unwrap();

    let notifier = RecordingNotifier::new();
    let mut session = Session::new(TokenStore::new(dir.path()));

    let client = ClientConfig::new(server.uri()).build_http_client();
    session.restore(&client, &notifier).await;

    // Unauthenticated, ready, and nothing surfaced to the user.
    assert_eq!(session.phase(), SessionPhase::Ready);
    assert!(session.state().user.is_none());
    assert!(notifier.errors().is_empty());
    assert!(notifier.successes().is_empty());
}

#[tokio::test]
async fn test_failed_history_fetch_keeps_previous_orders() {
    let server = MockServer::start().await;

    let first_fetch = Mock::given(method("GET"))
        .and(path("/venue/orders/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([order_body("o1", 41)])))
        .expect(1)
        .mount_as_scoped(&server)
        .await;

    let client = ClientConfig::new(server.uri())
        .with_token("tok-123")
        .build_http_client();
    let notifier = RecordingNotifier::new();
    let mut view = HistoryView::new();

    view.refresh_if_needed(&client, &notifier).await;
    assert_eq!(view.orders().len(), 1);
    assert!(!view.needs_refresh(&client));

    // Server starts failing; the displayed collection must not change.
    drop(first_fetch);
    Mock::given(method("GET"))
        .and(path("/venue/orders/history"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "database offline" })),
        )
        .mount(&server)
        .await;

    view.filter.apply_search("Alice");
    assert!(view.needs_refresh(&client));
    view.refresh_if_needed(&client, &notifier).await;

    assert_eq!(view.orders().len(), 1);
    assert_eq!(view.visible()[0].id, "o1");
    assert_eq!(notifier.errors(), vec!["API error (500): database offline"]);
}

#[tokio::test]
async fn test_identity_change_invalidates_history_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venue/orders/history"))
        .and(header("authorization", "Bearer tok-a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([order_body("o-a", 41)])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/venue/orders/history"))
        .and(header("authorization", "Bearer tok-b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([order_body("o-b", 42)])))
        .mount(&server)
        .await;

    let notifier = RecordingNotifier::new();
    let mut view = HistoryView::new();

    let client = ClientConfig::new(server.uri())
        .with_token("tok-a")
        .build_http_client();
    view.refresh_if_needed(&client, &notifier).await;
    assert_eq!(view.visible()[0].id, "o-a");

    // Same filter, different signed-in user: the cache must not serve
    // the previous identity's orders.
    let client = client.with_token("tok-b");
    assert!(view.needs_refresh(&client));
    view.refresh_if_needed(&client, &notifier).await;
    assert_eq!(view.visible()[0].id, "o-b");
}

#[tokio::test]
async fn test_delete_drink_closes_editor_and_drops_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venue/v1/menu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            drink_body("d1", "Negroni", "2026-08-20T10:00:00Z"),
            drink_body("d2", "Spritz", "2026-08-21T10:00:00Z")
        ])))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/venue/drink/d1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            drink_body("d2", "Spritz", "2026-08-21T10:00:00Z")
        ])))
        .mount(&server)
        .await;

    let client = ClientConfig::new(server.uri())
        .with_token("tok-123")
        .build_http_client();
    let notifier = RecordingNotifier::new();
    let mut view = MenuView::new();

    view.refresh_if_needed(&client, "v1", &notifier).await;
    assert_eq!(view.drinks().len(), 2);

    let negroni = view.drinks().iter().find(|d| d.id == "d1").unwrap().clone();
    view.open_update(&negroni);
    view.submit_delete(&client, &notifier).await;

    assert!(view.editor().is_none());
    assert!(view.visible().iter().all(|d| d.id != "d1"));
    assert_eq!(notifier.successes(), vec!["Deleted Drink!"]);
}

#[tokio::test]
async fn test_failed_mutation_keeps_editor_open_with_submitted_values() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/venue/drink"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": [
                { "message": "name is required" },
                { "message": "at least one size is required" }
            ]
        })))
        .mount(&server)
        .await;

    let client = ClientConfig::new(server.uri())
        .with_token("tok-123")
        .build_http_client();
    let notifier = RecordingNotifier::new();
    let mut view = MenuView::new();

    view.open_add();
    {
        let editor = view.editor_mut().unwrap();
        editor.set_category(shared::DrinkCategory::Shots);
        editor.abv = "40".to_string();
    }
    view.submit(&client, &notifier).await;

    // Editor still open, submitted values intact, every message shown.
    let editor = view.editor().unwrap();
    assert_eq!(editor.abv, "40");
    assert_eq!(
        notifier.errors(),
        vec!["name is required", "at least one size is required"]
    );
}
