//! Client golden tests: the HTTP client and the whole app against a real
//! axum server on a random port.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;

    use crate::app::FaveApp;
    use crate::client::{ApiError, FaveApi, HttpFaveApi};
    use crate::config::ClientConfig;
    use crate::error::IdentityError;
    use crate::identity::IdentityClient;
    use crate::state::{AppRoute, AsyncPhase};

    // =====================================================================
    // Test server
    // =====================================================================

    #[derive(Default)]
    struct Calls {
        users: AtomicUsize,
    }

    async fn user_handler(State(calls): State<Arc<Calls>>, Path(name): Path<String>) -> Response {
        calls.users.fetch_add(1, Ordering::SeqCst);
        match name.as_str() {
            "newuser" | "a b" => (StatusCode::CREATED, Json(json!({ "name": name }))).into_response(),
            "bad" => (StatusCode::BAD_REQUEST, Json(json!({ "message": "invalid" }))).into_response(),
            "broken" => (StatusCode::OK, "<html>not json</html>").into_response(),
            _ => (StatusCode::OK, Json(json!({ "name": name }))).into_response(),
        }
    }

    fn post_json(id: i64, like: u64) -> serde_json::Value {
        json!({
            "id": id,
            "message": format!("post {}", id),
            "fave_id": 10,
            "date_time": "2024-06-01 20:15:00",
            "fave_name": "ミク",
            "reactions": { "like": like, "watch": 0, "love": 0, "new_listener": 0 }
        })
    }

    async fn timeline_handler(Path(name): Path<String>) -> Response {
        match name.as_str() {
            "newuser" | "alice" => Json(json!([post_json(1, 3), post_json(2, 0)])).into_response(),
            "wrapped" => Json(json!({ "posts": [post_json(5, 1)] })).into_response(),
            "dup" => Json(json!([post_json(1, 0), post_json(1, 0)])).into_response(),
            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }

    struct TestServer {
        base_url: String,
        calls: Arc<Calls>,
    }

    async fn start_test_server() -> TestServer {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let calls = Arc::new(Calls::default());
        let app = Router::new()
            .route("/test/api/users/{name}", post(user_handler))
            .route("/test/api/timeline/{name}", get(timeline_handler))
            .with_state(calls.clone());

        // Bind to random port.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer {
            base_url: format!("http://{}/test", addr),
            calls,
        }
    }

    fn config(base_url: &str) -> ClientConfig {
        ClientConfig {
            base_url: base_url.to_string(),
            request_timeout_secs: 2,
            ..ClientConfig::default()
        }
    }

    fn http(base_url: &str) -> Arc<HttpFaveApi> {
        Arc::new(HttpFaveApi::new(&config(base_url)).unwrap())
    }

    /// A base URL nobody listens on.
    async fn dead_base_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/test", addr)
    }

    // =====================================================================
    // Identity endpoint
    // =====================================================================

    #[tokio::test]
    async fn created_on_201() {
        let server = start_test_server().await;
        let client = IdentityClient::new(http(&server.base_url));

        let session = client.establish_identity("newuser").await.unwrap();
        assert_eq!(session.username, "newuser");
        assert!(session.created);
        assert_eq!(server.calls.users.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn existing_on_200() {
        let server = start_test_server().await;
        let client = IdentityClient::new(http(&server.base_url));

        let session = client.establish_identity("alice").await.unwrap();
        assert!(!session.created);
    }

    #[tokio::test]
    async fn username_sent_as_one_segment() {
        let server = start_test_server().await;
        let client = IdentityClient::new(http(&server.base_url));

        let session = client.establish_identity(" a b ").await.unwrap();
        assert_eq!(session.username, "a b");
        assert!(session.created);
    }

    #[tokio::test]
    async fn rejected_on_4xx_with_status_text() {
        let server = start_test_server().await;
        let client = IdentityClient::new(http(&server.base_url));

        let err = client.establish_identity("bad").await.unwrap_err();
        assert_eq!(err, IdentityError::IdentityRejected("400 Bad Request".into()));
    }

    #[tokio::test]
    async fn malformed_json_is_unreachable() {
        let server = start_test_server().await;
        let client = IdentityClient::new(http(&server.base_url));

        let err = client.establish_identity("broken").await.unwrap_err();
        assert!(matches!(err, IdentityError::IdentityUnreachable(_)), "got: {:?}", err);
    }

    #[tokio::test]
    async fn connection_refused_is_unreachable() {
        let base_url = dead_base_url().await;
        let client = IdentityClient::new(http(&base_url));

        let err = client.establish_identity("alice").await.unwrap_err();
        assert!(matches!(err, IdentityError::IdentityUnreachable(_)), "got: {:?}", err);
        assert!(!client.is_busy());
    }

    // =====================================================================
    // Timeline endpoint
    // =====================================================================

    #[tokio::test]
    async fn timeline_array_and_wrapped() {
        let server = start_test_server().await;
        let api = http(&server.base_url);

        let posts = api.fetch_timeline("alice").await.unwrap();
        let ids: Vec<_> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(posts[0].reactions.like, 3);
        assert_eq!(posts[0].fave_name, "ミク");

        let posts = api.fetch_timeline("wrapped").await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 5);
    }

    #[tokio::test]
    async fn timeline_404_is_server_error() {
        let server = start_test_server().await;
        let err = http(&server.base_url).fetch_timeline("nobody").await.unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 404, .. }), "got: {:?}", err);
    }

    // =====================================================================
    // Whole app over HTTP
    // =====================================================================

    #[tokio::test]
    async fn app_login_to_timeline() {
        let server = start_test_server().await;
        let app = FaveApp::new(&config(&server.base_url)).unwrap();
        app.initialize().await;

        app.establish_identity("newuser").await;

        assert!(app.take_notice().is_some());
        assert_eq!(app.route(), Some(AppRoute::Timeline { username: "newuser".into() }));
        let feed = app.timeline().unwrap();
        assert_eq!(feed.posts.len(), 2);
        assert_eq!(feed.phase, AsyncPhase::Success);

        assert!(app.react(2, crate::model::ReactionKind::NewListener));
        app.load_timeline().await;
        assert_eq!(app.timeline().unwrap().posts[1].reactions.new_listener, 0);
    }

    #[tokio::test]
    async fn app_duplicate_ids_fail_the_page() {
        let server = start_test_server().await;
        let app = FaveApp::new(&config(&server.base_url)).unwrap();
        app.initialize().await;

        app.establish_identity("dup").await;

        let feed = app.timeline().unwrap();
        assert!(feed.posts.is_empty());
        assert_eq!(feed.phase.error(), Some("投稿IDが重複しています: 1"));
    }

    #[tokio::test]
    async fn app_unreachable_stays_on_identity() {
        let app = FaveApp::new(&config(&dead_base_url().await)).unwrap();
        app.initialize().await;

        app.establish_identity("alice").await;

        assert_eq!(app.route(), Some(AppRoute::Identity));
        let screen = app.identity_screen().unwrap();
        assert_eq!(
            screen.error.as_deref(),
            Some("ログインに失敗しました。ユーザー名を確認してください。")
        );
        assert!(app.take_notice().is_none());
    }
}
