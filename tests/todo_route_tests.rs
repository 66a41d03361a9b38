mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
    response::Response,
};
use common::{BACKENDS, TempDb};
use serde_json::{Value, json};
use todo_server::server::router::{TodoState, todo_router};
use tower::ServiceExt;

async fn app_for(db: &TempDb) -> Router {
    let service = todo_server::TodoService::new(db.repository().await);
    todo_router(TodoState::new(service))
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request")
}

async fn send(app: &Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.expect("request failed")
}

async fn json_body(resp: Response) -> Value {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&body).expect("response body was not json")
}

#[tokio::test]
async fn todo_lifecycle_over_http() {
    for backend in BACKENDS {
        let db = TempDb::new("route-lifecycle", backend);
        let app = app_for(&db).await;

        // 1) create "buy milk" -> 201, id=1, completed=false
        let resp = send(
            &app,
            request("POST", "/todos", Some(json!({"description": "buy milk"}))),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            json_body(resp).await,
            json!({"id": 1, "description": "buy milk", "completed": false})
        );

        // 2) create "walk dog" completed -> 201, id=2
        let resp = send(
            &app,
            request(
                "POST",
                "/todos",
                Some(json!({"description": "walk dog", "completed": true})),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            json_body(resp).await,
            json!({"id": 2, "description": "walk dog", "completed": true})
        );

        // 3) list -> both
        let resp = send(&app, request("GET", "/todos", None)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let list = json_body(resp).await;
        let list = list.as_array().expect("list body is an array");
        assert_eq!(list.len(), 2);
        assert!(list.contains(&json!({"id": 1, "description": "buy milk", "completed": false})));
        assert!(list.contains(&json!({"id": 2, "description": "walk dog", "completed": true})));

        // 4) patch completed only -> description kept
        let resp = send(
            &app,
            request("PATCH", "/todos/1", Some(json!({"completed": true}))),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            json_body(resp).await,
            json!({"id": 1, "description": "buy milk", "completed": true})
        );

        // 5) delete 2 -> 204, then 404 on get and on a second delete
        let resp = send(&app, request("DELETE", "/todos/2", None)).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = send(&app, request("GET", "/todos/2", None)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = json_body(resp).await;
        assert_eq!(body["errorMessage"], "No Todo item found with ID 2");
        assert!(body["errorTime"].is_string());

        let resp = send(&app, request("DELETE", "/todos/2", None)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // 6) fetch the survivor
        let resp = send(&app, request("GET", "/todos/1", None)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            json_body(resp).await,
            json!({"id": 1, "description": "buy milk", "completed": true})
        );
    }
}

#[tokio::test]
async fn info_reports_up_and_echoes_request_id() {
    let db = TempDb::new("route-info", todo_server::config::StorageBackend::Sql);
    let app = app_for(&db).await;

    let req = Request::builder()
        .uri("/todos/info")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .expect("failed to build request");
    let resp = send(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("x-request-id").map(|v| v.to_str().unwrap()),
        Some("req-123")
    );

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(&body[..], b"up");

    // Without a client id one is generated.
    let resp = send(&app, request("GET", "/todos/info", None)).await;
    assert!(resp.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn empty_list_is_not_found() {
    for backend in BACKENDS {
        let db = TempDb::new("route-empty", backend);
        let app = app_for(&db).await;

        let resp = send(&app, request("GET", "/todos", None)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(resp).await["errorMessage"], "No Todo items found.");
    }
}

#[tokio::test]
async fn invalid_input_is_bad_request() {
    let db = TempDb::new("route-invalid", todo_server::config::StorageBackend::Orm);
    let app = app_for(&db).await;

    // 1) missing description on create
    let resp = send(
        &app,
        request("POST", "/todos", Some(json!({"completed": true}))),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(resp).await["errorMessage"],
        "Failed to create Todo item: description is null or empty."
    );

    // 2) empty description on update of an existing item
    let resp = send(
        &app,
        request("POST", "/todos", Some(json!({"description": "buy milk"}))),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = send(
        &app,
        request("PATCH", "/todos/1", Some(json!({"description": ""}))),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(resp).await["errorMessage"],
        "Failed to update Todo item: description is null or empty."
    );

    // 3) patch of an unknown id is 404 before validation
    let resp = send(
        &app,
        request("PATCH", "/todos/9", Some(json!({"description": ""}))),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // 4) malformed JSON
    let req = Request::builder()
        .method("POST")
        .uri("/todos")
        .header("content-type", "application/json")
        .body(Body::from("not-json"))
        .expect("failed to build request");
    let resp = send(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(resp).await["errorMessage"].is_string());

    // 5) non-numeric id
    let resp = send(&app, request("GET", "/todos/abc", None)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_is_plain_not_found() {
    let db = TempDb::new("route-fallback", todo_server::config::StorageBackend::Sql);
    let app = app_for(&db).await;

    let resp = send(&app, request("GET", "/nope", None)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert!(body.is_empty());
}

#[tokio::test]
async fn storage_failure_is_internal_error() {
    let db = TempDb::new("route-storage", todo_server::config::StorageBackend::Sql);
    let pool = todo_server::db::connect(&db.cfg).await.unwrap();
    let repo = todo_server::db::repository_for(db.cfg.backend, pool.clone());
    let app = todo_router(TodoState::new(todo_server::TodoService::new(repo)));
    pool.close().await;

    let resp = send(&app, request("GET", "/todos", None)).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(resp).await["errorMessage"],
        "An internal server error occurred."
    );

    // A failed lookup is downgraded to absence.
    let resp = send(&app, request("GET", "/todos/1", None)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
