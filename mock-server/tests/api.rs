use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_services_empty_envelope() {
    let app = app();
    let resp = app.oneshot(get_request("/api/services")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let envelope = body_json(resp).await;
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["data"], serde_json::json!([]));
}

#[tokio::test]
async fn unknown_collection_is_failure_envelope() {
    let app = app();
    let resp = app.oneshot(get_request("/api/widgets")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let envelope = body_json(resp).await;
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["error"], "unknown collection");
}

// --- create ---

#[tokio::test]
async fn create_service_returns_201_with_assigned_id() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/services",
            r#"{"name":"Mobile TV","mtdRevenue":0,"subscriberBase":0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let envelope = body_json(resp).await;
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["data"]["id"], 1);
    assert_eq!(envelope["data"]["name"], "Mobile TV");
}

#[tokio::test]
async fn create_rejects_non_object_body() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/api/users", r#"[1,2,3]"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_missing_record_is_failure_envelope() {
    let app = app();
    let resp = app.oneshot(get_request("/api/services/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let envelope = body_json(resp).await;
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["error"], "record not found");
}

// --- bulk upsert ---

#[tokio::test]
async fn bulk_upsert_counts_rows() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/daily-data/bulk",
            r#"{"data":[{"serviceId":1,"date":"2026-08-01","revenue":10},
                        {"serviceId":1,"date":"2026-08-02","revenue":12}]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let envelope = body_json(resp).await;
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["count"], 2);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/daily-data"))
        .await
        .unwrap();
    let envelope = body_json(resp).await;
    assert_eq!(envelope["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn bulk_upsert_replaces_rows_with_known_ids() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/daily-data",
            r#"{"serviceId":1,"date":"2026-08-01","revenue":10}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/daily-data/bulk",
            r#"{"data":[{"id":1,"serviceId":1,"date":"2026-08-01","revenue":99}]}"#,
        ))
        .await
        .unwrap();
    let envelope = body_json(resp).await;
    assert_eq!(envelope["count"], 1);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/daily-data/1"))
        .await
        .unwrap();
    let envelope = body_json(resp).await;
    assert_eq!(envelope["data"]["revenue"], 99);
}

#[tokio::test]
async fn bulk_upsert_without_data_array_is_rejected() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/api/daily-data/bulk", r#"{}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let envelope = body_json(resp).await;
    assert_eq!(envelope["success"], false);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/kanban",
            r#"{"title":"Q3 price review","lane":"planned","status":"on-track"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let envelope = body_json(resp).await;
    let id = envelope["data"]["id"].as_i64().unwrap();

    // list contains the one card
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/kanban"))
        .await
        .unwrap();
    let envelope = body_json(resp).await;
    assert_eq!(envelope["data"].as_array().unwrap().len(), 1);

    // update replaces the row but the path id wins over the body id
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/api/kanban/{id}"),
            r#"{"id":99,"title":"Q3 price review","lane":"in-progress","status":"at-risk"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let envelope = body_json(resp).await;
    assert_eq!(envelope["data"]["id"], id);
    assert_eq!(envelope["data"]["lane"], "in-progress");

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/kanban/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let envelope = body_json(resp).await;
    assert_eq!(envelope["data"], true);

    // get after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/api/kanban/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
