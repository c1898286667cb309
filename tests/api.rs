use std::net::SocketAddr;

use message_board::storage::MessageStore;
use message_board::{AppState, build_router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn spawn_server() -> SocketAddr {
    let store = MessageStore::in_memory().expect("open in-memory store");
    let app = build_router(AppState::new(store, false));
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn get_json(client: &reqwest::Client, url: String) -> (u16, Value) {
    let resp = client.get(url).send().await.expect("send request");
    let status = resp.status().as_u16();
    let body = resp.json::<Value>().await.expect("json body");
    (status, body)
}

#[tokio::test]
async fn save_then_list_round_trip() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{addr}/messages/save"))
        .json(&json!({"name": "Ann", "message": "hi"}))
        .send()
        .await
        .expect("save message");
    assert_eq!(resp.status().as_u16(), 200);
    let saved: Value = resp.json().await.expect("save json");
    assert_eq!(saved["status"], "all good");
    assert_eq!(saved["message"]["name"], "Ann");
    assert_eq!(saved["message"]["message"], "hi");
    assert!(saved["message"]["_id"].is_string());
    assert!(saved["message"]["createdAt"].is_string());

    let (status, listed) = get_json(&client, format!("http://{addr}/messages")).await;
    assert_eq!(status, 200);
    assert_eq!(listed["status"], "all good");
    assert_eq!(listed["messages"], json!([saved["message"].clone()]));
}

#[tokio::test]
async fn fetch_by_id_returns_one_document() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    for (name, message) in [("Bo", "one"), ("Cy", "two")] {
        client
            .post(format!("http://{addr}/messages/save"))
            .json(&json!({"name": name, "message": message}))
            .send()
            .await
            .expect("save message");
    }
    let saved: Value = client
        .post(format!("http://{addr}/messages/save"))
        .json(&json!({"name": "Di", "message": "three"}))
        .send()
        .await
        .expect("save message")
        .json()
        .await
        .expect("save json");
    let id = saved["message"]["_id"].as_str().expect("id string");

    let (status, body) = get_json(&client, format!("http://{addr}/messages/{id}")).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "all good");
    assert_eq!(body["messages"], json!([saved["message"].clone()]));
}

#[tokio::test]
async fn invalid_id_returns_failure_envelope() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let (status, body) = get_json(&client, format!("http://{addr}/messages/not-an-id")).await;
    assert_eq!(status, 400);
    assert_eq!(body["status"], "failed to retrieve messages from the database");
    assert_eq!(body["error"]["name"], "InvalidIdError");

    // the server keeps serving afterwards
    let (status, _) = get_json(&client, format!("http://{addr}/messages")).await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn unknown_id_returns_empty_list() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let (status, body) = get_json(
        &client,
        format!("http://{addr}/messages/0123456789abcdef0123456789abcdef"),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["messages"], json!([]));
}

#[tokio::test]
async fn partial_and_form_writes_are_accepted() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let empty: Value = client
        .post(format!("http://{addr}/messages/save"))
        .send()
        .await
        .expect("save empty")
        .json()
        .await
        .expect("json");
    assert_eq!(empty["status"], "all good");
    assert!(empty["message"].get("name").is_none());
    assert!(empty["message"].get("message").is_none());

    let form: Value = client
        .post(format!("http://{addr}/messages/save"))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("name=Eve&message=hello+there")
        .send()
        .await
        .expect("save form")
        .json()
        .await
        .expect("json");
    assert_eq!(form["message"]["name"], "Eve");
    assert_eq!(form["message"]["message"], "hello there");

    let (_, listed) = get_json(&client, format!("http://{addr}/messages")).await;
    assert_eq!(listed["messages"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn malformed_body_returns_save_failure() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{addr}/messages/save"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("send");
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.expect("json");
    assert_eq!(body["status"], "failed to save the message to the database");
    assert_eq!(body["error"]["name"], "BodyError");
}

#[tokio::test]
async fn about_us_is_stable() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("http://{addr}/about-us"))
        .send()
        .await
        .expect("about us");
    assert_eq!(resp.status().as_u16(), 200);
    assert!(
        resp.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"))
    );
    let first: Value = resp.json().await.expect("json");
    let (_, second) = get_json(&client, format!("http://{addr}/about-us")).await;

    assert_eq!(first, second);
    assert_eq!(first["title"], "About Us");
    assert!(first["content"].as_str().is_some_and(|c| c.contains('\n')));
    assert!(first["imageUrl"].is_string());
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("http://{addr}/messages"))
        .send()
        .await
        .expect("list");
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let preflight = client
        .request(reqwest::Method::OPTIONS, format!("http://{addr}/messages/save"))
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .expect("preflight");
    assert_eq!(preflight.status().as_u16(), 204);
    assert_eq!(
        preflight
            .headers()
            .get("access-control-allow-methods")
            .and_then(|v| v.to_str().ok()),
        Some("GET,POST,OPTIONS")
    );
}

#[tokio::test]
async fn get_on_save_path_is_an_invalid_id() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let (status, body) = get_json(&client, format!("http://{addr}/messages/save")).await;
    assert_eq!(status, 400);
    assert_eq!(body["status"], "failed to retrieve messages from the database");
    assert_eq!(body["error"]["name"], "InvalidIdError");
}

async fn save_raw(
    client: &reqwest::Client,
    addr: SocketAddr,
    content_type: &str,
    body: &'static str,
) -> (u16, Value) {
    let resp = client
        .post(format!("http://{addr}/messages/save"))
        .header("content-type", content_type)
        .body(body)
        .send()
        .await
        .expect("save message");
    let status = resp.status().as_u16();
    (status, resp.json().await.expect("json body"))
}

#[tokio::test]
async fn numeric_fields_are_saved_as_text() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let (status, body) = save_raw(
        &client,
        addr,
        "application/json",
        r#"{"name":5,"message":"hi"}"#,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["message"]["name"], "5");
    assert_eq!(body["message"]["message"], "hi");
}

#[tokio::test]
async fn plain_text_body_saves_partial_document() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let (status, body) = save_raw(&client, addr, "text/plain", "hello").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "all good");
    assert!(body["message"].get("name").is_none());
    assert!(body["message"].get("message").is_none());
}

#[tokio::test]
async fn array_body_does_not_fill_fields() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let (status, body) = save_raw(&client, addr, "application/json", r#"["a","b"]"#).await;
    assert_eq!(status, 200);
    assert!(body["message"].get("name").is_none());
    assert!(body["message"].get("message").is_none());
}

#[tokio::test]
async fn nested_field_value_is_rejected() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let (status, body) = save_raw(
        &client,
        addr,
        "application/json",
        r#"{"name":{"first":"Ann"},"message":"hi"}"#,
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["status"], "failed to save the message to the database");
    assert_eq!(body["error"]["name"], "BodyError");

    let (_, listed) = get_json(&client, format!("http://{addr}/messages")).await;
    assert_eq!(listed["messages"], json!([]));
}
