use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use readlist::client::{ReadlistClient, documents};
use readlist::error::ReadlistError;
use readlist::graphql::build_schema;
use readlist::server::{GREETING, router};
use readlist::storage::{DocumentCatalog, IdGenerator, MemoryCatalog, fixtures};
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tower::ServiceExt as _;

fn fixture_app() -> Router {
    let catalog = MemoryCatalog::with_fixtures(IdGenerator::default());
    router(build_schema(Arc::new(catalog)))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

async fn post_graphql(app: &Router, body: Value) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("Failed to build request"),
        )
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_str(&body_string(response).await).expect("Response is not JSON")
}

#[tokio::test]
async fn test_root_greeting() {
    let response = fixture_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, GREETING);
}

#[tokio::test]
async fn test_graphiql_for_browsers() {
    let response = fixture_app()
        .oneshot(
            Request::builder()
                .uri("/graphql")
                .header(header::ACCEPT, "text/html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("graphiql"));
}

#[tokio::test]
async fn test_get_without_html_is_rejected() {
    let response = fixture_app()
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = fixture_app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_get_books_operation() {
    let app = fixture_app();
    let response = post_graphql(
        &app,
        json!({
            "query": "query GetBooks { books { name id } }",
            "operationName": "GetBooks",
        }),
    )
    .await;

    assert_eq!(response["data"]["books"].as_array().unwrap().len(), 6);
    assert_eq!(response["data"]["books"][1]["name"], "The Final Empire");
}

#[tokio::test]
async fn test_nested_relations_over_http() {
    let app = fixture_app();
    let response = post_graphql(
        &app,
        json!({ "query": r#"{ book(id: "5") { author { name books { id } } } }"# }),
    )
    .await;

    assert_eq!(
        response["data"]["book"]["author"],
        json!({
            "name": "Terry Pratchett",
            "books": [{ "id": "3" }, { "id": "5" }, { "id": "6" }]
        })
    );
}

#[tokio::test]
async fn test_unknown_author_is_null() {
    let app = fixture_app();
    let response = post_graphql(&app, json!({ "query": r#"{ author(id: "x") { name } }"# })).await;

    assert_eq!(response["data"]["author"], Value::Null);
    assert!(response.get("errors").is_none());
}

#[tokio::test]
async fn test_malformed_query_returns_errors() {
    let app = fixture_app();
    let response = post_graphql(&app, json!({ "query": "{ books { title } }" })).await;

    assert!(!response["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_author_visible_to_next_request() {
    let app = fixture_app();
    let added = post_graphql(
        &app,
        json!({
            "query": "mutation AddAuthor($name: String!, $age: Int!) { addAuthor(name: $name, age: $age) { id name age } }",
            "variables": { "name": "Ursula K. Le Guin", "age": 67 },
        }),
    )
    .await;
    assert_eq!(
        added["data"]["addAuthor"],
        json!({ "id": "4", "name": "Ursula K. Le Guin", "age": 67 })
    );

    let listed = post_graphql(&app, json!({ "query": "{ authors { id } }" })).await;
    assert_eq!(listed["data"]["authors"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_document_store_behind_router() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = DocumentCatalog::open(temp_dir.path(), IdGenerator::default()).unwrap();
    catalog
        .seed(&fixtures::books(), &fixtures::authors())
        .unwrap();
    let app = router(build_schema(Arc::new(catalog)));

    post_graphql(
        &app,
        json!({ "query": r#"mutation { addBook(name: "Mort", genre: "fantasy", authorid: "3") { id } }"# }),
    )
    .await;

    let reopened = DocumentCatalog::open(temp_dir.path(), IdGenerator::default()).unwrap();
    let app = router(build_schema(Arc::new(reopened)));
    let response = post_graphql(&app, json!({ "query": r#"{ book(id: "7") { name } }"# })).await;
    assert_eq!(response["data"]["book"]["name"], "Mort");
}

/// Serve `app` on an ephemeral port and return its `/graphql` URL.
async fn spawn_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });
    format!("http://{}/graphql", addr)
}

#[tokio::test]
async fn test_remote_client_reads_from_live_server() {
    let endpoint = spawn_server(fixture_app()).await;
    let client = ReadlistClient::remote(endpoint).unwrap();

    let books = client.books().await.unwrap();
    assert_eq!(books.len(), 6);
    assert_eq!(books[4].name, "The Color of Magic");

    let book = client.book("2").await.unwrap().unwrap();
    let author = book.author.unwrap();
    assert_eq!(author.name, "Brandon Sanderson");
    let ids: Vec<_> = author.books.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["2", "4"]);

    assert!(client.author("404").await.unwrap().is_none());
}

#[tokio::test]
async fn test_remote_client_writes_to_live_server() {
    let endpoint = spawn_server(fixture_app()).await;
    let client = ReadlistClient::remote(endpoint).unwrap();

    let author = client.add_author("Ursula K. Le Guin", 67).await.unwrap();
    assert_eq!(author.id, "4");
    assert_eq!(author.age, 67);

    let book = client
        .add_book("The Dispossessed", "sci-fi", &author.id)
        .await
        .unwrap();
    assert_eq!(book.id, "7");

    let names: Vec<_> = client
        .authors()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names.last().map(String::as_str), Some("Ursula K. Le Guin"));
}

#[tokio::test]
async fn test_remote_client_surfaces_graphql_errors() {
    let endpoint = spawn_server(fixture_app()).await;
    let client = ReadlistClient::remote(endpoint).unwrap();

    // GetBook without its required $id variable
    let err = client
        .execute(&documents::GET_BOOK, json!({}))
        .await
        .unwrap_err();
    match err {
        ReadlistError::Graphql(message) => assert!(message.contains("id"), "{}", message),
        other => panic!("expected a GraphQL error, got {:?}", other),
    }
}
