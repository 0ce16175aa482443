//! HTTP front for the GraphQL schema.
//!
//! - `GET /` returns a static greeting
//! - `GET /graphql` serves the GraphiQL explorer to browsers
//! - `POST /graphql` executes queries and mutations

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::Result;
use crate::graphql::ReadlistSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

pub const GREETING: &str = "<h1>Hello World!</h1>";

pub fn router(schema: ReadlistSchema) -> Router {
    Router::new()
        .route("/", get(index))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

/// Bind `host:port` and serve until the process is stopped.
pub async fn run_server(schema: ReadlistSchema, host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "GraphQL server listening");
    tracing::info!("GraphiQL: http://{}{}", addr, GRAPHQL_PATH);

    axum::serve(listener, router(schema)).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(GREETING)
}

async fn graphql_handler(
    State(schema): State<ReadlistSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphiQL interactive explorer (only for browsers)
async fn graphiql(headers: HeaderMap) -> impl IntoResponse {
    let accepts_html = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/html"))
        .unwrap_or(false);

    if accepts_html {
        Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response()
    } else {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            axum::Json(serde_json::json!({
                "error": "GET requests are not supported for GraphQL queries. Use POST with Content-Type: application/json"
            })),
        )
            .into_response()
    }
}
