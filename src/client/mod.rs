//! Client side of the reading list: named documents and a way to run them.
//!
//! A [`ReadlistClient`] executes the static [`documents`] either against an
//! in-process schema or by POSTing them to a remote `/graphql` endpoint. The
//! `data` payload is decoded into the row types below.

pub mod documents;

use async_graphql::Variables;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{ReadlistError, Result};
use crate::graphql::ReadlistSchema;
use crate::model::Author;
use documents::Operation;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";

/// An `{ id name }` row, as selected by `GetBooks`, `GetAuthors` and `AddBook`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDetails {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub books: Vec<BookEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetails {
    pub id: String,
    pub name: String,
    pub genre: String,
    pub author: Option<AuthorDetails>,
}

enum Transport {
    Local(ReadlistSchema),
    Remote {
        endpoint: String,
        http: reqwest::Client,
    },
}

#[derive(Deserialize)]
struct WireResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<WireError>,
}

#[derive(Deserialize)]
struct WireError {
    message: String,
}

pub struct ReadlistClient {
    transport: Transport,
}

impl ReadlistClient {
    /// Run documents against a schema in this process.
    pub fn local(schema: ReadlistSchema) -> Self {
        Self {
            transport: Transport::Local(schema),
        }
    }

    /// Send documents to a GraphQL endpoint over HTTP.
    pub fn remote(endpoint: impl Into<String>) -> Result<Self> {
        // reqwest is built without a default crypto provider
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = reqwest::Client::builder()
            .user_agent(concat!("readlist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ReadlistError::Remote(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            transport: Transport::Remote {
                endpoint: endpoint.into(),
                http,
            },
        })
    }

    /// Execute `op` with `variables` and return its `data` payload.
    ///
    /// The first GraphQL error, if any, is returned as
    /// [`ReadlistError::Graphql`] even when partial data came back.
    pub async fn execute(&self, op: &Operation, variables: Value) -> Result<Value> {
        tracing::debug!(operation = op.name, "Executing operation");

        let response: WireResponse = match &self.transport {
            Transport::Local(schema) => {
                let request = async_graphql::Request::new(op.document)
                    .operation_name(op.name)
                    .variables(Variables::from_json(variables));
                let response = schema.execute(request).await;
                serde_json::from_value(serde_json::to_value(&response)?)?
            }
            Transport::Remote { endpoint, http } => {
                let body = json!({
                    "query": op.document,
                    "operationName": op.name,
                    "variables": variables,
                });
                let response = http
                    .post(endpoint.as_str())
                    .json(&body)
                    .send()
                    .await
                    .map_err(|e| ReadlistError::Remote(format!("{}: {}", endpoint, e)))?;
                let status = response.status();
                response.json().await.map_err(|e| {
                    ReadlistError::Remote(format!("{} returned {}: {}", endpoint, status, e))
                })?
            }
        };

        if let Some(error) = response.errors.first() {
            return Err(ReadlistError::Graphql(error.message.clone()));
        }
        response
            .data
            .ok_or_else(|| ReadlistError::Graphql("Response carried no data".to_string()))
    }

    pub async fn books(&self) -> Result<Vec<Listing>> {
        let data = self.execute(&documents::GET_BOOKS, json!({})).await?;
        field(data, "books")
    }

    pub async fn authors(&self) -> Result<Vec<Listing>> {
        let data = self.execute(&documents::GET_AUTHORS, json!({})).await?;
        field(data, "authors")
    }

    pub async fn book(&self, id: &str) -> Result<Option<BookDetails>> {
        let data = self
            .execute(&documents::GET_BOOK, json!({ "id": id }))
            .await?;
        field(data, "book")
    }

    pub async fn author(&self, id: &str) -> Result<Option<AuthorDetails>> {
        let data = self
            .execute(&documents::GET_AUTHOR, json!({ "id": id }))
            .await?;
        field(data, "author")
    }

    pub async fn add_book(&self, name: &str, genre: &str, authorid: &str) -> Result<Listing> {
        let variables = json!({ "name": name, "genre": genre, "authorid": authorid });
        let data = self.execute(&documents::ADD_BOOK, variables).await?;
        field(data, "addBook")
    }

    pub async fn add_author(&self, name: &str, age: i32) -> Result<Author> {
        let variables = json!({ "name": name, "age": age });
        let data = self.execute(&documents::ADD_AUTHOR, variables).await?;
        field(data, "addAuthor")
    }
}

fn field<T: DeserializeOwned>(mut data: Value, name: &str) -> Result<T> {
    let value = data.get_mut(name).map(Value::take).unwrap_or(Value::Null);
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::build_schema;
    use crate::storage::{IdGenerator, MemoryCatalog};
    use std::sync::Arc;

    fn local_client() -> ReadlistClient {
        let catalog = MemoryCatalog::with_fixtures(IdGenerator::default());
        ReadlistClient::local(build_schema(Arc::new(catalog)))
    }

    #[tokio::test]
    async fn test_get_books() {
        let books = local_client().books().await.unwrap();
        assert_eq!(books.len(), 6);
        assert_eq!(
            books[0],
            Listing {
                id: "1".to_string(),
                name: "Name of the wind".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_get_authors() {
        let names: Vec<_> = local_client()
            .authors()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, ["Patrick Rothfuss", "Brandon Sanderson", "Terry Pratchett"]);
    }

    #[tokio::test]
    async fn test_get_book_details() {
        let book = local_client().book("4").await.unwrap().unwrap();
        assert_eq!(book.name, "The Hero of Ages");
        let author = book.author.unwrap();
        assert_eq!(author.name, "Brandon Sanderson");
        let ids: Vec<_> = author.books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["2", "4"]);
        assert!(author.books[0].genre.is_none());
    }

    #[tokio::test]
    async fn test_get_missing_book() {
        assert!(local_client().book("100").await.unwrap().is_none());
        assert!(local_client().author("100").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_author_details() {
        let author = local_client().author("1").await.unwrap().unwrap();
        assert_eq!(author.age, 44);
        assert_eq!(author.books.len(), 1);
        assert_eq!(author.books[0].genre.as_deref(), Some("fiction"));
    }

    #[tokio::test]
    async fn test_add_author_and_book() {
        let client = local_client();
        let author = client.add_author("Ursula K. Le Guin", 67).await.unwrap();
        assert_eq!(author, Author::new("4", "Ursula K. Le Guin", 67));

        let book = client
            .add_book("The Dispossessed", "sci-fi", &author.id)
            .await
            .unwrap();
        assert_eq!(book.id, "7");

        let details = client.author(&author.id).await.unwrap().unwrap();
        assert_eq!(details.books.len(), 1);
        assert_eq!(details.books[0].name, "The Dispossessed");
    }

    #[tokio::test]
    async fn test_every_document_executes_cleanly() {
        let client = local_client();
        for op in documents::ALL {
            let variables = match op.name {
                "AddBook" => json!({ "name": "n", "genre": "g", "authorid": "1" }),
                "AddAuthor" => json!({ "name": "n", "age": 1 }),
                "GetBook" | "GetAuthor" => json!({ "id": "1" }),
                _ => json!({}),
            };
            client
                .execute(&op, variables)
                .await
                .unwrap_or_else(|e| panic!("{} failed: {}", op.name, e));
        }
    }

    #[tokio::test]
    async fn test_missing_variable_is_graphql_error() {
        let err = local_client()
            .execute(&documents::GET_BOOK, json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ReadlistError::Graphql(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_remote_error() {
        let client = ReadlistClient::remote("http://127.0.0.1:9/graphql").unwrap();
        let err = client.books().await.unwrap_err();
        assert!(matches!(err, ReadlistError::Remote(_)));
    }
}
