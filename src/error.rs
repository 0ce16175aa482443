use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadlistError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid database URL: {0} (expected 'memory:' or 'file:<path>')")]
    InvalidDatabaseUrl(String),

    #[error("Project not initialized. Run 'readlist init' first.")]
    NotInitialized,

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("GraphQL error: {0}")]
    Graphql(String),

    #[error("Remote error: {0}")]
    Remote(String),
}

pub type Result<T> = std::result::Result<T, ReadlistError>;
