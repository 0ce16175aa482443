mod add;
mod authors;
mod books;
mod init;
mod mutate;
mod query;
mod serve;
mod utils;

pub use add::{handle_add_author, handle_add_book};
pub use authors::{handle_author, handle_authors};
pub use books::{handle_book, handle_books};
pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use serve::handle_serve;

use crate::client::ReadlistClient;
use crate::config::ReadlistConfig;
use crate::graphql::{ReadlistSchema, build_schema};
use crate::storage::{Catalog, open_catalog};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: ReadlistConfig,
    pub root: PathBuf,
}

impl CommandContext {
    pub fn new(config: ReadlistConfig, root: PathBuf) -> Self {
        Self { config, root }
    }

    /// Load the project config from the current directory upward, falling
    /// back to defaults, and apply a `--database-url` override.
    pub fn load(database_url: Option<String>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let (mut config, root) = ReadlistConfig::load_or_default(&cwd)
            .context("Failed to load readlist configuration")?;
        if let Some(url) = database_url {
            config.readlist.database_url = url;
        }
        Ok(Self::new(config, root))
    }

    pub fn catalog(&self) -> Result<Arc<dyn Catalog>> {
        open_catalog(&self.config, &self.root).with_context(|| {
            format!(
                "Failed to open store '{}'",
                self.config.readlist.database_url
            )
        })
    }

    pub fn schema(&self) -> Result<ReadlistSchema> {
        Ok(build_schema(self.catalog()?))
    }

    /// A client for `endpoint`, or for the local store when none is given.
    pub fn client(&self, endpoint: Option<&str>) -> Result<ReadlistClient> {
        match endpoint {
            Some(url) => Ok(ReadlistClient::remote(url)?),
            None => Ok(ReadlistClient::local(self.schema()?)),
        }
    }
}
