use crate::server::run_server;
use anyhow::Result;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());
    let port = port.unwrap_or(ctx.config.server.port);
    let schema = ctx.schema()?;

    tracing::info!(
        database_url = %ctx.config.readlist.database_url,
        "Starting GraphQL server"
    );
    println!("Starting GraphQL server on http://{}:{}", host, port);
    println!("GraphiQL: http://{}:{}/graphql", host, port);

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &host, port))?;
    Ok(())
}
