use anyhow::Result;

use super::CommandContext;
use super::utils::{execute_raw, parse_variables};

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let schema = ctx.schema()?;
    let vars = parse_variables(variables)?;
    let response = execute_raw(&schema, &query, vars)?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
