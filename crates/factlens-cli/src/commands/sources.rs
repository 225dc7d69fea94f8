//! Sources and health command implementations.

use crate::error::Result;
use crate::output::Formatter;
use factlens_sdk::ApiClient;

/// Execute the sources command.
pub async fn execute_sources(client: &ApiClient, formatter: &Formatter) -> Result<()> {
    let sources = client.sources().await?;
    println!("{}", formatter.format_value(&sources)?);
    Ok(())
}

/// Execute the health command.
pub async fn execute_health(client: &ApiClient, formatter: &Formatter) -> Result<()> {
    let health = client.health().await?;
    println!("{}", formatter.success(&format!("Backend at {} is up", client.base_url())));
    println!("{}", formatter.format_value(&health)?);
    Ok(())
}
