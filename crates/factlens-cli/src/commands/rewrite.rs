//! Tone, platform and rewrite command implementations.

use crate::cli::RewriteArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use factlens_sdk::{ApiClient, RewriteRequest, Tone};
use tracing::warn;

/// Execute the tones command.
///
/// Falls back to the built-in tone list when the backend cannot be reached.
pub async fn execute_tones(client: &ApiClient, formatter: &Formatter) -> Result<()> {
    let tones = match client.tones().await {
        Ok(tones) if !tones.is_empty() => tones,
        Ok(_) => Tone::fallback(),
        Err(e) => {
            warn!("Using built-in tones: {}", e);
            eprintln!("{}", formatter.warning("Backend unavailable, showing built-in tones"));
            Tone::fallback()
        }
    };

    println!("{}", formatter.format_tones(&tones)?);
    Ok(())
}

/// Execute the platforms command.
pub async fn execute_platforms(client: &ApiClient, formatter: &Formatter) -> Result<()> {
    let platforms = client.platforms().await?;
    println!("{}", formatter.format_platforms(&platforms)?);
    Ok(())
}

/// Execute the rewrite command.
pub async fn execute_rewrite(
    args: RewriteArgs,
    client: &ApiClient,
    formatter: &Formatter,
) -> Result<()> {
    let request = build_request(args)?;
    let response = client.rewrite(&request).await?;
    println!("{}", formatter.format_rewrite(&response)?);
    Ok(())
}

fn build_request(args: RewriteArgs) -> Result<RewriteRequest> {
    if args.comment.trim().is_empty() {
        return Err(CliError::InvalidInput("Comment is empty".to_string()));
    }

    let mut request = RewriteRequest::new(args.comment, args.tone);
    request.platform = args.platform;
    request.persona = args.persona.filter(|p| !p.trim().is_empty());
    request.context = args.context.filter(|c| !c.trim().is_empty());
    Ok(request)
}
