//! Verify command implementation.

use crate::cli::VerifyArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use factlens_domain::{ClaimCategory, ClaimId};
use factlens_sdk::ApiClient;

/// Execute the verify command.
pub async fn execute_verify(
    args: VerifyArgs,
    client: &ApiClient,
    formatter: &Formatter,
) -> Result<()> {
    let id = parse_claim_id(&args.id)?;
    let category: ClaimCategory = args.category.into();

    let verdict = client.verify_claim(&id, &args.text, category).await?;

    println!("{}", formatter.format_verdict(&id, &verdict)?);
    Ok(())
}

/// Parse a claim ID argument.
pub(crate) fn parse_claim_id(raw: &str) -> Result<ClaimId> {
    ClaimId::parse(raw).map_err(|e| CliError::InvalidInput(format!("Invalid claim ID: {}", e)))
}
