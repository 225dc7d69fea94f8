//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::commands::{read_input, render_document};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use factlens_domain::Document;
use factlens_sdk::ApiClient;

/// Execute the extract command.
pub async fn execute_extract(
    args: ExtractArgs,
    client: &ApiClient,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_input(&args.input)?;
    let mut document = Document::new(text);

    let ticket = document.begin_extraction();
    let extraction = match client.extract_claims(document.text()).await {
        Ok(extraction) => extraction,
        Err(e) => {
            document.fail_extraction(ticket)?;
            return Err(e.into());
        }
    };

    let summary = formatter.extraction_summary(&extraction);
    document.complete_extraction(ticket, extraction.claims)?;

    println!(
        "{}",
        render_document(&document, args.markup, args.overlap.into(), formatter)?
    );
    if formatter.format() == OutputFormat::Table {
        println!("{}", summary);
    }
    Ok(())
}
