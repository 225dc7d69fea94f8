//! Check command implementation.

use crate::cli::CheckArgs;
use crate::commands::{read_input, render_document};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use factlens_domain::Document;
use factlens_extractor::{ExtractorConfig, PatternExtractor, RandomVerifier};

/// Execute the check command.
pub async fn execute_check(args: CheckArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_input(&args.input)?;
    let document = check_text(text, args.seed, config.extractor.clone())?;

    println!(
        "{}",
        render_document(&document, args.markup, args.overlap.into(), formatter)?
    );
    Ok(())
}

/// Run local extraction over `text`.
pub(crate) fn check_text(
    text: String,
    seed: Option<u64>,
    extractor_config: ExtractorConfig,
) -> Result<Document> {
    let verifier = match seed {
        Some(seed) => RandomVerifier::seeded(seed),
        None => RandomVerifier::new(),
    };
    let extractor = PatternExtractor::new(verifier, extractor_config)?;

    let mut document = Document::new(text);
    let claims = extractor.extract(document.text())?;
    document.replace_claims(claims);
    Ok(document)
}
