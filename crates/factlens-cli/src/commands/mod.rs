//! Command implementations.

pub mod check;
pub mod comments;
pub mod extract;
pub mod profile;
pub mod rewrite;
pub mod sources;
pub mod verify;

pub use self::check::execute_check;
pub use self::comments::execute_comments;
pub use self::extract::execute_extract;
pub use self::profile::execute_profile;
pub use self::rewrite::{execute_platforms, execute_rewrite, execute_tones};
pub use self::sources::{execute_health, execute_sources};
pub use self::verify::execute_verify;

use crate::cli::InputArgs;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use factlens_domain::{Document, OverlapPolicy};
use tracing::warn;

/// Text from the positional argument or `--file`.
pub fn read_input(input: &InputArgs) -> Result<String> {
    let text = match (&input.text, &input.file) {
        (_, Some(path)) => std::fs::read_to_string(path)?,
        (Some(text), None) => text.clone(),
        (None, None) => {
            return Err(CliError::InvalidInput(
                "Provide text or --file <path>".to_string(),
            ))
        }
    };

    if text.trim().is_empty() {
        return Err(CliError::InvalidInput("Text is empty".to_string()));
    }
    Ok(text)
}

/// Highlighted text followed by the claims table.
///
/// JSON and quiet formats print only the claims.
pub fn render_document(
    document: &Document,
    markup: bool,
    policy: OverlapPolicy,
    formatter: &Formatter,
) -> Result<String> {
    let claims = formatter.format_claims(document.claims().as_slice())?;
    if formatter.format() != OutputFormat::Table {
        return Ok(claims);
    }

    let highlight = document.highlight(policy)?;
    let body = if markup {
        highlight.to_markup()
    } else {
        formatter.format_highlight(&highlight, document.hovered())
    };

    let mut out = vec![body, String::new(), claims];
    for id in highlight.skipped() {
        warn!("Claim {} could not be highlighted", id);
        out.push(formatter.warning(&format!(
            "Claim {} could not be highlighted (overlapping or outside the text)",
            id.short()
        )));
    }
    Ok(out.join("\n"))
}
