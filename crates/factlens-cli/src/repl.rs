//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! The REPL holds one [`Document`]: a text buffer plus the claims found in
//! it. Claims are referenced by full ID or by their 1-based position in the
//! `claims` listing.

use crate::commands::render_document;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use factlens_domain::{ClaimId, Document, OverlapPolicy};
use factlens_extractor::{ExtractorConfig, PatternExtractor, RandomVerifier};
use factlens_sdk::ApiClient;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Run the interactive REPL.
pub async fn run_repl(
    config: &Config,
    client: Option<ApiClient>,
    seed: Option<u64>,
    formatter: &Formatter,
) -> Result<()> {
    println!(
        "{}",
        formatter.info("FactLens REPL - Type 'help' for commands, 'exit' to quit")
    );
    if client.is_none() {
        println!(
            "{}",
            formatter.warning("No backend configured; remote commands are disabled")
        );
    }
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut session = Session::new(config.extractor.clone(), seed, client)?;

    loop {
        let prompt = if session.document.text().is_empty() {
            "factlens> "
        } else {
            "factlens (text)> "
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => match session.execute(cmd, formatter).await {
                        Ok(output) if !output.is_empty() => println!("{}", output),
                        Ok(_) => {}
                        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                    },
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
    Text(String),
    Load(PathBuf),
    Extract { remote: bool },
    Show,
    Claims,
    Hover(Option<String>),
    Confirm(String),
    Correct(String),
    Verify(String),
    Clear,
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    if head.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match head {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "text" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: text <content>".to_string()));
            }
            Ok(ReplCommand::Text(rest.to_string()))
        }
        "load" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: load <file>".to_string()));
            }
            Ok(ReplCommand::Load(PathBuf::from(rest)))
        }
        "extract" => match rest {
            "" => Ok(ReplCommand::Extract { remote: false }),
            "--remote" | "-r" => Ok(ReplCommand::Extract { remote: true }),
            other => Err(CliError::InvalidInput(format!(
                "Unknown extract option: {}. Usage: extract [--remote]",
                other
            ))),
        },
        "show" => Ok(ReplCommand::Show),
        "claims" | "ls" => Ok(ReplCommand::Claims),
        "hover" => Ok(ReplCommand::Hover(
            Some(rest.to_string()).filter(|r| !r.is_empty()),
        )),
        "confirm" => claim_arg(rest, "confirm").map(ReplCommand::Confirm),
        "correct" => claim_arg(rest, "correct").map(ReplCommand::Correct),
        "verify" => claim_arg(rest, "verify").map(ReplCommand::Verify),
        "clear" => Ok(ReplCommand::Clear),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            head
        ))),
    }
}

fn claim_arg(rest: &str, command: &str) -> Result<String> {
    if rest.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "Usage: {} <claim id | #>",
            command
        )));
    }
    Ok(rest.to_string())
}

/// State behind the REPL prompt.
struct Session {
    document: Document,
    extractor: PatternExtractor<RandomVerifier>,
    client: Option<ApiClient>,
    policy: OverlapPolicy,
}

impl Session {
    fn new(
        extractor_config: ExtractorConfig,
        seed: Option<u64>,
        client: Option<ApiClient>,
    ) -> Result<Self> {
        let verifier = match seed {
            Some(seed) => RandomVerifier::seeded(seed),
            None => RandomVerifier::new(),
        };
        Ok(Self {
            document: Document::default(),
            extractor: PatternExtractor::new(verifier, extractor_config)?,
            client,
            policy: OverlapPolicy::KeepFirst,
        })
    }

    /// Run a command and return what to print.
    async fn execute(&mut self, cmd: ReplCommand, formatter: &Formatter) -> Result<String> {
        debug!("REPL command: {:?}", cmd);
        match cmd {
            ReplCommand::Text(text) => Ok(self.set_text(text, formatter)),
            ReplCommand::Load(path) => {
                let text = std::fs::read_to_string(&path)?;
                Ok(self.set_text(text, formatter))
            }
            ReplCommand::Extract { remote: false } => self.extract_local(formatter),
            ReplCommand::Extract { remote: true } => self.extract_remote(formatter).await,
            ReplCommand::Show => self.show(formatter),
            ReplCommand::Claims => formatter.format_claims(self.document.claims().as_slice()),
            ReplCommand::Hover(None) => {
                self.document.clear_hover();
                Ok(String::new())
            }
            ReplCommand::Hover(Some(token)) => self.hover(&token, formatter),
            ReplCommand::Confirm(token) => self.confirm(&token, formatter),
            ReplCommand::Correct(token) => self.correct(&token, formatter),
            ReplCommand::Verify(token) => self.verify(&token, formatter).await,
            ReplCommand::Clear => {
                self.document = Document::default();
                Ok(formatter.info("Cleared text and claims"))
            }
            ReplCommand::Exit | ReplCommand::Help => Ok(String::new()),
        }
    }

    fn set_text(&mut self, text: String, formatter: &Formatter) -> String {
        let chars = text.chars().count();
        self.document.set_text(text);
        let mut message = formatter.info(&format!("Text set ({} chars)", chars));
        if !self.document.claims().is_empty() {
            message.push('\n');
            message.push_str(&formatter.warning(
                "Existing claims refer to the old text; run 'extract' to refresh them",
            ));
        }
        message
    }

    fn require_text(&self) -> Result<()> {
        if self.document.text().trim().is_empty() {
            return Err(CliError::InvalidInput(
                "No text yet. Use 'text <content>' or 'load <file>'".to_string(),
            ));
        }
        Ok(())
    }

    fn extract_local(&mut self, formatter: &Formatter) -> Result<String> {
        self.require_text()?;
        let claims = self.extractor.extract(self.document.text())?;
        self.document.replace_claims(claims);
        self.show(formatter)
    }

    async fn extract_remote(&mut self, formatter: &Formatter) -> Result<String> {
        self.require_text()?;
        let client = self.client.as_ref().ok_or_else(no_backend)?;

        let ticket = self.document.begin_extraction();
        let result = client.extract_claims(self.document.text()).await;
        let extraction = match result {
            Ok(extraction) => extraction,
            Err(e) => {
                if let Err(stale) = self.document.fail_extraction(ticket) {
                    warn!("{}", stale);
                }
                return Err(e.into());
            }
        };

        let summary = formatter.extraction_summary(&extraction);
        self.document.complete_extraction(ticket, extraction.claims)?;
        Ok(format!("{}\n{}", self.show(formatter)?, summary))
    }

    fn show(&self, formatter: &Formatter) -> Result<String> {
        self.require_text()?;
        render_document(&self.document, false, self.policy, formatter)
    }

    /// Resolve a full ID or 1-based index to a claim in the list.
    fn resolve(&self, token: &str) -> Result<ClaimId> {
        let claims = self.document.claims();
        if let Ok(index) = token.parse::<usize>() {
            if let Some(claim) = index.checked_sub(1).and_then(|i| claims.as_slice().get(i)) {
                return Ok(claim.id.clone());
            }
        }

        match ClaimId::parse(token) {
            Ok(id) if claims.contains(&id) => Ok(id),
            _ => Err(CliError::UnknownClaim(token.to_string())),
        }
    }

    fn hover(&mut self, token: &str, formatter: &Formatter) -> Result<String> {
        let id = self.resolve(token)?;
        self.document.hover(&id);
        let claim = self
            .document
            .claims()
            .get(&id)
            .ok_or_else(|| CliError::UnknownClaim(token.to_string()))?;
        Ok(formatter.claim_detail(claim))
    }

    fn confirm(&mut self, token: &str, formatter: &Formatter) -> Result<String> {
        let id = self.resolve(token)?;
        self.document.confirm(&id);
        Ok(formatter.success(&format!("Confirmed claim {}", id.short())))
    }

    fn correct(&mut self, token: &str, formatter: &Formatter) -> Result<String> {
        let id = self.resolve(token)?;
        match self.document.correct(&id) {
            Some(removed) => Ok(formatter.success(&format!(
                "Removed claim \"{}\" for correction",
                removed.text
            ))),
            None => Err(CliError::UnknownClaim(token.to_string())),
        }
    }

    async fn verify(&mut self, token: &str, formatter: &Formatter) -> Result<String> {
        let id = self.resolve(token)?;
        let (text, category) = match self.document.claims().get(&id) {
            Some(claim) => (claim.text.clone(), claim.category),
            None => return Err(CliError::UnknownClaim(token.to_string())),
        };

        let verdict = self.client()?.verify_claim(&id, &text, category).await?;
        let output = formatter.format_verdict(&id, &verdict)?;
        if !self.document.apply_verification(&id, verdict) {
            // Corrected away while the request was out
            return Ok(formatter.warning(&format!("Claim {} is gone; verdict dropped", id.short())));
        }
        Ok(output)
    }

    fn client(&self) -> Result<&ApiClient> {
        self.client.as_ref().ok_or_else(no_backend)
    }
}

fn no_backend() -> CliError {
    CliError::Config("No backend configured. Use 'factlens profile set' or --api-url".to_string())
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("Failed to initialize editor: {}", e),
    ))
}

fn get_history_path() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let factlens_dir = home.join(".factlens");
    std::fs::create_dir_all(&factlens_dir)?;
    Ok(factlens_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  text <content>         - Replace the text buffer");
    println!("  load <file>            - Load the text buffer from a file");
    println!("  extract [--remote]     - Find claims locally, or with the backend");
    println!("  show                   - Show highlighted text and claims");
    println!("  claims, ls             - List claims");
    println!("  hover [claim]          - Show claim details (no argument clears)");
    println!("  confirm <claim>        - Mark a claim verified with full confidence");
    println!("  correct <claim>        - Remove a claim so it can be corrected");
    println!("  verify <claim>         - Re-verify a claim with the backend");
    println!("  clear                  - Clear text and claims");
    println!("  help, ?                - Show this help");
    println!("  exit, quit, q          - Exit REPL");
    println!();
    println!("  <claim> is a full claim ID or its number in the 'claims' list.");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use factlens_domain::{ClaimCategory, ClaimStatus};

    fn session() -> Session {
        Session::new(ExtractorConfig::default(), Some(4), None).unwrap()
    }

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_repl_command("exit").unwrap(), ReplCommand::Exit);
        assert_eq!(
            parse_repl_command("text  Founded in 1976 ").unwrap(),
            ReplCommand::Text("Founded in 1976".to_string())
        );
        assert_eq!(
            parse_repl_command("extract --remote").unwrap(),
            ReplCommand::Extract { remote: true }
        );
        assert_eq!(parse_repl_command("hover").unwrap(), ReplCommand::Hover(None));
        assert_eq!(
            parse_repl_command("confirm 2").unwrap(),
            ReplCommand::Confirm("2".to_string())
        );
        assert!(parse_repl_command("confirm").is_err());
        assert!(parse_repl_command("extract --bogus").is_err());
        assert!(parse_repl_command("frobnicate").is_err());
    }

    #[tokio::test]
    async fn test_extract_and_reconcile_by_index() {
        let mut session = session();
        let formatter = formatter();

        session
            .execute(
                ReplCommand::Text("Released in 2019 for $499.".to_string()),
                &formatter,
            )
            .await
            .unwrap();
        let shown = session
            .execute(ReplCommand::Extract { remote: false }, &formatter)
            .await
            .unwrap();
        assert!(shown.contains("[2019]"));
        assert!(shown.contains("[$499]"));
        assert_eq!(session.document.claims().len(), 2);

        session
            .execute(ReplCommand::Confirm("2".to_string()), &formatter)
            .await
            .unwrap();
        let second = &session.document.claims().as_slice()[1];
        assert_eq!(second.status, ClaimStatus::Verified);
        assert_eq!(second.confidence.value(), 100);

        session
            .execute(ReplCommand::Correct("1".to_string()), &formatter)
            .await
            .unwrap();
        assert_eq!(session.document.claims().len(), 1);
        assert_eq!(
            session.document.claims().as_slice()[0].category,
            ClaimCategory::Number
        );
    }

    #[tokio::test]
    async fn test_hover_by_full_id() {
        let mut session = session();
        let formatter = formatter();
        session.document.set_text("Founded in 1976");
        session.extract_local(&formatter).unwrap();

        let id = session.document.claims().as_slice()[0].id.clone();
        let detail = session
            .execute(ReplCommand::Hover(Some(id.to_string())), &formatter)
            .await
            .unwrap();
        assert!(detail.contains("\"1976\""));
        assert_eq!(session.document.hovered(), Some(&id));

        session
            .execute(ReplCommand::Hover(None), &formatter)
            .await
            .unwrap();
        assert!(session.document.hovered().is_none());
    }

    #[tokio::test]
    async fn test_unknown_claim_reference() {
        let mut session = session();
        let formatter = formatter();
        session.document.set_text("Founded in 1976");
        session.extract_local(&formatter).unwrap();

        for token in ["0", "5", "not-an-id"] {
            let result = session
                .execute(ReplCommand::Confirm(token.to_string()), &formatter)
                .await;
            assert!(matches!(result, Err(CliError::UnknownClaim(_))));
        }
    }

    #[tokio::test]
    async fn test_extract_without_text() {
        let mut session = session();
        let result = session
            .execute(ReplCommand::Extract { remote: false }, &formatter())
            .await;
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_remote_commands_need_backend() {
        let mut session = session();
        let formatter = formatter();
        session.document.set_text("Founded in 1976");
        session.extract_local(&formatter).unwrap();

        let result = session
            .execute(ReplCommand::Extract { remote: true }, &formatter)
            .await;
        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(!session.document.is_processing());

        let result = session
            .execute(ReplCommand::Verify("1".to_string()), &formatter)
            .await;
        assert!(matches!(result, Err(CliError::Config(_))));
        assert_eq!(session.document.claims().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_resets_document() {
        let mut session = session();
        let formatter = formatter();
        session.document.set_text("Founded in 1976");
        session.extract_local(&formatter).unwrap();

        session.execute(ReplCommand::Clear, &formatter).await.unwrap();
        assert!(session.document.text().is_empty());
        assert!(session.document.claims().is_empty());
    }
}
