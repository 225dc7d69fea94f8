//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use factlens_domain::{ClaimCategory, OverlapPolicy};
use std::path::PathBuf;

/// FactLens CLI - Highlight and check factual claims in text.
#[derive(Debug, Parser)]
#[command(name = "factlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Backend URL, overriding the profile
    #[arg(long, global = true, env = "FACTLENS_API_URL")]
    pub api_url: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract and highlight claims locally
    Check(CheckArgs),

    /// Extract and highlight claims with the backend
    Extract(ExtractArgs),

    /// Re-verify a single claim with the backend
    Verify(VerifyArgs),

    /// List the sources the backend checks against
    Sources,

    /// Show backend health
    Health,

    /// List rewrite tones
    Tones,

    /// List rewrite platforms
    Platforms,

    /// Rewrite a comment in a given tone
    Rewrite(RewriteArgs),

    /// Fetch comments to work on
    Comments(CommentsArgs),

    /// Manage configuration profiles
    Profile(ProfileArgs),

    /// Enter interactive REPL mode
    Repl(ReplArgs),
}

/// Where the text to check comes from.
#[derive(Debug, Clone, Parser)]
pub struct InputArgs {
    /// Text to check
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Seed the placeholder verifier for reproducible verdicts
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print HTML-style markup instead of terminal colors
    #[arg(long)]
    pub markup: bool,

    /// What to do with overlapping claims
    #[arg(long, value_enum, default_value = "reject")]
    pub overlap: OverlapArg,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print HTML-style markup instead of terminal colors
    #[arg(long)]
    pub markup: bool,

    /// What to do with overlapping claims
    #[arg(long, value_enum, default_value = "reject")]
    pub overlap: OverlapArg,
}

/// Arguments for the verify command.
#[derive(Debug, Parser)]
pub struct VerifyArgs {
    /// Claim ID
    pub id: String,

    /// Claim text
    pub text: String,

    /// Claim category
    #[arg(short = 't', long, value_enum, default_value = "fact")]
    pub category: CategoryArg,
}

/// Arguments for the rewrite command.
#[derive(Debug, Parser)]
pub struct RewriteArgs {
    /// Comment to rewrite
    pub comment: String,

    /// Tone name (see `factlens tones`)
    #[arg(short, long, default_value = "Casual")]
    pub tone: String,

    /// Platform id (see `factlens platforms`)
    #[arg(short = 'P', long, default_value = "general")]
    pub platform: String,

    /// Persona to write as
    #[arg(long)]
    pub persona: Option<String>,

    /// Surrounding context
    #[arg(long)]
    pub context: Option<String>,
}

/// Arguments for the comments command.
#[derive(Debug, Parser)]
pub struct CommentsArgs {
    #[command(subcommand)]
    pub source: CommentSource,
}

/// Comment sources.
#[derive(Debug, Subcommand)]
pub enum CommentSource {
    /// Search Reddit comments
    Reddit {
        /// Search query
        query: String,
        /// Maximum number of comments
        #[arg(short, long, default_value = "10")]
        limit: u32,
    },

    /// YouTube comments by video id or search; trending when omitted
    Youtube {
        /// Video id or search query
        input: Option<String>,
        /// Maximum number of comments
        #[arg(short, long, default_value = "10")]
        limit: u32,
    },
}

/// Arguments for the repl command.
#[derive(Debug, Default, Parser)]
pub struct ReplArgs {
    /// Seed the placeholder verifier for reproducible verdicts
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,
        /// Backend URL
        #[arg(short, long)]
        url: String,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

/// Claim category argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CategoryArg {
    /// A date or year
    Date,
    /// A number, price or percentage
    Number,
    /// A named entity
    Entity,
    /// Any other factual statement
    Fact,
}

/// Overlap policy argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OverlapArg {
    /// Fail when claims overlap
    Reject,
    /// Keep the earliest claim and skip the ones overlapping it
    KeepFirst,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<CategoryArg> for ClaimCategory {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Date => ClaimCategory::Date,
            CategoryArg::Number => ClaimCategory::Number,
            CategoryArg::Entity => ClaimCategory::Entity,
            CategoryArg::Fact => ClaimCategory::Fact,
        }
    }
}

impl From<OverlapArg> for OverlapPolicy {
    fn from(policy: OverlapArg) -> Self {
        match policy {
            OverlapArg::Reject => OverlapPolicy::Reject,
            OverlapArg::KeepFirst => OverlapPolicy::KeepFirst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_repl() {
        let cli = Cli::parse_from(["factlens"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_check_command() {
        let cli = Cli::parse_from([
            "factlens",
            "check",
            "Founded in 1976",
            "--seed",
            "7",
            "--overlap",
            "keep-first",
        ]);
        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.input.text.as_deref(), Some("Founded in 1976"));
                assert_eq!(args.seed, Some(7));
                assert!(matches!(
                    OverlapPolicy::from(args.overlap),
                    OverlapPolicy::KeepFirst
                ));
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_text_and_file_conflict() {
        let result = Cli::try_parse_from(["factlens", "check", "text", "--file", "in.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "factlens",
            "health",
            "--api-url",
            "http://example.com",
            "--format",
            "json",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://example.com"));
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(matches!(cli.command, Some(Command::Health)));
    }

    #[test]
    fn test_comments_youtube_without_input() {
        let cli = Cli::parse_from(["factlens", "comments", "youtube", "--limit", "3"]);
        match cli.command {
            Some(Command::Comments(CommentsArgs {
                source: CommentSource::Youtube { input, limit },
            })) => {
                assert!(input.is_none());
                assert_eq!(limit, 3);
            }
            _ => panic!("Expected Comments command"),
        }
    }

    #[test]
    fn test_category_conversion() {
        let category: ClaimCategory = CategoryArg::Number.into();
        assert_eq!(category, ClaimCategory::Number);
    }
}
