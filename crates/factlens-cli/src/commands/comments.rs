//! Comments command implementation.

use crate::cli::{CommentSource, CommentsArgs};
use crate::error::Result;
use crate::output::Formatter;
use factlens_sdk::ApiClient;

/// Execute the comments command.
pub async fn execute_comments(
    args: CommentsArgs,
    client: &ApiClient,
    formatter: &Formatter,
) -> Result<()> {
    let comments = match args.source {
        CommentSource::Reddit { query, limit } => client.reddit_comments(&query, limit).await?,
        CommentSource::Youtube { input, limit } => {
            client
                .youtube_comments(input.as_deref().unwrap_or(""), limit)
                .await?
        }
    };

    println!("{}", formatter.format_comments(&comments)?);
    Ok(())
}
