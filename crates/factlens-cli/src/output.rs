//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use factlens_domain::{Claim, ClaimId, ClaimStatus, Highlight, Segment, Verdict};
use factlens_sdk::{Comment, Extraction, Platform, RewriteResponse, Tone};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format claims output.
    pub fn format_claims(&self, claims: &[Claim]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_claims_json(claims),
            OutputFormat::Table => self.format_claims_table(claims),
            OutputFormat::Quiet => self.format_claims_quiet(claims),
        }
    }

    /// Format claims as JSON, in the backend's wire shape.
    fn format_claims_json(&self, claims: &[Claim]) -> Result<String> {
        let json_claims: Vec<serde_json::Value> = claims.iter().map(claim_json).collect();
        Ok(serde_json::to_string_pretty(&json_claims)?)
    }

    /// Format claims as a table.
    fn format_claims_table(&self, claims: &[Claim]) -> Result<String> {
        if claims.is_empty() {
            return Ok(self.colorize("No claims found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "ID", "Claim", "Type", "Status", "Confidence", "Span"]);

        for (index, claim) in claims.iter().enumerate() {
            builder.push_record([
                (index + 1).to_string(),
                claim.id.short().to_string(),
                claim.text.clone(),
                claim.category.to_string(),
                self.status_label(claim.status),
                claim.confidence.to_string(),
                claim.span.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format claims in quiet mode (IDs only).
    fn format_claims_quiet(&self, claims: &[Claim]) -> Result<String> {
        let ids: Vec<&str> = claims.iter().map(|c| c.id.as_str()).collect();
        Ok(ids.join("\n"))
    }

    /// Render highlighted text for the terminal.
    ///
    /// Claims are colored by status; without color they are bracketed. The
    /// hovered claim is bold.
    pub fn format_highlight(&self, highlight: &Highlight<'_>, hovered: Option<&ClaimId>) -> String {
        let mut out = String::new();
        for segment in highlight.segments() {
            match segment {
                Segment::Plain(text) => out.push_str(text),
                Segment::Claim { id, status, text } => {
                    let is_hovered = hovered == Some(*id);
                    if self.color_enabled {
                        let painted = text.color(status_color(*status)).underline();
                        let painted = if is_hovered { painted.bold() } else { painted };
                        out.push_str(&painted.to_string());
                    } else if is_hovered {
                        out.push_str(&format!("[[{}]]", text));
                    } else {
                        out.push_str(&format!("[{}]", text));
                    }
                }
            }
        }
        out
    }

    /// Details for a single claim, as shown on hover.
    pub fn claim_detail(&self, claim: &Claim) -> String {
        let mut lines = vec![
            format!("\"{}\"", claim.text),
            format!(
                "  {} · {} · {} confidence",
                claim.category,
                self.status_label(claim.status),
                claim.confidence
            ),
        ];
        if let Some(evidence) = &claim.evidence {
            lines.push(format!("  Evidence: {}", evidence));
        }
        if !claim.sources.is_empty() {
            lines.push(format!("  Sources: {}", claim.sources.join(", ")));
        }
        lines.push(format!("  ID: {}", claim.id));
        lines.join("\n")
    }

    /// Summary line of a remote extraction.
    pub fn extraction_summary(&self, extraction: &Extraction) -> String {
        let mut line = format!(
            "{} claim(s) in {:.2}s",
            extraction.total_claims, extraction.processing_time
        );
        if !extraction.metadata.extraction_method.is_empty() {
            line.push_str(&format!(
                " via {} ({} source(s))",
                extraction.metadata.extraction_method, extraction.metadata.verification_sources
            ));
        }
        self.info(&line)
    }

    /// Format a verification result.
    pub fn format_verdict(&self, id: &ClaimId, verdict: &Verdict) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "claim_id": id.as_str(),
                "status": verdict.status.as_str(),
                "confidence": verdict.confidence.value(),
                "sources": verdict.sources,
                "evidence": verdict.evidence,
            }))?),
            OutputFormat::Quiet => Ok(verdict.status.to_string()),
            OutputFormat::Table => {
                let mut out = format!(
                    "{}: {} ({} confidence)",
                    id,
                    self.status_label(verdict.status),
                    verdict.confidence
                );
                if let Some(evidence) = &verdict.evidence {
                    out.push_str(&format!("\n  Evidence: {}", evidence));
                }
                if !verdict.sources.is_empty() {
                    out.push_str(&format!("\n  Sources: {}", verdict.sources.join(", ")));
                }
                Ok(out)
            }
        }
    }

    /// Format an opaque JSON payload.
    pub fn format_value(&self, value: &serde_json::Value) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Quiet => Ok(value.to_string()),
            OutputFormat::Table => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    /// Format rewrite tones.
    pub fn format_tones(&self, tones: &[Tone]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(tones)?),
            OutputFormat::Quiet => Ok(join_lines(tones.iter().map(|t| t.name.as_str()))),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["", "Tone", "Description"]);
                for tone in tones {
                    builder.push_record([
                        tone.emoji.clone(),
                        tone.name.clone(),
                        tone.description.clone(),
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format rewrite platforms.
    pub fn format_platforms(&self, platforms: &[Platform]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(platforms)?),
            OutputFormat::Quiet => Ok(join_lines(platforms.iter().map(|p| p.id.as_str()))),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "Limit", "Optimal", "Hashtags", "Best tones"]);
                for platform in platforms {
                    builder.push_record([
                        platform.id.clone(),
                        platform.name.clone(),
                        platform.char_limit.to_string(),
                        platform.optimal_length.clone(),
                        platform.hashtag_limit.to_string(),
                        platform.best_tones.join(", "),
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format fetched comments.
    pub fn format_comments(&self, comments: &[Comment]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(comments)?),
            OutputFormat::Quiet => Ok(join_lines(comments.iter().map(Comment::text))),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["#", "Comment", "Author", "Score", "From"]);
                for (index, comment) in comments.iter().enumerate() {
                    builder.push_record([
                        (index + 1).to_string(),
                        truncate(comment.text(), 80),
                        comment.author().to_string(),
                        comment
                            .popularity()
                            .map(|p| p.to_string())
                            .unwrap_or_default(),
                        comment.origin().map(|o| truncate(o, 40)).unwrap_or_default(),
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format a rewrite result.
    pub fn format_rewrite(&self, response: &RewriteResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
            OutputFormat::Quiet => Ok(response.rewritten.clone()),
            OutputFormat::Table => {
                let mut lines = vec![
                    self.colorize(&response.rewritten, "green"),
                    String::new(),
                    format!("Tone: {}", response.tone),
                ];
                if let Some(persona) = &response.persona {
                    lines.push(format!("Persona: {}", persona));
                }
                for note in &response.explanation {
                    lines.push(format!("  • {}", note));
                }
                if let Some(info) = &response.platform_info {
                    let fit = format!(
                        "{}: {}/{} chars",
                        info.name, info.current_length, info.char_limit
                    );
                    lines.push(if info.within_limit {
                        self.success(&fit)
                    } else {
                        self.warning(&format!("{} (over limit)", fit))
                    });
                }
                if let Some(tags) = response.suggested_hashtags.as_ref().filter(|t| !t.is_empty()) {
                    lines.push(format!("Hashtags: {}", tags.join(" ")));
                }
                if let Some(prediction) = &response.engagement_prediction {
                    lines.push(format!(
                        "Engagement: {} (virality {:.0}, ~{} likes, ~{} shares, ~{} replies, post {})",
                        prediction.engagement_level,
                        prediction.virality_score,
                        prediction.predicted_likes,
                        prediction.predicted_shares,
                        prediction.predicted_comments,
                        prediction.optimal_post_time
                    ));
                }
                if !response.model_used.is_empty() {
                    lines.push(format!(
                        "Model: {} ({:.2}s)",
                        response.model_used, response.processing_time
                    ));
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn status_label(&self, status: ClaimStatus) -> String {
        self.colorize(status.as_str(), status_color(status))
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn status_color(status: ClaimStatus) -> &'static str {
    match status {
        ClaimStatus::Verified => "green",
        ClaimStatus::Unverified => "yellow",
        ClaimStatus::False => "red",
        ClaimStatus::Pending => "blue",
    }
}

fn claim_json(claim: &Claim) -> serde_json::Value {
    serde_json::json!({
        "id": claim.id.as_str(),
        "text": claim.text,
        "start": claim.span.start,
        "end": claim.span.end,
        "type": claim.category.as_str(),
        "status": claim.status.as_str(),
        "confidence": claim.confidence.value(),
        "sources": claim.sources,
        "evidence": claim.evidence,
    })
}

fn join_lines<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join("\n")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use factlens_domain::{ClaimCategory, Confidence, Document, OverlapPolicy, Span};

    fn create_test_claim() -> Claim {
        Claim::new(
            ClaimId::parse("claim-0001-abcdef").unwrap(),
            "September 2024",
            Span::new(33, 47).unwrap(),
            ClaimCategory::Date,
        )
        .with_verdict(Verdict::new(
            ClaimStatus::Verified,
            Confidence::new(88).unwrap(),
        ))
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_claims(&[create_test_claim()]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["type"], "date");
        assert_eq!(parsed[0]["start"], 33);
        assert_eq!(parsed[0]["confidence"], 88);
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_claims(&[create_test_claim()]).unwrap();
        assert_eq!(output, "claim-0001-abcdef");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_claims(&[create_test_claim()]).unwrap();
        assert!(output.contains("Claim"));
        assert!(output.contains("Confidence"));
        assert!(output.contains("September 2024"));
        assert!(output.contains("88%"));
        assert!(output.contains("claim-00"));
    }

    #[test]
    fn test_empty_claims() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_claims(&[]).unwrap();
        assert!(output.contains("No claims found"));
    }

    #[test]
    fn test_highlight_without_color() {
        let text = "Apple announced the iPhone 16 in September 2024";
        let mut doc = Document::new(text);
        doc.replace_claims(vec![create_test_claim()]);
        let highlight = doc.highlight(OverlapPolicy::Reject).unwrap();

        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(
            formatter.format_highlight(&highlight, None),
            "Apple announced the iPhone 16 in [September 2024]"
        );

        let id = ClaimId::parse("claim-0001-abcdef").unwrap();
        assert_eq!(
            formatter.format_highlight(&highlight, Some(&id)),
            "Apple announced the iPhone 16 in [[September 2024]]"
        );
    }

    #[test]
    fn test_claim_detail() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let detail = formatter.claim_detail(&create_test_claim());
        assert!(detail.contains("\"September 2024\""));
        assert!(detail.contains("date · verified · 88% confidence"));
    }

    #[test]
    fn test_quiet_tones() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_tones(&Tone::fallback()).unwrap();
        assert_eq!(output.lines().count(), 8);
        assert_eq!(output.lines().next(), Some("Casual"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééééééé", 4), "ééé…");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
