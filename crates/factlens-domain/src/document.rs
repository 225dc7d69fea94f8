//! A text buffer under fact-check, with its claims and transient UI state

use crate::claim::{Claim, ClaimId, Verdict};
use crate::claim_list::ClaimList;
use crate::highlight::{self, Highlight, HighlightError, OverlapPolicy};
use std::fmt;

/// Token handed out when an extraction starts.
///
/// Only the most recently issued ticket may apply its result. A response
/// that arrives after a newer extraction started is refused, so a slow
/// request can never overwrite newer claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExtractionTicket(u64);

impl ExtractionTicket {
    /// Sequence number of this ticket
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// An extraction result arrived for a superseded ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaleTicket {
    /// The ticket the result belonged to
    pub ticket: ExtractionTicket,
    /// The newest ticket issued so far
    pub latest: ExtractionTicket,
}

impl fmt::Display for StaleTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "extraction #{} was superseded by #{}",
            self.ticket.0, self.latest.0
        )
    }
}

impl std::error::Error for StaleTicket {}

/// Text buffer, claim list and the state a front end keeps around them
#[derive(Debug, Clone, Default)]
pub struct Document {
    text: String,
    claims: ClaimList,
    hovered: Option<ClaimId>,
    latest: u64,
    in_flight: bool,
}

impl Document {
    /// Create a document over `text` with no claims
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text
    ///
    /// Claims are kept; spans that no longer fit are dealt with by the
    /// highlighter's [`OverlapPolicy`].
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current claims
    pub fn claims(&self) -> &ClaimList {
        &self.claims
    }

    /// Claim under the pointer, if any
    pub fn hovered(&self) -> Option<&ClaimId> {
        self.hovered.as_ref()
    }

    /// Point at a claim. Returns `false` if the id is unknown.
    pub fn hover(&mut self, id: &ClaimId) -> bool {
        if self.claims.contains(id) {
            self.hovered = Some(id.clone());
            true
        } else {
            false
        }
    }

    /// Clear the hover pointer
    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Confirm a claim and clear the hover pointer
    pub fn confirm(&mut self, id: &ClaimId) -> bool {
        self.hovered = None;
        self.claims.confirm(id)
    }

    /// Remove a claim and clear the hover pointer
    pub fn correct(&mut self, id: &ClaimId) -> Option<Claim> {
        self.hovered = None;
        self.claims.correct(id)
    }

    /// Apply a re-verification result to one claim
    pub fn apply_verification(&mut self, id: &ClaimId, verdict: Verdict) -> bool {
        self.claims.apply_verification(id, verdict)
    }

    /// Start an extraction, superseding any in flight
    pub fn begin_extraction(&mut self) -> ExtractionTicket {
        self.latest += 1;
        self.in_flight = true;
        ExtractionTicket(self.latest)
    }

    /// Apply an extraction result if its ticket is still current
    ///
    /// On success the claim list is replaced wholesale and the hover pointer
    /// cleared. A stale ticket leaves the document untouched.
    pub fn complete_extraction(
        &mut self,
        ticket: ExtractionTicket,
        claims: Vec<Claim>,
    ) -> Result<(), StaleTicket> {
        self.check_current(ticket)?;
        self.claims.replace(claims);
        self.hovered = None;
        self.in_flight = false;
        Ok(())
    }

    /// Record that an extraction failed
    ///
    /// Clears the processing flag for the current ticket; prior claims stay.
    pub fn fail_extraction(&mut self, ticket: ExtractionTicket) -> Result<(), StaleTicket> {
        self.check_current(ticket)?;
        self.in_flight = false;
        Ok(())
    }

    /// Replace claims synchronously (a local extraction)
    pub fn replace_claims(&mut self, claims: Vec<Claim>) {
        let ticket = self.begin_extraction();
        // A freshly issued ticket is always current
        let _ = self.complete_extraction(ticket, claims);
    }

    /// Whether an extraction is in flight
    pub fn is_processing(&self) -> bool {
        self.in_flight
    }

    /// Render the current claims over the current text
    pub fn highlight(&self, policy: OverlapPolicy) -> Result<Highlight<'_>, HighlightError> {
        highlight::render(&self.text, self.claims.as_slice(), policy)
    }

    fn check_current(&self, ticket: ExtractionTicket) -> Result<(), StaleTicket> {
        if ticket.0 != self.latest {
            return Err(StaleTicket {
                ticket,
                latest: ExtractionTicket(self.latest),
            });
        }
        Ok(())
    }
}
