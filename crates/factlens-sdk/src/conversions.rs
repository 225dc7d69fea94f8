//! Conversions between wire payloads and domain types

use crate::error::FailureCause;
use crate::types::{ClaimRecord, VerificationResponse};
use factlens_domain::{Claim, ClaimCategory, ClaimId, ClaimStatus, Confidence, Span, Verdict};
use tracing::warn;

/// Round and clamp a wire confidence, warning when it was out of range
fn confidence_from_wire(raw: f64, context: &str) -> Confidence {
    let (confidence, clamped) = Confidence::clamped(raw);
    if clamped {
        warn!(
            raw,
            clamped = confidence.value(),
            "Confidence for {} out of range, clamped",
            context
        );
    }
    confidence
}

fn status_from_wire(raw: &str) -> Result<ClaimStatus, FailureCause> {
    ClaimStatus::parse(raw).ok_or_else(|| FailureCause::Decode(format!("unknown status '{}'", raw)))
}

/// Convert a wire claim record into a domain claim
pub(crate) fn claim_from_record(record: ClaimRecord) -> Result<Claim, FailureCause> {
    let id = ClaimId::parse(&record.id).map_err(FailureCause::Decode)?;
    let span = Span::new(record.start, record.end)
        .map_err(|e| FailureCause::Decode(format!("claim {}: {}", id, e)))?;
    let category = ClaimCategory::parse(&record.category).ok_or_else(|| {
        FailureCause::Decode(format!("claim {}: unknown type '{}'", id, record.category))
    })?;
    let status = status_from_wire(&record.status)?;
    let confidence = confidence_from_wire(record.confidence, id.as_str());

    let verdict = Verdict {
        status,
        confidence,
        evidence: record.evidence.filter(|e| !e.is_empty()),
        sources: record.sources.unwrap_or_default(),
    };

    Ok(Claim::new(id, record.text, span, category).with_verdict(verdict))
}

/// Convert a whole batch; one bad record fails the batch
pub(crate) fn claims_from_records(records: Vec<ClaimRecord>) -> Result<Vec<Claim>, FailureCause> {
    records.into_iter().map(claim_from_record).collect()
}

/// Convert a verification response into a verdict
pub(crate) fn verdict_from_response(
    claim_id: &ClaimId,
    response: VerificationResponse,
) -> Result<Verdict, FailureCause> {
    Ok(Verdict {
        status: status_from_wire(&response.status)?,
        confidence: confidence_from_wire(response.confidence, claim_id.as_str()),
        evidence: response.evidence.filter(|e| !e.is_empty()),
        sources: response.sources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(start: usize, end: usize, category: &str, confidence: f64) -> ClaimRecord {
        ClaimRecord {
            id: "c-1".to_string(),
            text: "2024".to_string(),
            start,
            end,
            category: category.to_string(),
            status: "verified".to_string(),
            confidence,
            sources: Some(vec!["Wikipedia".to_string()]),
            evidence: Some(String::new()),
        }
    }

    #[test]
    fn test_valid_record() {
        let claim = claim_from_record(record(3, 7, "date", 87.0)).unwrap();
        assert_eq!(claim.id.as_str(), "c-1");
        assert_eq!(claim.span, Span::new(3, 7).unwrap());
        assert_eq!(claim.category, ClaimCategory::Date);
        assert_eq!(claim.status, ClaimStatus::Verified);
        assert_eq!(claim.confidence.value(), 87);
        assert_eq!(claim.sources, vec!["Wikipedia".to_string()]);
        assert!(claim.evidence.is_none());
    }

    #[test]
    fn test_confidence_clamped() {
        assert_eq!(claim_from_record(record(0, 4, "date", 140.0)).unwrap().confidence.value(), 100);
        assert_eq!(claim_from_record(record(0, 4, "date", -5.0)).unwrap().confidence.value(), 0);
        assert_eq!(claim_from_record(record(0, 4, "date", 66.6)).unwrap().confidence.value(), 67);
    }

    #[test]
    fn test_inverted_span_rejected() {
        assert!(matches!(
            claim_from_record(record(7, 3, "date", 50.0)),
            Err(FailureCause::Decode(_))
        ));
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(matches!(
            claim_from_record(record(0, 4, "rumour", 50.0)),
            Err(FailureCause::Decode(_))
        ));
    }

    #[test]
    fn test_batch_fails_as_a_whole() {
        let records = vec![record(0, 4, "date", 50.0), record(5, 5, "number", 50.0)];
        assert!(claims_from_records(records).is_err());
    }
}
