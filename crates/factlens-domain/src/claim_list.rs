//! The claim list a document carries, and the user actions that reconcile it

use crate::claim::{Claim, ClaimId, ClaimStatus, Verdict};
use crate::confidence::Confidence;

/// Ordered collection of claims over one text buffer.
///
/// Entries are independent; no ordering is assumed. An extraction pass
/// replaces the whole list, after which only [`ClaimList::confirm`],
/// [`ClaimList::correct`] and [`ClaimList::apply_verification`] mutate it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimList {
    claims: Vec<Claim>,
}

impl ClaimList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every claim, returning the previous ones
    pub fn replace(&mut self, claims: Vec<Claim>) -> Vec<Claim> {
        std::mem::replace(&mut self.claims, claims)
    }

    /// Drop every claim
    pub fn clear(&mut self) {
        self.claims.clear();
    }

    /// Look up a claim by identifier
    pub fn get(&self, id: &ClaimId) -> Option<&Claim> {
        self.claims.iter().find(|c| &c.id == id)
    }

    /// Whether a claim with this identifier exists
    pub fn contains(&self, id: &ClaimId) -> bool {
        self.get(id).is_some()
    }

    /// Mark a claim as verified with full confidence
    ///
    /// Returns `false` (and changes nothing) if the id is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use factlens_domain::{Claim, ClaimCategory, ClaimId, ClaimList, ClaimStatus, Span};
    ///
    /// let id = ClaimId::generate();
    /// let mut list = ClaimList::from(vec![Claim::new(
    ///     id.clone(),
    ///     "2024",
    ///     Span::new(0, 4).unwrap(),
    ///     ClaimCategory::Date,
    /// )]);
    ///
    /// assert!(list.confirm(&id));
    /// assert_eq!(list.get(&id).unwrap().status, ClaimStatus::Verified);
    /// assert_eq!(list.get(&id).unwrap().confidence.value(), 100);
    /// ```
    pub fn confirm(&mut self, id: &ClaimId) -> bool {
        match self.claims.iter_mut().find(|c| &c.id == id) {
            Some(claim) => {
                claim.status = ClaimStatus::Verified;
                claim.confidence = Confidence::CERTAIN;
                true
            }
            None => false,
        }
    }

    /// Remove a claim the user marked as wrong
    ///
    /// Returns the removed claim, or `None` if the id is unknown.
    pub fn correct(&mut self, id: &ClaimId) -> Option<Claim> {
        let index = self.claims.iter().position(|c| &c.id == id)?;
        Some(self.claims.remove(index))
    }

    /// Overwrite a claim's verification fields with a fresh verdict
    pub fn apply_verification(&mut self, id: &ClaimId, verdict: Verdict) -> bool {
        match self.claims.iter_mut().find(|c| &c.id == id) {
            Some(claim) => {
                claim.apply_verdict(verdict);
                true
            }
            None => false,
        }
    }

    /// Iterate over claims in list order
    pub fn iter(&self) -> std::slice::Iter<'_, Claim> {
        self.claims.iter()
    }

    /// Borrow the claims as a slice
    pub fn as_slice(&self) -> &[Claim] {
        &self.claims
    }

    /// Number of claims
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Count claims with the given status
    pub fn count_status(&self, status: ClaimStatus) -> usize {
        self.claims.iter().filter(|c| c.status == status).count()
    }
}

impl From<Vec<Claim>> for ClaimList {
    fn from(claims: Vec<Claim>) -> Self {
        Self { claims }
    }
}

impl<'a> IntoIterator for &'a ClaimList {
    type Item = &'a Claim;
    type IntoIter = std::slice::Iter<'a, Claim>;

    fn into_iter(self) -> Self::IntoIter {
        self.claims.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::claim::ClaimCategory;
    use crate::span::Span;
    use proptest::prelude::*;

    fn list_of(n: usize) -> ClaimList {
        ClaimList::from(
            (0..n)
                .map(|i| {
                    Claim::new(
                        ClaimId::parse(&format!("claim-{}", i)).unwrap(),
                        "12345",
                        Span::new(i * 10, i * 10 + 5).unwrap(),
                        ClaimCategory::Number,
                    )
                })
                .collect::<Vec<_>>(),
        )
    }

    proptest! {
        /// Property: confirming twice equals confirming once
        #[test]
        fn test_confirm_idempotent(n in 1usize..20, pick in 0usize..40) {
            let id = ClaimId::parse(&format!("claim-{}", pick)).unwrap();
            let mut once = list_of(n);
            once.confirm(&id);
            let mut twice = once.clone();
            twice.confirm(&id);
            prop_assert_eq!(once, twice);
        }

        /// Property: correct removes one claim when present, none otherwise
        #[test]
        fn test_correct_removes_at_most_one(n in 0usize..20, pick in 0usize..40) {
            let id = ClaimId::parse(&format!("claim-{}", pick)).unwrap();
            let mut list = list_of(n);
            let removed = list.correct(&id);
            if pick < n {
                prop_assert!(removed.is_some());
                prop_assert_eq!(list.len(), n - 1);
            } else {
                prop_assert!(removed.is_none());
                prop_assert_eq!(list.len(), n);
            }
            prop_assert!(!list.contains(&id));
        }
    }
}
