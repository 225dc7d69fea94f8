//! Confidence percentage

use std::fmt;

/// Confidence that a claim's status is correct, as an integer percentage.
///
/// The inner value is always in `0..=100`. Values arriving from outside the
/// process go through [`Confidence::clamped`], which reports whether the raw
/// number had to be pulled into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Confidence(u8);

impl Confidence {
    /// Full confidence, set when a user confirms a claim
    pub const CERTAIN: Confidence = Confidence(100);

    /// Create a confidence, or `None` if `value > 100`
    pub fn new(value: u8) -> Option<Self> {
        (value <= 100).then_some(Self(value))
    }

    /// Round and clamp an arbitrary number into `0..=100`
    ///
    /// Returns the confidence and `true` if the input was outside the range
    /// (or not a number).
    ///
    /// # Examples
    ///
    /// ```
    /// use factlens_domain::Confidence;
    ///
    /// assert_eq!(Confidence::clamped(87.4), (Confidence::new(87).unwrap(), false));
    /// assert_eq!(Confidence::clamped(140.0), (Confidence::CERTAIN, true));
    /// ```
    pub fn clamped(raw: f64) -> (Self, bool) {
        if raw.is_nan() {
            return (Self(0), true);
        }
        let rounded = raw.round();
        let clamped = rounded.clamp(0.0, 100.0);
        (Self(clamped as u8), clamped != rounded)
    }

    /// The percentage value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        assert_eq!(Confidence::new(0).map(|c| c.value()), Some(0));
        assert_eq!(Confidence::new(100), Some(Confidence::CERTAIN));
        assert_eq!(Confidence::new(101), None);
    }

    #[test]
    fn test_clamped_in_range() {
        let (c, clamped) = Confidence::clamped(72.0);
        assert_eq!(c.value(), 72);
        assert!(!clamped);
    }

    #[test]
    fn test_clamped_out_of_range() {
        assert_eq!(Confidence::clamped(-5.0), (Confidence::new(0).unwrap(), true));
        assert_eq!(Confidence::clamped(250.0), (Confidence::CERTAIN, true));
        assert_eq!(Confidence::clamped(f64::NAN), (Confidence::new(0).unwrap(), true));
    }

    #[test]
    fn test_display() {
        assert_eq!(Confidence::new(95).unwrap().to_string(), "95%");
    }
}
