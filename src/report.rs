//! Strength report types.

/// Strength tier derived from a [`StrengthReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    /// The evaluation was cancelled before completing.
    NotEvaluated,
    Weak,
    Medium,
    Strong,
    Epic,
    God,
}

/// Snapshot of a password's estimated strength.
///
/// Derived on demand by [`crate::Password::strength_report`]; nothing here
/// is cached, so a fresh report always reflects the current password and
/// configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthReport {
    /// Estimated entropy, or `None` when the evaluation was cancelled.
    pub entropy_bits: Option<f64>,
    /// Charset cardinality the entropy estimate is based on.
    pub charset_size: u32,
    /// Whether the password vaguely matched a configured common word.
    pub common_word_match: bool,
    /// Human-readable findings, empty for an unremarkable password.
    pub reasons: Vec<String>,
}

impl StrengthReport {
    /// Tier for this report.
    ///
    /// A common-word match pins the tier to [`Strength::Weak`] regardless
    /// of the entropy estimate; otherwise the tier follows the usual
    /// entropy bands (28 / 36 / 60 / 128 bits).
    pub fn strength(&self) -> Strength {
        let Some(bits) = self.entropy_bits else {
            return Strength::NotEvaluated;
        };
        if self.common_word_match {
            return Strength::Weak;
        }
        match bits {
            b if b < 28.0 => Strength::Weak,
            b if b < 36.0 => Strength::Medium,
            b if b < 60.0 => Strength::Strong,
            b if b < 128.0 => Strength::Epic,
            _ => Strength::God,
        }
    }

    pub(crate) fn cancelled() -> Self {
        Self {
            entropy_bits: None,
            charset_size: 0,
            common_word_match: false,
            reasons: vec!["Evaluation cancelled".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(bits: f64) -> StrengthReport {
        StrengthReport {
            entropy_bits: Some(bits),
            charset_size: 26,
            common_word_match: false,
            reasons: Vec::new(),
        }
    }

    #[test]
    fn test_entropy_bands() {
        assert_eq!(report(0.0).strength(), Strength::Weak);
        assert_eq!(report(27.9).strength(), Strength::Weak);
        assert_eq!(report(28.0).strength(), Strength::Medium);
        assert_eq!(report(35.9).strength(), Strength::Medium);
        assert_eq!(report(36.0).strength(), Strength::Strong);
        assert_eq!(report(59.9).strength(), Strength::Strong);
        assert_eq!(report(60.0).strength(), Strength::Epic);
        assert_eq!(report(127.9).strength(), Strength::Epic);
        assert_eq!(report(128.0).strength(), Strength::God);
    }

    #[test]
    fn test_common_word_match_pins_weak() {
        let mut strong = report(90.0);
        strong.common_word_match = true;
        assert_eq!(strong.strength(), Strength::Weak);
    }

    #[test]
    fn test_cancelled_report_is_not_evaluated() {
        let cancelled = StrengthReport::cancelled();
        assert_eq!(cancelled.strength(), Strength::NotEvaluated);
        assert!(cancelled.entropy_bits.is_none());
        assert!(!cancelled.reasons.is_empty());
    }
}
