//! Risk assessment result types.
//!
//! Represents the output of one prediction request.

use serde::{Deserialize, Serialize};

/// Binary risk classification for heart disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    /// Low risk of heart disease
    Low,
    /// High risk of heart disease
    High,
}

impl RiskLabel {
    /// Map the classifier's class output (0 or 1) to a risk label.
    #[must_use]
    pub fn from_class(class: u8) -> Self {
        if class == 1 {
            Self::High
        } else {
            Self::Low
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk of heart disease",
            Self::High => "High risk of heart disease",
        }
    }

    /// Get the recommendation shown alongside the verdict.
    #[must_use]
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Low => "Maintain a healthy lifestyle and regular check-ups.",
            Self::High => "Please consult a cardiologist for further examination.",
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Result of one prediction request.
///
/// Produced once per submission, displayed, and discarded. Nothing is
/// persisted across requests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Assessment {
    /// Risk classification from the classifier's predicted class
    pub risk_label: RiskLabel,

    /// Probability of the high-risk class (0.0 to 1.0)
    pub probability: f64,

    /// Timestamp of the assessment
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Assessment {
    /// Create an assessment from the classifier's class and probability.
    ///
    /// The label follows the class output directly; the probability is the
    /// classifier's reported P(high risk), not re-derived from a threshold.
    #[must_use]
    pub fn new(class: u8, probability: f64) -> Self {
        Self {
            risk_label: RiskLabel::from_class(class),
            probability,
            created_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_label_follows_classifier_class() {
        assert_eq!(Assessment::new(0, 0.2).risk_label, RiskLabel::Low);
        assert_eq!(Assessment::new(1, 0.9).risk_label, RiskLabel::High);
    }

    #[test]
    fn test_probability_is_stored_verbatim() {
        let assessment = Assessment::new(1, 0.734);
        assert!((assessment.probability - 0.734).abs() < f64::EPSILON);
    }

    #[test]
    fn test_recommendations_differ_by_label() {
        assert!(RiskLabel::High.recommendation().contains("cardiologist"));
        assert!(RiskLabel::Low.recommendation().contains("healthy lifestyle"));
        assert_ne!(
            RiskLabel::Low.recommendation(),
            RiskLabel::High.recommendation()
        );
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(RiskLabel::Low.to_string(), "LOW");
        assert_eq!(RiskLabel::High.to_string(), "HIGH");
    }
}
