//! Prediction service: the encode -> scale -> classify pipeline.

use std::sync::Arc;

use crate::domain::{Assessment, PatientInput, FEATURE_COUNT};
use crate::ports::{FeatureScaler, ModelError, RiskClassifier};
use crate::CardioscreenError;

/// Service that turns one `PatientInput` into one `Assessment`.
///
/// The scaler and classifier are loaded once at startup and shared read-only;
/// `predict` is a pure function of its input given those artifacts, so the
/// service is safe to use from concurrent submissions without locking.
pub struct PredictionService<Sc, Cl>
where
    Sc: FeatureScaler,
    Cl: RiskClassifier,
{
    scaler: Arc<Sc>,
    classifier: Arc<Cl>,
}

impl<Sc, Cl> PredictionService<Sc, Cl>
where
    Sc: FeatureScaler,
    Cl: RiskClassifier,
{
    /// Create a new prediction service over loaded artifacts.
    pub fn new(scaler: Arc<Sc>, classifier: Arc<Cl>) -> Self {
        Self { scaler, classifier }
    }

    /// Run the full pipeline for one submission.
    ///
    /// Steps:
    /// 1. Encode categoricals and assemble the fixed-order 13-element vector
    /// 2. Apply the fitted scaling transform
    /// 3. Ask the classifier for the class label and P(high risk)
    ///
    /// No fallback result is produced on failure; a visible error is better
    /// than a silently wrong verdict.
    ///
    /// # Errors
    /// Returns an error if the scaler or classifier rejects the vector or
    /// reports output of unexpected shape.
    pub fn predict(&self, input: &PatientInput) -> Result<Assessment, CardioscreenError> {
        let features = input.to_feature_vector();
        tracing::debug!("Encoded {} features", features.len());

        let scaled = self.scaler.transform(&features)?;
        if scaled.len() != FEATURE_COUNT {
            return Err(ModelError::Shape {
                expected: FEATURE_COUNT,
                got: scaled.len(),
            }
            .into());
        }

        let class = self.classifier.predict(&scaled)?;
        let (_, p_high) = self.classifier.predict_proba(&scaled)?;

        if !p_high.is_finite() || !(0.0..=1.0).contains(&p_high) {
            return Err(ModelError::InvalidProbability(p_high).into());
        }

        let assessment = Assessment::new(class, p_high);
        tracing::info!(
            "Prediction complete: class={}, probability={:.4}, risk={}",
            class,
            p_high,
            assessment.risk_label
        );

        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::linear::load_artifacts;
    use crate::domain::{
        ChestPainType, ExerciseAngina, FastingBloodSugar, Gender, RestingEcg, RiskLabel, StSlope,
        ThalStatus,
    };
    use std::path::Path;

    fn baseline_input() -> PatientInput {
        PatientInput {
            age: 50.0,
            gender: Gender::Male,
            chest_pain_type: ChestPainType::TypicalAngina,
            resting_blood_pressure: 120.0,
            cholesterol_measure: 240.0,
            fasting_blood_sugar: FastingBloodSugar::False,
            resting_ecg_result: RestingEcg::Normal,
            max_heart_rate: 150.0,
            exercise_induced_angina: ExerciseAngina::No,
            st_depression: 1.0,
            st_slope: StSlope::Upsloping,
            major_vessels_count: 0.0,
            thal_status: ThalStatus::Normal,
        }
    }

    fn shipped_service(
    ) -> PredictionService<crate::adapters::StandardScaler, crate::adapters::LogisticModel> {
        let (scaler, classifier) =
            load_artifacts(Path::new("models")).expect("shipped artifacts should load");
        PredictionService::new(Arc::new(scaler), Arc::new(classifier))
    }

    struct IdentityScaler;
    impl FeatureScaler for IdentityScaler {
        fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
            Ok(features.to_vec())
        }
    }

    struct TruncatingScaler;
    impl FeatureScaler for TruncatingScaler {
        fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
            Ok(features[..3].to_vec())
        }
    }

    struct FixedClassifier {
        class: u8,
        p_high: f64,
    }
    impl RiskClassifier for FixedClassifier {
        fn predict(&self, _features: &[f64]) -> Result<u8, ModelError> {
            Ok(self.class)
        }
        fn predict_proba(&self, _features: &[f64]) -> Result<(f64, f64), ModelError> {
            Ok((1.0 - self.p_high, self.p_high))
        }
    }

    struct UnloadedClassifier;
    impl RiskClassifier for UnloadedClassifier {
        fn predict(&self, _features: &[f64]) -> Result<u8, ModelError> {
            Err(ModelError::NotLoaded("classifier missing".into()))
        }
        fn predict_proba(&self, _features: &[f64]) -> Result<(f64, f64), ModelError> {
            Err(ModelError::NotLoaded("classifier missing".into()))
        }
    }

    #[test]
    fn test_pipeline_with_shipped_artifacts() {
        let service = shipped_service();

        let assessment = service.predict(&baseline_input()).expect("predict");
        assert!((0.0..=1.0).contains(&assessment.probability));
    }

    #[test]
    fn test_age_range_endpoints_produce_valid_assessments() {
        let service = shipped_service();

        for age in [20.0, 100.0] {
            let mut input = baseline_input();
            input.age = age;
            assert!(input.validate().is_ok());

            let assessment = service.predict(&input).expect("predict");
            assert!((0.0..=1.0).contains(&assessment.probability));
        }
    }

    #[test]
    fn test_risk_label_follows_classifier_output() {
        let low = PredictionService::new(
            Arc::new(IdentityScaler),
            Arc::new(FixedClassifier {
                class: 0,
                p_high: 0.12,
            }),
        );
        let high = PredictionService::new(
            Arc::new(IdentityScaler),
            Arc::new(FixedClassifier {
                class: 1,
                p_high: 0.88,
            }),
        );

        let input = baseline_input();
        assert_eq!(low.predict(&input).expect("predict").risk_label, RiskLabel::Low);

        let assessment = high.predict(&input).expect("predict");
        assert_eq!(assessment.risk_label, RiskLabel::High);
        assert!((assessment.probability - 0.88).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unloaded_classifier_fails_without_fallback_result() {
        let service = PredictionService::new(Arc::new(IdentityScaler), Arc::new(UnloadedClassifier));

        let err = service.predict(&baseline_input()).expect_err("must fail");
        assert!(matches!(
            err,
            CardioscreenError::Model(ModelError::NotLoaded(_))
        ));
    }

    #[test]
    fn test_scaler_output_shape_is_enforced() {
        let service = PredictionService::new(
            Arc::new(TruncatingScaler),
            Arc::new(FixedClassifier {
                class: 0,
                p_high: 0.1,
            }),
        );

        let err = service.predict(&baseline_input()).expect_err("must fail");
        assert!(matches!(
            err,
            CardioscreenError::Model(ModelError::Shape { got: 3, .. })
        ));
    }

    #[test]
    fn test_out_of_range_probability_is_rejected() {
        let service = PredictionService::new(
            Arc::new(IdentityScaler),
            Arc::new(FixedClassifier {
                class: 1,
                p_high: 1.5,
            }),
        );

        let err = service.predict(&baseline_input()).expect_err("must fail");
        assert!(matches!(
            err,
            CardioscreenError::Model(ModelError::InvalidProbability(_))
        ));
    }
}
