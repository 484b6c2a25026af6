//! Patient input types for heart disease risk prediction.
//!
//! Field set and integer codes follow the processed UCI Cleveland heart
//! disease schema the shipped model artifacts were fitted against.

use serde::{Deserialize, Serialize};

/// Number of columns in the feature vector.
pub const FEATURE_COUNT: usize = 13;

/// Feature names in the exact column order the scaler and classifier were
/// fitted on. This order is a contract with the artifacts and must not change.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "gender",
    "chest_pain_type",
    "resting_blood_pressure",
    "cholesterol_measure",
    "fasting_blood_sugar",
    "resting_ecg_result",
    "max_heart_rate",
    "exercise_induced_angina",
    "st_depression",
    "st_slope",
    "major_vessels_count",
    "thal_status",
];

// Documented domains for the numeric fields (inclusive).
pub const AGE_RANGE: (f64, f64) = (20.0, 100.0);
pub const RESTING_BP_RANGE: (f64, f64) = (80.0, 200.0);
pub const CHOLESTEROL_RANGE: (f64, f64) = (100.0, 600.0);
pub const MAX_HEART_RATE_RANGE: (f64, f64) = (60.0, 210.0);
pub const ST_DEPRESSION_RANGE: (f64, f64) = (0.0, 10.0);
pub const MAJOR_VESSELS_RANGE: (f64, f64) = (0.0, 4.0);

/// A categorical field value that is not one of its enumerated labels.
///
/// The categorical maps are closed lookup tables; an unrecognized label must
/// fail here rather than propagate a default code into the feature vector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: unrecognized label {label:?}")]
pub struct EncodingError {
    pub field: &'static str,
    pub label: String,
}

impl EncodingError {
    fn new(field: &'static str, label: &str) -> Self {
        Self {
            field,
            label: label.to_string(),
        }
    }
}

/// Patient gender. Encodes Female=0, Male=1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub const LABELS: [&'static str; 2] = ["Female", "Male"];
    pub const ALL: [Self; 2] = [Self::Female, Self::Male];

    #[must_use]
    pub fn code(self) -> f64 {
        self as u8 as f64
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }

    /// # Errors
    /// Returns `EncodingError` if the label is not `Female` or `Male`.
    pub fn from_label(label: &str) -> Result<Self, EncodingError> {
        match label {
            "Female" => Ok(Self::Female),
            "Male" => Ok(Self::Male),
            other => Err(EncodingError::new("gender", other)),
        }
    }
}

/// Chest pain classification. Encodes 0..=3 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ChestPainType {
    TypicalAngina,
    AtypicalAngina,
    NonAnginalPain,
    Asymptomatic,
}

impl ChestPainType {
    pub const LABELS: [&'static str; 4] = [
        "Typical Angina",
        "Atypical Angina",
        "Non-Anginal Pain",
        "Asymptomatic",
    ];
    pub const ALL: [Self; 4] = [
        Self::TypicalAngina,
        Self::AtypicalAngina,
        Self::NonAnginalPain,
        Self::Asymptomatic,
    ];

    #[must_use]
    pub fn code(self) -> f64 {
        self as u8 as f64
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }

    /// # Errors
    /// Returns `EncodingError` if the label is not one of the four pain types.
    pub fn from_label(label: &str) -> Result<Self, EncodingError> {
        match label {
            "Typical Angina" => Ok(Self::TypicalAngina),
            "Atypical Angina" => Ok(Self::AtypicalAngina),
            "Non-Anginal Pain" => Ok(Self::NonAnginalPain),
            "Asymptomatic" => Ok(Self::Asymptomatic),
            other => Err(EncodingError::new("chest_pain_type", other)),
        }
    }
}

/// Fasting blood sugar above 120 mg/dL. Encodes False=0, True=1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum FastingBloodSugar {
    False,
    True,
}

impl FastingBloodSugar {
    pub const LABELS: [&'static str; 2] = ["False", "True"];
    pub const ALL: [Self; 2] = [Self::False, Self::True];

    #[must_use]
    pub fn code(self) -> f64 {
        self as u8 as f64
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }

    /// # Errors
    /// Returns `EncodingError` if the label is not `False` or `True`.
    pub fn from_label(label: &str) -> Result<Self, EncodingError> {
        match label {
            "False" => Ok(Self::False),
            "True" => Ok(Self::True),
            other => Err(EncodingError::new("fasting_blood_sugar", other)),
        }
    }
}

/// Resting electrocardiogram result. Encodes 0..=2 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum RestingEcg {
    Normal,
    SttWaveAbnormality,
    LeftVentricularHypertrophy,
}

impl RestingEcg {
    pub const LABELS: [&'static str; 3] = [
        "Normal",
        "ST-T Wave Abnormality",
        "Left Ventricular Hypertrophy",
    ];
    pub const ALL: [Self; 3] = [
        Self::Normal,
        Self::SttWaveAbnormality,
        Self::LeftVentricularHypertrophy,
    ];

    #[must_use]
    pub fn code(self) -> f64 {
        self as u8 as f64
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }

    /// # Errors
    /// Returns `EncodingError` if the label is not one of the three ECG results.
    pub fn from_label(label: &str) -> Result<Self, EncodingError> {
        match label {
            "Normal" => Ok(Self::Normal),
            "ST-T Wave Abnormality" => Ok(Self::SttWaveAbnormality),
            "Left Ventricular Hypertrophy" => Ok(Self::LeftVentricularHypertrophy),
            other => Err(EncodingError::new("resting_ecg_result", other)),
        }
    }
}

/// Exercise-induced angina. Encodes No=0, Yes=1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ExerciseAngina {
    No,
    Yes,
}

impl ExerciseAngina {
    pub const LABELS: [&'static str; 2] = ["No", "Yes"];
    pub const ALL: [Self; 2] = [Self::No, Self::Yes];

    #[must_use]
    pub fn code(self) -> f64 {
        self as u8 as f64
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }

    /// # Errors
    /// Returns `EncodingError` if the label is not `No` or `Yes`.
    pub fn from_label(label: &str) -> Result<Self, EncodingError> {
        match label {
            "No" => Ok(Self::No),
            "Yes" => Ok(Self::Yes),
            other => Err(EncodingError::new("exercise_induced_angina", other)),
        }
    }
}

/// Slope of the peak-exercise ST segment. Encodes 0..=2 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum StSlope {
    Upsloping,
    Flat,
    Downsloping,
}

impl StSlope {
    pub const LABELS: [&'static str; 3] = ["Upsloping", "Flat", "Downsloping"];
    pub const ALL: [Self; 3] = [Self::Upsloping, Self::Flat, Self::Downsloping];

    #[must_use]
    pub fn code(self) -> f64 {
        self as u8 as f64
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }

    /// # Errors
    /// Returns `EncodingError` if the label is not one of the three slopes.
    pub fn from_label(label: &str) -> Result<Self, EncodingError> {
        match label {
            "Upsloping" => Ok(Self::Upsloping),
            "Flat" => Ok(Self::Flat),
            "Downsloping" => Ok(Self::Downsloping),
            other => Err(EncodingError::new("st_slope", other)),
        }
    }
}

/// Thalassemia status. Encodes 0..=3 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ThalStatus {
    Normal,
    FixedDefect,
    ReversibleDefect,
    Unknown,
}

impl ThalStatus {
    pub const LABELS: [&'static str; 4] =
        ["Normal", "Fixed Defect", "Reversible Defect", "Unknown"];
    pub const ALL: [Self; 4] = [
        Self::Normal,
        Self::FixedDefect,
        Self::ReversibleDefect,
        Self::Unknown,
    ];

    #[must_use]
    pub fn code(self) -> f64 {
        self as u8 as f64
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }

    /// # Errors
    /// Returns `EncodingError` if the label is not one of the four statuses.
    pub fn from_label(label: &str) -> Result<Self, EncodingError> {
        match label {
            "Normal" => Ok(Self::Normal),
            "Fixed Defect" => Ok(Self::FixedDefect),
            "Reversible Defect" => Ok(Self::ReversibleDefect),
            "Unknown" => Ok(Self::Unknown),
            other => Err(EncodingError::new("thal_status", other)),
        }
    }
}

/// One fully-populated prediction request.
///
/// Constructed fresh per form submission and discarded afterwards; nothing is
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientInput {
    /// Age in years (20-100)
    pub age: f64,

    pub gender: Gender,

    pub chest_pain_type: ChestPainType,

    /// Resting blood pressure in mmHg (80-200)
    pub resting_blood_pressure: f64,

    /// Serum cholesterol in mg/dL (100-600)
    pub cholesterol_measure: f64,

    pub fasting_blood_sugar: FastingBloodSugar,

    pub resting_ecg_result: RestingEcg,

    /// Maximum heart rate achieved in bpm (60-210)
    pub max_heart_rate: f64,

    pub exercise_induced_angina: ExerciseAngina,

    /// ST depression induced by exercise, oldpeak (0.0-10.0)
    pub st_depression: f64,

    pub st_slope: StSlope,

    /// Number of major vessels colored by fluoroscopy (0-4)
    pub major_vessels_count: f64,

    pub thal_status: ThalStatus,
}

impl PatientInput {
    /// Encode the input into the fixed-order 13-element feature vector.
    ///
    /// Pure and deterministic: identical inputs always yield identical
    /// vectors. Column order matches [`FEATURE_NAMES`].
    #[must_use]
    pub fn to_feature_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age,
            self.gender.code(),
            self.chest_pain_type.code(),
            self.resting_blood_pressure,
            self.cholesterol_measure,
            self.fasting_blood_sugar.code(),
            self.resting_ecg_result.code(),
            self.max_heart_rate,
            self.exercise_induced_angina.code(),
            self.st_depression,
            self.st_slope.code(),
            self.major_vessels_count,
            self.thal_status.code(),
        ]
    }

    /// Validate that all numeric fields are within their documented ranges.
    ///
    /// The form already enforces these bounds; this is a standalone safety
    /// net for callers that bypass the form.
    ///
    /// # Errors
    /// Returns violations as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let checks = [
            ("Age", self.age, AGE_RANGE),
            (
                "Resting blood pressure",
                self.resting_blood_pressure,
                RESTING_BP_RANGE,
            ),
            ("Cholesterol", self.cholesterol_measure, CHOLESTEROL_RANGE),
            ("Max heart rate", self.max_heart_rate, MAX_HEART_RATE_RANGE),
            ("ST depression", self.st_depression, ST_DEPRESSION_RANGE),
            (
                "Major vessels",
                self.major_vessels_count,
                MAJOR_VESSELS_RANGE,
            ),
        ];

        for (name, value, (min, max)) in checks {
            if !(min..=max).contains(&value) {
                errors.push(format!("{name} {value} out of range [{min}, {max}]"));
            }
        }

        if self.major_vessels_count.fract() != 0.0 {
            errors.push(format!(
                "Major vessels {} must be a whole number",
                self.major_vessels_count
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_feature_vector_order() {
        let vector = baseline_input().to_feature_vector();
        let expected = [
            50.0, 1.0, 0.0, 120.0, 240.0, 0.0, 0.0, 150.0, 0.0, 1.0, 0.0, 0.0, 0.0,
        ];
        assert_eq!(vector, expected);
    }

    #[test]
    fn test_feature_vector_is_deterministic() {
        let input = baseline_input();
        assert_eq!(input.to_feature_vector(), input.to_feature_vector());
    }

    #[test]
    fn test_age_boundaries_pass_through_unchanged() {
        for age in [20.0, 100.0] {
            let mut input = baseline_input();
            input.age = age;
            assert!(input.validate().is_ok());
            assert_eq!(input.to_feature_vector()[0], age);
        }
    }

    #[test]
    fn test_categorical_codes_are_bijections() {
        for (i, v) in Gender::ALL.iter().enumerate() {
            assert_eq!(v.code(), i as f64);
            assert_eq!(Gender::from_label(v.label()), Ok(*v));
        }
        for (i, v) in ChestPainType::ALL.iter().enumerate() {
            assert_eq!(v.code(), i as f64);
            assert_eq!(ChestPainType::from_label(v.label()), Ok(*v));
        }
        for (i, v) in FastingBloodSugar::ALL.iter().enumerate() {
            assert_eq!(v.code(), i as f64);
            assert_eq!(FastingBloodSugar::from_label(v.label()), Ok(*v));
        }
        for (i, v) in RestingEcg::ALL.iter().enumerate() {
            assert_eq!(v.code(), i as f64);
            assert_eq!(RestingEcg::from_label(v.label()), Ok(*v));
        }
        for (i, v) in ExerciseAngina::ALL.iter().enumerate() {
            assert_eq!(v.code(), i as f64);
            assert_eq!(ExerciseAngina::from_label(v.label()), Ok(*v));
        }
        for (i, v) in StSlope::ALL.iter().enumerate() {
            assert_eq!(v.code(), i as f64);
            assert_eq!(StSlope::from_label(v.label()), Ok(*v));
        }
        for (i, v) in ThalStatus::ALL.iter().enumerate() {
            assert_eq!(v.code(), i as f64);
            assert_eq!(ThalStatus::from_label(v.label()), Ok(*v));
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = ChestPainType::from_label("Unknown Type").expect_err("must fail");
        assert_eq!(err.field, "chest_pain_type");
        assert_eq!(err.label, "Unknown Type");

        assert!(Gender::from_label("male").is_err()); // case sensitive
        assert!(ThalStatus::from_label("").is_err());
    }

    #[test]
    fn test_validation_catches_out_of_range_values() {
        let mut input = baseline_input();
        input.age = 19.0;
        input.cholesterol_measure = 700.0;
        input.major_vessels_count = 2.5;

        let errors = input.validate().expect_err("must fail");
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("Age"));
    }

    #[test]
    fn test_feature_names_match_vector_length() {
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
        assert_eq!(baseline_input().to_feature_vector().len(), FEATURE_COUNT);
    }
}
