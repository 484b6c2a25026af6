//! Patient data input form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{
    ChestPainType, ExerciseAngina, FastingBloodSugar, Gender, PatientInput, RestingEcg, StSlope,
    ThalStatus, AGE_RANGE, CHOLESTEROL_RANGE, MAJOR_VESSELS_RANGE, MAX_HEART_RATE_RANGE,
    RESTING_BP_RANGE, ST_DEPRESSION_RANGE,
};
use crate::tui::styles::MedicalTheme;

/// Form field value: either free-text numeric input with bounds, or a
/// selector restricted to the enumerated categorical labels.
#[derive(Debug, Clone)]
pub enum FieldValue {
    Numeric {
        buffer: String,
        min: f64,
        max: f64,
    },
    Choice {
        options: &'static [&'static str],
        selected: usize,
    },
}

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub hint: &'static str,
    pub value: FieldValue,
}

impl FormField {
    fn numeric(label: &'static str, hint: &'static str, range: (f64, f64)) -> Self {
        Self {
            label,
            hint,
            value: FieldValue::Numeric {
                buffer: String::new(),
                min: range.0,
                max: range.1,
            },
        }
    }

    fn choice(label: &'static str, hint: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            label,
            hint,
            value: FieldValue::Choice {
                options,
                selected: 0,
            },
        }
    }
}

/// Patient form state
pub struct PatientFormState {
    pub fields: Vec<FormField>,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl Default for PatientFormState {
    fn default() -> Self {
        // Field order matches the feature vector column order.
        Self {
            fields: vec![
                FormField::numeric("Age", "years (20-100)", AGE_RANGE),
                FormField::choice("Gender", "select", &Gender::LABELS),
                FormField::choice("Chest Pain Type", "select", &ChestPainType::LABELS),
                FormField::numeric("Resting Blood Pressure", "mmHg (80-200)", RESTING_BP_RANGE),
                FormField::numeric("Serum Cholesterol", "mg/dL (100-600)", CHOLESTEROL_RANGE),
                FormField::choice(
                    "Fasting Blood Sugar > 120",
                    "select",
                    &FastingBloodSugar::LABELS,
                ),
                FormField::choice("Resting ECG Result", "select", &RestingEcg::LABELS),
                FormField::numeric("Max Heart Rate", "bpm (60-210)", MAX_HEART_RATE_RANGE),
                FormField::choice(
                    "Exercise-Induced Angina",
                    "select",
                    &ExerciseAngina::LABELS,
                ),
                FormField::numeric(
                    "ST Depression (oldpeak)",
                    "0.0-10.0",
                    ST_DEPRESSION_RANGE,
                ),
                FormField::choice("ST Slope", "select", &StSlope::LABELS),
                FormField::numeric("Major Vessels", "count (0-4)", MAJOR_VESSELS_RANGE),
                FormField::choice("Thalassemia Status", "select", &ThalStatus::LABELS),
            ],
            selected_field: 0,
            error_message: None,
        }
    }
}

impl PatientFormState {
    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Add a character to the current numeric field
    pub fn input_char(&mut self, c: char) {
        if let FieldValue::Numeric { buffer, .. } = &mut self.fields[self.selected_field].value {
            if c.is_ascii_digit() || c == '.' {
                buffer.push(c);
                self.error_message = None;
            }
        }
    }

    /// Delete the last character of the current numeric field
    pub fn delete_char(&mut self) {
        if let FieldValue::Numeric { buffer, .. } = &mut self.fields[self.selected_field].value {
            buffer.pop();
        }
    }

    /// Clear the current numeric field
    pub fn clear_field(&mut self) {
        if let FieldValue::Numeric { buffer, .. } = &mut self.fields[self.selected_field].value {
            buffer.clear();
        }
    }

    /// Cycle the current choice field to the next label
    pub fn cycle_next(&mut self) {
        if let FieldValue::Choice { options, selected } =
            &mut self.fields[self.selected_field].value
        {
            *selected = (*selected + 1) % options.len();
            self.error_message = None;
        }
    }

    /// Cycle the current choice field to the previous label
    pub fn cycle_prev(&mut self) {
        if let FieldValue::Choice { options, selected } =
            &mut self.fields[self.selected_field].value
        {
            *selected = (*selected + options.len() - 1) % options.len();
            self.error_message = None;
        }
    }

    fn numeric_at(&self, index: usize) -> Result<f64, String> {
        let field = &self.fields[index];
        match &field.value {
            FieldValue::Numeric { buffer, min, max } => {
                let value: f64 = buffer
                    .parse()
                    .map_err(|_| format!("{}: Invalid number", field.label))?;

                if value < *min || value > *max {
                    return Err(format!(
                        "{}: Value must be between {} and {}",
                        field.label, min, max
                    ));
                }

                Ok(value)
            }
            FieldValue::Choice { .. } => Err(format!("{}: expected a numeric field", field.label)),
        }
    }

    fn label_at(&self, index: usize) -> Result<&'static str, String> {
        let field = &self.fields[index];
        match &field.value {
            FieldValue::Choice { options, selected } => Ok(options[*selected]),
            FieldValue::Numeric { .. } => Err(format!("{}: expected a choice field", field.label)),
        }
    }

    /// Validate and convert the form into a `PatientInput`.
    ///
    /// Range bounds are enforced here, at the form boundary; categorical
    /// labels go through the closed encoding tables.
    ///
    /// # Errors
    /// Returns a user-facing message naming the offending field.
    pub fn to_patient_input(&self) -> Result<PatientInput, String> {
        let as_msg = |e: crate::domain::EncodingError| e.to_string();

        Ok(PatientInput {
            age: self.numeric_at(0)?,
            gender: Gender::from_label(self.label_at(1)?).map_err(as_msg)?,
            chest_pain_type: ChestPainType::from_label(self.label_at(2)?).map_err(as_msg)?,
            resting_blood_pressure: self.numeric_at(3)?,
            cholesterol_measure: self.numeric_at(4)?,
            fasting_blood_sugar: FastingBloodSugar::from_label(self.label_at(5)?)
                .map_err(as_msg)?,
            resting_ecg_result: RestingEcg::from_label(self.label_at(6)?).map_err(as_msg)?,
            max_heart_rate: self.numeric_at(7)?,
            exercise_induced_angina: ExerciseAngina::from_label(self.label_at(8)?)
                .map_err(as_msg)?,
            st_depression: self.numeric_at(9)?,
            st_slope: StSlope::from_label(self.label_at(10)?).map_err(as_msg)?,
            major_vessels_count: self.numeric_at(11)?,
            thal_status: ThalStatus::from_label(self.label_at(12)?).map_err(as_msg)?,
        })
    }

    /// Load sample data (typical mid-risk screening profile)
    pub fn load_sample_data(&mut self) {
        let numeric_samples: [(usize, &str); 6] = [
            (0, "50"),   // age (years)
            (3, "120"),  // resting blood pressure (mmHg)
            (4, "240"),  // cholesterol (mg/dL)
            (7, "150"),  // max heart rate (bpm)
            (9, "1.0"),  // st depression
            (11, "0"),   // major vessels
        ];
        for (index, sample) in numeric_samples {
            if let FieldValue::Numeric { buffer, .. } = &mut self.fields[index].value {
                *buffer = sample.to_string();
            }
        }

        let choice_samples: [(usize, usize); 7] = [
            (1, 1),  // gender: Male
            (2, 0),  // chest pain: Typical Angina
            (5, 0),  // fasting blood sugar: False
            (6, 0),  // resting ECG: Normal
            (8, 0),  // exercise angina: No
            (10, 0), // st slope: Upsloping
            (12, 0), // thal: Normal
        ];
        for (index, sample) in choice_samples {
            if let FieldValue::Choice { selected, .. } = &mut self.fields[index].value {
                *selected = sample;
            }
        }
    }
}

/// Render the patient data input form
pub fn render_patient_form(f: &mut Frame, area: Rect, state: &PatientFormState) {
    // Split into header and form
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_form_header(f, chunks[0]);
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2], state);
}

fn render_form_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", MedicalTheme::text()),
        Span::styled("Patient Data Entry", MedicalTheme::title()),
        Span::styled(
            " │ Clinical Measurements for Risk Screening",
            MedicalTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &PatientFormState) {
    // Create a two-column layout
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (state.fields.len() + 1) / 2;

    // Left column
    render_field_column(f, columns[0], &state.fields[..mid], 0, state.selected_field);

    // Right column
    render_field_column(
        f,
        columns[1],
        &state.fields[mid..],
        mid,
        state.selected_field,
    );
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    fields: &[FormField],
    offset: usize,
    selected: usize,
) {
    let field_height = 3;
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(field_height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_selected = offset + i == selected;
        let border_style = if is_selected {
            MedicalTheme::border_focused()
        } else {
            MedicalTheme::border()
        };

        let title_style = if is_selected {
            MedicalTheme::focused()
        } else {
            MedicalTheme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let content = match &field.value {
            FieldValue::Numeric { buffer, .. } => {
                let value_display = if buffer.is_empty() {
                    Span::styled(field.hint, MedicalTheme::text_muted())
                } else {
                    Span::styled(buffer.as_str(), MedicalTheme::text())
                };

                Line::from(vec![
                    Span::raw(" "),
                    value_display,
                    if is_selected {
                        Span::styled("▌", MedicalTheme::focused())
                    } else {
                        Span::raw("")
                    },
                ])
            }
            FieldValue::Choice { options, selected } => {
                let label = options[*selected];
                if is_selected {
                    Line::from(vec![
                        Span::styled(" ◂ ", MedicalTheme::key_hint()),
                        Span::styled(label, MedicalTheme::text()),
                        Span::styled(" ▸", MedicalTheme::key_hint()),
                    ])
                } else {
                    Line::from(vec![
                        Span::raw(" "),
                        Span::styled(label, MedicalTheme::text()),
                    ])
                }
            }
        };

        let paragraph = Paragraph::new(content).block(block);
        f.render_widget(paragraph, chunks[i]);
    }
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &PatientFormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", MedicalTheme::danger()),
            Span::styled(err.clone(), MedicalTheme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", MedicalTheme::key_hint()),
            Span::styled("Navigate ", MedicalTheme::key_desc()),
            Span::styled("[◂▸] ", MedicalTheme::key_hint()),
            Span::styled("Change Option ", MedicalTheme::key_desc()),
            Span::styled("[Enter] ", MedicalTheme::key_hint()),
            Span::styled("Predict ", MedicalTheme::key_desc()),
            Span::styled("[S] ", MedicalTheme::key_hint()),
            Span::styled("Sample Data ", MedicalTheme::key_desc()),
            Span::styled("[Esc] ", MedicalTheme::key_hint()),
            Span::styled("Cancel", MedicalTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChestPainType, Gender, StSlope};

    #[test]
    fn test_sample_data_converts_to_expected_input() {
        let mut form = PatientFormState::default();
        form.load_sample_data();

        let input = form.to_patient_input().expect("sample data should convert");
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.chest_pain_type, ChestPainType::TypicalAngina);
        assert_eq!(input.st_slope, StSlope::Upsloping);

        let expected = [
            50.0, 1.0, 0.0, 120.0, 240.0, 0.0, 0.0, 150.0, 0.0, 1.0, 0.0, 0.0, 0.0,
        ];
        assert_eq!(input.to_feature_vector(), expected);
    }

    #[test]
    fn test_empty_numeric_field_is_rejected() {
        let form = PatientFormState::default();

        let err = form.to_patient_input().expect_err("must fail");
        assert!(err.contains("Age"));
        assert!(err.contains("Invalid number"));
    }

    #[test]
    fn test_out_of_range_value_is_rejected() {
        let mut form = PatientFormState::default();
        form.load_sample_data();
        if let FieldValue::Numeric { buffer, .. } = &mut form.fields[0].value {
            *buffer = "150".to_string(); // age above 100
        }

        let err = form.to_patient_input().expect_err("must fail");
        assert!(err.contains("Age"));
        assert!(err.contains("between"));
    }

    #[test]
    fn test_choice_cycling_wraps() {
        let mut form = PatientFormState::default();
        form.selected_field = 1; // gender

        form.cycle_prev();
        if let FieldValue::Choice { options, selected } = &form.fields[1].value {
            assert_eq!(*selected, options.len() - 1);
        } else {
            panic!("gender should be a choice field");
        }

        form.cycle_next();
        if let FieldValue::Choice { selected, .. } = &form.fields[1].value {
            assert_eq!(*selected, 0);
        } else {
            panic!("gender should be a choice field");
        }
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = PatientFormState::default();
        assert_eq!(form.selected_field, 0);

        form.prev_field();
        assert_eq!(form.selected_field, form.fields.len() - 1);

        form.next_field();
        assert_eq!(form.selected_field, 0);
    }

    #[test]
    fn test_numeric_input_ignores_letters() {
        let mut form = PatientFormState::default();
        form.input_char('4');
        form.input_char('x');
        form.input_char('2');

        if let FieldValue::Numeric { buffer, .. } = &form.fields[0].value {
            assert_eq!(buffer, "42");
        } else {
            panic!("age should be a numeric field");
        }
    }
}
