//! Dashboard view: Main overview screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::FEATURE_COUNT;
use crate::tui::styles::MedicalTheme;

/// Dashboard state for rendering.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub model_loaded: bool,
    pub model_dir: String,
    pub assessments_run: usize,
}

/// Render the main dashboard view.
pub fn render_dashboard(f: &mut Frame, area: Rect, state: &DashboardState) {
    // Split into header and main content
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_main_content(f, chunks[1], state);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", MedicalTheme::text()),
        Span::styled("Cardioscreen", MedicalTheme::title()),
        Span::styled(" │ ", MedicalTheme::text_muted()),
        Span::styled(
            "Heart Disease Risk Screening",
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

fn render_main_content(f: &mut Frame, area: Rect, state: &DashboardState) {
    // Split into left (status) and right (about)
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_status_panels(f, chunks[0], state);
    render_about(f, chunks[1]);
}

fn render_status_panels(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // System status
            Constraint::Min(0),    // Quick actions
        ])
        .margin(1)
        .split(area);

    // System Status
    let status_items = vec![
        format_status_item("Model Artifacts Loaded", state.model_loaded),
        Line::from(vec![
            Span::styled("  Artifact dir: ", MedicalTheme::text_secondary()),
            Span::styled(state.model_dir.clone(), MedicalTheme::text_muted()),
        ]),
        Line::from(vec![
            Span::styled("  Features: ", MedicalTheme::text_secondary()),
            Span::styled(FEATURE_COUNT.to_string(), MedicalTheme::text()),
        ]),
        Line::from(vec![
            Span::styled("  Assessments this session: ", MedicalTheme::text_secondary()),
            Span::styled(state.assessments_run.to_string(), MedicalTheme::text()),
        ]),
    ];

    let status_block = Block::default()
        .title(Span::styled(" System Status ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());

    let status_list = Paragraph::new(status_items).block(status_block);
    f.render_widget(status_list, chunks[0]);

    // Quick Actions
    let actions = vec![
        Line::from(vec![
            Span::styled("[N] ", MedicalTheme::key_hint()),
            Span::styled("New Assessment", MedicalTheme::key_desc()),
        ]),
        Line::from(vec![
            Span::styled("[Q] ", MedicalTheme::key_hint()),
            Span::styled("Quit", MedicalTheme::key_desc()),
        ]),
    ];

    let actions_block = Block::default()
        .title(Span::styled(" Quick Actions ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());

    let actions_list = Paragraph::new(actions).block(actions_block);
    f.render_widget(actions_list, chunks[1]);
}

fn format_status_item(label: &str, ok: bool) -> Line<'static> {
    let (icon, style) = if ok {
        ("OK", MedicalTheme::success())
    } else {
        ("FAIL", MedicalTheme::danger())
    };

    Line::from(vec![
        Span::styled(format!("  {icon} "), style),
        Span::styled(label.to_string(), MedicalTheme::text()),
    ])
}

fn render_about(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" About ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());

    let lines = vec![
        Line::from(Span::styled(
            "Cardioscreen estimates the likelihood of heart disease from basic,",
            MedicalTheme::text(),
        )),
        Line::from(Span::styled(
            "non-invasive clinical data using a pre-trained classifier.",
            MedicalTheme::text(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Fill in the 13 clinical measurements and press Enter to receive a",
            MedicalTheme::text_secondary(),
        )),
        Line::from(Span::styled(
            "Low/High risk verdict with its probability.",
            MedicalTheme::text_secondary(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Inputs are processed in memory only and never stored.",
            MedicalTheme::text_muted(),
        )),
    ];

    let p = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(p, area);
}
