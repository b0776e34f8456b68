//! Reference panel: catalog examples for the current section

use crate::app::App;
use crate::catalog;
use crate::state::{DocumentContent, RiskAssessment, RiskLevel, Section};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn risk_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::LightRed,
        RiskLevel::Critical => Color::Red,
    }
}

fn risk_badge(level: RiskLevel) -> Span<'static> {
    Span::styled(
        format!(" {level} "),
        Style::default()
            .fg(risk_color(level))
            .add_modifier(Modifier::BOLD),
    )
}

fn probability_badge(label: &str) -> Span<'static> {
    Span::styled(format!(" {label} Probability "), Style::default().fg(Color::Gray))
}

fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn bullet(text: impl Into<String>) -> Line<'static> {
    Line::from(format!("• {}", text.into()))
}

fn detail(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", text.into()),
        Style::default().fg(Color::DarkGray),
    ))
}

fn bullets(lines: &mut Vec<Line<'static>>, items: &[&str]) {
    lines.extend(items.iter().map(|item| bullet(*item)));
}

/// Reference content for `section`, some of it derived from the document
pub fn reference_lines(section: Section, doc: &DocumentContent) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match section {
        Section::TitleSummary => {
            lines.push(heading("Writing Tips"));
            bullets(&mut lines, &catalog::WRITING_TIPS);
        }
        Section::ProblemEvidence => {
            if doc.selected_department.is_empty() {
                lines.push(heading("Example Use Cases"));
                lines.push(detail("Select a department to see examples"));
            } else {
                lines.push(heading(format!(
                    "{} Use Cases",
                    doc.selected_department
                )));
                bullets(&mut lines, catalog::use_cases_for(&doc.selected_department));
            }
            lines.push(Line::from(""));
            lines.push(heading("Evidence Requirements"));
            bullets(&mut lines, &catalog::EVIDENCE_REQUIREMENTS);
        }
        Section::Stakeholders => {
            lines.push(heading("Tips"));
            bullets(&mut lines, &catalog::STAKEHOLDER_TIPS);
        }
        Section::KpisImpact => {
            lines.push(heading("KPI Templates"));
            for kpi in &catalog::KPI_TEMPLATES {
                lines.push(bullet(kpi.metric));
                lines.push(detail(format!("{} → {} ({})", kpi.current, kpi.target, kpi.impact)));
            }
            lines.push(Line::from(""));
            lines.push(heading("Common Metrics"));
            bullets(&mut lines, &catalog::KPI_EXAMPLES);
        }
        Section::Workflow => {
            lines.push(heading(format!("Example: {}", catalog::WORKFLOW_EXAMPLE_TITLE)));
            for (index, step) in catalog::WORKFLOW_EXAMPLE.iter().enumerate() {
                lines.push(Line::from(format!("{}. {}", index + 1, step.title)));
                lines.push(detail(format!("{} · {}", step.trigger, step.duration)));
                lines.push(detail(step.systems.join(", ")));
            }
        }
        Section::Development => {
            lines.push(heading("Tech Stack Templates"));
            for template in &catalog::TECH_STACK_TEMPLATES {
                lines.push(bullet(template.name));
                lines.push(detail(template.description));
                lines.push(detail(template.stack));
            }
            lines.push(Line::from(""));
            lines.push(heading("Common API Categories"));
            for category in &catalog::API_CATEGORIES {
                lines.push(bullet(category.category));
                lines.push(detail(category.apis));
            }
        }
        Section::FailureModes => {
            let rated: Vec<_> = doc
                .failure_modes
                .iter()
                .enumerate()
                .filter(|(_, mode)| !mode.probability.is_empty() && !mode.impact.is_empty())
                .collect();
            if !rated.is_empty() {
                lines.push(heading("Your Failure Modes"));
                for (index, mode) in rated {
                    let risk = RiskAssessment::from_labels(&mode.probability, &mode.impact);
                    lines.push(Line::from(vec![
                        Span::raw(format!("{}. ", index + 1)),
                        risk_badge(risk.level),
                    ]));
                }
                lines.push(Line::from(""));
            }
            lines.push(heading("Common Failure Scenarios"));
            for example in &catalog::COMMON_FAILURES {
                let risk = RiskAssessment::from_labels(example.probability, catalog::EXAMPLE_IMPACT);
                lines.push(Line::from(vec![
                    Span::raw(format!("• {}", example.scenario)),
                    probability_badge(example.probability),
                    risk_badge(risk.level),
                ]));
                lines.push(detail(format!("Impact: {}", example.impact)));
                lines.push(detail(format!("Detect: {}", example.detection)));
                lines.push(detail(format!("Recover: {}", example.recovery)));
                lines.push(detail(format!("Prevent: {}", example.prevention)));
            }
        }
        Section::Security => {
            lines.push(heading("Data Classification"));
            for tier in &catalog::DATA_TIERS {
                lines.push(Line::from(vec![
                    Span::raw(format!("• {}", tier.name)),
                    risk_badge(tier.risk),
                ]));
                lines.push(detail(tier.description));
            }
            lines.push(Line::from(""));
            lines.push(heading("Compliance Frameworks"));
            for framework in &catalog::COMPLIANCE_FRAMEWORKS {
                lines.push(bullet(framework.name));
                lines.push(detail(framework.description));
            }
        }
        Section::Rollout => {
            lines.push(heading("Rollout Template"));
            for phase in &catalog::ROLLOUT_TEMPLATE {
                lines.push(Line::from(format!("{} ({})", phase.phase, phase.duration)));
                lines.push(detail(format!("Scope: {}", phase.scope)));
                lines.push(detail(format!("Goals: {}", phase.goals)));
                lines.push(detail(format!("Criteria: {}", phase.criteria)));
                lines.push(detail(format!("Risks: {}", phase.risks)));
            }
        }
    }
    lines
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let lines = reference_lines(app.state.current_section, app.state.document.content());
    let scroll = u16::try_from(app.state.scroll_offset).unwrap_or(u16::MAX);
    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title(" Reference (F1) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::records::{FailureField, RecordKind, RecordUpdate};
    use crate::state::{DocumentAction, UseCaseDocument};

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_every_section_has_content() {
        let doc = UseCaseDocument::default();
        for section in Section::ALL {
            assert!(!reference_lines(section, doc.content()).is_empty());
        }
    }

    #[test]
    fn test_department_examples_follow_selection() {
        let mut doc = UseCaseDocument::default();
        let before = text(&reference_lines(Section::ProblemEvidence, doc.content()));
        assert!(before.contains("Select a department"));

        let department = &catalog::DEPARTMENTS[0];
        doc.set_field(crate::state::ScalarField::SelectedDepartment, department.name);
        let after = text(&reference_lines(Section::ProblemEvidence, doc.content()));
        assert!(after.contains(department.use_cases[0]));
    }

    #[test]
    fn test_common_failures_show_probability() {
        let doc = UseCaseDocument::default();
        let shown = text(&reference_lines(Section::FailureModes, doc.content()));
        let first = &catalog::COMMON_FAILURES[0];
        assert!(shown.contains(&format!(
            "• {} {} Probability ",
            first.scenario, first.probability
        )));
    }

    #[test]
    fn test_failure_mode_badge_needs_both_ratings() {
        let mut doc = UseCaseDocument::default();
        let id = doc.add_record(RecordKind::FailureMode);
        doc.apply(DocumentAction::UpdateRecord(
            id.clone(),
            RecordUpdate::Failure(FailureField::Probability, "High".into()),
        ));
        let partial = text(&reference_lines(Section::FailureModes, doc.content()));
        assert!(!partial.contains("Your Failure Modes"));

        doc.apply(DocumentAction::UpdateRecord(
            id,
            RecordUpdate::Failure(FailureField::Impact, "Severe".into()),
        ));
        let rated = text(&reference_lines(Section::FailureModes, doc.content()));
        assert!(rated.contains("1.  Critical Risk"));
    }
}
