//! Layout components (sidebar, status bar)

use crate::app::App;
use crate::platform::shortcut;
use crate::state::{Focus, Section};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub const SIDEBAR_WIDTH: u16 = 26;
const GAUGE_HEIGHT: u16 = 3;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(area);

    // Bottom row of both columns belongs to the status bar
    let trim = |r: Rect| Rect {
        height: r.height.saturating_sub(1),
        ..r
    };
    (trim(columns[0]), trim(columns[1]))
}

fn form_width(main_width: u16) -> u16 {
    main_width * 3 / 5
}

/// Split the main area into form panel and optional reference panel
pub fn split_main(area: Rect, show_reference: bool) -> (Rect, Option<Rect>) {
    if !show_reference {
        return (area, None);
    }
    let left = form_width(area.width);
    let form = Rect { width: left, ..area };
    let reference = Rect {
        x: area.x + left,
        width: area.width - left,
        ..area
    };
    (form, Some(reference))
}

/// First column of the reference panel for a terminal `width` wide
pub fn reference_panel_x(width: u16) -> u16 {
    SIDEBAR_WIDTH + form_width(width.saturating_sub(SIDEBAR_WIDTH))
}

/// Section listed at a screen position in the sidebar
pub fn section_at(column: u16, row: u16) -> Option<Section> {
    if column >= SIDEBAR_WIDTH {
        return None;
    }
    // Gauge, then the list block's top border
    let index = row.checked_sub(GAUGE_HEIGHT + 1)?;
    Section::ALL.get(index as usize).copied()
}

/// Draw the sidebar: progress gauge and section list
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(GAUGE_HEIGHT), Constraint::Min(0)])
        .split(area);

    let summary = app.state.cached_summary();
    let title = match summary.remaining() {
        0 => " Complete ".to_string(),
        left => format!(" Progress · {left} left "),
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .percent(summary.percent())
        .label(format!("{}/{}", summary.completed(), summary.total()));
    frame.render_widget(gauge, chunks[0]);

    let sidebar_focused = app.state.focus == Focus::Sidebar;
    let lines: Vec<Line> = Section::ALL
        .iter()
        .map(|&section| {
            let done = summary.is_complete(section);
            let marker = if done {
                Span::styled("✓ ", Style::default().fg(Color::Green))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            };
            let mut style = if section == app.state.current_section {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if sidebar_focused && section.index() == app.state.sidebar_index {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(vec![
                marker,
                Span::styled(format!("{} {}", section.number(), section.title()), style),
            ])
        })
        .collect();

    let border = if sidebar_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let list = Paragraph::new(lines).block(
        Block::default()
            .title(" Sections ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(list, chunks[1]);
}

fn hints(focus: Focus) -> String {
    match focus {
        Focus::Sidebar => "j/k:move Enter:open 1-9:jump Esc:form".to_string(),
        Focus::Form => format!(
            "Tab:next ←→:choose {}:add {}:remove {}:export {}:copy F1:ref Esc:sections",
            shortcut('a'),
            shortcut('d'),
            shortcut('e'),
            shortcut('y'),
        ),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(hints(app.state.focus), Style::default().fg(Color::Gray)),
    ];
    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..status_area
    };
    frame.render_widget(
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray)),
        quit_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_layout_reserves_status_row() {
        let (sidebar, main) = create_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(sidebar, Rect::new(0, 0, SIDEBAR_WIDTH, 29));
        assert_eq!(main, Rect::new(SIDEBAR_WIDTH, 0, 100 - SIDEBAR_WIDTH, 29));
    }

    #[test]
    fn test_split_main_matches_reference_x() {
        let (_, main) = create_layout(Rect::new(0, 0, 120, 30));
        let (form, reference) = split_main(main, true);
        let reference = reference.unwrap();
        assert_eq!(form.right(), reference.x);
        assert_eq!(reference.right(), 120);
        assert_eq!(reference.x, reference_panel_x(120));
    }

    #[test]
    fn test_split_main_without_reference() {
        let area = Rect::new(26, 0, 80, 20);
        assert_eq!(split_main(area, false), (area, None));
    }

    #[test]
    fn test_section_at_rows() {
        assert_eq!(section_at(3, 0), None);
        assert_eq!(section_at(3, GAUGE_HEIGHT), None);
        assert_eq!(section_at(3, GAUGE_HEIGHT + 1), Some(Section::TitleSummary));
        assert_eq!(section_at(3, GAUGE_HEIGHT + 9), Some(Section::Rollout));
        assert_eq!(section_at(3, GAUGE_HEIGHT + 10), None);
        assert_eq!(section_at(SIDEBAR_WIDTH, GAUGE_HEIGHT + 1), None);
    }
}
