//! Splash screen rendering with ASCII art logo

use crate::state::SplashState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LOGO: [&str; 6] = [
    "██████╗ ██████╗ ██████╗ ",
    "██╔══██╗╚════██╗██╔══██╗",
    "██████╔╝ █████╔╝██████╔╝",
    "██╔══██╗██╔═══╝ ██╔══██╗",
    "██████╔╝███████╗██████╔╝",
    "╚═════╝ ╚══════╝╚═════╝ ",
];

const TAGLINE: &str = "automation use case builder";

fn logo_lines() -> Vec<Line<'static>> {
    let width = LOGO[0].chars().count();
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Cyan))))
        .collect();
    lines.push(Line::from(""));
    let pad = width.saturating_sub(TAGLINE.len()) / 2;
    lines.push(Line::from(Span::styled(
        format!("{}{TAGLINE}", " ".repeat(pad)),
        Style::default().fg(Color::Gray),
    )));
    lines
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash: &SplashState) {
    let lines = logo_lines();
    let logo_height = lines.len() as u16;
    let logo_width = LOGO[0].chars().count().max(TAGLINE.len()) as u16;

    // May go negative once the logo slides past the top
    let base_y = area.y as i32 + area.height.saturating_sub(logo_height) as i32 / 2;
    let y_pos = base_y - splash.scroll_offset as i32;
    let hidden = y_pos.min(0).unsigned_abs() as usize;
    if hidden >= lines.len() {
        return;
    }

    let visible: Vec<Line> = lines.into_iter().skip(hidden).collect();
    let logo_area = Rect {
        x: area.x + area.width.saturating_sub(logo_width) / 2,
        y: y_pos.max(area.y as i32) as u16,
        width: logo_width.min(area.width),
        height: (visible.len() as u16).min(area.height),
    };
    frame.render_widget(Paragraph::new(visible), logo_area);

    if splash.scroll_offset < 1.0 && area.height >= 2 {
        let hint = "Press any key to skip";
        let hint_area = Rect {
            x: area.x + area.width.saturating_sub(hint.len() as u16) / 2,
            y: area.bottom() - 2,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
            hint_area,
        );
    }
}
