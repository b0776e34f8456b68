//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Visual intent of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    Add,
    Remove,
}

impl ButtonTone {
    fn accent(self) -> Color {
        match self {
            Self::Add => Color::Green,
            Self::Remove => Color::Red,
        }
    }
}

/// Render a bordered button; focus switches the border to the accent colour
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, tone: ButtonTone, focused: bool) {
    let (border_style, text_style) = if focused {
        (
            Style::default().fg(tone.accent()),
            Style::default()
                .fg(tone.accent())
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Gray),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .block(block);
    frame.render_widget(paragraph, area);
}
