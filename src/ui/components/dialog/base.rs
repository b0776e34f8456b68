//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    /// Used for both the title and the border
    pub accent: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint line shown at the bottom
    pub hint: Option<Line<'a>>,
    pub max_width: u16,
}

/// Hint spans with highlighted key names, e.g. `[("Enter", " to close")]`
pub fn key_hint<'a>(prefix: &'a str, keys: &[(&'a str, &'a str)]) -> Line<'a> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::raw(prefix)];
    for (key, after) in keys {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(*after));
    }
    Line::from(spans)
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    // borders plus 2 columns of padding each side
    let chrome = 6u16;
    let max_width = config.max_width.min(area.width);
    let wrapped = wrap_text(config.message, max_width.saturating_sub(chrome).max(1) as usize);

    let content_width = wrapped
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(config.title.chars().count()))
        .chain(config.hint.as_ref().map(Line::width))
        .max()
        .unwrap_or(0) as u16;
    let width = (content_width + chrome).min(max_width);

    // title + blank + message + optional (blank + hint) + borders
    let hint_rows = if config.hint.is_some() { 2 } else { 0 };
    let height = (2 + wrapped.len() as u16 + hint_rows + 2)
        .max(5)
        .min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, dialog_area);

    let mut lines = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(wrapped.into_iter().map(Line::from));
    if let Some(hint) = config.hint {
        lines.push(Line::from(""));
        lines.push(hint);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.accent))
        .padding(Padding::horizontal(2))
        .style(Style::default().bg(Color::Black));
    let dialog = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(Color::Black));
    frame.render_widget(dialog, dialog_area);
}

/// Greedy word wrap; explicit newlines start new lines
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if !current.is_empty() && needed > max_width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines
}
