//! Rendering of editable form fields

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Rows a field occupies, borders included
pub fn field_height(field: &FormField) -> u16 {
    match field.kind {
        FieldKind::Text { multiline: true } => {
            let lines = field.value.split('\n').count() as u16;
            (lines + 2).clamp(5, 10)
        }
        _ => 3,
    }
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let accent = Style::default().fg(Color::Cyan);
    let (text_style, border_style) = if is_active {
        (accent, accent)
    } else {
        (Style::default(), Style::default().fg(Color::DarkGray))
    };
    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);
    let cursor = Span::styled(if is_active { CURSOR } else { "" }, accent);

    let mut title = format!(" {} ", field.label);
    let mut scroll = 0u16;
    let lines: Vec<Line> = match field.kind {
        FieldKind::List => {
            let mut spans: Vec<Span> = Vec::new();
            for entry in &field.entries {
                spans.push(Span::styled(
                    format!("[{entry}]"),
                    Style::default().fg(Color::Yellow),
                ));
                spans.push(Span::raw(" "));
            }
            if field.value.is_empty() && !is_active && field.entries.is_empty() {
                spans.push(Span::styled("(empty)", placeholder_style));
            } else {
                spans.push(Span::styled(field.value.clone(), text_style));
                spans.push(cursor);
            }
            vec![Line::from(spans)]
        }
        FieldKind::Choice(_) => {
            title = format!(" {} ◂▸ ", field.label);
            let shown = field.display_value();
            let span = if shown.is_empty() {
                Span::styled(field.placeholder, placeholder_style)
            } else {
                Span::styled(shown, text_style)
            };
            vec![Line::from(span)]
        }
        FieldKind::Text { .. } if field.value.is_empty() => {
            let hint = match (is_active, field.placeholder.is_empty()) {
                (true, _) => "",
                (false, true) => "(empty)",
                (false, false) => field.placeholder,
            };
            vec![Line::from(vec![cursor, Span::styled(hint, placeholder_style)])]
        }
        FieldKind::Text { .. } => {
            let width = area.width.saturating_sub(2).max(1) as usize;
            let mut rows = hard_wrap(&field.value, width);
            if is_active && rows.last().is_some_and(|r| r.chars().count() >= width) {
                rows.push(String::new());
            }
            let mut lines: Vec<Line> = rows
                .into_iter()
                .map(|row| Line::from(Span::styled(row, text_style)))
                .collect();
            if let Some(last) = lines.last_mut() {
                last.spans.push(cursor);
            }
            // keep the cursor row in view while typing
            if is_active {
                let visible = area.height.saturating_sub(2) as usize;
                scroll = lines.len().saturating_sub(visible) as u16;
            }
            lines
        }
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(block),
        area,
    );
}

/// Break text into rows of at most `width` characters, newlines included
fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}
