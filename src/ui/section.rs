//! Section panel: the focusable items of the current section

use super::components::{render_button, ButtonTone, BUTTON_HEIGHT};
use super::field::{draw_field, field_height};
use crate::app::App;
use crate::state::{Focus, FormItem, SectionForm};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows above the items: description and a blank line
const HEADER_HEIGHT: u16 = 2;

fn item_height(item: &FormItem) -> u16 {
    match item {
        FormItem::Field(field) => field_height(field),
        FormItem::AddRecord(_) | FormItem::RemoveRecord { .. } => BUTTON_HEIGHT,
        FormItem::Checklist { .. } | FormItem::Suggestion { .. } => 1,
    }
}

/// Index of the first item to draw so that `active` fits in `available` rows
fn first_visible(heights: &[u16], active: usize, available: u16) -> usize {
    let Some(last) = heights.len().checked_sub(1) else {
        return 0;
    };
    let active = active.min(last);
    let mut first = active;
    let mut used = heights[active];
    while first > 0 && used + heights[first - 1] <= available {
        first -= 1;
        used += heights[first];
    }
    first
}

/// Draw the current section's form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let section = state.current_section;
    let focused = state.focus == Focus::Form;

    let block = Block::default()
        .title(format!(" {}. {} ", section.number(), section.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let description = Paragraph::new(Span::styled(
        section.description(),
        Style::default().fg(Color::DarkGray),
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(
        description,
        Rect {
            height: inner.height.min(1),
            ..inner
        },
    );

    let body = Rect {
        y: inner.y + HEADER_HEIGHT.min(inner.height),
        height: inner.height.saturating_sub(HEADER_HEIGHT),
        ..inner
    };
    draw_items(frame, body, &state.form, focused);
}

fn draw_items(frame: &mut Frame, area: Rect, form: &SectionForm, focused: bool) {
    let heights: Vec<u16> = form.items.iter().map(item_height).collect();
    let first = first_visible(&heights, form.active_index, area.height);

    let mut y = area.y;
    for (index, item) in form.items.iter().enumerate().skip(first) {
        let room = area.bottom().saturating_sub(y);
        // The focused item is clipped rather than hidden when it alone overflows
        let height = match heights[index] {
            h if h <= room => h,
            _ if index == first && room > 0 => room,
            _ => break,
        };
        let rect = Rect {
            y,
            height,
            ..area
        };
        draw_item(frame, rect, item, focused && index == form.active_index);
        y += height;
    }
}

fn draw_item(frame: &mut Frame, area: Rect, item: &FormItem, active: bool) {
    let highlight = |style: Style| {
        if active {
            style.fg(Color::Cyan).add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    };
    match item {
        FormItem::Field(field) => draw_field(frame, area, field, active),
        FormItem::AddRecord(kind) => {
            render_button(frame, area, &format!("+ Add {}", kind.label()), ButtonTone::Add, active)
        }
        FormItem::RemoveRecord { title, .. } => render_button(
            frame,
            area,
            &format!("✕ Remove {title}"),
            ButtonTone::Remove,
            active,
        ),
        FormItem::Checklist { label, checked } => {
            let (mark, color) = if *checked {
                ("[x] ", Color::Green)
            } else {
                ("[ ] ", Color::DarkGray)
            };
            let line = Line::from(vec![
                Span::styled(mark, Style::default().fg(color)),
                Span::styled(*label, highlight(Style::default())),
            ]);
            frame.render_widget(Paragraph::new(line), area);
        }
        FormItem::Suggestion { text, .. } => {
            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("+ {text}"),
                    highlight(Style::default().fg(Color::Yellow)),
                ),
            ]);
            frame.render_widget(Paragraph::new(line), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod scrolling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_everything_fits() {
            assert_eq!(first_visible(&[3, 3, 3], 2, 20), 0);
        }

        #[test]
        fn test_scrolls_to_active() {
            assert_eq!(first_visible(&[3, 3, 3, 3], 3, 7), 2);
            assert_eq!(first_visible(&[3, 3, 3, 3], 0, 7), 0);
        }

        #[test]
        fn test_oversized_active_is_first() {
            assert_eq!(first_visible(&[3, 10], 1, 5), 1);
        }

        #[test]
        fn test_empty_and_out_of_range() {
            assert_eq!(first_visible(&[], 4, 10), 0);
            assert_eq!(first_visible(&[3, 3], 9, 3), 1);
        }
    }
}
