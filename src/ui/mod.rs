//! UI module for rendering the TUI

mod components;
mod field;
mod layout;
mod reference;
mod section;
mod splash;

pub use layout::{reference_panel_x, section_at};

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let Some(splash_state) = &app.splash_state {
        splash::draw(frame, area, splash_state);
        return;
    }

    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app);

    let (form_area, reference_area) = layout::split_main(main_area, app.state.show_reference);
    section::draw(frame, form_area, app);
    if let Some(reference_area) = reference_area {
        reference::draw(frame, reference_area, app);
    }

    layout::draw_status_bar(frame, app);

    // Error dialog overlay (rendered last to appear on top)
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuilderConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn ready_app() -> App {
        let mut app = App::new(&BuilderConfig::default());
        app.splash_state = None;
        app.refresh_completion();
        app
    }

    #[test]
    fn test_splash_renders_hint() {
        let app = App::new(&BuilderConfig::default());
        let screen = render(&app, 80, 24);
        assert!(screen.contains("Press any key to skip"));
    }

    #[test]
    fn test_main_screen_lists_sections() {
        let app = ready_app();
        let screen = render(&app, 120, 30);
        assert!(screen.contains("Progress"));
        assert!(screen.contains("1 Title & Summary"));
        assert!(screen.contains("9 Rollout Plan"));
        assert!(screen.contains("0/9"));
        assert!(screen.contains("Reference (F1)"));
    }

    #[test]
    fn test_error_dialog_overlays() {
        let mut app = ready_app();
        app.push_error("disk full");
        let screen = render(&app, 100, 30);
        assert!(screen.contains("Error"));
        assert!(screen.contains("disk full"));
        assert!(screen.contains("to dismiss"));
    }

    #[test]
    fn test_every_section_renders_in_small_terminal() {
        let mut app = ready_app();
        for section in crate::state::Section::ALL {
            app.state.select_section(section);
            app.state.add_record();
            render(&app, 60, 12);
        }
    }
}
