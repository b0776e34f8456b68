//! Application state and core logic

use crate::config::BuilderConfig;
use crate::export::{ClipboardTarget, ExportTarget, Exporter, FileTarget};
use crate::platform::is_command;
use crate::state::{AppState, Focus, Section, SplashState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key
    pub status_message: Option<String>,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Terminal size for mouse hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    exporter: Exporter,
    file_target: Box<dyn ExportTarget>,
    clipboard_target: Box<dyn ExportTarget>,
}

impl App {
    pub fn new(config: &BuilderConfig) -> Self {
        Self::with_targets(
            config,
            Box::new(FileTarget::new(config.export_dir())),
            Box::new(ClipboardTarget),
        )
    }

    /// Create an App that delivers exports to the given targets
    pub fn with_targets(
        config: &BuilderConfig,
        file_target: Box<dyn ExportTarget>,
        clipboard_target: Box<dyn ExportTarget>,
    ) -> Self {
        Self {
            state: AppState::new(config.start_section()),
            quit: false,
            status_message: None,
            splash_state: Some(SplashState::new()),
            terminal_size: None,
            exporter: Exporter::from_config(config),
            file_target,
            clipboard_target,
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                return true;
            }
        }
        false
    }

    pub fn in_splash(&self) -> bool {
        self.splash_state.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Bring the completion cache up to date before drawing
    pub fn refresh_completion(&mut self) {
        self.state.summary();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
            return Ok(());
        }

        if is_command(key.modifiers) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return Ok(());
        }

        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        self.status_message = None;

        if is_command(key.modifiers) {
            return self.handle_command_key(key).await;
        }

        match key.code {
            KeyCode::F(1) => self.state.show_reference = !self.state.show_reference,
            KeyCode::Esc => {
                self.state.focus.toggle();
                self.state.sidebar_index = self.state.current_section.index();
            }
            KeyCode::PageDown => self.state.next_section(),
            KeyCode::PageUp => self.state.prev_section(),
            _ => match self.state.focus {
                Focus::Sidebar => self.handle_sidebar_key(key),
                Focus::Form => self.handle_form_key(key),
            },
        }
        Ok(())
    }

    async fn handle_command_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('e') => self.export_to_file().await,
            KeyCode::Char('y') => self.copy_to_clipboard().await,
            KeyCode::Char('a') => {
                if !self.state.add_record() {
                    self.status_message = Some("This section has no list to add to".into());
                }
            }
            KeyCode::Char('d') => {
                if !self.state.remove_focused_record() {
                    self.status_message = Some("Focus a record to remove it".into());
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.sidebar_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.sidebar_up(),
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
                if let Some(&section) = Section::ALL.get(self.state.sidebar_index) {
                    self.open_section(section);
                }
            }
            KeyCode::Char(c) => {
                if let Some(section) = c
                    .to_digit(10)
                    .and_then(|n| Section::from_number(n as usize))
                {
                    self.open_section(section);
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.next_item(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_item(),
            KeyCode::Left => self.state.cycle_choice(false),
            KeyCode::Right => self.state.cycle_choice(true),
            KeyCode::Enter => self.state.enter(),
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Char(c) => self.state.input_char(c),
            _ => {}
        }
    }

    fn open_section(&mut self, section: Section) {
        self.state.select_section(section);
        self.state.focus = Focus::Form;
    }

    /// Handle mouse events
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.in_splash() || self.state.has_errors() {
            return Ok(());
        }
        self.status_message = None;

        let width = self.terminal_size.map(|(_, w)| w).unwrap_or(80);
        let over_reference =
            self.state.show_reference && mouse.column >= crate::ui::reference_panel_x(width);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(section) = crate::ui::section_at(mouse.column, mouse.row) {
                    self.open_section(section);
                }
            }
            MouseEventKind::ScrollDown if over_reference => self.state.scroll_down(),
            MouseEventKind::ScrollUp if over_reference => self.state.scroll_up(),
            MouseEventKind::ScrollDown => self.state.next_item(),
            MouseEventKind::ScrollUp => self.state.prev_item(),
            _ => {}
        }
        Ok(())
    }

    async fn export_to_file(&mut self) {
        match self
            .exporter
            .export(&self.state.document, self.file_target.as_ref())
            .await
        {
            Ok(receipt) => {
                self.status_message = Some(format!("Exported to {}", receipt.destination));
            }
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                self.push_error(format!("Export failed: {e}"));
            }
        }
    }

    async fn copy_to_clipboard(&mut self) {
        match self
            .exporter
            .export(&self.state.document, self.clipboard_target.as_ref())
            .await
        {
            Ok(receipt) => {
                self.status_message = Some(format!("Copied {} bytes of JSON", receipt.bytes));
            }
            Err(e) => {
                tracing::error!("Clipboard export failed: {}", e);
                self.push_error(format!("Failed to copy: {e}"));
            }
        }
    }
}
