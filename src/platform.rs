//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the document shortcuts
/// - macOS: SUPER (Cmd key), Ctrl also accepted
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COMMAND_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COMMAND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

#[cfg(target_os = "macos")]
const COMMAND_KEY: &str = "Cmd";

#[cfg(not(target_os = "macos"))]
const COMMAND_KEY: &str = "Ctrl";

/// Whether `modifiers` carry the shortcut modifier
pub fn is_command(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) || modifiers.contains(COMMAND_MODIFIER)
}

/// Display form of a shortcut, e.g. "Ctrl+E"
pub fn shortcut(key: char) -> String {
    format!("{}+{}", COMMAND_KEY, key.to_ascii_uppercase())
}
