//! Platform-specific shortcut configuration

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Modifier for app-wide shortcuts
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Theme toggle shortcut
pub const THEME_KEY: char = 't';
pub const THEME_SHORTCUT: &str = "Ctrl+T";

/// Show/hide password shortcut
pub const REVEAL_KEY: char = 'r';
pub const REVEAL_SHORTCUT: &str = "Ctrl+R";

/// Quit shortcut display
pub const QUIT_SHORTCUT: &str = "Ctrl+C";

/// Check whether `key` is the modifier chord for `c`
pub fn is_shortcut(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(SHORTCUT_MODIFIER) && key.code == KeyCode::Char(c)
}
