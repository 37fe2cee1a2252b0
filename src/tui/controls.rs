//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Slider steps moved by PageUp/PageDown.
const COARSE_STEPS: i32 = 10;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.select_next(),
        KeyCode::Right | KeyCode::Char('l' | '+' | '=') => app.adjust(1),
        KeyCode::Left | KeyCode::Char('h' | '-') => app.adjust(-1),
        KeyCode::PageUp => app.adjust(COARSE_STEPS),
        KeyCode::PageDown => app.adjust(-COARSE_STEPS),
        KeyCode::Char('1') => app.switch_preset("default"),
        KeyCode::Char('2') => app.switch_preset("toulouse"),
        KeyCode::Char('3') => app.switch_preset("jonquieres"),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Parameter;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_select_and_adjust() {
        let mut app = App::new("default");
        handle_key(&mut app, press(KeyCode::Up));
        assert_eq!(app.selected_parameter(), Parameter::MaintenancePerKwc);
        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(app.inputs.maintenance_per_kwc, 21.0);
        handle_key(&mut app, press(KeyCode::PageDown));
        assert_eq!(app.inputs.maintenance_per_kwc, 11.0);
    }

    #[test]
    fn ctrl_c_and_q_quit() {
        let mut app = App::new("default");
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.quit);

        let mut app = App::new("default");
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.quit);
    }

    #[test]
    fn digits_switch_presets() {
        let mut app = App::new("default");
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.preset_name, "toulouse");
        assert_eq!(app.inputs.yield_kwh_per_kwc, 1_320.0);
    }
}
