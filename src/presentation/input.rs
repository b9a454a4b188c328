use crate::application::{App, Screen};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, _modifiers: KeyModifiers) {
        match app.navigator.current() {
            Screen::List => Self::handle_list_keys(app, key),
            Screen::Form => Self::handle_form_keys(app, key),
        }
    }

    fn handle_list_keys(app: &mut App, key: KeyCode) {
        // Any keypress dismisses a lingering status message.
        app.status_message = None;

        match key {
            KeyCode::Char('a') | KeyCode::Char('+') => {
                app.open_form();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.scroll_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.scroll_down();
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_form_keys(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.save_form();
            }
            KeyCode::Esc => {
                app.cancel_form();
            }
            KeyCode::Tab | KeyCode::Down => {
                app.form.focus_next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.form.focus_previous();
            }
            KeyCode::Backspace => {
                app.form.focused_field_mut().backspace();
            }
            KeyCode::Delete => {
                app.form.focused_field_mut().delete();
            }
            KeyCode::Left => {
                app.form.focused_field_mut().move_left();
            }
            KeyCode::Right => {
                app.form.focused_field_mut().move_right();
            }
            KeyCode::Home => {
                app.form.focused_field_mut().move_home();
            }
            KeyCode::End => {
                app.form.focused_field_mut().move_end();
            }
            KeyCode::Char(c) => {
                app.form.focused_field_mut().insert_char(c);
            }
            _ => {}
        }
    }
}
