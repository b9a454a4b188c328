//! Application state management for the item list flow.
//!
//! This module contains the main application state shared by the two
//! screens, along with the form's field-editing state.
//!
//! The item list lives here, on [`App`], rather than inside the List
//! screen's own rendering state: both screens outlive neither the list
//! nor each other, so the list must be owned by their common parent for
//! a saved item to still be there after navigating back.

use crate::application::navigation::Navigator;
use crate::domain::{can_save, Item, ItemList};

/// A single text input's source of truth: its contents and cursor.
///
/// The cursor is a byte offset that always sits on a char boundary:
/// every edit and movement steps by whole characters.
#[derive(Debug, Default)]
pub struct FieldBuffer {
    /// Current text contents
    pub text: String,
    /// Cursor byte offset within the text, always on a char boundary
    pub cursor: usize,
}

impl FieldBuffer {
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(c) = self.char_before_cursor() {
            self.cursor -= c.len_utf8();
            self.text.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(c) = self.char_before_cursor() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn char_before_cursor(&self) -> Option<char> {
        self.text[..self.cursor].chars().next_back()
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

/// Which form field currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFocus {
    Title,
    Note,
}

/// Editing state for the Add Item form.
///
/// The form has no internal state machine: it is two field buffers and a
/// derived saveability predicate, terminated by either Save or Cancel.
#[derive(Debug)]
pub struct FormState {
    pub title: FieldBuffer,
    pub note: FieldBuffer,
    pub focus: FieldFocus,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            title: FieldBuffer::default(),
            note: FieldBuffer::default(),
            focus: FieldFocus::Title,
        }
    }
}

impl FormState {
    /// Whether the Save action is currently enabled.
    ///
    /// Derived from the field buffers on every call, never cached, so it
    /// is always consistent with the latest keystroke.
    pub fn can_save(&self) -> bool {
        can_save(&self.title.text, &self.note.text)
    }

    /// The buffer owned by the focused field.
    pub fn focused_field_mut(&mut self) -> &mut FieldBuffer {
        match self.focus {
            FieldFocus::Title => &mut self.title,
            FieldFocus::Note => &mut self.note,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FieldFocus::Title => FieldFocus::Note,
            FieldFocus::Note => FieldFocus::Title,
        };
    }

    pub fn focus_previous(&mut self) {
        // Two fields, so previous and next coincide.
        self.focus_next();
    }
}

/// Main application state containing the item list and both screens'
/// UI state.
///
/// # Examples
///
/// ```
/// use jotlist::application::{App, Screen};
///
/// let app = App::default();
/// assert_eq!(app.navigator.current(), Screen::List);
/// assert!(app.items.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct App {
    /// All saved items, in insertion order
    pub items: ItemList,
    /// Current screen and back stack
    pub navigator: Navigator,
    /// Field state for the Add Item form
    pub form: FormState,
    /// Index of the first item card visible in the list viewport
    pub list_scroll: usize,
    /// Temporary status message to display on the list screen
    pub status_message: Option<String>,
}

impl App {
    /// Opens the Add Item form.
    ///
    /// The form state is recreated from scratch so both fields start
    /// empty and Save starts disabled, regardless of what a previous
    /// form session left behind.
    pub fn open_form(&mut self) {
        self.form = FormState::default();
        self.status_message = None;
        self.navigator.navigate_to_form();
    }

    /// Saves the form contents as a new item and returns to the list.
    ///
    /// No-op while the form is not saveable; the UI presents Save as
    /// disabled in that case, so this cannot be reached through normal
    /// input, and a stray Enter changes nothing.
    pub fn save_form(&mut self) {
        if !self.form.can_save() {
            return;
        }

        // can_save agrees with the constructor, so this cannot fail;
        // if it ever did, we stay on the form rather than leave with
        // nothing saved.
        let Ok(item) = Item::new(&self.form.title.text, &self.form.note.text) else {
            return;
        };

        self.status_message = Some(format!("Added \"{}\"", item.title()));
        self.items.push(item);
        self.navigator.go_back();
    }

    /// Discards the form contents and returns to the list.
    ///
    /// Never touches the item list, whatever the fields contain.
    pub fn cancel_form(&mut self) {
        self.navigator.go_back();
    }

    /// Scrolls the list viewport up by one card.
    pub fn scroll_up(&mut self) {
        self.list_scroll = self.list_scroll.saturating_sub(1);
    }

    /// Scrolls the list viewport down by one card.
    pub fn scroll_down(&mut self) {
        if self.list_scroll + 1 < self.items.len() {
            self.list_scroll += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::navigation::Screen;

    fn type_into(buffer: &mut FieldBuffer, text: &str) {
        for c in text.chars() {
            buffer.insert_char(c);
        }
    }

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert_eq!(app.navigator.current(), Screen::List);
        assert!(app.items.is_empty());
        assert_eq!(app.list_scroll, 0);
        assert!(app.status_message.is_none());
        assert!(app.form.title.text.is_empty());
        assert!(app.form.note.text.is_empty());
        assert_eq!(app.form.focus, FieldFocus::Title);
    }

    #[test]
    fn test_field_buffer_editing() {
        let mut buffer = FieldBuffer::default();
        type_into(&mut buffer, "Milk");
        assert_eq!(buffer.text, "Milk");
        assert_eq!(buffer.cursor, 4);

        buffer.backspace();
        assert_eq!(buffer.text, "Mil");
        assert_eq!(buffer.cursor, 3);

        buffer.move_home();
        buffer.delete();
        assert_eq!(buffer.text, "il");
        assert_eq!(buffer.cursor, 0);

        buffer.move_right();
        buffer.insert_char('x');
        assert_eq!(buffer.text, "ixl");
        assert_eq!(buffer.cursor, 2);

        buffer.move_end();
        assert_eq!(buffer.cursor, 3);
        buffer.move_left();
        assert_eq!(buffer.cursor, 2);
    }

    #[test]
    fn test_field_buffer_edits_at_boundaries() {
        let mut buffer = FieldBuffer::default();

        // Nothing to remove in an empty buffer.
        buffer.backspace();
        buffer.delete();
        buffer.move_left();
        buffer.move_right();
        assert_eq!(buffer.text, "");
        assert_eq!(buffer.cursor, 0);

        type_into(&mut buffer, "ab");
        buffer.move_end();
        buffer.delete();
        assert_eq!(buffer.text, "ab");
    }

    #[test]
    fn test_field_buffer_multibyte_editing() {
        let mut buffer = FieldBuffer::default();
        type_into(&mut buffer, "café");
        assert_eq!(buffer.text, "café");
        assert_eq!(buffer.cursor, "café".len());

        // Inserting after a multibyte char must not split it.
        buffer.insert_char('s');
        assert_eq!(buffer.text, "cafés");

        buffer.backspace();
        buffer.backspace();
        assert_eq!(buffer.text, "caf");

        type_into(&mut buffer, "é🦀");
        buffer.move_left();
        buffer.insert_char('x');
        assert_eq!(buffer.text, "caféx🦀");

        buffer.move_left();
        buffer.move_left();
        buffer.delete();
        assert_eq!(buffer.text, "cafx🦀");

        buffer.move_end();
        buffer.backspace();
        assert_eq!(buffer.text, "cafx");
    }

    #[test]
    fn test_form_can_save_tracks_both_fields() {
        let mut form = FormState::default();
        assert!(!form.can_save());

        type_into(&mut form.title, "Milk");
        assert!(!form.can_save());

        form.focus_next();
        type_into(&mut form.note, "2%");
        assert!(form.can_save());

        // Whitespace-only input does not count.
        let mut form = FormState::default();
        type_into(&mut form.title, "   ");
        form.focus_next();
        type_into(&mut form.note, "2%");
        assert!(!form.can_save());
    }

    #[test]
    fn test_form_can_save_recomputed_per_keystroke() {
        let mut form = FormState::default();
        type_into(&mut form.title, "a");
        form.focus_next();
        type_into(&mut form.note, "b");
        assert!(form.can_save());

        // Deleting a required character flips it straight back.
        form.focused_field_mut().backspace();
        assert!(!form.can_save());
        form.focused_field_mut().insert_char('b');
        assert!(form.can_save());
    }

    #[test]
    fn test_form_focus_cycles_between_fields() {
        let mut form = FormState::default();
        assert_eq!(form.focus, FieldFocus::Title);
        form.focus_next();
        assert_eq!(form.focus, FieldFocus::Note);
        form.focus_next();
        assert_eq!(form.focus, FieldFocus::Title);
        form.focus_previous();
        assert_eq!(form.focus, FieldFocus::Note);
    }

    #[test]
    fn test_open_form_starts_fresh() {
        let mut app = App::default();

        // Leave residue from a previous form session.
        app.open_form();
        type_into(app.form.focused_field_mut(), "leftover");
        app.form.focus_next();
        app.cancel_form();

        app.open_form();
        assert_eq!(app.navigator.current(), Screen::Form);
        assert!(app.form.title.text.is_empty());
        assert!(app.form.note.text.is_empty());
        assert_eq!(app.form.focus, FieldFocus::Title);
        assert!(!app.form.can_save());
    }

    #[test]
    fn test_save_form_appends_and_returns_to_list() {
        let mut app = App::default();
        app.open_form();
        type_into(&mut app.form.title, "Milk");
        type_into(&mut app.form.note, "2%");

        app.save_form();

        assert_eq!(app.navigator.current(), Screen::List);
        assert_eq!(app.items.len(), 1);
        let item = app.items.get(0).unwrap();
        assert_eq!(item.title(), "Milk");
        assert_eq!(item.note(), "2%");
        assert!(app.status_message.as_ref().unwrap().contains("Milk"));
    }

    #[test]
    fn test_save_form_trims_fields() {
        let mut app = App::default();
        app.open_form();
        type_into(&mut app.form.title, "  Hello  ");
        type_into(&mut app.form.note, " world ");

        app.save_form();

        let item = app.items.get(0).unwrap();
        assert_eq!(item.title(), "Hello");
        assert_eq!(item.note(), "world");
    }

    #[test]
    fn test_save_form_disabled_is_noop() {
        let mut app = App::default();
        app.open_form();
        type_into(&mut app.form.title, "Milk");

        app.save_form();

        // Note is blank, so nothing happens and we stay on the form.
        assert_eq!(app.navigator.current(), Screen::Form);
        assert!(app.items.is_empty());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_cancel_form_never_mutates_items() {
        let mut app = App::default();
        app.open_form();
        type_into(&mut app.form.title, "Milk");
        type_into(&mut app.form.note, "2%");
        assert!(app.form.can_save());

        app.cancel_form();

        assert_eq!(app.navigator.current(), Screen::List);
        assert!(app.items.is_empty());
    }

    #[test]
    fn test_saved_items_survive_navigation() {
        let mut app = App::default();

        for (title, note) in [("first", "one"), ("second", "two")] {
            app.open_form();
            type_into(&mut app.form.title, title);
            type_into(&mut app.form.note, note);
            app.save_form();
        }

        assert_eq!(app.items.len(), 2);
        let titles: Vec<&str> = app.items.iter().map(|item| item.title()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_list_scroll_clamped() {
        let mut app = App::default();

        // Empty list: scrolling goes nowhere.
        app.scroll_down();
        assert_eq!(app.list_scroll, 0);
        app.scroll_up();
        assert_eq!(app.list_scroll, 0);

        for i in 0..3 {
            app.items
                .push(Item::new(&format!("item {}", i), "note").unwrap());
        }

        app.scroll_down();
        app.scroll_down();
        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.list_scroll, 2);

        app.scroll_up();
        assert_eq!(app.list_scroll, 1);
    }
}
