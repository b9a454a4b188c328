//! Screen navigation for the two-screen flow.
//!
//! The navigation graph is fixed: List is the root, Form is the only
//! non-root screen. Rather than a general-purpose router, the navigator
//! is a tagged variant over the known screens plus a minimal back stack.

/// One of the two navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Root screen showing the item list (or an empty-state message).
    List,
    /// Entry form for adding a new item.
    Form,
}

/// Holds the current screen and the back stack.
///
/// With only one non-root screen the stack never grows past depth one;
/// popping on an empty stack is a no-op rather than an error, so underflow
/// is unreachable through any input sequence.
///
/// # Examples
///
/// ```
/// use jotlist::application::{Navigator, Screen};
///
/// let mut nav = Navigator::default();
/// assert_eq!(nav.current(), Screen::List);
/// nav.navigate_to_form();
/// assert_eq!(nav.current(), Screen::Form);
/// nav.go_back();
/// assert_eq!(nav.current(), Screen::List);
/// ```
#[derive(Debug)]
pub struct Navigator {
    current: Screen,
    back_stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current: Screen::List,
            back_stack: Vec::new(),
        }
    }
}

impl Navigator {
    pub fn current(&self) -> Screen {
        self.current
    }

    /// Transitions from the current screen to the Form screen.
    ///
    /// Always succeeds; the previous screen is pushed so `go_back` can
    /// return to it.
    pub fn navigate_to_form(&mut self) {
        self.back_stack.push(self.current);
        self.current = Screen::Form;
    }

    /// Pops the back stack and returns to the previous screen.
    ///
    /// No-op when already at the root.
    pub fn go_back(&mut self) {
        if let Some(previous) = self.back_stack.pop() {
            self.current = previous;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_screen_is_list() {
        let nav = Navigator::default();
        assert_eq!(nav.current(), Screen::List);
    }

    #[test]
    fn test_navigate_to_form_and_back() {
        let mut nav = Navigator::default();

        nav.navigate_to_form();
        assert_eq!(nav.current(), Screen::Form);

        nav.go_back();
        assert_eq!(nav.current(), Screen::List);
    }

    #[test]
    fn test_go_back_at_root_is_noop() {
        let mut nav = Navigator::default();

        nav.go_back();
        assert_eq!(nav.current(), Screen::List);

        // Repeated pops never underflow.
        nav.go_back();
        nav.go_back();
        assert_eq!(nav.current(), Screen::List);
    }

    #[test]
    fn test_repeated_round_trips() {
        let mut nav = Navigator::default();

        for _ in 0..3 {
            nav.navigate_to_form();
            assert_eq!(nav.current(), Screen::Form);
            nav.go_back();
            assert_eq!(nav.current(), Screen::List);
        }
    }
}
