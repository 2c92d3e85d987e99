//! Keyboard and paste input for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

impl App {
    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.dialog.open {
            self.handle_dialog_key(key);
        } else {
            self.handle_browse_key(key);
        }
    }

    /// Insert pasted text into the focused form field.
    pub fn handle_paste(&mut self, text: &str) {
        if self.dialog.open && !self.dialog.is_pending() {
            self.dialog.form.insert_str(text);
            self.mark_dirty();
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => self.cursor_down(),
            KeyCode::Char('k') | KeyCode::Up => self.cursor_up(),
            KeyCode::Char('g') | KeyCode::Home => self.cursor_first(),
            KeyCode::Char('G') | KeyCode::End => self.cursor_last(),
            KeyCode::Enter => self.select_cursor(),
            KeyCode::Char('n') => self.open_dialog(),
            KeyCode::Char('r') => self.refresh_posts(),
            KeyCode::PageDown => self.scroll_detail_down(),
            KeyCode::PageUp => self.scroll_detail_up(),
            _ => {}
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.close_dialog();
            }
            KeyCode::Char('s') if ctrl => self.submit_form(),
            // The form is read-only while a submission is in flight
            _ if self.dialog.is_pending() => {}
            KeyCode::Tab => self.dialog.form.focus_next(),
            KeyCode::BackTab => self.dialog.form.focus_prev(),
            KeyCode::Enter => self.dialog.form.newline(),
            KeyCode::Backspace => self.dialog.form.backspace(),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.dialog.form.insert_char(c);
                self.dialog.validation_error = None;
            }
            _ => return,
        }
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BlogApi;
    use crate::app::FormField;
    use crate::models::{Post, PostId};
    use crate::query::QueryState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with_posts(ids: &[u64]) -> App {
        let mut app = App::new(BlogApi::default());
        let posts = ids
            .iter()
            .map(|id| Post {
                id: PostId(*id),
                title: format!("Post {}", id),
                ..Default::default()
            })
            .collect();
        let ticket = app.queries.posts_mut().begin_fetch();
        app.queries.posts_mut().resolve(ticket, Ok(posts));
        app
    }

    #[test]
    fn test_cursor_moves_within_bounds() {
        let mut app = app_with_posts(&[1, 2, 3]);
        app.handle_key(press(KeyCode::Char('k')));
        assert_eq!(app.cursor, 0);
        app.handle_key(press(KeyCode::Char('j')));
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.cursor, 2);
        app.handle_key(press(KeyCode::Char('g')));
        assert_eq!(app.cursor, 0);
        app.handle_key(press(KeyCode::End));
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn test_enter_selects_cursor_post() {
        let mut app = app_with_posts(&[4, 9]);
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.selected_id, Some(PostId(9)));
    }

    #[test]
    fn test_enter_without_posts_selects_nothing() {
        let mut app = App::new(BlogApi::default());
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.selected_id, None);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_with_posts(&[]);
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = app_with_posts(&[]);
        app.handle_key(press(KeyCode::Char('n')));
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_types_into_open_dialog() {
        let mut app = app_with_posts(&[]);
        app.handle_key(press(KeyCode::Char('n')));
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.dialog.form.title, "q");
    }

    #[test]
    fn test_dialog_field_navigation() {
        let mut app = app_with_posts(&[]);
        app.handle_key(press(KeyCode::Char('n')));
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.dialog.form.focus, FormField::Description);
        app.handle_key(press(KeyCode::BackTab));
        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.dialog.form.focus, FormField::Content);
        app.handle_key(press(KeyCode::Char('a')));
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Char('b')));
        assert_eq!(app.dialog.form.content, "a\nb");
    }

    #[test]
    fn test_escape_keeps_draft() {
        let mut app = app_with_posts(&[]);
        app.handle_key(press(KeyCode::Char('n')));
        app.handle_key(press(KeyCode::Char('x')));
        app.handle_key(press(KeyCode::Esc));
        assert!(!app.dialog.open);

        app.handle_key(press(KeyCode::Char('n')));
        assert_eq!(app.dialog.form.title, "x");
    }

    #[test]
    fn test_submit_empty_form_shows_validation() {
        let mut app = app_with_posts(&[]);
        app.handle_key(press(KeyCode::Char('n')));
        app.handle_key(ctrl('s'));
        assert_eq!(
            app.dialog.validation_error.as_deref(),
            Some("Title is required")
        );
        assert!(!app.dialog.is_pending());

        app.handle_key(press(KeyCode::Char('T')));
        assert_eq!(app.dialog.validation_error, None);
    }

    #[test]
    fn test_refresh_marks_list_stale() {
        let mut app = app_with_posts(&[1]);
        assert!(!app.queries.posts().needs_fetch());
        app.handle_key(press(KeyCode::Char('r')));
        assert!(app.queries.posts().needs_fetch());
        assert!(matches!(app.posts_state(), QueryState::Resolved(_)));
    }

    #[test]
    fn test_paste_ignored_without_dialog() {
        let mut app = app_with_posts(&[]);
        app.handle_paste("hello");
        assert!(app.dialog.form.title.is_empty());

        app.open_dialog();
        app.handle_paste("hello\nworld");
        assert_eq!(app.dialog.form.title, "helloworld");
    }
}
