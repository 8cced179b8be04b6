use crate::application::{App, AppMode, Page};
use crate::domain::FieldKind;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Browse => Self::handle_browse_mode(app, key, modifiers),
            AppMode::EditField => Self::handle_edit_mode(app, key),
        }
    }

    fn handle_browse_mode(app: &mut App, key: KeyCode, _modifiers: KeyModifiers) {
        // Navigation is available from every page
        match key {
            KeyCode::Tab => {
                app.navigate_to(app.page.next());
                return;
            }
            KeyCode::BackTab => {
                app.navigate_to(app.page.previous());
                return;
            }
            KeyCode::Char(digit @ '1'..='6') => {
                let index = digit as usize - '1' as usize;
                app.navigate_to(Page::ALL[index]);
                return;
            }
            _ => {}
        }

        if app.current_form().is_some() && app.form_editable() {
            Self::handle_form_keys(app, key);
        } else {
            Self::handle_scroll_keys(app, key);
        }
    }

    fn handle_form_keys(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.status_message = None;
                app.focus_previous();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.status_message = None;
                app.focus_next();
            }
            KeyCode::Enter => {
                if app.is_submit_focused() {
                    app.submit_current_form();
                } else if matches!(
                    app.focused_spec().map(|spec| spec.kind),
                    Some(FieldKind::Select(_))
                ) {
                    app.cycle_focused_select();
                } else {
                    app.start_field_edit();
                }
            }
            KeyCode::Char(' ') => {
                // Space also cycles selects, like toggling a browser widget
                app.cycle_focused_select();
            }
            KeyCode::PageUp => {
                app.scroll_by(-5);
            }
            KeyCode::PageDown => {
                app.scroll_by(5);
            }
            KeyCode::Esc => {
                app.status_message = None;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_scroll_keys(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.scroll_by(-1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.scroll_by(1);
            }
            KeyCode::PageUp => {
                app.scroll_by(-5);
            }
            KeyCode::PageDown => {
                app.scroll_by(5);
            }
            KeyCode::Home => {
                app.scroll = 0;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_edit_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.finish_field_edit();
            }
            KeyCode::Esc => {
                app.cancel_field_edit();
            }
            KeyCode::Backspace => {
                if app.cursor_position > 0 {
                    app.input.remove(app.cursor_position - 1);
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Delete => {
                if app.cursor_position < app.input.len() {
                    app.input.remove(app.cursor_position);
                }
            }
            KeyCode::Left => {
                if app.cursor_position > 0 {
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Right => {
                if app.cursor_position < app.input.len() {
                    app.cursor_position += 1;
                }
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.input.len();
            }
            KeyCode::Char(c) => {
                app.input.insert(app.cursor_position, c);
                app.cursor_position += 1;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{App, AppMode, Outbound, SubmissionStatus};

    fn key(app: &mut App, code: KeyCode) {
        InputHandler::handle_key_event(app, code, KeyModifiers::NONE);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            key(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_tab_cycles_pages() {
        let mut app = App::new();

        key(&mut app, KeyCode::Tab);
        assert_eq!(app.page, Page::Services);

        key(&mut app, KeyCode::BackTab);
        assert_eq!(app.page, Page::Home);

        // Wraps backwards from the first page
        key(&mut app, KeyCode::BackTab);
        assert_eq!(app.page, Page::Book);
    }

    #[test]
    fn test_digit_jumps_to_page() {
        let mut app = App::new();

        key(&mut app, KeyCode::Char('3'));
        assert_eq!(app.page, Page::Membership);

        key(&mut app, KeyCode::Char('5'));
        assert_eq!(app.page, Page::Contact);
    }

    #[test]
    fn test_typing_into_focused_field_updates_mapping() {
        let mut app = App::new();
        key(&mut app, KeyCode::Char('5'));

        // Focus starts on the name field; Enter opens the editor
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::EditField);

        type_text(&mut app, "Ada");
        key(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, AppMode::Browse);
        assert_eq!(app.contact_form.value("name"), "Ada");
        assert_eq!(app.contact_form.value("email"), "");
    }

    #[test]
    fn test_edit_mode_cursor_editing() {
        let mut app = App::new();
        key(&mut app, KeyCode::Char('5'));
        key(&mut app, KeyCode::Enter);

        type_text(&mut app, "Adaa");
        key(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "Ada");

        key(&mut app, KeyCode::Home);
        key(&mut app, KeyCode::Delete);
        assert_eq!(app.input, "da");

        key(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Browse);
        // Cancelled edit leaves the mapping untouched
        assert_eq!(app.contact_form.value("name"), "");
    }

    #[test]
    fn test_enter_cycles_select_field() {
        let mut app = App::new();
        key(&mut app, KeyCode::Char('5'));

        // name, email, phone, then the service-interest select
        for _ in 0..3 {
            key(&mut app, KeyCode::Down);
        }
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.contact_form.value("service_type"), "elite-shopping");

        key(&mut app, KeyCode::Enter);
        assert_eq!(app.contact_form.value("service_type"), "errands");
    }

    #[test]
    fn test_submit_from_submit_action() {
        let mut app = App::new();
        key(&mut app, KeyCode::Char('5'));
        app.contact_form.set_value("name", "Ada".to_string()).unwrap();
        app.contact_form.set_value("email", "ada@example.com".to_string()).unwrap();
        app.contact_form.set_value("message", "Hello".to_string()).unwrap();
        app.drain_outbound();

        let field_count = app.contact_form.fields().len();
        for _ in 0..field_count {
            key(&mut app, KeyCode::Down);
        }
        key(&mut app, KeyCode::Enter);

        assert_eq!(app.contact_status, SubmissionStatus::Submitting);
        let outbound = app.drain_outbound();
        assert!(matches!(outbound.as_slice(), [Outbound::SubmitContact { .. }]));
    }

    #[test]
    fn test_form_keys_ignored_while_submitting() {
        let mut app = App::new();
        key(&mut app, KeyCode::Char('5'));
        app.contact_form.set_value("name", "Ada".to_string()).unwrap();
        app.contact_form.set_value("email", "ada@example.com".to_string()).unwrap();
        app.contact_form.set_value("message", "Hello".to_string()).unwrap();
        app.submit_current_form();
        app.drain_outbound();

        // Enter can neither edit nor resubmit while the request is in flight
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Browse);
        assert!(app.drain_outbound().is_empty());
        assert_eq!(app.contact_form.value("name"), "Ada");
    }

    #[test]
    fn test_booking_confirmation_ignores_submit() {
        let mut app = App::new();
        key(&mut app, KeyCode::Char('6'));
        app.booking_form.set_value("client_name", "Ada".to_string()).unwrap();
        app.booking_form.set_value("client_email", "a@b.c".to_string()).unwrap();
        app.booking_form.set_value("service_category", "other".to_string()).unwrap();
        app.booking_form.set_value("service_details", "Help".to_string()).unwrap();
        app.submit_current_form();
        app.drain_outbound();
        app.apply_net_event(crate::application::NetEvent::BookingResolved {
            seq: 1,
            result: Ok(()),
        });

        key(&mut app, KeyCode::Enter);

        assert_eq!(app.booking_status, SubmissionStatus::Success);
        assert!(app.drain_outbound().is_empty());
    }

    #[test]
    fn test_scroll_keys_on_content_page() {
        let mut app = App::new();

        key(&mut app, KeyCode::Down);
        key(&mut app, KeyCode::Down);
        assert_eq!(app.scroll, 2);

        key(&mut app, KeyCode::PageDown);
        assert_eq!(app.scroll, 7);

        key(&mut app, KeyCode::Home);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_navigation_away_leaves_edit_mode() {
        let mut app = App::new();
        key(&mut app, KeyCode::Char('5'));
        key(&mut app, KeyCode::Enter);
        type_text(&mut app, "Ad");

        // Finish the edit, then leave the page; the fresh instance is clean
        key(&mut app, KeyCode::Enter);
        key(&mut app, KeyCode::Char('1'));
        key(&mut app, KeyCode::Char('5'));

        assert_eq!(app.contact_form.value("name"), "");
        assert_eq!(app.mode, AppMode::Browse);
    }
}
