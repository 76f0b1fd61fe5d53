//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use studio_core::View;

use super::app::{App, Mode};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
#[derive(Debug, PartialEq, Eq)]
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return HandleResult::Quit,
            // Ctrl+K opens search from anywhere
            KeyCode::Char('k') => {
                if app.mode == Mode::ClientFilter {
                    app.exit_client_filter(false);
                }
                app.open_search();
                return HandleResult::Continue;
            }
            _ => {}
        }
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Search => handle_search_mode(app, key),
        Mode::ClientFilter => handle_client_filter(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Char('q') => HandleResult::Quit,

        // View switching
        KeyCode::Char(c @ '1'..='6') => {
            let idx = (c as usize) - ('1' as usize);
            app.switch_view(View::ALL[idx]);
            HandleResult::Continue
        }
        KeyCode::Tab => {
            app.next_view();
            HandleResult::Continue
        }
        KeyCode::BackTab => {
            app.prev_view();
            HandleResult::Continue
        }

        // List navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            HandleResult::Continue
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_prev();
            HandleResult::Continue
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.selected_index = 0;
            HandleResult::Continue
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.selected_index = app.list_len().saturating_sub(1);
            HandleResult::Continue
        }

        KeyCode::Char('/') => {
            app.open_search();
            HandleResult::Continue
        }
        KeyCode::Char('f') => {
            app.cycle_filter();
            HandleResult::Continue
        }
        KeyCode::Char('s') => {
            app.enter_client_filter();
            HandleResult::Continue
        }
        KeyCode::Esc => {
            app.clear_status();
            HandleResult::Continue
        }

        _ => HandleResult::Continue,
    }
}

/// Handle keys while the search overlay is open
fn handle_search_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc => {
            app.dismiss_search();
        }
        KeyCode::Enter => {
            app.confirm_search();
        }
        KeyCode::Down => app.overlay.select_next(),
        KeyCode::Up => app.overlay.select_prev(),
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.overlay.select_next()
        }
        KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.overlay.select_prev()
        }
        KeyCode::Backspace => {
            app.search_backspace();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_insert(c);
        }
        _ => {}
    }
    HandleResult::Continue
}

/// Handle keys in the clients filter box
fn handle_client_filter(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc => app.exit_client_filter(true),
        KeyCode::Enter => app.exit_client_filter(false),
        KeyCode::Backspace => app.client_filter_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.client_filter_insert(c)
        }
        _ => {}
    }
    HandleResult::Continue
}
