//! Application state and update logic for the terminal UI.
//!
//! `App` wires the three core state holders together and maps keyboard
//! events to actions. Key routing depends on chat visibility: while the
//! chat sidebar is open, printable keys edit the composed input.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};

use floatchat_core::chat::ChatSession;
use floatchat_core::clock::Clock;
use floatchat_core::config::ExplorerConfig;
use floatchat_core::data;
use floatchat_core::map::MapSelection;
use floatchat_core::view::{Panel, ViewState};

/// Discrete state transitions triggered by user input or the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ShowPanel(Panel),
    ToggleChat,
    CycleLayer,
    SelectNextMarker,
    SelectPrevMarker,
    ClearMarker,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    InputChar(char),
    InputBackspace,
    SubmitInput,
    Tick,
}

pub struct App {
    pub view: ViewState,
    pub chat: ChatSession,
    pub map: MapSelection,
    should_quit: bool,
}

impl App {
    pub fn new(config: &ExplorerConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            view: ViewState::new(),
            chat: ChatSession::new(config.reply_delay(), clock),
            map: MapSelection::new(data::MARKERS, config.default_zoom),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Maps a key press to an action, honoring chat focus.
    pub fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        if self.view.chat_open() {
            return match key.code {
                KeyCode::Esc => Some(Action::ToggleChat),
                KeyCode::Enter => Some(Action::SubmitInput),
                KeyCode::Backspace => Some(Action::InputBackspace),
                KeyCode::Char(c) => Some(Action::InputChar(c)),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('d') => Some(Action::ShowPanel(Panel::Dashboard)),
            KeyCode::Char('m') => Some(Action::ShowPanel(Panel::Map)),
            KeyCode::Tab => Some(Action::ShowPanel(match self.view.active_panel() {
                Panel::Dashboard => Panel::Map,
                Panel::Map => Panel::Dashboard,
            })),
            KeyCode::Char('c') => Some(Action::ToggleChat),
            KeyCode::Char('l') => Some(Action::CycleLayer),
            KeyCode::Char('n') | KeyCode::Down => Some(Action::SelectNextMarker),
            KeyCode::Char('p') | KeyCode::Up => Some(Action::SelectPrevMarker),
            KeyCode::Char('x') => Some(Action::ClearMarker),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::ZoomIn),
            KeyCode::Char('-') => Some(Action::ZoomOut),
            KeyCode::Char('0') => Some(Action::ResetZoom),
            _ => None,
        }
    }

    /// Applies an action. Every transition runs to completion; nothing
    /// here blocks or fails.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ShowPanel(panel) => self.view.set_active_panel(panel),
            Action::ToggleChat => self.view.toggle_chat(),
            Action::CycleLayer => self.map.cycle_layer(),
            Action::SelectNextMarker => self.map.select_next(),
            Action::SelectPrevMarker => self.map.select_prev(),
            Action::ClearMarker => self.map.clear_marker(),
            Action::ZoomIn => self.map.zoom_in(),
            Action::ZoomOut => self.map.zoom_out(),
            Action::ResetZoom => self.map.reset_zoom(),
            Action::InputChar(c) => self.chat.push_char(c),
            Action::InputBackspace => self.chat.backspace(),
            Action::SubmitInput => {
                self.chat.submit_pending();
            }
            Action::Tick => {
                // Due scripted replies surface here; the transcript view
                // follows its tail, which is the scroll-to-latest signal.
                self.chat.poll_replies();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use crossterm::event::KeyModifiers;
    use floatchat_core::chat::MessageRole;
    use floatchat_core::clock::ManualClock;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> (App, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let app = App::new(&ExplorerConfig::default(), clock.clone());
        (app, clock)
    }

    #[test]
    fn test_panel_keys_when_chat_closed() {
        let (app, _clock) = app();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            app.handle_key(key(KeyCode::Char('m'))),
            Some(Action::ShowPanel(Panel::Map))
        );
        assert_eq!(
            app.handle_key(key(KeyCode::Char('c'))),
            Some(Action::ToggleChat)
        );
    }

    #[test]
    fn test_printable_keys_edit_input_while_chat_open() {
        let (mut app, _clock) = app();
        app.update(Action::ToggleChat);
        assert_eq!(
            app.handle_key(key(KeyCode::Char('q'))),
            Some(Action::InputChar('q'))
        );
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Some(Action::ToggleChat));
        assert_eq!(
            app.handle_key(key(KeyCode::Enter)),
            Some(Action::SubmitInput)
        );
    }

    #[test]
    fn test_chat_stays_open_across_panel_switch() {
        let (mut app, _clock) = app();
        app.update(Action::ToggleChat);
        assert!(app.view.chat_open());
        app.update(Action::ShowPanel(Panel::Map));
        assert_eq!(app.view.active_panel(), Panel::Map);
        assert!(app.view.chat_open());
    }

    #[test]
    fn test_typed_submission_gets_a_reply_on_a_later_tick() {
        let (mut app, clock) = app();
        app.update(Action::ToggleChat);
        for c in "hello".chars() {
            app.update(Action::InputChar(c));
        }
        app.update(Action::SubmitInput);
        assert_eq!(app.chat.messages().len(), 2);

        app.update(Action::Tick);
        assert_eq!(app.chat.messages().len(), 2);

        clock.advance(Duration::milliseconds(1000));
        app.update(Action::Tick);
        assert_eq!(app.chat.messages().len(), 3);
        assert_eq!(app.chat.messages()[2].role, MessageRole::Assistant);
    }

    #[test]
    fn test_zoom_actions_stay_clamped() {
        let (mut app, _clock) = app();
        for _ in 0..20 {
            app.update(Action::ZoomIn);
        }
        assert_eq!(app.map.zoom(), 10);
        app.update(Action::ResetZoom);
        assert_eq!(app.map.zoom(), 6);
        for _ in 0..20 {
            app.update(Action::ZoomOut);
        }
        assert_eq!(app.map.zoom(), 1);
    }

    #[test]
    fn test_quit_action_sets_flag() {
        let (mut app, _clock) = app();
        assert!(!app.should_quit());
        app.update(Action::Quit);
        assert!(app.should_quit());
    }
}
