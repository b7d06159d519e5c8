//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Rolodex library and
//! the Zellij plugin system. It is the only place that talks to the host:
//! Zellij events are mapped to library [`Event`]s, and the [`Action`]s the
//! library returns are executed as host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize logging, create `AppState`
//! 2. **Permissions**: Request web access, subscribe to Key, Mouse,
//!    `WebRequestResult` and `PermissionRequestResult`
//! 3. **Fetch**: On grant, issue the single profile batch `web_request`
//! 4. **Update**: Map events, delegate to the library, execute actions
//! 5. **Render**: Record the pane size, call the library renderer
//!
//! # Event Mapping
//!
//! - `PermissionRequestResult` → `Event::PermissionsGranted` / `PermissionsDenied`
//! - `WebRequestResult` (our context only) → `Event::ProfilesFetched`
//! - `Mouse(LeftClick)` → `Event::Click` (1-indexed cell)
//! - `Mouse(ScrollUp/Down)` → `Event::ScrollUp` / `ScrollDown`
//!
//! # Keybindings
//!
//! In normal mode:
//! - `h`/`j`/`k`/`l` or arrows: Move between cards
//! - `Enter`: Open the selected card
//! - `/`: Focus the search bar
//! - `q`: Close plugin
//!
//! While typing a search:
//! - Characters: Filter the gallery
//! - `Enter`: Browse the matching cards
//! - `Esc`: Clear the search
//!
//! With the modal open:
//! - `h`/`Left`: Previous profile
//! - `l`/`Right`: Next profile
//! - `Esc`/`x`/`q`: Close the modal

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use rolodex::client::FetchRequest;
use rolodex::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

struct State {
    app: rolodex::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: rolodex::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        rolodex::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(
            api_url = %config.api_url,
            results = config.results,
            navigation = ?config.navigation,
            "parsed configuration"
        );
        self.app = rolodex::initialize(&config);

        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::ChangeApplicationState,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                if !FetchRequest::is_profile_response(&context) {
                    tracing::debug!(status = status, "ignoring unrelated web response");
                    return false;
                }
                tracing::debug!(status = status, body_len = body.len(), "profile response received");
                Event::ProfilesFetched { status, body }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => match permissions {
                PermissionStatus::Granted => Event::PermissionsGranted,
                PermissionStatus::Denied => Event::PermissionsDenied,
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        rolodex::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if self.app.modal.is_open() {
            return match key.bare_key {
                BareKey::Left | BareKey::Char('h') => Some(Event::ModalPrev),
                BareKey::Right | BareKey::Char('l') => Some(Event::ModalNext),
                BareKey::Esc | BareKey::Char('x' | 'q') => Some(Event::ModalClose),
                _ => None,
            };
        }

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        if self.app.input_mode.is_typing() {
            return Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::SubmitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            });
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Left | BareKey::Char('h') => Event::KeyLeft,
            BareKey::Right | BareKey::Char('l') => Event::KeyRight,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::Escape,
            },
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Char('q') if self.app.input_mode == InputMode::Normal => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let row = usize::try_from(line).ok()? + 1;
                Some(Event::Click { row, col: col + 1 })
            }
            Mouse::ScrollUp(_) => Some(Event::ScrollUp),
            Mouse::ScrollDown(_) => Some(Event::ScrollDown),
            _ => None,
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchProfiles(request) => {
                let mut headers = BTreeMap::new();
                headers.insert("Accept".to_string(), "application/json".to_string());

                tracing::info!(url = %request.url, "issuing profile batch request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    headers,
                    vec![],
                    request.context.clone(),
                );
            }
        }
    }
}
