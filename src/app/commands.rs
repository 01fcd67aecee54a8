//! Command handlers - business logic for processing UI events

use crossterm::event::KeyEvent;

use crate::app::focus::Tab;
use crate::app::AppState;
use crate::curl;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::Response;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_region(&mut self) {
        self.focus.next_region();
        self.sync_focus();
    }

    pub fn prev_region(&mut self) {
        self.focus.prev_region();
        self.sync_focus();
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.focus.select_tab(tab);
        self.sync_focus();
    }

    /// Select `tab`; the key that chose it is then typed into the field it focuses
    pub fn jump_to_tab(&mut self, tab: Tab, key: &KeyEvent) {
        self.select_tab(tab);
        self.handle_input(key);
    }

    // ========================
    // HTTP Method
    // ========================

    pub fn next_method(&mut self) {
        self.method = self.method.next();
    }

    pub fn prev_method(&mut self) {
        self.method = self.method.prev();
    }

    // ========================
    // Headers
    // ========================

    pub fn prev_header_field(&mut self) {
        self.focus.header_up();
        self.sync_focus();
    }

    pub fn next_header_field(&mut self) {
        self.focus.header_down(self.headers.len());
        self.sync_focus();
    }

    /// Append an empty row and move focus to its key
    pub fn add_header(&mut self) {
        let row = self.headers.append();
        self.focus.focus_header_key(row);
        self.sync_focus();
    }

    // ========================
    // Input editing
    // ========================

    /// Route an editing key to the focused field; no-op when none is focused
    pub fn handle_input(&mut self, key: &KeyEvent) {
        if let Some(input) = self.focused_input_mut() {
            input.update(key);
        }
    }

    // ========================
    // Response scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        self.response_scroll = self.response_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.response_scroll = self.response_scroll.saturating_add(1);
    }

    // ========================
    // Request sending
    // ========================

    /// Switch to the response tab and build the client invocation.
    ///
    /// Validation failures land in `response` straight away and produce
    /// no command.
    pub fn prepare_request(&mut self) -> Option<NetworkCommand> {
        self.select_tab(Tab::Response);

        match curl::build_args(&self.request()) {
            Ok(args) => {
                let id = self.next_id();
                self.in_flight += 1;
                Some(NetworkCommand::ExecuteRequest { id, args })
            }
            Err(err) => {
                tracing::warn!(error = %err, "Request rejected");
                self.response = Response::failed(err);
                self.response_scroll = 0;
                None
            }
        }
    }

    // ========================
    // Response handling
    // ========================

    /// Replace the response with whichever request finished last
    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::Completed { id, response } => {
                tracing::debug!(id, failed = response.error.is_some(), "Applying response");
                self.in_flight = self.in_flight.saturating_sub(1);
                self.response = response;
                self.response_scroll = 0;
            }
        }
    }
}
