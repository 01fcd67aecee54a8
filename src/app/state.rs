//! App state - pure data structure with no I/O logic

use crate::app::focus::{FocusState, Region};
use crate::app::headers::HeaderList;
use crate::constants::{BODY_PLACEHOLDER, URL_PLACEHOLDER};
use crate::input::TextInput;
use crate::messages::RenderState;
use crate::models::{HttpMethod, Request, Response};

/// Main application state - pure data, no I/O
#[derive(Debug, Clone)]
pub struct AppState {
    // Request being composed
    pub method: HttpMethod,
    pub url: TextInput,
    pub headers: HeaderList,
    pub body: TextInput,

    // Navigation
    pub focus: FocusState,

    // Last completed request
    pub response: Response,
    pub response_scroll: u16,

    /// Dispatched requests that have not reported back yet
    pub in_flight: usize,
    pub next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let mut state = AppState {
            method: HttpMethod::GET,
            url: TextInput::new(URL_PLACEHOLDER),
            headers: HeaderList::with_empty_row(),
            body: TextInput::new(BODY_PLACEHOLDER),
            focus: FocusState::default(),
            response: Response::default(),
            response_scroll: 0,
            in_flight: 0,
            next_request_id: 1,
        };
        state.sync_focus();
        state
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Re-derive every input's focus flag from `focus`
    pub fn sync_focus(&mut self) {
        if self.focus.region == Region::Url {
            self.url.focus();
        } else {
            self.url.blur();
        }
        if self.focus.body_active() {
            self.body.focus();
        } else {
            self.body.blur();
        }
        self.headers.sync_focus(self.focus.focused_header());
    }

    /// The text field receiving editing keys, if any
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        if self.focus.region == Region::Url {
            Some(&mut self.url)
        } else if let Some(cell) = self.focus.focused_header() {
            self.headers.cell_mut(cell)
        } else if self.focus.body_active() {
            Some(&mut self.body)
        } else {
            None
        }
    }

    /// Snapshot of the request as currently composed
    pub fn request(&self) -> Request {
        Request {
            method: self.method,
            url: self.url.value().to_string(),
            headers: self.headers.to_headers(),
            body: self.body.value().to_string(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            method: self.method,
            url: self.url.clone(),
            headers: self.headers.clone(),
            body: self.body.clone(),
            focus: self.focus,
            response: self.response.clone(),
            response_scroll: self.response_scroll,
            is_loading: self.is_loading(),
        }
    }
}
