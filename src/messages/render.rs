//! Render state - data structure sent from App layer to UI for rendering

use crate::app::focus::FocusState;
use crate::app::headers::HeaderList;
use crate::app::AppState;
use crate::input::TextInput;
use crate::models::{HttpMethod, Response};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub method: HttpMethod,
    pub url: TextInput,
    pub headers: HeaderList,
    pub body: TextInput,
    pub focus: FocusState,

    pub response: Response,
    pub response_scroll: u16,
    pub is_loading: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        AppState::new().to_render_state()
    }
}
