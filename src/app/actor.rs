//! App actor - message loop processing key presses and network responses

use crossterm::event::KeyEvent;
use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::ui_events::key_to_ui_event;
use crate::messages::{AppMessage, NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that owns the state and serializes every mutation
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop.
    ///
    /// Returns after a quit request; dropping the render sender tells the UI
    /// loop to stop.
    pub async fn run(
        mut self,
        mut key_rx: mpsc::UnboundedReceiver<KeyEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            let message = tokio::select! {
                Some(key) = key_rx.recv() => AppMessage::Key(key),
                Some(response) = net_rx.recv() => AppMessage::Network(response),
                else => break,
            };

            if self.handle_message(message) {
                tracing::info!("Quit requested");
                let _ = self.network_tx.send(NetworkCommand::Shutdown);
                break;
            }
            let _ = self.render_tx.send(self.state.to_render_state());
        }
    }

    /// Handle one message, returns true if quit was requested
    fn handle_message(&mut self, message: AppMessage) -> bool {
        match message {
            AppMessage::Key(key) => match key_to_ui_event(key, &self.state.focus) {
                Some(event) => self.handle_ui_event(event),
                None => false,
            },
            AppMessage::Network(response) => {
                self.state.handle_response(response);
                false
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::NextRegion => self.state.next_region(),
            UiEvent::PrevRegion => self.state.prev_region(),
            UiEvent::PrevMethod => self.state.prev_method(),
            UiEvent::NextMethod => self.state.next_method(),
            UiEvent::SelectTab(tab, key) => self.state.jump_to_tab(tab, &key),
            UiEvent::PrevHeaderField => self.state.prev_header_field(),
            UiEvent::NextHeaderField => self.state.next_header_field(),
            UiEvent::AddHeader => self.state.add_header(),
            UiEvent::ScrollUp => self.state.scroll_up(),
            UiEvent::ScrollDown => self.state.scroll_down(),
            UiEvent::Input(key) => self.state.handle_input(&key),

            UiEvent::SendRequest => {
                if let Some(cmd) = self.state.prepare_request() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            UiEvent::Quit => return true,
        }

        false
    }
}
