//! Network actor - runs `curl` subprocesses in the Tokio runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::curl::to_command_line;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::execute_request;

/// Network actor that turns request commands into client processes
pub struct NetworkActor {
    program: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(
        program: impl Into<String>,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        NetworkActor {
            program: program.into(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::ExecuteRequest { id, args }) => {
                            let response_tx = self.response_tx.clone();
                            let program = self.program.clone();

                            // No timeout and no cancellation: runs until the process exits
                            self.active_requests.spawn(async move {
                                tracing::info!(id, command = %to_command_line(&program, &args), "Executing request");
                                let response = execute_request(&program, &args).await;
                                tracing::info!(
                                    id,
                                    time_ms = response.time_ms,
                                    error = ?response.error,
                                    "Request completed"
                                );
                                let _ = response_tx.send(NetworkResponse::Completed { id, response });
                            });
                        }

                        Some(NetworkCommand::Shutdown) => {
                            tracing::info!(pending = self.active_requests.len(), "Network actor shutting down");
                            break;
                        }

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_executes_and_reports_by_id() {
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let actor = tokio::spawn(NetworkActor::new("sh", resp_tx).run(cmd_rx));

        cmd_tx
            .send(NetworkCommand::ExecuteRequest {
                id: 7,
                args: vec!["-c".to_string(), "printf pong".to_string()],
            })
            .unwrap();

        match resp_rx.recv().await {
            Some(NetworkResponse::Completed { id, response }) => {
                assert_eq!(id, 7);
                assert_eq!(response.body, "pong");
                assert_eq!(response.error, None);
            }
            None => panic!("network actor dropped the response"),
        }

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        actor.await.unwrap();
    }

    #[tokio::test]
    async fn test_stops_when_commands_close() {
        let (resp_tx, _resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
        let actor = tokio::spawn(NetworkActor::new("sh", resp_tx).run(cmd_rx));

        drop(cmd_tx);
        actor.await.unwrap();
    }
}
