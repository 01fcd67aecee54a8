//! Network messages - communication between App and Network layers

use crate::models::Response;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkCommand {
    /// Run the HTTP client with these arguments
    ExecuteRequest {
        id: u64,
        args: Vec<String>,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkResponse {
    /// The client process finished, successfully or not
    Completed {
        id: u64,
        response: Response,
    },
}
