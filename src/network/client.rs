//! Client runner - executes the HTTP client and classifies its output

use std::io;
use std::process::{ExitStatus, Output, Stdio};
use std::time::Instant;

use tokio::process::Command;

use crate::models::{RequestError, Response};

/// Run `program` with `args`, capturing stdout and stderr to completion
pub async fn execute_request(program: &str, args: &[String]) -> Response {
    let start = Instant::now();

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .await;

    let mut response = response_from_output(output);
    response.time_ms = start.elapsed().as_millis() as u64;
    response
}

/// Failed exit wins over stderr; stderr on a clean exit is still an error.
/// The body is stdout in every case.
fn response_from_output(output: io::Result<Output>) -> Response {
    let output = match output {
        Ok(output) => output,
        Err(e) => return Response::failed(RequestError::ProcessFailed(e.to_string())),
    };

    let body = String::from_utf8_lossy(&output.stdout).into_owned();

    let error = if !output.status.success() {
        Some(RequestError::ProcessFailed(describe_status(&output.status)))
    } else if !output.stderr.is_empty() {
        Some(RequestError::Diagnostic(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    } else {
        None
    };

    Response {
        body,
        error,
        time_ms: 0,
    }
}

fn describe_status(status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit status {}", code),
        None => String::from("terminated by signal"),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    async fn sh(script: &str) -> Response {
        execute_request("sh", &["-c".to_string(), script.to_string()]).await
    }

    #[tokio::test]
    async fn test_clean_exit_is_success() {
        let response = sh("printf '{\"ok\":true}'").await;
        assert_eq!(response.body, "{\"ok\":true}");
        assert_eq!(response.error, None);
    }

    #[tokio::test]
    async fn test_stderr_on_clean_exit_is_error() {
        let response = sh("printf out; printf 'warning: odd\\n' >&2").await;
        assert_eq!(response.body, "out");
        assert_eq!(
            response.error,
            Some(RequestError::Diagnostic("warning: odd\n".to_string()))
        );
    }

    #[tokio::test]
    async fn test_nonzero_exit_keeps_partial_body() {
        let response = sh("printf partial; printf noise >&2; exit 6").await;
        assert_eq!(response.body, "partial");
        assert_eq!(
            response.error.map(|e| e.to_string()),
            Some("request failed: exit status 6".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_binary_fails() {
        let response = execute_request("curlman-no-such-binary", &[]).await;
        assert_eq!(response.body, "");
        match response.error {
            Some(RequestError::ProcessFailed(reason)) => assert!(!reason.is_empty()),
            other => panic!("expected process failure, got {:?}", other),
        }
    }
}
