use std::io::{Read, Write};
use std::net::TcpListener;
use std::process::Command;
use std::thread;

use curlman::network::client::execute_request;
use curlman::{build_args, Header, HttpMethod, Request, RequestError};

fn curl_available() -> bool {
    Command::new("curl")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Keep loopback traffic away from any configured proxy
fn bypass_proxy() {
    std::env::set_var("NO_PROXY", "127.0.0.1");
    std::env::set_var("no_proxy", "127.0.0.1");
}

/// Accept one connection and answer with the raw request as the body
fn spawn_echo_server() -> String {
    bypass_proxy();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut received = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);
            if let Some(end) = header_end(&received) {
                if received.len() >= end + content_length(&received[..end]) {
                    break;
                }
            }
        }

        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            received.len()
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(&received).unwrap();
    });

    format!("http://{}/anything", addr)
}

fn header_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}

fn content_length(head: &[u8]) -> usize {
    String::from_utf8_lossy(head)
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.trim().eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

#[test]
fn test_empty_url_never_reaches_curl() {
    let request = Request {
        url: "   ".to_string(),
        ..Request::default()
    };
    let err = build_args(&request).unwrap_err();
    assert_eq!(err, RequestError::EmptyUrl);
    assert!(err.to_string().contains("URL cannot be empty"));
}

#[tokio::test]
async fn test_get_sends_headers() {
    if !curl_available() {
        println!("curl not installed, skipping");
        return;
    }
    let url = spawn_echo_server();

    let request = Request {
        method: HttpMethod::GET,
        url,
        headers: vec![Header::new("Test-Key", "123"), Header::new("  ", "skipped")],
        body: "ignored for GET".to_string(),
    };
    let args = build_args(&request).unwrap();
    let response = execute_request("curl", &args).await;

    assert_eq!(response.error, None, "body: {}", response.body);
    assert!(response.body.starts_with("GET /anything HTTP/1.1"));
    assert!(response.body.contains("Test-Key: 123"));
    assert!(!response.body.contains("skipped"));
    assert!(!response.body.contains("ignored for GET"));
}

#[tokio::test]
async fn test_post_sends_body() {
    if !curl_available() {
        println!("curl not installed, skipping");
        return;
    }
    let url = spawn_echo_server();

    let request = Request {
        method: HttpMethod::POST,
        url,
        headers: vec![Header::new("Content-Type", "application/json")],
        body: "{\"foo\":\"bar\"}".to_string(),
    };
    let args = build_args(&request).unwrap();
    let response = execute_request("curl", &args).await;

    assert_eq!(response.error, None, "body: {}", response.body);
    assert!(response.body.starts_with("POST /anything HTTP/1.1"));
    assert!(response.body.contains("Content-Type: application/json"));
    assert!(response.body.ends_with("{\"foo\":\"bar\"}"));
}

#[tokio::test]
async fn test_unreachable_host_is_process_failure() {
    if !curl_available() {
        println!("curl not installed, skipping");
        return;
    }
    bypass_proxy();
    // Bind then drop to get a port nothing listens on
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let request = Request {
        url: format!("http://127.0.0.1:{}/", port),
        ..Request::default()
    };
    let response = execute_request("curl", &build_args(&request).unwrap()).await;

    assert_eq!(response.body, "");
    assert_eq!(
        response.error.map(|e| e.to_string()),
        Some("request failed: exit status 7".to_string())
    );
}
