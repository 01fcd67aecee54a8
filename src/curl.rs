//! Request builder - turns the composed request into `curl` arguments

use crate::models::{Request, RequestError};

/// Build the argument list for one `curl` invocation.
///
/// Headers whose trimmed key is empty are skipped; everything else is
/// emitted in list order. The body is only attached for methods that
/// carry one, and only when it is not blank.
pub fn build_args(request: &Request) -> Result<Vec<String>, RequestError> {
    let url = request.url.trim();
    if url.is_empty() {
        return Err(RequestError::EmptyUrl);
    }

    let mut args = vec![
        "--silent".to_string(),
        "-X".to_string(),
        request.method.as_str().to_string(),
        url.to_string(),
    ];

    for header in &request.headers {
        let key = header.key.trim();
        let value = header.value.trim();
        if !key.is_empty() {
            args.push("-H".to_string());
            args.push(format!("{}: {}", key, value));
        }
    }

    if request.method.has_body() {
        let body = request.body.trim();
        if !body.is_empty() {
            args.push("--data".to_string());
            args.push(body.to_string());
        }
    }

    Ok(args)
}

/// Format an invocation as a copy-pasteable shell command
pub fn to_command_line(program: &str, args: &[String]) -> String {
    let mut parts = vec![quote(program)];
    parts.extend(args.iter().map(|arg| quote(arg)));
    parts.join(" ")
}

fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@,+%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}
