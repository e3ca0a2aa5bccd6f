//! Response values and wire framing.

use std::fmt;

/// Outcome of one command as returned by a [`crate::CommandHandler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Framed with `=`.
    Success(String),
    /// Framed with `?`. The body is a human-readable error message.
    Failure(String),
    /// Written to the output as-is, without status, id or newlines.
    ///
    /// Only for handlers that simulate broken GTP peers.
    Raw(String),
}

impl Response {
    pub fn success(body: impl Into<String>) -> Self {
        Response::Success(body.into())
    }

    pub fn failure(body: impl Into<String>) -> Self {
        Response::Failure(body.into())
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Response::Raw(text.into())
    }

    /// The text sent to the peer, without the final line terminator.
    pub fn wire_text(&self, id: Option<i32>) -> String {
        match self {
            Response::Success(body) => format_response(true, id, body),
            Response::Failure(body) => format_response(false, id, body),
            Response::Raw(text) => text.clone(),
        }
    }
}

impl<E: fmt::Display> From<Result<String, E>> for Response {
    fn from(result: Result<String, E>) -> Self {
        match result {
            Ok(body) => Response::Success(body),
            Err(e) => Response::Failure(e.to_string()),
        }
    }
}

/// Frame a response: status character, optional id, a space, the body, and a
/// newline unless the body already ends with one.
pub fn format_response(success: bool, id: Option<i32>, body: &str) -> String {
    let mut full = String::with_capacity(body.len() + 16);
    full.push(if success { '=' } else { '?' });
    if let Some(id) = id {
        full.push_str(&id.to_string());
    }
    full.push(' ');
    full.push_str(body);
    if !body.ends_with('\n') {
        full.push('\n');
    }
    full
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_success() {
        assert_eq!(format_response(true, Some(7), "hi"), "=7 hi\n");
        assert_eq!(format_response(true, None, "hi"), "= hi\n");
    }

    #[test]
    fn test_format_failure() {
        assert_eq!(format_response(false, Some(3), "bad"), "?3 bad\n");
    }

    #[test]
    fn test_no_double_newline() {
        assert_eq!(format_response(true, None, "a\nb\n"), "= a\nb\n");
        assert_eq!(format_response(true, None, ""), "= \n");
    }

    #[test]
    fn test_wire_text() {
        assert_eq!(Response::failure("x").wire_text(Some(0)), "?0 x\n");
        assert_eq!(Response::raw("garbage").wire_text(Some(1)), "garbage");
    }

    #[test]
    fn test_from_result() {
        let ok: Result<String, gtp_core::ParseError> = Ok("D4".into());
        assert_eq!(Response::from(ok), Response::success("D4"));

        let err: Result<String, gtp_core::ParseError> =
            Err(gtp_core::ParseError::MissingArgument("color"));
        assert_eq!(Response::from(err), Response::failure("Missing color argument"));
    }
}
