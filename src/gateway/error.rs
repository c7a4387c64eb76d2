//! # Gateway Errors
//!
//! This module defines the common error type used by every remote
//! operation. By centralizing the definition, the controller can treat
//! all remote failures uniformly as displayable state.

use thiserror::Error;

/// Errors produced by the remote gateway.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    /// The service answered outside the 2xx range, or a 2xx body could not
    /// be parsed as the expected JSON shape. `message` carries the response
    /// body text (or a generic message when the body was empty).
    #[error("request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    /// The request never produced an HTTP status (connect failure, DNS,
    /// broken connection).
    #[error("transport error: {0}")]
    Transport(String),
}

impl GatewayError {
    /// Builds a [`GatewayError::RequestFailed`] from a status code and the
    /// raw response body, substituting a generic message when the body is
    /// empty.
    pub fn from_response(status: u16, body: String) -> Self {
        let message = if body.trim().is_empty() {
            format!("Request failed ({status})")
        } else {
            body
        };
        GatewayError::RequestFailed { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_gets_generic_message() {
        let err = GatewayError::from_response(502, String::new());
        assert_eq!(
            err,
            GatewayError::RequestFailed {
                status: 502,
                message: "Request failed (502)".to_string(),
            }
        );
    }

    #[test]
    fn body_text_is_preserved() {
        let err = GatewayError::from_response(500, "payment declined".to_string());
        assert_eq!(err.to_string(), "request failed (500): payment declined");
    }
}
