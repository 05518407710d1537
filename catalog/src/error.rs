//! Error types for the catalog feature.

use thiserror::Error;

/// Failure signaled by a gateway call.
///
/// The controller treats every variant identically: the rendered message
/// replaces the inline error slot and the previously loaded shops stay
/// visible. `Rejected` displays the server-facing wording verbatim, with no
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Network or transport failure before a response arrived
    #[error("request failed: {0}")]
    Transport(String),

    /// The response arrived but could not be decoded into the typed records
    #[error("malformed response: {0}")]
    Decode(String),

    /// The server answered with a non-success result
    #[error("{0}")]
    Rejected(String),
}

/// Form-level validation failure for a shop creation payload.
///
/// Surfaced inline by the creation form, never by the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShopValidationError {
    /// Shop name is empty
    #[error("Shop Name is required")]
    NameRequired,

    /// Shop name does not contain the required "Toko" keyword
    #[error("Toko harus punya kata Toko")]
    NameMissingKeyword,

    /// Admin email is empty
    #[error("Admin Email is required")]
    EmailRequired,

    /// Admin email does not look like an address
    #[error("Invalid email address")]
    EmailInvalid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_is_rendered_verbatim() {
        let error = GatewayError::Rejected("Failed to fetch shops.".to_string());
        assert_eq!(error.to_string(), "Failed to fetch shops.");
    }

    #[test]
    fn transport_and_decode_are_prefixed() {
        assert_eq!(
            GatewayError::Transport("connection refused".into()).to_string(),
            "request failed: connection refused"
        );
        assert_eq!(
            GatewayError::Decode("missing field `shops`".into()).to_string(),
            "malformed response: missing field `shops`"
        );
    }
}
