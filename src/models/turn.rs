use serde::{Deserialize, Serialize};

/// Time-limited TURN credentials handed to a peer before connection setup.
///
/// `username` is `"{expiry_unix_seconds}:{identity}"` and `credential` is the
/// base64 HMAC-SHA1 of that string under the shared secret, so the relay
/// server can recompute and verify both fields without any stored state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnCreds {
    pub urls: Vec<String>,
    pub username: String,
    pub credential: String,
}
