use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;
use base64::{Engine as _, engine::general_purpose};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::AppState;
use crate::config::TurnSettings;
use crate::models::TurnCreds;

/// Default credential lifetime (1 hour).
pub const DEFAULT_TURN_TTL_SECS: i64 = 3600;

/// Derive time-limited TURN credentials for `identity`.
///
/// Pure function of its inputs: `now` is injected so issuance is
/// deterministic under test. The `"{expiry}:{identity}"` username layout and
/// the HMAC-SHA1 digest are the TURN REST credential wire contract — the
/// relay server recomputes the MAC to verify, so neither the delimiter, the
/// field order, nor the hash can change without updating the relay too.
/// SHA-1 is an interop requirement here, not a security choice.
pub fn generate_turn_credentials(
    settings: &TurnSettings,
    identity: &str,
    now: DateTime<Utc>,
) -> TurnCreds {
    let expiration = now + Duration::seconds(settings.ttl_secs);
    let username = format!("{}:{}", expiration.timestamp(), identity);

    let mut mac = Hmac::<Sha1>::new_from_slice(settings.secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(username.as_bytes());
    let credential = general_purpose::STANDARD.encode(mac.finalize().into_bytes());

    TurnCreds {
        urls: settings.urls.clone(),
        username,
        credential,
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/turn-credentials", get(get::get_turn_credentials))
}

mod get {

    use axum::{Json, extract::State, http::StatusCode};

    use super::*;

    pub async fn get_turn_credentials(State(state): State<AppState>) -> impl IntoResponse {
        let creds = generate_turn_credentials(&state.turn, &state.turn.identity, Utc::now());
        (StatusCode::OK, Json(creds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(secret: &str) -> TurnSettings {
        TurnSettings {
            secret: secret.to_string(),
            urls: vec!["turn:turn.example.com:3478?transport=udp".to_string()],
            ttl_secs: DEFAULT_TURN_TTL_SECS,
            identity: "webuser".to_string(),
        }
    }

    fn at(unix_secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(unix_secs, 0).expect("valid timestamp")
    }

    #[test]
    fn username_encodes_expiry_then_identity() {
        let now = at(1_700_000_000);
        let creds = generate_turn_credentials(&settings("s"), "alice", now);
        assert!(creds.username.starts_with("1700003600:"));
        assert!(creds.username.ends_with("alice"));
        assert_eq!(creds.username, "1700003600:alice");
    }

    #[test]
    fn known_vector_matches_relay_side_derivation() {
        // HMAC-SHA1("test-shared-secret", "1700003600:webuser"), base64.
        let creds =
            generate_turn_credentials(&settings("test-shared-secret"), "webuser", at(1_700_000_000));
        assert_eq!(creds.username, "1700003600:webuser");
        assert_eq!(creds.credential, "41iJ7h1NUaVa36VlP2uhz+U/bbg=");
    }

    #[test]
    fn issuance_is_deterministic() {
        let now = at(1_700_000_000);
        let a = generate_turn_credentials(&settings("secret"), "webuser", now);
        let b = generate_turn_credentials(&settings("secret"), "webuser", now);
        assert_eq!(a, b);
    }

    #[test]
    fn different_secrets_yield_different_credentials() {
        let now = at(1_700_000_000);
        let a = generate_turn_credentials(&settings("secret-one"), "webuser", now);
        let b = generate_turn_credentials(&settings("secret-two"), "webuser", now);
        assert_eq!(a.username, b.username);
        assert_ne!(a.credential, b.credential);
    }

    #[test]
    fn credential_is_base64_of_sha1_digest() {
        let creds = generate_turn_credentials(&settings("secret"), "webuser", at(1_700_000_000));
        let raw = general_purpose::STANDARD
            .decode(&creds.credential)
            .expect("credential is valid base64");
        assert_eq!(raw.len(), 20);
    }

    #[test]
    fn ttl_shifts_expiry() {
        let mut s = settings("secret");
        s.ttl_secs = 600;
        let creds = generate_turn_credentials(&s, "webuser", at(1_700_000_000));
        assert_eq!(creds.username, "1700000600:webuser");
    }
}
