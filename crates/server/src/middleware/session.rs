//! Session middleware configuration.
//!
//! Sets up in-memory sessions with signed cookies using tower-sessions.
//! Session state lives server-side; the cookie carries only the signed
//! session id.

use secrecy::ExposeSecret;
use tower_sessions::cookie::{Key, KeyError, SameSite, time::Duration};
use tower_sessions::service::SignedCookie;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::Config;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "llsp_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer with an in-memory store.
///
/// # Errors
///
/// Returns `KeyError` if the configured session secret cannot derive a
/// signing key (config validation already requires the minimum length).
pub fn create_session_layer(
    config: &Config,
) -> Result<SessionManagerLayer<MemoryStore, SignedCookie>, KeyError> {
    let store = MemoryStore::default();
    let key = Key::try_from(config.session_secret.expose_secret().as_bytes())?;

    // Secure cookies only when served over HTTPS
    let is_secure = config.base_url.starts_with("https://");

    Ok(SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(
            SESSION_EXPIRY_SECONDS,
        )))
        .with_secure(is_secure)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
        .with_signed(key))
}
