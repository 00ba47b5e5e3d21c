//! Sealed session cookie payloads.
//!
//! The relay keeps the CMS bearer token in a single HTTP-only cookie. The
//! cookie value is `base64url(nonce || AES-256-GCM(json))`, keyed by the
//! SHA-256 digest of the configured cookie password. The sealed JSON carries
//! an absolute expiry so a replayed old cookie opens as an empty session.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::CoreError;
use crate::types::DbId;

/// Minimum cookie password length accepted by [`SessionSealer::new`].
pub const MIN_PASSWORD_LENGTH: usize = 32;

/// Default session lifetime: 14 days.
pub const DEFAULT_SESSION_TTL_SECS: i64 = 14 * 24 * 60 * 60;

/// Longest session lifetime accepted: 400 days, the cap browsers apply to
/// cookie expiry.
pub const MAX_SESSION_TTL_SECS: i64 = 400 * 24 * 60 * 60;

const NONCE_LEN: usize = 12;

/// Contents of the session cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwt: Option<String>,
    #[serde(default, rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<DbId>,
}

impl SessionData {
    pub fn new(jwt: impl Into<String>, user_id: Option<DbId>) -> Self {
        Self {
            jwt: Some(jwt.into()),
            user_id,
        }
    }

    /// The bearer token, or `""` when the session holds none.
    pub fn token(&self) -> &str {
        self.jwt.as_deref().unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.token().is_empty()
    }
}

#[derive(Serialize, Deserialize)]
struct SealedPayload {
    exp: i64,
    #[serde(flatten)]
    data: SessionData,
}

/// Seals and opens [`SessionData`] with a key derived from the cookie password.
pub struct SessionSealer {
    cipher: Aes256Gcm,
    ttl_secs: i64,
}

impl std::fmt::Debug for SessionSealer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSealer")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl SessionSealer {
    /// Build a sealer from the cookie password.
    ///
    /// Fails with [`CoreError::Validation`] when the password is shorter than
    /// [`MIN_PASSWORD_LENGTH`] or the TTL is outside
    /// `1..=`[`MAX_SESSION_TTL_SECS`].
    pub fn new(password: &str, ttl_secs: i64) -> Result<Self, CoreError> {
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::Validation(format!(
                "Cookie password must be at least {MIN_PASSWORD_LENGTH} characters long"
            )));
        }
        if ttl_secs <= 0 {
            return Err(CoreError::Validation(
                "Session TTL must be a positive number of seconds".into(),
            ));
        }
        if ttl_secs > MAX_SESSION_TTL_SECS {
            return Err(CoreError::Validation(format!(
                "Session TTL must not exceed {MAX_SESSION_TTL_SECS} seconds"
            )));
        }

        let key = Sha256::digest(password.as_bytes());
        let cipher = Aes256Gcm::new_from_slice(&key)
            .map_err(|e| CoreError::Internal(format!("Failed to create cipher: {e}")))?;

        Ok(Self { cipher, ttl_secs })
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Seal the session into a cookie-safe string.
    pub fn seal(&self, data: &SessionData) -> Result<String, CoreError> {
        self.seal_at(data, chrono::Utc::now().timestamp())
    }

    /// Open a sealed cookie value.
    ///
    /// Any failure (bad encoding, wrong key, tampering, expiry) is reported as
    /// [`CoreError::InvalidSession`]; callers treat that as "no session".
    pub fn unseal(&self, sealed: &str) -> Result<SessionData, CoreError> {
        self.unseal_at(sealed, chrono::Utc::now().timestamp())
    }

    fn seal_at(&self, data: &SessionData, now: i64) -> Result<String, CoreError> {
        let exp = now
            .checked_add(self.ttl_secs)
            .ok_or_else(|| CoreError::Internal("Session expiry overflows".into()))?;
        let payload = SealedPayload {
            exp,
            data: data.clone(),
        };
        let plaintext = serde_json::to_vec(&payload)
            .map_err(|e| CoreError::Internal(format!("Failed to encode session: {e}")))?;

        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::rng().fill_bytes(&mut nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_ref())
            .map_err(|e| CoreError::Internal(format!("Encryption failed: {e}")))?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(&nonce_bytes);
        sealed.extend_from_slice(&ciphertext);
        Ok(URL_SAFE_NO_PAD.encode(sealed))
    }

    fn unseal_at(&self, sealed: &str, now: i64) -> Result<SessionData, CoreError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(sealed.trim())
            .map_err(|e| CoreError::InvalidSession(format!("Malformed cookie value: {e}")))?;
        if bytes.len() <= NONCE_LEN {
            return Err(CoreError::InvalidSession("Cookie value too short".into()));
        }

        let (nonce, ciphertext) = bytes.split_at(NONCE_LEN);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CoreError::InvalidSession("Decryption failed".into()))?;

        let payload: SealedPayload = serde_json::from_slice(&plaintext)
            .map_err(|e| CoreError::InvalidSession(format!("Malformed session payload: {e}")))?;

        if payload.exp <= now {
            return Err(CoreError::InvalidSession("Session expired".into()));
        }
        Ok(payload.data)
    }
}
