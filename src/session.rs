//! Authentication session persistence.
//!
//! The signed-in user and their API token live in an explicit [`Session`]
//! handed to whoever needs it, and are persisted through a [`SessionStore`].

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SESSION_PATH_VAR: &str = "ADMIN_SESSION_PATH";
const DEFAULT_SESSION_PATH: &str = "./.admin-session.json";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to access session file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Session data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A signed-in user and their bearer token.
#[derive(Debug)]
pub struct Session {
    pub token: SecretString,
    pub user: SessionUser,
}

impl Session {
    pub fn new(token: SecretString, user: SessionUser) -> Self {
        Self { token, user }
    }

    fn duplicate(&self) -> Self {
        Self::new(
            SecretString::new(self.token.expose_secret().into()),
            self.user.clone(),
        )
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token.expose_secret())
    }
}

/// On-disk shape of a session, written straight from a borrowed [`Session`].
#[derive(Serialize)]
struct SessionRecord<'a> {
    token: &'a str,
    user: &'a SessionUser,
}

impl<'a> From<&'a Session> for SessionRecord<'a> {
    fn from(session: &'a Session) -> Self {
        Self {
            token: session.token.expose_secret(),
            user: &session.user,
        }
    }
}

/// On-disk shape of a session, as read back.
#[derive(Deserialize)]
struct StoredSession {
    token: String,
    user: SessionUser,
}

impl From<StoredSession> for Session {
    fn from(stored: StoredSession) -> Self {
        Session::new(SecretString::new(stored.token.into()), stored.user)
    }
}

/// Load/save/clear lifecycle of the current session.
pub trait SessionStore {
    /// Returns `None` when nobody is signed in.
    fn load(&self) -> Result<Option<Session>, SessionError>;
    fn save(&self, session: &Session) -> Result<(), SessionError>;
    /// Signing out. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Stores the session as JSON in a file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Uses `ADMIN_SESSION_PATH`, or `./.admin-session.json` when unset.
    pub fn from_env() -> Self {
        Self::new(get_session_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Returns the session file path.
///
/// Priority:
/// 1. Environment variable `ADMIN_SESSION_PATH`
/// 2. Default path `./.admin-session.json`
pub fn get_session_path() -> PathBuf {
    std::env::var(SESSION_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_PATH))
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let stored: StoredSession = serde_json::from_str(&content).inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Session file {:?} is corrupt: {}", self.path, _e);
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Session loaded for user {}", stored.user.username);

        Ok(Some(stored.into()))
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        let json = serde_json::to_string(&SessionRecord::from(session))?;
        write_private(&self.path, json.as_bytes())?;

        #[cfg(feature = "tracing")]
        tracing::info!("Session saved for user {}", session.user.username);

        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                #[cfg(feature = "tracing")]
                tracing::info!("Session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Writes `contents` to `path`, readable by the owner only on unix.
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use std::io::Write;

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    std::os::unix::fs::OpenOptionsExt::mode(&mut options, 0o600);

    let mut file = options.open(path)?;
    // mode only applies on creation
    #[cfg(unix)]
    file.set_permissions(std::os::unix::fs::PermissionsExt::from_mode(0o600))?;
    file.write_all(contents)
}

/// Keeps the session in memory only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        let guard = self.slot.read().unwrap_or_else(|e| e.into_inner());
        Ok(guard.as_ref().map(Session::duplicate))
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        let mut guard = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(session.duplicate());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut guard = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        Ok(())
    }
}
