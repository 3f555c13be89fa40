//! Session token persistence.
//!
//! Load priority: OS keychain → `UPDAHD_AUTH__TOKEN` env → `~/.updahd/credentials`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "updahd-cli";
const KEYRING_USER: &str = "clerk-jwt";
const TOKEN_ENV_VAR: &str = "UPDAHD_AUTH__TOKEN";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Where the current token was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

/// Returns the keyring service name.
///
/// Override via `UPDAHD_KEYRING_SERVICE` (e.g., `"updahd-cli-test"`) to keep
/// tests away from real credentials.
fn keyring_service() -> String {
    std::env::var("UPDAHD_KEYRING_SERVICE").unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Store a JWT in the OS keychain. Falls back to file if keyring unavailable.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if both keyring and file storage fail.
pub fn store(jwt: &str) -> Result<(), AuthError> {
    match keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        Ok(entry) => match entry.set_password(jwt) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                store_file(&credentials_path()?, jwt)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            store_file(&credentials_path()?, jwt)
        }
    }
}

/// Load a JWT from the first tier that has one.
#[must_use]
pub fn load() -> Option<String> {
    load_with_source().map(|(token, _)| token)
}

/// Load a JWT together with the tier it came from.
#[must_use]
pub fn load_with_source() -> Option<(String, TokenSource)> {
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && let Ok(token) = entry.get_password()
        && !token.is_empty()
    {
        return Some((token, TokenSource::Keyring));
    }

    if let Ok(token) = std::env::var(TOKEN_ENV_VAR)
        && !token.is_empty()
    {
        return Some((token, TokenSource::Env));
    }

    let path = credentials_path().ok()?;
    load_file(&path).map(|token| (token, TokenSource::File))
}

/// Delete stored credentials from keyring and file.
///
/// An env-provided token is left alone; it is not ours to clear.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        let _ = entry.delete_credential();
    }
    delete_file(&credentials_path()?)
}

fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".updahd").join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found — cannot store credentials".into())
        })
}

fn store_file(path: &Path, jwt: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, jwt)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

fn load_file(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn delete_file(path: &Path) -> Result<(), AuthError> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_path_is_under_home() {
        let path = credentials_path().expect("should resolve");
        assert!(path.ends_with(".updahd/credentials"));
    }

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let creds_path = tmp.path().join("nested").join("credentials");

        store_file(&creds_path, "test_jwt_abc123").expect("store");
        assert_eq!(load_file(&creds_path).as_deref(), Some("test_jwt_abc123"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&creds_path)
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "credentials file should be 0600");
        }

        delete_file(&creds_path).expect("delete");
        assert!(!creds_path.exists());
        delete_file(&creds_path).expect("deleting a missing file is fine");
    }

    #[test]
    fn load_file_ignores_whitespace_only_content() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let creds_path = tmp.path().join("credentials");

        fs::write(&creds_path, "   \n  ").expect("write");
        assert!(load_file(&creds_path).is_none());
    }

    #[test]
    fn token_source_labels() {
        assert_eq!(TokenSource::Keyring.as_str(), "keyring");
        assert_eq!(TokenSource::Env.as_str(), "env");
        assert_eq!(TokenSource::File.as_str(), "file");
    }
}
