use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

// 1. CredentialStore Contract

/// CredentialStore
///
/// Defines the abstract contract for durable bearer-credential storage. This
/// trait allows us to swap the concrete implementation — the on-disk store
/// (FileCredentialStore) in production and the in-memory store
/// (MemoryCredentialStore) during testing — without affecting the session
/// store or the HTTP client.
///
/// Failure policy (deliberate, not an oversight): unavailable or unreadable
/// storage is treated identically to "no credential". `load` never errors,
/// and `store`/`clear` failures are logged and swallowed, so storage trouble
/// can never take down an otherwise healthy session flow.
pub trait CredentialStore: Send + Sync {
    /// Reads the persisted credential. Returns None when absent, empty, or
    /// unreadable.
    fn load(&self) -> Option<String>;

    /// Persists the credential. Best-effort; failures are logged, not raised.
    fn store(&self, token: &str);

    /// Deletes the persisted credential. Best-effort and idempotent.
    fn clear(&self);
}

/// CredentialState
///
/// The concrete type used to share credential storage access across the
/// session store and the HTTP client.
pub type CredentialState = Arc<dyn CredentialStore>;

// 2. The Real Implementation (Filesystem)

/// FileCredentialStore
///
/// The durable implementation: one file at a configured path holding the raw
/// token string. The file is a shared, unsynchronized resource; concurrent
/// processes sharing it can race, which is an accepted out-of-scope concern.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            // Absent file is the common case; anything else still coerces to
            // "no credential" per the storage-failure policy.
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    tracing::warn!("credential read failed, treating as absent: {e}");
                }
                None
            }
        }
    }

    fn store(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!("credential dir creation failed: {e}");
                return;
            }
        }
        if let Err(e) = fs::write(&self.path, token) {
            tracing::warn!("credential write failed: {e}");
        }
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!("credential delete failed: {e}");
            }
        }
    }
}

// 3. The Mock Implementation (For Unit Tests)

/// MemoryCredentialStore
///
/// An in-memory implementation of `CredentialStore` used for unit and
/// integration testing. Supports an "unreadable storage" mode to exercise the
/// coerce-to-absent failure policy.
#[derive(Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
    /// When true, all reads behave as if storage were unavailable.
    unreadable: bool,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
            unreadable: false,
        }
    }

    pub fn new_unreadable() -> Self {
        Self {
            token: Mutex::new(None),
            unreadable: true,
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<String> {
        if self.unreadable {
            return None;
        }
        // A poisoned lock is treated as unavailable storage.
        self.token.lock().ok().and_then(|guard| guard.clone())
    }

    fn store(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}
