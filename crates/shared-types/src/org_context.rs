use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::Organization;

/// Storage key for the persisted selection.
pub const ACTIVE_ORG_KEY: &str = "active-organization";

const STATE_VERSION: u32 = 1;

/// Key/value persistence used by client-side stores.
pub trait ContextStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AppError>;
    fn save(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// In-process storage. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AppError> {
        self.entries
            .lock()
            .map_err(|_| AppError::storage("memory storage lock poisoned"))
    }
}

impl ContextStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

/// One JSON file per key inside `dir`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates `dir` if it does not exist yet.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl ContextStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// The organization the admin is currently working in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ActiveOrganization {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub selected_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
struct PersistedState {
    version: u32,
    state: Option<ActiveOrganization>,
}

/// Active-organization context, rehydrated from and written through to
/// a [`ContextStorage`] backend.
pub struct OrgContextStore<S: ContextStorage> {
    storage: S,
    active: Option<ActiveOrganization>,
}

impl<S: ContextStorage> OrgContextStore<S> {
    /// Rehydrate from storage. Unreadable or foreign-version data is
    /// dropped and the store starts empty.
    pub fn open(storage: S) -> Result<Self, AppError> {
        let active = match storage.load(ACTIVE_ORG_KEY)? {
            None => None,
            Some(raw) => match serde_json::from_str::<PersistedState>(&raw) {
                Ok(persisted) if persisted.version == STATE_VERSION => persisted.state,
                Ok(persisted) => {
                    tracing::warn!(
                        version = persisted.version,
                        "Discarding active organization from unsupported store version"
                    );
                    None
                }
                Err(e) => {
                    tracing::warn!(%e, "Discarding unreadable active organization state");
                    None
                }
            },
        };
        Ok(Self { storage, active })
    }

    pub fn active(&self) -> Option<&ActiveOrganization> {
        self.active.as_ref()
    }

    pub fn is_active(&self, id: Uuid) -> bool {
        self.active.as_ref().is_some_and(|a| a.id == id)
    }

    /// Make `org` the active organization and persist it.
    pub fn select(
        &mut self,
        org: &Organization,
        now: DateTime<Utc>,
    ) -> Result<&ActiveOrganization, AppError> {
        let next = ActiveOrganization {
            id: org.id,
            name: org.name.clone(),
            slug: org.slug.clone(),
            selected_at: now,
        };
        self.persist(Some(&next))?;
        tracing::debug!(org_id = %org.id, slug = %org.slug, "Active organization selected");
        let active: &ActiveOrganization = self.active.insert(next);
        Ok(active)
    }

    /// Forget the selection, in memory and in storage.
    pub fn clear(&mut self) -> Result<(), AppError> {
        self.storage.remove(ACTIVE_ORG_KEY)?;
        self.active = None;
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self, state: Option<&ActiveOrganization>) -> Result<(), AppError> {
        let payload = serde_json::to_string(&PersistedState {
            version: STATE_VERSION,
            state: state.cloned(),
        })
        .map_err(|e| AppError::internal(format!("Failed to serialize store: {e}")))?;
        self.storage.save(ACTIVE_ORG_KEY, &payload)
    }
}
