use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::errors::PanelStoreError;
use super::model::{PANEL_STATE_TTL_MS, PanelConfig};

/// Format version of the persisted entry.
pub(crate) const PANEL_STATE_VERSION: u32 = 1;

/// Persisted open/closed snapshot for the panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct PersistedPanelState {
    pub(crate) version: u32,
    pub(crate) is_open: bool,
    pub(crate) saved_at_ms: u64,
}

impl PersistedPanelState {
    /// Snapshot the given open flag at the current wall-clock time.
    pub(crate) fn now(is_open: bool) -> Self {
        Self {
            version: PANEL_STATE_VERSION,
            is_open,
            saved_at_ms: now_ms(),
        }
    }

    /// Whether the snapshot is recent enough to honor.
    pub(crate) fn is_fresh(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.saved_at_ms) < PANEL_STATE_TTL_MS
    }
}

/// Milliseconds since the Unix epoch.
pub(crate) fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// Persistence seam for the single panel state entry.
pub(crate) trait PanelStore: Send + Sync {
    /// Read the stored snapshot, `None` when no entry exists.
    fn load(&self) -> Result<Option<PersistedPanelState>, PanelStoreError>;
    /// Replace the stored snapshot.
    fn save(&self, state: PersistedPanelState) -> Result<(), PanelStoreError>;
    /// Remove the stored snapshot.
    fn clear(&self) -> Result<(), PanelStoreError>;
}

/// Return the default path of the panel state file.
pub(crate) fn default_state_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("flyout")
            .join("panel_state.json");
    }
    std::env::temp_dir().join("flyout").join("panel_state.json")
}

/// JSON file store keeping the snapshot under the user config dir.
#[derive(Debug)]
pub(crate) struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PanelStore for JsonFileStore {
    fn load(&self) -> Result<Option<PersistedPanelState>, PanelStoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(None);
            },
            Err(err) => return Err(err.into()),
        };
        let state: PersistedPanelState = serde_json::from_str(&content)?;
        Ok(Some(state))
    }

    fn save(&self, state: PersistedPanelState) -> Result<(), PanelStoreError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let payload = serde_json::to_string_pretty(&state)?;
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, payload.as_bytes())?;
        std::fs::rename(tmp_path, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), PanelStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Resolve the initial open flag from the store, falling back on error.
///
/// A fresh snapshot wins, a stale one forces closed, a missing entry keeps
/// the configured default. Store failures are logged and start the panel
/// closed; they never propagate to the caller.
pub(crate) fn load_initial_open(
    store: &Arc<dyn PanelStore>,
    config: &PanelConfig,
) -> bool {
    match store.load() {
        Ok(Some(state)) if state.is_fresh(now_ms()) => state.is_open,
        Ok(Some(_)) => false,
        Ok(None) => config.default_open,
        Err(err) => {
            log::warn!("failed to load panel state, starting closed: {err}");
            false
        },
    }
}

/// Persist a snapshot through the store.
pub(crate) async fn persist_panel_state(
    store: Arc<dyn PanelStore>,
    state: PersistedPanelState,
) -> Result<(), PanelStoreError> {
    store.save(state)
}

/// In-memory store used by reducer and storage tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    entry: std::sync::Mutex<Option<PersistedPanelState>>,
}

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn with_entry(state: PersistedPanelState) -> Self {
        Self {
            entry: std::sync::Mutex::new(Some(state)),
        }
    }
}

#[cfg(test)]
impl PanelStore for MemoryStore {
    fn load(&self) -> Result<Option<PersistedPanelState>, PanelStoreError> {
        Ok(*self.entry.lock().expect("store lock"))
    }

    fn save(&self, state: PersistedPanelState) -> Result<(), PanelStoreError> {
        *self.entry.lock().expect("store lock") = Some(state);
        Ok(())
    }

    fn clear(&self) -> Result<(), PanelStoreError> {
        *self.entry.lock().expect("store lock") = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::sidebar::model::PANEL_STATE_TTL_MS;

    struct FailingStore;

    impl PanelStore for FailingStore {
        fn load(
            &self,
        ) -> Result<Option<PersistedPanelState>, PanelStoreError> {
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied)
                .into())
        }

        fn save(
            &self,
            _state: PersistedPanelState,
        ) -> Result<(), PanelStoreError> {
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied)
                .into())
        }

        fn clear(&self) -> Result<(), PanelStoreError> {
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied)
                .into())
        }
    }

    fn snapshot(is_open: bool, saved_at_ms: u64) -> PersistedPanelState {
        PersistedPanelState {
            version: PANEL_STATE_VERSION,
            is_open,
            saved_at_ms,
        }
    }

    #[test]
    fn given_snapshot_just_saved_when_checked_then_fresh() {
        let state = snapshot(true, 1_000);
        assert!(state.is_fresh(1_000 + PANEL_STATE_TTL_MS - 1));
    }

    #[test]
    fn given_snapshot_at_ttl_age_when_checked_then_stale() {
        let state = snapshot(true, 1_000);
        assert!(!state.is_fresh(1_000 + PANEL_STATE_TTL_MS));
    }

    #[test]
    fn given_snapshot_from_the_future_when_checked_then_fresh() {
        let state = snapshot(true, 5_000);
        assert!(state.is_fresh(1_000));
    }

    #[test]
    fn given_snapshot_when_serialized_then_round_trips() {
        let state = PersistedPanelState::now(true);
        let json = serde_json::to_string(&state).expect("should serialize");
        let parsed: PersistedPanelState =
            serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(parsed.version, PANEL_STATE_VERSION);
        assert!(parsed.is_open);
        assert_eq!(parsed.saved_at_ms, state.saved_at_ms);
    }

    #[test]
    fn given_file_store_when_saved_then_load_returns_snapshot() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonFileStore::new(dir.path().join("panel_state.json"));

        store.save(snapshot(true, 42)).expect("save");
        let loaded = store.load().expect("load").expect("entry");
        assert!(loaded.is_open);
        assert_eq!(loaded.saved_at_ms, 42);
    }

    #[test]
    fn given_missing_file_when_loaded_then_entry_is_absent() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonFileStore::new(dir.path().join("panel_state.json"));
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn given_malformed_file_when_loaded_then_error_is_returned() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("panel_state.json");
        std::fs::write(&path, "not json").expect("write");

        let store = JsonFileStore::new(path);
        assert!(store.load().is_err());
    }

    #[test]
    fn given_saved_entry_when_cleared_then_file_is_removed() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("panel_state.json");
        let store = JsonFileStore::new(path.clone());

        store.save(snapshot(false, 7)).expect("save");
        store.clear().expect("clear");
        assert!(!path.exists());
        // Clearing an absent entry stays quiet.
        store.clear().expect("clear again");
    }

    #[test]
    fn given_fresh_entry_when_initial_state_resolved_then_saved_value_wins() {
        let store: Arc<dyn PanelStore> =
            Arc::new(MemoryStore::with_entry(PersistedPanelState::now(true)));
        let config = PanelConfig::default();
        assert!(load_initial_open(&store, &config));
    }

    #[test]
    fn given_stale_entry_when_initial_state_resolved_then_panel_is_closed() {
        let store: Arc<dyn PanelStore> =
            Arc::new(MemoryStore::with_entry(snapshot(true, 0)));
        let config = PanelConfig {
            default_open: true,
            ..PanelConfig::default()
        };
        assert!(!load_initial_open(&store, &config));
    }

    #[test]
    fn given_missing_entry_when_initial_state_resolved_then_default_applies()
    {
        let store: Arc<dyn PanelStore> = Arc::new(MemoryStore::default());
        let config = PanelConfig {
            default_open: true,
            ..PanelConfig::default()
        };
        assert!(load_initial_open(&store, &config));
    }

    #[test]
    fn given_failing_store_when_initial_state_resolved_then_panel_is_closed()
    {
        let store: Arc<dyn PanelStore> = Arc::new(FailingStore);
        let config = PanelConfig {
            default_open: true,
            ..PanelConfig::default()
        };
        assert!(!load_initial_open(&store, &config));
    }
}
