//! Appearance mode state: the single light/dark source of truth.
//!
//! The store owns one `AppearanceMode` value for the whole process,
//! restores it from a persisted preference at startup, and broadcasts
//! every change synchronously to its subscribers. Persistence failures
//! are never fatal; they only mean the choice is not remembered.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The light/dark visual theme selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppearanceMode {
    #[default]
    Light,
    Dark,
}

impl AppearanceMode {
    /// Returns the CSS `data-theme` attribute value.
    ///
    /// The same token is used as the persisted preference value.
    pub fn css_value(&self) -> &'static str {
        match self {
            AppearanceMode::Light => "light",
            AppearanceMode::Dark => "dark",
        }
    }

    /// Returns the display name for the mode.
    pub fn display_name(&self) -> &'static str {
        match self {
            AppearanceMode::Light => "Light",
            AppearanceMode::Dark => "Dark",
        }
    }

    /// Returns the opposite mode.
    pub fn toggled(&self) -> Self {
        match self {
            AppearanceMode::Light => AppearanceMode::Dark,
            AppearanceMode::Dark => AppearanceMode::Light,
        }
    }

    /// Parses a persisted token. Anything but the two known tokens is
    /// treated as unset.
    pub fn from_persisted(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(AppearanceMode::Light),
            "dark" => Some(AppearanceMode::Dark),
            _ => None,
        }
    }
}

/// Errors from the preference storage backend.
///
/// Never fatal: callers log and fall back to in-memory state.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("failed to write preference: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode preference: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key-value persistence seam for the appearance preference.
pub trait PreferenceStore: Send {
    /// Reads the stored token, if any. Read failures surface as `None`.
    fn load(&self) -> Option<String>;

    /// Writes the token. Fire-and-forget from the store's perspective.
    fn save(&mut self, value: &str) -> Result<(), PreferenceError>;
}

/// On-disk settings document. Only the appearance preference today.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    appearance: Option<String>,
}

/// File-backed preference storage: a small JSON settings document.
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location for the settings file.
    ///
    /// `FOLIO_DATA_DIR` overrides the platform data directory.
    pub fn default_path() -> PathBuf {
        Self::data_dir().join("settings.json")
    }

    fn data_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("FOLIO_DATA_DIR") {
            return PathBuf::from(dir);
        }

        #[cfg(target_os = "macos")]
        {
            if let Ok(home) = std::env::var("HOME") {
                return PathBuf::from(home).join("Library/Application Support/folio");
            }
        }
        #[cfg(target_os = "linux")]
        {
            if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
                return PathBuf::from(xdg).join("folio");
            }
            if let Ok(home) = std::env::var("HOME") {
                return PathBuf::from(home).join(".local/share/folio");
            }
        }
        #[cfg(target_os = "windows")]
        {
            if let Ok(appdata) = std::env::var("APPDATA") {
                return PathBuf::from(appdata).join("folio");
            }
        }
        PathBuf::from(".").join("folio")
    }

    /// Removes the stored preference, if present.
    pub fn clear(&self) -> Result<(), PreferenceError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        // Unreadable JSON is the same as no preference at all.
        let settings: Settings = serde_json::from_str(&raw).ok()?;
        settings.appearance
    }

    fn save(&mut self, value: &str) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let settings = Settings {
            appearance: Some(value.to_string()),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&settings)?)?;
        Ok(())
    }
}

/// Handle returned by [`AppearanceStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Subscriber = Box<dyn FnMut(AppearanceMode) + Send>;

/// Owner of the process-wide appearance mode.
///
/// Exactly one mode value exists; it is mutated only by [`toggle`] and
/// every subscriber is notified synchronously before `toggle` returns.
///
/// [`toggle`]: AppearanceStore::toggle
pub struct AppearanceStore {
    mode: AppearanceMode,
    prefs: Box<dyn PreferenceStore>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: usize,
}

impl AppearanceStore {
    pub fn new(prefs: Box<dyn PreferenceStore>) -> Self {
        Self {
            mode: AppearanceMode::default(),
            prefs,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Resolves the initial mode: persisted-and-valid preference first,
    /// then the host-level default, then `Light`.
    pub fn initialize(&mut self, host_default: Option<AppearanceMode>) -> AppearanceMode {
        self.mode = self
            .prefs
            .load()
            .as_deref()
            .and_then(AppearanceMode::from_persisted)
            .or(host_default)
            .unwrap_or_default();
        self.mode
    }

    /// Current mode. Pure read.
    pub fn mode(&self) -> AppearanceMode {
        self.mode
    }

    /// Flips the mode, persists the new token, and notifies every
    /// subscriber before returning.
    pub fn toggle(&mut self) -> AppearanceMode {
        self.mode = self.mode.toggled();

        if let Err(err) = self.prefs.save(self.mode.css_value()) {
            tracing::warn!("appearance preference not persisted: {err}");
        }

        let mode = self.mode;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(mode);
        }
        mode
    }

    /// Registers a callback invoked on every mode change.
    pub fn subscribe(&mut self, f: impl FnMut(AppearanceMode) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Removes a subscriber. Removing an unknown id is a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// In-memory preference store for tests.
    struct MemoryPrefs {
        value: Arc<Mutex<Option<String>>>,
        fail_writes: bool,
    }

    impl MemoryPrefs {
        fn new(initial: Option<&str>) -> (Self, Arc<Mutex<Option<String>>>) {
            let value = Arc::new(Mutex::new(initial.map(str::to_string)));
            (
                Self {
                    value: value.clone(),
                    fail_writes: false,
                },
                value,
            )
        }

        fn failing() -> Self {
            Self {
                value: Arc::new(Mutex::new(None)),
                fail_writes: true,
            }
        }
    }

    impl PreferenceStore for MemoryPrefs {
        fn load(&self) -> Option<String> {
            self.value.lock().unwrap().clone()
        }

        fn save(&mut self, value: &str) -> Result<(), PreferenceError> {
            if self.fail_writes {
                return Err(PreferenceError::Io(std::io::Error::other("disk full")));
            }
            *self.value.lock().unwrap() = Some(value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_mode_tokens() {
        assert_eq!(AppearanceMode::Light.css_value(), "light");
        assert_eq!(AppearanceMode::Dark.css_value(), "dark");
        assert_eq!(AppearanceMode::from_persisted("dark"), Some(AppearanceMode::Dark));
        assert_eq!(AppearanceMode::from_persisted(" light "), Some(AppearanceMode::Light));
        assert_eq!(AppearanceMode::from_persisted("solarized"), None);
        assert_eq!(AppearanceMode::from_persisted(""), None);
    }

    #[test]
    fn test_initialize_defaults_to_light() {
        let (prefs, _) = MemoryPrefs::new(None);
        let mut store = AppearanceStore::new(Box::new(prefs));
        assert_eq!(store.initialize(None), AppearanceMode::Light);
        assert_eq!(store.mode(), AppearanceMode::Light);
    }

    #[test]
    fn test_initialize_reads_persisted() {
        let (prefs, _) = MemoryPrefs::new(Some("dark"));
        let mut store = AppearanceStore::new(Box::new(prefs));
        assert_eq!(store.initialize(None), AppearanceMode::Dark);
    }

    #[test]
    fn test_persisted_wins_over_host_default() {
        let (prefs, _) = MemoryPrefs::new(Some("light"));
        let mut store = AppearanceStore::new(Box::new(prefs));
        assert_eq!(store.initialize(Some(AppearanceMode::Dark)), AppearanceMode::Light);
    }

    #[test]
    fn test_host_default_used_when_unset() {
        let (prefs, _) = MemoryPrefs::new(None);
        let mut store = AppearanceStore::new(Box::new(prefs));
        assert_eq!(store.initialize(Some(AppearanceMode::Dark)), AppearanceMode::Dark);
    }

    #[test]
    fn test_malformed_persisted_treated_as_unset() {
        let (prefs, _) = MemoryPrefs::new(Some("blue"));
        let mut store = AppearanceStore::new(Box::new(prefs));
        assert_eq!(store.initialize(None), AppearanceMode::Light);
    }

    #[test]
    fn test_toggle_is_involution() {
        let (prefs, _) = MemoryPrefs::new(None);
        let mut store = AppearanceStore::new(Box::new(prefs));
        let initial = store.initialize(None);

        for n in 1..=6 {
            let mode = store.toggle();
            if n % 2 == 0 {
                assert_eq!(mode, initial);
            } else {
                assert_eq!(mode, initial.toggled());
            }
        }
    }

    #[test]
    fn test_toggle_persists_token() {
        let (prefs, value) = MemoryPrefs::new(None);
        let mut store = AppearanceStore::new(Box::new(prefs));
        store.initialize(None);

        store.toggle();
        assert_eq!(value.lock().unwrap().as_deref(), Some("dark"));
        store.toggle();
        assert_eq!(value.lock().unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_persistence_failure_is_not_fatal() {
        let mut store = AppearanceStore::new(Box::new(MemoryPrefs::failing()));
        store.initialize(None);

        assert_eq!(store.toggle(), AppearanceMode::Dark);
        assert_eq!(store.toggle(), AppearanceMode::Light);
    }

    #[test]
    fn test_subscribers_notified_synchronously() {
        let (prefs, _) = MemoryPrefs::new(None);
        let mut store = AppearanceStore::new(Box::new(prefs));
        store.initialize(None);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |mode| sink.lock().unwrap().push(mode));

        let returned = store.toggle();
        // The callback ran before toggle returned.
        assert_eq!(*seen.lock().unwrap(), vec![returned]);

        store.toggle();
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let (prefs, _) = MemoryPrefs::new(None);
        let mut store = AppearanceStore::new(Box::new(prefs));
        store.initialize(None);

        let seen = Arc::new(Mutex::new(0usize));
        let sink = seen.clone();
        let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

        store.toggle();
        store.unsubscribe(id);
        store.toggle();
        // Unsubscribing twice is a no-op.
        store.unsubscribe(id);
        store.toggle();

        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[test]
    fn test_file_preferences_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut prefs = FilePreferences::new(&path);

        assert_eq!(prefs.load(), None);
        prefs.save("dark").unwrap();
        assert_eq!(prefs.load().as_deref(), Some("dark"));

        prefs.clear().unwrap();
        assert_eq!(prefs.load(), None);
        // Clearing an already-missing file succeeds.
        prefs.clear().unwrap();
    }

    #[test]
    fn test_file_preferences_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/settings.json");
        let mut prefs = FilePreferences::new(&path);

        prefs.save("light").unwrap();
        assert_eq!(prefs.load().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_preferences_ignores_corrupt_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json at all").unwrap();

        let prefs = FilePreferences::new(&path);
        assert_eq!(prefs.load(), None);
    }
}
