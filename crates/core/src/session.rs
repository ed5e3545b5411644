//! Session identity for the topbar: hydration from persisted storage and
//! sign-out.
//!
//! Persistence and navigation are injected ([`SessionStore`], [`Router`]) so
//! the state machine runs unchanged against browser storage or a fake.

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ShellConfig;
use crate::error::ShellResult;
use crate::route::RoutePath;

// ─────────────────────────────────────────────────────────────────────────────
// External capabilities
// ─────────────────────────────────────────────────────────────────────────────

/// Keys the shell knows about in persisted storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SessionKey {
    AccessToken,
    RefreshToken,
    User,
}

impl SessionKey {
    /// Every session artifact, in removal order.
    pub const ALL: [SessionKey; 3] = [
        SessionKey::AccessToken,
        SessionKey::RefreshToken,
        SessionKey::User,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::AccessToken => "access_token",
            SessionKey::RefreshToken => "refresh_token",
            SessionKey::User => "user",
        }
    }
}

impl core::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String key-value persistence (browser `localStorage` or equivalent).
///
/// Methods take `&self`: backing stores are externally owned and mutate
/// through a handle.
pub trait SessionStore {
    fn get(&self, key: &str) -> ShellResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> ShellResult<()>;
    fn remove(&self, key: &str) -> ShellResult<()>;
}

/// Routing capability: where are we, and go somewhere else.
pub trait Router {
    /// Current absolute path, `None` until the router has resolved it.
    fn current_path(&self) -> Option<String>;
    fn navigate(&self, path: &str);
}

/// In-memory [`SessionStore`]. Used in tests and as the fallback when the
/// browser refuses access to its storage.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RefCell::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> ShellResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ShellResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ShellResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Profile
// ─────────────────────────────────────────────────────────────────────────────

/// Identity of the signed-in user, as persisted under `user`.
///
/// Unknown fields are ignored; `full_name`/`role` may be missing or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl SessionProfile {
    /// Parse a stored blob. Anything that is not a JSON object with
    /// string-or-null `full_name`/`role` yields `None`.
    pub fn parse(blob: &str) -> Option<Self> {
        let parsed = serde_json::from_str::<serde_json::Value>(blob).and_then(|value| {
            if value.is_object() {
                serde_json::from_value::<SessionProfile>(value).map(Some)
            } else {
                Ok(None)
            }
        });
        match parsed {
            Ok(Some(profile)) => Some(profile),
            Ok(None) => {
                tracing::warn!("stored session profile is not an object; ignoring");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "stored session profile is malformed; ignoring");
                None
            }
        }
    }

    /// `full_name` when present and not blank.
    pub fn display_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SessionBar
// ─────────────────────────────────────────────────────────────────────────────

/// Hydration state of one mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// No profile (initial, or hydration found nothing usable).
    Unhydrated { attempted: bool },
    /// Profile loaded; terminal for the mount.
    Hydrated(SessionProfile),
}

/// View-model behind the topbar identity block.
///
/// # Lifecycle
/// - Starts `Unhydrated` and renders the placeholder name.
/// - [`SessionBar::hydrate`] reads the `user` blob once; later calls on the
///   same mount never touch the store again.
/// - [`SessionBar::sign_out`] is the terminal action of a mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionBar {
    phase: SessionPhase,
    placeholder_name: String,
    greeting: String,
    login_path: RoutePath,
}

impl SessionBar {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            phase: SessionPhase::Unhydrated { attempted: false },
            placeholder_name: config.placeholder_name.clone(),
            greeting: config.greeting.clone(),
            login_path: config.login_path.clone(),
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn profile(&self) -> Option<&SessionProfile> {
        match &self.phase {
            SessionPhase::Hydrated(profile) => Some(profile),
            SessionPhase::Unhydrated { .. } => None,
        }
    }

    pub fn is_hydrated(&self) -> bool {
        matches!(self.phase, SessionPhase::Hydrated(_))
    }

    /// Populate the profile from `store`, at most once per mount.
    ///
    /// Missing, unreadable, or malformed data leaves the bar unhydrated.
    pub fn hydrate<S>(&mut self, store: &S) -> Option<&SessionProfile>
    where
        S: SessionStore + ?Sized,
    {
        if let SessionPhase::Unhydrated { attempted: false } = self.phase {
            self.phase = match read_profile(store) {
                Some(profile) => SessionPhase::Hydrated(profile),
                None => SessionPhase::Unhydrated { attempted: true },
            };
        }
        self.profile()
    }

    /// Name for the identity block; placeholder until a usable name exists.
    pub fn display_name(&self) -> &str {
        self.profile()
            .and_then(SessionProfile::display_name)
            .unwrap_or(&self.placeholder_name)
    }

    pub fn role(&self) -> Option<&str> {
        self.profile().and_then(|p| p.role.as_deref())
    }

    /// "Добро пожаловать, <name>".
    pub fn greeting(&self) -> String {
        format!("{}, {}", self.greeting, self.display_name())
    }

    /// Remove every session artifact, then go to the login page.
    ///
    /// All removals are attempted regardless of earlier failures; failures
    /// are logged only. Navigation always happens.
    pub fn sign_out<S, R>(&self, store: &S, router: &R)
    where
        S: SessionStore + ?Sized,
        R: Router + ?Sized,
    {
        tracing::info!("signing out");
        for key in SessionKey::ALL {
            if let Err(err) = store.remove(key.as_str()) {
                tracing::warn!(%key, error = %err, "failed to clear session artifact");
            }
        }
        router.navigate(self.login_path.as_str());
    }
}

fn read_profile<S>(store: &S) -> Option<SessionProfile>
where
    S: SessionStore + ?Sized,
{
    let blob = match store.get(SessionKey::User.as_str()) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            tracing::debug!("no stored session profile");
            return None;
        }
        Err(err) => {
            tracing::warn!(error = %err, "session storage unreadable; showing placeholder");
            return None;
        }
    };
    let profile = SessionProfile::parse(&blob)?;
    tracing::debug!(role = ?profile.role, "session profile hydrated");
    Some(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;
    use std::cell::Cell;

    #[derive(Default)]
    struct RecordingRouter {
        visited: RefCell<Vec<String>>,
    }

    impl Router for RecordingRouter {
        fn current_path(&self) -> Option<String> {
            self.visited.borrow().last().cloned()
        }

        fn navigate(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    /// Counts reads; every operation can be made to fail.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemorySessionStore,
        reads: Cell<usize>,
        removals: RefCell<Vec<String>>,
        fail: bool,
    }

    impl SessionStore for FlakyStore {
        fn get(&self, key: &str) -> ShellResult<Option<String>> {
            self.reads.set(self.reads.get() + 1);
            if self.fail {
                return Err(ShellError::storage("quota"));
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> ShellResult<()> {
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> ShellResult<()> {
            self.removals.borrow_mut().push(key.to_string());
            if self.fail {
                return Err(ShellError::storage("denied"));
            }
            self.inner.remove(key)
        }
    }

    fn fresh_bar() -> SessionBar {
        SessionBar::new(&ShellConfig::default())
    }

    fn seeded(user: &str) -> MemorySessionStore {
        MemorySessionStore::with_entries([
            ("access_token", "a.b.c"),
            ("refresh_token", "r.s.t"),
            ("user", user),
        ])
    }

    #[test]
    fn starts_unhydrated_with_placeholder() {
        let bar = fresh_bar();
        assert_eq!(bar.phase(), &SessionPhase::Unhydrated { attempted: false });
        assert_eq!(bar.display_name(), "Пользователь");
        assert_eq!(bar.role(), None);
        assert_eq!(bar.greeting(), "Добро пожаловать, Пользователь");
    }

    #[test]
    fn hydrates_profile_from_store() {
        let store = seeded(r#"{"full_name":"Иван Иванов","role":"HR"}"#);
        let mut bar = fresh_bar();

        let profile = bar.hydrate(&store).cloned();
        assert_eq!(
            profile,
            Some(SessionProfile {
                full_name: Some("Иван Иванов".to_string()),
                role: Some("HR".to_string()),
            })
        );
        assert!(bar.is_hydrated());
        assert_eq!(bar.display_name(), "Иван Иванов");
        assert_eq!(bar.role(), Some("HR"));
        assert_eq!(bar.greeting(), "Добро пожаловать, Иван Иванов");
    }

    #[test]
    fn missing_profile_keeps_placeholder() {
        let mut bar = fresh_bar();
        assert!(bar.hydrate(&MemorySessionStore::new()).is_none());
        assert_eq!(bar.phase(), &SessionPhase::Unhydrated { attempted: true });
        assert_eq!(bar.display_name(), "Пользователь");
    }

    #[test]
    fn malformed_profile_keeps_placeholder() {
        for blob in ["{not json", "null", "42", "[]", r#"["A","HR"]"#, r#"{"full_name":7}"#] {
            let mut bar = fresh_bar();
            assert!(bar.hydrate(&seeded(blob)).is_none(), "blob {blob:?}");
            assert_eq!(bar.display_name(), "Пользователь");
        }
    }

    #[test]
    fn blank_or_missing_name_falls_back_but_keeps_role() {
        let mut bar = fresh_bar();
        bar.hydrate(&seeded(r#"{"full_name":"  ","role":"Recruiter","id":3}"#));
        assert!(bar.is_hydrated());
        assert_eq!(bar.display_name(), "Пользователь");
        assert_eq!(bar.role(), Some("Recruiter"));

        let mut bar = SessionBar::new(&ShellConfig::default());
        bar.hydrate(&seeded("{}"));
        assert!(bar.is_hydrated());
        assert_eq!(bar.role(), None);
    }

    #[test]
    fn hydration_reads_store_once() {
        let store = FlakyStore::default();
        store.set("user", r#"{"full_name":"A"}"#).unwrap();
        let mut bar = fresh_bar();
        bar.hydrate(&store);
        bar.hydrate(&store);
        assert_eq!(store.reads.get(), 1);

        let empty = FlakyStore::default();
        let mut bar = SessionBar::new(&ShellConfig::default());
        bar.hydrate(&empty);
        empty.set("user", r#"{"full_name":"Late"}"#).unwrap();
        assert!(bar.hydrate(&empty).is_none());
        assert_eq!(empty.reads.get(), 1);
    }

    #[test]
    fn unreadable_store_degrades_silently() {
        let store = FlakyStore {
            fail: true,
            ..FlakyStore::default()
        };
        let mut bar = fresh_bar();
        assert!(bar.hydrate(&store).is_none());
        assert_eq!(bar.display_name(), "Пользователь");
    }

    #[test]
    fn sign_out_clears_artifacts_and_redirects() {
        let store = seeded(r#"{"full_name":"Иван Иванов","role":"HR"}"#);
        store.set("theme", "dark").unwrap();
        let router = RecordingRouter::default();
        let mut bar = fresh_bar();
        bar.hydrate(&store);

        bar.sign_out(&store, &router);

        for key in SessionKey::ALL {
            assert!(!store.contains(key.as_str()), "{key} still present");
        }
        assert!(store.contains("theme"));
        assert_eq!(*router.visited.borrow(), vec!["/login".to_string()]);
    }

    #[test]
    fn sign_out_without_session_still_redirects() {
        let store = MemorySessionStore::new();
        let router = RecordingRouter::default();
        fresh_bar().sign_out(&store, &router);
        assert!(store.is_empty());
        assert_eq!(router.current_path().as_deref(), Some("/login"));
    }

    #[test]
    fn sign_out_attempts_every_removal_even_when_failing() {
        let store = FlakyStore {
            fail: true,
            ..FlakyStore::default()
        };
        let router = RecordingRouter::default();
        fresh_bar().sign_out(&store, &router);

        assert_eq!(
            *store.removals.borrow(),
            vec!["access_token", "refresh_token", "user"]
        );
        assert_eq!(router.current_path().as_deref(), Some("/login"));
    }

    #[test]
    fn sign_out_uses_configured_login_path() {
        let config = ShellConfig {
            login_path: RoutePath::new("/auth").unwrap(),
            ..ShellConfig::default()
        };
        let router = RecordingRouter::default();
        SessionBar::new(&config).sign_out(&MemorySessionStore::new(), &router);
        assert_eq!(router.current_path().as_deref(), Some("/auth"));
    }

    #[test]
    fn session_keys_match_storage_names() {
        let names: Vec<&str> = SessionKey::ALL.iter().map(SessionKey::as_str).collect();
        assert_eq!(names, vec!["access_token", "refresh_token", "user"]);
    }
}
