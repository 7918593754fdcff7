//! Session lifecycle: credential verification, the durable session record,
//! and the expiry timer.
//!
//! The store owns its credential registry outright, so two store instances
//! never share account state. The authenticated identity is published
//! through a watch channel; the UI layer subscribes rather than polling.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::SessionConfig;
use crate::domain::{CredentialRecord, Role, Storage as _, StoragePtr, User, UserRegistry, USER_KEY};
use crate::error::StoreError;

/// Session store handle. Cheap to clone; all clones share one session.
#[derive(Clone)]
pub struct SessionStore {
    // ---
    inner: Arc<Inner>,
}

struct Inner {
    // ---
    storage: StoragePtr,
    state: Mutex<SessionState>,
    current_tx: watch::Sender<Option<User>>,

    /// How long a session lives after login/signup before auto-logout.
    expiry_window: Duration,

    /// Simulated request round-trip applied to login/signup.
    request_latency: Duration,
}

struct SessionState {
    // ---
    registry: UserRegistry,
    current_user: Option<User>,
    last_error: Option<StoreError>,
    expiry_task: Option<JoinHandle<()>>,
    is_loading: bool,
}

impl SessionStore {
    // ---
    pub fn new(storage: StoragePtr, registry: UserRegistry, config: &SessionConfig) -> Self {
        // ---
        let (current_tx, _) = watch::channel(None);

        Self {
            inner: Arc::new(Inner {
                storage,
                state: Mutex::new(SessionState {
                    registry,
                    current_user: None,
                    last_error: None,
                    expiry_task: None,
                    is_loading: false,
                }),
                current_tx,
                expiry_window: config.expiry_window,
                request_latency: config.request_latency,
            }),
        }
    }

    /// Rehydrates a prior session from durable storage.
    ///
    /// A readable record becomes the current session and re-arms a fresh
    /// expiry window; an unreadable one is discarded and the process starts
    /// anonymous. Must be called from within the runtime (the expiry timer
    /// is a spawned task).
    pub fn restore(&self) {
        // ---
        let stored = match self.inner.storage.get(USER_KEY) {
            Ok(stored) => stored,
            Err(err) => {
                tracing::error!("Failed to read session record: {err:?}");
                return;
            }
        };

        let Some(json) = stored else {
            return;
        };

        match serde_json::from_str::<User>(&json) {
            Ok(user) => {
                let mut state = self.state();
                tracing::info!("Restored session for user: {}", user.username);
                state.current_user = Some(user.clone());
                self.inner.current_tx.send_replace(Some(user));
                self.arm_expiry(&mut state);
            }
            Err(err) => {
                tracing::warn!("Discarding unreadable session record: {err}");
                if let Err(err) = self.inner.storage.remove(USER_KEY) {
                    tracing::error!("Failed to remove session record: {err:?}");
                }
            }
        }
    }

    /// Verifies the email/password pair against the registry and, on
    /// success, makes that identity the current session.
    ///
    /// Lookup is an exact match on both fields. The durable record is
    /// written before in-memory state changes, so a rejected write leaves
    /// the prior session intact.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, StoreError> {
        // ---
        self.begin_request();
        tokio::time::sleep(self.inner.request_latency).await;

        let result = self.verify_and_activate(email, password);
        self.finish_request(&result);
        result
    }

    /// Registers a new account and logs it in.
    ///
    /// Fails with [`StoreError::EmailAlreadyRegistered`] on an exact,
    /// case-sensitive email collision. The credential record joins the
    /// in-memory registry only; accounts created here do not survive a
    /// restart. Password complexity is the caller's concern.
    #[tracing::instrument(skip(self, password))]
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<User, StoreError> {
        // ---
        self.begin_request();
        tokio::time::sleep(self.inner.request_latency).await;

        let result = self.register_and_activate(username, email, password, role);
        self.finish_request(&result);
        result
    }

    /// Ends the current session: clears the identity, removes the durable
    /// record, and cancels the pending expiry timer. A no-op when no
    /// session is active.
    #[tracing::instrument(skip(self))]
    pub fn logout(&self) {
        // ---
        let mut state = self.state();

        if let Some(task) = state.expiry_task.take() {
            task.abort();
        }

        if state.current_user.is_none() {
            return;
        }

        if let Err(err) = self.inner.storage.remove(USER_KEY) {
            // The identity is cleared regardless so expiry cannot strand a
            // live session on a broken medium.
            tracing::error!("Failed to remove session record: {err:?}");
            state.last_error = Some(StoreError::persistence(err));
        }

        state.current_user = None;
        self.inner.current_tx.send_replace(None);
        tracing::info!("Logged out");
    }

    /// The currently authenticated identity, if any.
    pub fn current_user(&self) -> Option<User> {
        // ---
        self.state().current_user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        // ---
        self.state().current_user.is_some()
    }

    /// True while a login/signup round trip is pending.
    pub fn is_loading(&self) -> bool {
        // ---
        self.state().is_loading
    }

    pub fn last_error(&self) -> Option<StoreError> {
        // ---
        self.state().last_error.clone()
    }

    /// Watch the current identity. Receivers observe every login, logout,
    /// and expiry.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        // ---
        self.inner.current_tx.subscribe()
    }

    // ---

    fn state(&self) -> MutexGuard<'_, SessionState> {
        // ---
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin_request(&self) {
        // ---
        let mut state = self.state();
        state.is_loading = true;
        state.last_error = None;
    }

    fn finish_request(&self, result: &Result<User, StoreError>) {
        // ---
        let mut state = self.state();
        state.is_loading = false;
        state.last_error = result.as_ref().err().cloned();
    }

    fn verify_and_activate(&self, email: &str, password: &str) -> Result<User, StoreError> {
        // ---
        let mut state = self.state();

        let user = state
            .registry
            .find_by_email(email)
            .filter(|record| record.verify(password))
            .map(|record| record.identity().clone())
            .ok_or(StoreError::InvalidCredentials)?;

        self.persist_identity(&user)?;

        tracing::info!("Created session for user: {}", user.username);
        state.current_user = Some(user.clone());
        self.inner.current_tx.send_replace(Some(user.clone()));
        self.arm_expiry(&mut state);

        Ok(user)
    }

    fn register_and_activate(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<User, StoreError> {
        // ---
        let mut state = self.state();

        if state.registry.contains_email(email) {
            return Err(StoreError::EmailAlreadyRegistered);
        }

        let user = User::new(username.to_string(), email.to_string(), role);
        self.persist_identity(&user)?;

        state
            .registry
            .register(CredentialRecord::new(user.clone(), password.to_string()));

        tracing::info!("Created session for new user: {}", user.username);
        state.current_user = Some(user.clone());
        self.inner.current_tx.send_replace(Some(user.clone()));
        self.arm_expiry(&mut state);

        Ok(user)
    }

    fn persist_identity(&self, user: &User) -> Result<(), StoreError> {
        // ---
        let json = serde_json::to_string(user).map_err(StoreError::persistence)?;
        self.inner
            .storage
            .set(USER_KEY, &json)
            .map_err(StoreError::persistence)
    }

    /// Cancels any pending expiry timer and arms a fresh one. At most one
    /// timer is ever pending; on fire it behaves exactly like `logout`.
    fn arm_expiry(&self, state: &mut SessionState) {
        // ---
        if let Some(task) = state.expiry_task.take() {
            task.abort();
        }

        let store = self.clone();
        let window = self.inner.expiry_window;
        state.expiry_task = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            tracing::info!("Session expired");
            store.logout();
        }));
    }
}
